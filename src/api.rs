//! Web API Module
//!
//! Exposes the classification endpoints for the tracker frontend.
//! All endpoints return JSON and require no authentication (prototype mode).

use crate::classifier::{Classifier, ClassifierConfig};
use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

// ============================================================
// APPLICATION STATE
// ============================================================

/// Shared application state: the classifier and nothing else. The client
/// owns its application records; this service never sees them.
pub struct AppState {
    pub classifier: Classifier,
}

impl AppState {
    pub fn new(config: ClassifierConfig) -> Self {
        Self {
            classifier: Classifier::new(config),
        }
    }
}

// ============================================================
// API REQUEST TYPES
// ============================================================

#[derive(Deserialize)]
pub struct ClassifyRequest {
    /// Optional at the deserialization layer so a missing key yields the
    /// fixed 400 body instead of a deserializer message
    pub title: Option<String>,
    pub description: Option<String>,
    pub major: Option<String>,
}

// ============================================================
// API HANDLERS
// ============================================================

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "Internship Classifier API",
        "version": "0.1.0"
    }))
}

/// Active mode and credential presence, for the frontend status badge.
/// Read-only; performs no classification.
async fn classify_status(data: web::Data<Arc<AppState>>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "mode": data.classifier.mode().as_str(),
        "hasKey": data.classifier.has_key(),
    }))
}

/// Classify one application (called by the client on create/edit)
async fn classify(
    data: web::Data<Arc<AppState>>,
    req: web::Json<ClassifyRequest>,
) -> impl Responder {
    let title = req.title.as_deref().unwrap_or("");
    if title.is_empty() {
        return HttpResponse::BadRequest().json(json!({ "error": "Missing title" }));
    }

    let description = req.description.as_deref().unwrap_or("");
    let major = req.major.as_deref().unwrap_or("");

    let outcome = data.classifier.classify(title, description, major).await;
    HttpResponse::Ok().json(outcome)
}

// ============================================================
// SERVER CONFIGURATION
// ============================================================

/// Route table, shared between the server and endpoint tests.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/api/classify", web::post().to(classify))
        .route("/api/classify", web::get().to(classify_status));
}

/// Configure and run the API server
pub async fn run_server(host: &str, port: u16, config: ClassifierConfig) -> std::io::Result<()> {
    let state = Arc::new(AppState::new(config));

    println!("🚀 Internship Classifier API starting at http://{}:{}", host, port);
    println!("📚 API Endpoints:");
    println!("   POST /api/classify   - Classify an application");
    println!("   GET  /api/classify   - Active mode / key status");
    println!("   GET  /health         - Health check");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();

        App::new()
            .wrap(cors)
            .app_data(web::Data::new(state.clone()))
            .configure(routes)
    })
    .bind((host, port))?
    .run()
    .await
}
