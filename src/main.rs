//! Internship Classifier Backend - Main Entry Point
//!
//! Starts the web API server for the internship application tracker.

use intern_classifier::api::run_server;
use intern_classifier::classifier::ClassifierConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logging
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    println!("╔════════════════════════════════════════════════╗");
    println!("║   Internship Tracker - Classification API      ║");
    println!("║   MOCK / RULES / OPENAI                        ║");
    println!("╚════════════════════════════════════════════════╝");
    println!();

    // Mode is resolved once here and never re-read per request
    let config = ClassifierConfig::from_env();
    println!(
        "Classifier mode: {} (API key configured: {})",
        config.mode.as_str(),
        config.has_key()
    );

    // Start server
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .unwrap_or(8080);

    run_server(&host, port, config).await
}
