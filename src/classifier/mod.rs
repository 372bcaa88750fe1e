//! Classifier Module - Core of the Labeling Backend
//!
//! Implements the classification strategy chain:
//! - Types: request/result structures, mode and source tags
//! - Rules: ordered keyword rules per major group, first match wins
//! - Model: single chat-completion call with deterministic decoding
//! - Service: mode dispatch and the rules fallback on model failure

pub mod model;
pub mod rules;
pub mod service;
pub mod types;

pub use service::*;
pub use types::*;
