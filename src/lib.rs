//! Internship Classifier Backend
//!
//! Assigns a category/subcategory label to internship applications using
//! one of three interchangeable strategies:
//! - MOCK: fixed canned result (UI demos, free)
//! - RULES: keyword-based classifier (free, local)
//! - OPENAI: model API classification with automatic rules fallback

pub mod api;
pub mod classifier;

pub use classifier::*;
