// src/lib.rs

pub mod config;
pub mod error;
pub mod grading;
pub mod models;
pub mod scoring;
pub mod search;
pub mod service;
pub mod session;

// Re-export the orchestration entry point for convenience
pub use service::AssessmentService;
