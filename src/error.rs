// src/error.rs

use std::fmt;

/// Crate error enum.
/// Everything here is recoverable by the caller; nothing is fatal to the
/// hosting process.
#[derive(Debug)]
pub enum AppError {
    /// Unknown or already-consumed session identifier.
    SessionNotFound(String),

    /// The session existed but outlived its TTL.
    SessionExpired(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::SessionNotFound(id) => write!(f, "Invalid session: {}", id),
            AppError::SessionExpired(id) => write!(f, "Session expired: {}", id),
        }
    }
}

impl std::error::Error for AppError {}
