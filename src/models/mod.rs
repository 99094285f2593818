// src/models/mod.rs

pub mod assessment;
pub mod candidate;
pub mod question;
