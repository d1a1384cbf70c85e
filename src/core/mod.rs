// src/core/mod.rs

pub mod cancellation_token;
pub mod factorization;
pub mod progress;
