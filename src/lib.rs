// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod factorizer;
pub mod integer_math;

pub use crate::core::factorization::Factorization;
pub use crate::error::FactorError;
pub use crate::factorizer::{
    factor, factor_parallel, factor_serial, factor_with_config, factor_with_observer,
};
