// src/integer_math/mod.rs

pub mod candidate_range;
pub mod primality;
