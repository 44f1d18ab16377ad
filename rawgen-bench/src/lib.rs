//! # rawgen Bench
//!
//! Benchmarking utilities for rawgen generation performance.

pub mod schema;
pub mod throughput;

pub use schema::synthetic_schema;
pub use throughput::{GenerationResult, run_generation_benchmark};
