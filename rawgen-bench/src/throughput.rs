//! Generation throughput measurement.

use rawgen_codegen::{CodegenError, Generator, GeneratorConfig};
use rawgen_schema::SchemaIr;
use std::time::{Duration, Instant};

/// Result of a generation benchmark.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    /// Total units rendered.
    pub units: u64,
    /// Total bytes rendered.
    pub bytes: u64,
    /// Total duration.
    pub duration: Duration,
}

impl GenerationResult {
    /// Returns units per second.
    #[must_use]
    pub fn units_per_second(&self) -> f64 {
        self.units as f64 / self.duration.as_secs_f64()
    }

    /// Returns bytes per second.
    #[must_use]
    pub fn bytes_per_second(&self) -> f64 {
        self.bytes as f64 / self.duration.as_secs_f64()
    }

    /// Returns megabytes per second.
    #[must_use]
    pub fn mb_per_second(&self) -> f64 {
        self.bytes_per_second() / (1024.0 * 1024.0)
    }
}

/// Generates `ir` `runs` times and totals the output.
///
/// # Errors
/// Returns `CodegenError` if any run fails.
pub fn run_generation_benchmark(
    ir: &SchemaIr,
    config: &GeneratorConfig,
    runs: u32,
) -> Result<GenerationResult, CodegenError> {
    let generator = Generator::new(ir, config);
    let mut units = 0u64;
    let mut bytes = 0u64;
    let start = Instant::now();

    for _ in 0..runs {
        for unit in generator.generate()? {
            units += 1;
            bytes += unit.contents.len() as u64;
        }
    }

    Ok(GenerationResult {
        units,
        bytes,
        duration: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::synthetic_schema;
    use rawgen_codegen::TargetKind;

    #[test]
    fn test_generation_result_calculations() {
        let result = GenerationResult {
            units: 1000,
            bytes: 1024 * 1024,
            duration: Duration::from_secs(1),
        };

        assert!((result.units_per_second() - 1000.0).abs() < 0.001);
        assert!((result.mb_per_second() - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_run_generation_benchmark() {
        let ir = SchemaIr::from_schema(&synthetic_schema(2, 3));
        let config = GeneratorConfig::new().target(TargetKind::Rust);
        let result = run_generation_benchmark(&ir, &config, 2).unwrap();

        // 2 enums + 3 structs with 2 hoisted shapes each + the index unit.
        assert_eq!(result.units, 2 * (2 + 9 + 1));
        assert!(result.bytes > 0);
    }
}
