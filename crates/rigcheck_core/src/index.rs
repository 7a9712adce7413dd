//! Performance index functions
//!
//! Catalog scores are linear 0-100 ratings. Everything downstream works on a
//! nonlinear index instead: GPU throughput falls off much faster than the raw
//! score suggests at the low end, so its exponent is steeper than the CPU's.

pub const CPU_GAMMA: f64 = 1.25;
pub const GPU_GAMMA: f64 = 2.3;

#[must_use]
pub fn cpu_index(score: f64) -> f64 {
    (score / 100.0).powf(CPU_GAMMA)
}

#[must_use]
pub fn gpu_index(score: f64) -> f64 {
    (score / 100.0).powf(GPU_GAMMA)
}

/// Rescale an index relative to a reference GPU's index.
///
/// `reference` is the reference GPU's [`gpu_index`] at the same resolution and
/// `multiplier` the known performance relative to it.
#[must_use]
pub fn relative_gpu_index(reference: f64, multiplier: f64) -> f64 {
    reference * multiplier
}

/// Engine soft-ceiling scale: weak CPUs cannot push an engine to its cap
#[must_use]
pub fn cpu_ceiling_scale(score: f64) -> f64 {
    0.6 + 0.5 * (score / 100.0).powf(0.7)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_endpoints() {
        assert_eq!(cpu_index(100.0), 1.0);
        assert_eq!(gpu_index(100.0), 1.0);
        assert_eq!(cpu_index(0.0), 0.0);
        assert_eq!(gpu_index(0.0), 0.0);
        assert!((cpu_ceiling_scale(100.0) - 1.1).abs() < 1e-12);
        assert!((cpu_ceiling_scale(0.0) - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_gpu_index_is_steeper_than_cpu() {
        for score in [20.0, 40.0, 60.0, 80.0] {
            assert!(gpu_index(score) < cpu_index(score));
        }
        // Monotonic in score
        let values: Vec<f64> = (0..=10).map(|s| gpu_index(f64::from(s) * 10.0)).collect();
        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_relative_index() {
        let reference = gpu_index(80.0);
        assert!((relative_gpu_index(reference, 1.0) - reference).abs() < 1e-12);
        assert!(relative_gpu_index(reference, 1.1) > reference);
    }
}
