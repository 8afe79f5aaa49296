//! Timing statistics
//!
//! Mean and population standard deviation over a sample sequence. The
//! population form (no Bessel correction) matches what the benchmark reports
//! have always contained.

use crate::common::{BenchError, BenchResult};

/// Arithmetic mean. Fails on an empty sequence.
pub fn mean(samples: &[f64]) -> BenchResult<f64> {
    if samples.is_empty() {
        return Err(BenchError::EmptySampleSet);
    }
    Ok(samples.iter().sum::<f64>() / samples.len() as f64)
}

/// Population standard deviation: sqrt of the mean squared deviation.
/// Fails on an empty sequence.
pub fn std_dev(samples: &[f64]) -> BenchResult<f64> {
    let mean = mean(samples)?;
    let diff_sq: f64 = samples.iter().map(|x| (x - mean).powi(2)).sum();
    Ok((diff_sq / samples.len() as f64).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_sequence() {
        let samples = [3.25, 3.25, 3.25];
        assert_eq!(mean(&samples).unwrap(), 3.25);
        assert_eq!(std_dev(&samples).unwrap(), 0.0);
    }

    #[test]
    fn test_known_values() {
        let samples = [1.0, 2.0, 3.0, 4.0];
        assert!((mean(&samples).unwrap() - 2.5).abs() < 1e-12);
        // population std of 1..4 is sqrt(1.25)
        assert!((std_dev(&samples).unwrap() - 1.118033988749895).abs() < 1e-12);
    }

    #[test]
    fn test_single_sample() {
        let samples = [0.01];
        assert_eq!(mean(&samples).unwrap(), 0.01);
        assert_eq!(std_dev(&samples).unwrap(), 0.0);
    }

    #[test]
    fn test_empty_sequence_fails() {
        assert!(matches!(mean(&[]), Err(BenchError::EmptySampleSet)));
        assert!(matches!(std_dev(&[]), Err(BenchError::EmptySampleSet)));
    }
}
