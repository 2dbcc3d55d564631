//! Sampled chance curve.

use crate::error::{ChartError, Result};

/// Chance samples, one per integer Y level of an entry's range.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityCurve {
    samples: Vec<f32>,
}

impl ProbabilityCurve {
    /// Create a curve, rejecting negative or non-finite samples.
    pub fn new(samples: Vec<f32>) -> Result<Self> {
        if let Some((index, &value)) = samples
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite() || **v < 0.0)
        {
            return Err(ChartError::invalid_sample(index, value));
        }
        Ok(Self { samples })
    }

    /// All samples in Y order.
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if the curve has no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample at `index`, if any.
    pub fn get(&self, index: usize) -> Option<f32> {
        self.samples.get(index).copied()
    }

    /// Largest sample, or 0 for an empty curve.
    pub fn max(&self) -> f64 {
        self.samples
            .iter()
            .fold(0.0_f64, |max, &v| max.max(f64::from(v)))
    }
}
