//! Error types for worldgen-chart.
//!
//! This module provides a unified error handling approach using `thiserror`.
//! Only construction of the data model can fail; rendering and tooltip
//! queries degrade instead of returning errors.

use thiserror::Error;

/// Result type alias for worldgen-chart operations.
pub type Result<T> = std::result::Result<T, ChartError>;

/// Errors that can occur when building chart data.
#[derive(Debug, Error, PartialEq)]
pub enum ChartError {
    /// A chance sample was negative, NaN or infinite.
    #[error("Invalid chance sample {value} at index {index}")]
    InvalidSample {
        /// Position of the sample in the curve.
        index: usize,
        /// The rejected value.
        value: f32,
    },

    /// The curve length does not cover the coordinate range.
    #[error("Curve has {samples} samples but Y range {min_y}..={max_y} needs {expected}")]
    RangeMismatch {
        /// Lowest Y level.
        min_y: i32,
        /// Highest Y level.
        max_y: i32,
        /// Samples actually supplied.
        samples: usize,
        /// Samples the range needs.
        expected: i64,
    },

    /// A colour string could not be parsed.
    #[error("Invalid colour: {0}")]
    InvalidColour(String),
}

impl ChartError {
    /// Create an InvalidSample error.
    pub fn invalid_sample(index: usize, value: f32) -> Self {
        Self::InvalidSample { index, value }
    }

    /// Create a RangeMismatch error.
    pub fn range_mismatch(min_y: i32, max_y: i32, samples: usize) -> Self {
        Self::RangeMismatch {
            min_y,
            max_y,
            samples,
            expected: i64::from(max_y) - i64::from(min_y) + 1,
        }
    }

    /// Create an InvalidColour error.
    pub fn invalid_colour(input: impl Into<String>) -> Self {
        Self::InvalidColour(input.into())
    }
}
