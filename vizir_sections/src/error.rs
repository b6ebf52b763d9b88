// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by sectioned-axis operations.

use crate::{AxisOrient, Range};

/// Errors returned by sectioned-axis layout, drawing and configuration.
///
/// None of these are transient: a failed layout pass should be skipped or aborted by the host.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum AxisError {
    /// An argument was outside its accepted domain (the axis is left unmodified).
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// The offending parameter.
        name: &'static str,
        /// What the parameter must satisfy.
        reason: &'static str,
    },
    /// Sectioned axes only lay out and draw along the left or right edge.
    #[error("sectioned axes cannot be placed on the {0:?} edge")]
    UnsupportedOrientation(AxisOrient),
    /// A value was projected from a range that does not contain it.
    #[error("value {value} lies outside {range:?}")]
    OutOfRange {
        /// The value that was projected.
        value: f64,
        /// The declared source range.
        range: Range,
    },
}

impl AxisError {
    pub(crate) fn invalid(name: &'static str, reason: &'static str) -> Self {
        Self::InvalidArgument { name, reason }
    }
}

/// Passes `value` through if it is finite and not negative.
pub(crate) fn check_non_negative(name: &'static str, value: f64) -> Result<f64, AxisError> {
    if !value.is_finite() || value < 0.0 {
        return Err(AxisError::invalid(name, "must be non-negative and finite"));
    }
    Ok(value)
}
