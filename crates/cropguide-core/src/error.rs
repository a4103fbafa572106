// Author: Dustin Pilgrim
// License: MIT

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("colour must start with #")]
    ColourPrefix,

    #[error("colour must be 6 or 8 hex digits (RRGGBB or AARRGGBB)")]
    ColourLength,

    #[error("invalid hex colour")]
    ColourDigits,

    #[error("{field} must be a finite, non-negative number (got {value})")]
    InvalidMetric { field: &'static str, value: f64 },

    #[error("{field} must be greater than zero (got {value})")]
    NonPositive { field: &'static str, value: f64 },

    #[error("expected one of {expected}, got \"{got}\"")]
    UnknownVariant { expected: &'static str, got: String },
}
