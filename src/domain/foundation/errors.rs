//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

use super::{CriterionId, ProfileId};

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        actual: f64,
    },

    #[error("Field '{field}' must be a finite number")]
    NotFinite { field: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, actual: f64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates a non-finite value validation error.
    pub fn not_finite(field: impl Into<String>) -> Self {
        ValidationError::NotFinite { field: field.into() }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Fatal input errors of a sorting run.
///
/// Every variant is detected before any comparison runs and names the
/// offending criterion or profile. None of them is transient.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ElectreError {
    #[error(
        "Thresholds of criterion '{criterion}' must satisfy 0 <= q <= p <= v, got q={q}, p={p}, v={v}"
    )]
    MalformedThresholds {
        criterion: CriterionId,
        q: f64,
        p: f64,
        v: f64,
    },

    #[error("Profile '{upper}' is below profile '{lower}' on criterion '{criterion}'")]
    NonMonotonicProfiles {
        criterion: CriterionId,
        lower: ProfileId,
        upper: ProfileId,
    },

    #[error("Invalid weights: {reason}")]
    InvalidWeights {
        criterion: Option<CriterionId>,
        reason: String,
    },

    #[error("Credibility threshold must be within [0.5, 1], got {value}")]
    InvalidCredibilityThreshold { value: f64 },

    #[error("Dimension mismatch in {table} for '{subject}': {reason}")]
    DimensionMismatch {
        table: &'static str,
        subject: String,
        reason: &'static str,
    },

    #[error("{what} must not be empty")]
    EmptyInput { what: &'static str },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ElectreError {
    /// Creates an invalid weights error not tied to a single criterion.
    pub fn invalid_weights(reason: impl Into<String>) -> Self {
        ElectreError::InvalidWeights {
            criterion: None,
            reason: reason.into(),
        }
    }

    /// Creates a dimension mismatch error.
    pub fn dimension_mismatch(
        table: &'static str,
        subject: impl fmt::Display,
        reason: &'static str,
    ) -> Self {
        ElectreError::DimensionMismatch {
            table,
            subject: subject.to_string(),
            reason,
        }
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ElectreError::MalformedThresholds { .. } => ErrorCode::MalformedThresholds,
            ElectreError::NonMonotonicProfiles { .. } => ErrorCode::NonMonotonicProfiles,
            ElectreError::InvalidWeights { .. } => ErrorCode::InvalidWeights,
            ElectreError::InvalidCredibilityThreshold { .. } => {
                ErrorCode::InvalidCredibilityThreshold
            }
            ElectreError::DimensionMismatch { .. } => ErrorCode::DimensionMismatch,
            ElectreError::EmptyInput { .. } => ErrorCode::EmptyInput,
            ElectreError::Validation(_) => ErrorCode::ValidationFailed,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    EmptyInput,

    // Model errors
    MalformedThresholds,
    NonMonotonicProfiles,
    InvalidWeights,
    InvalidCredibilityThreshold,
    DimensionMismatch,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::EmptyInput => "EMPTY_INPUT",
            ErrorCode::MalformedThresholds => "MALFORMED_THRESHOLDS",
            ErrorCode::NonMonotonicProfiles => "NON_MONOTONIC_PROFILES",
            ErrorCode::InvalidWeights => "INVALID_WEIGHTS",
            ErrorCode::InvalidCredibilityThreshold => "INVALID_CREDIBILITY_THRESHOLD",
            ErrorCode::DimensionMismatch => "DIMENSION_MISMATCH",
        };
        write!(f, "{}", s)
    }
}
