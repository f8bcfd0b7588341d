//! Domain Value Objects

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// ============================================================================
// Enrollment Status
// ============================================================================

/// Standing of an account within a competition
///
/// The closed set mirrors the lifecycle: everyone starts `joined`;
/// a winner-selection pass rewrites every enrollment of the competition
/// to either `winner` or `participant`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnrollmentStatus {
    #[default]
    Joined,
    Participant,
    Winner,
}

impl EnrollmentStatus {
    /// Storage representation (smallint)
    pub const fn id(&self) -> i16 {
        match self {
            EnrollmentStatus::Joined => 0,
            EnrollmentStatus::Participant => 1,
            EnrollmentStatus::Winner => 2,
        }
    }

    /// API representation
    pub const fn code(&self) -> &'static str {
        match self {
            EnrollmentStatus::Joined => "joined",
            EnrollmentStatus::Participant => "participant",
            EnrollmentStatus::Winner => "winner",
        }
    }

    /// Reconstruct from the storage representation
    pub const fn from_id(id: i16) -> Option<Self> {
        match id {
            0 => Some(EnrollmentStatus::Joined),
            1 => Some(EnrollmentStatus::Participant),
            2 => Some(EnrollmentStatus::Winner),
            _ => None,
        }
    }
}

impl fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ============================================================================
// Entry Fee
// ============================================================================

/// Entry fee validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryFeeError {
    #[error("Please enter a valid fee")]
    NotNumeric,

    #[error("Fee must not be negative")]
    Negative,
}

/// Validated competition entry fee
///
/// Guaranteed finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryFee(f64);

impl EntryFee {
    /// Create from an already-numeric value
    pub fn new(value: f64) -> Result<Self, EntryFeeError> {
        if !value.is_finite() {
            return Err(EntryFeeError::NotNumeric);
        }
        if value < 0.0 {
            return Err(EntryFeeError::Negative);
        }
        Ok(Self(value))
    }

    /// Parse from form input
    ///
    /// Fees arrive as free text; anything that does not parse to a
    /// finite non-negative float is rejected.
    pub fn parse(raw: &str) -> Result<Self, EntryFeeError> {
        let value: f64 = raw.trim().parse().map_err(|_| EntryFeeError::NotNumeric)?;
        Self::new(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}
