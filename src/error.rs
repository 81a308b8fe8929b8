// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for the theory engine.

use crate::music::ScaleType;

/// Errors raised by pitch, scale, interval and chord operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TheoryError {
    #[error("invalid pitch class: {0:?}")]
    InvalidPitchClass(String),
    #[error("scale degree {degree} out of range (scale has {len} degrees)")]
    OutOfRangeDegree { degree: usize, len: usize },
    #[error("no interval label for semitone offset {0}")]
    UnsupportedOffset(u8),
    #[error("{0} scale has no chord quality table")]
    MissingChordQualities(ScaleType),
    #[error("unknown scale type: {0:?}")]
    UnknownScaleType(String),
    #[error("invalid sequence bounds: {lower}..={upper}")]
    InvalidSequenceBounds { lower: usize, upper: usize },
}

/// Result alias for theory operations
pub type Result<T> = std::result::Result<T, TheoryError>;
