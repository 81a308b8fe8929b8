// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory core.
//!
//! Pitch classes, scales and modes, interval labels, scale set algebra,
//! and diatonic chord progressions.

pub mod chord;
pub mod interval;
pub mod pitch;
pub mod scale;
pub mod set_ops;

pub use chord::{Chord, ChordProgression, ChordQuality, ProgressionEntry};
pub use pitch::PitchClass;
pub use scale::{Scale, ScaleType};
