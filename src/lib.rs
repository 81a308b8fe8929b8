// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory computation engine.
//!
//! Builds scales and modes from a root and an accidental preference, labels
//! their degrees as intervals, compares scales as note sets, and assembles
//! roman-numeral chord progressions. Everything in [`music`] is pure and
//! synchronous; [`generators`] and [`config`] sit on top of it for practice
//! drills and session files.

pub mod config;
pub mod error;
pub mod generators;
pub mod logging;
pub mod music;

pub use error::TheoryError;
pub use music::{Chord, ChordProgression, ChordQuality, PitchClass, Scale, ScaleType};
