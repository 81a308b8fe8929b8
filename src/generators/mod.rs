// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Practice generators built on the theory core.
//!
//! These pick random notes, intervals and chords from a scale for
//! ear-training drills. Playback and pacing belong to the caller.

pub mod practice;

pub use practice::{IntervalPrompt, PracticeGenerator};
