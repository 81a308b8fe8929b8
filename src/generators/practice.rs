// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Random ear-training prompts drawn from a scale.
//!
//! Every operation is bounded: callers ask for a fixed number of prompts and
//! pace playback themselves.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::trace;

use crate::error::{Result, TheoryError};
use crate::music::{Chord, ChordProgression, Scale};

/// An interval label paired with the note it names in the scale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalPrompt {
    /// Interval label, e.g. "b3"
    pub label: &'static str,
    /// Spelled note at that degree
    pub note: &'static str,
}

/// Random note, interval and chord picker
pub struct PracticeGenerator {
    rng: StdRng,
}

impl PracticeGenerator {
    /// Create a generator seeded from system entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a generator with a fixed seed for reproducible drills
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn random_degree(&mut self, scale: &Scale) -> usize {
        self.rng.gen_range(1..=scale.len())
    }

    /// Pick a random note of the scale
    pub fn random_note(&mut self, scale: &Scale) -> Result<&'static str> {
        let degree = self.random_degree(scale);
        scale.note_at_degree(degree)
    }

    /// Pick a random degree, returned as its interval label and note
    pub fn random_interval(&mut self, scale: &Scale) -> Result<IntervalPrompt> {
        let degree = self.random_degree(scale);
        let labels = scale.get_intervals()?;
        let prompt = IntervalPrompt {
            label: labels[degree - 1],
            note: scale.note_at_degree(degree)?,
        };
        trace!(label = prompt.label, note = prompt.note, "interval picked");
        Ok(prompt)
    }

    /// Sample between `lower` and `upper` distinct interval labels.
    ///
    /// `upper` is clamped to the number of degrees in the scale.
    pub fn random_interval_sequence(
        &mut self,
        scale: &Scale,
        lower: usize,
        upper: usize,
    ) -> Result<Vec<&'static str>> {
        let upper = upper.min(scale.len());
        if lower > upper {
            return Err(TheoryError::InvalidSequenceBounds { lower, upper });
        }
        let length = self.rng.gen_range(lower..=upper);
        let labels = scale.get_intervals()?;
        Ok(labels
            .choose_multiple(&mut self.rng, length)
            .copied()
            .collect())
    }

    /// Triad on a random degree of the scale
    pub fn random_chord(&mut self, scale: &Scale) -> Result<Chord> {
        let mut progression = ChordProgression::new(*scale)?;
        let degree = self.random_degree(scale);
        progression.add_chord(degree)?;
        Ok(progression.entries()[0].chord)
    }

    /// Progression of `length` chords on random degrees
    pub fn random_progression(&mut self, scale: &Scale, length: usize) -> Result<ChordProgression> {
        let mut progression = ChordProgression::new(*scale)?;
        for _ in 0..length {
            let degree = self.random_degree(scale);
            progression.add_chord(degree)?;
        }
        Ok(progression)
    }

    /// A fixed number of interval prompts, one per beat of a drill
    pub fn drill(&mut self, scale: &Scale, iterations: usize) -> Result<Vec<IntervalPrompt>> {
        (0..iterations).map(|_| self.random_interval(scale)).collect()
    }
}

impl Default for PracticeGenerator {
    fn default() -> Self {
        Self::new()
    }
}
