// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Practice session configuration.
//!
//! A session file names a key, a scale type and accidental preference, a
//! tempo, an optional chord progression and the bounds for interval drills.
//! Files are YAML unless the extension is `.toml`.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::music::{ChordProgression, Scale, ScaleType};

/// Root of a session file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SessionFile {
    /// Key and tempo
    #[serde(default)]
    pub session: SessionConfig,
    /// Chord progression as 1-based scale degrees
    #[serde(default)]
    pub progression: Vec<usize>,
    /// Interval drill settings
    #[serde(default)]
    pub drill: DrillConfig,
}

impl SessionFile {
    /// Load a session from a YAML or TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read session file: {:?}", path))?;
        let session = if path.extension().is_some_and(|ext| ext == "toml") {
            Self::from_toml(&contents)?
        } else {
            Self::from_yaml(&contents)?
        };
        info!(
            path = %path.display(),
            key = %session.session.key,
            scale = %session.session.scale,
            "session loaded"
        );
        Ok(session)
    }

    /// Parse a session from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse session YAML")
    }

    /// Parse a session from a TOML string
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse session TOML")
    }

    /// Serialize to a YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize session to YAML")
    }

    /// Save the session as YAML
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write session file: {:?}", path.as_ref()))
    }

    /// Build the session's scale
    pub fn to_scale(&self) -> Result<Scale> {
        self.session.to_scale()
    }

    /// Build the configured chord progression over the session's scale
    pub fn build_progression(&self) -> Result<ChordProgression> {
        let scale = self.to_scale()?;
        let mut progression = ChordProgression::new(scale)
            .with_context(|| format!("Cannot build a progression in {}", scale))?;
        for &degree in &self.progression {
            progression
                .add_chord(degree)
                .with_context(|| format!("Invalid progression degree {}", degree))?;
        }
        Ok(progression)
    }

    /// Check the session for errors without building anything else
    pub fn validate(&self) -> Result<()> {
        self.session.beat_interval()?;
        if self.drill.min_sequence > self.drill.max_sequence {
            bail!(
                "Drill sequence bounds are reversed: {} > {}",
                self.drill.min_sequence,
                self.drill.max_sequence
            );
        }
        if self.progression.is_empty() {
            self.to_scale()?;
        } else {
            self.build_progression()?;
        }
        Ok(())
    }
}

/// Key, scale and tempo for a session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionConfig {
    /// Root note (e.g., "C", "F#", "Bb")
    #[serde(default = "default_key")]
    pub key: String,
    /// Scale type (e.g., "major", "natural_minor", "dorian")
    #[serde(default = "default_scale")]
    pub scale: String,
    /// Spell with flats instead of sharps
    #[serde(default)]
    pub use_flats: bool,
    /// Tempo in BPM
    #[serde(default = "default_bpm")]
    pub bpm: f64,
}

fn default_key() -> String {
    "C".to_string()
}
fn default_scale() -> String {
    "major".to_string()
}
fn default_bpm() -> f64 {
    60.0
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            key: default_key(),
            scale: default_scale(),
            use_flats: false,
            bpm: default_bpm(),
        }
    }
}

impl SessionConfig {
    /// Parse the scale type and root into a [`Scale`]
    pub fn to_scale(&self) -> Result<Scale> {
        let scale_type: ScaleType = self
            .scale
            .parse()
            .with_context(|| format!("Invalid scale in session: {:?}", self.scale))?;
        Scale::new(&self.key, self.use_flats, scale_type)
            .with_context(|| format!("Invalid key in session: {:?}", self.key))
    }

    /// Time between beats at the configured tempo
    pub fn beat_interval(&self) -> Result<Duration> {
        if !self.bpm.is_finite() || self.bpm <= 0.0 {
            bail!("Tempo must be positive and finite, got {}", self.bpm);
        }
        Duration::try_from_secs_f64(60.0 / self.bpm)
            .with_context(|| format!("Tempo out of range: {} BPM", self.bpm))
    }
}

/// Interval drill settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DrillConfig {
    /// Number of prompts per drill
    #[serde(default = "default_iterations")]
    pub iterations: usize,
    /// Fewest intervals in a sequence
    #[serde(default = "default_min_sequence")]
    pub min_sequence: usize,
    /// Most intervals in a sequence
    #[serde(default = "default_max_sequence")]
    pub max_sequence: usize,
    /// Fixed RNG seed for reproducible drills
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_iterations() -> usize {
    8
}
fn default_min_sequence() -> usize {
    1
}
fn default_max_sequence() -> usize {
    4
}

impl Default for DrillConfig {
    fn default() -> Self {
        Self {
            iterations: default_iterations(),
            min_sequence: default_min_sequence(),
            max_sequence: default_max_sequence(),
            seed: None,
        }
    }
}
