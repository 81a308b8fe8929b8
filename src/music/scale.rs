// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale and mode definitions.
//!
//! A [`Scale`] is a root pitch class, an accidental preference and a
//! [`ScaleType`]. The type carries the semitone offsets of each degree and,
//! for the diatonic modes, the triad quality built on each degree.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::chord::ChordQuality;
use super::interval;
use super::pitch::{self, PitchClass};
use crate::error::{Result, TheoryError};

use ChordQuality::{Diminished as Dim, Major as Maj, Minor as Min};

const MAJOR_QUALITIES: [ChordQuality; 7] = [Maj, Min, Min, Maj, Maj, Min, Dim];
const DORIAN_QUALITIES: [ChordQuality; 7] = [Min, Min, Maj, Maj, Min, Dim, Maj];
const PHRYGIAN_QUALITIES: [ChordQuality; 7] = [Min, Maj, Maj, Min, Dim, Maj, Min];
const LYDIAN_QUALITIES: [ChordQuality; 7] = [Maj, Maj, Min, Dim, Maj, Min, Min];
const MIXOLYDIAN_QUALITIES: [ChordQuality; 7] = [Maj, Min, Dim, Maj, Min, Min, Maj];
const MINOR_QUALITIES: [ChordQuality; 7] = [Min, Dim, Maj, Min, Min, Maj, Maj];
const LOCRIAN_QUALITIES: [ChordQuality; 7] = [Dim, Maj, Min, Min, Maj, Maj, Min];

/// Scale types supported by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleType {
    Major,
    NaturalMinor,
    HarmonicMinor,
    MelodicMinor, // Ascending form

    // Church modes
    Ionian,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Aeolian,
    Locrian,

    PentatonicMajor,
    PentatonicMinor,
}

impl ScaleType {
    /// Every scale type, in declaration order
    pub const ALL: [ScaleType; 13] = [
        ScaleType::Major,
        ScaleType::NaturalMinor,
        ScaleType::HarmonicMinor,
        ScaleType::MelodicMinor,
        ScaleType::Ionian,
        ScaleType::Dorian,
        ScaleType::Phrygian,
        ScaleType::Lydian,
        ScaleType::Mixolydian,
        ScaleType::Aeolian,
        ScaleType::Locrian,
        ScaleType::PentatonicMajor,
        ScaleType::PentatonicMinor,
    ];

    /// Semitone offsets from the root, in degree order
    pub fn offsets(self) -> &'static [u8] {
        match self {
            ScaleType::Major | ScaleType::Ionian => &[0, 2, 4, 5, 7, 9, 11],
            ScaleType::NaturalMinor | ScaleType::Aeolian => &[0, 2, 3, 5, 7, 8, 10],
            ScaleType::HarmonicMinor => &[0, 2, 3, 5, 7, 8, 11],
            ScaleType::MelodicMinor => &[0, 2, 3, 5, 7, 9, 11],
            ScaleType::Dorian => &[0, 2, 3, 5, 7, 9, 10],
            ScaleType::Phrygian => &[0, 1, 3, 5, 7, 8, 10],
            ScaleType::Lydian => &[0, 2, 4, 6, 7, 9, 11],
            ScaleType::Mixolydian => &[0, 2, 4, 5, 7, 9, 10],
            ScaleType::Locrian => &[0, 1, 3, 5, 6, 8, 10],
            ScaleType::PentatonicMajor => &[0, 2, 4, 7, 9],
            ScaleType::PentatonicMinor => &[0, 3, 5, 7, 10],
        }
    }

    /// Triad quality on each of the seven degrees, if this type defines one.
    ///
    /// Harmonic and melodic minor contain an augmented triad, and the
    /// pentatonics have no stacked thirds, so neither carries a table.
    pub fn quality_table(self) -> Option<&'static [ChordQuality; 7]> {
        match self {
            ScaleType::Major | ScaleType::Ionian => Some(&MAJOR_QUALITIES),
            ScaleType::NaturalMinor | ScaleType::Aeolian => Some(&MINOR_QUALITIES),
            ScaleType::Dorian => Some(&DORIAN_QUALITIES),
            ScaleType::Phrygian => Some(&PHRYGIAN_QUALITIES),
            ScaleType::Lydian => Some(&LYDIAN_QUALITIES),
            ScaleType::Mixolydian => Some(&MIXOLYDIAN_QUALITIES),
            ScaleType::Locrian => Some(&LOCRIAN_QUALITIES),
            ScaleType::HarmonicMinor
            | ScaleType::MelodicMinor
            | ScaleType::PentatonicMajor
            | ScaleType::PentatonicMinor => None,
        }
    }

    /// Triad quality for a 1-based degree
    pub fn quality_for_degree(self, degree: usize) -> Result<ChordQuality> {
        let table = self
            .quality_table()
            .ok_or(TheoryError::MissingChordQualities(self))?;
        if degree == 0 || degree > table.len() {
            return Err(TheoryError::OutOfRangeDegree {
                degree,
                len: table.len(),
            });
        }
        Ok(table[degree - 1])
    }

    /// Get a human-readable name for this scale type
    pub fn name(self) -> &'static str {
        match self {
            ScaleType::Major => "Major",
            ScaleType::NaturalMinor => "Natural Minor",
            ScaleType::HarmonicMinor => "Harmonic Minor",
            ScaleType::MelodicMinor => "Melodic Minor",
            ScaleType::Ionian => "Ionian",
            ScaleType::Dorian => "Dorian",
            ScaleType::Phrygian => "Phrygian",
            ScaleType::Lydian => "Lydian",
            ScaleType::Mixolydian => "Mixolydian",
            ScaleType::Aeolian => "Aeolian",
            ScaleType::Locrian => "Locrian",
            ScaleType::PentatonicMajor => "Pentatonic Major",
            ScaleType::PentatonicMinor => "Pentatonic Minor",
        }
    }

    /// Get the parallel minor/major scale type
    pub fn parallel(self) -> Option<Self> {
        match self {
            ScaleType::Major => Some(ScaleType::NaturalMinor),
            ScaleType::NaturalMinor => Some(ScaleType::Major),
            ScaleType::Ionian => Some(ScaleType::Aeolian),
            ScaleType::Aeolian => Some(ScaleType::Ionian),
            ScaleType::PentatonicMajor => Some(ScaleType::PentatonicMinor),
            ScaleType::PentatonicMinor => Some(ScaleType::PentatonicMajor),
            _ => None,
        }
    }
}

impl FromStr for ScaleType {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_lowercase().replace([' ', '-', '_'], "");
        match key.as_str() {
            "major" => Ok(ScaleType::Major),
            "minor" | "naturalminor" => Ok(ScaleType::NaturalMinor),
            "harmonicminor" => Ok(ScaleType::HarmonicMinor),
            "melodicminor" => Ok(ScaleType::MelodicMinor),
            "ionian" => Ok(ScaleType::Ionian),
            "dorian" => Ok(ScaleType::Dorian),
            "phrygian" => Ok(ScaleType::Phrygian),
            "lydian" => Ok(ScaleType::Lydian),
            "mixolydian" => Ok(ScaleType::Mixolydian),
            "aeolian" => Ok(ScaleType::Aeolian),
            "locrian" => Ok(ScaleType::Locrian),
            "pentatonic" | "pentatonicmajor" | "majorpentatonic" => {
                Ok(ScaleType::PentatonicMajor)
            }
            "pentatonicminor" | "minorpentatonic" => Ok(ScaleType::PentatonicMinor),
            _ => Err(TheoryError::UnknownScaleType(s.to_string())),
        }
    }
}

impl fmt::Display for ScaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A scale: root, accidental preference and shape. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Scale {
    root: PitchClass,
    use_flats: bool,
    scale_type: ScaleType,
}

impl Scale {
    /// Create a scale from a spelled root in either alphabet
    pub fn new(root: &str, use_flats: bool, scale_type: ScaleType) -> Result<Self> {
        let root = PitchClass::parse(root)?;
        debug!(root = %root.name(use_flats), %scale_type, use_flats, "scale created");
        Ok(Self::from_pitch_class(root, use_flats, scale_type))
    }

    /// Create a scale from an already-parsed root
    pub fn from_pitch_class(root: PitchClass, use_flats: bool, scale_type: ScaleType) -> Self {
        Self {
            root,
            use_flats,
            scale_type,
        }
    }

    pub fn major(root: &str, use_flats: bool) -> Result<Self> {
        Self::new(root, use_flats, ScaleType::Major)
    }

    pub fn natural_minor(root: &str, use_flats: bool) -> Result<Self> {
        Self::new(root, use_flats, ScaleType::NaturalMinor)
    }

    pub fn harmonic_minor(root: &str, use_flats: bool) -> Result<Self> {
        Self::new(root, use_flats, ScaleType::HarmonicMinor)
    }

    pub fn melodic_minor(root: &str, use_flats: bool) -> Result<Self> {
        Self::new(root, use_flats, ScaleType::MelodicMinor)
    }

    pub fn ionian(root: &str, use_flats: bool) -> Result<Self> {
        Self::new(root, use_flats, ScaleType::Ionian)
    }

    pub fn dorian(root: &str, use_flats: bool) -> Result<Self> {
        Self::new(root, use_flats, ScaleType::Dorian)
    }

    pub fn phrygian(root: &str, use_flats: bool) -> Result<Self> {
        Self::new(root, use_flats, ScaleType::Phrygian)
    }

    pub fn lydian(root: &str, use_flats: bool) -> Result<Self> {
        Self::new(root, use_flats, ScaleType::Lydian)
    }

    pub fn mixolydian(root: &str, use_flats: bool) -> Result<Self> {
        Self::new(root, use_flats, ScaleType::Mixolydian)
    }

    pub fn aeolian(root: &str, use_flats: bool) -> Result<Self> {
        Self::new(root, use_flats, ScaleType::Aeolian)
    }

    pub fn locrian(root: &str, use_flats: bool) -> Result<Self> {
        Self::new(root, use_flats, ScaleType::Locrian)
    }

    pub fn pentatonic_major(root: &str, use_flats: bool) -> Result<Self> {
        Self::new(root, use_flats, ScaleType::PentatonicMajor)
    }

    pub fn pentatonic_minor(root: &str, use_flats: bool) -> Result<Self> {
        Self::new(root, use_flats, ScaleType::PentatonicMinor)
    }

    /// Pentatonic scale from a chord-style spec: "Am" is minor, "C" is major
    pub fn pentatonic(spec: &str, use_flats: bool) -> Result<Self> {
        match spec.strip_suffix('m') {
            Some(root) => Self::pentatonic_minor(root, use_flats),
            None => Self::pentatonic_major(spec, use_flats),
        }
    }

    /// Get the root pitch class
    pub fn root(&self) -> PitchClass {
        self.root
    }

    /// Root spelled under this scale's accidental convention
    pub fn root_name(&self) -> &'static str {
        self.root.name(self.use_flats)
    }

    pub fn use_flats(&self) -> bool {
        self.use_flats
    }

    pub fn scale_type(&self) -> ScaleType {
        self.scale_type
    }

    /// Semitone offsets of each degree
    pub fn offsets(&self) -> &'static [u8] {
        self.scale_type.offsets()
    }

    /// Number of degrees
    pub fn len(&self) -> usize {
        self.offsets().len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets().is_empty()
    }

    /// Pitch classes of each degree, in degree order
    pub fn pitch_classes(&self) -> impl Iterator<Item = PitchClass> + '_ {
        self.offsets()
            .iter()
            .map(move |&offset| self.root.transpose(offset as pitch::Semitones))
    }

    /// Spelled note names of each degree, in degree order
    pub fn build_scale(&self) -> Vec<&'static str> {
        let root_index = self.root.index();
        self.offsets()
            .iter()
            .map(|&offset| pitch::name_at(root_index + offset, self.use_flats))
            .collect()
    }

    /// Interval label of each degree under this scale's accidental convention
    pub fn get_intervals(&self) -> Result<Vec<&'static str>> {
        self.offsets()
            .iter()
            .map(|&offset| interval::label_for(offset, self.use_flats))
            .collect()
    }

    /// Spelled note at a 1-based degree
    pub fn note_at_degree(&self, degree: usize) -> Result<&'static str> {
        self.pitch_class_at_degree(degree)
            .map(|pc| pc.name(self.use_flats))
    }

    /// Pitch class at a 1-based degree
    pub fn pitch_class_at_degree(&self, degree: usize) -> Result<PitchClass> {
        if degree == 0 || degree > self.len() {
            return Err(TheoryError::OutOfRangeDegree {
                degree,
                len: self.len(),
            });
        }
        let offset = self.offsets()[degree - 1];
        Ok(self.root.transpose(offset as pitch::Semitones))
    }

    /// Check whether a spelled note belongs to this scale, in any spelling
    pub fn contains(&self, name: &str) -> bool {
        match PitchClass::parse(name) {
            Ok(pc) => self.pitch_classes().any(|n| n == pc),
            Err(_) => false,
        }
    }

    /// Same scale spelled with flats
    pub fn to_flats(&self) -> Scale {
        Scale {
            use_flats: true,
            ..*self
        }
    }

    /// Same scale spelled with sharps
    pub fn to_sharps(&self) -> Scale {
        Scale {
            use_flats: false,
            ..*self
        }
    }

    /// Get the parallel scale (major <-> minor)
    pub fn parallel(&self) -> Option<Scale> {
        self.scale_type
            .parallel()
            .map(|st| Scale::from_pitch_class(self.root, self.use_flats, st))
    }

    /// Get the relative scale (e.g., C major -> A minor)
    pub fn relative(&self) -> Option<Scale> {
        let (shift, scale_type) = match self.scale_type {
            ScaleType::Major => (-3, ScaleType::NaturalMinor), // Down a minor 3rd
            ScaleType::NaturalMinor => (3, ScaleType::Major),  // Up a minor 3rd
            ScaleType::PentatonicMajor => (-3, ScaleType::PentatonicMinor),
            ScaleType::PentatonicMinor => (3, ScaleType::PentatonicMajor),
            _ => return None,
        };
        Some(Scale::from_pitch_class(
            self.root.transpose(shift),
            self.use_flats,
            scale_type,
        ))
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in {}:", self.scale_type, self.root_name())?;
        for note in self.build_scale() {
            write!(f, " {}", note)?;
        }
        Ok(())
    }
}
