// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Diatonic triads and roman-numeral chord progressions.
//!
//! Chord names use an ASCII-safe spelling of the root ("CSharpMinor",
//! "BFlatMajor") so they can double as lookup keys for sample libraries.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::pitch::PitchClass;
use super::scale::Scale;
use crate::error::{Result, TheoryError};

const UPPER_NUMERALS: [&str; 7] = ["I", "II", "III", "IV", "V", "VI", "VII"];
const LOWER_NUMERALS: [&str; 7] = ["i", "ii", "iii", "iv", "v", "vi", "vii"];

/// Triad quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChordQuality {
    Major,
    Minor,
    Diminished,
}

impl ChordQuality {
    /// Suffix appended to the root in chord names
    pub fn suffix(self) -> &'static str {
        match self {
            ChordQuality::Major => "Major",
            ChordQuality::Minor => "Minor",
            ChordQuality::Diminished => "Dim",
        }
    }

    /// Semitones of the third and fifth above the root
    pub fn intervals(self) -> [u8; 2] {
        match self {
            ChordQuality::Major => [4, 7],
            ChordQuality::Minor => [3, 7],
            ChordQuality::Diminished => [3, 6],
        }
    }

    /// Roman numeral for a 1-based degree; lower case marks a minor triad
    fn numeral(self, degree: usize) -> &'static str {
        match self {
            ChordQuality::Minor => LOWER_NUMERALS[degree - 1],
            ChordQuality::Major | ChordQuality::Diminished => UPPER_NUMERALS[degree - 1],
        }
    }
}

/// A triad built on a scale degree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chord {
    root: PitchClass,
    quality: ChordQuality,
    use_flats: bool,
}

impl Chord {
    /// Create a chord; `use_flats` selects how the root is spelled
    pub fn new(root: PitchClass, quality: ChordQuality, use_flats: bool) -> Self {
        Self {
            root,
            quality,
            use_flats,
        }
    }

    pub fn root(&self) -> PitchClass {
        self.root
    }

    pub fn quality(&self) -> ChordQuality {
        self.quality
    }

    /// Chord name, e.g. "CMajor", "FSharpMinor", "BDim"
    pub fn name(&self) -> String {
        self.to_string()
    }

    /// Spelled root, third and fifth
    pub fn triad(&self) -> [&'static str; 3] {
        let [third, fifth] = self.quality.intervals();
        [
            self.root.name(self.use_flats),
            self.root.transpose(third as i8).name(self.use_flats),
            self.root.transpose(fifth as i8).name(self.use_flats),
        ]
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.root.ascii_name(self.use_flats), self.quality.suffix())
    }
}

/// One step of a progression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressionEntry {
    /// Roman numeral, e.g. "I", "ii", "VII"
    pub numeral: &'static str,
    /// Chord on that degree
    pub chord: Chord,
}

/// An ordered chord progression bound to one scale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordProgression {
    scale: Scale,
    entries: Vec<ProgressionEntry>,
}

impl ChordProgression {
    /// Start an empty progression; the scale type must define triad qualities
    pub fn new(scale: Scale) -> Result<Self> {
        if scale.scale_type().quality_table().is_none() {
            return Err(TheoryError::MissingChordQualities(scale.scale_type()));
        }
        Ok(Self {
            scale,
            entries: Vec::new(),
        })
    }

    /// Append the triad on a 1-based scale degree.
    ///
    /// On error the progression is left untouched.
    pub fn add_chord(&mut self, degree: usize) -> Result<&mut Self> {
        let root = self.scale.pitch_class_at_degree(degree)?;
        let quality = self.scale.scale_type().quality_for_degree(degree)?;
        let chord = Chord::new(root, quality, self.scale.use_flats());
        let numeral = quality.numeral(degree);

        debug!(degree, numeral, chord = %chord, "chord added");
        self.entries.push(ProgressionEntry { numeral, chord });
        Ok(self)
    }

    /// Progression rendered as "I (CMajor) - IV (FMajor) - V (GMajor)"
    pub fn get_progression(&self) -> String {
        self.entries
            .iter()
            .map(|e| format!("{} ({})", e.numeral, e.chord))
            .collect::<Vec<_>>()
            .join(" - ")
    }

    pub fn entries(&self) -> &[ProgressionEntry] {
        &self.entries
    }

    pub fn scale(&self) -> &Scale {
        &self.scale
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for ChordProgression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Chord Progression: {}", self.get_progression())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c_major() -> Scale {
        Scale::major("C", false).unwrap()
    }

    #[test]
    fn test_add_chord() {
        let mut progression = ChordProgression::new(c_major()).unwrap();
        progression.add_chord(1).unwrap();
        assert_eq!(progression.get_progression(), "I (CMajor)");
    }

    #[test]
    fn test_chord_progression() {
        let mut progression = ChordProgression::new(c_major()).unwrap();
        progression.add_chord(1).unwrap().add_chord(4).unwrap().add_chord(5).unwrap();
        assert_eq!(
            progression.get_progression(),
            "I (CMajor) - IV (FMajor) - V (GMajor)"
        );
        assert_eq!(progression.len(), 3);
    }

    #[test]
    fn test_minor_and_diminished_numerals() {
        let mut progression = ChordProgression::new(c_major()).unwrap();
        progression.add_chord(2).unwrap().add_chord(7).unwrap();
        assert_eq!(progression.get_progression(), "ii (DMinor) - VII (BDim)");
    }

    #[test]
    fn test_natural_minor_progression() {
        let scale = Scale::natural_minor("A", false).unwrap();
        let mut progression = ChordProgression::new(scale).unwrap();
        for degree in 1..=7 {
            progression.add_chord(degree).unwrap();
        }
        assert_eq!(
            progression.get_progression(),
            "i (AMinor) - II (BDim) - III (CMajor) - iv (DMinor) - v (EMinor) - VI (FMajor) - VII (GMajor)"
        );
    }

    #[test]
    fn test_accidental_roots_use_words() {
        let scale = Scale::major("D", false).unwrap();
        let mut progression = ChordProgression::new(scale).unwrap();
        progression.add_chord(3).unwrap().add_chord(7).unwrap();
        assert_eq!(progression.get_progression(), "iii (FSharpMinor) - VII (CSharpDim)");

        let scale = Scale::major("F", true).unwrap();
        let mut progression = ChordProgression::new(scale).unwrap();
        progression.add_chord(4).unwrap();
        assert_eq!(progression.get_progression(), "IV (BFlatMajor)");
    }

    #[test]
    fn test_out_of_range_degree_leaves_progression_unchanged() {
        let mut progression = ChordProgression::new(c_major()).unwrap();
        progression.add_chord(1).unwrap();

        assert_eq!(
            progression.add_chord(8).err(),
            Some(TheoryError::OutOfRangeDegree { degree: 8, len: 7 })
        );
        assert!(progression.add_chord(0).is_err());
        assert_eq!(progression.len(), 1);
        assert_eq!(progression.get_progression(), "I (CMajor)");
    }

    #[test]
    fn test_scale_without_quality_table() {
        let scale = Scale::pentatonic("Am", false).unwrap();
        assert_eq!(
            ChordProgression::new(scale),
            Err(TheoryError::MissingChordQualities(scale.scale_type()))
        );
    }

    #[test]
    fn test_empty_progression() {
        let progression = ChordProgression::new(c_major()).unwrap();
        assert!(progression.is_empty());
        assert_eq!(progression.get_progression(), "");
        assert_eq!(progression.to_string(), "Chord Progression: ");
    }

    #[test]
    fn test_chord_triads() {
        assert_eq!(Chord::new(PitchClass::C, ChordQuality::Major, false).triad(), ["C", "E", "G"]);
        assert_eq!(Chord::new(PitchClass::D, ChordQuality::Minor, true).triad(), ["D", "F", "A"]);
        assert_eq!(
            Chord::new(PitchClass::B, ChordQuality::Diminished, false).triad(),
            ["B", "D", "F"]
        );
        assert_eq!(
            Chord::new(PitchClass::As, ChordQuality::Major, true).triad(),
            ["Bb", "D", "F"]
        );
    }

    #[test]
    fn test_chord_name() {
        let chord = Chord::new(PitchClass::Gs, ChordQuality::Minor, false);
        assert_eq!(chord.name(), "GSharpMinor");
        assert_eq!(chord.to_string(), "GSharpMinor");
        assert_eq!(Chord::new(PitchClass::Gs, ChordQuality::Minor, true).name(), "AFlatMinor");
    }
}
