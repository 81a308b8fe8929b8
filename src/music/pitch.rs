// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pitch classes and their two enharmonic alphabets.
//!
//! Every pitch class has a sharp spelling and a flat spelling. Spelling is
//! presentation only: `C#` and `Db` parse to the same [`PitchClass`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TheoryError};

/// Semitone offset type
pub type Semitones = i8;

/// Sharp-preferring alphabet, indexed by pitch class
pub const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Flat-preferring alphabet, indexed by pitch class
pub const FLAT_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// One of the twelve pitch classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PitchClass {
    C,
    Cs, // C# / Db
    D,
    Ds, // D# / Eb
    E,
    F,
    Fs, // F# / Gb
    G,
    Gs, // G# / Ab
    A,
    As, // A# / Bb
    B,
}

impl PitchClass {
    /// All pitch classes in chromatic order
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::Cs,
        PitchClass::D,
        PitchClass::Ds,
        PitchClass::E,
        PitchClass::F,
        PitchClass::Fs,
        PitchClass::G,
        PitchClass::Gs,
        PitchClass::A,
        PitchClass::As,
        PitchClass::B,
    ];

    /// Canonical index (0-11)
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Pitch class for an index, wrapping at the octave
    pub fn from_index(index: u8) -> Self {
        PitchClass::ALL[(index % 12) as usize]
    }

    /// Parse an exact spelling from either alphabet (e.g. "C", "C#", "Db")
    pub fn parse(name: &str) -> Result<Self> {
        index_of(name).map(PitchClass::from_index)
    }

    /// Spelling under the given accidental convention
    pub fn name(self, use_flats: bool) -> &'static str {
        name_at(self.index(), use_flats)
    }

    /// Spelling with the accidental written out as a word ("CSharp", "DFlat")
    pub fn ascii_name(self, use_flats: bool) -> &'static str {
        if use_flats {
            ASCII_FLAT_NAMES[self as usize]
        } else {
            ASCII_SHARP_NAMES[self as usize]
        }
    }

    /// Whether this pitch class needs an accidental in either alphabet
    pub fn is_accidental(self) -> bool {
        SHARP_NAMES[self as usize].len() > 1
    }

    /// Transpose by semitones
    pub fn transpose(self, semitones: Semitones) -> Self {
        let new_pc = (self.index() as i16 + semitones as i16).rem_euclid(12) as u8;
        PitchClass::from_index(new_pc)
    }

    /// Get interval in semitones to another pitch class (ascending)
    pub fn interval_to(self, other: PitchClass) -> u8 {
        (other.index() as i16 - self.index() as i16).rem_euclid(12) as u8
    }
}

const ASCII_SHARP_NAMES: [&str; 12] = [
    "C", "CSharp", "D", "DSharp", "E", "F", "FSharp", "G", "GSharp", "A", "ASharp", "B",
];

const ASCII_FLAT_NAMES: [&str; 12] = [
    "C", "DFlat", "D", "EFlat", "E", "F", "GFlat", "G", "AFlat", "A", "BFlat", "B",
];

impl FromStr for PitchClass {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self> {
        PitchClass::parse(s)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name(false))
    }
}

/// Index (0-11) of a spelled note name from either alphabet
pub fn index_of(name: &str) -> Result<u8> {
    SHARP_NAMES
        .iter()
        .position(|&n| n == name)
        .or_else(|| FLAT_NAMES.iter().position(|&n| n == name))
        .map(|i| i as u8)
        .ok_or_else(|| TheoryError::InvalidPitchClass(name.to_string()))
}

/// Spelled name at an index (taken mod 12)
pub fn name_at(index: u8, use_flats: bool) -> &'static str {
    let i = (index % 12) as usize;
    if use_flats {
        FLAT_NAMES[i]
    } else {
        SHARP_NAMES[i]
    }
}

/// Respell a note name into the requested alphabet, keeping its pitch class
pub fn respell(name: &str, use_flats: bool) -> Result<&'static str> {
    Ok(name_at(index_of(name)?, use_flats))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_of_both_alphabets() {
        assert_eq!(index_of("C").unwrap(), 0);
        assert_eq!(index_of("C#").unwrap(), 1);
        assert_eq!(index_of("Db").unwrap(), 1);
        assert_eq!(index_of("Bb").unwrap(), 10);
        assert_eq!(index_of("B").unwrap(), 11);
    }

    #[test]
    fn test_index_of_rejects_unknown() {
        for bad in ["H", "C#b", "c", "Cb", "E#", "", " C"] {
            assert_eq!(
                index_of(bad),
                Err(TheoryError::InvalidPitchClass(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_name_at_wraps() {
        assert_eq!(name_at(1, false), "C#");
        assert_eq!(name_at(1, true), "Db");
        assert_eq!(name_at(13, true), "Db");
        assert_eq!(name_at(12, false), "C");
    }

    #[test]
    fn test_respell() {
        assert_eq!(respell("C#", true).unwrap(), "Db");
        assert_eq!(respell("Db", false).unwrap(), "C#");
        assert_eq!(respell("G", true).unwrap(), "G");
        assert_eq!(respell("Ab", true).unwrap(), "Ab");
        assert!(respell("X", true).is_err());
    }

    #[test]
    fn test_respell_round_trip_single_accidentals() {
        for &name in SHARP_NAMES.iter() {
            let flat = respell(name, true).unwrap();
            assert_eq!(respell(flat, false).unwrap(), name);
        }
    }

    #[test]
    fn test_pitch_class_parse() {
        assert_eq!(PitchClass::parse("F#").unwrap(), PitchClass::Fs);
        assert_eq!(PitchClass::parse("Gb").unwrap(), PitchClass::Fs);
        assert_eq!("A".parse::<PitchClass>().unwrap(), PitchClass::A);
    }

    #[test]
    fn test_ascii_name() {
        assert_eq!(PitchClass::Cs.ascii_name(false), "CSharp");
        assert_eq!(PitchClass::Cs.ascii_name(true), "DFlat");
        assert_eq!(PitchClass::As.ascii_name(true), "BFlat");
        assert_eq!(PitchClass::E.ascii_name(true), "E");
    }

    #[test]
    fn test_transpose() {
        assert_eq!(PitchClass::C.transpose(2), PitchClass::D);
        assert_eq!(PitchClass::C.transpose(12), PitchClass::C);
        assert_eq!(PitchClass::C.transpose(-1), PitchClass::B);
        assert_eq!(PitchClass::G.transpose(5), PitchClass::C);
    }

    #[test]
    fn test_interval_to() {
        assert_eq!(PitchClass::C.interval_to(PitchClass::G), 7);
        assert_eq!(PitchClass::C.interval_to(PitchClass::C), 0);
        assert_eq!(PitchClass::G.interval_to(PitchClass::C), 5);
    }

    #[test]
    fn test_is_accidental() {
        assert!(PitchClass::Cs.is_accidental());
        assert!(!PitchClass::E.is_accidental());
    }
}
