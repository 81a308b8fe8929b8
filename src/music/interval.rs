// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Interval labels for semitone offsets from a scale root.

use crate::error::{Result, TheoryError};

/// Labels for offsets 0-11 when spelling with sharps
pub const SHARP_LABELS: [&str; 12] = [
    "1", "#1", "2", "#2", "3", "4", "#4", "5", "#5", "6", "#6", "7",
];

/// Labels for offsets 0-11 when spelling with flats
pub const FLAT_LABELS: [&str; 12] = [
    "1", "b2", "2", "b3", "3", "4", "b5", "5", "b6", "6", "b7", "7",
];

/// Interval label for a semitone offset under the given accidental convention
pub fn label_for(offset: u8, use_flats: bool) -> Result<&'static str> {
    let table = if use_flats { &FLAT_LABELS } else { &SHARP_LABELS };
    table
        .get(offset as usize)
        .copied()
        .ok_or(TheoryError::UnsupportedOffset(offset))
}

/// Word form of a label, e.g. "b3" -> "Flat3", "#4" -> "Sharp4"
pub fn ascii_label(label: &str) -> String {
    if let Some(rest) = label.strip_prefix('b') {
        format!("Flat{}", rest)
    } else if let Some(rest) = label.strip_prefix('#') {
        format!("Sharp{}", rest)
    } else {
        label.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_for_sharps() {
        assert_eq!(label_for(0, false).unwrap(), "1");
        assert_eq!(label_for(1, false).unwrap(), "#1");
        assert_eq!(label_for(3, false).unwrap(), "#2");
        assert_eq!(label_for(6, false).unwrap(), "#4");
        assert_eq!(label_for(11, false).unwrap(), "7");
    }

    #[test]
    fn test_label_for_flats() {
        assert_eq!(label_for(0, true).unwrap(), "1");
        assert_eq!(label_for(3, true).unwrap(), "b3");
        assert_eq!(label_for(6, true).unwrap(), "b5");
        assert_eq!(label_for(10, true).unwrap(), "b7");
    }

    #[test]
    fn test_label_for_out_of_range() {
        assert_eq!(label_for(12, false), Err(TheoryError::UnsupportedOffset(12)));
        assert_eq!(label_for(255, true), Err(TheoryError::UnsupportedOffset(255)));
    }

    #[test]
    fn test_natural_degrees_agree() {
        // Offsets without an accidental spell the same in both tables
        for offset in [0u8, 2, 4, 5, 7, 9, 11] {
            assert_eq!(label_for(offset, false), label_for(offset, true));
        }
    }

    #[test]
    fn test_ascii_label() {
        assert_eq!(ascii_label("b3"), "Flat3");
        assert_eq!(ascii_label("#4"), "Sharp4");
        assert_eq!(ascii_label("5"), "5");
    }
}
