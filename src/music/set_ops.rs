// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Set relationships between the spelled notes of two scales.
//!
//! Comparisons are on spelled names, not pitch classes. [`union`] first
//! respells `b` into `a`'s accidental convention; [`difference`] and
//! [`missing_from`] do not, so comparing a sharp scale with a flat one can
//! report enharmonic twins (`A#` vs `Bb`) as different notes. Callers that
//! want pitch-class semantics should normalize both sides with
//! [`Scale::to_flats`] or [`Scale::to_sharps`] first. This asymmetry is
//! long-standing behavior and is kept as-is.

use std::collections::BTreeSet;

use super::scale::Scale;

/// Set of spelled note names
pub type NoteSet = BTreeSet<&'static str>;

fn spelled(scale: &Scale) -> NoteSet {
    scale.build_scale().into_iter().collect()
}

/// Notes spelled in `a` that are not spelled in `b`
pub fn difference(a: &Scale, b: &Scale) -> NoteSet {
    let theirs = spelled(b);
    spelled(a)
        .into_iter()
        .filter(|note| !theirs.contains(note))
        .collect()
}

/// Notes spelled in `b` that are not spelled in `a`
pub fn missing_from(a: &Scale, b: &Scale) -> NoteSet {
    difference(b, a)
}

/// All notes of both scales, spelled in `a`'s convention
pub fn union(a: &Scale, b: &Scale) -> NoteSet {
    let b = if a.use_flats() {
        b.to_flats()
    } else {
        b.to_sharps()
    };
    let mut notes = spelled(a);
    notes.extend(b.build_scale());
    notes
}
