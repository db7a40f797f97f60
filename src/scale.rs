// pentatone -- decaying sine tones for a five-tone scale
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! The table of notes that get rendered.

use crate::note::{Letter, ToneName};

/// Number of frequencies (low, mid, high) listed per note.
pub const HARMONICS_PER_NOTE: usize = 3;

/// Octave numbers assigned to the harmonics, indexed like `ScaleEntry::harmonics`.
pub const OCTAVES: [u8; HARMONICS_PER_NOTE] = [3, 4, 5];

/// One named note together with its frequencies in three octave bands.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleEntry {
    pub name: String,
    /// Western letter used for naming and ordering the generated tones.
    pub letter: Letter,
    /// Frequencies in Hz, from the lowest to the highest octave.
    pub harmonics: [f64; HARMONICS_PER_NOTE],
}

impl ScaleEntry {
    pub fn new<S: Into<String>>(
        name: S,
        letter: Letter,
        harmonics: [f64; HARMONICS_PER_NOTE],
    ) -> Self {
        Self {
            name: name.into(),
            letter,
            harmonics,
        }
    }

    /// Iterate the tones of this entry as pairs of name and frequency.
    pub fn tones(&self) -> impl Iterator<Item = (ToneName, f64)> + '_ {
        self.harmonics
            .iter()
            .zip(OCTAVES.iter())
            .map(move |(&frequency, &octave)| {
                (ToneName::new(self.name.clone(), self.letter, octave), frequency)
            })
    }
}

/// Immutable set of notes.
///
/// The order of the entries only determines the generation order, which is
/// unrelated to pitch order.
#[derive(Clone, Debug, PartialEq)]
pub struct Scale {
    entries: Vec<ScaleEntry>,
}

impl Scale {
    pub fn new(entries: Vec<ScaleEntry>) -> Self {
        Self { entries }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn entries(&self) -> &[ScaleEntry] {
        &self.entries
    }

    /// Total number of tones, i.e. entries times harmonics.
    ///
    /// # Examples
    ///
    /// ```
    /// use pentatone::scale::Scale;
    ///
    /// assert_eq!(Scale::default().tone_count(), 21);
    /// assert_eq!(Scale::empty().tone_count(), 0);
    /// ```
    pub fn tone_count(&self) -> usize {
        self.entries.len() * HARMONICS_PER_NOTE
    }

    /// All tones in generation order.
    pub fn tones(&self) -> impl Iterator<Item = (ToneName, f64)> + '_ {
        self.entries.iter().flat_map(|entry| entry.tones())
    }
}

/// The seven notes gong, shang, jiao, qingjiao, zheng, yu and biangong.
impl Default for Scale {
    fn default() -> Self {
        Scale::new(vec![
            ScaleEntry::new("gong", Letter::C, [130.81, 261.63, 523.25]),
            ScaleEntry::new("shang", Letter::D, [146.83, 293.66, 587.33]),
            ScaleEntry::new("jiao", Letter::E, [164.81, 329.63, 659.26]),
            ScaleEntry::new("qingjiao", Letter::F, [174.61, 349.23, 698.46]),
            ScaleEntry::new("zheng", Letter::G, [196.00, 392.00, 784.00]),
            ScaleEntry::new("yu", Letter::A, [220.00, 440.00, 880.00]),
            ScaleEntry::new("biangong", Letter::B, [246.94, 493.88, 987.77]),
        ])
    }
}
