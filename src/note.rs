// pentatone -- decaying sine tones for a five-tone scale
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Western names for the tones and the pitch order derived from them.

use std::fmt;

/// The name of a note in standard notation.
///
/// These are labels only: the pitch of a tone always comes from the frequency
/// in the scale table, never from its letter.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    /// Letters in the order they appear within an octave.
    pub const REFERENCE_ORDER: [Letter; 7] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    /// Position of the letter within an octave, starting at C.
    ///
    /// # Examples
    ///
    /// ```
    /// use pentatone::note::Letter;
    ///
    /// assert_eq!(Letter::C.position(), 0);
    /// assert_eq!(Letter::A.position(), 5);
    /// ```
    pub fn position(self) -> usize {
        match self {
            Letter::C => 0,
            Letter::D => 1,
            Letter::E => 2,
            Letter::F => 3,
            Letter::G => 4,
            Letter::A => 5,
            Letter::B => 6,
        }
    }

    /// Parse a single upper case letter name.
    ///
    /// # Examples
    ///
    /// ```
    /// use pentatone::note::Letter;
    ///
    /// assert_eq!(Letter::from_name("G"), Some(Letter::G));
    /// assert_eq!(Letter::from_name("H"), None);
    /// assert_eq!(Letter::from_name("Unknown"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Letter> {
        Self::REFERENCE_ORDER
            .iter()
            .copied()
            .find(|letter| letter.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Letter::C => "C",
            Letter::D => "D",
            Letter::E => "E",
            Letter::F => "F",
            Letter::G => "G",
            Letter::A => "A",
            Letter::B => "B",
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Identity of one generated tone, e.g. `gong_C3`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ToneName {
    /// Symbolic name from the scale table.
    pub note: String,
    pub letter: Letter,
    pub octave: u8,
}

impl ToneName {
    pub fn new<S: Into<String>>(note: S, letter: Letter, octave: u8) -> Self {
        Self {
            note: note.into(),
            letter,
            octave,
        }
    }

    pub fn pitch_key(&self) -> PitchKey {
        PitchKey::new(self.octave, self.letter)
    }
}

impl fmt::Display for ToneName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}{}", self.note, self.letter, self.octave)
    }
}

/// Sort key ordering tones by octave first, then by letter within the octave.
///
/// Missing components are `None`, which sorts before every known value.
/// That way identifiers that cannot be understood end up at the front instead
/// of aborting a whole batch.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct PitchKey {
    pub octave: Option<u32>,
    pub letter_position: Option<usize>,
}

impl PitchKey {
    pub fn new(octave: u8, letter: Letter) -> Self {
        Self {
            octave: Some(u32::from(octave)),
            letter_position: Some(letter.position()),
        }
    }

    /// Recover the key from an identifier like `gong_C3` or `gong_C3.wav`.
    ///
    /// The part after the last underscore, without extension, holds the
    /// letter (all alphabetic characters) and the octave (all digits).
    ///
    /// # Examples
    ///
    /// ```
    /// use pentatone::note::*;
    ///
    /// assert_eq!(PitchKey::parse("gong_C3.wav"), PitchKey::new(3, Letter::C));
    /// assert_eq!(PitchKey::parse("yu_A5"), PitchKey::new(5, Letter::A));
    ///
    /// let unknown = PitchKey::parse("mystery_H4.wav");
    /// assert_eq!(unknown.octave, Some(4));
    /// assert_eq!(unknown.letter_position, None);
    /// ```
    pub fn parse(identifier: &str) -> PitchKey {
        let western = identifier.rsplit('_').next().unwrap_or(identifier);
        let western = western.split('.').next().unwrap_or(western);

        let letters: String = western.chars().filter(|ch| ch.is_alphabetic()).collect();
        let digits: String = western.chars().filter(|ch| ch.is_ascii_digit()).collect();

        PitchKey {
            octave: digits.parse().ok(),
            letter_position: Letter::from_name(&letters).map(Letter::position),
        }
    }

    /// Whether both components were recognized.
    pub fn is_complete(&self) -> bool {
        self.octave.is_some() && self.letter_position.is_some()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_name() {
        let name = ToneName::new("gong", Letter::C, 3);
        assert_eq!(name.to_string(), "gong_C3");
        assert_eq!(
            ToneName::new("qingjiao", Letter::F, 5).to_string(),
            "qingjiao_F5"
        );
    }

    #[test]
    fn parse_agrees_with_structured_key() {
        for &letter in Letter::REFERENCE_ORDER.iter() {
            for octave in 3..=5 {
                let name = ToneName::new("biangong", letter, octave);
                assert_eq!(PitchKey::parse(&name.to_string()), name.pitch_key());
                assert_eq!(
                    PitchKey::parse(&format!("{}.wav", name)),
                    name.pitch_key()
                );
            }
        }
    }

    #[test]
    fn unknown_letter_sorts_first() {
        let unknown = PitchKey::parse("gong_Unknown3.wav");
        assert_eq!(unknown.letter_position, None);
        assert!(!unknown.is_complete());
        assert!(unknown < PitchKey::new(3, Letter::C));
        // the octave still dominates
        assert!(unknown > PitchKey::new(2, Letter::B));
    }

    #[test]
    fn missing_octave_sorts_first() {
        let key = PitchKey::parse("gong_C.wav");
        assert_eq!(key.octave, None);
        assert!(key < PitchKey::new(0, Letter::C));
    }

    #[test]
    fn high_octave_sorts_last() {
        let high = PitchKey::parse("gong_C300.wav");
        assert_eq!(high.octave, Some(300));
        assert!(high.is_complete());
        assert!(high > PitchKey::new(5, Letter::B));
        assert!(high > PitchKey::new(255, Letter::B));
    }

    #[test]
    fn octave_before_letter() {
        assert!(PitchKey::new(3, Letter::B) < PitchKey::new(4, Letter::C));
        assert!(PitchKey::new(4, Letter::C) < PitchKey::new(4, Letter::D));
        assert!(PitchKey::new(4, Letter::A) < PitchKey::new(4, Letter::B));
    }
}
