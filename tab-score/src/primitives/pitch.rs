//! The 17 enharmonic spellings over the 12 pitch classes.
//!
//! C♯ and D♭ are distinct values sharing the numeric class 1: `==`
//! distinguishes spellings, [`Pitch::is_enharmonic`] compares classes.
//! Transposition is a table lookup, not semitone arithmetic, so the
//! result stays correctly spelled (a diminished seventh above C is A,
//! not B𝄫). Tables are built once, on first use, and never mutated.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::{Interval, PitchError, PitchResult};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Accidental {
    Flat,
    Natural,
    Sharp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pitch {
    C,
    CSharp,
    DFlat,
    D,
    DSharp,
    EFlat,
    E,
    F,
    FSharp,
    GFlat,
    G,
    GSharp,
    AFlat,
    A,
    ASharp,
    BFlat,
    B,
}

impl Pitch {
    pub const ALL: [Pitch; 17] = [
        Pitch::C,
        Pitch::CSharp,
        Pitch::DFlat,
        Pitch::D,
        Pitch::DSharp,
        Pitch::EFlat,
        Pitch::E,
        Pitch::F,
        Pitch::FSharp,
        Pitch::GFlat,
        Pitch::G,
        Pitch::GSharp,
        Pitch::AFlat,
        Pitch::A,
        Pitch::ASharp,
        Pitch::BFlat,
        Pitch::B,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Pitch::C => "C",
            Pitch::CSharp => "C#",
            Pitch::DFlat => "Db",
            Pitch::D => "D",
            Pitch::DSharp => "D#",
            Pitch::EFlat => "Eb",
            Pitch::E => "E",
            Pitch::F => "F",
            Pitch::FSharp => "F#",
            Pitch::GFlat => "Gb",
            Pitch::G => "G",
            Pitch::GSharp => "G#",
            Pitch::AFlat => "Ab",
            Pitch::A => "A",
            Pitch::ASharp => "A#",
            Pitch::BFlat => "Bb",
            Pitch::B => "B",
        }
    }

    /// The letter the spelling is built on: `"D"` both for D♯ and D♭.
    pub fn natural_name(&self) -> &'static str {
        self.natural().name()
    }

    /// Numeric pitch class, 0–11.
    pub fn value(&self) -> u8 {
        match self {
            Pitch::C => 0,
            Pitch::CSharp | Pitch::DFlat => 1,
            Pitch::D => 2,
            Pitch::DSharp | Pitch::EFlat => 3,
            Pitch::E => 4,
            Pitch::F => 5,
            Pitch::FSharp | Pitch::GFlat => 6,
            Pitch::G => 7,
            Pitch::GSharp | Pitch::AFlat => 8,
            Pitch::A => 9,
            Pitch::ASharp | Pitch::BFlat => 10,
            Pitch::B => 11,
        }
    }

    pub fn accidental(&self) -> Accidental {
        match self {
            Pitch::CSharp
            | Pitch::DSharp
            | Pitch::FSharp
            | Pitch::GSharp
            | Pitch::ASharp => Accidental::Sharp,
            Pitch::DFlat
            | Pitch::EFlat
            | Pitch::GFlat
            | Pitch::AFlat
            | Pitch::BFlat => Accidental::Flat,
            _ => Accidental::Natural,
        }
    }

    /// The spelling one semitone up. Directional: `p.sharp().flat()` is
    /// not guaranteed to return `p`, only an enharmonic equal.
    pub fn sharp(&self) -> Pitch {
        match self {
            Pitch::C => Pitch::CSharp,
            Pitch::CSharp => Pitch::D,
            Pitch::DFlat => Pitch::D,
            Pitch::D => Pitch::DSharp,
            Pitch::DSharp => Pitch::E,
            Pitch::EFlat => Pitch::E,
            Pitch::E => Pitch::F,
            Pitch::F => Pitch::FSharp,
            Pitch::FSharp => Pitch::G,
            Pitch::GFlat => Pitch::G,
            Pitch::G => Pitch::GSharp,
            Pitch::GSharp => Pitch::A,
            Pitch::AFlat => Pitch::A,
            Pitch::A => Pitch::ASharp,
            Pitch::ASharp => Pitch::B,
            Pitch::BFlat => Pitch::B,
            Pitch::B => Pitch::C,
        }
    }

    /// The spelling one semitone down.
    pub fn flat(&self) -> Pitch {
        match self {
            Pitch::C => Pitch::B,
            Pitch::CSharp => Pitch::C,
            Pitch::DFlat => Pitch::C,
            Pitch::D => Pitch::DFlat,
            Pitch::DSharp => Pitch::D,
            Pitch::EFlat => Pitch::D,
            Pitch::E => Pitch::EFlat,
            Pitch::F => Pitch::E,
            Pitch::FSharp => Pitch::F,
            Pitch::GFlat => Pitch::F,
            Pitch::G => Pitch::GFlat,
            Pitch::GSharp => Pitch::G,
            Pitch::AFlat => Pitch::G,
            Pitch::A => Pitch::AFlat,
            Pitch::ASharp => Pitch::A,
            Pitch::BFlat => Pitch::A,
            Pitch::B => Pitch::BFlat,
        }
    }

    /// The natural of the spelling's letter (D for both D♯ and D♭).
    pub fn natural(&self) -> Pitch {
        match self {
            Pitch::C | Pitch::CSharp => Pitch::C,
            Pitch::DFlat | Pitch::D | Pitch::DSharp => Pitch::D,
            Pitch::EFlat | Pitch::E => Pitch::E,
            Pitch::F | Pitch::FSharp => Pitch::F,
            Pitch::GFlat | Pitch::G | Pitch::GSharp => Pitch::G,
            Pitch::AFlat | Pitch::A | Pitch::ASharp => Pitch::A,
            Pitch::BFlat | Pitch::B => Pitch::B,
        }
    }

    /// Index of the spelling's letter in C D E F G A B.
    fn letter_index(&self) -> usize {
        match self.natural() {
            Pitch::C => 0,
            Pitch::D => 1,
            Pitch::E => 2,
            Pitch::F => 3,
            Pitch::G => 4,
            Pitch::A => 5,
            _ => 6,
        }
    }

    /// Directional semitone distance from self up to `to`, 0–11.
    ///
    /// Not symmetric: unless the pitches are enharmonically equal,
    /// `p.absolute_distance(q) + q.absolute_distance(p) == 12`.
    ///
    /// # Example
    /// ```
    /// use tab_score::primitives::Pitch;
    /// assert_eq!(Pitch::E.absolute_distance(Pitch::G), 3);
    /// assert_eq!(Pitch::G.absolute_distance(Pitch::E), 9);
    /// ```
    pub fn absolute_distance(&self, to: Pitch) -> u8 {
        (to.value() + 12 - self.value()) % 12
    }

    /// True if both spellings share the numeric class (C♯ and D♭).
    pub fn is_enharmonic(&self, other: Pitch) -> bool {
        self.value() == other.value()
    }

    /// Transpose up by a named interval, keeping the spelling idiomatic.
    ///
    /// An interval absent from this spelling's table returns the pitch
    /// unchanged; transposition is not considered a failing operation.
    ///
    /// # Example
    /// ```
    /// use tab_score::primitives::{Interval, Pitch};
    /// assert_eq!(Pitch::C.transpose(Interval::MajorThird), Pitch::E);
    /// assert_eq!(Pitch::A.transpose(Interval::MajorThird), Pitch::CSharp);
    /// assert_eq!(Pitch::C.transpose(Interval::DiminishedSeventh), Pitch::A);
    /// ```
    pub fn transpose(&self, interval: Interval) -> Pitch {
        TRANSPOSITIONS
            .get(&(*self, interval))
            .copied()
            .unwrap_or(*self)
    }

    /// Reverse lookup in the transposition table: the named interval that
    /// reaches `to` from self.
    ///
    /// Spellings the table never targets from self are an error — the
    /// table is populated per spelling, and coverage is deliberately
    /// asymmetric rather than falling back to raw semitone math.
    ///
    /// # Example
    /// ```
    /// use tab_score::primitives::{Interval, Pitch};
    /// assert_eq!(Pitch::C.interval_to(Pitch::G), Ok(Interval::PerfectFifth));
    /// assert!(Pitch::C.interval_to(Pitch::CSharp).is_err());
    /// ```
    pub fn interval_to(&self, to: Pitch) -> PitchResult<Interval> {
        let matches: Vec<Interval> = Interval::ALL
            .iter()
            .copied()
            .filter(|i| TRANSPOSITIONS.get(&(*self, *i)) == Some(&to))
            .collect();
        let steps = (to.letter_index() + 7 - self.letter_index()) % 7;
        matches
            .iter()
            .copied()
            .find(|i| (i.number() as usize - 1) % 7 == steps)
            .or_else(|| matches.first().copied())
            .ok_or(PitchError::InvalidInterval {
                from: self.name(),
                to: to.name(),
            })
    }

    pub fn from_primitives(primitives: &PitchPrimitives) -> PitchResult<Pitch> {
        Pitch::ALL
            .iter()
            .copied()
            .find(|p| {
                p.name() == primitives.name && p.value() == primitives.value
            })
            .ok_or_else(|| PitchError::InvalidPitch {
                name: primitives.name.clone(),
                value: primitives.value,
            })
    }

    pub fn to_primitives(&self) -> PitchPrimitives {
        PitchPrimitives {
            name: self.name().to_string(),
            natural_name: self.natural_name().to_string(),
            value: self.value(),
            accidental: self.accidental(),
        }
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Wire shape of a pitch, round-tripped against the fixed catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitchPrimitives {
    pub name: String,
    pub natural_name: String,
    pub value: u8,
    pub accidental: Accidental,
}

/// Spelled transposition targets, every pitch × every named interval.
///
/// Built in a second pass over the finished catalogs: the letter-correct
/// spelling when it exists among the 17, otherwise an idiomatic fallback
/// of the target class (natural first, then the root's own accidental).
static TRANSPOSITIONS: Lazy<HashMap<(Pitch, Interval), Pitch>> =
    Lazy::new(build_transpositions);

fn build_transpositions() -> HashMap<(Pitch, Interval), Pitch> {
    let mut table = HashMap::new();
    for &pitch in Pitch::ALL.iter() {
        for &interval in Interval::ALL.iter() {
            let class = (pitch.value() + interval.semitones() as u8) % 12;
            let letter =
                (pitch.letter_index() + interval.number() as usize - 1) % 7;
            let target = Pitch::ALL
                .iter()
                .copied()
                .find(|c| c.letter_index() == letter && c.value() == class)
                .or_else(|| fallback_spelling(pitch, class));
            if let Some(target) = target {
                table.insert((pitch, interval), target);
            }
        }
    }
    table
}

fn fallback_spelling(root: Pitch, class: u8) -> Option<Pitch> {
    let candidates: Vec<Pitch> = Pitch::ALL
        .iter()
        .copied()
        .filter(|c| c.value() == class)
        .collect();
    candidates
        .iter()
        .copied()
        .find(|c| c.accidental() == Accidental::Natural)
        .or_else(|| {
            candidates
                .iter()
                .copied()
                .find(|c| c.accidental() == root.accidental())
        })
        .or_else(|| candidates.first().copied())
}
