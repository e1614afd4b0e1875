//! Named, qualified intervals.
//!
//! Distances beyond the perfect octave are compound intervals
//! (9th = 13/14, 11th = 17/18, 13th = 21 semitones).

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub enum Quality {
    Minor,
    Major,
    Augmented,
    Diminished,
    Perfect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval {
    Unison,
    MinorSecond,
    MajorSecond,
    AugmentedSecond,
    MinorThird,
    MajorThird,
    DiminishedFourth,
    PerfectFourth,
    AugmentedFourth,
    DiminishedFifth,
    PerfectFifth,
    AugmentedFifth,
    MinorSixth,
    MajorSixth,
    DiminishedSeventh,
    MinorSeventh,
    MajorSeventh,
    PerfectOctave,
    MinorNinth,
    MajorNinth,
    PerfectEleventh,
    AugmentedEleventh,
    MajorThirteenth,
}

impl Interval {
    pub const ALL: [Interval; 23] = [
        Interval::Unison,
        Interval::MinorSecond,
        Interval::MajorSecond,
        Interval::AugmentedSecond,
        Interval::MinorThird,
        Interval::MajorThird,
        Interval::DiminishedFourth,
        Interval::PerfectFourth,
        Interval::AugmentedFourth,
        Interval::DiminishedFifth,
        Interval::PerfectFifth,
        Interval::AugmentedFifth,
        Interval::MinorSixth,
        Interval::MajorSixth,
        Interval::DiminishedSeventh,
        Interval::MinorSeventh,
        Interval::MajorSeventh,
        Interval::PerfectOctave,
        Interval::MinorNinth,
        Interval::MajorNinth,
        Interval::PerfectEleventh,
        Interval::AugmentedEleventh,
        Interval::MajorThirteenth,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Interval::Unison => "unison",
            Interval::MinorSecond => "minor second",
            Interval::MajorSecond => "major second",
            Interval::AugmentedSecond => "augmented second",
            Interval::MinorThird => "minor third",
            Interval::MajorThird => "major third",
            Interval::DiminishedFourth => "diminished fourth",
            Interval::PerfectFourth => "perfect fourth",
            Interval::AugmentedFourth => "augmented fourth",
            Interval::DiminishedFifth => "diminished fifth",
            Interval::PerfectFifth => "perfect fifth",
            Interval::AugmentedFifth => "augmented fifth",
            Interval::MinorSixth => "minor sixth",
            Interval::MajorSixth => "major sixth",
            Interval::DiminishedSeventh => "diminished seventh",
            Interval::MinorSeventh => "minor seventh",
            Interval::MajorSeventh => "major seventh",
            Interval::PerfectOctave => "perfect octave",
            Interval::MinorNinth => "minor ninth",
            Interval::MajorNinth => "major ninth",
            Interval::PerfectEleventh => "perfect eleventh",
            Interval::AugmentedEleventh => "augmented eleventh",
            Interval::MajorThirteenth => "major thirteenth",
        }
    }

    pub fn abreviature(&self) -> &'static str {
        match self {
            Interval::Unison => "P1",
            Interval::MinorSecond => "m2",
            Interval::MajorSecond => "M2",
            Interval::AugmentedSecond => "A2",
            Interval::MinorThird => "m3",
            Interval::MajorThird => "M3",
            Interval::DiminishedFourth => "d4",
            Interval::PerfectFourth => "P4",
            Interval::AugmentedFourth => "A4",
            Interval::DiminishedFifth => "d5",
            Interval::PerfectFifth => "P5",
            Interval::AugmentedFifth => "A5",
            Interval::MinorSixth => "m6",
            Interval::MajorSixth => "M6",
            Interval::DiminishedSeventh => "d7",
            Interval::MinorSeventh => "m7",
            Interval::MajorSeventh => "M7",
            Interval::PerfectOctave => "P8",
            Interval::MinorNinth => "m9",
            Interval::MajorNinth => "M9",
            Interval::PerfectEleventh => "P11",
            Interval::AugmentedEleventh => "A11",
            Interval::MajorThirteenth => "M13",
        }
    }

    /// Signed semitone distance, ascending.
    pub fn semitones(&self) -> i8 {
        match self {
            Interval::Unison => 0,
            Interval::MinorSecond => 1,
            Interval::MajorSecond => 2,
            Interval::AugmentedSecond | Interval::MinorThird => 3,
            Interval::MajorThird | Interval::DiminishedFourth => 4,
            Interval::PerfectFourth => 5,
            Interval::AugmentedFourth | Interval::DiminishedFifth => 6,
            Interval::PerfectFifth => 7,
            Interval::AugmentedFifth | Interval::MinorSixth => 8,
            Interval::MajorSixth | Interval::DiminishedSeventh => 9,
            Interval::MinorSeventh => 10,
            Interval::MajorSeventh => 11,
            Interval::PerfectOctave => 12,
            Interval::MinorNinth => 13,
            Interval::MajorNinth => 14,
            Interval::PerfectEleventh => 17,
            Interval::AugmentedEleventh => 18,
            Interval::MajorThirteenth => 21,
        }
    }

    /// Diatonic number of the interval (a third spans 3 letters).
    pub fn number(&self) -> u8 {
        match self {
            Interval::Unison => 1,
            Interval::MinorSecond
            | Interval::MajorSecond
            | Interval::AugmentedSecond => 2,
            Interval::MinorThird | Interval::MajorThird => 3,
            Interval::DiminishedFourth
            | Interval::PerfectFourth
            | Interval::AugmentedFourth => 4,
            Interval::DiminishedFifth
            | Interval::PerfectFifth
            | Interval::AugmentedFifth => 5,
            Interval::MinorSixth | Interval::MajorSixth => 6,
            Interval::DiminishedSeventh
            | Interval::MinorSeventh
            | Interval::MajorSeventh => 7,
            Interval::PerfectOctave => 8,
            Interval::MinorNinth | Interval::MajorNinth => 9,
            Interval::PerfectEleventh | Interval::AugmentedEleventh => 11,
            Interval::MajorThirteenth => 13,
        }
    }

    pub fn quality(&self) -> Quality {
        match self {
            Interval::MinorSecond
            | Interval::MinorThird
            | Interval::MinorSixth
            | Interval::MinorSeventh
            | Interval::MinorNinth => Quality::Minor,
            Interval::MajorSecond
            | Interval::MajorThird
            | Interval::MajorSixth
            | Interval::MajorSeventh
            | Interval::MajorNinth
            | Interval::MajorThirteenth => Quality::Major,
            Interval::AugmentedSecond
            | Interval::AugmentedFourth
            | Interval::AugmentedFifth
            | Interval::AugmentedEleventh => Quality::Augmented,
            Interval::DiminishedFourth
            | Interval::DiminishedFifth
            | Interval::DiminishedSeventh => Quality::Diminished,
            Interval::Unison
            | Interval::PerfectFourth
            | Interval::PerfectFifth
            | Interval::PerfectOctave
            | Interval::PerfectEleventh => Quality::Perfect,
        }
    }

    /// The complementary interval within an octave. Compound intervals
    /// invert through their simple form (a ninth inverts as a second).
    pub fn invert(&self) -> Interval {
        match self {
            Interval::Unison => Interval::PerfectOctave,
            Interval::MinorSecond => Interval::MajorSeventh,
            Interval::MajorSecond => Interval::MinorSeventh,
            Interval::AugmentedSecond => Interval::DiminishedSeventh,
            Interval::MinorThird => Interval::MajorSixth,
            Interval::MajorThird => Interval::MinorSixth,
            Interval::DiminishedFourth => Interval::AugmentedFifth,
            Interval::PerfectFourth => Interval::PerfectFifth,
            Interval::AugmentedFourth => Interval::DiminishedFifth,
            Interval::DiminishedFifth => Interval::AugmentedFourth,
            Interval::PerfectFifth => Interval::PerfectFourth,
            Interval::AugmentedFifth => Interval::DiminishedFourth,
            Interval::MinorSixth => Interval::MajorThird,
            Interval::MajorSixth => Interval::MinorThird,
            Interval::DiminishedSeventh => Interval::AugmentedSecond,
            Interval::MinorSeventh => Interval::MajorSecond,
            Interval::MajorSeventh => Interval::MinorSecond,
            Interval::PerfectOctave => Interval::Unison,
            Interval::MinorNinth => Interval::MajorSeventh,
            Interval::MajorNinth => Interval::MinorSeventh,
            Interval::PerfectEleventh => Interval::PerfectFifth,
            Interval::AugmentedEleventh => Interval::DiminishedFifth,
            Interval::MajorThirteenth => Interval::MinorThird,
        }
    }

    /// The compound equivalent an octave up (2nd → 9th); intervals with
    /// no compound form in the catalog are returned unchanged.
    pub fn raise_octave(&self) -> Interval {
        match self {
            Interval::Unison => Interval::PerfectOctave,
            Interval::MinorSecond => Interval::MinorNinth,
            Interval::MajorSecond => Interval::MajorNinth,
            Interval::PerfectFourth => Interval::PerfectEleventh,
            Interval::AugmentedFourth => Interval::AugmentedEleventh,
            Interval::MajorSixth => Interval::MajorThirteenth,
            other => *other,
        }
    }

    /// Descriptive export; there is no reverse constructor.
    pub fn to_primitives(&self) -> IntervalPrimitives {
        IntervalPrimitives {
            name: self.name().to_string(),
            abreviature: self.abreviature().to_string(),
            distance: self.semitones(),
            quality: self.quality(),
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Wire shape of an interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalPrimitives {
    pub name: String,
    pub abreviature: String,
    pub distance: i8,
    pub quality: Quality,
}
