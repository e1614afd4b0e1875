//! Chords as the mapping engine sees them: a root, a pattern from the
//! fixed catalog, and the resulting pitches in function order
//! (root, third, fifth, …). Voicing is left to the fretboard engine.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Interval, Pitch, PitchError, PitchResult};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub enum ChordFunction {
    Root,
    Third,
    Fifth,
    Seventh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChordPattern {
    Major,
    Minor,
    Diminished,
    Augmented,
    DominantSeventh,
    MajorSeventh,
    MinorSeventh,
}

impl ChordPattern {
    pub const ALL: [ChordPattern; 7] = [
        ChordPattern::Major,
        ChordPattern::Minor,
        ChordPattern::Diminished,
        ChordPattern::Augmented,
        ChordPattern::DominantSeventh,
        ChordPattern::MajorSeventh,
        ChordPattern::MinorSeventh,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ChordPattern::Major => "major",
            ChordPattern::Minor => "minor",
            ChordPattern::Diminished => "diminished",
            ChordPattern::Augmented => "augmented",
            ChordPattern::DominantSeventh => "dominant seventh",
            ChordPattern::MajorSeventh => "major seventh",
            ChordPattern::MinorSeventh => "minor seventh",
        }
    }

    /// Chord tones above the root, in function order.
    pub fn intervals(&self) -> &'static [(ChordFunction, Interval)] {
        match self {
            ChordPattern::Major => &[
                (ChordFunction::Root, Interval::Unison),
                (ChordFunction::Third, Interval::MajorThird),
                (ChordFunction::Fifth, Interval::PerfectFifth),
            ],
            ChordPattern::Minor => &[
                (ChordFunction::Root, Interval::Unison),
                (ChordFunction::Third, Interval::MinorThird),
                (ChordFunction::Fifth, Interval::PerfectFifth),
            ],
            ChordPattern::Diminished => &[
                (ChordFunction::Root, Interval::Unison),
                (ChordFunction::Third, Interval::MinorThird),
                (ChordFunction::Fifth, Interval::DiminishedFifth),
            ],
            ChordPattern::Augmented => &[
                (ChordFunction::Root, Interval::Unison),
                (ChordFunction::Third, Interval::MajorThird),
                (ChordFunction::Fifth, Interval::AugmentedFifth),
            ],
            ChordPattern::DominantSeventh => &[
                (ChordFunction::Root, Interval::Unison),
                (ChordFunction::Third, Interval::MajorThird),
                (ChordFunction::Fifth, Interval::PerfectFifth),
                (ChordFunction::Seventh, Interval::MinorSeventh),
            ],
            ChordPattern::MajorSeventh => &[
                (ChordFunction::Root, Interval::Unison),
                (ChordFunction::Third, Interval::MajorThird),
                (ChordFunction::Fifth, Interval::PerfectFifth),
                (ChordFunction::Seventh, Interval::MajorSeventh),
            ],
            ChordPattern::MinorSeventh => &[
                (ChordFunction::Root, Interval::Unison),
                (ChordFunction::Third, Interval::MinorThird),
                (ChordFunction::Fifth, Interval::PerfectFifth),
                (ChordFunction::Seventh, Interval::MinorSeventh),
            ],
        }
    }

    /// Catalog lookup by name or common shorthand.
    pub fn from_name(name: &str) -> PitchResult<ChordPattern> {
        match name.to_lowercase().as_str() {
            "major" | "maj" => Ok(ChordPattern::Major),
            "minor" | "min" => Ok(ChordPattern::Minor),
            "diminished" | "dim" => Ok(ChordPattern::Diminished),
            "augmented" | "aug" => Ok(ChordPattern::Augmented),
            "dominant seventh" | "7" => Ok(ChordPattern::DominantSeventh),
            "major seventh" | "maj7" => Ok(ChordPattern::MajorSeventh),
            "minor seventh" | "min7" => Ok(ChordPattern::MinorSeventh),
            other => {
                Err(PitchError::UnknownChordPattern(other.to_string()))
            }
        }
    }
}

/// A chord in close voicing: tones in function order, no octave
/// displacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClosedChord {
    root: Pitch,
    pattern: ChordPattern,
}

impl ClosedChord {
    pub fn new(root: Pitch, pattern: ChordPattern) -> Self {
        Self { root, pattern }
    }

    pub fn root(&self) -> Pitch {
        self.root
    }

    pub fn pattern(&self) -> ChordPattern {
        self.pattern
    }

    /// Chord tones in function order (root first).
    ///
    /// # Example
    /// ```
    /// use tab_score::primitives::{ChordPattern, ClosedChord, Pitch};
    /// let chord = ClosedChord::new(Pitch::C, ChordPattern::Major);
    /// assert_eq!(chord.pitches(), vec![Pitch::C, Pitch::E, Pitch::G]);
    /// ```
    pub fn pitches(&self) -> Vec<Pitch> {
        self.pattern
            .intervals()
            .iter()
            .map(|(_, interval)| self.root.transpose(*interval))
            .collect()
    }

    pub fn pitch_for_function(
        &self,
        function: ChordFunction,
    ) -> Option<Pitch> {
        self.pattern
            .intervals()
            .iter()
            .find(|(f, _)| *f == function)
            .map(|(_, interval)| self.root.transpose(*interval))
    }
}

impl fmt::Display for ClosedChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.root, self.pattern.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn functions_resolve_to_spelled_pitches() {
        let chord = ClosedChord::new(Pitch::C, ChordPattern::Major);
        assert_eq!(
            chord.pitch_for_function(ChordFunction::Third),
            Some(Pitch::E)
        );
        assert_eq!(
            chord.pitch_for_function(ChordFunction::Seventh),
            None
        );

        let chord = ClosedChord::new(Pitch::A, ChordPattern::Major);
        assert_eq!(
            chord.pitch_for_function(ChordFunction::Third),
            Some(Pitch::CSharp)
        );
    }

    #[test]
    fn seventh_chords_carry_four_tones() {
        let chord =
            ClosedChord::new(Pitch::G, ChordPattern::DominantSeventh);
        assert_eq!(
            chord.pitches(),
            vec![Pitch::G, Pitch::B, Pitch::D, Pitch::F]
        );
    }

    #[test]
    fn diminished_fifth_is_spelled_down() {
        let chord = ClosedChord::new(Pitch::B, ChordPattern::Diminished);
        assert_eq!(
            chord.pitches(),
            vec![Pitch::B, Pitch::D, Pitch::F]
        );
    }

    #[test]
    fn pattern_lookup() {
        assert_eq!(
            ChordPattern::from_name("maj7"),
            Ok(ChordPattern::MajorSeventh)
        );
        assert_eq!(
            ChordPattern::from_name("sus2"),
            Err(PitchError::UnknownChordPattern("sus2".to_string()))
        );
        assert_eq!(format!("{}", ClosedChord::new(Pitch::EFlat, ChordPattern::Minor)), "Eb minor");
    }
}
