//! Strings and the six-string collection.
//!
//! Strings are indexed 1–6 from the highest-pitched string down, and a
//! string only knows its own open pitch; neighbor navigation is index
//! arithmetic on the collection, saturating at the edges (the outermost
//! string's neighbor is itself).

use serde::{Deserialize, Serialize};

use crate::primitives::{Direction, Pitch};

use super::Fret;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuitarString {
    label: String,
    open: Pitch,
    index: u8,
}

impl GuitarString {
    pub fn new(label: impl Into<String>, open: Pitch, index: u8) -> Self {
        Self {
            label: label.into(),
            open,
            index,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn open(&self) -> Pitch {
        self.open
    }

    /// 1-based index from the highest-pitched string.
    pub fn index(&self) -> u8 {
        self.index
    }

    /// The fret sounding `pitch` on this string: the directional
    /// semitone distance from the open pitch, 0–11.
    ///
    /// # Example
    /// ```
    /// use tab_score::fretboard::GuitarTuning;
    /// use tab_score::primitives::Pitch;
    /// let strings = GuitarTuning::standard().strings();
    /// let sixth = strings.sixth();
    /// assert_eq!(sixth.fret_for(Pitch::G).number(), 3);
    /// ```
    pub fn fret_for(&self, pitch: Pitch) -> Fret {
        Fret::new(
            self.index,
            self.open.absolute_distance(pitch) as i8,
            Some(pitch),
        )
    }

    /// Consecutive frets `low..=high` with the pitch each one sounds.
    ///
    /// The running pitch is advanced with `sharp()` so every fret keeps
    /// a real spelling, which the position and smoothness logic needs.
    pub fn frets_from_to(&self, low: i8, high: i8) -> Vec<Fret> {
        if low < 0 || high < low {
            return Vec::new();
        }
        let mut running = self.open;
        for _ in 0..low {
            running = running.sharp();
        }
        (low..=high)
            .map(|number| {
                let fret = Fret::new(self.index, number, Some(running));
                running = running.sharp();
                fret
            })
            .collect()
    }

    pub fn to_primitives(&self) -> StringPrimitives {
        StringPrimitives {
            name: self.label.clone(),
            index: self.index,
        }
    }
}

/// Wire shape of a string reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringPrimitives {
    pub name: String,
    pub index: u8,
}

/// The six strings, highest-pitched first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuitarStrings {
    strings: [GuitarString; 6],
}

impl GuitarStrings {
    pub fn new(strings: [GuitarString; 6]) -> Self {
        Self { strings }
    }

    /// Lookup by 1-based index.
    pub fn get(&self, index: u8) -> Option<&GuitarString> {
        match index {
            1..=6 => Some(&self.strings[index as usize - 1]),
            _ => None,
        }
    }

    pub fn first(&self) -> &GuitarString {
        &self.strings[0]
    }

    pub fn sixth(&self) -> &GuitarString {
        &self.strings[5]
    }

    /// Highest-pitched string first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &GuitarString> {
        self.strings.iter()
    }

    /// The next thinner (higher-pitched) string; the first string
    /// ascends to itself.
    pub fn next_ascending(&self, string: &GuitarString) -> &GuitarString {
        let index = string.index().saturating_sub(1).max(1);
        &self.strings[index as usize - 1]
    }

    /// The next thicker (lower-pitched) string; the sixth string
    /// descends to itself.
    pub fn next_descending(&self, string: &GuitarString) -> &GuitarString {
        let index = (string.index() + 1).min(6);
        &self.strings[index as usize - 1]
    }

    /// Candidate order for placing the next pitch of a line.
    ///
    /// Ascending lines try strings at or above the previous string's
    /// pitch first (index ≤ previous, nearest first); descending lines
    /// drop the thinner strings and walk from the previous string down.
    pub fn sorted_by_direction(
        &self,
        direction: Direction,
        previous: u8,
    ) -> Vec<&GuitarString> {
        let previous = previous.clamp(1, 6);
        let indexes: Vec<u8> = match direction {
            Direction::Ascending => (1..=previous)
                .rev()
                .chain(previous + 1..=6)
                .collect(),
            Direction::Descending => (previous..=6).collect(),
            Direction::Neutral | Direction::OctaveDown => {
                (1..=6).collect()
            }
        };
        indexes.into_iter().filter_map(|i| self.get(i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fretboard::GuitarTuning;

    fn strings() -> GuitarStrings {
        GuitarTuning::standard().strings()
    }

    #[test]
    fn frets_resolve_directional_distance() {
        let strings = strings();
        assert_eq!(strings.sixth().fret_for(Pitch::G).number(), 3);
        assert_eq!(strings.first().fret_for(Pitch::E).number(), 0);
        // Directional: C is below the open D string, so it wraps up.
        let fourth = strings.get(4).unwrap();
        assert_eq!(fourth.fret_for(Pitch::C).number(), 10);
    }

    #[test]
    fn enumerated_frets_carry_pitches() {
        let strings = strings();
        let fifth = strings.get(5).unwrap();
        let frets = fifth.frets_from_to(2, 5);
        assert_eq!(frets.len(), 4);
        for fret in frets {
            assert!((2..=5).contains(&fret.number()));
            let pitch = fret.pitch().unwrap();
            assert_eq!(
                (fifth.open().value() + fret.number() as u8) % 12,
                pitch.value()
            );
        }
        assert!(fifth.frets_from_to(3, 1).is_empty());
    }

    #[test]
    fn neighbor_navigation_saturates() {
        let strings = strings();
        assert_eq!(
            strings.next_ascending(strings.get(3).unwrap()).index(),
            2
        );
        assert_eq!(strings.next_ascending(strings.first()).index(), 1);
        assert_eq!(strings.next_descending(strings.sixth()).index(), 6);
    }

    #[test]
    fn direction_sorting() {
        let strings = strings();
        let order = |d, p| -> Vec<u8> {
            strings
                .sorted_by_direction(d, p)
                .iter()
                .map(|s| s.index())
                .collect()
        };
        assert_eq!(
            order(Direction::Ascending, 4),
            vec![4, 3, 2, 1, 5, 6]
        );
        assert_eq!(order(Direction::Descending, 4), vec![4, 5, 6]);
        assert_eq!(
            order(Direction::Neutral, 3),
            vec![1, 2, 3, 4, 5, 6]
        );
    }
}
