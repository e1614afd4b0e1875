//! Melodic-line placement and the best-of-N smoothness search.

use itertools::Itertools;
use log::{debug, trace};

use crate::fretboard::{
    Fret, GuitarStrings, Position, PositionTolerance,
};
use crate::primitives::{Direction, PitchLine, PitchLines};

/// One melodic line placed on the fretboard.
///
/// A pitch that fits nowhere in the position is dropped silently; the
/// best-of-N search in [`PositionFrets`] penalizes the shorter result,
/// so lossy candidates only win when nothing better exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuitarPitchLine {
    frets: Vec<Fret>,
}

impl GuitarPitchLine {
    /// Walk the line, trying direction-sorted strings for every pitch
    /// and taking the first fret inside the position.
    ///
    /// Ascending lines refuse strings below the last placed one,
    /// descending lines refuse strings above it. `OctaveDown` first
    /// tries the string two indexes further, simulating an octave drop.
    pub fn map(
        strings: &GuitarStrings,
        position: &Position,
        line: &PitchLine,
        start: u8,
    ) -> Self {
        let direction = line.direction();
        let mut frets: Vec<Fret> = Vec::new();
        let mut last: Option<u8> = None;
        for &pitch in line.pitches() {
            let previous = last.unwrap_or(start);
            let mut placed: Option<Fret> = None;
            for candidate in
                strings.sorted_by_direction(direction, previous)
            {
                if let Some(last_index) = last {
                    match direction {
                        Direction::Ascending
                            if candidate.index() > last_index =>
                        {
                            continue
                        }
                        Direction::Descending
                            if candidate.index() < last_index =>
                        {
                            continue
                        }
                        _ => {}
                    }
                }
                if direction == Direction::OctaveDown {
                    if let Some(lower) =
                        strings.get(candidate.index() + 2)
                    {
                        let fret = lower.fret_for(pitch);
                        if position
                            .contains(&fret, PositionTolerance::EXACT)
                        {
                            placed = Some(fret);
                            break;
                        }
                    }
                }
                let fret = candidate.fret_for(pitch);
                if position.contains(&fret, PositionTolerance::EXACT) {
                    placed = Some(fret);
                    break;
                }
            }
            match placed {
                Some(fret) => {
                    last = Some(fret.string());
                    frets.push(fret);
                }
                None => trace!(
                    "{pitch} fits nowhere in position {}, dropped",
                    position.name()
                ),
            }
        }
        Self { frets }
    }

    pub fn frets(&self) -> &[Fret] {
        &self.frets
    }

    pub fn len(&self) -> usize {
        self.frets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frets.is_empty()
    }

    /// 0 when every fret shares one string, 1 within adjacent strings,
    /// 2 within two, otherwise 3.
    pub fn smoothness(&self) -> u8 {
        let spread = self
            .frets
            .iter()
            .tuple_combinations()
            .map(|(a, b)| {
                (a.string() as i8 - b.string() as i8).unsigned_abs()
            })
            .max()
            .unwrap_or(0);
        match spread {
            0 => 0,
            1 => 1,
            2 => 2,
            _ => 3,
        }
    }
}

/// Best-of-N line mapping inside one position.
///
/// Every string is tried as the starting reference; candidates are
/// ranked by smoothness plus the number of dropped pitches, and the
/// first minimum wins.
pub struct PositionFrets<'a> {
    strings: &'a GuitarStrings,
    position: &'a Position,
}

impl<'a> PositionFrets<'a> {
    pub fn new(
        strings: &'a GuitarStrings,
        position: &'a Position,
    ) -> Self {
        Self { strings, position }
    }

    /// # Example
    /// ```
    /// use tab_score::fretboard::{GuitarTuning, Position};
    /// use tab_score::mapping::PositionFrets;
    /// use tab_score::primitives::{Direction, Pitch, PitchLine};
    ///
    /// let strings = GuitarTuning::standard().strings();
    /// let line = PitchLine::new(vec![Pitch::E], Direction::Neutral);
    /// let mapped = PositionFrets::new(&strings, Position::c()).map(&line);
    /// assert_eq!(mapped.frets()[0].string(), 4);
    /// assert_eq!(mapped.frets()[0].number(), 2);
    /// ```
    pub fn map(&self, line: &PitchLine) -> GuitarPitchLine {
        let best = (1..=6u8)
            .map(|start| {
                GuitarPitchLine::map(
                    self.strings,
                    self.position,
                    line,
                    start,
                )
            })
            .min_by_key(|candidate| Self::score(candidate, line))
            .unwrap_or(GuitarPitchLine { frets: Vec::new() });
        debug!(
            "line of {} mapped in {} with smoothness {}",
            line.len(),
            self.position.name(),
            best.smoothness()
        );
        best
    }

    fn score(candidate: &GuitarPitchLine, line: &PitchLine) -> usize {
        candidate.smoothness() as usize
            + line.len().abs_diff(candidate.len())
    }
}

/// A whole sequence of lines, mapped one after another.
///
/// The last placed string of a line anchors the candidate order of the
/// next one, so consecutive phrases stay in one region of the neck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuitarPitchLines {
    lines: Vec<GuitarPitchLine>,
}

impl GuitarPitchLines {
    pub fn map(
        strings: &GuitarStrings,
        position: &Position,
        lines: &PitchLines,
    ) -> Self {
        let mut mapped = Vec::with_capacity(lines.len());
        let mut last: Option<u8> = None;
        for line in lines.iter() {
            let placed = match last {
                Some(start) => {
                    GuitarPitchLine::map(strings, position, line, start)
                }
                None => {
                    PositionFrets::new(strings, position).map(line)
                }
            };
            if let Some(fret) = placed.frets().last() {
                last = Some(fret.string());
            }
            mapped.push(placed);
        }
        Self { lines: mapped }
    }

    pub fn lines(&self) -> &[GuitarPitchLine] {
        &self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fretboard::GuitarTuning;
    use crate::primitives::Pitch;

    fn strings() -> GuitarStrings {
        GuitarTuning::standard().strings()
    }

    fn numbers(line: &GuitarPitchLine) -> Vec<(u8, i8)> {
        line.frets()
            .iter()
            .map(|f| (f.string(), f.number()))
            .collect()
    }

    #[test]
    fn single_pitch_lands_in_the_position() {
        let strings = strings();
        let line = PitchLine::new(vec![Pitch::E], Direction::Neutral);
        let mapped =
            PositionFrets::new(&strings, Position::c()).map(&line);
        assert_eq!(numbers(&mapped), vec![(4, 2)]);
    }

    #[test]
    fn ascending_lines_move_toward_thinner_strings() {
        let strings = strings();
        let line = PitchLine::new(
            vec![Pitch::C, Pitch::D, Pitch::E],
            Direction::Ascending,
        );
        let mapped =
            PositionFrets::new(&strings, Position::open()).map(&line);
        assert_eq!(numbers(&mapped), vec![(2, 1), (2, 3), (1, 0)]);
        assert_eq!(mapped.smoothness(), 1);
    }

    #[test]
    fn descending_lines_move_toward_thicker_strings() {
        let strings = strings();
        let line = PitchLine::new(
            vec![Pitch::E, Pitch::D, Pitch::C],
            Direction::Descending,
        );
        let mapped =
            PositionFrets::new(&strings, Position::open()).map(&line);
        assert_eq!(numbers(&mapped), vec![(1, 0), (2, 3), (2, 1)]);
    }

    #[test]
    fn octave_down_prefers_the_dropped_register() {
        let strings = strings();
        let neutral = PitchLine::new(vec![Pitch::G], Direction::Neutral);
        let dropped =
            PitchLine::new(vec![Pitch::G], Direction::OctaveDown);
        let position = Position::open();
        let frets = PositionFrets::new(&strings, position);
        // G normally takes the first string; the octave drop moves it
        // two strings down, to the open third string.
        assert_eq!(numbers(&frets.map(&neutral)), vec![(1, 3)]);
        assert_eq!(numbers(&frets.map(&dropped)), vec![(3, 0)]);
    }

    #[test]
    fn unplaceable_pitches_are_dropped() {
        let strings = strings();
        let line = PitchLine::new(
            vec![Pitch::C, Pitch::A],
            Direction::Ascending,
        );
        let mapped = GuitarPitchLine::map(
            &strings,
            Position::open(),
            &line,
            1,
        );
        // A above the placed C exists only on refused thicker strings.
        assert_eq!(numbers(&mapped), vec![(2, 1)]);
    }

    #[test]
    fn line_sequences_share_the_neck_region() {
        let strings = strings();
        let mut lines = PitchLines::new();
        lines.push(PitchLine::new(
            vec![Pitch::C, Pitch::E],
            Direction::Ascending,
        ));
        lines.push(PitchLine::new(
            vec![Pitch::D, Pitch::C],
            Direction::Descending,
        ));
        let mapped =
            GuitarPitchLines::map(&strings, Position::open(), &lines);
        assert_eq!(mapped.lines().len(), 2);
        for line in mapped.lines() {
            assert_eq!(line.len(), 2);
        }
    }
}
