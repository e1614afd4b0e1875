//! Chord voicing on the fretboard.

use log::{debug, trace};

use crate::fretboard::{
    Fret, FretboardError, FretboardResult, GuitarString, GuitarStrings,
    Position, PositionTolerance,
};
use crate::primitives::{ClosedChord, Pitch};

/// A candidate fret at least this far from any placed fret is out of
/// the hand's reach.
const MAX_FRET_SPREAD: i8 = 4;

/// An open string sounding together with frets at or above this is in
/// the wrong register and gets raised an octave.
const OPEN_REGISTER_THRESHOLD: i8 = 4;

/// A chord voiced as one fret row, lowest string first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuitarChord {
    frets: Vec<Fret>,
    context: String,
}

impl GuitarChord {
    /// Voice a chord by walking its tones from `bass` to successive
    /// ascending strings.
    ///
    /// A tone whose fret lands out of reach of the placed frets is
    /// first raised an octave, then moved to the next string, where the
    /// recomputed fret is accepted as-is.
    pub fn from_bass_string(
        strings: &GuitarStrings,
        chord: &ClosedChord,
        bass: &GuitarString,
    ) -> Self {
        let mut frets: Vec<Fret> = Vec::new();
        let mut string = bass;
        for pitch in chord.pitches() {
            let mut fret = string.fret_for(pitch);
            if Self::too_far(&frets, &fret) {
                trace!("{pitch} at {fret:?} out of reach, raising octave");
                fret = fret.octave_up();
            }
            if Self::too_far(&frets, &fret) {
                string = strings.next_ascending(string);
                trace!(
                    "{pitch} still out of reach, moving to string {}",
                    string.index()
                );
                fret = string.fret_for(pitch);
            }
            frets.push(fret);
            string = strings.next_ascending(string);
        }
        Self::correct_open_register(&mut frets);
        debug!("{chord} from string {}: {frets:?}", bass.index());
        Self {
            frets,
            context: format!("{chord} from string {}", bass.index()),
        }
    }

    /// Voice a chord inside a position, walking strings from the sixth
    /// to the first and taking the first chord tone that fits each one.
    ///
    /// The open position may double tones across strings; any other
    /// position skips tones already placed and leaves a blank fret on a
    /// string nothing fits.
    ///
    /// # Example
    /// ```
    /// use tab_score::fretboard::{GuitarTuning, Position};
    /// use tab_score::mapping::GuitarChord;
    /// use tab_score::primitives::{ChordPattern, ClosedChord, Pitch};
    ///
    /// let strings = GuitarTuning::standard().strings();
    /// let chord = ClosedChord::new(Pitch::C, ChordPattern::Major);
    /// let mapped =
    ///     GuitarChord::in_position(&strings, &chord, Position::open());
    /// assert_eq!(mapped.fret_row(), "0\n1\n0\n2\n3\n0");
    /// ```
    pub fn in_position(
        strings: &GuitarStrings,
        chord: &ClosedChord,
        position: &Position,
    ) -> Self {
        let doubling = position.is_open();
        let mut used: Vec<Pitch> = Vec::new();
        let mut frets = Vec::with_capacity(6);
        for string in strings.iter().rev() {
            let mut chosen: Option<Fret> = None;
            for pitch in chord.pitches() {
                if !doubling && used.contains(&pitch) {
                    continue;
                }
                let fret = string.fret_for(pitch);
                if position.contains(&fret, PositionTolerance::CHORD) {
                    chosen = Some(fret);
                    break;
                }
                trace!(
                    "string {}: {pitch} at fret {} outside {}",
                    string.index(),
                    fret.number(),
                    position.name()
                );
            }
            match chosen {
                Some(fret) => {
                    if let Some(pitch) = fret.pitch() {
                        used.push(pitch);
                    }
                    frets.push(fret);
                }
                None => frets.push(Fret::blank(string.index())),
            }
        }
        debug!("{chord} in position {}: {frets:?}", position.name());
        Self {
            frets,
            context: format!("{chord} in position {}", position.name()),
        }
    }

    /// Frets in placement order (lowest string first).
    pub fn frets(&self) -> &[Fret] {
        &self.frets
    }

    /// The fret numbers top-to-bottom as a tab column reads them,
    /// highest string first, one per line.
    pub fn fret_row(&self) -> String {
        self.frets
            .iter()
            .rev()
            .map(|f| f.glyph())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// True when no string sounds at all.
    pub fn is_silent(&self) -> bool {
        self.frets.iter().all(Fret::is_blank)
    }

    /// For callers that demand a full mapping: an all-blank row becomes
    /// the explicit cannot-map-chord error.
    pub fn require_mapped(self) -> FretboardResult<Self> {
        match self.is_silent() {
            true => Err(FretboardError::CannotMapChord(self.context)),
            false => Ok(self),
        }
    }

    fn too_far(placed: &[Fret], candidate: &Fret) -> bool {
        placed.iter().any(|f| {
            (f.number() - candidate.number()).abs() >= MAX_FRET_SPREAD
        })
    }

    /// An open string next to high frets belongs an octave up.
    fn correct_open_register(frets: &mut [Fret]) {
        let has_open = frets.iter().any(Fret::is_open);
        let has_high = frets
            .iter()
            .any(|f| f.number() >= OPEN_REGISTER_THRESHOLD);
        if has_open && has_high {
            for fret in frets.iter_mut() {
                if fret.is_open() {
                    *fret = fret.octave_up();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fretboard::GuitarTuning;
    use crate::primitives::ChordPattern;

    fn strings() -> GuitarStrings {
        GuitarTuning::standard().strings()
    }

    fn numbers(chord: &GuitarChord) -> Vec<(u8, i8)> {
        chord
            .frets()
            .iter()
            .map(|f| (f.string(), f.number()))
            .collect()
    }

    #[test]
    fn c_major_from_the_sixth_string() {
        let strings = strings();
        let chord = ClosedChord::new(Pitch::C, ChordPattern::Major);
        let mapped = GuitarChord::from_bass_string(
            &strings,
            &chord,
            strings.sixth(),
        );
        assert_eq!(numbers(&mapped), vec![(6, 8), (5, 7), (4, 5)]);
    }

    #[test]
    fn g_major_keeps_its_open_string() {
        let strings = strings();
        let chord = ClosedChord::new(Pitch::G, ChordPattern::Major);
        let mapped = GuitarChord::from_bass_string(
            &strings,
            &chord,
            strings.sixth(),
        );
        // All frets stay close; the open D needs no register fix.
        assert_eq!(numbers(&mapped), vec![(6, 3), (5, 2), (4, 0)]);
    }

    #[test]
    fn open_register_correction() {
        let strings = strings();
        let chord = ClosedChord::new(Pitch::D, ChordPattern::Major);
        let mapped = GuitarChord::from_bass_string(
            &strings,
            &chord,
            strings.get(4).unwrap(),
        );
        // The open D coexists with high frets, so it is raised an
        // octave into their register.
        assert_eq!(numbers(&mapped), vec![(4, 12), (2, 7), (1, 5)]);
    }

    #[test]
    fn open_position_c_major_doubles_tones() {
        let strings = strings();
        let chord = ClosedChord::new(Pitch::C, ChordPattern::Major);
        let mapped = GuitarChord::in_position(
            &strings,
            &chord,
            Position::open(),
        );
        assert_eq!(mapped.fret_row(), "0\n1\n0\n2\n3\n0");
        assert!(!mapped.is_silent());
    }

    #[test]
    fn mapping_is_deterministic() {
        let strings = strings();
        let chord = ClosedChord::new(Pitch::A, ChordPattern::Minor);
        let first =
            GuitarChord::in_position(&strings, &chord, Position::c());
        let second =
            GuitarChord::in_position(&strings, &chord, Position::c());
        assert_eq!(first, second);
    }

    #[test]
    fn closed_position_skips_used_tones_and_blanks_the_rest() {
        let strings = strings();
        let chord = ClosedChord::new(Pitch::C, ChordPattern::Major);
        let mapped =
            GuitarChord::in_position(&strings, &chord, Position::d());
        let placed: Vec<Pitch> = mapped
            .frets()
            .iter()
            .filter_map(Fret::pitch)
            .collect();
        // Each tone appears exactly once, the other strings are blank.
        assert_eq!(placed.len(), 3);
        assert!(placed.contains(&Pitch::C));
        assert!(placed.contains(&Pitch::E));
        assert!(placed.contains(&Pitch::G));
        assert_eq!(
            mapped.frets().iter().filter(|f| f.is_blank()).count(),
            3
        );
    }

    #[test]
    fn silent_rows_surface_as_errors_on_demand() {
        let silent = GuitarChord {
            frets: (1..=6).rev().map(Fret::blank).collect(),
            context: "C major in position D".to_string(),
        };
        assert!(silent.is_silent());
        assert_eq!(
            silent.require_mapped(),
            Err(FretboardError::CannotMapChord(
                "C major in position D".to_string()
            ))
        );

        let strings = strings();
        let chord = ClosedChord::new(Pitch::E, ChordPattern::Minor);
        let mapped = GuitarChord::in_position(
            &strings,
            &chord,
            Position::open(),
        );
        assert!(mapped.require_mapped().is_ok());
    }
}
