//! The fret-mapping engine.
//!
//! Chords and melodic lines come in as abstract pitches; what leaves is
//! a row or sequence of concrete [`crate::fretboard::Fret`] choices,
//! constrained to a position and biased by string adjacency. Mapping
//! never fails loudly — an unplaceable chord degenerates to blank frets
//! and an unplaceable line pitch is dropped — except where a caller
//! explicitly requires a full mapping.

pub mod chord;
pub mod line;

pub use chord::GuitarChord;
pub use line::{GuitarPitchLine, GuitarPitchLines, PositionFrets};
