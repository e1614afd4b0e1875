//! Western tonal pitch space, projected on a six-string fretboard.
//!
//! At first, a [`primitives::PitchLine`] or [`primitives::ClosedChord`] is
//! built by the caller (usually from an external line builder or chord
//! catalog). Then the mapping engine places it on concrete strings and frets,
//! constrained to a [`fretboard::Position`]. Then the chosen frets are
//! rendered to a fixed-width ASCII grid by [`tab_render::Tab`].
//!
//! All catalogs (pitches, intervals, strings, positions) are immutable and
//! built once; mapping and rendering are pure functions over them.

pub mod fretboard;
pub mod mapping;
pub mod primitives;
pub mod tab_render;
