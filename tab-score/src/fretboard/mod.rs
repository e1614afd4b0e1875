//! The six-string instrument: strings with open pitches, tunings,
//! frets, and the named hand positions that constrain mapping.

pub mod fret;
pub mod position;
pub mod string;
pub mod tuning;

pub use fret::{Fret, FretPrimitives};
pub use position::{Position, PositionPrimitives, PositionTolerance};
pub use string::{GuitarString, GuitarStrings, StringPrimitives};
pub use tuning::GuitarTuning;

#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum FretboardError {
    #[error("invalid position: `{0}`")]
    InvalidPosition(String),
    #[error("invalid string: `{0}`")]
    InvalidString(String),
    #[error("can not map chord: {0}")]
    CannotMapChord(String),
}
pub type FretboardResult<T> = Result<T, FretboardError>;
