//! Value types the mapping engine consumes.
//!
//! [`Pitch`] and [`Interval`] form the enharmonic algebra: a closed
//! 12-class space with 17 named spellings and transposition that keeps
//! spellings idiomatic. [`ClosedChord`] and [`PitchLine`] are the two
//! shapes of input the fretboard engine accepts.

pub mod chord;
pub mod interval;
pub mod line;
pub mod pitch;

pub use chord::{ChordFunction, ChordPattern, ClosedChord};
pub use interval::{Interval, IntervalPrimitives, Quality};
pub use line::{Direction, LineCommand, PitchLine, PitchLines};
pub use pitch::{Accidental, Pitch, PitchPrimitives};

#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum PitchError {
    #[error("invalid pitch: `{name}` (class {value})")]
    InvalidPitch { name: String, value: u8 },
    #[error("invalid interval: nothing reaches `{to}` from `{from}`")]
    InvalidInterval {
        from: &'static str,
        to: &'static str,
    },
    #[error("unknown chord pattern: `{0}`")]
    UnknownChordPattern(String),
}
pub type PitchResult<T> = Result<T, PitchError>;
