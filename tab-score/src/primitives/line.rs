//! Melodic lines and the line-builder wire protocol.
//!
//! A [`PitchLine`] is an ordered pitch sequence with a direction tag;
//! the direction only steers which strings the mapping engine tries
//! first. [`LineCommand`] is the discriminated command set an external
//! line builder emits to assemble a [`PitchLines`] sequence — the core
//! defines the shape and consumes the result, it exposes no commands of
//! its own.

use serde::{Deserialize, Serialize};

use super::{Pitch, PitchPrimitives};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub enum Direction {
    Ascending,
    Descending,
    OctaveDown,
    Neutral,
}

/// An ordered melodic phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PitchLine {
    pitches: Vec<Pitch>,
    direction: Direction,
}

impl PitchLine {
    pub fn new(pitches: Vec<Pitch>, direction: Direction) -> Self {
        Self { pitches, direction }
    }

    pub fn pitches(&self) -> &[Pitch] {
        &self.pitches
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn len(&self) -> usize {
        self.pitches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pitches.is_empty()
    }
}

/// An ordered sequence of phrases, mapped one after another.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PitchLines {
    lines: Vec<PitchLine>,
}

impl PitchLines {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: PitchLine) -> &mut Self {
        self.lines.push(line);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &PitchLine> {
        self.lines.iter()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl From<Vec<PitchLine>> for PitchLines {
    fn from(lines: Vec<PitchLine>) -> Self {
        Self { lines }
    }
}

/// Commands of the external line builder, as they arrive on the wire.
///
/// Scale-degree arguments are 1-based degrees of whatever scale the
/// builder works in; `FromLastPitch` variants anchor on the last pitch
/// of the previously built line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "kebab-case")]
pub enum LineCommand {
    ArpeggioUpFromDegree { degree: u8 },
    ArpeggioUpFromLastPitch,
    PivotArpeggio { degree: u8 },
    PivotArpeggioFromLastPitch,
    ResolveToPitch { pitch: PitchPrimitives },
    ScaleDown { from_degree: u8 },
    ScaleDownWithChromaticPassingTones { from_degree: u8 },
    ScaleDownFromLastPitch,
}
