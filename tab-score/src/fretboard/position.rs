//! Named fretboard zones a hand can cover without shifting.
//!
//! A position is an inclusive fret window: the low bound sits on the
//! sixth string, the high bound on the first. Membership tests take an
//! explicit [`PositionTolerance`] — chord mapping allows one fret of
//! slack on each bound, line mapping none.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::{Fret, FretboardError, FretboardResult};

/// Slack applied to the window bounds on a membership test.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize,
)]
pub struct PositionTolerance {
    pub below: i8,
    pub above: i8,
}

impl PositionTolerance {
    /// Line mapping: the fret must sit inside the window.
    pub const EXACT: PositionTolerance =
        PositionTolerance { below: 0, above: 0 };
    /// Chord mapping: one fret of slack on each bound.
    pub const CHORD: PositionTolerance =
        PositionTolerance { below: 1, above: 1 };
}

/// A named hand position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    name: &'static str,
    low: Fret,
    high: Fret,
}

static ALL: Lazy<[Position; 6]> = Lazy::new(|| {
    [
        Position::build("Open", 0, 3),
        Position::build("C", 1, 4),
        Position::build("A", 3, 6),
        Position::build("G", 5, 8),
        Position::build("E", 7, 10),
        Position::build("D", 9, 12),
    ]
});

impl Position {
    fn build(name: &'static str, low: i8, high: i8) -> Self {
        Self {
            name,
            low: Fret::new(6, low, None),
            high: Fret::new(1, high, None),
        }
    }

    pub fn all() -> &'static [Position] {
        &*ALL
    }

    pub fn open() -> &'static Position {
        &ALL[0]
    }

    pub fn c() -> &'static Position {
        &ALL[1]
    }

    pub fn a() -> &'static Position {
        &ALL[2]
    }

    pub fn g() -> &'static Position {
        &ALL[3]
    }

    pub fn e() -> &'static Position {
        &ALL[4]
    }

    pub fn d() -> &'static Position {
        &ALL[5]
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Low bound, on the sixth string.
    pub fn lowest(&self) -> &Fret {
        &self.low
    }

    /// High bound, on the first string.
    pub fn highest(&self) -> &Fret {
        &self.high
    }

    pub fn is_open(&self) -> bool {
        self.low.number() == 0
    }

    /// True if the fret falls inside the window widened by `tolerance`.
    /// Blank frets belong to no position.
    pub fn contains(
        &self,
        fret: &Fret,
        tolerance: PositionTolerance,
    ) -> bool {
        !fret.is_blank()
            && fret.number() >= self.low.number() - tolerance.below
            && fret.number() <= self.high.number() + tolerance.above
    }

    pub fn from_primitives(
        primitives: &PositionPrimitives,
    ) -> FretboardResult<&'static Position> {
        Self::all()
            .iter()
            .find(|p| p.name == primitives.name)
            .ok_or_else(|| {
                FretboardError::InvalidPosition(primitives.name.clone())
            })
    }

    pub fn to_primitives(&self) -> PositionPrimitives {
        PositionPrimitives {
            name: self.name.to_string(),
            lowest_fret: self.low.number(),
            highest_fret: self.high.number(),
        }
    }
}

/// Wire shape of a position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionPrimitives {
    pub name: String,
    pub lowest_fret: i8,
    pub highest_fret: i8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_membership() {
        let c = Position::c();
        assert!(c.contains(&Fret::new(4, 2, None), PositionTolerance::EXACT));
        assert!(!c.contains(&Fret::new(1, 5, None), PositionTolerance::EXACT));
        assert!(c.contains(&Fret::new(1, 5, None), PositionTolerance::CHORD));
        assert!(c.contains(&Fret::new(6, 0, None), PositionTolerance::CHORD));
        assert!(!c.contains(&Fret::blank(3), PositionTolerance::CHORD));
        assert!(Position::open().is_open());
        assert!(!c.is_open());
    }

    #[test]
    fn catalog_lookup() {
        let primitives = Position::open().to_primitives();
        assert_eq!(primitives.lowest_fret, 0);
        assert_eq!(primitives.highest_fret, 3);
        assert_eq!(
            Position::from_primitives(&primitives),
            Ok(Position::open())
        );
        let bogus = PositionPrimitives {
            name: "Nut".to_string(),
            lowest_fret: 0,
            highest_fret: 1,
        };
        assert_eq!(
            Position::from_primitives(&bogus),
            Err(FretboardError::InvalidPosition("Nut".to_string()))
        );
    }
}
