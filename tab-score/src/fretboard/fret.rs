//! A single fretted (or silent) string.

use serde::{Deserialize, Serialize};

use crate::primitives::Pitch;

use super::{
    FretboardError, FretboardResult, GuitarStrings, StringPrimitives,
};

/// Sentinel fret number of a silent string in a chord diagram.
pub const BLANK: i8 = -1;

/// A (string, fret) choice, with the pitch it resolves to when known.
///
/// The string is the 1-based index from the highest-pitched string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fret {
    string: u8,
    number: i8,
    pitch: Option<Pitch>,
}

impl Fret {
    pub fn new(string: u8, number: i8, pitch: Option<Pitch>) -> Self {
        Self {
            string,
            number,
            pitch,
        }
    }

    /// An unfretted, silent string.
    pub fn blank(string: u8) -> Self {
        Self::new(string, BLANK, None)
    }

    pub fn string(&self) -> u8 {
        self.string
    }

    pub fn number(&self) -> i8 {
        self.number
    }

    pub fn pitch(&self) -> Option<Pitch> {
        self.pitch
    }

    pub fn is_blank(&self) -> bool {
        self.number == BLANK
    }

    pub fn is_open(&self) -> bool {
        self.number == 0
    }

    /// The same pitch twelve frets up. Blank frets stay blank.
    pub fn octave_up(&self) -> Self {
        match self.is_blank() {
            true => *self,
            false => Self::new(self.string, self.number + 12, self.pitch),
        }
    }

    /// The glyph a tab column shows for this fret.
    pub fn glyph(&self) -> String {
        match self.is_blank() {
            true => "-".to_string(),
            false => self.number.to_string(),
        }
    }

    pub fn to_primitives(
        &self,
        strings: &GuitarStrings,
    ) -> FretboardResult<FretPrimitives> {
        let string = strings.get(self.string).ok_or_else(|| {
            FretboardError::InvalidString(self.string.to_string())
        })?;
        Ok(FretPrimitives {
            string: string.to_primitives(),
            fret: self.number,
        })
    }

    pub fn from_primitives(
        primitives: &FretPrimitives,
        strings: &GuitarStrings,
    ) -> FretboardResult<Fret> {
        let string =
            strings.get(primitives.string.index).ok_or_else(|| {
                FretboardError::InvalidString(
                    primitives.string.index.to_string(),
                )
            })?;
        if string.label() != primitives.string.name {
            return Err(FretboardError::InvalidString(
                primitives.string.name.clone(),
            ));
        }
        Ok(Fret::new(string.index(), primitives.fret, None))
    }
}

/// Wire shape of a fret choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FretPrimitives {
    pub string: StringPrimitives,
    pub fret: i8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fretboard::GuitarTuning;

    #[test]
    fn blank_frets_stay_blank() {
        let blank = Fret::blank(3);
        assert!(blank.is_blank());
        assert_eq!(blank.octave_up(), blank);
        assert_eq!(blank.glyph(), "-");
        assert_eq!(Fret::new(2, 10, None).octave_up().number(), 22);
    }

    #[test]
    fn primitives_round_trip() {
        let strings = GuitarTuning::standard().strings();
        let fret = Fret::new(6, 3, Some(Pitch::G));
        let primitives = fret.to_primitives(&strings).unwrap();
        assert_eq!(primitives.string.name, "E");
        assert_eq!(primitives.fret, 3);
        let back = Fret::from_primitives(&primitives, &strings).unwrap();
        assert_eq!(back.string(), 6);
        assert_eq!(back.number(), 3);

        let bogus = FretPrimitives {
            string: StringPrimitives {
                name: "X".to_string(),
                index: 7,
            },
            fret: 0,
        };
        assert_eq!(
            Fret::from_primitives(&bogus, &strings),
            Err(FretboardError::InvalidString("7".to_string()))
        );
    }
}
