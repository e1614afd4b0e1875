//! Open-pitch assignments per string, and the strings they derive.

use crate::primitives::Pitch;

use super::{GuitarString, GuitarStrings};

/// A named tuning: one open pitch per string, highest string first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuitarTuning {
    name: String,
    open: [Pitch; 6],
}

impl GuitarTuning {
    pub fn new(name: impl Into<String>, open: [Pitch; 6]) -> Self {
        Self {
            name: name.into(),
            open,
        }
    }

    /// E A D G B e.
    pub fn standard() -> Self {
        Self::new(
            "Standard",
            [Pitch::E, Pitch::B, Pitch::G, Pitch::D, Pitch::A, Pitch::E],
        )
    }

    /// Standard with the sixth string dropped to D.
    pub fn drop_d() -> Self {
        Self::new(
            "Drop D",
            [Pitch::E, Pitch::B, Pitch::G, Pitch::D, Pitch::A, Pitch::D],
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn open_pitches(&self) -> &[Pitch; 6] {
        &self.open
    }

    /// Derive the string collection. The first string's label is
    /// lowercased, as tab headers conventionally write it.
    pub fn strings(&self) -> GuitarStrings {
        let make = |index: u8| {
            let open = self.open[index as usize - 1];
            let label = match index {
                1 => open.name().to_lowercase(),
                _ => open.name().to_string(),
            };
            GuitarString::new(label, open, index)
        };
        GuitarStrings::new([
            make(1),
            make(2),
            make(3),
            make(4),
            make(5),
            make(6),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_labels() {
        let strings = GuitarTuning::standard().strings();
        let labels: Vec<&str> =
            strings.iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["e", "B", "G", "D", "A", "E"]);
        assert_eq!(strings.sixth().open(), Pitch::E);
    }

    #[test]
    fn alternate_tuning_rederives_strings() {
        let strings = GuitarTuning::drop_d().strings();
        assert_eq!(strings.sixth().open(), Pitch::D);
        assert_eq!(strings.sixth().label(), "D");
        assert_eq!(strings.sixth().fret_for(Pitch::G).number(), 5);
    }
}
