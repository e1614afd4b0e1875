//! ASCII tablature rendering.
//!
//! A [`TabColumn`] is six glyph rows, highest string first. [`Tab`]
//! folds columns left to right into a grid framed by the tuning labels
//! and bar glyphs; the fold is order-preserving and every row of the
//! result has the same width. The rendered text is the external
//! contract consumers compare bit-exactly.

use serde::{Deserialize, Serialize};

use crate::fretboard::{Fret, GuitarStrings};
use crate::mapping::{GuitarChord, GuitarPitchLine, GuitarPitchLines};

/// Glyphs the renderer fills and separates with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabSettings {
    pub fill: char,
    pub separator: char,
}

impl Default for TabSettings {
    fn default() -> Self {
        Self {
            fill: '-',
            separator: '-',
        }
    }
}

/// One column of the grid: a glyph per string, highest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabColumn {
    rows: [String; 6],
}

impl TabColumn {
    /// A column sounding the given frets; untouched strings stay blank.
    pub fn from_frets(frets: &[Fret]) -> Self {
        let mut rows: [String; 6] = Default::default();
        for row in rows.iter_mut() {
            *row = "-".to_string();
        }
        for fret in frets {
            let index = fret.string();
            if (1..=6).contains(&index) && !fret.is_blank() {
                rows[index as usize - 1] = fret.glyph();
            }
        }
        Self { rows }
    }

    /// A bar line.
    pub fn bar() -> Self {
        let mut rows: [String; 6] = Default::default();
        for row in rows.iter_mut() {
            *row = "|".to_string();
        }
        Self { rows }
    }

    pub fn rows(&self) -> &[String; 6] {
        &self.rows
    }

    /// Width of the widest row.
    pub fn width(&self) -> usize {
        self.rows
            .iter()
            .map(|r| r.chars().count())
            .max()
            .unwrap_or(0)
    }
}

/// Anything the renderer can turn into columns.
pub trait RendersToTab {
    fn tab_columns(&self) -> Vec<TabColumn>;
}

impl RendersToTab for Fret {
    fn tab_columns(&self) -> Vec<TabColumn> {
        vec![TabColumn::from_frets(std::slice::from_ref(self))]
    }
}

impl RendersToTab for GuitarChord {
    fn tab_columns(&self) -> Vec<TabColumn> {
        vec![TabColumn::from_frets(self.frets())]
    }
}

impl RendersToTab for GuitarPitchLine {
    fn tab_columns(&self) -> Vec<TabColumn> {
        self.frets()
            .iter()
            .map(|fret| TabColumn::from_frets(std::slice::from_ref(fret)))
            .collect()
    }
}

impl RendersToTab for GuitarPitchLines {
    fn tab_columns(&self) -> Vec<TabColumn> {
        let mut columns = Vec::new();
        for (index, line) in self.lines().iter().enumerate() {
            if index > 0 {
                columns.push(TabColumn::bar());
            }
            columns.extend(line.tab_columns());
        }
        columns
    }
}

/// The six-row grid under construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    labels: [String; 6],
    columns: Vec<TabColumn>,
    settings: TabSettings,
}

impl Tab {
    pub fn new(strings: &GuitarStrings) -> Self {
        Self::with_settings(strings, TabSettings::default())
    }

    pub fn with_settings(
        strings: &GuitarStrings,
        settings: TabSettings,
    ) -> Self {
        let mut labels: [String; 6] = Default::default();
        for (label, string) in labels.iter_mut().zip(strings.iter()) {
            *label = string.label().to_string();
        }
        Self {
            labels,
            columns: Vec::new(),
            settings,
        }
    }

    pub fn push(&mut self, column: TabColumn) -> &mut Self {
        self.columns.push(column);
        self
    }

    pub fn push_bar(&mut self) -> &mut Self {
        self.columns.push(TabColumn::bar());
        self
    }

    pub fn push_source(&mut self, source: &impl RendersToTab) -> &mut Self {
        self.columns.extend(source.tab_columns());
        self
    }

    /// Serialize the grid.
    ///
    /// Every column is right-aligned to its own width with the fill
    /// glyph, so all six rows of the result are equally long.
    ///
    /// # Example
    /// ```
    /// use tab_score::fretboard::GuitarTuning;
    /// use tab_score::tab_render::Tab;
    /// let strings = GuitarTuning::standard().strings();
    /// assert_eq!(
    ///     Tab::new(&strings).render(),
    ///     "e|--|\nB|--|\nG|--|\nD|--|\nA|--|\nE|--|"
    /// );
    /// ```
    pub fn render(&self) -> String {
        let fill = self.settings.fill;
        let label_width = self
            .labels
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(1);
        let widths: Vec<usize> =
            self.columns.iter().map(TabColumn::width).collect();
        (0..6)
            .map(|row| {
                let mut rendered = format!(
                    "{:>width$}|",
                    self.labels[row],
                    width = label_width
                );
                rendered.push(fill);
                for (index, column) in self.columns.iter().enumerate() {
                    if index > 0 {
                        rendered.push(self.settings.separator);
                    }
                    let glyphs = &column.rows()[row];
                    for _ in glyphs.chars().count()..widths[index] {
                        rendered.push(fill);
                    }
                    rendered.push_str(glyphs);
                }
                rendered.push(fill);
                rendered.push('|');
                rendered
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
