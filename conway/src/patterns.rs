// patterns.rs - Seed pattern catalog: parsing, selection and seeding

use std::fmt;
use std::path::Path;

use rand::Rng;

use crate::error::{Error, Result};
use crate::grid::{Coord, GridState};

pub const ALIVE: char = '#';
pub const DEAD: char = ' ';

/// Catalog compiled into the library.
pub const DEFAULT_CATALOG: &str = include_str!("../assets/patterns.txt");

/// Rows of characters; `#` is alive, anything else dead.
///
/// Rows are kept exactly as written: they are not trimmed and not padded to
/// a common width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    rows: Vec<Vec<char>>,
}

impl Pattern {
    pub fn from_rows<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            rows: rows.into_iter().map(|row| row.as_ref().chars().collect()).collect(),
        }
    }

    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Pattern-relative positions of alive cells, row-major.
    pub fn alive_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &ch)| ch == ALIVE)
                .map(move |(c, _)| Coord::new(r as i64, c as i64))
        })
    }

    pub fn population(&self) -> usize {
        self.alive_cells().count()
    }

    /// `#`/space rendition, one row per line.
    ///
    /// An empty line would end the pattern, so an empty row is written as a
    /// single dead cell. The alive cells survive a round trip through
    /// `PatternCatalog::parse`; the row lengths of such rows do not.
    pub fn to_text(&self) -> String {
        self.rows
            .iter()
            .map(|row| {
                if row.is_empty() {
                    DEAD.to_string()
                } else {
                    row.iter().map(|&ch| if ch == ALIVE { ALIVE } else { DEAD }).collect()
                }
            })
            .collect::<Vec<String>>()
            .join("\n")
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

/// Which catalog entry to seed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selector {
    #[default]
    Random,
    Index(usize),
}

/// Patterns in source order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PatternCatalog {
    patterns: Vec<Pattern>,
}

impl PatternCatalog {
    /// Splits `text` into patterns at empty lines and into rows at line
    /// breaks. Runs of empty lines separate just once, so no empty patterns
    /// are produced; empty input gives an empty catalog.
    pub fn parse(text: &str) -> Self {
        let mut patterns = Vec::new();
        let mut rows: Vec<&str> = Vec::new();

        for line in text.split('\n') {
            let line = line.strip_suffix('\r').unwrap_or(line);
            if line.is_empty() {
                if !rows.is_empty() {
                    patterns.push(Pattern::from_rows(rows.drain(..)));
                }
            } else {
                rows.push(line);
            }
        }
        if !rows.is_empty() {
            patterns.push(Pattern::from_rows(rows));
        }

        Self { patterns }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|source| Error::ReadPatterns { path: path.to_path_buf(), source })?;
        let catalog = Self::parse(&text);
        tracing::info!(path = %path.display(), patterns = catalog.len(), "loaded pattern catalog");
        Ok(catalog)
    }

    pub fn builtin() -> Self {
        Self::parse(DEFAULT_CATALOG)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Pattern> {
        self.patterns.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pattern> {
        self.patterns.iter()
    }

    pub fn pick(&self, selector: Selector) -> Result<&Pattern> {
        self.pick_with(selector, &mut rand::thread_rng())
    }

    pub fn pick_with<R: Rng + ?Sized>(&self, selector: Selector, rng: &mut R) -> Result<&Pattern> {
        if self.patterns.is_empty() {
            return Err(Error::EmptyCatalog);
        }
        let index = match selector {
            Selector::Random => rng.gen_range(0..self.patterns.len()),
            Selector::Index(index) => index,
        };
        self.patterns
            .get(index)
            .ok_or(Error::PatternIndex { index, len: self.patterns.len() })
    }

    pub fn to_text(&self) -> String {
        self.patterns.iter().map(Pattern::to_text).collect::<Vec<_>>().join("\n\n")
    }
}

impl FromIterator<Pattern> for PatternCatalog {
    fn from_iter<I: IntoIterator<Item = Pattern>>(iter: I) -> Self {
        Self { patterns: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a PatternCatalog {
    type Item = &'a Pattern;
    type IntoIter = std::slice::Iter<'a, Pattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns.iter()
    }
}

/// Clears `grid` and writes the pattern's alive cells at `origin`.
pub fn apply(grid: &mut GridState, pattern: &Pattern, origin: Coord) {
    grid.clear();
    grid.extend(pattern.alive_cells().map(|c| c.offset(origin.row, origin.col)));
}
