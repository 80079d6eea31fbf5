//! Template module - base layouts and the on-disk template store
//!
//! A template is a flat `ROWS * COLS` string over `{A, .}`: mountains and free
//! cells. Before a board is built, [`Template::scatter`] places the start, the
//! vault, both teleporters and the bandits on the free cells.
//!
//! # Store format
//!
//! ```text
//! 2
//! ......AA....A.........A..A....A.....
//! .A..A.A.........A.A.A....A....A.A...
//! ```
//!
//! The first line is the template count N, followed by N template lines.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{BoardError, TemplateError};
use crate::rng::RandomSource;
use crate::types::{glyph, CELL_COUNT, ENEMY_COUNT, SCATTER_MARKERS, TELEPORT_COUNT};

/// The hand-made layouts shipped with the game, one string per 6x6 map.
///
/// Each was drawn by hand so that no generated board is unplayable.
const BUILTIN_TEMPLATES: [&str; 10] = [
    concat!("......", ".AA...", "...A.A", ".A....", "AAA...", "...A.."),
    concat!(".A..A.", "A.....", "...A.A", ".A....", "A.A...", ".A.A.."),
    concat!(".....A", ".AA..A", ".A.A..", ".....A", "..A..A", "....A."),
    concat!(".A..A.", "..A...", "..AA.A", "...A..", "A.A...", "....A."),
    concat!("....A.", "AA....", ".A..A.", "..AA..", "A.....", "...A.."),
    concat!("A.....", "AA....", "A...AA", "....A.", "....A.", "......"),
    concat!("......", "..AA..", "A.A...", "..AA..", ".A..A.", "...A.."),
    concat!("...A..", "..AA..", "A.A...", "......", "AAA.A.", "......"),
    concat!("A...A.", ".A....", ".AA...", "..AA..", "....A.", "......"),
    concat!("......", "..AA..", ".A..A.", "..AA..", ".A....", "...A.."),
];

/// A validated pre-scatter layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    cells: String,
}

impl Template {
    /// Validate a template string
    ///
    /// The string must hold exactly `ROWS * COLS` characters, each a mountain
    /// (`A`) or a free cell (`.`).
    pub fn parse(s: &str) -> Result<Self, BoardError> {
        let found = s.chars().count();
        if found != CELL_COUNT {
            return Err(BoardError::SizeMismatch {
                expected: CELL_COUNT,
                found,
            });
        }

        if let Some((index, glyph)) = s
            .chars()
            .enumerate()
            .find(|&(_, c)| c != glyph::MOUNTAIN && c != glyph::BLANK)
        {
            return Err(BoardError::UnexpectedGlyph { glyph, index });
        }

        Ok(Self {
            cells: s.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.cells
    }

    /// Number of free (non-mountain) cells
    pub fn free_cells(&self) -> usize {
        self.cells.chars().filter(|&c| c == glyph::BLANK).count()
    }

    /// Place the markers on the free cells
    ///
    /// The multiset {1 start, 1 vault, 2 teleporters, 10 bandits, rest blank}
    /// is uniformly permuted over the free cells, so every arrangement is
    /// equally likely.
    pub fn scatter<R: RandomSource>(&self, rng: &mut R) -> Result<String, BoardError> {
        let free = self.free_cells();
        if free < SCATTER_MARKERS {
            return Err(BoardError::NotEnoughFreeCells {
                free,
                needed: SCATTER_MARKERS,
            });
        }

        let mut markers = Vec::with_capacity(free);
        markers.push(glyph::START);
        markers.push(glyph::FINISH);
        markers.extend(std::iter::repeat(glyph::TELEPORT).take(TELEPORT_COUNT));
        markers.extend(std::iter::repeat(glyph::ENEMY).take(ENEMY_COUNT));
        markers.resize(free, glyph::BLANK);

        rng.shuffle(&mut markers);

        let mut next = markers.into_iter();
        let layout = self
            .cells
            .chars()
            .map(|c| {
                if c == glyph::BLANK {
                    next.next().unwrap_or(glyph::BLANK)
                } else {
                    c
                }
            })
            .collect();

        Ok(layout)
    }
}

/// The set of templates a board is chosen from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSet {
    templates: Vec<Template>,
}

impl TemplateSet {
    /// Build a set from already-validated templates
    pub fn new(templates: Vec<Template>) -> Result<Self, TemplateError> {
        if templates.is_empty() {
            return Err(TemplateError::Empty);
        }
        Ok(Self { templates })
    }

    /// The ten layouts shipped with the game
    pub fn builtin() -> Self {
        let templates = BUILTIN_TEMPLATES
            .iter()
            .filter_map(|s| Template::parse(s).ok())
            .collect();
        Self { templates }
    }

    /// Parse a template store
    ///
    /// Only the first N template lines are read; anything after them is
    /// ignored. Blank lines are skipped.
    pub fn parse(contents: &str) -> Result<Self, TemplateError> {
        let mut lines = contents
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty());

        let (_, header) = lines.next().ok_or(TemplateError::Empty)?;
        let declared: usize = header
            .parse()
            .map_err(|_| TemplateError::BadHeader(header.to_string()))?;
        if declared == 0 {
            return Err(TemplateError::Empty);
        }

        let mut templates = Vec::with_capacity(declared);
        for (line, text) in lines.take(declared) {
            let template =
                Template::parse(text).map_err(|source| TemplateError::Invalid { line, source })?;
            templates.push(template);
        }

        if templates.len() != declared {
            return Err(TemplateError::CountMismatch {
                declared,
                found: templates.len(),
            });
        }

        Ok(Self { templates })
    }

    /// Load a template store from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TemplateError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| TemplateError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let set = Self::parse(&contents)?;
        debug!(path = %path.display(), count = set.len(), "loaded template store");
        Ok(set)
    }

    /// Render the set in store format
    pub fn to_store_string(&self) -> String {
        let mut out = format!("{}\n", self.templates.len());
        for template in &self.templates {
            out.push_str(template.as_str());
            out.push('\n');
        }
        out
    }

    /// Write the set to a file in store format
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), TemplateError> {
        let path = path.as_ref();
        fs::write(path, self.to_store_string()).map_err(|source| TemplateError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Pick one template uniformly at random
    pub fn choose<R: RandomSource>(&self, rng: &mut R) -> &Template {
        let index = rng.pick(self.templates.len());
        debug!(index, "template chosen");
        &self.templates[index]
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Template> {
        self.templates.iter()
    }
}

impl Default for TemplateSet {
    fn default() -> Self {
        Self::builtin()
    }
}
