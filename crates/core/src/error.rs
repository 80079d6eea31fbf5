//! Board and template store errors.

use std::io;
use std::path::PathBuf;

/// Errors that can occur while building a board from a template or layout.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// Template length does not match the board size.
    #[error("template has {found} cells but the board needs {expected}")]
    SizeMismatch { expected: usize, found: usize },

    /// A character outside the accepted alphabet.
    #[error("unexpected glyph {glyph:?} at cell {index}")]
    UnexpectedGlyph { glyph: char, index: usize },

    /// Too few free cells to scatter every marker.
    #[error("template has {free} free cells but {needed} markers must be placed")]
    NotEnoughFreeCells { free: usize, needed: usize },

    #[error("layout needs exactly one start marker, found {0}")]
    StartCount(usize),

    #[error("layout needs exactly one vault, found {0}")]
    FinishCount(usize),

    #[error("layout needs exactly two teleporters, found {0}")]
    TeleportCount(usize),
}

/// Errors that can occur while reading or writing a template store.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("failed to access template store {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The store holds no templates.
    #[error("template store is empty")]
    Empty,

    /// The first record is not a template count.
    #[error("template store header {0:?} is not a template count")]
    BadHeader(String),

    #[error("template store declares {declared} templates but holds {found}")]
    CountMismatch { declared: usize, found: usize },

    /// A template line failed validation (line numbers start at 1).
    #[error("template on line {line}: {source}")]
    Invalid {
        line: usize,
        #[source]
        source: BoardError,
    },
}
