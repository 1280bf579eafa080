//! Errors shared by the position codec and the board renderer.
//!
//! One enum covers the four failure kinds the crate can surface, so callers
//! can match on the kind to separate bad user input (id and piece-string
//! rejections) from configuration problems (theme lookup and glyph gaps).

use thiserror::Error;

/// Unified error type for position numbering and board rendering.
///
/// Variants carry the offending input or a short cause so call sites can log
/// or display precise diagnostics without re-deriving them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardError {
    /// Position id input was not an integer in `0..=959`.
    ///
    /// Payload: the rejected input as written (for example `"960"`, `"3.5"`).
    #[error("invalid position id: {0}")]
    InvalidId(String),

    /// Piece string failed back-rank validation.
    ///
    /// Payload: which rule was violated (length, alphabet, piece mix,
    /// bishop square colors, or king placement).
    #[error("invalid position: {0}")]
    InvalidPosition(String),

    /// The active theme has no glyph pair for a board symbol.
    #[error("theme does not map board symbol {0:?}")]
    UnmappedSymbol(char),

    /// Theme name is not present in the registry.
    #[error("unknown theme: {0}")]
    InvalidTheme(String),
}
