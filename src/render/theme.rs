//! Glyph themes for chess-font board rendering.
//!
//! Each theme maps the 13-symbol board alphabet (12 piece letters plus the
//! empty-square marker) to one glyph per square color. The chess fonts draw
//! square and piece as a single glyph, which is why the same piece needs a
//! different character on dark and light squares. Registry names mirror the
//! font families the site ships; families without a dedicated table alias
//! the merida mapping.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use crate::errors::BoardError;

/// Marker for an empty square in a flattened board.
pub const EMPTY_SQUARE: char = '+';

/// Name of the baseline theme, also the fallback for lenient rendering.
pub const DEFAULT_THEME: &str = "merida";

/// Glyphs for one symbol: index 0 on odd-parity (dark) squares, index 1 on
/// even-parity (light) squares. Pairs are strings because one table maps
/// the light empty square to a two-character glyph.
pub type GlyphPair = [&'static str; 2];

/// Total mapping from the board alphabet to glyph pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub black_king: GlyphPair,
    pub black_queen: GlyphPair,
    pub black_rook: GlyphPair,
    pub black_bishop: GlyphPair,
    pub black_knight: GlyphPair,
    pub black_pawn: GlyphPair,
    pub white_king: GlyphPair,
    pub white_queen: GlyphPair,
    pub white_rook: GlyphPair,
    pub white_bishop: GlyphPair,
    pub white_knight: GlyphPair,
    pub white_pawn: GlyphPair,
    pub empty: GlyphPair,
}

impl Theme {
    /// Glyph pair for a board symbol, `None` for anything outside the
    /// 13-symbol alphabet.
    pub fn glyphs(&self, symbol: char) -> Option<GlyphPair> {
        match symbol {
            'k' => Some(self.black_king),
            'q' => Some(self.black_queen),
            'r' => Some(self.black_rook),
            'b' => Some(self.black_bishop),
            'n' => Some(self.black_knight),
            'p' => Some(self.black_pawn),
            'K' => Some(self.white_king),
            'Q' => Some(self.white_queen),
            'R' => Some(self.white_rook),
            'B' => Some(self.white_bishop),
            'N' => Some(self.white_knight),
            'P' => Some(self.white_pawn),
            EMPTY_SQUARE => Some(self.empty),
            _ => None,
        }
    }
}

/// Merida-family mapping. Uppercase glyphs sit on dark squares; the empty
/// square keeps the checkerboard visible with a filler on dark and a blank
/// on light.
pub const MERIDA: Theme = Theme {
    black_king: ["L", "l"],
    black_queen: ["W", "w"],
    black_rook: ["T", "t"],
    black_bishop: ["V", "v"],
    black_knight: ["M", "m"],
    black_pawn: ["O", "o"],
    white_king: ["K", "k"],
    white_queen: ["Q", "q"],
    white_rook: ["R", "r"],
    white_bishop: ["B", "b"],
    white_knight: ["N", "n"],
    white_pawn: ["P", "p"],
    empty: ["+", " "],
};

/// Lucena uses the merida layout but a wide blank on light squares.
pub const LUCENA: Theme = Theme {
    empty: ["+", "  "],
    ..MERIDA
};

/// Utrecht inverts the case convention of the merida family.
pub const UTRECHT: Theme = Theme {
    black_king: ["L", "K"],
    black_queen: ["W", "Q"],
    black_rook: ["T", "R"],
    black_bishop: ["V", "B"],
    black_knight: ["M", "N"],
    black_pawn: ["O", "P"],
    white_king: ["l", "k"],
    white_queen: ["w", "q"],
    white_rook: ["t", "r"],
    white_bishop: ["v", "b"],
    white_knight: ["m", "n"],
    white_pawn: ["o", "p"],
    empty: ["/", " "],
};

static THEMES: Lazy<BTreeMap<&'static str, &'static Theme>> = Lazy::new(|| {
    BTreeMap::from([
        ("merida", &MERIDA),
        ("utrecht", &UTRECHT),
        ("lucena", &LUCENA),
        ("adventurer", &MERIDA),
        ("alfonsox", &MERIDA),
        ("condal", &MERIDA),
        ("harlequin", &MERIDA),
        ("kingdom", &MERIDA),
        ("leipzig", &MERIDA),
        ("line", &MERIDA),
        ("magnetic", &MERIDA),
        ("mark", &MERIDA),
        ("maya", &MERIDA),
        ("mediaeval", &MERIDA),
        ("millennia", &MERIDA),
        ("millennia2", &MERIDA),
        ("miscel", &MERIDA),
        ("motif", &MERIDA),
    ])
});

/// Look up a theme by registry name.
pub fn lookup(name: &str) -> Result<&'static Theme, BoardError> {
    THEMES
        .get(name)
        .copied()
        .ok_or_else(|| BoardError::InvalidTheme(name.to_owned()))
}

/// Registered theme names in alphabetical order.
pub fn theme_names() -> impl Iterator<Item = &'static str> {
    THEMES.keys().copied()
}
