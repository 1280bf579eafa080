//! Text board renderer.
//!
//! Flattens a FEN placement field into a symbol grid, substitutes glyphs by
//! square parity, then optionally rotates the view 180 degrees for the
//! black-side perspective. Parity is computed over the unflipped grid, so a
//! flipped board shows the same glyphs in reversed order.

use log::{error, warn};

use crate::errors::BoardError;
use crate::render::theme::{self, Theme, DEFAULT_THEME, EMPTY_SQUARE, MERIDA};

/// Render a board through the named theme.
///
/// The input may be a full FEN or just its placement field; only the first
/// whitespace-separated field is read. Fails with `InvalidTheme` for an
/// unregistered name and `UnmappedSymbol` for any board symbol the theme
/// does not cover.
pub fn render_board(fen: &str, theme_name: &str, flipped: bool) -> Result<String, BoardError> {
    let theme = theme::lookup(theme_name)?;
    apply_theme(&flatten_placement(fen), theme, flipped)
}

/// Render like [`render_board`], but never fail: any error falls back to
/// the baseline theme with the same flip flag, matching the hosted
/// service's recovery path. A board the baseline cannot map either renders
/// as an empty string rather than as per-symbol gaps.
pub fn render_board_or_default(fen: &str, theme_name: &str, flipped: bool) -> String {
    match render_board(fen, theme_name, flipped) {
        Ok(board) => board,
        Err(err) => {
            warn!("render failed ({err}); retrying with the {DEFAULT_THEME} theme");
            match apply_theme(&flatten_placement(fen), &MERIDA, flipped) {
                Ok(board) => board,
                Err(err) => {
                    error!("baseline render failed too ({err}); emitting an empty board");
                    String::new()
                }
            }
        }
    }
}

/// Glyph for a single piece symbol on a square of known shade.
pub fn render_piece(
    symbol: char,
    theme_name: &str,
    dark_square: bool,
) -> Result<&'static str, BoardError> {
    let theme = theme::lookup(theme_name)?;
    let pair = theme
        .glyphs(symbol)
        .ok_or(BoardError::UnmappedSymbol(symbol))?;
    Ok(if dark_square { pair[0] } else { pair[1] })
}

/// Expand the placement field into rows of board symbols. Digits become
/// runs of the empty-square marker; everything else is taken as-is, so
/// structural validation stays with the FEN producer.
fn flatten_placement(fen: &str) -> Vec<Vec<char>> {
    let placement = fen.split_whitespace().next().unwrap_or("");

    placement
        .split('/')
        .map(|rank| {
            let mut row = Vec::with_capacity(8);
            for ch in rank.chars() {
                match ch.to_digit(10) {
                    Some(run) => row.extend(std::iter::repeat(EMPTY_SQUARE).take(run as usize)),
                    None => row.push(ch),
                }
            }
            row
        })
        .collect()
}

fn apply_theme(grid: &[Vec<char>], theme: &Theme, flipped: bool) -> Result<String, BoardError> {
    let mut rows = Vec::with_capacity(grid.len());

    for (rank, symbols) in grid.iter().enumerate() {
        let mut row = Vec::with_capacity(symbols.len());
        for (file, &symbol) in symbols.iter().enumerate() {
            let pair = theme
                .glyphs(symbol)
                .ok_or(BoardError::UnmappedSymbol(symbol))?;
            let odd = (rank + file) % 2 == 1;
            row.push(if odd { pair[0] } else { pair[1] });
        }
        rows.push(row);
    }

    if flipped {
        rows.reverse();
        for row in &mut rows {
            row.reverse();
        }
    }

    let text = rows
        .iter()
        .map(|row| row.concat())
        .collect::<Vec<String>>()
        .join("\n");

    // Trailing-only: a leading light-square blank is a real cell.
    Ok(text.trim_end().to_owned())
}
