//! FEN derivation for Fischer Random starting arrays.
//!
//! A back rank expands deterministically into the full starting board:
//! mirrored black rank, pawn walls, four empty ranks, and the fixed
//! white-to-move trailer.

use crate::position::back_rank::BackRank;

/// FEN of the classical starting position (numbering slot 518).
pub const CLASSICAL_START_FEN: &str =
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Fixed trailer: white to move, full castling rights, no en passant,
/// clocks at the start of the game.
const FEN_SUFFIX: &str = "w KQkq - 0 1";

/// Build the full starting-board FEN for one back rank. Total for any
/// validated rank; the builder performs no piece checks of its own.
pub fn generate_fen(rank: &BackRank) -> String {
    let white = rank.piece_string();
    let black = white.to_lowercase();

    let ranks = [
        black.as_str(),
        "pppppppp",
        "8",
        "8",
        "8",
        "8",
        "PPPPPPPP",
        white.as_str(),
    ];

    format!("{} {}", ranks.join("/"), FEN_SUFFIX)
}
