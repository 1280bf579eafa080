//! Scharnagl numbering for Fischer Random starting arrays.
//!
//! Maps ids `0..=959` onto back ranks and back. Encoding seats the bishops
//! by remainder, the queen by free-square index, and the knights from a
//! fixed pair table; the three squares left take rook, king, rook. Decoding
//! inverts each step and reassembles the id, so both directions share the
//! same tables.

use std::fmt;
use std::str::FromStr;

use rand::RngExt;

use crate::errors::BoardError;
use crate::position::back_rank::{BackRank, Piece};

/// Number of distinct Fischer Random starting arrays.
pub const POSITION_COUNT: u16 = 960;

/// Id of the classical `RNBQKBNR` array under this numbering.
pub const CLASSICAL_ID: u16 = 518;

/// Knight seat pairs indexed by the final quotient digit, enumerating the
/// ten unordered pairs over five free squares in canonical order. Shared by
/// encode and decode so the two directions cannot drift apart.
const KNIGHT_PAIRS: [(usize, usize); 10] = [
    (0, 1),
    (0, 2),
    (0, 3),
    (0, 4),
    (1, 2),
    (1, 3),
    (1, 4),
    (2, 3),
    (2, 4),
    (3, 4),
];

/// Canonical index of a starting array, always in `0..=959`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PositionId(u16);

impl PositionId {
    /// Validate an integer id. Rejects both ends of the range symmetrically.
    pub fn new(id: i64) -> Result<Self, BoardError> {
        if !(0..i64::from(POSITION_COUNT)).contains(&id) {
            return Err(BoardError::InvalidId(id.to_string()));
        }
        Ok(PositionId(id as u16))
    }

    /// Sample an id uniformly from the full range. This is the only
    /// randomness in the crate; the codec itself is deterministic.
    pub fn random() -> Self {
        PositionId(rand::rng().random_range(0..POSITION_COUNT))
    }

    #[inline]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Decode this id into its back rank.
    pub fn back_rank(self) -> BackRank {
        let mut squares = [Piece::Rook; 8];
        let mut taken = [false; 8];

        // Bishops: remainder base 4 picks the bright file, then the dark one.
        let (rest, bright) = divmod(self.0 as usize, 4);
        place(&mut squares, &mut taken, bright * 2 + 1, Piece::Bishop);
        let (rest, dark) = divmod(rest, 4);
        place(&mut squares, &mut taken, dark * 2, Piece::Bishop);

        // Queen: remainder base 6 indexes the six free squares left to right.
        let (rest, queen) = divmod(rest, 6);
        let free = free_files(&taken);
        place(&mut squares, &mut taken, free[queen], Piece::Queen);

        // Knights: the final quotient digit selects a pair of the five
        // remaining free squares.
        let (first, second) = KNIGHT_PAIRS[rest];
        let free = free_files(&taken);
        place(&mut squares, &mut taken, free[first], Piece::Knight);
        place(&mut squares, &mut taken, free[second], Piece::Knight);

        // Rook, king, rook fill the last three gaps; the rooks are already
        // there from the array initializer.
        let free = free_files(&taken);
        squares[free[1]] = Piece::King;

        BackRank::from_squares(squares)
    }
}

impl FromStr for PositionId {
    type Err = BoardError;

    /// Parse a decimal id. Fractional or non-numeric text is rejected here,
    /// so `"3.5"` fails the same way `"abc"` does.
    fn from_str(s: &str) -> Result<Self, BoardError> {
        let trimmed = s.trim();
        let id = trimmed
            .parse::<i64>()
            .map_err(|_| BoardError::InvalidId(trimmed.to_owned()))?;
        Self::new(id)
    }
}

impl fmt::Display for PositionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl BackRank {
    /// Encode this back rank into its numbering id.
    ///
    /// Parsing already established the structural rules, so for any rank
    /// obtained through `FromStr` or the codec this cannot fail; the knight
    /// table guard stays as a defense against future constructors.
    pub fn id(&self) -> Result<PositionId, BoardError> {
        let squares = self.squares();

        let bishops: Vec<usize> = files_of(squares, Piece::Bishop);
        let (dark, bright) = if bishops[0] % 2 == 0 {
            (bishops[0], bishops[1])
        } else {
            (bishops[1], bishops[0])
        };
        let b1 = bright / 2;
        let b2 = dark / 2;

        let non_bishops: Vec<usize> = (0..8)
            .filter(|&file| squares[file] != Piece::Bishop)
            .collect();
        let queen = non_bishops
            .iter()
            .position(|&file| squares[file] == Piece::Queen)
            .unwrap_or_default();

        let minor_seats: Vec<usize> = (0..8)
            .filter(|&file| squares[file] != Piece::Bishop && squares[file] != Piece::Queen)
            .collect();
        let knights: Vec<usize> = minor_seats
            .iter()
            .enumerate()
            .filter(|(_, &file)| squares[file] == Piece::Knight)
            .map(|(seat, _)| seat)
            .collect();
        let pair = (knights[0], knights[1]);
        let n4 = KNIGHT_PAIRS
            .iter()
            .position(|&p| p == pair)
            .ok_or_else(|| {
                BoardError::InvalidPosition("unrecognized knight pairing".to_owned())
            })?;

        let id = b1 + 4 * (b2 + 4 * (queen + 6 * n4));
        Ok(PositionId(id as u16))
    }
}

/// Decode an id supplied by a caller (for example a URL path segment) into
/// its back rank, validating the range first.
pub fn id_to_position(id: i64) -> Result<BackRank, BoardError> {
    Ok(PositionId::new(id)?.back_rank())
}

/// Encode an 8-character piece string supplied by a caller into its id,
/// validating the string first.
pub fn position_to_id(position: &str) -> Result<PositionId, BoardError> {
    let rank: BackRank = position.parse()?;
    rank.id()
}

#[inline]
const fn divmod(n: usize, base: usize) -> (usize, usize) {
    (n / base, n % base)
}

fn place(squares: &mut [Piece; 8], taken: &mut [bool; 8], file: usize, piece: Piece) {
    squares[file] = piece;
    taken[file] = true;
}

fn free_files(taken: &[bool; 8]) -> Vec<usize> {
    (0..8).filter(|&file| !taken[file]).collect()
}

fn files_of(squares: &[Piece; 8], piece: Piece) -> Vec<usize> {
    (0..8).filter(|&file| squares[file] == piece).collect()
}
