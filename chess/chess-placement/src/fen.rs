//! FEN piece-placement parsing.

use tracing::warn;

use crate::error::{FenError, FenResult};
use crate::piece::PieceKind;
use crate::square::Square;

/// Pieces found in a FEN placement field, in scan order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placement {
    /// Every recognized piece with its square.
    pub pieces: Vec<(Square, PieceKind)>,
    /// Letters that name no piece. They still occupy their square.
    pub skipped: Vec<(Square, char)>,
}

impl Placement {
    /// Distinct kinds present, in first-seen order.
    #[must_use]
    pub fn kinds(&self) -> Vec<PieceKind> {
        let mut kinds: Vec<PieceKind> = Vec::with_capacity(12);
        for &(_, kind) in &self.pieces {
            if !kinds.contains(&kind) {
                kinds.push(kind);
            }
        }
        kinds
    }
}

/// Squares a single rank string covers: digits add their value, any other
/// character adds one.
#[must_use]
pub fn rank_width(rank: &str) -> usize {
    rank.chars()
        .map(|c| c.to_digit(10).map_or(1, |d| d as usize))
        .sum()
}

/// Parse the piece-placement field of `fen`.
///
/// Only the text before the first whitespace is read; side to move,
/// castling rights and the rest are ignored. The field must have exactly
/// eight `/`-separated ranks, each covering exactly eight squares.
///
/// Letters outside `pnbrqkPNBRQK` emit nothing but still advance one
/// square; they are reported in [`Placement::skipped`].
///
/// # Errors
///
/// - [`FenError::EmptyPlacement`] for an empty or blank string
/// - [`FenError::RankCount`] unless there are 8 ranks
/// - [`FenError::RankWidth`] for the first rank not covering 8 squares
///
/// # Example
///
/// ```
/// use chess_placement::parse_placement;
///
/// let start = parse_placement("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
/// assert_eq!(start.pieces.len(), 32);
/// ```
pub fn parse_placement(fen: &str) -> FenResult<Placement> {
    let field = fen
        .split_whitespace()
        .next()
        .ok_or(FenError::EmptyPlacement)?;

    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::RankCount { found: ranks.len() });
    }

    let mut placement = Placement::default();
    for (row, rank) in (0u8..).zip(&ranks) {
        let squares = rank_width(rank);
        if squares != 8 {
            return Err(FenError::RankWidth {
                rank: 8 - row,
                squares,
            });
        }

        let mut column = 0u8;
        for c in rank.chars() {
            if let Some(skip) = c.to_digit(10) {
                #[allow(clippy::cast_possible_truncation)]
                // Truncation: the rank already sums to 8, so every digit is <= 8
                let skip = skip as u8;
                column += skip;
                continue;
            }
            // Width is 8, so a non-digit always starts inside the rank.
            let Some(square) = Square::new(column, row) else {
                break;
            };
            match PieceKind::from_fen_char(c) {
                Some(kind) => placement.pieces.push((square, kind)),
                None => {
                    warn!(%square, letter = %c, "Skipping unknown FEN piece letter");
                    placement.skipped.push((square, c));
                }
            }
            column += 1;
        }
    }

    Ok(placement)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::{Color, Role};

    const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    #[test]
    fn start_position() {
        let p = parse_placement(START).unwrap();
        assert_eq!(p.pieces.len(), 32);
        assert!(p.skipped.is_empty());

        let white = p.pieces.iter().filter(|(_, k)| k.color == Color::White).count();
        assert_eq!(white, 16);

        for (square, kind) in &p.pieces {
            if kind.role == Role::Pawn {
                assert!(square.row() == 1 || square.row() == 6, "pawn on {square}");
            }
        }

        assert_eq!(p.pieces[0].0.to_string(), "a8");
        assert_eq!(p.pieces[0].1.fen_char(), 'r');
        assert_eq!(p.pieces[31].0.to_string(), "h1");
        assert_eq!(p.kinds().len(), 12);
    }

    #[test]
    fn lone_king() {
        let p = parse_placement("8/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        assert_eq!(p.pieces.len(), 1);
        let (square, kind) = p.pieces[0];
        assert_eq!((square.column(), square.row()), (4, 7));
        assert_eq!(kind, PieceKind::new(Color::White, Role::King));
    }

    #[test]
    fn placement_only_field_is_accepted() {
        assert_eq!(parse_placement("8/8/8/8/8/8/8/8").unwrap(), Placement::default());
    }

    #[test]
    fn unknown_letter_advances_one_square() {
        let p = parse_placement("8/8/8/8/8/8/8/x3K3").unwrap();
        assert_eq!(p.skipped.len(), 1);
        assert_eq!(p.skipped[0].0.to_string(), "a1");
        assert_eq!(p.skipped[0].1, 'x');
        assert_eq!(p.pieces[0].0.to_string(), "e1");
    }

    #[test]
    fn wrong_rank_count() {
        assert_eq!(
            parse_placement("8/8/8/8/8/8/8 w - - 0 1"),
            Err(FenError::RankCount { found: 7 })
        );
        assert_eq!(
            parse_placement("8/8/8/8/8/8/8/8/8"),
            Err(FenError::RankCount { found: 9 })
        );
    }

    #[test]
    fn wrong_rank_width() {
        assert_eq!(
            parse_placement("8/8/8/8/8/8/8/4K4"),
            Err(FenError::RankWidth { rank: 1, squares: 9 })
        );
        assert_eq!(
            parse_placement("rnbqkbn/8/8/8/8/8/8/8"),
            Err(FenError::RankWidth { rank: 8, squares: 7 })
        );
    }

    #[test]
    fn empty_input() {
        assert_eq!(parse_placement(""), Err(FenError::EmptyPlacement));
        assert_eq!(parse_placement("   "), Err(FenError::EmptyPlacement));
    }

    #[test]
    fn widths() {
        assert_eq!(rank_width("4K3"), 8);
        assert_eq!(rank_width("rnbqkbnr"), 8);
        assert_eq!(rank_width("9"), 9);
        assert_eq!(rank_width(""), 0);
    }
}
