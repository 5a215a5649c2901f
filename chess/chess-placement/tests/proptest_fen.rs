//! Property-based tests for FEN rank scanning.
//!
//! Run with: cargo test -p chess-placement -- proptest

use chess_placement::{FenError, PieceKind, parse_placement, rank_width};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// A valid rank: a random split of 8 squares into empty runs and pieces.
fn arb_rank() -> impl Strategy<Value = String> {
    let letter = prop::sample::select(PieceKind::ALL.map(PieceKind::fen_char).to_vec());
    prop::collection::vec((any::<bool>(), letter), 8).prop_map(|cells| {
        let mut rank = String::new();
        let mut empty = 0u32;
        for (occupied, letter) in cells {
            if occupied {
                if empty > 0 {
                    rank.push(char::from_digit(empty, 10).unwrap_or('?'));
                    empty = 0;
                }
                rank.push(letter);
            } else {
                empty += 1;
            }
        }
        if empty > 0 {
            rank.push(char::from_digit(empty, 10).unwrap_or('?'));
        }
        rank
    })
}

fn arb_board() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_rank(), 8)
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    /// Generated ranks always cover exactly eight squares.
    #[test]
    fn valid_rank_width_is_eight(rank in arb_rank()) {
        prop_assert_eq!(rank_width(&rank), 8);
    }

    /// Every letter in a valid board becomes one placed piece, and no
    /// square is used twice.
    #[test]
    fn valid_boards_place_every_letter(ranks in arb_board()) {
        let fen = ranks.join("/");
        let placement = parse_placement(&fen).unwrap();

        let letters = fen.chars().filter(char::is_ascii_alphabetic).count();
        prop_assert_eq!(placement.pieces.len(), letters);

        let mut squares: Vec<_> = placement.pieces.iter().map(|(s, _)| *s).collect();
        squares.sort();
        squares.dedup();
        prop_assert_eq!(squares.len(), letters);
    }

    /// Pieces come out row by row, left to right.
    #[test]
    fn pieces_are_in_scan_order(ranks in arb_board()) {
        let placement = parse_placement(&ranks.join("/")).unwrap();
        let keys: Vec<_> = placement.pieces.iter().map(|(s, _)| (s.row(), s.column())).collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        prop_assert_eq!(keys, sorted);
    }

    /// Appending a piece or a run to one rank breaks validation on that rank.
    #[test]
    fn overlong_rank_is_rejected(ranks in arb_board(), index in 0usize..8, extra in 1u32..=8) {
        let mut ranks = ranks;
        ranks[index].push(char::from_digit(extra, 10).unwrap_or('1'));
        let err = parse_placement(&ranks.join("/")).unwrap_err();
        #[allow(clippy::cast_possible_truncation)]
        let rank = 8 - index as u8;
        prop_assert_eq!(err, FenError::RankWidth { rank, squares: 8 + extra as usize });
    }

    /// Dropping the last character of a rank leaves it short.
    #[test]
    fn short_rank_is_rejected(ranks in arb_board(), index in 0usize..8) {
        let mut ranks = ranks;
        ranks[index].pop();
        let result = parse_placement(&ranks.join("/"));
        let is_width_error = matches!(result, Err(FenError::RankWidth { .. }));
        prop_assert!(is_width_error);
    }
}
