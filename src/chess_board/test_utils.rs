use super::{Board, Color, Coordinate, PieceType};

pub fn assert_moves<I: IntoIterator<Item = Coordinate>>(generated: I, mut expected: Vec<&str>) {
    let mut generated_converted: Vec<_> = generated.into_iter().map(|c| c.as_algebraic()).collect();
    generated_converted.sort();
    expected.sort();

    assert_eq!(generated_converted, expected);
}

/// Checks that grid occupancy and roster membership agree, that every piece
/// knows its own square and that the king index points at a king.
pub fn assert_roster_consistency(board: &Board) {
    for color in [Color::White, Color::Black] {
        let roster = board.roster(color);
        for &at in roster {
            let piece = board.get(at).unwrap_or_else(|| panic!("{} roster lists empty square {}", color, at));
            assert_eq!(piece.color, color, "roster of {} lists a foreign piece on {}", color, at);
            assert_eq!(piece.position, at, "piece on {} believes it is on {}", at, piece.position);
        }
        let mut unique = roster.to_vec();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), roster.len(), "duplicate roster entries for {}", color);

        if let Some(king) = board.king_of(color) {
            assert_eq!(king.kind, PieceType::King);
            assert_eq!(king.color, color);
        }
    }
    for at in Coordinate::all() {
        if let Some(piece) = board.get(at) {
            assert!(board.roster(piece.color).contains(&at), "{} is missing from its roster", at);
        }
    }
}

pub fn count_kings(board: &Board, color: Color) -> usize {
    board.pieces_of(color).iter().filter(|p| p.kind == PieceType::King).count()
}
