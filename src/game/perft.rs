use crate::game::Game;

pub fn perft(game: &Game, depth: u8) -> u64 {
    let mut node_count = 0u64;

    if depth == 0 {
        return 1u64;
    }

    for mv in game.all_legal_moves() {
        let mut new_game = game.clone();
        new_game.make_move(mv.from, mv.to);
        node_count += perft(&new_game, depth - 1);
    }
    node_count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perft() {
        let game = Game::new();
        assert_eq!(perft(&game, 0), 1u64);
        assert_eq!(perft(&game, 1), 20u64);
        assert_eq!(perft(&game, 2), 400u64);
        assert_eq!(perft(&game, 3), 8902u64);
    }

    #[test]
    fn test_perft_endgame() {
        let game = Game::from_fen("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1").unwrap();
        assert_eq!(perft(&game, 1), 14);
    }

    #[test]
    fn test_perft_terminal_position() {
        let game = Game::from_fen("1k6/8/8/8/8/8/PPn5/KN6 w - - 0 1").unwrap();
        assert_eq!(perft(&game, 1), 0);
        assert_eq!(perft(&game, 3), 0);
    }

    #[test]
    fn test_perft_promotions_count_once() {
        // A single queen promotion per pawn push, no underpromotion choice.
        let game = Game::from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1").unwrap();
        // Pawn a7-a8 plus the white king's three squares.
        assert_eq!(perft(&game, 1), 4);
    }
}
