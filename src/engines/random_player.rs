use rand::prelude::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use super::Player;
use crate::chess_board::Move;
use crate::game::Game;

/// Picks uniformly among all legal moves of the side to move.
pub struct RandomPlayer {
    rng: Pcg64,
}

impl RandomPlayer {
    /// The same seed always yields the same sequence of choices
    /// for the same positions.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg64::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_move(&mut self, game: &Game) -> Option<Move> {
        let moves = game.all_legal_moves();
        moves.choose(&mut self.rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_player_is_reproducible() {
        let game = Game::new();
        let first: Vec<_> = {
            let mut player = RandomPlayer::new(42);
            (0..5).map(|_| player.choose_move(&game)).collect()
        };
        let mut player = RandomPlayer::new(42);
        let second: Vec<_> = (0..5).map(|_| player.choose_move(&game)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_random_player_picks_legal_moves() {
        let game = Game::new();
        let legal = game.all_legal_moves();
        let mut player = RandomPlayer::new(7);
        for _ in 0..20 {
            let mv = player.choose_move(&game).unwrap();
            assert!(legal.contains(&mv));
        }
    }

    #[test]
    fn test_random_player_has_nothing_after_mate() {
        let game = Game::from_fen("1k6/8/8/8/8/8/PPn5/KN6 w - - 0 1").unwrap();
        assert_eq!(RandomPlayer::new(0).choose_move(&game), None);
    }
}
