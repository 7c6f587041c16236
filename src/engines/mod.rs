use crate::chess_board::{Color, Move};
use crate::game::Game;

pub mod random_player;

/// Something that picks moves for one side. Players only read the game and
/// hand back a `(from, to)` pair; the game applies it through
/// [`Game::make_move`] like any other move.
pub trait Player {
    fn name(&self) -> &str;
    fn choose_move(&mut self, game: &Game) -> Option<Move>;
}

/// Alternates `white` and `black` for at most `max_plies` moves and returns
/// the moves played. Stops early once the game is over or when a player
/// proposes nothing or a move the game refuses.
pub fn play_out(game: &mut Game, white: &mut dyn Player, black: &mut dyn Player, max_plies: usize) -> Vec<Move> {
    let mut history = Vec::new();

    while history.len() < max_plies && !game.status().is_terminal() {
        let proposal = match game.current_player() {
            Color::White => white.choose_move(game),
            Color::Black => black.choose_move(game),
        };
        let mv = match proposal {
            Some(mv) => mv,
            None => break,
        };
        if !game.make_move(mv.from, mv.to) {
            break;
        }
        history.push(mv);
    }

    history
}
