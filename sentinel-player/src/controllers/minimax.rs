use super::Controller;
use crate::SessionError;
use log::{debug, info};
use sentinel_othello::{Game, Position};
use sentinel_solver::Minimax;

/// Plays the minimax choice at a fixed depth, maximizing its own piece lead.
#[derive(Clone, Copy, Debug)]
pub struct MinimaxController {
    depth: u32,
    parallel: bool,
}

impl MinimaxController {
    pub fn new(depth: u32) -> Self {
        Self {
            depth,
            parallel: false,
        }
    }

    /// Search the root's subtrees on the rayon thread pool.
    pub fn parallel(self, parallel: bool) -> Self {
        Self { parallel, ..self }
    }
}

impl Controller for MinimaxController {
    fn choose_move(&mut self, game: &Game) -> Result<Position, SessionError> {
        let side = game.active_side();
        let searcher = Minimax::new(self.depth).with_maximizer(side);
        let result = if self.parallel {
            searcher.search_parallel(game.board(), true)
        } else {
            searcher.search(game.board(), true)
        };
        info!(
            "{} searched {} nodes at depth {}: score {}",
            side, result.nodes, self.depth, result.score
        );

        match result.best_move {
            Some(mv) => Ok(mv),
            // Depth 0 scores the root without proposing a move
            None => {
                let fallback = game.legal_moves().first().copied();
                debug!("no move from search, falling back to {:?}", fallback);
                fallback.ok_or(SessionError::NoMove(side))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentinel_othello::Side;
    use sentinel_solver::best_move;

    #[test]
    fn white_matches_best_move() {
        let mut game = Game::default();
        game.play(Position::new(3, 4)).unwrap();
        assert_eq!(game.active_side(), Side::White);

        for depth in 1..=3 {
            let expected = best_move(game.board(), depth, true).best_move;
            let chosen = MinimaxController::new(depth).choose_move(&game).unwrap();
            assert_eq!(Some(chosen), expected);
        }
    }

    #[test]
    fn black_maximizes_its_own_lead() {
        let game = Game::default();
        let mut controller = MinimaxController::new(1);
        assert_eq!(controller.choose_move(&game).unwrap(), Position::new(3, 4));
    }

    #[test]
    fn depth_zero_falls_back_to_first_legal_move() {
        let game = Game::default();
        let mut controller = MinimaxController::new(0);
        assert_eq!(controller.choose_move(&game).unwrap(), Position::new(3, 4));
    }

    #[test]
    fn parallel_agrees() {
        let game = Game::default();
        let sequential = MinimaxController::new(3).choose_move(&game).unwrap();
        let parallel = MinimaxController::new(3).parallel(true).choose_move(&game).unwrap();
        assert_eq!(sequential, parallel);
    }
}
