use super::Controller;
use crate::SessionError;
use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use sentinel_othello::{Game, Position};

/// Plays a uniformly random legal move.
pub struct RandomController<R = StdRng> {
    rng: R,
}

impl<R: Rng> RandomController<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomController<StdRng> {
    /// A reproducible controller.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> Controller for RandomController<R> {
    fn choose_move(&mut self, game: &Game) -> Result<Position, SessionError> {
        let moves = game.legal_moves();
        let mv = moves
            .choose(&mut self.rng)
            .copied()
            .ok_or(SessionError::NoMove(game.active_side()))?;
        debug!("random pick {} from {}", mv, moves);
        Ok(mv)
    }
}
