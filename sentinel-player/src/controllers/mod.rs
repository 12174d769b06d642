//! Controllers decide moves for one seat of a [`crate::Session`].

mod controller;
mod human;
mod minimax;
mod random;

pub use controller::Controller;
pub use human::HumanController;
pub use minimax::MinimaxController;
pub use random::RandomController;

use clap::ValueEnum;
use derive_more::Display;

/// How hard the computer opponent plays.
#[derive(Clone, Copy, Debug, Default, Display, Eq, Hash, PartialEq, ValueEnum)]
pub enum Difficulty {
    /// Pick uniformly among the legal moves.
    #[display(fmt = "random")]
    Random,
    /// Search with fixed-depth minimax.
    #[default]
    #[display(fmt = "aggressive")]
    Aggressive,
}

impl Difficulty {
    /// Build the computer controller for this difficulty.
    /// `seed` makes the random player reproducible; `depth` sets the search depth.
    pub fn controller(self, depth: u32, seed: Option<u64>, parallel: bool) -> Box<dyn Controller> {
        match self {
            Difficulty::Random => Box::new(match seed {
                Some(seed) => RandomController::from_seed(seed),
                None => RandomController::from_entropy(),
            }),
            Difficulty::Aggressive => Box::new(MinimaxController::new(depth).parallel(parallel)),
        }
    }
}
