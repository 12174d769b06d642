//! Command-line configuration for the `othello` binary.

use crate::controllers::{Controller, HumanController};
use crate::{Difficulty, Session};
use clap::{Parser, ValueEnum};
use derive_more::Display;
use log::debug;
use sentinel_solver::DEFAULT_DEPTH;
use std::io::Write;

/// Who sits in the white seat.
#[derive(Clone, Copy, Debug, Default, Display, Eq, Hash, PartialEq, ValueEnum)]
pub enum Opponent {
    /// The computer, at the chosen difficulty.
    #[default]
    #[display(fmt = "computer")]
    Computer,
    /// A second person at the same terminal.
    #[display(fmt = "human")]
    Human,
}

/// Play Othello in the terminal, against the computer or a friend.
#[derive(Clone, Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Name of the first player, who plays black and moves first.
    #[arg(long, default_value = "Player 1")]
    pub black_name: String,

    /// Name of the second player, who plays white.
    /// Defaults to "PC" against the computer and "Player 2" otherwise.
    #[arg(long)]
    pub white_name: Option<String>,

    #[arg(long, value_enum, default_value_t = Opponent::Computer)]
    pub opponent: Opponent,

    /// How the computer picks its moves.
    #[arg(long, value_enum, default_value_t = Difficulty::Aggressive)]
    pub difficulty: Difficulty,

    /// Search depth of the aggressive computer player.
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    pub depth: u32,

    /// Mark the legal moves on the board with 'A'.
    #[arg(long)]
    pub show_available: bool,

    /// Seed for the random computer player.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Search the computer's candidate moves in parallel.
    #[arg(long)]
    pub parallel: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            black_name: "Player 1".to_string(),
            white_name: None,
            opponent: Opponent::default(),
            difficulty: Difficulty::default(),
            depth: DEFAULT_DEPTH,
            show_available: false,
            seed: None,
            parallel: false,
        }
    }
}

impl Config {
    pub fn white_name(&self) -> String {
        match (&self.white_name, self.opponent) {
            (Some(name), _) => name.clone(),
            (None, Opponent::Computer) => "PC".to_string(),
            (None, Opponent::Human) => "Player 2".to_string(),
        }
    }

    fn white_controller(&self) -> Box<dyn Controller> {
        match self.opponent {
            Opponent::Computer => self.difficulty.controller(self.depth, self.seed, self.parallel),
            Opponent::Human => Box::new(HumanController::stdio()),
        }
    }

    /// Build a session with a human at the terminal playing black.
    pub fn build_session<W: Write>(&self, output: W) -> Session<W> {
        debug!("session config: {:?}", self);
        Session::new(
            self.black_name.clone(),
            Box::new(HumanController::stdio()),
            self.white_name(),
            self.white_controller(),
            output,
        )
        .show_available(self.show_available)
    }
}
