//! `sentinel-player` turns the rules and the solver into a playable game.
//!
//! A [`Session`] seats two [`Player`]s, each driven by a [`Controller`], and
//! runs a [`sentinel_othello::Game`] to completion while narrating it to a
//! writer. The `othello` binary wires a session to the terminal from a
//! command-line [`Config`].

pub mod config;
pub mod controllers;
pub mod session;

mod error;

pub use config::{Config, Opponent};
pub use controllers::{Controller, Difficulty};
pub use error::SessionError;
pub use session::{Player, Session};
