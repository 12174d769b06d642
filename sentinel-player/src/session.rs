//! A game between two seated players, narrated to a writer.

use crate::{Controller, SessionError};
use log::{info, warn};
use sentinel_othello::{Game, OthelloError, Side};
use std::io::Write;

/// A named participant playing one side.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Player {
    pub name: String,
    pub side: Side,
}

impl Player {
    pub fn new(name: impl Into<String>, side: Side) -> Self {
        Self {
            name: name.into(),
            side,
        }
    }
}

struct Seat {
    player: Player,
    controller: Box<dyn Controller>,
}

/// Runs one game from start to finish.
///
/// Black always moves first. After every move the board is redrawn for the
/// next player; a round is complete each time the turn returns to black.
/// The legal moves are listed only after a controller proposes an illegal one.
pub struct Session<W> {
    game: Game,
    black: Seat,
    white: Seat,
    show_available: bool,
    round: u32,
    output: W,
}

impl<W: Write> Session<W> {
    /// Seat `black_name` and `white_name` at a fresh game.
    pub fn new(
        black_name: impl Into<String>,
        black: Box<dyn Controller>,
        white_name: impl Into<String>,
        white: Box<dyn Controller>,
        output: W,
    ) -> Self {
        Self {
            game: Game::default(),
            black: Seat {
                player: Player::new(black_name, Side::Black),
                controller: black,
            },
            white: Seat {
                player: Player::new(white_name, Side::White),
                controller: white,
            },
            show_available: false,
            round: 1,
            output,
        }
    }

    /// Start from `game` instead of the opening position.
    pub fn with_game(self, game: Game) -> Self {
        Self { game, ..self }
    }

    /// Mark the legal moves with `A` when drawing the board.
    pub fn show_available(self, show_available: bool) -> Self {
        Self {
            show_available,
            ..self
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn player(&self, side: Side) -> &Player {
        match side {
            Side::Black => &self.black.player,
            Side::White => &self.white.player,
        }
    }

    /// Get back the writer the session narrated to.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Play until neither side can move, then announce the result.
    pub fn run(&mut self) -> Result<Game, SessionError> {
        info!(
            "starting game: {} (black) vs {} (white)",
            self.black.player.name, self.white.player.name
        );
        for side in [Side::Black, Side::White] {
            let player = self.player(side).clone();
            writeln!(
                self.output,
                "{} plays {}, represented by the character '{}'",
                player.name,
                side,
                side.marker()
            )?;
        }
        writeln!(self.output, "{}, you will go first!", self.black.player.name)?;

        while !self.game.is_finished() {
            self.take_turn()?;
        }

        self.finish()?;
        Ok(self.game)
    }

    /// Draw the board, get a legal move from the side to move and play it.
    fn take_turn(&mut self) -> Result<(), SessionError> {
        let side = self.game.active_side();
        let moves = self.game.legal_moves();

        writeln!(self.output)?;
        if self.show_available {
            writeln!(self.output, "{}", self.game.board().highlighted(&moves))?;
        } else {
            writeln!(self.output, "{}", self.game.board())?;
        }

        let seat = match side {
            Side::Black => &mut self.black,
            Side::White => &mut self.white,
        };
        writeln!(self.output, "{}'s turn ({})", seat.player.name, side.marker())?;

        let position = loop {
            let position = seat.controller.choose_move(&self.game)?;
            match self.game.play(position) {
                Ok(()) => break position,
                Err(err @ OthelloError::IllegalMove { .. }) => {
                    warn!("{} proposed an illegal move: {}", seat.player.name, err);
                    writeln!(self.output, "Invalid move! Please try again.")?;
                    writeln!(self.output, "Available moves: {}", moves)?;
                }
                Err(err) => return Err(err.into()),
            }
        };
        writeln!(self.output, "{} played {}", seat.player.name, position)?;

        if let Some(passed) = self.game.passed() {
            let name = self.player(passed).name.clone();
            writeln!(self.output, "{} has no available moves and passes.", name)?;
        }

        if !self.game.is_finished() && self.game.active_side() == Side::Black {
            writeln!(self.output, "\nRound {} Complete", self.round)?;
            self.print_scores()?;
            self.round += 1;
        }
        Ok(())
    }

    fn print_scores(&mut self) -> Result<(), SessionError> {
        let score = self.game.score();
        writeln!(self.output, "Scores:")?;
        writeln!(self.output, "{}: {}", self.black.player.name, score.black)?;
        writeln!(self.output, "{}: {}", self.white.player.name, score.white)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), SessionError> {
        info!("game over: {}", self.game.score());
        writeln!(self.output, "\n{}", self.game.board())?;
        writeln!(self.output, "Game Over!")?;
        self.print_scores()?;

        match self.game.winner() {
            Some(side) => {
                let name = self.player(side).name.clone();
                writeln!(self.output, "Winner is: {}.", name)?;
            }
            None => writeln!(self.output, "It's a tie")?,
        }
        Ok(())
    }
}
