use super::Controller;
use crate::SessionError;
use log::debug;
use sentinel_othello::{Game, Position};
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

/// Asks a person for a row and a column until they name a legal move.
pub struct HumanController<R, W> {
    input: R,
    output: W,
}

impl HumanController<BufReader<Stdin>, Stdout> {
    /// A controller reading from stdin and prompting on stdout.
    pub fn stdio() -> Self {
        // One byte of buffering: two players can share stdin without either
        // holding on to the other's lines.
        Self::new(BufReader::with_capacity(1, io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanController<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Get back the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Prompt and read one trimmed line.
    fn ask(&mut self, prompt: &str) -> Result<String, SessionError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Read a row and a column, or a whole position such as "4 3" at the row prompt.
    /// None if either reply is not an integer.
    fn read_coordinates(&mut self) -> Result<Option<(i64, i64)>, SessionError> {
        let row = self.ask("Please enter the row of the piece you would like to play: ")?;
        if let Ok(position) = row.parse::<Position>() {
            return Ok(i64::try_from(position.row)
                .ok()
                .zip(i64::try_from(position.col).ok()));
        }

        let row = match row.parse() {
            Ok(row) => row,
            Err(_) => return Ok(None),
        };
        let col = self.ask("Please enter the column of the piece you would like to play: ")?;
        Ok(col.parse().ok().map(|col| (row, col)))
    }
}

impl<R: BufRead, W: Write> Controller for HumanController<R, W> {
    fn choose_move(&mut self, game: &Game) -> Result<Position, SessionError> {
        let moves = game.legal_moves();

        loop {
            let (row, col) = match self.read_coordinates()? {
                Some(coordinates) => coordinates,
                None => {
                    writeln!(self.output, "Invalid entry! Please enter a valid integer.")?;
                    continue;
                }
            };

            // Negative coordinates are integers, just never legal moves
            let position = match (usize::try_from(row), usize::try_from(col)) {
                (Ok(row), Ok(col)) => Some(Position::new(row, col)),
                _ => None,
            };
            if let Some(position) = position.filter(|&position| moves.contains(position)) {
                return Ok(position);
            }

            debug!("rejected ({}, {}) from input", row, col);
            writeln!(self.output, "Invalid move! Please try again.")?;
            writeln!(self.output, "Available moves: {}", moves)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn answer(script: &str) -> (Result<Position, SessionError>, String) {
        let input = Cursor::new(script.as_bytes().to_vec());
        let mut controller = HumanController::new(input, Vec::new());
        let result = controller.choose_move(&Game::default());
        let (_, output) = controller.into_inner();
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn reads_row_then_column() {
        let (result, output) = answer("3\n4\n");
        assert_eq!(result.unwrap(), Position::new(3, 4));
        assert!(output.contains("row of the piece"));
        assert!(output.contains("column of the piece"));
        assert!(!output.contains("Invalid"));
    }

    #[test]
    fn reprompts_on_bad_integers() {
        let (result, output) = answer("three\n3\nx\n 6 \n 5\n");
        assert_eq!(result.unwrap(), Position::new(6, 5));
        assert_eq!(output.matches("Invalid entry! Please enter a valid integer.").count(), 2);
    }

    #[test]
    fn reprompts_on_illegal_moves() {
        let (result, output) = answer("1\n1\n4\n4\n0\n99\n5\n6\n");
        assert_eq!(result.unwrap(), Position::new(5, 6));
        assert_eq!(output.matches("Invalid move! Please try again.").count(), 3);
        assert!(output.contains("Available moves: [(3, 4), (4, 3), (5, 6), (6, 5)]"));
    }

    #[test]
    fn closed_input_is_an_error() {
        let (result, _) = answer("3\n");
        assert!(matches!(result, Err(SessionError::InputClosed)));
        let (result, _) = answer("");
        assert!(matches!(result, Err(SessionError::InputClosed)));
    }

    #[test]
    fn negative_numbers_are_illegal_moves() {
        let (result, output) = answer("-1\n4\n3\n-7\n3\n4\n");
        assert_eq!(result.unwrap(), Position::new(3, 4));
        assert_eq!(output.matches("Invalid move! Please try again.").count(), 2);
        assert!(!output.contains("Invalid entry!"));
    }

    #[test]
    fn whole_position_on_one_line() {
        let (result, output) = answer("4 3\n");
        assert_eq!(result.unwrap(), Position::new(4, 3));
        assert!(!output.contains("column of the piece"));

        let (result, output) = answer("(1, 1)\n6,5\n");
        assert_eq!(result.unwrap(), Position::new(6, 5));
        assert_eq!(output.matches("Invalid move! Please try again.").count(), 1);
    }
}
