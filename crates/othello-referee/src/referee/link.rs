//! Transport between the engine and the referee.

use std::io::{self, BufRead, BufReader, Write};
use std::net::{SocketAddr, TcpStream};

use log::{debug, warn};
use othello_core::{Color, Move};
use thiserror::Error;

use super::commands::{RefereeCommand, parse_color};
use super::parser::parse_referee_command;

#[derive(Debug, Error)]
pub enum RefereeError {
    #[error("referee closed the connection")]
    Closed,
    #[error("referee I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Command source and move sink of a game session.
pub trait RefereeLink {
    /// Block until the next command arrives.
    fn next_command(&mut self) -> Result<RefereeCommand, RefereeError>;

    /// Report the engine's move.
    fn send_move(&mut self, mv: Move) -> Result<(), RefereeError>;
}

/// Newline-delimited text link over any reader/writer pair.
pub struct LineLink<R, W> {
    reader: R,
    writer: W,
    line: String,
}

pub type TcpLink = LineLink<BufReader<TcpStream>, TcpStream>;

/// Connect to a referee listening on `addr`.
pub fn connect_tcp(addr: SocketAddr) -> io::Result<TcpLink> {
    let stream = TcpStream::connect(addr)?;
    stream.set_nodelay(true)?;
    let reader = BufReader::new(stream.try_clone()?);
    Ok(LineLink::new(reader, stream))
}

impl<R: BufRead, W: Write> LineLink<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer, line: String::new() }
    }

    /// Read the colour the referee assigns to us.
    ///
    /// An unrecognised colour falls back to Black.
    pub fn handshake(&mut self) -> Result<Color, RefereeError> {
        let line = self.read_line()?;
        match parse_color(line) {
            Some(color) => Ok(color),
            None => {
                warn!("Unrecognised colour '{}' from referee, playing black", line.trim());
                Ok(Color::Black)
            }
        }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Next non-blank line, without its terminator.
    fn read_line(&mut self) -> Result<&str, RefereeError> {
        loop {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Err(RefereeError::Closed);
            }
            if !self.line.trim().is_empty() {
                return Ok(self.line.trim_end_matches(['\r', '\n']));
            }
        }
    }
}

impl<R: BufRead, W: Write> RefereeLink for LineLink<R, W> {
    fn next_command(&mut self) -> Result<RefereeCommand, RefereeError> {
        let line = self.read_line()?;
        debug!("<< {line}");
        match parse_referee_command(line) {
            Ok(command) => Ok(command),
            Err(e) => {
                debug!("Could not parse '{line}': {e}");
                Ok(RefereeCommand::Unknown(line.to_string()))
            }
        }
    }

    fn send_move(&mut self, mv: Move) -> Result<(), RefereeError> {
        debug!(">> {mv}");
        self.writer.write_all(mv.to_referee_string().as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use othello_core::Square;
    use std::io::Cursor;

    fn link(input: &str) -> LineLink<Cursor<Vec<u8>>, Vec<u8>> {
        LineLink::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_handshake_reads_colour() {
        assert_eq!(link("white\n").handshake().unwrap(), Color::White);
        assert_eq!(link("\n\nblack\r\n").handshake().unwrap(), Color::Black);
    }

    #[test]
    fn test_handshake_falls_back_to_black() {
        assert_eq!(link("purple\n").handshake().unwrap(), Color::Black);
    }

    #[test]
    fn test_handshake_on_closed_input() {
        assert!(matches!(link("").handshake(), Err(RefereeError::Closed)));
    }

    #[test]
    fn test_commands_in_order() {
        let mut link = link("gen_move\nplay_move 34\nhello there\ngame_over\n");
        assert_eq!(link.next_command().unwrap(), RefereeCommand::GenMove);
        assert_eq!(
            link.next_command().unwrap(),
            RefereeCommand::PlayMove(Move::Place(Square::from_row_col(3, 4).unwrap()))
        );
        assert_eq!(link.next_command().unwrap(), RefereeCommand::Unknown("hello there".into()));
        assert_eq!(link.next_command().unwrap(), RefereeCommand::GameOver);
        assert!(matches!(link.next_command(), Err(RefereeError::Closed)));
    }

    #[test]
    fn test_send_move_writes_one_line() {
        let mut link = link("");
        link.send_move(Move::Place(Square::from_row_col(5, 6).unwrap())).unwrap();
        link.send_move(Move::Pass).unwrap();
        let (_, written) = link.into_inner();
        assert_eq!(String::from_utf8(written).unwrap(), "56\npass\n");
    }
}
