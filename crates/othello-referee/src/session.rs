//! One game against the referee.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use log::{debug, error, info, warn};
use othello_core::parallel::{Collective, Coordinator};
use othello_core::{Board, Color, Move};

use crate::referee::{LineLink, RefereeCommand, RefereeError, RefereeLink};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The referee sent `game_over`.
    GameOver,
    /// The referee hung up without `game_over`.
    RefereeClosed,
    /// Reading a command or sending a move failed.
    TransportFailed,
}

/// Authoritative game state on the coordinator side.
pub struct Session<C: Collective> {
    board: Board,
    color: Color,
    coordinator: Coordinator<C>,
    moves_generated: u32,
}

impl<C: Collective> Session<C> {
    pub fn new(coordinator: Coordinator<C>, color: Color) -> Self {
        Self { board: Board::startpos(), color, coordinator, moves_generated: 0 }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn moves_generated(&self) -> u32 {
        self.moves_generated
    }

    /// Serve commands until the game ends, then stop the workers.
    ///
    /// Transport failures end the session normally with
    /// [`SessionEnd::TransportFailed`]; only a broken search group is an error.
    pub fn run<L: RefereeLink>(&mut self, link: &mut L) -> Result<SessionEnd> {
        let outcome = self.serve(link);
        if let Err(e) = self.coordinator.shutdown() {
            error!("Failed to stop search workers: {e}");
            if outcome.is_ok() {
                return Err(e).context("failed to stop search workers");
            }
        }
        outcome
    }

    fn serve<L: RefereeLink>(&mut self, link: &mut L) -> Result<SessionEnd> {
        loop {
            let command = match link.next_command() {
                Ok(command) => command,
                Err(RefereeError::Closed) => {
                    warn!("Referee closed the connection before game_over");
                    return Ok(SessionEnd::RefereeClosed);
                }
                Err(e) => {
                    error!("Failed to read from referee: {e}");
                    return Ok(SessionEnd::TransportFailed);
                }
            };

            match command {
                RefereeCommand::GenMove => {
                    let mv = self
                        .coordinator
                        .gen_move(&mut self.board, self.color)
                        .context("parallel search failed")?;
                    self.moves_generated += 1;
                    debug!("after our {mv}:\n{}", self.board);
                    if let Err(e) = link.send_move(mv) {
                        error!("Move send failed: {e}");
                        return Ok(SessionEnd::TransportFailed);
                    }
                }
                RefereeCommand::PlayMove(Move::Pass) => {
                    info!("{} passes", !self.color);
                }
                RefereeCommand::PlayMove(Move::Place(sq)) => {
                    let opponent = !self.color;
                    match self.board.apply_move(sq, opponent) {
                        Ok(()) => debug!("after {opponent} {}:\n{}", Move::Place(sq), self.board),
                        Err(e) => warn!("Ignoring opponent move {}: {e}", Move::Place(sq)),
                    }
                }
                RefereeCommand::GameOver => {
                    info!(
                        "Game over: black {} white {} empty {}",
                        self.board.count(Color::Black),
                        self.board.count(Color::White),
                        self.board.empties()
                    );
                    return Ok(SessionEnd::GameOver);
                }
                RefereeCommand::Unknown(line) => {
                    warn!("Received unknown command from referee: {line}");
                }
            }
        }
    }
}

/// Handshake on `link`, then play the game to its end.
///
/// The workers behind `coordinator` are stopped on every exit path.
pub fn play_game<R, W, C>(mut link: LineLink<R, W>, mut coordinator: Coordinator<C>) -> Result<SessionEnd>
where
    R: BufRead,
    W: Write,
    C: Collective,
{
    let color = match link.handshake() {
        Ok(color) => color,
        Err(e) => {
            if let Err(stop) = coordinator.shutdown() {
                error!("Failed to stop search workers: {stop}");
            }
            return Err(e).context("colour handshake with referee failed");
        }
    };
    info!("Playing {color}");

    let mut session = Session::new(coordinator, color);
    session.run(&mut link)
}
