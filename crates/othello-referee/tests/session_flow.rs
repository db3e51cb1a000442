use std::io::{self, Cursor, Write};
use std::time::Duration;

use othello_core::parallel::{Coordinator, LocalCollective, WorkerPool};
use othello_core::search::SearchLimits;
use othello_core::{Board, Color};
use othello_referee::referee::LineLink;
use othello_referee::{Session, SessionEnd, play_game};

fn group(size: usize) -> (Coordinator<LocalCollective>, WorkerPool) {
    let limits = SearchLimits::new(1, Duration::from_secs(10));
    WorkerPool::spawn(size, limits, Some(Duration::from_secs(30))).unwrap()
}

fn assert_workers_stopped(pool: WorkerPool, rounds: u64) {
    for summary in pool.join() {
        let summary = summary.unwrap();
        assert_eq!(summary.rounds, rounds, "rank {}", summary.rank);
    }
}

/// Run a scripted session and return how it ended, the session and the engine output.
fn script(
    size: usize,
    input: &str,
) -> (SessionEnd, Session<LocalCollective>, String, WorkerPool) {
    let (coordinator, pool) = group(size);
    let mut output = Vec::new();
    let mut link = LineLink::new(Cursor::new(input.as_bytes()), &mut output);
    let color = link.handshake().unwrap();
    let mut session = Session::new(coordinator, color);
    let end = session.run(&mut link).unwrap();
    drop(link);
    (end, session, String::from_utf8(output).unwrap(), pool)
}

#[test]
fn black_opening_then_game_over() {
    let (end, session, output, pool) = script(3, "black\ngen_move\nplay_move pass\ngame_over\n");

    assert_eq!(end, SessionEnd::GameOver);
    assert_eq!(session.color(), Color::Black);
    assert_eq!(session.moves_generated(), 1);
    assert!(
        ["23\n", "32\n", "45\n", "54\n"].contains(&output.as_str()),
        "unexpected reply {output:?}"
    );
    assert_eq!(session.board().count(Color::Black), 4);
    assert_eq!(session.board().count(Color::White), 1);
    assert_workers_stopped(pool, 1);
}

#[test]
fn white_answers_opponent_move() {
    let (end, session, output, pool) = script(2, "white\nplay_move 23\ngen_move\ngame_over\n");

    assert_eq!(end, SessionEnd::GameOver);
    assert!(["22\n", "24\n", "42\n"].contains(&output.as_str()), "unexpected reply {output:?}");
    assert_eq!(session.board().count(Color::Black), 3);
    assert_eq!(session.board().count(Color::White), 3);
    assert_workers_stopped(pool, 1);
}

#[test]
fn illegal_and_unknown_input_is_ignored() {
    let input = "black\nplay_move 11\nplay_move 44\nhello referee\nplay_move 9x\n\ngame_over\n";
    let (end, session, output, pool) = script(2, input);

    assert_eq!(end, SessionEnd::GameOver);
    assert_eq!(*session.board(), Board::startpos());
    assert!(output.is_empty());
    assert_workers_stopped(pool, 0);
}

#[test]
fn consecutive_moves_stay_legal() {
    // 黒番で3回着手を求める。相手は毎回パス
    let input = "black\ngen_move\nplay_move pass\ngen_move\nplay_move pass\ngen_move\ngame_over\n";
    let (end, session, output, pool) = script(4, input);

    assert_eq!(end, SessionEnd::GameOver);
    let replies: Vec<&str> = output.lines().collect();
    assert_eq!(replies.len(), 3);
    assert!(replies.iter().all(|reply| reply.len() == 2 || *reply == "pass"));
    assert_eq!(session.moves_generated(), 3);
    assert_workers_stopped(pool, 3);
}

#[test]
fn closed_referee_still_stops_workers() {
    let (end, session, output, pool) = script(3, "black\ngen_move\n");

    assert_eq!(end, SessionEnd::RefereeClosed);
    assert_eq!(session.moves_generated(), 1);
    assert_eq!(output.lines().count(), 1);
    assert_workers_stopped(pool, 1);
}

struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "referee went away"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn failed_send_ends_session() {
    let (coordinator, pool) = group(2);
    let link = LineLink::new(Cursor::new(&b"black\ngen_move\ngen_move\n"[..]), BrokenPipe);

    let end = play_game(link, coordinator).unwrap();

    assert_eq!(end, SessionEnd::TransportFailed);
    assert_workers_stopped(pool, 1);
}

#[test]
fn missing_handshake_is_an_error() {
    let (coordinator, pool) = group(3);
    let mut output = Vec::new();
    let link = LineLink::new(Cursor::new(&b""[..]), &mut output);

    assert!(play_game(link, coordinator).is_err());
    assert!(output.is_empty());
    assert_workers_stopped(pool, 0);
}

#[test]
fn unrecognised_colour_plays_black() {
    let (coordinator, pool) = group(1);
    let mut output = Vec::new();
    let link = LineLink::new(Cursor::new(&b"green\ngen_move\ngame_over\n"[..]), &mut output);

    assert_eq!(play_game(link, coordinator).unwrap(), SessionEnd::GameOver);
    assert!(["23\n", "32\n", "45\n", "54\n"].contains(&String::from_utf8(output).unwrap().as_str()));
    assert!(pool.is_empty());
    assert_workers_stopped(pool, 1);
}
