// Othello engine speaking the line-based referee protocol

use std::io::{self, Write};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info, warn};
use othello_core::parallel::WorkerPool;
use othello_core::search::{DEFAULT_DEPTH, DEFAULT_TIME_OFFSET, SearchLimits};
use othello_referee::flushing_logger::FlushingWriter;
use othello_referee::referee::{LineLink, connect_tcp};
use othello_referee::{SessionEnd, play_game};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Referee address
    ip: IpAddr,

    /// Referee port
    port: u16,

    /// Seconds allowed per move
    time_limit: u64,

    /// Debug log file (stderr when omitted)
    log_file: Option<PathBuf>,

    /// Number of search participants, coordinator included
    #[arg(short = 'n', long, default_value_t = 4)]
    processes: usize,

    /// Search depth below each root move
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: u32,

    /// Safety margin subtracted from the time limit, in milliseconds
    #[arg(long, default_value_t = DEFAULT_TIME_OFFSET.as_millis() as u64)]
    time_offset_ms: u64,

    /// Give up on a silent peer after this many seconds (waits forever when omitted)
    #[arg(long)]
    collective_timeout_secs: Option<u64>,

    /// Talk to the referee over stdin/stdout; ip and port are ignored
    #[arg(long)]
    stdio: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = init_logging(&args) {
        eprintln!("Failed to initialise logging: {e:#}");
        std::process::exit(1);
    }

    match run(&args) {
        Ok(end) => info!("Session finished: {end:?}"),
        Err(e) => {
            error!("Fatal error: {e:#}");
            std::process::exit(1);
        }
    }
}

fn init_logging(args: &Args) -> Result<()> {
    let log_level = if args.debug { "debug" } else { "info" };
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    );

    builder
        .format(|buf, record| {
            writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args())
        })
        .write_style(env_logger::WriteStyle::Never);

    match &args.log_file {
        Some(path) => {
            let writer = FlushingWriter::create(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            builder.target(env_logger::Target::Pipe(Box::new(writer)));
        }
        None => {
            builder.target(env_logger::Target::Stderr);
        }
    }

    builder.try_init().context("logger already initialised")?;
    Ok(())
}

fn search_limits(args: &Args) -> SearchLimits {
    SearchLimits::new(args.depth, Duration::from_secs(args.time_limit))
        .with_time_offset(Duration::from_millis(args.time_offset_ms))
}

fn run(args: &Args) -> Result<SessionEnd> {
    let limits = search_limits(args);
    let timeout = args.collective_timeout_secs.map(Duration::from_secs);
    let processes = args.processes.max(1);
    if processes != args.processes {
        warn!("--processes must be at least 1, using 1");
    }

    let (mut coordinator, pool) =
        WorkerPool::spawn(processes, limits, timeout).context("failed to spawn search workers")?;
    info!(
        "Started {processes} participants (depth {}, cutoff {:?})",
        limits.depth,
        limits.cutoff()
    );

    let outcome = if args.stdio {
        let stdin = io::stdin();
        play_game(LineLink::new(stdin.lock(), io::stdout()), coordinator)
    } else {
        let addr = SocketAddr::new(args.ip, args.port);
        match connect_tcp(addr) {
            Ok(link) => {
                info!("Connected to referee at {addr}");
                play_game(link, coordinator)
            }
            Err(e) => {
                if let Err(stop) = coordinator.shutdown() {
                    error!("Failed to stop search workers: {stop}");
                }
                Err(e).with_context(|| format!("failed to connect to referee at {addr}"))
            }
        }
    };

    for summary in pool.join() {
        match summary {
            Ok(s) => info!(
                "rank {}: {} rounds, {} root moves, {} nodes",
                s.rank, s.rounds, s.moves_searched, s.stats.nodes
            ),
            Err(e) => warn!("worker ended abnormally: {e}"),
        }
    }

    outcome
}
