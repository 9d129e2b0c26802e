use anyhow::Result;
use clap::Parser;
use std::io::Write;

pub mod selfplay;

#[derive(Parser, Debug)]
#[command(author, version, about = "Plays a game of checkers between two random movers")]
pub struct Args {
    /// Seed for the move picker (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many plies
    #[arg(long, default_value_t = 200)]
    max_plies: usize,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Only print the final position
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .format(|buf, record| {
        writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args())
    })
    .target(env_logger::Target::Stderr)
    .init();

    if let Err(e) = run(&args) {
        log::error!("Fatal error: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let outcome = selfplay::play(args.seed, args.max_plies, !args.quiet)?;
    println!("{}", outcome.board);
    println!(
        "{} after {} plies (score {:+.1})",
        outcome.result,
        outcome.plies,
        outcome.board.evaluate()
    );
    Ok(())
}
