//! Evaluate the [Predictor] against each of the built-in opponents.

use clap::Parser;
use roshambo::*;
use roshambo::opponent::*;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of rounds played against each opponent
    #[arg(short, long, default_value_t = 1000)]
    rounds: usize,

    /// Seed for the random opponent
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Window used by the frequency-counter opponent
    #[arg(short, long, default_value_t = 10)]
    window: usize,
}

fn run_test(rounds: usize, opponent: impl Opponent) -> anyhow::Result<()> {
    let name = opponent.name();
    let stat = Match::new(Predictor::new(), opponent).play(rounds)?;
    println!("  {:20} {}/{}/{} (W/L/T) ({:.2}% won)",
        name,
        stat.wins,
        stat.losses,
        stat.ties,
        stat.win_rate() * 100.0,
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("[*] Playing {} rounds against each opponent", args.rounds);
    run_test(args.rounds, Constant(Move::Rock))?;
    run_test(args.rounds, Cycle::new(&[
        Move::Rock, Move::Rock, Move::Paper, Move::Paper, Move::Scissors
    ]))?;
    run_test(args.rounds, Random::new(args.seed))?;
    run_test(args.rounds, Counter::new(Move::Rock))?;
    run_test(args.rounds, FrequencyCounter::new(args.window))?;
    Ok(())
}
