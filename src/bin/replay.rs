//! Feed a sequence of opponent moves to a [Predictor] and print each response.

use anyhow::Context;
use clap::Parser;
use roshambo::*;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Opponent moves, one letter per round (e.g. "RPSRRP")
    #[arg(required = true)]
    moves: String,

    /// Also print every strategy's prediction
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let moves = args.moves.chars()
        .filter(|c| !c.is_whitespace())
        .map(Move::try_from)
        .collect::<Result<Vec<Move>, _>>()
        .context("failed to parse opponent moves")?;

    let mut p = Predictor::new();
    let mut prev = None;
    for m in moves {
        let res = p.decide(prev)?;
        println!("[*] Round {:4}: opponent played {}, we play {}",
            p.round(),
            m,
            res
        );
        if args.verbose {
            for vote in p.ballot().votes {
                let prediction = vote.prediction
                    .map_or("-".to_string(), |m| m.to_string());
                println!("      {:14} {} (x{})", vote.strategy, prediction, vote.weight);
            }
        }
        prev = Some(m);
    }
    Ok(())
}
