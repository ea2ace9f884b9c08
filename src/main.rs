//! Hangman binary entry point

use clap::Parser;
use hangman::commands::run;
use hangman::console::StdConsole;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Classic hangman over a functional-programming vocabulary",
    version
)]
struct Cli {
    /// Seed for the word choice, for reproducible games
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let mut console = StdConsole::new();
    run(&mut console, &mut rng)?;

    Ok(())
}
