//! wwwordle - CLI
//!
//! Terminal client for the wwwordle guessing game. Guesses are judged by a
//! remote service; this binary only hosts the board and the turn machinery.

use anyhow::Result;
use clap::{Parser, Subcommand};
use wwwordle::{
    commands::run_simple,
    game::Game,
    interactive::{App, run_tui},
    judge::{DEFAULT_API_URL, HttpJudge},
};

#[derive(Parser)]
#[command(
    name = "wwwordle",
    about = "Word-guessing game judged by a remote service",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of guess rows
    #[arg(short, long, global = true, default_value_t = 5)]
    attempts: usize,

    /// Letters per word
    #[arg(short, long, global = true, default_value_t = 5)]
    letters: usize,

    /// Judge endpoint to post guesses to
    #[arg(long, global = true, default_value = DEFAULT_API_URL)]
    api_url: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line-based CLI mode without the TUI
    Simple,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let judge = HttpJudge::new(cli.api_url.as_str());
    let game = Game::new(cli.attempts, cli.letters)?;

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_tui(App::new(game, &judge)),
        Commands::Simple => run_simple(game, &judge).map_err(|e| anyhow::anyhow!(e)),
    }
}
