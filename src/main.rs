use anyhow::Result;

use tournament_leaderboard::cli::{Cli, Command};
use tournament_leaderboard::{handle_add, handle_remove, handle_scoreboard, handle_serve, interpret, load_config};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    execute_command(&cli)
}

fn execute_command(cli: &Cli) -> Result<()> {
    let config = load_config(&cli.config)?;
    match &cli.command {
        Command::Serve { port } => handle_serve(config, *port),
        Command::Add { tournament } => handle_add(config, tournament),
        Command::Remove { tournament } => handle_remove(config, tournament),
        Command::Scoreboard { limit } => handle_scoreboard(config, *limit),
    }
}
