pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod http;
pub mod rate_limiter;
pub mod scoring;
pub mod services;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use colored::Colorize;

use crate::api::ChallongeClient;
use crate::config::settings::AppConfig;
use crate::database::SqliteResultsStore;
use crate::services::{IngestionService, LeaderboardEntry, LeaderboardService, PlayerDirectory, ServerService, TournamentService};

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn load_config(path: &str) -> Result<AppConfig> {
    AppConfig::load(path)
}

pub fn handle_serve(config: AppConfig, port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_add(config: AppConfig, tournament: &str) -> Result<()> {
    let pool = database::open_database(&config.storage.database_path)?;
    let runtime = tokio::runtime::Runtime::new()?;
    let summary = runtime.block_on(async {
        let client = ChallongeClient::new(&config.provider)?;
        let mut service = IngestionService::new(client, pool);
        service.add_tournament(tournament).await.map_err(anyhow::Error::from)
    })?;

    println!(
        "Recorded {} ({}) with {} results",
        summary.name.bold(),
        summary.url,
        summary.results_stored
    );
    Ok(())
}

pub fn handle_remove(config: AppConfig, tournament: &str) -> Result<()> {
    let pool = database::open_database(&config.storage.database_path)?;
    TournamentService::new(pool).remove(tournament)?;
    println!("Removed {}", tournament);
    Ok(())
}

pub fn handle_scoreboard(config: AppConfig, limit: Option<usize>) -> Result<()> {
    let pool = database::open_database(&config.storage.database_path)?;
    let conn = database::get_connection(&pool)?;
    let directory = PlayerDirectory::load(&conn)?;
    drop(conn);

    let service = LeaderboardService::new(SqliteResultsStore::new(pool), &config.weights);
    let entries = service.scoreboard(&directory)?;

    print_scoreboard(&entries, limit.unwrap_or(entries.len()));
    Ok(())
}

fn print_scoreboard(entries: &[LeaderboardEntry], limit: usize) {
    if entries.is_empty() {
        println!("{}", "No results recorded yet".yellow());
        return;
    }

    let header = format!("{:>4}  {:<24} {:<24} {:>7} {:>6}", "#", "Username", "Name", "Score", "Games");
    println!("{}", header.bold());

    for entry in entries.iter().take(limit) {
        let name = entry.name.as_deref().unwrap_or("-");
        let line = format!(
            "{:>4}  {:<24} {:<24} {:>7} {:>6}",
            entry.rank, entry.username, name, entry.score, entry.games_played
        );
        if entry.rank <= 3 {
            println!("{}", line.green());
        } else {
            println!("{}", line);
        }
    }
}
