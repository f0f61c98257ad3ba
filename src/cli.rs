use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "cross-tournament leaderboard backend")]
pub struct Cli {
    /// Path to the JSON configuration file
    #[arg(short, long, global = true, default_value = "config.json")]
    pub config: String,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the backend server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Fetch a tournament's final standings from Challonge and record them
    Add {
        /// Tournament url identifier, e.g. "weekly12" or "community-weekly12"
        tournament: String,
    },
    /// Delete a recorded tournament and all of its results
    Remove {
        /// Tournament url identifier used when it was added
        tournament: String,
    },
    /// Print the current leaderboard
    Scoreboard {
        /// Show only the top N players
        #[arg(short, long)]
        limit: Option<usize>,
    },
}
