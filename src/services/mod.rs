pub mod ingestion;
pub mod leaderboard;
pub mod server;

pub use ingestion::{IngestionService, IngestionSummary, TournamentService};
pub use leaderboard::{LeaderboardEntry, LeaderboardService, PlayerDirectory};
pub use server::ServerService;
