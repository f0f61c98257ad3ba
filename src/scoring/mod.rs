pub mod aggregation;
pub mod source;
pub mod types;
pub mod weights;

pub use aggregation::compute_leaderboard;
pub use source::ResultsStore;
pub use types::{PlayerAggregate, Score, TournamentResult};
pub use weights::{WeightTable, PARTICIPATION_BONUS_RANK};
