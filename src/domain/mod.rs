pub mod models;

pub use models::{ParticipantResponse, TournamentResponse, TournamentStandings};
