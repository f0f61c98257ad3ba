pub mod challonge_client;
pub mod handlers;
pub mod models;
pub mod provider;
pub mod routes;

pub use challonge_client::ChallongeClient;
pub use provider::TournamentProvider;
