pub mod connection;
pub mod models;
pub mod players;
pub mod results;
pub mod setup;
pub mod store;
pub mod tournaments;

pub use connection::{create_pool, get_connection, DbConn, DbPool};
pub use models::*;
pub use setup::open_database;
pub use store::SqliteResultsStore;
