use std::collections::HashMap;

use anyhow::Result;
use log::info;
use rusqlite::Connection;

use crate::database::{players, results, PlayerProfile};
use crate::errors::LeaderboardError;
use crate::scoring::{compute_leaderboard, PlayerAggregate, ResultsStore, Score, WeightTable};

/// A ranked player decorated with profile metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub username: String,
    pub name: Option<String>,
    pub country: Option<String>,
    pub score: Score,
    pub games_played: i64,
}

/// Display names and countries keyed by username
#[derive(Debug, Default)]
pub struct PlayerDirectory {
    profiles: HashMap<String, PlayerProfile>,
    display_names: HashMap<String, String>,
}

impl PlayerDirectory {
    pub fn load(conn: &Connection) -> Result<Self> {
        let profiles = players::list_all(conn)?
            .into_iter()
            .map(|p| (p.username.clone(), p))
            .collect();
        let display_names = results::latest_display_names(conn)?.into_iter().collect();

        Ok(Self {
            profiles,
            display_names,
        })
    }

    /// Profile name first, then the name used in the most recent tournament
    pub fn name_for(&self, username: &str) -> Option<String> {
        self.profiles
            .get(username)
            .and_then(|p| p.name.clone())
            .or_else(|| self.display_names.get(username).cloned())
    }

    pub fn country_for(&self, username: &str) -> Option<String> {
        self.profiles.get(username).and_then(|p| p.country.clone())
    }

    fn decorate(&self, rank: usize, aggregate: PlayerAggregate) -> LeaderboardEntry {
        LeaderboardEntry {
            rank,
            name: self.name_for(&aggregate.username),
            country: self.country_for(&aggregate.username),
            username: aggregate.username,
            score: aggregate.score,
            games_played: aggregate.games_played,
        }
    }
}

/// Reads the recorded results and ranks players with the configured weights
pub struct LeaderboardService<'a, S: ResultsStore> {
    store: S,
    weights: &'a WeightTable,
}

impl<'a, S: ResultsStore> LeaderboardService<'a, S> {
    pub fn new(store: S, weights: &'a WeightTable) -> Self {
        Self { store, weights }
    }

    /// Ranked aggregates for every player with at least one result
    pub fn standings(&self) -> Result<Vec<PlayerAggregate>, LeaderboardError> {
        let results = self
            .store
            .fetch_all_results()
            .map_err(LeaderboardError::SourceUnavailable)?;

        let standings = compute_leaderboard(&results, self.weights);
        info!(
            "Computed leaderboard of {} players from {} results",
            standings.len(),
            results.len()
        );
        Ok(standings)
    }

    pub fn scoreboard(&self, directory: &PlayerDirectory) -> Result<Vec<LeaderboardEntry>, LeaderboardError> {
        let entries = self
            .standings()?
            .into_iter()
            .enumerate()
            .map(|(idx, aggregate)| directory.decorate(idx + 1, aggregate))
            .collect();
        Ok(entries)
    }

    /// Leaderboard entry of one player, `None` when they have no results
    pub fn participant(
        &self,
        username: &str,
        directory: &PlayerDirectory,
    ) -> Result<Option<LeaderboardEntry>, LeaderboardError> {
        let entry = self
            .standings()?
            .into_iter()
            .enumerate()
            .find(|(_, aggregate)| aggregate.username == username)
            .map(|(idx, aggregate)| directory.decorate(idx + 1, aggregate));
        Ok(entry)
    }
}
