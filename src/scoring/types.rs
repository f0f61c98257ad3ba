pub type Username = String;
pub type Score = i64;

/// One player's final standing in one recorded tournament
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TournamentResult {
    pub tournament_id: i64,
    pub username: Username,
    pub final_rank: i32,
    pub display_name: Option<String>,
}

impl TournamentResult {
    pub fn new(tournament_id: i64, username: &str, final_rank: i32) -> Self {
        Self {
            tournament_id,
            username: username.to_string(),
            final_rank,
            display_name: None,
        }
    }

    pub fn with_display_name(mut self, name: &str) -> Self {
        self.display_name = Some(name.to_string());
        self
    }

    /// Results without a username are not attributed to any player
    pub fn has_identity(&self) -> bool {
        !self.username.is_empty()
    }
}

/// Normalized cross-tournament standing of a single player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerAggregate {
    pub username: Username,
    pub score: Score,
    pub games_played: i64,
}
