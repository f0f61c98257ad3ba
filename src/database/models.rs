use chrono::NaiveDateTime;

#[derive(Debug, Clone)]
pub struct Tournament {
    pub id: i64,
    pub url: String,
    pub name: String,
    pub started_at: Option<NaiveDateTime>,
    pub full_url: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone)]
pub struct NewTournament<'a> {
    pub id: i64,
    pub url: &'a str,
    pub name: &'a str,
    pub started_at: Option<NaiveDateTime>,
    pub full_url: Option<&'a str>,
}

#[derive(Debug, Clone)]
pub struct PlayerProfile {
    pub username: String,
    pub name: Option<String>,
    pub country: Option<String>,
    pub updated_at: Option<NaiveDateTime>,
}

// DTOs for joined queries
#[derive(Debug, Clone)]
pub struct PlayerResultRow {
    pub tournament_id: i64,
    pub tournament_url: String,
    pub tournament_name: String,
    pub started_at: Option<NaiveDateTime>,
    pub final_rank: i32,
    pub display_name: Option<String>,
}
