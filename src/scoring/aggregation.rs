use std::cmp::Ordering;
use std::collections::HashMap;

use log::debug;

use super::types::{PlayerAggregate, Score, TournamentResult, Username};
use super::weights::WeightTable;

/// Running totals for one player while results are folded in
#[derive(Debug, Default)]
struct Accumulator {
    points: Score,
    games: i64,
}

impl Accumulator {
    fn record(&mut self, points: Score) {
        self.points += points;
        self.games += 1;
    }

    /// Raw points divided by games + 1, truncated toward zero.
    /// The extra game in the divisor discounts players with few results.
    fn normalized_score(&self) -> Score {
        self.points / (self.games + 1)
    }
}

/// Builds the ranked leaderboard from every recorded result.
///
/// Each result adds `weight(rank) + weight(99)` to its player's total; the
/// total is then normalized by the number of games. Results with an empty
/// username are ignored. Output is sorted by score descending, equal scores
/// ordered by username ascending.
pub fn compute_leaderboard(results: &[TournamentResult], weights: &WeightTable) -> Vec<PlayerAggregate> {
    debug!("Aggregating {} results", results.len());

    // 1. Fold results into per-player totals
    let totals = accumulate_points(results, weights);
    debug!("Found {} distinct players", totals.len());

    // 2. Normalize and sort
    let mut leaderboard = build_aggregates(totals);
    sort_leaderboard(&mut leaderboard);
    leaderboard
}

fn accumulate_points(
    results: &[TournamentResult],
    weights: &WeightTable,
) -> HashMap<Username, Accumulator> {
    let mut totals: HashMap<Username, Accumulator> = HashMap::new();

    for result in results.iter().filter(|r| r.has_identity()) {
        totals
            .entry(result.username.clone())
            .or_default()
            .record(weights.result_points(result.final_rank));
    }

    totals
}

fn build_aggregates(totals: HashMap<Username, Accumulator>) -> Vec<PlayerAggregate> {
    totals
        .into_iter()
        .map(|(username, acc)| PlayerAggregate {
            score: acc.normalized_score(),
            games_played: acc.games,
            username,
        })
        .collect()
}

fn sort_leaderboard(leaderboard: &mut [PlayerAggregate]) {
    leaderboard.sort_by(compare_standing);
}

fn compare_standing(a: &PlayerAggregate, b: &PlayerAggregate) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| a.username.cmp(&b.username))
}
