use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::types::Score;

/// Reserved rank whose weight is added to every result as a participation bonus
pub const PARTICIPATION_BONUS_RANK: i32 = 99;

/// Points awarded per final rank, loaded once from configuration.
///
/// Ranks without a configured weight are worth zero. This is intentional:
/// only the top placements are usually listed, and everything below them
/// should still count as a game played without adding points.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightTable {
    weights: HashMap<i32, Score>,
}

impl WeightTable {
    pub fn new(weights: HashMap<i32, Score>) -> Self {
        Self { weights }
    }

    /// Weight configured for `rank`, or zero when none is configured
    pub fn weight(&self, rank: i32) -> Score {
        self.weights.get(&rank).copied().unwrap_or(0)
    }

    pub fn participation_bonus(&self) -> Score {
        self.weight(PARTICIPATION_BONUS_RANK)
    }

    /// Points a single result with `rank` adds before normalization
    pub fn result_points(&self, rank: i32) -> Score {
        self.weight(rank) + self.participation_bonus()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

impl FromIterator<(i32, Score)> for WeightTable {
    fn from_iter<I: IntoIterator<Item = (i32, Score)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
