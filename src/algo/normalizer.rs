/// Season filtering and cumulative points derivation

use crate::client::GameLogRecord;

/// One season of game logs in canonical ascending date order, with the
/// aligned running points total. Descending views for display are derived
/// by reversal at the rendering boundary, never here.
#[derive(Debug, Clone, Default)]
pub struct SeasonLog {
    pub ordered: Vec<GameLogRecord>,
    pub cumulative: Vec<u32>,
}

impl SeasonLog {
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn total_points(&self) -> u32 {
        self.cumulative.last().copied().unwrap_or(0)
    }
}

/// Filters `records` down to `target_season` and derives the cumulative
/// points series. Pure; an empty result is a valid season, not an error.
pub fn normalize(records: Vec<GameLogRecord>, target_season: &str) -> SeasonLog {
    let mut ordered: Vec<GameLogRecord> = records
        .into_iter()
        .filter(|r| r.season_slug == target_season)
        .collect();

    // Stable sort: equal timestamps keep their input order.
    ordered.sort_by_key(|r| r.date_time);

    let mut running = 0u32;
    let cumulative = ordered
        .iter()
        .map(|r| {
            running += r.points;
            running
        })
        .collect();

    SeasonLog { ordered, cumulative }
}
