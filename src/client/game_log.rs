/// Game log response types and the flattened record used by the pipeline

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct GameLogsResponse {
    #[serde(default)]
    pub data: Vec<RawGameLog>,
}

/// One entry as the API ships it, with the stats nested under `game`/`stats`.
/// Season and date are required; a record without them is structurally
/// invalid and fails the whole parse. Stat fields default to zero.
#[derive(Debug, Clone, Deserialize)]
pub struct RawGameLog {
    pub game: RawGame,
    #[serde(rename = "teamName")]
    pub team_name: Option<String>,
    #[serde(rename = "opponentName")]
    pub opponent_name: Option<String>,
    #[serde(default)]
    pub stats: RawStats,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawGame {
    #[serde(rename = "dateTime")]
    pub date_time: DateTime<Utc>,
    pub season: RawSeason,
    pub league: Option<RawLeague>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawSeason {
    pub slug: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawLeague {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawStats {
    #[serde(rename = "G", default)]
    pub goals: u32,
    #[serde(rename = "A", default)]
    pub assists: u32,
    #[serde(rename = "PTS", default)]
    pub points: u32,
}

/// Flat per-game record handed to the normalizer and the table renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameLogRecord {
    pub date_time: DateTime<Utc>,
    pub season_slug: String,
    pub league: String,
    pub team: String,
    pub opponent: String,
    pub goals: u32,
    pub assists: u32,
    pub points: u32,
}

impl From<RawGameLog> for GameLogRecord {
    fn from(raw: RawGameLog) -> Self {
        Self {
            date_time: raw.game.date_time,
            season_slug: raw.game.season.slug,
            league: raw
                .game
                .league
                .and_then(|l| l.name)
                .unwrap_or_default(),
            team: raw.team_name.unwrap_or_default(),
            opponent: raw.opponent_name.unwrap_or_default(),
            goals: raw.stats.goals,
            assists: raw.stats.assists,
            points: raw.stats.points,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_record() {
        let raw = r#"{
            "data": [{
                "game": {
                    "dateTime": "2024-10-12T19:00:00Z",
                    "season": { "slug": "2024-2025" },
                    "league": { "name": "OHL" }
                },
                "teamName": "Sudbury Wolves",
                "opponentName": "Barrie Colts",
                "stats": { "G": 1, "A": 2, "PTS": 3 }
            }]
        }"#;
        let response: GameLogsResponse = serde_json::from_str(raw).unwrap();
        let record = GameLogRecord::from(response.data.into_iter().next().unwrap());
        assert_eq!(record.season_slug, "2024-2025");
        assert_eq!(record.league, "OHL");
        assert_eq!(record.goals, 1);
        assert_eq!(record.assists, 2);
        assert_eq!(record.points, 3);
    }

    #[test]
    fn test_missing_stats_default_to_zero() {
        let raw = r#"{
            "data": [{
                "game": {
                    "dateTime": "2024-10-12T19:00:00Z",
                    "season": { "slug": "2024-2025" }
                },
                "stats": { "G": 2 }
            }]
        }"#;
        let response: GameLogsResponse = serde_json::from_str(raw).unwrap();
        let record = GameLogRecord::from(response.data.into_iter().next().unwrap());
        assert_eq!(record.goals, 2);
        assert_eq!(record.assists, 0);
        assert_eq!(record.points, 0);
        assert_eq!(record.league, "");
        assert_eq!(record.team, "");
    }

    #[test]
    fn test_missing_season_is_rejected() {
        let raw = r#"{
            "data": [{
                "game": { "dateTime": "2024-10-12T19:00:00Z" },
                "stats": { "PTS": 1 }
            }]
        }"#;
        assert!(serde_json::from_str::<GameLogsResponse>(raw).is_err());
    }

    #[test]
    fn test_missing_date_is_rejected() {
        let raw = r#"{
            "data": [{
                "game": { "season": { "slug": "2024-2025" } }
            }]
        }"#;
        assert!(serde_json::from_str::<GameLogsResponse>(raw).is_err());
    }
}
