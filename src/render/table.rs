/// Terminal table for the most recent games of a season

use colored::Colorize;

use crate::algo::SeasonLog;

/// One display row, most-recent-first, with the running total aligned to
/// the game it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub season: String,
    pub league: String,
    pub date: String,
    pub team: String,
    pub opponent: String,
    pub goals: u32,
    pub assists: u32,
    pub points: u32,
    pub cumulative: u32,
}

/// Derives the descending display view. This is the only place the
/// canonical ascending order gets reversed.
pub fn build_rows(log: &SeasonLog, limit: usize) -> Vec<TableRow> {
    log.ordered
        .iter()
        .zip(log.cumulative.iter())
        .rev()
        .take(limit)
        .map(|(record, &cumulative)| TableRow {
            season: record.season_slug.clone(),
            league: placeholder(&record.league),
            date: record.date_time.format("%Y-%m-%d").to_string(),
            team: placeholder(&record.team),
            opponent: placeholder(&record.opponent),
            goals: record.goals,
            assists: record.assists,
            points: record.points,
            cumulative,
        })
        .collect()
}

pub fn print_game_log_table(player_name: &str, log: &SeasonLog, limit: usize) {
    println!("\n{}", format!("🏒 GAME LOG - {}", player_name).bold());
    println!("{}", "=".repeat(96));

    if log.is_empty() {
        println!("   No games recorded for this season.");
        println!("{}", "=".repeat(96));
        return;
    }

    println!(
        "{}",
        format!(
            "{:<10} {:<14} {:<11} {:<18} {:<18} {:>3} {:>3} {:>4} {:>5}",
            "Season", "League", "Date", "Team", "Opponent", "G", "A", "PTS", "CUM"
        )
        .bold()
    );
    println!("{}", "-".repeat(96));

    let rows = build_rows(log, limit);
    for row in &rows {
        println!(
            "{:<10} {:<14} {:<11} {:<18} {:<18} {:>3} {:>3} {:>4} {:>5}",
            row.season,
            row.league,
            row.date,
            row.team,
            row.opponent,
            row.goals,
            row.assists,
            row.points,
            row.cumulative
        );
    }

    println!("{}", "=".repeat(96));
    println!(
        "   Showing {} of {} games | Season total: {} PTS",
        rows.len(),
        log.len(),
        log.total_points()
    );
}

fn placeholder(value: &str) -> String {
    if value.trim().is_empty() {
        "N/A".to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::normalize;
    use crate::client::GameLogRecord;
    use chrono::{DateTime, Utc};

    fn record(date: &str, points: u32, opponent: &str) -> GameLogRecord {
        GameLogRecord {
            date_time: date.parse::<DateTime<Utc>>().unwrap(),
            season_slug: "2024-2025".to_string(),
            league: "OHL".to_string(),
            team: "Sudbury Wolves".to_string(),
            opponent: opponent.to_string(),
            goals: 0,
            assists: points,
            points,
        }
    }

    fn sample_log() -> crate::algo::SeasonLog {
        normalize(
            vec![
                record("2024-10-05T19:00:00Z", 2, "Barrie Colts"),
                record("2024-10-12T19:00:00Z", 1, "North Bay Battalion"),
                record("2024-10-19T19:00:00Z", 0, "Oshawa Generals"),
                record("2024-10-26T19:00:00Z", 3, "Kingston Frontenacs"),
            ],
            "2024-2025",
        )
    }

    #[test]
    fn test_rows_are_most_recent_first() {
        let rows = build_rows(&sample_log(), 10);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].opponent, "Kingston Frontenacs");
        assert_eq!(rows[3].opponent, "Barrie Colts");
    }

    #[test]
    fn test_cumulative_column_stays_aligned_after_reversal() {
        let rows = build_rows(&sample_log(), 10);
        // Ascending cumulative is [2,3,3,6]; newest row carries the total.
        assert_eq!(rows[0].cumulative, 6);
        assert_eq!(rows[1].cumulative, 3);
        assert_eq!(rows[2].cumulative, 3);
        assert_eq!(rows[3].cumulative, 2);
    }

    #[test]
    fn test_truncates_to_most_recent_games() {
        let rows = build_rows(&sample_log(), 2);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].opponent, "Kingston Frontenacs");
        assert_eq!(rows[1].opponent, "Oshawa Generals");
    }

    #[test]
    fn test_blank_fields_render_as_placeholder() {
        let mut raw = record("2024-10-05T19:00:00Z", 1, "");
        raw.league = String::new();
        raw.team = "  ".to_string();
        let log = normalize(vec![raw], "2024-2025");

        let rows = build_rows(&log, 10);
        assert_eq!(rows[0].league, "N/A");
        assert_eq!(rows[0].team, "N/A");
        assert_eq!(rows[0].opponent, "N/A");
    }

    #[test]
    fn test_empty_log_builds_no_rows() {
        let log = normalize(vec![], "2024-2025");
        assert!(build_rows(&log, 10).is_empty());
    }
}
