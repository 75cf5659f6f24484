/// HTTP client for the statistics provider

pub mod game_log;
pub mod stats_api;

pub use game_log::GameLogRecord;
pub use stats_api::{FetchError, StatsClient};
