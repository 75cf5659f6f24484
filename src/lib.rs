// Core modules
pub mod algo;
pub mod client;
pub mod config;
pub mod render;

// Re-export commonly used types for convenience
pub use algo::{ema, normalize, AnalysisError, EmaSeries, SeasonLog};
pub use client::{FetchError, GameLogRecord, StatsClient};
pub use config::Config;
pub use render::{ChartSeries, ChartSurface};
