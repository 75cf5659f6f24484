/// Rendering of the game log table and the cumulative points chart

pub mod chart;
pub mod table;

pub use chart::{ChartSeries, ChartSurface};
pub use table::{build_rows, print_game_log_table, TableRow};
