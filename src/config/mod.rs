/// Configuration for the stats endpoint, analysis parameters and roster

pub mod settings;

pub use settings::{Config, Player};
