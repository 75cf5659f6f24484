/// Numeric transforms over a season of game logs

pub mod normalizer;
pub mod smoother;

pub use normalizer::{normalize, SeasonLog};
pub use smoother::{ema, AnalysisError, EmaSeries};
