/// Exponential moving average over the cumulative points series

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("EMA period must be a positive integer, got {0}")]
    InvalidPeriod(usize),
}

/// Smoothing output, same length as its input. `smoothed` is false when
/// the series was shorter than the period and passed through untouched,
/// so the rendering layer can label the overlay honestly.
#[derive(Debug, Clone, PartialEq)]
pub struct EmaSeries {
    pub values: Vec<f64>,
    pub period: usize,
    pub smoothed: bool,
}

/// Single-pole IIR filter: alpha = 2 / (period + 1), seeded with the first
/// value. Input must be in ascending chronological order.
pub fn ema(cumulative: &[u32], period: usize) -> Result<EmaSeries, AnalysisError> {
    if period == 0 {
        return Err(AnalysisError::InvalidPeriod(period));
    }

    if cumulative.len() < period {
        // Not enough data to smooth; hand the raw series back unchanged.
        return Ok(EmaSeries {
            values: cumulative.iter().map(|&v| v as f64).collect(),
            period,
            smoothed: false,
        });
    }

    let alpha = 2.0 / (period as f64 + 1.0);
    let mut values = Vec::with_capacity(cumulative.len());
    values.push(cumulative[0] as f64);

    for &point in &cumulative[1..] {
        let prev = *values.last().unwrap_or(&0.0);
        values.push(alpha * point as f64 + (1.0 - alpha) * prev);
    }

    Ok(EmaSeries {
        values,
        period,
        smoothed: true,
    })
}
