/// Cumulative points chart: series assembly plus an owned HTML surface

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use crate::algo::{EmaSeries, SeasonLog};

/// Series handed to the chart, oldest-first in the same direction they
/// were computed. The most recent game lands on the right edge of the
/// x axis; no data array is ever reversed for display.
#[derive(Debug, Clone, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub cumulative: Vec<u32>,
    pub ema: Vec<f64>,
    pub ema_period: usize,
    pub ema_smoothed: bool,
}

impl ChartSeries {
    pub fn new(log: &SeasonLog, ema: &EmaSeries) -> Self {
        let labels = (1..=log.len()).map(|i| format!("G{}", i)).collect();
        Self {
            labels,
            cumulative: log.cumulative.clone(),
            ema: ema.values.clone(),
            ema_period: ema.period,
            ema_smoothed: ema.smoothed,
        }
    }

    pub fn overlay_label(&self) -> String {
        if self.ema_smoothed {
            format!("EMA ({} games)", self.ema_period)
        } else {
            format!("Cumulative (EMA skipped: fewer than {} games)", self.ema_period)
        }
    }
}

/// Owner of the rendered chart file. The previous render is disposed
/// inside `replace` before the new one is installed; nothing else holds
/// a reference to the output.
pub struct ChartSurface {
    path: PathBuf,
    current: Option<PathBuf>,
}

impl ChartSurface {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            current: None,
        }
    }

    pub fn current(&self) -> Option<&Path> {
        self.current.as_deref()
    }

    pub fn replace(&mut self, title: &str, chart: &ChartSeries) -> Result<&Path> {
        let html = render_html(title, chart)?;

        // Stage the new render next to the target and swap it in only once
        // it is fully written; a failure leaves the previous chart intact.
        let staged = self.path.with_extension("html.tmp");
        fs::write(&staged, html)
            .with_context(|| format!("failed to write chart to {}", staged.display()))?;
        fs::rename(&staged, &self.path)
            .with_context(|| format!("failed to install chart at {}", self.path.display()))?;

        // The rename replaced any render at the target path; a previous
        // render elsewhere is disposed only now that the new one is live.
        if let Some(old) = self.current.take() {
            if old != self.path {
                debug!("Disposing previous chart render at {}", old.display());
                fs::remove_file(&old).with_context(|| {
                    format!("failed to dispose previous chart at {}", old.display())
                })?;
            }
        }

        info!("📈 Chart written to {}", self.path.display());
        self.current = Some(self.path.clone());
        Ok(self.current.as_deref().unwrap_or(&self.path))
    }
}

fn render_html(title: &str, chart: &ChartSeries) -> Result<String> {
    let labels = serde_json::to_string(&chart.labels)?;
    let cumulative = serde_json::to_string(&chart.cumulative)?;
    let ema = serde_json::to_string(&chart.ema)?;
    let overlay_label = serde_json::to_string(&chart.overlay_label())?;
    let title_json = serde_json::to_string(title)?;
    let title = escape_html(title);

    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>{title}</title>
  <script src="https://cdn.jsdelivr.net/npm/chart.js"></script>
</head>
<body>
  <div style="position: relative; height: 420px; max-width: 960px; margin: 0 auto;">
    <canvas id="cumulativePointsChart"></canvas>
  </div>
  <script>
    new Chart(document.getElementById('cumulativePointsChart'), {{
      type: 'line',
      data: {{
        labels: {labels},
        datasets: [
          {{
            label: 'Cumulative Points',
            data: {cumulative},
            borderColor: '#007bff',
            backgroundColor: 'rgba(0, 123, 255, 0.1)',
            borderWidth: 2,
            pointRadius: 3,
            pointBackgroundColor: '#007bff',
            fill: true
          }},
          {{
            label: {overlay_label},
            data: {ema},
            borderColor: 'red',
            borderWidth: 2,
            borderDash: [5, 5],
            pointRadius: 0,
            fill: false
          }}
        ]
      }},
      options: {{
        responsive: true,
        maintainAspectRatio: false,
        plugins: {{ title: {{ display: true, text: {title_json} }} }},
        scales: {{
          x: {{ title: {{ display: true, text: 'Game Number' }} }},
          y: {{ title: {{ display: true, text: 'Cumulative Points' }}, beginAtZero: true }}
        }}
      }}
    }});
  </script>
</body>
</html>
"#,
        title = title,
        labels = labels,
        cumulative = cumulative,
        ema = ema,
        overlay_label = overlay_label,
        title_json = title_json,
    ))
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
