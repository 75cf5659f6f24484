use std::io::{self, BufRead, Write};

use anyhow::Result;
use colored::Colorize;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use puckline::algo::{ema, normalize};
use puckline::client::StatsClient;
use puckline::config::Config;
use puckline::render::{print_game_log_table, ChartSeries, ChartSurface};

const CONFIG_PATH: &str = "puckline.toml";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "puckline=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = load_config();
    if config.api.api_key.is_empty() {
        warn!("No API key configured; set PUCKLINE_API_KEY or api.api_key in {}", CONFIG_PATH);
    }

    let client = StatsClient::new(&config.api)?;
    let mut chart = ChartSurface::new(&config.display.chart_path);

    // One-shot mode when a selection is passed on the command line.
    if let Some(selection) = std::env::args().nth(1) {
        run_selection(&config, &client, &mut chart, &selection).await;
        return Ok(());
    }

    print_roster(&config);

    // Selections are strictly serialized: the next prompt only appears
    // after the previous fetch and render have completed, so there is
    // never a second request in flight.
    let stdin = io::stdin();
    loop {
        print!("\nPlayer (id or name, 'q' to quit): ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let selection = line.trim();
        if selection.eq_ignore_ascii_case("q") {
            break;
        }

        run_selection(&config, &client, &mut chart, selection).await;
    }

    info!("👋 Done");
    Ok(())
}

fn load_config() -> Config {
    match Config::load_from_file(CONFIG_PATH) {
        Ok(config) => {
            info!("✅ Configuration loaded from {}", CONFIG_PATH);
            config
        }
        Err(e) => {
            warn!("Using default configuration ({}: {})", CONFIG_PATH, e);
            let mut config = Config::default();
            config.apply_env_overrides();
            config
        }
    }
}

fn print_roster(config: &Config) {
    println!("\n{}", "🏒 PUCKLINE - SEASON GAME LOGS".bold());
    println!("{}", "=".repeat(48));
    println!("Season: {}", config.analysis.target_season.bold());
    println!("\nRoster:");
    for player in &config.roster {
        println!("   {:>8}  {}", player.player_id, player.name);
    }
}

async fn run_selection(
    config: &Config,
    client: &StatsClient,
    chart: &mut ChartSurface,
    selection: &str,
) {
    if selection.trim().is_empty() {
        println!("{}", "⚠️  Please select a player.".yellow());
        return;
    }

    // Unknown selections are passed through as a raw player id; the API
    // answers with a non-success status if it does not exist.
    let (name, player_id) = match config.find_player(selection) {
        Some(player) => (player.name.clone(), player.player_id.clone()),
        None => (selection.to_string(), selection.to_string()),
    };

    if let Err(e) = run_pipeline(config, client, chart, &name, &player_id).await {
        error!("Game log pipeline failed for player {}: {:#}", player_id, e);
        println!(
            "{}",
            "❌ Could not load game logs. Previous results are left unchanged.".red()
        );
    }
}

async fn run_pipeline(
    config: &Config,
    client: &StatsClient,
    chart: &mut ChartSurface,
    name: &str,
    player_id: &str,
) -> Result<()> {
    let records = client.fetch_game_logs(player_id).await?;

    let log = normalize(records, &config.analysis.target_season);
    let smoothed = ema(&log.cumulative, config.analysis.ema_period)?;

    // Everything fallible happens before anything is shown, so a failed
    // invocation renders nothing at all.
    let series = ChartSeries::new(&log, &smoothed);
    let title = format!("{} | Cumulative Points {}", name, config.analysis.target_season);
    let path = chart.replace(&title, &series)?.to_path_buf();

    print_game_log_table(name, &log, config.display.table_games);
    println!("\n   Chart: {}", path.display().to_string().bold());

    Ok(())
}
