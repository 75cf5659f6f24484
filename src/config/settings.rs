/// Configuration structures loaded from TOML

use serde::{Deserialize, Serialize};

const API_KEY_ENV: &str = "PUCKLINE_API_KEY";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub api: Api,
    pub analysis: Analysis,
    pub display: Display,
    #[serde(default = "default_roster")]
    pub roster: Vec<Player>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Api {
    pub base_url: String,
    pub api_key: String,
    pub page_limit: u32,
    pub sort: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Analysis {
    pub target_season: String,
    pub ema_period: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Display {
    pub table_games: usize,
    pub chart_path: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Player {
    pub name: String,
    pub player_id: String,
}

impl Config {
    pub fn load_from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// The API credential never lives in source; it comes from the config
    /// file or, preferably, the environment.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.is_empty() {
                self.api.api_key = key;
            }
        }
    }

    pub fn find_player(&self, selection: &str) -> Option<&Player> {
        self.roster
            .iter()
            .find(|p| p.player_id == selection || p.name.eq_ignore_ascii_case(selection))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: Api {
                base_url: "https://api.eliteprospects.com/v1".to_string(),
                api_key: String::new(),
                page_limit: 100,
                sort: "-game.dateTime".to_string(),
                timeout_secs: 15,
            },
            analysis: Analysis {
                target_season: "2024-2025".to_string(),
                ema_period: 5,
            },
            display: Display {
                table_games: 10,
                chart_path: "cumulative_points.html".to_string(),
            },
            roster: default_roster(),
        }
    }
}

fn default_roster() -> Vec<Player> {
    [
        ("Alexander Hague", "628137"),
        ("Raiden Doxtater", "897396"),
        ("Elijah Chavez", "906006"),
        ("Johnny Brooks", "887871"),
        ("Louis Sturgeon", "897413"),
    ]
    .iter()
    .map(|(name, id)| Player {
        name: name.to_string(),
        player_id: id.to_string(),
    })
    .collect()
}
