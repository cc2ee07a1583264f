use std::path::PathBuf;

use portfolio_sim_core::constants::DEFAULT_DATA_FILE;

pub struct Config {
    pub data_file: PathBuf,
    pub log_format: String,
    pub seed_sample: bool,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let data_file = var("PS_DATA_FILE")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATA_FILE.into());
        let log_format = var("PS_LOG_FORMAT").unwrap_or_else(|| "text".into());
        let seed_sample = var("PS_SEED_SAMPLE")
            .map(|s| parse_flag(&s).unwrap_or(true))
            .unwrap_or(true);
        Self {
            data_file: PathBuf::from(data_file),
            log_format,
            seed_sample,
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
