use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const MAX_PER_PAGE: u8 = 100;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub account: Option<String>,
    pub output_path: PathBuf,
    pub per_page: u8,
    /// Alternate API root, e.g. a GitHub Enterprise host.
    pub api_base: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            account: None,
            output_path: PathBuf::from("devstats.csv"),
            per_page: MAX_PER_PAGE,
            api_base: None,
        }
    }
}

/// Values given on the command line. They win over every other layer, even
/// when a lower layer fails to parse.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CliOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u8>,
}

impl CliOverrides {
    fn apply(self, mut config: Config) -> Config {
        if let Some(account) = self.account {
            config.account = Some(account);
        }
        if let Some(path) = self.output_path {
            config.output_path = path;
        }
        if let Some(per_page) = self.per_page {
            config.per_page = per_page;
        }
        config
    }
}

impl Config {
    /// Layers defaults, the user config file, `DEVSTATS_*` env vars and
    /// finally the command line.
    pub fn load(cli: CliOverrides) -> Self {
        let config_file = config_dir().join("devstats").join("config.toml");

        let mut figment = Figment::from(Serialized::defaults(Config::default()));

        if config_file.exists() {
            figment = figment.merge(Toml::file(&config_file));
        }

        figment = figment
            .merge(Env::prefixed("DEVSTATS_"))
            .merge(Serialized::defaults(&cli));

        match figment.extract() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("config parse error, using defaults: {e}");
                cli.apply(Config::default())
            }
        }
    }

    pub fn page_size(&self) -> u8 {
        self.per_page.clamp(1, MAX_PER_PAGE)
    }
}

pub fn config_dir() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join(".config"))
        })
        .unwrap_or_else(|| PathBuf::from("."))
}
