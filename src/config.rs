use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub player: PlayerConfig,
    #[serde(default)]
    pub urls: UrlsConfig,
    #[serde(default)]
    pub wake: WakeConfig,
    #[serde(default)]
    pub daemon: DaemonConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Player binary, looked up on PATH if not absolute.
    pub program: PathBuf,
    pub fullscreen: bool,
    /// Extra arguments inserted before the URL.
    #[serde(default)]
    pub extra_args: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlsConfig {
    /// Newline-delimited URL pool, re-read at the start of every session.
    pub file: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WakeConfig {
    /// Command run to wake the display (e.g. ["xset", "dpms", "force", "on"]).
    /// Empty disables waking.
    #[serde(default)]
    pub command: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaemonConfig {
    /// Seconds between schedule checks.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    /// Directory for per-run log files. None logs to stdout only.
    #[serde(default = "default_logs_dir")]
    pub logs_dir: Option<PathBuf>,
}

fn default_poll_interval_secs() -> u64 {
    55
}

fn default_logs_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "showtime", "showtime")
        .map(|dirs| dirs.data_local_dir().join("logs"))
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from("mpv"),
            fullscreen: true,
            extra_args: Vec::new(),
        }
    }
}

impl Default for UrlsConfig {
    fn default() -> Self {
        Self {
            file: Config::config_dir().join("urls.txt"),
        }
    }
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval_secs(),
            logs_dir: default_logs_dir(),
        }
    }
}

impl Config {
    fn config_dir() -> PathBuf {
        directories::ProjectDirs::from("com", "showtime", "showtime")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Return the path to the configuration file.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Return the default path of the JSON schedule set.
    pub fn default_schedule_path() -> PathBuf {
        Self::config_dir().join("schedule.json")
    }

    /// Load config from file, creating default if missing or corrupt.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if path.exists() {
            let data = fs::read_to_string(&path)?;
            match toml::from_str::<Config>(&data) {
                Ok(config) => Ok(config),
                Err(e) => {
                    eprintln!(
                        "Warning: Failed to parse config at {}: {}",
                        path.display(),
                        e
                    );
                    eprintln!("Using default configuration.");
                    Ok(Config::default())
                }
            }
        } else {
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Save config to file.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let data = toml::to_string_pretty(self)?;
        fs::write(&path, data)?;

        Ok(())
    }

    /// Get the URL pool file, expanding ~ if needed.
    pub fn url_file(&self) -> PathBuf {
        let file = &self.urls.file;
        if file.starts_with("~") {
            if let Some(home) = dirs::home_dir() {
                return home.join(file.strip_prefix("~").unwrap_or(file));
            }
        }
        file.clone()
    }
}
