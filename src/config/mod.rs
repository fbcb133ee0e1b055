use crate::errors::AppResult;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_user_id")]
    pub user_id: String,
    #[serde(default = "default_hosted_zone")]
    pub hosted_zone: String,
    #[serde(default = "default_prize")]
    pub default_prize: String,
    #[serde(default = "default_winners")]
    pub default_winners: usize,
}

fn default_user_id() -> String {
    "local".to_string()
}
fn default_hosted_zone() -> String {
    "example.com".to_string()
}
fn default_prize() -> String {
    "Grand Prize".to_string()
}
fn default_winners() -> usize {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            user_id: default_user_id(),
            hosted_zone: default_hosted_zone(),
            default_prize: default_prize(),
            default_winners: default_winners(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rafflepick")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rafflepick")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rafflepick.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rafflepick.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            Ok(serde_yaml::from_str(&content)?)
        } else {
            Ok(Config::default())
        }
    }

    /// Initialize configuration and database files.
    ///
    /// In test mode the config file is left untouched. Returns the database
    /// path that was set up.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        // DB name: user provided or default
        let db_path = match custom_db {
            Some(name) => {
                let p = Path::new(name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => Self::database_file(),
        };

        if !is_test {
            fs::create_dir_all(&dir)?;

            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };

            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(db_path)
    }
}
