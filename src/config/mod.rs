use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::core::calculator::ShiftWindow;
use crate::errors::{AppError, AppResult};
use crate::utils::time::parse_time;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_user")]
    pub user: String,

    // official shift window (paid time is clamped to it)
    #[serde(default = "default_shift_start")]
    pub shift_start: String,
    #[serde(default = "default_shift_end")]
    pub shift_end: String,
    #[serde(default = "default_break_start")]
    pub break_start: String,
    #[serde(default = "default_break_end")]
    pub break_end: String,

    // geofence reference point for factory check-in/out
    #[serde(default = "default_site_latitude")]
    pub site_latitude: f64,
    #[serde(default = "default_site_longitude")]
    pub site_longitude: f64,
    #[serde(default = "default_site_radius_m")]
    pub site_radius_m: f64,
}

fn default_user() -> String {
    env::var("USER")
        .or_else(|_| env::var("USERNAME"))
        .unwrap_or_else(|_| "worker".to_string())
}
fn default_shift_start() -> String {
    "08:30".to_string()
}
fn default_shift_end() -> String {
    "17:30".to_string()
}
fn default_break_start() -> String {
    "12:00".to_string()
}
fn default_break_end() -> String {
    "13:00".to_string()
}
fn default_site_latitude() -> f64 {
    45.4642
}
fn default_site_longitude() -> f64 {
    9.1900
}
fn default_site_radius_m() -> f64 {
    250.0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            user: default_user(),
            shift_start: default_shift_start(),
            shift_end: default_shift_end(),
            break_start: default_break_start(),
            break_end: default_break_end(),
            site_latitude: default_site_latitude(),
            site_longitude: default_site_longitude(),
            site_radius_m: default_site_radius_m(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("shiftlog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".shiftlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("shiftlog.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("shiftlog.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
                Err(_) => Config::default(),
            }
        } else {
            Config::default()
        }
    }

    /// Parse the four HH:MM window fields into a ShiftWindow.
    pub fn shift_window(&self) -> AppResult<ShiftWindow> {
        let field = |name: &str, v: &str| {
            parse_time(v).ok_or_else(|| AppError::Config(format!("{}: bad time '{}'", name, v)))
        };
        Ok(ShiftWindow {
            shift_start: field("shift_start", &self.shift_start)?,
            shift_end: field("shift_end", &self.shift_end)?,
            break_start: field("break_start", &self.break_start)?,
            break_end: field("break_end", &self.break_end)?,
        })
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file (skipped in test mode)
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(())
    }
}
