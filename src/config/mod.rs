use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the storage slots (record list, fuel price).
    pub storage: String,
    /// Currency symbol used by the cost metrics.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "R$".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: Self::storage_dir().to_string_lossy().to_string(),
            currency: default_currency(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("frotalog")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".frotalog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("frotalog.conf")
    }

    /// Return the default storage directory
    pub fn storage_dir() -> PathBuf {
        Self::config_dir().join("storage")
    }

    /// Load configuration from file, falling back to defaults when the file
    /// is missing or unreadable.
    pub fn load() -> Self {
        let path = Self::config_file();
        match fs::read_to_string(&path) {
            Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
            Err(_) => Config::default(),
        }
    }

    /// Initialize the configuration file and an empty storage directory.
    pub fn init_all(custom_storage: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Storage dir: user provided or default
        let storage_path = if let Some(name) = custom_storage {
            let p = Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::storage_dir()
        };

        let config = Config {
            storage: storage_path.to_string_lossy().to_string(),
            currency: default_currency(),
        };

        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        fs::create_dir_all(&storage_path)?;
        println!("✅ Storage:     {:?}", storage_path);

        Ok(())
    }
}
