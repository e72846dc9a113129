use crate::environment::types::Config;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{from_slice, to_string_pretty};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

const CONFIG_PATH: &str = "config.json";
pub const API_URL_ENV: &str = "SYNERGY_API_URL";

/// Persists the app configuration as json in the platform config folder
#[derive(Clone)]
pub struct Repository {
    config: Arc<Mutex<Config>>,
}

impl Repository {
    pub fn new() -> Self {
        Self::with_directory(data_directory())
    }

    pub fn with_directory(directory: PathBuf) -> Self {
        let config = match read(&directory, CONFIG_PATH) {
            Ok(Some(config)) => config,
            // First start: leave an editable config behind
            Ok(None) => {
                let config = Config::default();
                if let Err(e) = write(&directory, CONFIG_PATH, &config) {
                    log::error!("Could not save config: {e:?}");
                }
                config
            }
            Err(e) => {
                log::warn!("Falling back to default config: {e}");
                Config::default()
            }
        };
        Self {
            config: Arc::new(Mutex::new(config)),
        }
    }

    pub fn config(&self) -> Result<Config, String> {
        Ok(self
            .config
            .lock()
            .map_err(|e| format!("Config Data Error: {e:?}"))?
            .clone())
    }

    /// The api base url. The environment variable wins over the stored value.
    pub fn api_base_url(&self) -> String {
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                return url;
            }
        }
        self.config().unwrap_or_default().api_base_url
    }
}

impl Default for Repository {
    fn default() -> Self {
        Self::new()
    }
}

fn read<T: DeserializeOwned>(directory: &Path, name: &str) -> Result<Option<T>, String> {
    let data_path = directory.join(name);
    if !data_path.exists() {
        return Ok(None);
    };
    let data = std::fs::read(&data_path)
        .map_err(|e| format!("Could not read {}: {e:?}", data_path.display()))?;
    let obj: T =
        from_slice(&data).map_err(|e| format!("Could not parse {}: {e:?}", data_path.display()))?;
    Ok(Some(obj))
}

fn write<T: Serialize>(directory: &Path, name: &str, value: &T) -> Result<(), String> {
    if !directory.exists() {
        std::fs::create_dir_all(directory)
            .map_err(|e| format!("Could not create {}: {e:?}", directory.display()))?;
    }
    let data_path = directory.join(name);
    let data = to_string_pretty(&value).map_err(|e| format!("Could not parse value:{e:?}"))?;
    std::fs::write(&data_path, data)
        .map_err(|e| format!("Could not write to {}: {e:?}", data_path.display()))?;
    Ok(())
}

fn data_directory() -> PathBuf {
    use directories_next::ProjectDirs;
    match ProjectDirs::from("com", "stylemac", "synergy") {
        Some(proj_dirs) => proj_dirs.config_dir().to_path_buf(),
        None => {
            log::error!("Couldn't find a config folder, using the working directory");
            PathBuf::from(".")
        }
    }
}
