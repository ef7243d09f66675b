use path_clean::PathClean;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env::VarError;
use std::path::PathBuf;
use std::time::Duration;
use utility::{Error, Result};

/// CONFIG_LOCATION_ENV is the name of he env variable used
/// to configure the location of the config folder.
/// When not set, DEFAULT_DIR location is used.
pub const CONFIG_LOCATION_ENV: &str = "OPENFAAS_CONFIG";

pub const DEFAULT_DIR: &str = "~/.openfaas";
pub const DEFAULT_FILE: &str = "ui.yml";

/// DEFAULT_CI_DIR is the 'openfaas' directory in the current directory
/// used when running in a CI environment.
pub const DEFAULT_CI_DIR: &str = "./openfaas";

pub const DEFAULT_STORE_URL: &str =
    "https://raw.githubusercontent.com/openfaas/store/master/functions.json";
pub const DEFAULT_ARCH: &str = "x86_64";
pub const DEFAULT_FETCH_FUNCTIONS_DELAY_MS: u64 = 3500;
pub const DEFAULT_QUERY_FUNCTION_DELAY_MS: u64 = 2500;
pub const DEFAULT_DOWNLOAD_DIR: &str = ".";

/// DashboardConfig read from `ui.yml`. Every field is optional in the file.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    pub gateway: String,
    pub namespace: String,
    pub fetch_functions_delay_ms: u64,
    pub query_function_delay_ms: u64,
    pub store_url: String,
    pub arch: String,
    pub download_dir: String,
    /// 0 disables the timeout
    pub invoke_timeout_secs: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        DashboardConfig {
            gateway: String::new(),
            namespace: String::new(),
            fetch_functions_delay_ms: DEFAULT_FETCH_FUNCTIONS_DELAY_MS,
            query_function_delay_ms: DEFAULT_QUERY_FUNCTION_DELAY_MS,
            store_url: DEFAULT_STORE_URL.to_string(),
            arch: DEFAULT_ARCH.to_string(),
            download_dir: DEFAULT_DOWNLOAD_DIR.to_string(),
            invoke_timeout_secs: 0,
        }
    }
}

impl DashboardConfig {
    /// parses a config document, expanding `${VAR:-default}` references from `vars` first
    pub fn from_yaml(data: &str, vars: &HashMap<String, String>) -> Result<DashboardConfig> {
        let expanded = utility::envsubst::substitute(data, vars)?;
        if expanded.trim().is_empty() {
            return Ok(DashboardConfig::default());
        }
        let config: DashboardConfig = serde_yaml::from_str(expanded.as_str())?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.fetch_functions_delay_ms == 0 || self.query_function_delay_ms == 0 {
            return Err(Error::Custom(
                "poll delays in the dashboard config must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn fetch_functions_delay(&self) -> Duration {
        Duration::from_millis(self.fetch_functions_delay_ms)
    }

    pub fn query_function_delay(&self) -> Duration {
        Duration::from_millis(self.query_function_delay_ms)
    }

    pub fn invoke_timeout(&self) -> Option<Duration> {
        if self.invoke_timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.invoke_timeout_secs))
        }
    }

    /// directory binary invocation responses are saved to, with `~` expanded
    pub fn download_path(&self) -> PathBuf {
        expand_path(self.download_dir.as_str())
    }
}

/// config_dir returns the path to the config directory.
/// When
/// 1. CI = "true" and OPENFAAS_CONFIG="", then it will return `./openfaas`, which is located in the current working directory.
/// 2. CI = "true" and OPENFAAS_CONFIG="<path>", then it will return the path value in  OPENFAAS_CONFIG
/// 3. CI = "" and OPENFAAS_CONFIG="", then it will return the default location ~/.openfaas
pub fn config_dir() -> Result<String> {
    match std::env::var(CONFIG_LOCATION_ENV) {
        Ok(overrid) => {
            if overrid.is_empty() && is_running_in_ci() {
                Ok(DEFAULT_CI_DIR.into())
            } else if !overrid.is_empty() {
                Ok(overrid)
            } else {
                Ok(DEFAULT_DIR.into())
            }
        }
        Err(VarError::NotPresent) => {
            if is_running_in_ci() {
                Ok(DEFAULT_CI_DIR.into())
            } else {
                Ok(DEFAULT_DIR.into())
            }
        }
        Err(e) => Err(Error::Custom(format!("{:?}", e))),
    }
}

/// is_running_in_ci checks the ENV var CI and returns true if it's set to true or 1
fn is_running_in_ci() -> bool {
    match std::env::var("CI") {
        Ok(val) => val == "1" || val == "true",
        Err(_) => false,
    }
}

fn expand_path(path: &str) -> PathBuf {
    let expanded = shellexpand::tilde(path);
    PathBuf::from(expanded.into_owned()).clean()
}

/// path of the default config file
pub fn config_file_path() -> Result<PathBuf> {
    let dir = config_dir()?;
    Ok(expand_path(dir.as_str()).join(DEFAULT_FILE))
}

/// loads the dashboard config from `explicit_path`, or from the default location.
/// A missing default file yields the default config; a missing explicit file is an error.
pub fn load_config(explicit_path: Option<&str>) -> Result<DashboardConfig> {
    let path = match explicit_path {
        Some(path) => expand_path(path),
        None => {
            let path = config_file_path()?;
            if !path.exists() {
                return Ok(DashboardConfig::default());
            }
            path
        }
    };

    let data = std::fs::read_to_string(&path).map_err(|e| {
        Error::Custom(format!(
            "can't read config file {}: {}",
            path.to_string_lossy(),
            e
        ))
    })?;
    let vars: HashMap<String, String> = std::env::vars().collect();
    DashboardConfig::from_yaml(data.as_str(), &vars)
}
