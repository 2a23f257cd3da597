//! Settings file for the `prontuario` binary.
//!
//! Stored as JSON with a `config_version` stamp. Older files are upgraded
//! in memory on load, one version step at a time, and written back in the
//! newest shape on the next save.

use std::path::{Path, PathBuf};
use std::time::Duration;

use prontuario_api::config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, HttpConfig};
use prontuario_auth::storage::write_private;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Shape written by this build. Every bump needs a step in [`upgrade`].
const LATEST_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Absent in files written before versioning; read as 0.
    #[serde(default)]
    pub config_version: u32,
    pub base_url: String,
    /// Since v1.
    pub timeout_secs: u64,
    pub created_at: jiff::Timestamp,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config_version: LATEST_VERSION,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            created_at: jiff::Timestamp::now(),
        }
    }
}

impl AppConfig {
    pub fn http_config(&self) -> HttpConfig {
        HttpConfig::new(&self.base_url, Duration::from_secs(self.timeout_secs.max(1)))
    }
}

/// `<config_dir>/prontuario/config.json`.
pub fn config_path() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("prontuario").join("config.json"))
}

/// The saved settings, or defaults when nothing has been saved.
pub fn load_or_default() -> eyre::Result<AppConfig> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> eyre::Result<AppConfig> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("cannot read {}: {e}", path.display()))?;

    // Upgrades work on the untyped document; fields a step adds may be
    // missing from the typed struct's point of view.
    let Value::Object(mut fields) = serde_json::from_str::<Value>(&text)? else {
        return Err(eyre::eyre!("{} does not hold a JSON object", path.display()));
    };
    let found = fields
        .get("config_version")
        .and_then(Value::as_u64)
        .unwrap_or(0);
    let found = u32::try_from(found).unwrap_or(u32::MAX);

    upgrade(&mut fields, found)?;
    Ok(serde_json::from_value(Value::Object(fields))?)
}

fn upgrade(fields: &mut Map<String, Value>, found: u32) -> eyre::Result<()> {
    if found > LATEST_VERSION {
        return Err(eyre::eyre!(
            "config_version {found} is newer than this build supports ({LATEST_VERSION}); \
             upgrade prontuario to read it"
        ));
    }

    if found < 1 {
        fields
            .entry("timeout_secs")
            .or_insert_with(|| Value::from(DEFAULT_TIMEOUT.as_secs()));
        fields.insert("config_version".to_string(), Value::from(1));
        tracing::info!(from = found, to = 1, "upgraded config: timeout_secs added");
    }

    Ok(())
}

pub fn save_config(config: &AppConfig) -> eyre::Result<()> {
    save_config_to(&config_path()?, config)
}

/// Write `config` in the latest shape, whatever version it was loaded as.
pub fn save_config_to(path: &Path, config: &AppConfig) -> eyre::Result<()> {
    let current = AppConfig {
        config_version: LATEST_VERSION,
        ..config.clone()
    };
    write_private(path, serde_json::to_string_pretty(&current)?.as_bytes())?;
    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
