#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    str::FromStr,
    sync::{Arc, Mutex, OnceLock},
};

use anyhow::{Result, anyhow};
use tracing::Level;

use crate::constants::{
    DEFAULT_EXTENSION, DEFAULT_LOG_LEVEL, DEFAULT_PASS_THRESHOLD, DEFAULT_TEMPLATE_MARKER,
};

/// Runtime configuration shared across the crate.
#[derive(Debug, Clone)]
pub struct ConfigState {
    /// Minimum percentage for a zero exit status.
    pass_threshold:  f64,
    /// File-name marker identifying the assignment template.
    template_marker: String,
    /// Extension used when discovering submissions in a directory.
    extension:       String,
    /// Verbosity of the tracing subscriber.
    log_level:       Level,
}

impl Default for ConfigState {
    fn default() -> Self {
        Self {
            pass_threshold:  DEFAULT_PASS_THRESHOLD,
            template_marker: DEFAULT_TEMPLATE_MARKER.to_string(),
            extension:       DEFAULT_EXTENSION.to_string(),
            log_level:       Level::WARN,
        }
    }
}

impl ConfigState {
    /// Construct a new configuration instance from the process environment.
    fn from_env() -> Self {
        let pass_threshold = read_env_f64("STMX_PASS_THRESHOLD", DEFAULT_PASS_THRESHOLD);
        let template_marker = read_env_string("STMX_TEMPLATE_MARKER", DEFAULT_TEMPLATE_MARKER);
        let extension = read_env_string("STMX_EXTENSION", DEFAULT_EXTENSION)
            .trim_start_matches('.')
            .to_string();
        let log_level = parse_level(&read_env_string("STMX_LOG", DEFAULT_LOG_LEVEL));

        Self {
            pass_threshold,
            template_marker,
            extension,
            log_level,
        }
    }

    /// Returns the pass threshold as a percentage.
    pub fn pass_threshold(&self) -> f64 {
        self.pass_threshold
    }

    /// Returns the template marker used to skip starter files.
    pub fn template_marker(&self) -> &str {
        &self.template_marker
    }

    /// Returns the submission file extension, without a leading dot.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Returns the configured tracing level.
    pub fn log_level(&self) -> Level {
        self.log_level
    }
}

/// Global storage for the lazily constructed configuration state.
static CONFIG_SLOT: OnceLock<Mutex<Option<Arc<ConfigState>>>> = OnceLock::new();

/// Returns the mutex guarding the global configuration slot.
fn slot() -> &'static Mutex<Option<Arc<ConfigState>>> {
    CONFIG_SLOT.get_or_init(|| Mutex::new(None))
}

/// Ensure the global configuration has been initialized and return it.
pub fn ensure_initialized() -> Result<Arc<ConfigState>> {
    let mut guard = slot()
        .lock()
        .map_err(|_| anyhow!("configuration slot poisoned"))?;
    if let Some(cfg) = guard.as_ref() {
        return Ok(Arc::clone(cfg));
    }

    let cfg = Arc::new(ConfigState::from_env());
    tracing::debug!(?cfg, "configuration loaded");
    *guard = Some(Arc::clone(&cfg));
    Ok(cfg)
}

/// Returns the active configuration, falling back to defaults if the global
/// slot cannot be read.
pub fn get() -> Arc<ConfigState> {
    ensure_initialized().unwrap_or_else(|_| Arc::new(ConfigState::default()))
}

/// Returns the configured pass threshold.
pub fn pass_threshold() -> f64 {
    get().pass_threshold()
}

/// Parses an environment variable as `f64`, falling back to `default` when
/// parsing fails, the value is not finite, or the variable is missing.
fn read_env_f64(env: &str, default: f64) -> f64 {
    std::env::var(env)
        .ok()
        .and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or(default)
}

/// Reads a non-empty, trimmed environment variable or returns `default`.
fn read_env_string(env: &str, default: &str) -> String {
    std::env::var(env)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_owned())
}

/// Maps a level name (`error`, `warn`, `info`, `debug`, `trace`) to a tracing
/// level. Unknown names yield `WARN`.
pub fn parse_level(name: &str) -> Level {
    Level::from_str(name.trim()).unwrap_or(Level::WARN)
}
