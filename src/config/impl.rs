use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;

use super::{DEFAULT_CONFIG_PATH, StaticConfig};

static CONFIG: OnceLock<ArcSwap<StaticConfig>> = OnceLock::new();

/// Get the global configuration instance
///
/// Returns an Arc pointer to the configuration, which is cheap to clone
/// and doesn't hold any locks.
pub fn get_config() -> Arc<StaticConfig> {
    CONFIG
        .get()
        .expect("Config not initialized. Call init_config() first.")
        .load_full()
}

/// Same as [`get_config`] but returns `None` before initialization
pub fn try_get_config() -> Option<Arc<StaticConfig>> {
    CONFIG.get().map(|c| c.load_full())
}

/// Initialize the global configuration
///
/// Loads configuration from `path` (or "config.toml" in the current
/// directory). If the file doesn't exist, uses in-memory defaults.
/// Later calls are no-ops.
///
/// # Examples
/// ```no_run
/// use emasmetal::config::init_config;
/// init_config(None);
/// ```
pub fn init_config(path: Option<&str>) {
    CONFIG.get_or_init(|| {
        ArcSwap::from_pointee(StaticConfig::load(path.unwrap_or(DEFAULT_CONFIG_PATH)))
    });
}

/// Install an already-built configuration (tests, embedding)
///
/// Replaces the current value when the global was already initialized.
pub fn set_config(config: StaticConfig) {
    match CONFIG.get() {
        Some(current) => current.store(Arc::new(config)),
        None => {
            let _ = CONFIG.set(ArcSwap::from_pointee(config));
        }
    }
}
