use dirs::home_dir;
use std::{
    env,
    path::{Path, PathBuf},
    sync::Once,
};

const DEFAULT_DIR_NAME: &str = ".duosplit";
const EXPENSES_FILE: &str = "expenses.json";
const ARCHIVE_DIR: &str = "archives";
const CONFIG_FILE: &str = "config.json";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("duosplit_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}

/// Returns the application-specific data directory, defaulting to `~/.duosplit`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("DUOSPLIT_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Canonical path of the expenses data file inside a data directory.
pub fn expenses_file_in(base: &Path) -> PathBuf {
    base.join(EXPENSES_FILE)
}

/// Directory holding safety archives written before destructive resets.
pub fn archives_dir_in(base: &Path) -> PathBuf {
    base.join(ARCHIVE_DIR)
}

/// Path to the configuration file inside a data directory.
pub fn config_file_in(base: &Path) -> PathBuf {
    base.join(CONFIG_FILE)
}

pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
