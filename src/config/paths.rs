use std::env;
use std::path::PathBuf;

use tracing::debug;

const CONFIG_FILE_NAME: &str = "panorama-sync.json";
const CONFIG_PATH_ENV: &str = "PANORAMA_SYNC_CONFIG";

/// Locate the default config file.
/// Order: `PANORAMA_SYNC_CONFIG`, next to the executable, then the working directory.
pub fn default_config_path() -> PathBuf {
    if let Ok(value) = env::var(CONFIG_PATH_ENV) {
        if !value.trim().is_empty() {
            return PathBuf::from(value.trim());
        }
    }

    if let Ok(exe_path) = env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let candidate = exe_dir.join(CONFIG_FILE_NAME);
            debug!(path = %candidate.display(), "Looking for config beside executable");
            if candidate.exists() {
                return candidate;
            }
        }
    }

    PathBuf::from(CONFIG_FILE_NAME)
}
