//! Location and storage of the user preferences file.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use eyre::{OptionExt, Result};
use serde::Serialize;

const PREFS_FILE_NAME: &str = "prefs";
const PREFS_FILE_EXTENSION: &str = "yaml";

/// Environment variable that overrides the location of the preferences file.
pub const PREFS_PATH_ENV_VAR: &str = "SPINCUBE_PREFS";

lazy_static! {
    static ref PREFS_FILE: Option<PathBuf> = default_prefs_file();
}

fn default_prefs_file() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(PREFS_PATH_ENV_VAR) {
        return Some(PathBuf::from(path));
    }
    match ProjectDirs::from("", "", "Spincube") {
        Some(dirs) => Some(
            dirs.config_dir()
                .join(format!("{PREFS_FILE_NAME}.{PREFS_FILE_EXTENSION}")),
        ),
        None => {
            log::error!("Error getting config directory");
            None
        }
    }
}

/// Returns the user preferences file.
pub fn prefs_file() -> Result<&'static Path> {
    PREFS_FILE.as_deref().ok_or_eyre("no preferences path")
}

pub(crate) fn user_config_source(path: &Path) -> impl config::Source + Send + Sync + 'static {
    config::File::from(path)
        .format(crate::PREFS_FILE_FORMAT)
        .required(false)
}

/// Writes preferences to `path` as YAML, creating parent directories as
/// needed.
pub fn save_to(path: &Path, prefs_data: &impl Serialize) -> Result<()> {
    if let Some(p) = path.parent() {
        std::fs::create_dir_all(p)?;
    }
    serde_norway::to_writer(std::fs::File::create(path)?, prefs_data)?;
    Ok(())
}

/// Renames an unreadable preferences file so that it is not overwritten.
pub(crate) fn backup_prefs_file(path: &Path) {
    if !path.is_file() {
        return;
    }
    let backup_path = path.with_extension(format!("bak.{PREFS_FILE_EXTENSION}"));
    match std::fs::rename(path, &backup_path) {
        Ok(()) => log::info!(
            "backup of {} stored at {}",
            path.display(),
            backup_path.display(),
        ),
        Err(e) => log::error!("error backing up {}: {e}", path.display()),
    }
}
