//! User preferences.
//!
//! Preferences are layered: the built-in defaults in `default.yaml` are
//! loaded first and then overridden by whatever the user's preferences file
//! contains.

#![allow(missing_docs)]

#[macro_use]
extern crate lazy_static;

use std::path::Path;

use eyre::Result;
use serde::{Deserialize, Serialize};

mod animation;
mod interaction;
pub mod persist;

pub use animation::*;
pub use interaction::*;

const PREFS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_PREFS_STR: &str = include_str!("default.yaml");

lazy_static! {
    pub static ref DEFAULT_PREFS: Preferences =
        serde_norway::from_str(DEFAULT_PREFS_STR).expect("error loading default preferences");
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Preferences {
    pub animation: AnimationPreferences,
    pub interaction: InteractionPreferences,
}
impl Preferences {
    /// Loads preferences from the user's preferences file, falling back on
    /// the defaults if there is no preferences file.
    pub fn load() -> Self {
        match persist::prefs_file() {
            Ok(path) => Self::load_from(Some(path)),
            Err(e) => {
                log::warn!("Error loading user preferences: {e}");
                Self::load_from(None)
            }
        }
    }

    /// Loads preferences from `user_file` layered on top of the defaults. If
    /// loading fails, then the file is backed up (if possible) and the
    /// default preferences are returned.
    pub fn load_from(user_file: Option<&Path>) -> Self {
        let mut config = config::Config::builder().add_source(config::File::from_str(
            DEFAULT_PREFS_STR,
            PREFS_FILE_FORMAT,
        ));
        if let Some(path) = user_file {
            config = config.add_source(persist::user_config_source(path));
        }

        let mut prefs = config
            .build()
            .and_then(|c| c.try_deserialize::<Self>())
            .unwrap_or_else(|e| {
                log::warn!("Error loading preferences: {e}");
                if let Some(path) = user_file {
                    persist::backup_prefs_file(path);
                }
                DEFAULT_PREFS.clone()
            });
        prefs.sanitize();
        prefs
    }

    /// Saves preferences to the user's preferences file.
    pub fn save(&self) -> Result<()> {
        self.save_to(persist::prefs_file()?)
    }
    /// Saves preferences to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        persist::save_to(path, self)?;
        log::debug!("Saved preferences to {}", path.display());
        Ok(())
    }

    /// Serializes preferences as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_norway::to_string(self)?)
    }

    fn sanitize(&mut self) {
        self.animation.sanitize();
        self.interaction.sanitize();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_yaml_matches_default_impl() {
        assert_eq!(*DEFAULT_PREFS, Preferences::default());
    }

    #[test]
    fn test_load_without_user_file() {
        let prefs = Preferences::load_from(None);
        assert_eq!(prefs, *DEFAULT_PREFS);
        assert_eq!(prefs.animation.twist_duration, 0.3);
        assert_eq!(prefs.animation.scramble_twist_duration, 0.2);
        assert_eq!(
            prefs.animation.twist_interpolation,
            InterpolateFn::Smoothstep,
        );
        assert_eq!(prefs.interaction.face_normal_threshold, 0.8);
    }

    #[test]
    fn test_sanitize() {
        let mut prefs = Preferences::default();
        prefs.animation.twist_duration = -1.0;
        prefs.animation.scramble_move_delay = f32::INFINITY;
        prefs.interaction.face_normal_threshold = 1.5;
        prefs.sanitize();
        assert_eq!(prefs, Preferences::default());
    }
}
