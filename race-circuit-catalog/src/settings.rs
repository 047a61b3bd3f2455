//! User settings (data directory override).
//!
//! The settings file is `~/.config/race-circuit/settings.toml`:
//! ```toml
//! [data]
//! dir = "/path/to/season-2026"
//! ```

use std::io;
use std::path::{Path, PathBuf};

use crate::error::CatalogError;
use crate::season::{Season, builtin_season, load_season};

/// Canonical path to the settings file: `~/.config/race-circuit/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("race-circuit").join("settings.toml")
}

/// Resolve the season data directory using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. Saved `data.dir` in `settings.toml`
/// 3. `None`: use the embedded season
pub fn resolve_data_dir(cli_override: Option<PathBuf>) -> Option<PathBuf> {
    resolve_data_dir_from(&settings_path(), cli_override)
}

/// [`resolve_data_dir`] against a specific settings file.
pub fn resolve_data_dir_from(settings: &Path, cli_override: Option<PathBuf>) -> Option<PathBuf> {
    cli_override.or_else(|| load_data_dir(settings))
}

/// Load the season from the resolved data directory, or the embedded one.
pub fn load_configured_season(cli_override: Option<PathBuf>) -> Result<Season, CatalogError> {
    load_configured_season_from(&settings_path(), cli_override)
}

/// [`load_configured_season`] against a specific settings file.
pub fn load_configured_season_from(
    settings: &Path,
    cli_override: Option<PathBuf>,
) -> Result<Season, CatalogError> {
    match resolve_data_dir_from(settings, cli_override) {
        Some(dir) => {
            log::debug!("Loading season from {}", dir.display());
            load_season(&dir)
        }
        None => {
            log::debug!("Loading embedded season");
            builtin_season()
        }
    }
}

/// Read `data.dir` from a settings file, if set.
pub fn load_data_dir(settings: &Path) -> Option<PathBuf> {
    let contents = std::fs::read_to_string(settings).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    let dir = doc.get("data")?.get("dir")?.as_str()?;
    if dir.is_empty() {
        None
    } else {
        Some(PathBuf::from(dir))
    }
}

/// Save (or clear) the data directory in the user's `settings.toml`.
pub fn save_data_dir(path: Option<&Path>) -> io::Result<()> {
    save_data_dir_to(&settings_path(), path)
}

/// Save (or clear) the data directory in the given settings file.
///
/// Only `data.dir` is touched; other keys in the file are preserved. An
/// existing file that is not valid TOML is left alone and reported as
/// [`io::ErrorKind::InvalidData`].
pub fn save_data_dir_to(settings: &Path, path: Option<&Path>) -> io::Result<()> {
    let mut doc: toml::Value = match std::fs::read_to_string(settings) {
        Ok(contents) => contents.parse().map_err(|e: toml::de::Error| {
            log::warn!(
                "Not overwriting {}: file is not valid TOML",
                settings.display()
            );
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("{}: {}", settings.display(), e.message()),
            )
        })?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => toml::Value::Table(Default::default()),
        Err(e) => return Err(e),
    };

    let table = doc
        .as_table_mut()
        .ok_or_else(|| io::Error::other("settings.toml root is not a table"))?;
    let data = table
        .entry("data")
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let data_table = data
        .as_table_mut()
        .ok_or_else(|| io::Error::other("[data] is not a table"))?;

    match path {
        Some(p) => {
            data_table.insert(
                "dir".to_string(),
                toml::Value::String(p.to_string_lossy().into_owned()),
            );
        }
        None => {
            data_table.remove("dir");
        }
    }

    // Write atomically
    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc).map_err(io::Error::other)?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, settings)?;

    Ok(())
}

/// Load the full settings file as a pretty-printed TOML string for display.
pub fn load_settings_string() -> Option<String> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    toml::to_string_pretty(&doc).ok()
}
