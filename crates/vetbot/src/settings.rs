use std::error::Error as StdError;
use std::fmt::{self, Display, Formatter};
use std::path::Path;
use std::{env, fs};

use vetbot_model::ClinicSettings;

/// Environment variable naming the settings JSON file.
pub const SETTINGS_ENV_VAR: &str = "VETBOT_SETTINGS";

/// An error produced while loading a settings file.
#[derive(Debug)]
pub enum SettingsError {
    /// The file could not be read.
    Io(std::io::Error),
    /// The file is not valid settings JSON.
    Parse(serde_json::Error),
}

impl Display for SettingsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "cannot read settings file: {err}"),
            Self::Parse(err) => write!(f, "malformed settings file: {err}"),
        }
    }
}

impl StdError for SettingsError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
        }
    }
}

/// Loads [`ClinicSettings`] from a JSON file.
pub fn settings_from_path<P: AsRef<Path>>(
    path: P,
) -> Result<ClinicSettings, SettingsError> {
    let contents = fs::read_to_string(path).map_err(SettingsError::Io)?;
    serde_json::from_str(&contents).map_err(SettingsError::Parse)
}

/// Loads settings from the file named by [`SETTINGS_ENV_VAR`].
///
/// This is the forgiving variant the terminal client uses: an unset
/// variable or an unloadable file degrades to the default settings (and
/// thus the responder's fallback contact literals) with a warning,
/// because a chat that cannot start is worse than one with stale
/// contact details.
pub fn settings_from_env() -> ClinicSettings {
    let Ok(path) = env::var(SETTINGS_ENV_VAR) else {
        return ClinicSettings::default();
    };
    match settings_from_path(&path) {
        Ok(settings) => settings,
        Err(err) => {
            warn!(%err, path, "falling back to default settings");
            ClinicSettings::default()
        }
    }
}
