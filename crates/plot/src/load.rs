use std::path::{Path, PathBuf};

use cobweb_maps::Scenario;

/// Errors that can occur when loading a scenario file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Loads a starting scenario from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid scenario.
pub fn load_scenario(path: impl AsRef<Path>) -> Result<Scenario, LoadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let scenario = toml::from_str(&text).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("loaded scenario from {}", path.display());

    Ok(scenario)
}
