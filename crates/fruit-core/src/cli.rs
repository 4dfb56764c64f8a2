//! Shared CLI helpers for workspace tools.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::{Error, Result};

/// Initializes tracing output for a tool binary. `RUST_LOG` takes
/// precedence over the verbose flag when set.
pub fn setup_cli_logging(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .try_init()
        .map_err(|e| Error::Config(format!("Failed to initialize logger: {e}")))?;

    Ok(())
}

/// Loads a TOML configuration file into any deserializable type.
pub fn load_toml_config<T>(path: &Path) -> Result<T>
where
    T: DeserializeOwned,
{
    let content = fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Failed to read config {}: {e}", path.display())))?;

    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Failed to parse config {}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AugmentationConfig;

    #[test]
    fn test_load_toml_config() {
        let dir = std::env::temp_dir();
        let path = dir.join("fruit_core_cli_test_config.toml");
        fs::write(
            &path,
            r#"
copies_per_image = 4
rotation_degrees = [-45.0, 45.0]
rotation_probability = 0.5
translate_fraction = [0.2, 0.2]
scale_range = [1.0, 1.1]
affine_probability = 0.5
flip_probability = 0.5
noise_mean = 0.0
noise_std = 0.05
noise_probability = 0.3
"#,
        )
        .unwrap();

        let config: AugmentationConfig = load_toml_config(&path).unwrap();
        assert_eq!(config.copies_per_image, 4);
        assert_eq!(config.rotation_degrees, (-45.0, 45.0));

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_missing_config() {
        let result: Result<AugmentationConfig> =
            load_toml_config(Path::new("/nonexistent/config.toml"));
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
