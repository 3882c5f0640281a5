use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;
use xrkit_domain::constants::ENV_PREFIX;

const DEFAULT_CONFIG: &str = "xrkit";

/// Error type for config loading.
#[xrkit_derive::xrkit_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads a configuration file and overlays environment overrides.
///
/// Layers, lowest priority first:
/// 1. **Base file**: `path`, or `xrkit` (any supported extension) in the working directory.
/// 2. **Environment**: variables prefixed with `XRKIT__`; nested keys use double
///    underscores (`XRKIT__CONTEXT__RUNTIME=android` maps to `context.runtime`).
///
/// # Errors
/// Returns [`ConfigError::Config`] when the file is missing, an environment value
/// cannot be parsed, or the merged document does not match `T`.
///
/// # Example
/// ```rust
/// use xrkit_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct HostConfig {
///     runtime: String,
/// }
///
/// let cfg: HostConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load(path, true)
}

/// Same layering as [`load_config`], but a missing file falls back to the type's
/// serde defaults plus environment overrides.
///
/// # Errors
/// Returns [`ConfigError::Config`] when an existing file or an environment value is malformed.
pub fn load_config_or_defaults<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load(path, false)
}

fn load<T>(path: Option<impl AsRef<Path>>, required: bool) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true)
                .convert_case(config::Case::Snake),
        );

    info!(required, "Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
