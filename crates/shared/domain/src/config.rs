use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level toolkit configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ToolkitConfigInner {
    pub context: ContextConfig,
    /// Extra target platforms on top of the built-in catalog.
    pub platforms: Vec<PlatformDefinition>,
    pub profile: ProfileConfig,
    pub log: LogConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct ToolkitConfig {
    #[serde(flatten, default)]
    inner: Arc<ToolkitConfigInner>,
}

impl Deref for ToolkitConfig {
    type Target = ToolkitConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ToolkitConfig {
    fn deref_mut(&mut self) -> &mut ToolkitConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Where the code is running right now.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    /// Runtime the process executes on (`windows`, `android`, ...).
    pub runtime: String,
    /// Whether the process is the authoring tool rather than a shipped build.
    pub authoring: bool,
    /// Build target currently selected in the authoring tool.
    pub build_target: Option<String>,
    /// Device runtimes detected at startup (e.g. `oculus`).
    pub detected: Vec<String>,
}

/// A target platform declared in configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PlatformDefinition {
    pub name: String,
    /// Runtimes on which the platform can be live.
    pub runtimes: Vec<String>,
    /// Authoring build targets that would produce this platform.
    pub build_targets: Vec<String>,
    /// Device runtimes that must be detected for the platform to be live.
    pub requires: Vec<String>,
    /// Platforms suppressed while this one is available.
    pub overrides: Vec<String>,
    /// Whether the platform may be live inside the authoring tool (device link).
    pub available_in_authoring: bool,
}

/// Location of the stored profile document.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub path: PathBuf,
}

/// Logging knobs read by hosts before installing the subscriber.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub filter: Option<String>,
    pub path: Option<PathBuf>,
}

// --- Default ---

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            runtime: std::env::consts::OS.to_owned(),
            authoring: false,
            build_target: None,
            detected: Vec::new(),
        }
    }
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self { path: PathBuf::from("profile.json") }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), filter: None, path: None }
    }
}
