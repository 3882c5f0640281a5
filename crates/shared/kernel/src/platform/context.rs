use fxhash::FxHashSet;
use xrkit_domain::config::ContextConfig;

/// The execution context descriptors are evaluated against.
///
/// Passed explicitly instead of being read from process-wide state, so a test can
/// evaluate the same descriptors as "authoring tool targeting Android" and as
/// "shipped Windows build" side by side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlatformContext {
    runtime: String,
    authoring: bool,
    build_target: Option<String>,
    detected: FxHashSet<String>,
}

impl PlatformContext {
    /// A shipped-build context running on `runtime`.
    pub fn new(runtime: impl Into<String>) -> Self {
        Self { runtime: runtime.into(), ..Self::default() }
    }

    /// An authoring-tool context on `runtime` with `build_target` selected.
    pub fn authoring(runtime: impl Into<String>, build_target: impl Into<String>) -> Self {
        Self {
            runtime: runtime.into(),
            authoring: true,
            build_target: Some(build_target.into()),
            detected: FxHashSet::default(),
        }
    }

    #[must_use]
    pub fn from_config(config: &ContextConfig) -> Self {
        Self {
            runtime: config.runtime.clone(),
            authoring: config.authoring,
            build_target: config.build_target.clone(),
            detected: config.detected.iter().cloned().collect(),
        }
    }

    /// Marks a device runtime (e.g. `oculus`) as detected.
    #[must_use]
    pub fn with_detected(mut self, device_runtime: impl Into<String>) -> Self {
        self.detected.insert(device_runtime.into());
        self
    }

    #[must_use]
    pub fn runtime(&self) -> &str {
        &self.runtime
    }

    #[must_use]
    pub const fn is_authoring(&self) -> bool {
        self.authoring
    }

    #[must_use]
    pub fn build_target(&self) -> Option<&str> {
        self.build_target.as_deref()
    }

    #[must_use]
    pub fn is_detected(&self, device_runtime: &str) -> bool {
        self.detected.contains(device_runtime)
    }
}
