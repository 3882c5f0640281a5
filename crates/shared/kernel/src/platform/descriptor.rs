use super::context::PlatformContext;
use std::fmt;
use std::sync::Arc;
use xrkit_domain::config::PlatformDefinition;
use xrkit_domain::constants::{ALL_PLATFORMS, AUTHORING};

/// Shared handle to a descriptor.
pub type PlatformHandle = Arc<dyn Platform>;

/// How the activation resolver treats a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformKind {
    /// Activates any list it appears in.
    Universal,
    /// The authoring-tool pseudo-platform.
    Authoring,
    /// A real deployment target.
    Target,
}

/// Predicate describing one deployment target. Stateless once constructed.
pub trait Platform: fmt::Debug + Send + Sync {
    fn name(&self) -> &str;

    fn kind(&self) -> PlatformKind {
        PlatformKind::Target
    }

    /// Whether this platform is live right now in `context`.
    fn is_available(&self, context: &PlatformContext) -> bool;

    /// Authoring only: whether a build for the selected build target would make
    /// this platform live. Always `false` outside the authoring tool.
    fn is_build_target_available(&self, context: &PlatformContext) -> bool;

    /// Names of platforms suppressed while this one is available.
    fn overrides(&self) -> &[String] {
        &[]
    }
}

/// The universal descriptor.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllPlatforms;

impl Platform for AllPlatforms {
    fn name(&self) -> &str {
        ALL_PLATFORMS
    }

    fn kind(&self) -> PlatformKind {
        PlatformKind::Universal
    }

    fn is_available(&self, _context: &PlatformContext) -> bool {
        true
    }

    fn is_build_target_available(&self, _context: &PlatformContext) -> bool {
        true
    }
}

/// The authoring-tool pseudo-platform: available whenever the authoring tool runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthoringPlatform;

impl Platform for AuthoringPlatform {
    fn name(&self) -> &str {
        AUTHORING
    }

    fn kind(&self) -> PlatformKind {
        PlatformKind::Authoring
    }

    fn is_available(&self, context: &PlatformContext) -> bool {
        context.is_authoring()
    }

    fn is_build_target_available(&self, _context: &PlatformContext) -> bool {
        false
    }
}

/// A deployment target described by data.
///
/// Live when the context runs on one of `runtimes`, every `requires` device
/// runtime is detected, and the context is a shipped build (unless
/// `available_in_authoring` allows device-link style use inside the tool).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetPlatform {
    name: String,
    runtimes: Vec<String>,
    build_targets: Vec<String>,
    requires: Vec<String>,
    overrides: Vec<String>,
    available_in_authoring: bool,
}

impl TargetPlatform {
    /// A target whose runtime and build target share its name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            runtimes: vec![name.clone()],
            build_targets: vec![name.clone()],
            name,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn from_definition(definition: &PlatformDefinition) -> Self {
        Self {
            name: definition.name.clone(),
            runtimes: definition.runtimes.clone(),
            build_targets: definition.build_targets.clone(),
            requires: definition.requires.clone(),
            overrides: definition.overrides.clone(),
            available_in_authoring: definition.available_in_authoring,
        }
    }

    #[must_use]
    pub fn runtimes<I, S>(mut self, runtimes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.runtimes = runtimes.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn build_targets<I, S>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.build_targets = targets.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn requires(mut self, device_runtime: impl Into<String>) -> Self {
        self.requires.push(device_runtime.into());
        self
    }

    #[must_use]
    pub fn overriding(mut self, platform: impl Into<String>) -> Self {
        self.overrides.push(platform.into());
        self
    }

    #[must_use]
    pub const fn available_in_authoring(mut self, allowed: bool) -> Self {
        self.available_in_authoring = allowed;
        self
    }
}

impl Platform for TargetPlatform {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_available(&self, context: &PlatformContext) -> bool {
        (!context.is_authoring() || self.available_in_authoring)
            && self.runtimes.iter().any(|runtime| runtime == context.runtime())
            && self.requires.iter().all(|device| context.is_detected(device))
    }

    fn is_build_target_available(&self, context: &PlatformContext) -> bool {
        context.is_authoring()
            && context
                .build_target()
                .is_some_and(|target| self.build_targets.iter().any(|t| t == target))
    }

    fn overrides(&self) -> &[String] {
        &self.overrides
    }
}
