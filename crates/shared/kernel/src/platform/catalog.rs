use super::context::PlatformContext;
use super::descriptor::{
    AllPlatforms, AuthoringPlatform, PlatformHandle, PlatformKind, TargetPlatform,
};
use super::resolver::is_live;
use crate::error::KernelError;
use fxhash::FxHashSet;
use std::sync::Arc;
use tracing::debug;
use xrkit_domain::config::PlatformDefinition;
use xrkit_domain::constants::{ANDROID, IOS, LINUX, MACOS, OCULUS, UNIVERSAL_WINDOWS, WEB, WINDOWS};

/// Named set of known platform descriptors.
///
/// Order is registration order; names are unique (registering a name again
/// replaces the earlier descriptor in place).
#[derive(Debug, Clone, Default)]
pub struct PlatformCatalog {
    platforms: Vec<PlatformHandle>,
}

impl PlatformCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The universal descriptor, the authoring pseudo-platform and the standard targets.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut catalog = Self::new();
        catalog.register(Arc::new(AllPlatforms));
        catalog.register(Arc::new(AuthoringPlatform));
        for name in [WINDOWS, LINUX, MACOS, ANDROID, IOS, WEB] {
            catalog.register(Arc::new(TargetPlatform::new(name)));
        }
        catalog.register(Arc::new(TargetPlatform::new(UNIVERSAL_WINDOWS).runtimes([WINDOWS])));
        catalog.register(Arc::new(
            TargetPlatform::new(OCULUS)
                .runtimes([ANDROID, WINDOWS])
                .build_targets([ANDROID, WINDOWS])
                .requires(OCULUS)
                .overriding(ANDROID)
                .available_in_authoring(true),
        ));
        catalog
    }

    /// Adds a descriptor, replacing any descriptor with the same name.
    pub fn register(&mut self, platform: PlatformHandle) {
        match self.platforms.iter_mut().find(|p| p.name() == platform.name()) {
            Some(slot) => {
                debug!(name = platform.name(), "Replacing platform descriptor");
                *slot = platform;
            },
            None => self.platforms.push(platform),
        }
    }

    /// Registers every platform declared in configuration.
    pub fn extend_from_config(&mut self, definitions: &[PlatformDefinition]) {
        for definition in definitions {
            self.register(Arc::new(TargetPlatform::from_definition(definition)));
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<PlatformHandle> {
        self.platforms.iter().find(|p| p.name() == name).cloned()
    }

    /// Looks up descriptors by name, keeping the given order.
    ///
    /// # Errors
    /// Returns [`KernelError::UnknownPlatform`] for the first unknown name.
    pub fn resolve_names<S: AsRef<str>>(
        &self,
        names: &[S],
    ) -> Result<Vec<PlatformHandle>, KernelError> {
        names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.get(name).ok_or_else(|| KernelError::UnknownPlatform {
                    message: format!("`{name}` is not a known platform").into(),
                    context: None,
                })
            })
            .collect()
    }

    /// Every descriptor reporting itself available in `context`.
    #[must_use]
    pub fn available(&self, context: &PlatformContext) -> Vec<PlatformHandle> {
        self.platforms.iter().filter(|p| p.is_available(context)).cloned().collect()
    }

    /// Available target and authoring descriptors minus those suppressed by
    /// another available descriptor. The universal descriptor is not listed.
    #[must_use]
    pub fn active_platforms(&self, context: &PlatformContext) -> Vec<PlatformHandle> {
        let available: Vec<_> = self
            .available(context)
            .into_iter()
            .filter(|p| p.kind() != PlatformKind::Universal)
            .collect();

        let suppressed: FxHashSet<&str> =
            available.iter().flat_map(|p| p.overrides().iter().map(String::as_str)).collect();

        available.iter().filter(|p| !suppressed.contains(p.name())).cloned().collect()
    }

    /// Whether a capability carrying `platforms` should run in `context`.
    /// See [`is_live`].
    #[must_use]
    pub fn is_live(&self, platforms: &[PlatformHandle], context: &PlatformContext) -> bool {
        is_live(platforms, context, &self.active_platforms(context))
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlatformHandle> {
        self.platforms.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }
}
