use tracing::debug;
use xrkit_domain::config::ToolkitConfig;
use xrkit_kernel::platform::{PlatformCatalog, PlatformContext, PlatformHandle};
use xrkit_kernel::types::TypeRegistry;

/// Startup state shared by loading, activation and instantiation.
///
/// Owns the [`TypeRegistry`] instead of relying on process-wide state, so tests
/// and tools can run several independent toolkits side by side.
#[derive(Debug)]
pub struct Toolkit {
    config: ToolkitConfig,
    catalog: PlatformCatalog,
    context: PlatformContext,
    registry: TypeRegistry,
}

impl Default for Toolkit {
    fn default() -> Self {
        Self::from_config(ToolkitConfig::default())
    }
}

impl Toolkit {
    /// Built-in platforms plus the ones declared in `config`, evaluated in the
    /// context `config` describes.
    #[must_use]
    pub fn from_config(config: ToolkitConfig) -> Self {
        let mut catalog = PlatformCatalog::with_defaults();
        catalog.extend_from_config(&config.platforms);
        let context = PlatformContext::from_config(&config.context);

        debug!(
            runtime = context.runtime(),
            authoring = context.is_authoring(),
            platforms = catalog.len(),
            "Toolkit configured"
        );

        Self { config, catalog, context, registry: TypeRegistry::new() }
    }

    /// Replaces the execution context, e.g. to preview another build target.
    #[must_use]
    pub fn with_context(mut self, context: PlatformContext) -> Self {
        self.context = context;
        self
    }

    #[must_use]
    pub const fn config(&self) -> &ToolkitConfig {
        &self.config
    }

    #[must_use]
    pub const fn catalog(&self) -> &PlatformCatalog {
        &self.catalog
    }

    pub const fn catalog_mut(&mut self) -> &mut PlatformCatalog {
        &mut self.catalog
    }

    #[must_use]
    pub const fn context(&self) -> &PlatformContext {
        &self.context
    }

    #[must_use]
    pub const fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    pub const fn registry_mut(&mut self) -> &mut TypeRegistry {
        &mut self.registry
    }

    /// Platforms live in the current context after suppression.
    #[must_use]
    pub fn active_platforms(&self) -> Vec<PlatformHandle> {
        self.catalog.active_platforms(&self.context)
    }
}
