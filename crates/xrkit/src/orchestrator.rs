//! Service lifecycle.
//!
//! [`ServiceSet::build`] walks a [`ServiceProfile`] in startup order and skips
//! entries that are not live in the toolkit's context or whose type does not
//! resolve. An entry is live when it passes the authoring gate and, if it names
//! only targets, at least one of them is among
//! [`Toolkit::active_platforms`]. When the type carries a [`SettingsSource`],
//! the merged settings are resolved first and handed to the
//! [`ServiceFactory`] with the entry. The set then drives every instance through
//! `initialize → enable → update* → disable → destroy`. Teardown runs in
//! reverse startup order.

use crate::error::XrkitError;
use crate::toolkit::Toolkit;
use std::any::Any;
use std::fmt;
use tracing::{debug, info, warn};
use xrkit_kernel::types::TypeInfo;
use xrkit_services::{
    ServiceConfiguration, ServiceProfile, SettingsSource, TypedServiceConfiguration,
};

/// A running service instance.
pub trait Service {
    fn name(&self) -> &str;

    /// # Errors
    /// Returns [`XrkitError::Lifecycle`] when the service cannot start.
    fn initialize(&mut self) -> Result<(), XrkitError> {
        Ok(())
    }

    fn enable(&mut self) {}

    fn update(&mut self) {}

    fn disable(&mut self) {}

    fn destroy(&mut self) {}
}

/// Everything a factory gets to build one service.
pub struct Instantiation<'a> {
    pub ty: &'a TypeInfo,
    pub entry: &'a ServiceConfiguration,
    settings: Option<Box<dyn Any + Send + Sync>>,
}

impl<'a> Instantiation<'a> {
    #[must_use]
    pub fn new(ty: &'a TypeInfo, entry: &'a ServiceConfiguration) -> Self {
        Self { ty, entry, settings: None }
    }

    #[must_use]
    pub fn with_settings(mut self, settings: Box<dyn Any + Send + Sync>) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Merged settings, when the type has a [`SettingsSource`] producing a `T`.
    #[must_use]
    pub fn settings<T: Any>(&self) -> Option<&T> {
        self.settings.as_deref().and_then(|s| s.downcast_ref::<T>())
    }
}

impl fmt::Debug for Instantiation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instantiation")
            .field("ty", &self.ty.name())
            .field("entry", &self.entry.name())
            .field("has_settings", &self.settings.is_some())
            .finish()
    }
}

/// Creates service instances for resolved types.
pub trait ServiceFactory {
    /// # Errors
    /// Implementation specific; usually [`XrkitError::Lifecycle`] for a type the
    /// factory cannot build.
    fn instantiate(&self, request: &Instantiation<'_>) -> Result<Box<dyn Service>, XrkitError>;
}

/// Constructor attached to a registered type; makes [`AttachedConstructors`]
/// able to build it.
#[derive(Debug, Clone, Copy)]
pub struct ServiceConstructor(pub fn(&Instantiation<'_>) -> Box<dyn Service>);

/// [`ServiceFactory`] that uses the [`ServiceConstructor`] attached to each type.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttachedConstructors;

impl ServiceFactory for AttachedConstructors {
    fn instantiate(&self, request: &Instantiation<'_>) -> Result<Box<dyn Service>, XrkitError> {
        let ty = request.ty;
        let constructor =
            ty.attachment::<ServiceConstructor>().ok_or_else(|| XrkitError::Lifecycle {
                message: format!("`{}` has no service constructor", ty.name()).into(),
                context: Some(format!("Instantiating `{}`", request.entry.name()).into()),
            })?;
        Ok((constructor.0)(request))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Created,
    Initialized,
    Enabled,
    Disabled,
    Destroyed,
}

/// Ordered set of live services.
pub struct ServiceSet {
    services: Vec<Box<dyn Service>>,
    stage: Stage,
}

impl ServiceSet {
    /// Instantiates every live, resolvable entry of `profile` in startup order.
    ///
    /// Entries whose type is unregistered, or that do not implement the category
    /// `S`, are skipped with a warning.
    ///
    /// # Errors
    /// Returns [`XrkitError::Kernel`] when an entry's merged settings miss a
    /// required field, otherwise propagates the first factory error.
    pub fn build<S, F>(
        profile: &ServiceProfile<S>,
        toolkit: &Toolkit,
        factory: &F,
    ) -> Result<Self, XrkitError>
    where
        S: ?Sized + 'static,
        F: ServiceFactory + ?Sized,
    {
        let constraint = TypedServiceConfiguration::<S>::constraint();
        let live = toolkit.active_platforms();
        let mut services = Vec::new();

        for entry in profile.live_configurations(toolkit.context(), &live) {
            let Some(ty) = entry.resolve_type(toolkit.registry()) else {
                warn!(
                    service = entry.name(),
                    token = entry.instance_type().token(),
                    "Skipping unresolved service"
                );
                continue;
            };
            if let Some(reason) = constraint.violation(&ty) {
                warn!(service = entry.name(), %reason, "Skipping service outside its category");
                continue;
            }

            debug!(
                service = entry.name(),
                ty = ty.name(),
                priority = entry.priority(),
                "Instantiating service"
            );
            let mut request = Instantiation::new(&ty, &entry);
            if let Some(source) = ty.attachment::<SettingsSource>() {
                let settings = source.resolve(&entry).map_err(|err| XrkitError::Kernel {
                    source: err,
                    context: Some(format!("Configuring `{}`", entry.name()).into()),
                })?;
                request = request.with_settings(settings);
            }
            services.push(factory.instantiate(&request)?);
        }

        info!(profile = profile.name(), count = services.len(), "Services created");
        Ok(Self { services, stage: Stage::Created })
    }

    /// Initializes services in startup order. On failure the already
    /// initialized services are destroyed in reverse order.
    ///
    /// # Errors
    /// Returns the failing service's error with its name as context.
    pub fn initialize(&mut self) -> Result<(), XrkitError> {
        if self.stage != Stage::Created {
            warn!(stage = ?self.stage, "Service set already initialized");
            return Ok(());
        }

        for index in 0..self.services.len() {
            if let Err(err) = self.services[index].initialize() {
                let name = self.services[index].name().to_owned();
                for service in self.services[..index].iter_mut().rev() {
                    service.destroy();
                }
                self.stage = Stage::Destroyed;
                return Err(match err {
                    XrkitError::Lifecycle { message, .. } => XrkitError::Lifecycle {
                        message,
                        context: Some(format!("Initializing `{name}`").into()),
                    },
                    other => other,
                });
            }
        }

        self.stage = Stage::Initialized;
        Ok(())
    }

    pub fn enable(&mut self) {
        if matches!(self.stage, Stage::Initialized | Stage::Disabled) {
            self.services.iter_mut().for_each(|s| s.enable());
            self.stage = Stage::Enabled;
        }
    }

    /// One frame of work; ignored unless enabled.
    pub fn update(&mut self) {
        if self.stage == Stage::Enabled {
            self.services.iter_mut().for_each(|s| s.update());
        }
    }

    pub fn disable(&mut self) {
        if self.stage == Stage::Enabled {
            self.services.iter_mut().rev().for_each(|s| s.disable());
            self.stage = Stage::Disabled;
        }
    }

    /// Disables if needed, then destroys in reverse order.
    pub fn destroy(&mut self) {
        self.disable();
        if self.stage != Stage::Destroyed {
            self.services.iter_mut().rev().for_each(|s| s.destroy());
            self.stage = Stage::Destroyed;
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.services.iter().map(|s| s.name())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.services.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl fmt::Debug for ServiceSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceSet")
            .field("stage", &self.stage)
            .field("services", &self.names().collect::<Vec<_>>())
            .finish()
    }
}
