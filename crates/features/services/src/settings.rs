//! Per-type settings merged at instantiation.
//!
//! A registered type carries a [`SettingsSource`] attachment. When a service of
//! that type is built, the source picks the override named by the entry's
//! [`ProfileRef`] (if any) and merges it over the shared parent through
//! [`Inherit`]. The merged value reaches the service factory type-erased.

use crate::entry::{ProfileRef, ServiceConfiguration};
use fxhash::FxHashMap;
use std::any::Any;
use std::fmt;
use std::sync::Arc;
use tracing::trace;
use xrkit_kernel::KernelError;
use xrkit_kernel::inheritance::Inherit;

/// Produces the effective settings for one entry.
pub trait ResolveSettings {
    /// # Errors
    /// Returns [`KernelError::MissingRequiredConfiguration`] when the merge
    /// leaves a required field empty.
    fn resolve(
        &self,
        entry: &ServiceConfiguration,
    ) -> Result<Box<dyn Any + Send + Sync>, KernelError>;
}

/// Type attachment carrying the settings a type is configured with.
#[derive(Clone)]
pub struct SettingsSource(Arc<dyn ResolveSettings + Send + Sync>);

impl SettingsSource {
    pub fn new(source: impl ResolveSettings + Send + Sync + 'static) -> Self {
        Self(Arc::new(source))
    }

    /// # Errors
    /// See [`ResolveSettings::resolve`].
    pub fn resolve(
        &self,
        entry: &ServiceConfiguration,
    ) -> Result<Box<dyn Any + Send + Sync>, KernelError> {
        self.0.resolve(entry)
    }
}

impl fmt::Debug for SettingsSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SettingsSource")
    }
}

/// Shared parent settings with optional per-profile overrides.
#[derive(Debug, Clone)]
pub struct InheritedSettings<T> {
    parent: T,
    overrides: FxHashMap<ProfileRef, T>,
}

impl<T> InheritedSettings<T>
where
    T: Inherit + Clone + Send + Sync + 'static,
{
    pub fn new(parent: T) -> Self {
        Self { parent, overrides: FxHashMap::default() }
    }

    #[must_use]
    pub fn with_profile(mut self, profile: ProfileRef, leaf: T) -> Self {
        self.overrides.insert(profile, leaf);
        self
    }

    /// Settings for `entry`: its profile override merged over the parent, or
    /// the parent checked against itself when no override applies.
    ///
    /// # Errors
    /// See [`Inherit::inherit_from`].
    pub fn effective(&self, entry: &ServiceConfiguration) -> Result<T, KernelError> {
        let leaf = entry.profile().and_then(|p| self.overrides.get(p)).unwrap_or(&self.parent);
        trace!(
            service = entry.name(),
            profile = entry.profile().map(ProfileRef::as_str),
            "Merging settings"
        );
        leaf.inherit_from(&self.parent, entry.name())
    }
}

impl<T> ResolveSettings for InheritedSettings<T>
where
    T: Inherit + Clone + Send + Sync + 'static,
{
    fn resolve(
        &self,
        entry: &ServiceConfiguration,
    ) -> Result<Box<dyn Any + Send + Sync>, KernelError> {
        Ok(Box::new(self.effective(entry)?))
    }
}
