//! Stored profile documents.
//!
//! A profile document is an ordered array of [`ProfileEntry`] values: service
//! configuration records for one capability category, followed by the
//! controller mappings of the input configuration.

use crate::error::XrkitError;
use crate::toolkit::Toolkit;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;
use xrkit_input::{ControllerMapping, ControllerMappingProfile};
use xrkit_services::{ServiceConfigurationRecord, ServiceProfile};
use xrkit_store::EntryStore;

/// One stored entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProfileEntry {
    Service(ServiceConfigurationRecord),
    ControllerMapping(ControllerMapping),
}

/// A loaded profile: the services of category `S` and the controller mappings.
pub struct Profile<S: ?Sized + 'static> {
    pub services: ServiceProfile<S>,
    pub controllers: ControllerMappingProfile,
}

impl<S: ?Sized + 'static> Profile<S> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            services: ServiceProfile::new(name),
            controllers: ControllerMappingProfile::default(),
        }
    }

    /// Splits stored entries by kind, keeping the relative order within each kind.
    ///
    /// # Errors
    /// Returns [`XrkitError::Services`] when a service record names a platform
    /// the toolkit's catalog does not know.
    pub fn from_entries(
        name: impl Into<String>,
        entries: Vec<ProfileEntry>,
        toolkit: &Toolkit,
    ) -> Result<Self, XrkitError> {
        let mut records = Vec::new();
        let mut mappings = Vec::new();
        for entry in entries {
            match entry {
                ProfileEntry::Service(record) => records.push(record),
                ProfileEntry::ControllerMapping(mapping) => mappings.push(mapping),
            }
        }

        let services =
            ServiceProfile::from_records(name, records, toolkit.catalog(), toolkit.registry())?;
        Ok(Self { services, controllers: ControllerMappingProfile::new(mappings) })
    }

    /// Entries in document order: services first, then controller mappings.
    #[must_use]
    pub fn to_entries(&self) -> Vec<ProfileEntry> {
        self.services
            .to_records()
            .into_iter()
            .map(ProfileEntry::Service)
            .chain(self.controllers.mappings.iter().cloned().map(ProfileEntry::ControllerMapping))
            .collect()
    }

    /// Loads a profile and fills empty controller mappings with their defaults.
    ///
    /// # Errors
    /// Returns [`XrkitError::Store`] when loading fails, or any error of
    /// [`Profile::from_entries`].
    pub fn load<E>(
        name: impl Into<String>,
        store: &E,
        toolkit: &Toolkit,
    ) -> Result<Self, XrkitError>
    where
        E: EntryStore<ProfileEntry>,
    {
        let name = name.into();
        let entries = store.load_entries()?;
        let mut profile = Self::from_entries(name, entries, toolkit)?;
        let regenerated = profile.controllers.ensure_default_bindings(toolkit.registry(), false);

        info!(
            profile = profile.services.name(),
            services = profile.services.len(),
            controllers = profile.controllers.len(),
            regenerated,
            "Profile loaded"
        );
        Ok(profile)
    }

    /// # Errors
    /// Returns [`XrkitError::Store`] when saving fails.
    pub fn save<E>(&self, store: &E) -> Result<(), XrkitError>
    where
        E: EntryStore<ProfileEntry>,
    {
        store.save_entries(&self.to_entries())?;
        Ok(())
    }
}

impl<S: ?Sized + 'static> fmt::Debug for Profile<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Profile")
            .field("services", &self.services)
            .field("controllers", &self.controllers)
            .finish()
    }
}
