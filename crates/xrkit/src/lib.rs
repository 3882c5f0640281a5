//! Facade crate for xrkit.
//! Re-exports the kernel, domain and feature crates and wires them into a
//! [`Toolkit`]: the platform catalog, the execution context and the type registry
//! a host builds once at startup.
//!
//! ## Usage
//! 1. Build a [`Toolkit`] from [`domain::config::ToolkitConfig`] and register
//!    implementation types in [`Toolkit::registry_mut`].
//! 2. Load a [`persistence::Profile`] from an [`store::EntryStore`].
//! 3. Hand its service profile to [`orchestrator::ServiceSet::build`] and drive
//!    the lifecycle.

mod error;
pub mod orchestrator;
pub mod persistence;
mod toolkit;

pub use crate::error::{XrkitError, XrkitErrorExt};
pub use crate::toolkit::Toolkit;
pub use xrkit_domain as domain;
pub use xrkit_input as input;
pub use xrkit_kernel as kernel;
pub use xrkit_services as services;
pub use xrkit_store as store;

/// Everything a host usually imports.
pub mod prelude {
    pub use crate::orchestrator::{
        AttachedConstructors, Instantiation, Service, ServiceConstructor, ServiceFactory,
        ServiceSet,
    };
    pub use crate::persistence::{Profile, ProfileEntry};
    pub use crate::{Toolkit, XrkitError, XrkitErrorExt};
    pub use xrkit_input::{Controller, ControllerMapping, ControllerMappingProfile, Handedness};
    pub use xrkit_kernel::prelude::*;
    pub use xrkit_services::{
        InheritedSettings, ProfileRef, ServiceConfiguration, ServiceProfile, SettingsSource,
    };
    pub use xrkit_store::{EntryStore, JsonFileStore, MemoryStore};
}
