//! # Service profiles
//!
//! A service profile is the ordered list of pluggable implementations configured
//! for one capability category (input, spatial awareness, diagnostics, ...).
//!
//! * [`ServiceConfiguration`]: one immutable entry. Type, name, priority, the
//!   platforms it runs on and an opaque profile reference.
//! * [`ServiceProfile`]: append-only, copy-on-write list of entries with a cached
//!   typed view keyed on the category trait.
//! * [`ServiceConfigurationRecord`]: the persisted shape of an entry. Platforms
//!   are stored by name and rehydrated through a
//!   [`PlatformCatalog`](xrkit_kernel::platform::PlatformCatalog).
//! * [`SettingsSource`]: type attachment merging per-profile settings over a
//!   shared parent when a service is instantiated.

mod entry;
mod error;
mod profile;
mod settings;

pub use crate::entry::{ProfileRef, ServiceConfiguration, ServiceConfigurationRecord};
pub use crate::error::{ServicesError, ServicesErrorExt};
pub use crate::profile::{ServiceProfile, TypedServiceConfiguration};
pub use crate::settings::{InheritedSettings, ResolveSettings, SettingsSource};
