//! Kernel of the capability resolution core.
//! Everything here is synchronous and allocation-light; it is meant to run during
//! authoring callbacks or the host's sequential initialization pass.
//!
//! ## Type identity
//! Implementations are registered in an explicitly constructed [`types::TypeRegistry`]
//! and referenced persistently through [`types::TypeReference`]:
//! ```rust
//! use xrkit_kernel::types::{Registered, TypeReference, TypeRegistry};
//!
//! struct OpenVrController;
//! impl Registered for OpenVrController {
//!     const NAME: &'static str = "OpenVrController";
//! }
//!
//! let mut registry = TypeRegistry::new();
//! let handle = registry.register_type::<OpenVrController>().unwrap();
//!
//! let stored = TypeReference::from_type(handle).token().to_owned();
//! let mut restored = TypeReference::from_token(&stored);
//! assert!(restored.bind(&registry).is_some_and(|ty| ty.is::<OpenVrController>()));
//! ```
//!
//! ## Platform activation
//! ```rust
//! use xrkit_kernel::platform::{PlatformCatalog, PlatformContext, is_active};
//!
//! let catalog = PlatformCatalog::with_defaults();
//! let context = PlatformContext::new("android");
//! let platforms = catalog.resolve_names(&["android", "ios"]).unwrap();
//! assert!(is_active(&platforms, &context));
//! ```
//!
//! ## Config loading (non-wasm)
//! ```rust,ignore
//! use xrkit_kernel::config::load_config;
//! let cfg: xrkit_domain::config::ToolkitConfig = load_config(Some("xrkit")).unwrap();
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
mod error;
pub mod inheritance;
pub mod platform;
pub mod prelude;
pub mod types;

pub use crate::error::{KernelError, KernelErrorExt};
pub use xrkit_domain as domain;
