//! Platform descriptors and capability activation.
//!
//! A descriptor answers "is this deployment target live in the given
//! [`PlatformContext`]?". Capabilities carry a list of descriptors.
//! [`is_active`] folds that list into the authoring verdict, and [`is_live`]
//! additionally requires one of the listed targets to be running.

mod catalog;
mod context;
mod descriptor;
mod resolver;

pub use catalog::PlatformCatalog;
pub use context::PlatformContext;
pub use descriptor::{
    AllPlatforms, AuthoringPlatform, Platform, PlatformHandle, PlatformKind, TargetPlatform,
};
pub use resolver::{is_active, is_live};
