//! Common imports for crates built on the kernel.

pub use crate::inheritance::{Inherit, InheritanceResolver};
pub use crate::platform::{
    Platform, PlatformCatalog, PlatformContext, PlatformHandle, PlatformKind, is_active, is_live,
};
pub use crate::types::{
    InterfaceId, Registered, TypeConstraint, TypeGuid, TypeHandle, TypeInfo, TypeKind,
    TypeReference, TypeRegistry,
};
pub use crate::{KernelError, KernelErrorExt};
