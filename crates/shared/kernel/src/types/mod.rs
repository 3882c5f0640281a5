//! Persistent type identity.
//!
//! Rust has no runtime reflection, so "a concrete implementation type" is a
//! [`TypeInfo`] registered in a [`TypeRegistry`]: the Rust `TypeId`, a stable
//! [`TypeGuid`], the capability interfaces the type implements, and any typed
//! attachments (factories) other crates hang on it. A [`TypeReference`] is the
//! serializable pointer to such a type.

mod constraint;
mod guid;
mod info;
mod reference;
mod registry;

pub use constraint::{InterfaceId, TypeConstraint};
pub use guid::TypeGuid;
pub use info::{Registered, TypeHandle, TypeInfo, TypeInfoBuilder, TypeKind};
pub use reference::TypeReference;
pub use registry::TypeRegistry;
