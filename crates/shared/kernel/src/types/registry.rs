use super::constraint::TypeConstraint;
use super::guid::TypeGuid;
use super::info::{Registered, TypeHandle, TypeInfo};
use crate::error::KernelError;
use fxhash::FxHashMap;
use std::any::TypeId;
use std::sync::Arc;
use tracing::{debug, trace};

/// Identity-resolution registry.
///
/// Built explicitly by the host (or a test) and then shared read-only, typically
/// behind an `Arc`. Registration takes `&mut self`; a host that keeps registering
/// after sharing the registry across threads wraps it in a lock.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    by_guid: FxHashMap<TypeGuid, TypeHandle>,
    by_rust: FxHashMap<TypeId, TypeGuid>,
}

impl TypeRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a type.
    ///
    /// Registering the same Rust type under the same identity again is a no-op
    /// returning the existing handle.
    ///
    /// # Errors
    /// Returns [`KernelError::DuplicateType`] when the identity is taken by another
    /// Rust type, or the Rust type is already registered under another identity.
    pub fn register(&mut self, info: TypeInfo) -> Result<TypeHandle, KernelError> {
        let guid = info.guid();

        if let Some(existing) = self.by_guid.get(&guid) {
            if existing.rust_id() == info.rust_id() {
                return Ok(Arc::clone(existing));
            }
            return Err(KernelError::DuplicateType {
                message: format!(
                    "`{}` and `{}` share identity {guid}",
                    existing.name(),
                    info.name()
                )
                .into(),
                context: None,
            });
        }

        if let Some(previous) = self.by_rust.get(&info.rust_id()) {
            return Err(KernelError::DuplicateType {
                message: format!("`{}` is already registered as {previous}", info.name()).into(),
                context: Some(format!("Rejected identity {guid}").into()),
            });
        }

        debug!(name = info.name(), %guid, kind = ?info.kind(), "Registered type");

        let handle = Arc::new(info);
        self.by_rust.insert(handle.rust_id(), guid);
        self.by_guid.insert(guid, Arc::clone(&handle));
        Ok(handle)
    }

    /// Registers `T` with no interfaces or attachments.
    ///
    /// # Errors
    /// See [`TypeRegistry::register`] and [`TypeInfo::of`].
    pub fn register_type<T: Registered>(&mut self) -> Result<TypeHandle, KernelError> {
        self.register(TypeInfo::of::<T>()?)
    }

    /// Resolves an identity. `None` means "unresolved"; nothing is cached for misses.
    #[must_use]
    pub fn resolve(&self, guid: TypeGuid) -> Option<TypeHandle> {
        let found = self.by_guid.get(&guid).cloned();
        if found.is_none() {
            trace!(%guid, "Type identity is not registered");
        }
        found
    }

    /// Resolves the string form of an identity. Malformed tokens are unresolved too.
    #[must_use]
    pub fn resolve_token(&self, token: &str) -> Option<TypeHandle> {
        TypeGuid::parse(token).and_then(|guid| self.resolve(guid))
    }

    /// Handle of an already registered Rust type.
    #[must_use]
    pub fn handle_of<T: 'static>(&self) -> Option<TypeHandle> {
        self.by_rust.get(&TypeId::of::<T>()).and_then(|guid| self.resolve(*guid))
    }

    /// Registered types satisfying `constraint`, ordered by name (for pickers).
    #[must_use]
    pub fn implementors(&self, constraint: &TypeConstraint) -> Vec<TypeHandle> {
        let mut found: Vec<TypeHandle> =
            self.by_guid.values().filter(|ty| constraint.is_satisfied_by(ty)).cloned().collect();
        found.sort_by(|a, b| a.name().cmp(b.name()));
        found
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_guid.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_guid.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TypeHandle> {
        self.by_guid.values()
    }
}
