use super::constraint::TypeConstraint;
use super::guid::TypeGuid;
use super::info::TypeHandle;
use super::registry::TypeRegistry;
use crate::error::KernelError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use tracing::warn;

/// Persistent, serializable reference to an implementation type.
///
/// Holds up to three views of the same identity: the bound [`TypeHandle`]
/// (lazily resolved), the [`TypeGuid`], and the canonical string form written
/// to storage. Whenever a type is bound, the GUID and string are its own.
///
/// Conversions between the views are explicit:
/// * into a reference: [`TypeReference::from_type`], [`TypeReference::from_guid`],
///   [`TypeReference::from_token`];
/// * out of a reference: [`TypeReference::to_type`], [`TypeReference::to_guid`],
///   [`TypeReference::token`];
/// * token or GUID to type: [`TypeReference::bind`] against a [`TypeRegistry`].
#[derive(Clone, Default)]
pub struct TypeReference {
    handle: Option<TypeHandle>,
    guid: Option<TypeGuid>,
    token: String,
}

impl TypeReference {
    /// A reference bound to `handle`. Runs the same soft validation as [`TypeReference::set_type`].
    #[must_use]
    pub fn from_type(handle: TypeHandle) -> Self {
        let mut reference = Self::default();
        reference.set_type(Some(handle));
        reference
    }

    /// An unbound reference to `guid`; call [`TypeReference::bind`] to resolve it.
    #[must_use]
    pub fn from_guid(guid: TypeGuid) -> Self {
        Self { handle: None, guid: Some(guid), token: guid.to_string() }
    }

    /// An unbound reference from a stored token.
    ///
    /// Blank tokens produce an empty reference. Malformed tokens are kept verbatim
    /// (so saving does not lose them) and never resolve.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        if token.trim().is_empty() {
            return Self::default();
        }
        match TypeGuid::parse(token) {
            Some(guid) => Self::from_guid(guid),
            None => {
                warn!(token, "Type reference token is not a GUID and will stay unresolved");
                Self { handle: None, guid: None, token: token.to_owned() }
            },
        }
    }

    /// Binds (or clears) the referenced type.
    ///
    /// Types that are neither a class nor a plain struct are reported as a
    /// diagnostic and assigned anyway. Use [`TypeReference::set_type_strict`] to refuse them.
    pub fn set_type(&mut self, handle: Option<TypeHandle>) {
        if let Some(ty) = &handle
            && !ty.kind().is_assignable()
        {
            warn!(
                name = ty.name(),
                kind = ?ty.kind(),
                "Type reference target is not a class or plain struct; assigning anyway"
            );
        }
        self.assign(handle);
    }

    /// Binds `handle` only if it is a class or struct satisfying `constraint`.
    ///
    /// # Errors
    /// Returns [`KernelError::TypeConstraintViolation`]; the reference is left unchanged.
    pub fn set_type_strict(
        &mut self,
        handle: TypeHandle,
        constraint: &TypeConstraint,
    ) -> Result<(), KernelError> {
        if !handle.kind().is_assignable() {
            let (name, kind) = (handle.name(), handle.kind());
            return Err(KernelError::TypeConstraintViolation {
                message: format!("`{name}` is a {kind:?}, not a class or struct").into(),
                context: None,
            });
        }
        if let Some(reason) = constraint.violation(&handle) {
            return Err(KernelError::TypeConstraintViolation {
                message: reason.into(),
                context: None,
            });
        }
        self.assign(Some(handle));
        Ok(())
    }

    fn assign(&mut self, handle: Option<TypeHandle>) {
        self.guid = handle.as_ref().map(|ty| ty.guid());
        self.token = self.guid.map(|guid| guid.to_string()).unwrap_or_default();
        self.handle = handle;
    }

    /// Resolves the stored identity against `registry` if not bound yet.
    ///
    /// Unresolved identities stay unbound and are retried on the next call.
    pub fn bind(&mut self, registry: &TypeRegistry) -> Option<&TypeHandle> {
        if self.handle.is_none()
            && let Some(guid) = self.guid
        {
            self.handle = registry.resolve(guid);
        }
        self.handle.as_ref()
    }

    /// The bound type, if any.
    #[must_use]
    pub const fn to_type(&self) -> Option<&TypeHandle> {
        self.handle.as_ref()
    }

    #[must_use]
    pub const fn to_guid(&self) -> Option<TypeGuid> {
        self.guid
    }

    /// Canonical string form; empty for an empty reference.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    #[must_use]
    pub const fn is_bound(&self) -> bool {
        self.handle.is_some()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guid.is_none() && self.token.is_empty()
    }

    /// Checks the bound type against `constraint`; `None` while unbound.
    #[must_use]
    pub fn satisfies(&self, constraint: &TypeConstraint) -> Option<bool> {
        self.handle.as_ref().map(|ty| constraint.is_satisfied_by(ty))
    }
}

impl PartialEq for TypeReference {
    fn eq(&self, other: &Self) -> bool {
        self.guid == other.guid && self.token == other.token
    }
}

impl Eq for TypeReference {}

impl fmt::Debug for TypeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.handle {
            Some(ty) => write!(f, "TypeReference({} {})", ty.name(), self.token),
            None if self.is_empty() => f.write_str("TypeReference(<none>)"),
            None => write!(f, "TypeReference(unresolved {})", self.token),
        }
    }
}

impl fmt::Display for TypeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.handle {
            Some(ty) => f.write_str(ty.name()),
            None => f.write_str(&self.token),
        }
    }
}

impl Serialize for TypeReference {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.token)
    }
}

impl<'de> Deserialize<'de> for TypeReference {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let token = String::deserialize(deserializer)?;
        Ok(Self::from_token(&token))
    }
}
