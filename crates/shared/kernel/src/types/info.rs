use super::constraint::InterfaceId;
use super::guid::TypeGuid;
use crate::error::KernelError;
use fxhash::FxHashMap;
use std::any::{Any, TypeId};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Shared handle to a registered type.
pub type TypeHandle = Arc<TypeInfo>;

/// Coarse classification used by assignment validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TypeKind {
    /// A reference-like implementation object.
    #[default]
    Class,
    /// A plain value type.
    Struct,
    Enum,
    /// An interface marker; never instantiable on its own.
    Interface,
}

impl TypeKind {
    /// Only classes and plain structs are meant to back a type reference.
    #[must_use]
    pub const fn is_assignable(self) -> bool {
        matches!(self, Self::Class | Self::Struct)
    }
}

/// Static metadata a Rust type supplies to be registrable.
pub trait Registered: 'static {
    /// Registered name. Shown in diagnostics; also the seed of the derived GUID.
    const NAME: &'static str;
    /// Author-assigned identity. Prefer setting it for anything persisted, so
    /// renaming the type keeps stored profiles valid.
    const GUID: Option<&'static str> = None;
    const KIND: TypeKind = TypeKind::Class;
    const ABSTRACT: bool = false;
}

/// Metadata of one registered implementation type.
pub struct TypeInfo {
    guid: TypeGuid,
    name: Cow<'static, str>,
    rust_id: TypeId,
    kind: TypeKind,
    is_abstract: bool,
    interfaces: Vec<InterfaceId>,
    attachments: FxHashMap<TypeId, Arc<dyn Any + Send + Sync>>,
}

impl TypeInfo {
    /// Starts describing `T` from its [`Registered`] metadata.
    #[must_use]
    pub fn builder<T: Registered>() -> TypeInfoBuilder {
        TypeInfoBuilder {
            declared_guid: T::GUID,
            guid: None,
            name: Cow::Borrowed(T::NAME),
            rust_id: TypeId::of::<T>(),
            kind: T::KIND,
            is_abstract: T::ABSTRACT,
            interfaces: Vec::new(),
            attachments: FxHashMap::default(),
        }
    }

    /// Describes `T` with no interfaces or attachments.
    ///
    /// # Errors
    /// Returns [`KernelError::InvalidIdentity`] if `T::GUID` is malformed.
    pub fn of<T: Registered>() -> Result<Self, KernelError> {
        Self::builder::<T>().build()
    }

    #[must_use]
    pub const fn guid(&self) -> TypeGuid {
        self.guid
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn rust_id(&self) -> TypeId {
        self.rust_id
    }

    #[must_use]
    pub const fn kind(&self) -> TypeKind {
        self.kind
    }

    #[must_use]
    pub const fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    /// Whether this describes the Rust type `T`.
    #[must_use]
    pub fn is<T: 'static>(&self) -> bool {
        self.rust_id == TypeId::of::<T>()
    }

    #[must_use]
    pub fn implements(&self, interface: InterfaceId) -> bool {
        self.interfaces.contains(&interface)
    }

    #[must_use]
    pub fn interfaces(&self) -> &[InterfaceId] {
        &self.interfaces
    }

    /// Typed data attached at registration (e.g. a default-bindings factory).
    #[must_use]
    pub fn attachment<A: Any + Send + Sync>(&self) -> Option<&A> {
        self.attachments.get(&TypeId::of::<A>()).and_then(|a| a.downcast_ref::<A>())
    }
}

impl PartialEq for TypeInfo {
    fn eq(&self, other: &Self) -> bool {
        self.guid == other.guid && self.rust_id == other.rust_id
    }
}

impl Eq for TypeInfo {}

impl fmt::Debug for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeInfo")
            .field("guid", &self.guid)
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("is_abstract", &self.is_abstract)
            .field("interfaces", &self.interfaces)
            .field("attachments", &self.attachments.len())
            .finish()
    }
}

/// Builder returned by [`TypeInfo::builder`].
#[must_use = "builders do nothing unless you call .build()"]
pub struct TypeInfoBuilder {
    declared_guid: Option<&'static str>,
    guid: Option<TypeGuid>,
    name: Cow<'static, str>,
    rust_id: TypeId,
    kind: TypeKind,
    is_abstract: bool,
    interfaces: Vec<InterfaceId>,
    attachments: FxHashMap<TypeId, Arc<dyn Any + Send + Sync>>,
}

impl TypeInfoBuilder {
    /// Declares that the type implements the capability interface `I`.
    pub fn implements<I: ?Sized + 'static>(mut self) -> Self {
        let interface = InterfaceId::of::<I>();
        if !self.interfaces.contains(&interface) {
            self.interfaces.push(interface);
        }
        self
    }

    /// Attaches typed data retrievable through [`TypeInfo::attachment`]. Replaces
    /// an earlier attachment of the same type.
    pub fn attach<A: Any + Send + Sync>(mut self, value: A) -> Self {
        self.attachments.insert(TypeId::of::<A>(), Arc::new(value));
        self
    }

    /// Overrides the identity instead of using `Registered::GUID` or the name.
    pub const fn guid(mut self, guid: TypeGuid) -> Self {
        self.guid = Some(guid);
        self
    }

    pub fn name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = name.into();
        self
    }

    pub const fn kind(mut self, kind: TypeKind) -> Self {
        self.kind = kind;
        self
    }

    pub const fn abstract_type(mut self, is_abstract: bool) -> Self {
        self.is_abstract = is_abstract;
        self
    }

    /// Finalizes the metadata.
    ///
    /// Identity precedence: explicit [`TypeInfoBuilder::guid`], then the declared
    /// `Registered::GUID`, then a UUIDv5 of the name.
    ///
    /// # Errors
    /// Returns [`KernelError::InvalidIdentity`] if the declared GUID does not parse.
    pub fn build(self) -> Result<TypeInfo, KernelError> {
        let guid = match (self.guid, self.declared_guid) {
            (Some(guid), _) => guid,
            (None, Some(declared)) => {
                TypeGuid::parse(declared).ok_or_else(|| KernelError::InvalidIdentity {
                    message: format!("`{declared}` is not a GUID").into(),
                    context: Some(format!("Declared by `{}`", self.name).into()),
                })?
            },
            (None, None) => TypeGuid::from_name(&self.name),
        };

        Ok(TypeInfo {
            guid,
            name: self.name,
            rust_id: self.rust_id,
            kind: self.kind,
            is_abstract: self.is_abstract,
            interfaces: self.interfaces,
            attachments: self.attachments,
        })
    }
}

impl fmt::Debug for TypeInfoBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeInfoBuilder")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("interfaces", &self.interfaces)
            .finish_non_exhaustive()
    }
}
