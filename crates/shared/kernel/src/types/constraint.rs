use super::info::TypeInfo;
use std::any::{TypeId, type_name};
use std::fmt;

/// Identity of a capability interface, usually a trait object type (`dyn Controller`).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct InterfaceId {
    id: TypeId,
    name: &'static str,
}

impl InterfaceId {
    #[must_use]
    pub fn of<I: ?Sized + 'static>() -> Self {
        Self { id: TypeId::of::<I>(), name: type_name::<I>() }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Debug for InterfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Requirements a type must meet to be assignable to a constrained reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeConstraint {
    interface: Option<InterfaceId>,
    allow_abstract: bool,
}

impl Default for TypeConstraint {
    fn default() -> Self {
        Self::any()
    }
}

impl TypeConstraint {
    /// Accepts every concrete type.
    #[must_use]
    pub const fn any() -> Self {
        Self { interface: None, allow_abstract: false }
    }

    /// Requires a non-abstract implementation of `I`.
    #[must_use]
    pub fn implementing<I: ?Sized + 'static>() -> Self {
        Self { interface: Some(InterfaceId::of::<I>()), allow_abstract: false }
    }

    #[must_use]
    pub const fn allow_abstract(mut self, allow: bool) -> Self {
        self.allow_abstract = allow;
        self
    }

    #[must_use]
    pub const fn interface(&self) -> Option<InterfaceId> {
        self.interface
    }

    #[must_use]
    pub fn is_satisfied_by(&self, ty: &TypeInfo) -> bool {
        (self.allow_abstract || !ty.is_abstract())
            && self.interface.is_none_or(|interface| ty.implements(interface))
    }

    /// Human-readable reason `ty` fails the constraint, `None` when it passes.
    #[must_use]
    pub fn violation(&self, ty: &TypeInfo) -> Option<String> {
        if !self.allow_abstract && ty.is_abstract() {
            return Some(format!("`{}` is abstract", ty.name()));
        }
        match self.interface {
            Some(interface) if !ty.implements(interface) => {
                Some(format!("`{}` does not implement `{}`", ty.name(), interface.name()))
            },
            _ => None,
        }
    }
}
