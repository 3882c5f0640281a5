//! Per-field merge of a leaf configuration against its parent.
//!
//! Every field resolves independently: the leaf value wins when it differs from
//! the parent value, otherwise the parent value is used. There is no "was this
//! field set" flag, so a leaf value equal to the parent's is treated as inherited
//! and is reported with [`ValueSource::Parent`].
//!
//! ```rust
//! use xrkit_kernel::inheritance::InheritanceResolver;
//!
//! #[derive(Clone, Default)]
//! struct Smoothing {
//!     window: u32,
//!     weight: f32,
//! }
//!
//! let parent = Smoothing { window: 9, weight: 0.5 };
//! let leaf = Smoothing { window: 5, weight: 0.5 };
//! let resolver = InheritanceResolver::new("Smoothing", &leaf, &parent);
//!
//! assert_eq!(resolver.field(|c| &c.window), 5);
//! assert!(resolver.field_with_source(|c| &c.weight).is_inherited());
//! ```

use crate::error::KernelError;
use tracing::error;

/// Which side of the merge supplied a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
    Leaf,
    Parent,
}

/// A merged value and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inherited<T> {
    pub value: T,
    pub source: ValueSource,
}

impl<T> Inherited<T> {
    #[must_use]
    pub fn is_inherited(&self) -> bool {
        self.source == ValueSource::Parent
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

/// Resolves a single value.
pub fn inherit<T: PartialEq + Clone>(leaf: &T, parent: &T) -> Inherited<T> {
    if leaf == parent {
        Inherited { value: parent.clone(), source: ValueSource::Parent }
    } else {
        Inherited { value: leaf.clone(), source: ValueSource::Leaf }
    }
}

/// Field-by-field view over a leaf/parent pair of the same shape.
#[derive(Debug, Clone, Copy)]
pub struct InheritanceResolver<'a, C> {
    owner: &'a str,
    leaf: &'a C,
    parent: &'a C,
}

impl<'a, C> InheritanceResolver<'a, C> {
    /// `owner` names the component in error messages.
    pub const fn new(owner: &'a str, leaf: &'a C, parent: &'a C) -> Self {
        Self { owner, leaf, parent }
    }

    pub fn field<T, F>(&self, select: F) -> T
    where
        T: PartialEq + Clone,
        F: Fn(&C) -> &T,
    {
        self.field_with_source(select).value
    }

    pub fn field_with_source<T, F>(&self, select: F) -> Inherited<T>
    where
        T: PartialEq + Clone,
        F: Fn(&C) -> &T,
    {
        inherit(select(self.leaf), select(self.parent))
    }

    /// Resolves a list that must not end up empty. A non-empty leaf list wins,
    /// otherwise the parent list is used.
    ///
    /// # Errors
    /// Returns [`KernelError::MissingRequiredConfiguration`] naming `field` and
    /// the owner when both lists are empty.
    pub fn required_list<T, F>(&self, field: &'static str, select: F) -> Result<Vec<T>, KernelError>
    where
        T: Clone,
        F: Fn(&C) -> &[T],
    {
        let (leaf, parent) = (select(self.leaf), select(self.parent));
        let chosen = if leaf.is_empty() { parent } else { leaf };

        if chosen.is_empty() {
            error!(owner = self.owner, field, "Required configuration is empty on leaf and parent");
            return Err(KernelError::MissingRequiredConfiguration {
                message: format!("`{field}` must not be empty").into(),
                context: Some(format!("Resolving {}", self.owner).into()),
            });
        }

        Ok(chosen.to_vec())
    }
}

/// Configurations that resolve against a parent of the same type.
pub trait Inherit: Sized {
    /// Builds the effective configuration.
    ///
    /// # Errors
    /// Returns [`KernelError::MissingRequiredConfiguration`] when a required
    /// field is absent on both sides.
    fn inherit_from(&self, parent: &Self, owner: &str) -> Result<Self, KernelError>;
}
