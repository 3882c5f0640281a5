use xrkit_domain::handedness::Handedness;
use xrkit_domain::input::InteractionMapping;
use xrkit_kernel::KernelError;
use xrkit_kernel::types::{Registered, TypeConstraint, TypeHandle, TypeInfo, TypeRegistry};

/// A controller-like capability.
///
/// Implementations may declare distinct default binding sets for the left hand,
/// the right hand, and everything else. The associated functions need no
/// instance, so defaults are available before any device is connected.
pub trait Controller: 'static {
    /// Bindings used when the handedness is neither left nor right.
    fn default_interactions() -> Vec<InteractionMapping>
    where
        Self: Sized,
    {
        Vec::new()
    }

    fn default_left_interactions() -> Vec<InteractionMapping>
    where
        Self: Sized,
    {
        Self::default_interactions()
    }

    fn default_right_interactions() -> Vec<InteractionMapping>
    where
        Self: Sized,
    {
        Self::default_interactions()
    }

    /// Default bindings for one variant of the controller.
    fn default_bindings(handedness: Handedness) -> Vec<InteractionMapping>
    where
        Self: Sized,
    {
        if handedness == Handedness::LEFT {
            Self::default_left_interactions()
        } else if handedness == Handedness::RIGHT {
            Self::default_right_interactions()
        } else {
            Self::default_interactions()
        }
    }
}

/// Default-bindings factory attached to a registered controller type.
#[derive(Debug, Clone, Copy)]
pub struct DefaultBindings(fn(Handedness) -> Vec<InteractionMapping>);

impl DefaultBindings {
    #[must_use]
    pub fn of<T: Controller>() -> Self {
        Self(T::default_bindings)
    }

    #[must_use]
    pub fn for_handedness(&self, handedness: Handedness) -> Vec<InteractionMapping> {
        (self.0)(handedness)
    }
}

/// Constraint on the type a controller mapping points at.
#[must_use]
pub fn controller_constraint() -> TypeConstraint {
    TypeConstraint::implementing::<dyn Controller>()
}

/// Registers `T` as a controller implementation together with its defaults factory.
///
/// # Errors
/// See [`TypeRegistry::register`].
pub fn register_controller<T>(registry: &mut TypeRegistry) -> Result<TypeHandle, KernelError>
where
    T: Controller + Registered,
{
    registry.register(
        TypeInfo::builder::<T>()
            .implements::<dyn Controller>()
            .attach(DefaultBindings::of::<T>())
            .build()?,
    )
}
