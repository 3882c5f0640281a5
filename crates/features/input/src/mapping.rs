use crate::controller::{DefaultBindings, controller_constraint};
use crate::error::InputError;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};
use xrkit_domain::handedness::Handedness;
use xrkit_domain::input::InteractionMapping;
use xrkit_kernel::types::{TypeGuid, TypeHandle, TypeReference, TypeRegistry};

/// Binds one controller variant (type plus handedness) to its interaction bindings.
///
/// A non-empty binding list is user-authored state: it is only regenerated when
/// [`ControllerMapping::ensure_default_bindings`] is asked to overwrite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControllerMapping {
    pub description: String,
    pub controller_type: TypeReference,
    #[serde(default)]
    pub handedness: Handedness,
    #[serde(default)]
    pub use_custom_interactions: bool,
    #[serde(default)]
    pub interactions: Vec<InteractionMapping>,
}

impl ControllerMapping {
    /// A mapping with no bindings yet.
    ///
    /// # Errors
    /// Returns [`InputError::Kernel`] when `controller` is abstract or does not
    /// implement [`crate::Controller`].
    pub fn new(
        description: impl Into<String>,
        controller: TypeHandle,
        handedness: Handedness,
    ) -> Result<Self, InputError> {
        let mut controller_type = TypeReference::default();
        controller_type.set_type_strict(controller, &controller_constraint())?;

        Ok(Self {
            description: description.into(),
            controller_type,
            handedness,
            use_custom_interactions: false,
            interactions: Vec::new(),
        })
    }

    /// Fills the binding list from the controller's declared defaults.
    ///
    /// Does nothing while bindings exist unless `overwrite` is set. The list is
    /// also left untouched when the controller type is unresolved, abstract,
    /// not a [`crate::Controller`], or registered without a [`DefaultBindings`]
    /// factory.
    ///
    /// Returns whether the list was regenerated.
    pub fn ensure_default_bindings(&mut self, registry: &TypeRegistry, overwrite: bool) -> bool {
        if !self.interactions.is_empty() && !overwrite {
            return false;
        }

        let Some(controller) = self.controller_type.bind(registry).cloned() else {
            warn!(
                mapping = %self.description,
                token = self.controller_type.token(),
                "Controller type is unresolved; keeping current bindings"
            );
            return false;
        };

        if let Some(reason) = controller_constraint().violation(&controller) {
            warn!(
                mapping = %self.description,
                controller = controller.name(),
                %reason,
                "Controller type violates its constraint; keeping current bindings"
            );
            return false;
        }

        let Some(defaults) = controller.attachment::<DefaultBindings>() else {
            warn!(
                mapping = %self.description,
                controller = controller.name(),
                "Controller type declares no default bindings"
            );
            return false;
        };

        self.interactions = defaults.for_handedness(self.handedness);
        debug!(
            mapping = %self.description,
            handedness = %self.handedness,
            count = self.interactions.len(),
            "Default bindings assigned"
        );
        true
    }

    /// Copies the logical action of each binding in `other` onto the binding at
    /// the same index. Physical fields are left alone.
    ///
    /// # Errors
    /// Returns [`InputError::ConfigurationLengthMismatch`] when the lengths
    /// differ; nothing is modified in that case.
    pub fn synchronize(&mut self, other: &[InteractionMapping]) -> Result<(), InputError> {
        if other.len() != self.interactions.len() {
            error!(
                mapping = %self.description,
                expected = self.interactions.len(),
                actual = other.len(),
                "Cannot synchronize bindings of different lengths"
            );
            return Err(InputError::ConfigurationLengthMismatch {
                message: format!(
                    "{} has {} bindings, source has {}",
                    self.description,
                    self.interactions.len(),
                    other.len()
                )
                .into(),
                context: None,
            });
        }

        for (mine, theirs) in self.interactions.iter_mut().zip(other) {
            mine.input_action.clone_from(&theirs.input_action);
        }
        Ok(())
    }
}

/// Ordered controller mappings of an input configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ControllerMappingProfile {
    pub mappings: Vec<ControllerMapping>,
}

impl ControllerMappingProfile {
    #[must_use]
    pub fn new(mappings: Vec<ControllerMapping>) -> Self {
        Self { mappings }
    }

    /// Runs [`ControllerMapping::ensure_default_bindings`] on every mapping and
    /// returns how many were regenerated.
    pub fn ensure_default_bindings(&mut self, registry: &TypeRegistry, overwrite: bool) -> usize {
        self.mappings
            .iter_mut()
            .map(|mapping| mapping.ensure_default_bindings(registry, overwrite))
            .filter(|regenerated| *regenerated)
            .count()
    }

    #[must_use]
    pub fn find(&self, controller: TypeGuid, handedness: Handedness) -> Option<&ControllerMapping> {
        self.mappings
            .iter()
            .find(|m| m.controller_type.to_guid() == Some(controller) && m.handedness == handedness)
    }

    pub fn find_mut(
        &mut self,
        controller: TypeGuid,
        handedness: Handedness,
    ) -> Option<&mut ControllerMapping> {
        self.mappings
            .iter_mut()
            .find(|m| m.controller_type.to_guid() == Some(controller) && m.handedness == handedness)
    }

    /// Copies logical actions from mapping `from` onto mapping `to`.
    ///
    /// # Errors
    /// * [`InputError::IndexOutOfBounds`] when either index is invalid.
    /// * [`InputError::ConfigurationLengthMismatch`] from [`ControllerMapping::synchronize`].
    pub fn synchronize_between(&mut self, from: usize, to: usize) -> Result<(), InputError> {
        let len = self.mappings.len();
        if from >= len || to >= len {
            return Err(InputError::IndexOutOfBounds {
                message: format!("mappings {from} -> {to} but the profile holds {len}").into(),
                context: None,
            });
        }
        if from == to {
            return Ok(());
        }

        let source = self.mappings[from].interactions.clone();
        self.mappings[to].synchronize(&source)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}
