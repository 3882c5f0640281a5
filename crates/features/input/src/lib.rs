//! # Input capabilities
//!
//! Controller-like capabilities declare their default interaction bindings
//! through the [`Controller`] trait. Registering a controller with
//! [`register_controller`] attaches a [`DefaultBindings`] factory to its type, so
//! a [`ControllerMapping`] loaded from storage can regenerate its bindings
//! without constructing a live controller.
//!
//! [`HandTrackingSettings`] resolve per field against the global input settings.

mod controller;
mod error;
mod hand_tracking;
mod mapping;

pub use crate::controller::{
    Controller, DefaultBindings, controller_constraint, register_controller,
};
pub use crate::error::{InputError, InputErrorExt};
pub use crate::hand_tracking::{HandTrackingSettings, TrackedHandJoint};
pub use crate::mapping::{ControllerMapping, ControllerMappingProfile};
pub use xrkit_domain::handedness::Handedness;
pub use xrkit_domain::input::{AxisType, DeviceInputType, InputAction, InteractionMapping};
