//! Interaction binding model.
//!
//! A binding ([`InteractionMapping`]) pairs *physical* wiring (key code, axis
//! codes, inversion) with one *logical* [`InputAction`]. Controller mappings keep
//! the two halves independent so variants of the same device can share logical
//! wiring while keeping their own physical layout.

use serde::{Deserialize, Serialize};

/// Shape of the data an input element produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisType {
    #[default]
    None,
    Raw,
    Digital,
    SingleAxis,
    DualAxis,
    ThreeDofPosition,
    ThreeDofRotation,
    SixDof,
}

/// Physical element class on a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceInputType {
    #[default]
    None,
    SpatialPointer,
    SpatialGrip,
    Select,
    ButtonPress,
    ButtonTouch,
    Trigger,
    TriggerPress,
    TriggerTouch,
    Grip,
    GripPress,
    Thumbstick,
    ThumbstickPress,
    Touchpad,
    TouchpadPress,
    Menu,
    Start,
    Hand,
}

/// Logical action an application reacts to, independent of the device.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct InputAction {
    pub id: u32,
    pub description: String,
    pub axis_constraint: AxisType,
}

impl InputAction {
    pub fn new(id: u32, description: impl Into<String>, axis_constraint: AxisType) -> Self {
        Self { id, description: description.into(), axis_constraint }
    }

    /// The unassigned action.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn is_none(&self) -> bool {
        self.id == 0
    }
}

/// One binding between a physical input element and a logical action.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionMapping {
    pub id: u32,
    pub description: String,
    pub axis_type: AxisType,
    pub input_type: DeviceInputType,
    /// The logical half of the binding.
    pub input_action: InputAction,
    pub key_code: Option<String>,
    pub axis_code_x: Option<String>,
    pub axis_code_y: Option<String>,
    pub invert_x: bool,
    pub invert_y: bool,
}

impl InteractionMapping {
    pub fn new(
        id: u32,
        description: impl Into<String>,
        axis_type: AxisType,
        input_type: DeviceInputType,
    ) -> Self {
        Self { id, description: description.into(), axis_type, input_type, ..Self::default() }
    }

    #[must_use]
    pub fn with_key_code(mut self, key_code: impl Into<String>) -> Self {
        self.key_code = Some(key_code.into());
        self
    }

    #[must_use]
    pub fn with_axes(mut self, x: impl Into<String>, y: Option<&str>) -> Self {
        self.axis_code_x = Some(x.into());
        self.axis_code_y = y.map(str::to_owned);
        self
    }

    #[must_use]
    pub const fn with_inversion(mut self, invert_x: bool, invert_y: bool) -> Self {
        self.invert_x = invert_x;
        self.invert_y = invert_y;
        self
    }

    #[must_use]
    pub fn with_action(mut self, action: InputAction) -> Self {
        self.input_action = action;
        self
    }
}
