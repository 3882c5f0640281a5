use xrkit_input::*;
use xrkit_kernel::types::{Registered, TypeInfo, TypeReference, TypeRegistry};

struct TouchController;

impl Registered for TouchController {
    const NAME: &'static str = "TouchController";
    const GUID: Option<&'static str> = Some("1f0e2d3c-4b5a-4968-8776-a5b4c3d2e1f0");
}

impl Controller for TouchController {
    fn default_left_interactions() -> Vec<InteractionMapping> {
        vec![
            InteractionMapping::new(0, "Trigger", AxisType::SingleAxis, DeviceInputType::Trigger)
                .with_axes("AXIS_9", None),
            InteractionMapping::new(1, "X Press", AxisType::Digital, DeviceInputType::ButtonPress)
                .with_key_code("JoystickButton2"),
            InteractionMapping::new(2, "Stick", AxisType::DualAxis, DeviceInputType::Thumbstick)
                .with_axes("AXIS_1", Some("AXIS_2"))
                .with_inversion(false, true),
        ]
    }

    fn default_right_interactions() -> Vec<InteractionMapping> {
        vec![
            InteractionMapping::new(0, "Trigger", AxisType::SingleAxis, DeviceInputType::Trigger)
                .with_axes("AXIS_10", None),
            InteractionMapping::new(1, "A Press", AxisType::Digital, DeviceInputType::ButtonPress)
                .with_key_code("JoystickButton0"),
            InteractionMapping::new(2, "Stick", AxisType::DualAxis, DeviceInputType::Thumbstick)
                .with_axes("AXIS_4", Some("AXIS_5"))
                .with_inversion(false, true),
        ]
    }
}

struct Gamepad;

impl Registered for Gamepad {
    const NAME: &'static str = "Gamepad";
}

impl Controller for Gamepad {
    fn default_interactions() -> Vec<InteractionMapping> {
        (0..4)
            .map(|id| {
                let press = DeviceInputType::ButtonPress;
                InteractionMapping::new(id, format!("Button {id}"), AxisType::Digital, press)
            })
            .collect()
    }
}

struct BaseController;

impl Registered for BaseController {
    const NAME: &'static str = "BaseController";
    const ABSTRACT: bool = true;
}

impl Controller for BaseController {
    fn default_interactions() -> Vec<InteractionMapping> {
        vec![InteractionMapping::new(0, "Select", AxisType::Digital, DeviceInputType::Select)]
    }
}

fn registry() -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    register_controller::<TouchController>(&mut registry).unwrap();
    register_controller::<Gamepad>(&mut registry).unwrap();
    register_controller::<BaseController>(&mut registry).unwrap();
    registry
}

fn mapping(registry: &TypeRegistry, handedness: Handedness) -> ControllerMapping {
    let touch = registry.handle_of::<TouchController>().unwrap();
    ControllerMapping::new(format!("Touch {handedness}"), touch, handedness).unwrap()
}

fn select() -> InputAction {
    InputAction::new(1, "Select", AxisType::Digital)
}

#[test]
fn defaults_follow_handedness() {
    let registry = registry();
    let mut left = mapping(&registry, Handedness::LEFT);
    let mut right = mapping(&registry, Handedness::RIGHT);

    assert!(left.ensure_default_bindings(&registry, false));
    assert!(right.ensure_default_bindings(&registry, false));
    assert_eq!(left.interactions[1].key_code.as_deref(), Some("JoystickButton2"));
    assert_eq!(right.interactions[1].key_code.as_deref(), Some("JoystickButton0"));

    let gamepad = registry.handle_of::<Gamepad>().unwrap();
    let mut pad = ControllerMapping::new("Gamepad", gamepad, Handedness::NONE).unwrap();
    assert!(pad.ensure_default_bindings(&registry, false));
    assert_eq!(pad.interactions.len(), 4);
}

#[test]
fn authored_bindings_are_not_regenerated_without_overwrite() {
    let registry = registry();
    let mut left = mapping(&registry, Handedness::LEFT);
    left.ensure_default_bindings(&registry, false);
    left.interactions[0].axis_code_x = Some("CUSTOM".to_owned());

    assert!(!left.ensure_default_bindings(&registry, false));
    assert_eq!(left.interactions[0].axis_code_x.as_deref(), Some("CUSTOM"));

    assert!(left.ensure_default_bindings(&registry, true));
    assert_eq!(left.interactions[0].axis_code_x.as_deref(), Some("AXIS_9"));
}

#[test]
fn unresolved_controller_keeps_bindings() {
    let mut stored = ControllerMapping {
        description: "Unknown vendor".to_owned(),
        controller_type: TypeReference::from_token("99999999-8888-4777-a666-555555555555"),
        handedness: Handedness::LEFT,
        use_custom_interactions: false,
        interactions: Vec::new(),
    };

    assert!(!stored.ensure_default_bindings(&registry(), true));
    assert!(stored.interactions.is_empty());
}

#[test]
fn abstract_or_unrelated_types_are_refused() {
    struct Headset;
    impl Registered for Headset {
        const NAME: &'static str = "Headset";
    }

    let mut registry = registry();
    let headset = registry.register(TypeInfo::of::<Headset>().unwrap()).unwrap();
    let base = registry.handle_of::<BaseController>().unwrap();

    assert!(ControllerMapping::new("base", base, Handedness::NONE).is_err());
    assert!(ControllerMapping::new("headset", headset, Handedness::NONE).is_err());
}

#[test]
fn stored_mapping_to_abstract_controller_gets_no_defaults() {
    let registry = registry();
    let base = registry.handle_of::<BaseController>().unwrap();

    let mut stored: ControllerMapping = serde_json::from_value(serde_json::json!({
        "description": "Base",
        "controller_type": base.guid().to_string(),
        "handedness": 0
    }))
    .unwrap();

    assert!(!stored.ensure_default_bindings(&registry, false));
    assert!(!stored.ensure_default_bindings(&registry, true));
    assert!(stored.interactions.is_empty());
    assert!(stored.controller_type.is_bound());
}

#[test]
fn synchronize_length_mismatch_changes_nothing() {
    let registry = registry();
    let mut left = mapping(&registry, Handedness::LEFT);
    left.ensure_default_bindings(&registry, false);
    let before = left.clone();

    let mut longer = left.interactions.clone();
    longer.push(InteractionMapping::new(3, "Menu", AxisType::Digital, DeviceInputType::Menu));
    longer[0].input_action = select();
    let longer_before = longer.clone();

    let err = left.synchronize(&longer).unwrap_err();
    assert!(matches!(err, InputError::ConfigurationLengthMismatch { .. }));
    assert_eq!(left, before);
    assert_eq!(longer, longer_before);
}

#[test]
fn synchronize_copies_only_logical_actions() {
    let registry = registry();
    let mut profile = ControllerMappingProfile::new(vec![
        mapping(&registry, Handedness::LEFT),
        mapping(&registry, Handedness::RIGHT),
    ]);
    assert_eq!(profile.ensure_default_bindings(&registry, false), 2);

    profile.mappings[0].interactions[0].input_action = select();
    profile.synchronize_between(0, 1).unwrap();

    let right = &profile.mappings[1].interactions;
    assert_eq!(right[0].input_action, select());
    assert_eq!(right[0].axis_code_x.as_deref(), Some("AXIS_10"));
    assert_eq!(right[1].key_code.as_deref(), Some("JoystickButton0"));
    assert_eq!(right[2].axis_code_y.as_deref(), Some("AXIS_5"));
    assert!(right[1].input_action.is_none());

    assert!(matches!(
        profile.synchronize_between(0, 7),
        Err(InputError::IndexOutOfBounds { .. })
    ));
}

#[test]
fn find_matches_type_and_handedness() {
    let registry = registry();
    let profile = ControllerMappingProfile::new(vec![
        mapping(&registry, Handedness::LEFT),
        mapping(&registry, Handedness::RIGHT),
    ]);
    let touch = registry.handle_of::<TouchController>().unwrap().guid();

    let right = profile.find(touch, Handedness::RIGHT).unwrap();
    assert_eq!(right.handedness, Handedness::RIGHT);
    assert!(profile.find(touch, Handedness::OTHER).is_none());
}

#[test]
fn mapping_serializes_type_as_token() {
    let registry = registry();
    let mut left = mapping(&registry, Handedness::LEFT);
    left.ensure_default_bindings(&registry, false);

    let json = serde_json::to_value(&left).unwrap();
    assert_eq!(json["controller_type"], "1f0e2d3c-4b5a-4968-8776-a5b4c3d2e1f0");

    let mut restored: ControllerMapping = serde_json::from_value(json).unwrap();
    assert_eq!(restored.interactions, left.interactions);
    assert!(!restored.ensure_default_bindings(&registry, false));
}
