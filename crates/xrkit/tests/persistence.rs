use xrkit::domain::config::{PlatformDefinition, ToolkitConfig};
use xrkit::input::{AxisType, DeviceInputType, InteractionMapping, register_controller};
use xrkit::prelude::*;

trait Spatial {}

struct MeshObserver;
impl Registered for MeshObserver {
    const NAME: &'static str = "MeshObserver";
    const GUID: Option<&'static str> = Some("5a6b7c8d-9e0f-4a1b-8c2d-3e4f5a6b7c8d");
}

struct TouchController;
impl Registered for TouchController {
    const NAME: &'static str = "TouchController";
}

impl Controller for TouchController {
    fn default_left_interactions() -> Vec<InteractionMapping> {
        vec![
            InteractionMapping::new(0, "Trigger", AxisType::SingleAxis, DeviceInputType::Trigger),
            InteractionMapping::new(1, "X Press", AxisType::Digital, DeviceInputType::ButtonPress),
        ]
    }
}

fn toolkit() -> Toolkit {
    let mut config = ToolkitConfig::default();
    config.context.runtime = "lumin".to_owned();
    config.platforms.push(PlatformDefinition {
        name: "magic-leap".to_owned(),
        runtimes: vec!["lumin".to_owned()],
        ..Default::default()
    });

    let mut toolkit = Toolkit::from_config(config);
    toolkit
        .registry_mut()
        .register(TypeInfo::builder::<MeshObserver>().implements::<dyn Spatial>().build().unwrap())
        .unwrap();
    register_controller::<TouchController>(toolkit.registry_mut()).unwrap();
    toolkit
}

fn sample(toolkit: &Toolkit) -> Profile<dyn Spatial> {
    let mesh = toolkit.registry().handle_of::<MeshObserver>().unwrap();
    let touch = toolkit.registry().handle_of::<TouchController>().unwrap();

    let mut profile = Profile::new("spatial");
    profile.services.append(
        ServiceConfiguration::new(TypeReference::from_type(mesh), "mesh")
            .with_priority(3)
            .with_platforms(toolkit.catalog().resolve_names(&["magic-leap"]).unwrap())
            .with_profile(ProfileRef::new("mesh-defaults")),
    );
    profile
        .controllers
        .mappings
        .push(ControllerMapping::new("Touch left", touch, Handedness::LEFT).unwrap());
    profile
}

#[test]
fn configured_platforms_join_the_catalog() {
    let toolkit = toolkit();
    let active: Vec<_> = toolkit.active_platforms().iter().map(|p| p.name().to_owned()).collect();
    assert_eq!(active, ["magic-leap"]);
}

#[test]
fn file_round_trip_restores_services_and_fills_bindings() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("profiles/spatial.json"));
    let toolkit = toolkit();

    sample(&toolkit).save(&store).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
    let kinds: Vec<_> = raw["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["kind"].as_str().unwrap().to_owned())
        .collect();
    assert_eq!(kinds, ["service", "controller_mapping"]);
    assert_eq!(raw["entries"][0]["instance_type"], "5a6b7c8d-9e0f-4a1b-8c2d-3e4f5a6b7c8d");
    assert_eq!(raw["entries"][0]["platforms"][0], "magic-leap");

    let loaded = Profile::<dyn Spatial>::load("spatial", &store, &toolkit).unwrap();
    let entry = loaded.services.get(0).unwrap();
    assert_eq!(entry.name(), "mesh");
    assert_eq!(entry.priority(), 3);
    assert_eq!(entry.profile().map(ProfileRef::as_str), Some("mesh-defaults"));
    assert!(entry.instance_type().is_bound());
    assert!(entry.is_active(toolkit.context()));

    let mapping = &loaded.controllers.mappings[0];
    assert_eq!(mapping.handedness, Handedness::LEFT);
    assert_eq!(mapping.interactions.len(), 2);
    assert_eq!(mapping.interactions[1].description, "X Press");
}

#[test]
fn memory_store_keeps_document_order() {
    let toolkit = toolkit();
    let store = MemoryStore::new(Vec::new());
    let profile = sample(&toolkit);
    profile.save(&store).unwrap();

    let loaded = Profile::<dyn Spatial>::load("spatial", &store, &toolkit).unwrap();
    assert_eq!(loaded.to_entries().len(), 2);
    assert!(matches!(loaded.to_entries()[0], ProfileEntry::Service(_)));
    assert_eq!(loaded.services.len(), 1);
    assert_eq!(loaded.controllers.len(), 1);
}

#[test]
fn unknown_platform_fails_loading() {
    let toolkit = toolkit();
    let entry: ProfileEntry = serde_json::from_value(serde_json::json!({
        "kind": "service",
        "instance_type": "5a6b7c8d-9e0f-4a1b-8c2d-3e4f5a6b7c8d",
        "name": "mesh",
        "platforms": ["dreamcast"]
    }))
    .unwrap();
    let store = MemoryStore::new(vec![entry]);

    let err = Profile::<dyn Spatial>::load("spatial", &store, &toolkit).unwrap_err();
    assert!(matches!(err, XrkitError::Services { .. }));
    assert!(err.to_string().contains("dreamcast"));
}

#[test]
fn missing_file_is_a_store_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("absent.json"));

    let err = Profile::<dyn Spatial>::load("spatial", &store, &toolkit()).unwrap_err();
    assert!(matches!(err, XrkitError::Store { .. }));
}
