use proptest::prelude::*;
use xrkit_kernel::prelude::*;
use xrkit_services::*;

trait SpatialAwareness {}

struct MeshObserver;
impl Registered for MeshObserver {
    const NAME: &'static str = "MeshObserver";
    const GUID: Option<&'static str> = Some("a7f3c2d1-5b6e-4f80-9a1b-2c3d4e5f6071");
}

struct PlaneFinder;
impl Registered for PlaneFinder {
    const NAME: &'static str = "PlaneFinder";
}

fn registry() -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    let mesh = TypeInfo::builder::<MeshObserver>().implements::<dyn SpatialAwareness>();
    registry.register(mesh.build().unwrap()).unwrap();
    registry.register_type::<PlaneFinder>().unwrap();
    registry
}

fn named(name: &str) -> ServiceConfiguration {
    ServiceConfiguration::new(TypeReference::default(), name)
}

proptest! {
    #[test]
    fn append_keeps_existing_order_and_places_new_last(
        names in proptest::collection::vec("[a-z]{1,8}", 0..12),
        extra in "[A-Z]{1,8}",
    ) {
        let mut profile = ServiceProfile::<dyn SpatialAwareness>::new("spatial");
        profile.set_entries(names.iter().map(|n| named(n)));
        let before = profile.entries();

        profile.append(named(&extra));

        let after = profile.entries();
        prop_assert_eq!(after.len(), names.len() + 1);
        for (old, new) in before.iter().zip(after.iter()) {
            prop_assert!(std::sync::Arc::ptr_eq(old, new));
        }
        prop_assert_eq!(after[names.len()].name(), extra.as_str());
        prop_assert_eq!(profile.typed_configurations().len(), after.len());
    }
}

#[test]
fn snapshots_survive_later_appends() {
    let mut profile = ServiceProfile::<dyn SpatialAwareness>::new("spatial");
    profile.append(named("first"));
    let snapshot = profile.entries();

    profile.append(named("second"));
    assert_eq!(snapshot.len(), 1);
    assert_eq!(profile.len(), 2);
}

#[test]
fn startup_order_is_stable_by_priority() {
    let mut profile = ServiceProfile::<dyn SpatialAwareness>::new("spatial");
    profile.set_entries([
        named("late").with_priority(5),
        named("early-a").with_priority(1),
        named("early-b").with_priority(1),
        named("middle").with_priority(3),
    ]);

    let order: Vec<_> = profile.startup_order().iter().map(|e| e.name().to_owned()).collect();
    assert_eq!(order, ["early-a", "early-b", "middle", "late"]);

    let declared: Vec<_> = profile.entries().iter().map(|e| e.name().to_owned()).collect();
    assert_eq!(declared, ["late", "early-a", "early-b", "middle"]);
}

#[test]
fn active_configurations_follow_platform_lists() {
    let catalog = PlatformCatalog::with_defaults();
    let mut profile = ServiceProfile::<dyn SpatialAwareness>::new("spatial");
    profile.set_entries([
        named("everywhere").with_platforms(catalog.resolve_names(&["all"]).unwrap()),
        named("authoring-android")
            .with_platforms(catalog.resolve_names(&["editor", "android"]).unwrap()),
        named("unrestricted"),
    ]);

    let active = |ctx: &PlatformContext| -> Vec<String> {
        profile.active_configurations(ctx).iter().map(|e| e.name().to_owned()).collect()
    };

    assert_eq!(active(&PlatformContext::new("android")), ["everywhere", "unrestricted"]);
    assert_eq!(
        active(&PlatformContext::authoring("windows", "android")),
        ["everywhere", "authoring-android", "unrestricted"]
    );
}

#[test]
fn live_configurations_skip_targets_that_are_not_running() {
    let catalog = PlatformCatalog::with_defaults();
    let mut profile = ServiceProfile::<dyn SpatialAwareness>::new("spatial");
    profile.set_entries([
        named("android-only").with_platforms(catalog.resolve_names(&["android"]).unwrap()),
        named("desktop").with_platforms(catalog.resolve_names(&["windows", "linux"]).unwrap()),
        named("unrestricted"),
    ]);

    let live = |ctx: &PlatformContext| -> Vec<String> {
        profile
            .live_configurations(ctx, &catalog.active_platforms(ctx))
            .iter()
            .map(|e| e.name().to_owned())
            .collect()
    };

    assert_eq!(live(&PlatformContext::new("windows")), ["desktop", "unrestricted"]);
    assert_eq!(live(&PlatformContext::new("android")), ["android-only", "unrestricted"]);
    assert_eq!(profile.active_configurations(&PlatformContext::new("windows")).len(), 3);
}

#[test]
fn typed_view_validates_category() {
    let registry = registry();
    let mut profile = ServiceProfile::<dyn SpatialAwareness>::new("spatial");
    profile.append(ServiceConfiguration::new(
        TypeReference::from_type(registry.handle_of::<MeshObserver>().unwrap()),
        "Meshes",
    ));
    profile.append(ServiceConfiguration::new(
        TypeReference::from_type(registry.handle_of::<PlaneFinder>().unwrap()),
        "Planes",
    ));

    let typed = profile.typed_configurations();
    assert!(typed[0].is_valid(&registry));
    assert!(!typed[1].is_valid(&registry));
}

#[test]
fn records_round_trip_through_json() {
    let registry = registry();
    let catalog = PlatformCatalog::with_defaults();
    let mut profile = ServiceProfile::<dyn SpatialAwareness>::new("spatial");
    profile.append(
        ServiceConfiguration::new(
            TypeReference::from_type(registry.handle_of::<MeshObserver>().unwrap()),
            "Meshes",
        )
        .with_priority(1)
        .with_platforms(catalog.resolve_names(&["windows", "oculus"]).unwrap())
        .with_profile(ProfileRef::new("meshes-default")),
    );

    let json = serde_json::to_string(&profile.to_records()).unwrap();
    assert!(json.contains("a7f3c2d1-5b6e-4f80-9a1b-2c3d4e5f6071"));

    let records: Vec<ServiceConfigurationRecord> = serde_json::from_str(&json).unwrap();
    let restored = ServiceProfile::<dyn SpatialAwareness>::from_records(
        "spatial", records, &catalog, &registry,
    )
    .unwrap();

    let entries = restored.entries();
    let entry = &entries[0];
    assert!(entry.instance_type().to_type().is_some_and(|ty| ty.is::<MeshObserver>()));
    assert_eq!(entry.platforms().len(), 2);
    assert_eq!(restored.to_records(), profile.to_records());
}
