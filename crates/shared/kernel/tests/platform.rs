use std::sync::Arc;
use xrkit_kernel::platform::{
    AllPlatforms, AuthoringPlatform, PlatformCatalog, PlatformContext, PlatformHandle,
    TargetPlatform, is_active, is_live,
};

fn catalog() -> PlatformCatalog {
    PlatformCatalog::with_defaults()
}

fn list(names: &[&str]) -> Vec<PlatformHandle> {
    catalog().resolve_names(names).unwrap()
}

#[test]
fn universal_descriptor_wins_everywhere() {
    let platforms = list(&["editor", "ios", "all"]);

    assert!(is_active(&platforms, &PlatformContext::new("windows")));
    assert!(is_active(&platforms, &PlatformContext::authoring("linux", "web")));
}

#[test]
fn empty_list_is_active() {
    assert!(is_active(&[], &PlatformContext::new("android")));
    assert!(is_active(&[], &PlatformContext::authoring("windows", "windows")));
}

#[test]
fn list_without_authoring_is_active() {
    // Runtime availability of targets is the orchestrator's concern, not the resolver's.
    let platforms = list(&["ios"]);
    assert!(is_active(&platforms, &PlatformContext::new("windows")));
}

#[test]
fn authoring_gate_requires_matching_build_target() {
    let platforms = list(&["editor", "android"]);

    assert!(!is_active(&platforms, &PlatformContext::new("android")));
    assert!(!is_active(&platforms, &PlatformContext::authoring("windows", "ios")));
    assert!(is_active(&platforms, &PlatformContext::authoring("windows", "android")));
}

#[test]
fn first_authoring_descriptor_decides() {
    #[derive(Debug)]
    struct StubbornAuthoring;
    impl xrkit_kernel::platform::Platform for StubbornAuthoring {
        fn name(&self) -> &str {
            "stubborn-editor"
        }
        fn kind(&self) -> xrkit_kernel::platform::PlatformKind {
            xrkit_kernel::platform::PlatformKind::Authoring
        }
        fn is_available(&self, _context: &PlatformContext) -> bool {
            false
        }
        fn is_build_target_available(&self, _context: &PlatformContext) -> bool {
            false
        }
    }

    let context = PlatformContext::authoring("windows", "windows");
    let editor: PlatformHandle = Arc::new(AuthoringPlatform);
    let stubborn: PlatformHandle = Arc::new(StubbornAuthoring);
    let windows: PlatformHandle = Arc::new(TargetPlatform::new("windows"));

    assert!(is_active(&[editor.clone(), stubborn.clone(), windows.clone()], &context));
    assert!(!is_active(&[stubborn, editor, windows], &context));
}

#[test]
fn device_platform_suppresses_the_platform_it_overrides() {
    let catalog = catalog();
    let plain = PlatformContext::new("android");
    let quest = PlatformContext::new("android").with_detected("oculus");

    let names = |ctx: &PlatformContext| -> Vec<String> {
        catalog.active_platforms(ctx).iter().map(|p| p.name().to_owned()).collect()
    };

    assert_eq!(names(&plain), ["android"]);
    assert_eq!(names(&quest), ["oculus"]);
}

#[test]
fn device_platform_may_be_live_in_authoring() {
    let catalog = catalog();
    let context = PlatformContext::authoring("windows", "android").with_detected("oculus");
    let names: Vec<_> =
        catalog.active_platforms(&context).iter().map(|p| p.name().to_owned()).collect();

    assert_eq!(names, ["editor", "oculus"]);
}

#[test]
fn universal_is_available_and_never_listed_as_active() {
    let context = PlatformContext::new("web");
    assert!(catalog().available(&context).iter().any(|p| p.name() == "all"));
    assert!(!catalog().active_platforms(&context).iter().any(|p| p.name() == "all"));
    assert!(xrkit_kernel::platform::Platform::is_available(&AllPlatforms, &context));
}

#[test]
fn live_lists_need_a_running_target() {
    let catalog = catalog();
    let windows = PlatformContext::new("windows");

    assert!(!catalog.is_live(&list(&["android"]), &windows));
    assert!(!catalog.is_live(&list(&["ios", "android"]), &windows));
    assert!(catalog.is_live(&list(&["android", "windows"]), &windows));
    assert!(catalog.is_live(&[], &windows));
    assert!(catalog.is_live(&list(&["all"]), &windows));
}

#[test]
fn live_check_keeps_the_authoring_gate() {
    let catalog = catalog();
    let platforms = list(&["editor", "android"]);

    assert!(!catalog.is_live(&platforms, &PlatformContext::new("android")));
    assert!(catalog.is_live(&platforms, &PlatformContext::authoring("windows", "android")));

    // Shipped targets do not run inside the authoring tool.
    let editing = PlatformContext::authoring("windows", "windows");
    assert!(!catalog.is_live(&list(&["windows"]), &editing));
}

#[test]
fn suppressed_target_is_not_live() {
    let catalog = catalog();
    let quest = PlatformContext::new("android").with_detected("oculus");
    let live = catalog.active_platforms(&quest);

    assert!(!is_live(&list(&["android"]), &quest, &live));
    assert!(is_live(&list(&["android", "oculus"]), &quest, &live));
}
