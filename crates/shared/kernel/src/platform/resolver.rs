use super::context::PlatformContext;
use super::descriptor::{PlatformHandle, PlatformKind};
use tracing::debug;

/// Folds the platform list attached to a capability into one verdict.
///
/// * A universal descriptor anywhere in the list makes it active.
/// * Without an authoring descriptor the list is active; this includes the empty list.
/// * With one, the list is active only while the authoring tool runs and some
///   other descriptor accepts the selected build target.
///
/// When a list carries several authoring descriptors the first one decides.
#[must_use]
pub fn is_active(platforms: &[PlatformHandle], context: &PlatformContext) -> bool {
    if platforms.iter().any(|p| p.kind() == PlatformKind::Universal) {
        return true;
    }

    let mut authoring: Option<bool> = None;
    let mut any_build_target = false;

    for platform in platforms {
        match platform.kind() {
            PlatformKind::Authoring => match authoring {
                None => authoring = Some(platform.is_available(context)),
                Some(_) => {
                    debug!(name = platform.name(), "Ignoring repeated authoring platform");
                },
            },
            PlatformKind::Target | PlatformKind::Universal => {
                any_build_target |= platform.is_build_target_available(context);
            },
        }
    }

    authoring.is_none_or(|available| available && any_build_target)
}

/// [`is_active`] plus runtime availability.
///
/// A list that passes the authoring gate must also share at least one
/// descriptor with `live`, normally [`super::PlatformCatalog::active_platforms`]
/// for the same context. Lists that are empty or carry the universal
/// descriptor need no shared descriptor.
#[must_use]
pub fn is_live(
    platforms: &[PlatformHandle],
    context: &PlatformContext,
    live: &[PlatformHandle],
) -> bool {
    if !is_active(platforms, context) {
        return false;
    }

    platforms.is_empty()
        || platforms.iter().any(|p| p.kind() == PlatformKind::Universal)
        || platforms.iter().any(|p| live.iter().any(|l| l.name() == p.name()))
}
