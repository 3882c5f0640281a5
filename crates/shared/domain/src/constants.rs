//! Well-known names shared between the platform catalog, configuration and stored profiles.

/// Name of the universal descriptor that activates a capability everywhere.
pub const ALL_PLATFORMS: &str = "all";
/// Name of the authoring-tool pseudo-platform.
pub const AUTHORING: &str = "editor";

pub const WINDOWS: &str = "windows";
pub const LINUX: &str = "linux";
pub const MACOS: &str = "macos";
pub const UNIVERSAL_WINDOWS: &str = "universal-windows";
pub const ANDROID: &str = "android";
pub const IOS: &str = "ios";
pub const WEB: &str = "web";
pub const OCULUS: &str = "oculus";

/// Environment prefix for configuration overrides (`XRKIT__CONTEXT__RUNTIME=android`).
pub const ENV_PREFIX: &str = "XRKIT";
