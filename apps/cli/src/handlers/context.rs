use crate::models::args::ContextArgs;
use anyhow::{Context, Result};
use std::path::Path;
use xrkit::Toolkit;
use xrkit::domain::config::ToolkitConfig;
use xrkit::kernel::config::load_config_or_defaults;

/// Loads the toolkit config (file, then `XRKIT__*` environment) and applies
/// command line context overrides on top.
///
/// # Errors
/// Returns an error if an existing config file or an environment override is malformed.
pub fn load(path: Option<&Path>, overrides: &ContextArgs) -> Result<ToolkitConfig> {
    let mut config: ToolkitConfig =
        load_config_or_defaults(path).context("Configuration is malformed")?;

    let context = &mut config.context;
    if let Some(runtime) = &overrides.runtime {
        context.runtime.clone_from(runtime);
    }
    if overrides.authoring {
        context.authoring = true;
    }
    if overrides.build_target.is_some() {
        context.build_target.clone_from(&overrides.build_target);
    }
    context.detected.extend(overrides.detected.iter().cloned());

    Ok(config)
}

#[must_use]
pub fn toolkit(config: ToolkitConfig) -> Toolkit {
    Toolkit::from_config(config)
}

/// One-line summary of the evaluated context.
#[must_use]
pub fn describe(toolkit: &Toolkit) -> String {
    let context = toolkit.context();
    let detected = &toolkit.config().context.detected;
    format!(
        "runtime={} authoring={} build_target={} detected=[{}]",
        context.runtime(),
        context.is_authoring(),
        context.build_target().unwrap_or("-"),
        detected.join(", ")
    )
}
