use anyhow::{Context, Result};
use xrkit::Toolkit;
use xrkit::kernel::platform::is_active;

/// Prints the platform catalog with availability in the current context.
///
/// # Errors
/// Never fails today; kept fallible like the other handlers.
pub fn list_platforms(toolkit: &Toolkit) -> Result<()> {
    let active: Vec<_> = toolkit.active_platforms().iter().map(|p| p.name().to_owned()).collect();

    println!("\nPlatforms ({}):\n", super::context::describe(toolkit));
    println!("{:<20} {:<12} {:<10} {:<8}", "Name", "Kind", "Available", "Active");
    println!("{:-<52}", "");

    for platform in toolkit.catalog().iter() {
        let name = platform.name();
        println!(
            "{:<20} {:<12} {:<10} {:<8}",
            name,
            format!("{:?}", platform.kind()),
            yes_no(platform.is_available(toolkit.context())),
            yes_no(active.iter().any(|a| a == name)),
        );
    }
    println!();

    Ok(())
}

/// Evaluates `names` as the platform list of a single capability entry.
///
/// # Errors
/// Returns an error if a name is not in the catalog.
pub fn activate(toolkit: &Toolkit, names: &[String]) -> Result<()> {
    let platforms = toolkit
        .catalog()
        .resolve_names(names)
        .context("Cannot evaluate platform list")?;

    let verdict = if is_active(&platforms, toolkit.context()) { "active" } else { "inactive" };
    println!("[{}] is {verdict} ({})", names.join(", "), super::context::describe(toolkit));

    Ok(())
}

const fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
