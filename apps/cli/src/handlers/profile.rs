use anyhow::{Context, Result};
use std::path::Path;
use xrkit::Toolkit;
use xrkit::persistence::Profile;
use xrkit::store::JsonFileStore;

/// Category used when a profile is read without any service types registered.
trait AnyCapability {}

type StoredProfile = Profile<dyn AnyCapability>;

fn open(path: &Path, toolkit: &Toolkit) -> Result<(JsonFileStore, StoredProfile)> {
    let name = path.file_stem().and_then(|s| s.to_str()).unwrap_or("profile").to_owned();
    let store = JsonFileStore::new(path);
    let profile = StoredProfile::load(name, &store, toolkit)
        .with_context(|| format!("Failed to load profile {}", path.display()))?;
    Ok((store, profile))
}

/// Prints services in startup order and the controller mappings of a profile.
///
/// A service counts as active when it would be instantiated here: it passes the
/// authoring gate and, if it names only targets, one of them is running.
///
/// # Errors
/// Returns an error if the document cannot be read or names an unknown platform.
pub fn inspect(path: &Path, toolkit: &Toolkit) -> Result<()> {
    let (_, profile) = open(path, toolkit)?;
    let context = toolkit.context();
    let live = toolkit.active_platforms();

    let described = super::context::describe(toolkit);
    println!("\nServices of '{}' ({described}):\n", profile.services.name());
    println!(
        "{:<9} {:<24} {:<7} {:<9} {:<24} {}",
        "Priority", "Name", "Active", "Resolved", "Type", "Platforms"
    );
    println!("{:-<96}", "");

    for entry in profile.services.startup_order() {
        let platforms: Vec<_> = entry.platforms().iter().map(|p| p.name()).collect();
        println!(
            "{:<9} {:<24} {:<7} {:<9} {:<24} {}",
            entry.priority(),
            entry.name(),
            yes_no(entry.is_live(context, &live)),
            yes_no(entry.instance_type().is_bound()),
            entry.instance_type().to_string(),
            if platforms.is_empty() { "-".to_owned() } else { platforms.join(", ") },
        );
    }

    if profile.controllers.is_empty() {
        println!("\nNo controller mappings.\n");
        return Ok(());
    }

    println!("\nControllers:\n");
    println!(
        "{:<6} {:<28} {:<11} {:<9} {}",
        "Index", "Description", "Handedness", "Bindings", "Type"
    );
    println!("{:-<80}", "");
    for (index, mapping) in profile.controllers.mappings.iter().enumerate() {
        println!(
            "{:<6} {:<28} {:<11} {:<9} {}",
            index,
            mapping.description,
            mapping.handedness.as_str(),
            mapping.interactions.len(),
            mapping.controller_type,
        );
    }
    println!();

    Ok(())
}

/// Copies input actions between two controller mappings and saves the profile.
///
/// # Errors
/// Returns an error if loading or saving fails, an index is out of range, or
/// the binding lists differ in length.
pub fn sync(path: &Path, from: usize, to: usize, toolkit: &Toolkit) -> Result<()> {
    let (store, mut profile) = open(path, toolkit)?;

    profile
        .controllers
        .synchronize_between(from, to)
        .with_context(|| format!("Cannot synchronize mapping #{from} into #{to}"))?;
    profile.save(&store).context("Failed to save profile")?;

    println!("✅ Copied input actions from mapping #{from} to #{to} in {}", path.display());
    Ok(())
}

const fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
