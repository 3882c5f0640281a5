#![warn(rust_2018_idioms, unused_lifetimes)]
#![allow(clippy::print_stderr, clippy::print_stdout)]

pub mod handlers;
pub mod models;

use crate::handlers::{context, platforms, profile};
use crate::models::args::{AppCommands, Cli};

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use xrkit_logger::{Logger, parse_level};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = context::load(cli.config.as_deref(), &cli.context)?;
    let level = parse_level(cli.log_level.as_deref().unwrap_or(&config.log.level))?;

    let builder = Logger::builder().name(env!("CARGO_PKG_NAME")).console(true).level(level);
    let builder = match &config.log.filter {
        Some(filter) => builder.env_filter(filter),
        None => builder,
    };
    let _logger = match &config.log.path {
        Some(path) => builder.path(path).init()?,
        None => builder.init()?,
    };

    let profile_path = config.profile.path.clone();
    let toolkit = context::toolkit(config);
    debug!(command = ?cli.command, "Running command");

    match cli.command {
        AppCommands::Platforms {} => platforms::list_platforms(&toolkit)?,
        AppCommands::Activate { platforms: names } => platforms::activate(&toolkit, &names)?,
        AppCommands::Inspect { profile: path } => {
            profile::inspect(path.as_deref().unwrap_or(profile_path.as_path()), &toolkit)?;
        },
        AppCommands::Sync { from, to, profile: path } => {
            profile::sync(path.as_deref().unwrap_or(profile_path.as_path()), from, to, &toolkit)?;
        },
    }

    Ok(())
}
