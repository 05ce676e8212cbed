//! `gw config` -- show or initialize configuration.

use anyhow::{Result, bail};
use gitwrap_config::config::{WrapperConfig, save_config};
use gitwrap_config::discovery::CONFIG_FILE_NAME;
use tracing::info;

use crate::cli::{ConfigArgs, ConfigCommands};
use crate::context::RuntimeContext;
use crate::output::output_json;

/// Execute the `gw config` command.
pub fn run(ctx: &RuntimeContext, args: &ConfigArgs) -> Result<()> {
    match &args.command {
        ConfigCommands::Show => show(ctx),
        ConfigCommands::Init { force } => init(ctx, *force),
    }
}

fn show(ctx: &RuntimeContext) -> Result<()> {
    if ctx.json {
        output_json(&ctx.config);
        return Ok(());
    }

    match &ctx.config_path {
        Some(path) => println!("# {}", path.display()),
        None => println!("# defaults (no {CONFIG_FILE_NAME} found)"),
    }
    print!("{}", serde_yaml::to_string(&ctx.config)?);
    Ok(())
}

fn init(ctx: &RuntimeContext, force: bool) -> Result<()> {
    let path = ctx.repo_dir.join(CONFIG_FILE_NAME);
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }

    save_config(&path, &WrapperConfig::default())?;
    info!(path = %path.display(), "wrote default configuration");
    println!("Wrote {}", path.display());
    Ok(())
}
