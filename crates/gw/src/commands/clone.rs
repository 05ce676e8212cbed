//! `gw clone` -- clone a repository into a new directory.

use anyhow::Result;
use serde_json::json;

use super::as_strs;
use crate::cli::CloneArgs;
use crate::context::RuntimeContext;
use crate::output::{output_json, output_text};

/// Execute the `gw clone` command.
///
/// The target directory is taken as given (relative to the current
/// directory), not relative to `--repo`.
pub fn run(ctx: &RuntimeContext, args: &CloneArgs) -> Result<()> {
    let repo = ctx.repository_at(&args.directory);
    let out = repo.create(
        &args.url,
        &as_strs(&args.passthrough.options),
        &as_strs(&args.passthrough.args),
    )?;

    if ctx.json {
        output_json(&json!({
            "directory": repo.directory().display().to_string(),
            "output": out,
        }));
    } else {
        output_text(&out);
    }
    Ok(())
}
