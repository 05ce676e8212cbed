//! `gw current-branch`, `gw status` and `gw has-changes`.

use anyhow::Result;
use serde_json::json;

use crate::context::RuntimeContext;
use crate::output::output_json;

/// Execute `gw current-branch`.
pub fn run_current_branch(ctx: &RuntimeContext) -> Result<()> {
    let branch = ctx.repository().current_branch()?;
    if ctx.json {
        output_json(&json!({ "branch": branch }));
    } else {
        println!("{branch}");
    }
    Ok(())
}

/// Execute `gw status`, printing git's short status exactly as produced.
pub fn run_status(ctx: &RuntimeContext) -> Result<()> {
    let status = ctx.repository().status()?;
    if ctx.json {
        output_json(&json!({ "status": status }));
    } else {
        print!("{status}");
    }
    Ok(())
}

/// Execute `gw has-changes`.
pub fn run_has_changes(ctx: &RuntimeContext) -> Result<()> {
    let changed = ctx.repository().has_changes()?;
    if ctx.json {
        output_json(&json!({ "hasChanges": changed }));
    } else {
        println!("{changed}");
    }
    Ok(())
}
