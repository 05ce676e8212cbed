//! `gw tracking` -- upstream branch and ahead/behind counts.

use anyhow::Result;

use crate::context::RuntimeContext;
use crate::output::{format_tracking, output_json, supports_color};

/// Execute the `gw tracking` command.
pub fn run(ctx: &RuntimeContext) -> Result<()> {
    let info = ctx.repository().tracking_information()?;
    if ctx.json {
        output_json(&info);
    } else {
        println!("{}", format_tracking(&info, supports_color()));
    }
    Ok(())
}
