//! Subcommands that forward options and arguments straight to git:
//! `branch`, `checkout`, `fetch`, `log`, `pull` and `reset`.

use anyhow::Result;
use serde_json::json;

use super::as_strs;
use crate::cli::PassthroughArgs;
use crate::context::RuntimeContext;
use crate::output::{output_json, output_text};

/// Subcommands whose output is returned as trimmed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Passthrough {
    Checkout,
    Fetch,
    Log,
    Pull,
    Reset,
}

/// Execute `gw branch`, printing one branch line per line.
pub fn run_branch(ctx: &RuntimeContext, args: &PassthroughArgs) -> Result<()> {
    let lines = ctx
        .repository()
        .branch(&as_strs(&args.options), &as_strs(&args.args))?;

    if ctx.json {
        output_json(&lines);
    } else {
        for line in &lines {
            println!("{line}");
        }
    }
    Ok(())
}

/// Execute one of the text-returning passthrough subcommands.
pub fn run(ctx: &RuntimeContext, which: Passthrough, args: &PassthroughArgs) -> Result<()> {
    let repo = ctx.repository();
    let options = as_strs(&args.options);
    let arguments = as_strs(&args.args);

    let out = match which {
        Passthrough::Checkout => repo.checkout(&options, &arguments)?,
        Passthrough::Fetch => repo.fetch(&options, &arguments)?,
        Passthrough::Log => repo.log(&options, &arguments)?,
        Passthrough::Pull => repo.pull(&options, &arguments)?,
        Passthrough::Reset => repo.reset(&options, &arguments)?,
    };

    if ctx.json {
        output_json(&json!({ "output": out }));
    } else {
        output_text(&out);
    }
    Ok(())
}
