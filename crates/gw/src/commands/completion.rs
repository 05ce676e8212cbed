//! `gw completion` -- generate shell completions.

use clap::CommandFactory;
use clap_complete::generate;

use crate::cli::{Cli, CompletionArgs};

/// Execute the `gw completion` command.
pub fn run(args: &CompletionArgs) {
    let mut cmd = Cli::command();
    generate(args.shell, &mut cmd, "gw", &mut std::io::stdout());
}
