//! `gw` -- command-line front end for the gitwrap library.
//!
//! Parses CLI arguments with clap, resolves the runtime context, and
//! dispatches to command handlers. Each handler maps onto one
//! `GitRepository` method.

mod cli;
mod commands;
mod context;
mod output;

use clap::{CommandFactory, Parser};

use cli::{Cli, Commands};
use commands::passthrough::Passthrough;
use context::RuntimeContext;

fn main() {
    let cli = Cli::parse();

    if cli.global.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("gw=debug,gitwrap=debug,gitwrap_config=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    // Completions do not need a repository or configuration.
    if let Some(Commands::Completion(args)) = &cli.command {
        commands::completion::run(args);
        return;
    }

    let result = RuntimeContext::from_global_args(&cli.global).and_then(|ctx| match cli.command {
        Some(Commands::Clone(args)) => commands::clone::run(&ctx, &args),
        Some(Commands::Branch(args)) => commands::passthrough::run_branch(&ctx, &args),
        Some(Commands::Checkout(args)) => commands::passthrough::run(&ctx, Passthrough::Checkout, &args),
        Some(Commands::Fetch(args)) => commands::passthrough::run(&ctx, Passthrough::Fetch, &args),
        Some(Commands::Log(args)) => commands::passthrough::run(&ctx, Passthrough::Log, &args),
        Some(Commands::Pull(args)) => commands::passthrough::run(&ctx, Passthrough::Pull, &args),
        Some(Commands::Reset(args)) => commands::passthrough::run(&ctx, Passthrough::Reset, &args),
        Some(Commands::CurrentBranch) => commands::status::run_current_branch(&ctx),
        Some(Commands::Status) => commands::status::run_status(&ctx),
        Some(Commands::HasChanges) => commands::status::run_has_changes(&ctx),
        Some(Commands::Tracking) => commands::tracking::run(&ctx),
        Some(Commands::Config(args)) => commands::config_cmd::run(&ctx, &args),
        Some(Commands::Completion(_)) => Ok(()),
        None => {
            // No subcommand -- print help
            Cli::command().print_help().ok();
            println!();
            Ok(())
        }
    });

    // Handle errors: print message and exit with code 1
    if let Err(e) = result {
        if cli.global.json {
            let err_json = serde_json::json!({
                "error": format!("{e:#}"),
            });
            if let Ok(s) = serde_json::to_string_pretty(&err_json) {
                eprintln!("{s}");
            }
        } else {
            eprintln!("Error: {e:#}");
        }
        std::process::exit(1);
    }
}
