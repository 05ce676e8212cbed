//! Clap CLI definitions for the `gw` command.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// gw -- thin wrapper around git.
///
/// Runs one git subcommand per invocation and post-processes its output.
#[derive(Parser, Debug)]
#[command(
    name = "gw",
    about = "Thin wrapper around git",
    long_about = "Runs one git subcommand per invocation against a working directory and post-processes its output (trimmed text, branch lists, tracking status).",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Global flags available to all subcommands.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Working directory of the repository.
    #[arg(short = 'C', long, global = true, default_value = ".")]
    pub repo: PathBuf,

    /// Configuration file (default: the nearest .gitwrap.yaml).
    #[arg(long, global = true, env = "GITWRAP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output in JSON format.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose/debug output.
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,
}

/// All available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Clone a repository into a new directory.
    Clone(CloneArgs),

    /// List, create or delete branches.
    Branch(PassthroughArgs),

    /// Switch branches or restore files.
    Checkout(PassthroughArgs),

    /// Download objects and refs from a remote.
    Fetch(PassthroughArgs),

    /// Show commit logs.
    Log(PassthroughArgs),

    /// Fetch from and integrate with a remote.
    Pull(PassthroughArgs),

    /// Reset HEAD to a given state.
    Reset(PassthroughArgs),

    /// Print the checked-out branch (HEAD when detached).
    CurrentBranch,

    /// Print short-format status.
    Status,

    /// Print whether the working tree has changes.
    HasChanges,

    /// Show the upstream branch and ahead/behind counts.
    Tracking,

    /// Show or initialize configuration.
    Config(ConfigArgs),

    /// Generate shell completions.
    Completion(CompletionArgs),
}

/// Options and positional arguments forwarded to git.
#[derive(Args, Debug, Clone, Default)]
pub struct PassthroughArgs {
    /// Option name without leading dashes, repeatable (e.g. `-o hard`, `-o depth=1`).
    #[arg(short = 'o', long = "option", value_name = "NAME")]
    pub options: Vec<String>,

    /// Positional arguments passed to git verbatim.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Arguments for `gw clone`.
#[derive(Args, Debug)]
pub struct CloneArgs {
    /// URL of the repository to clone.
    pub url: String,

    /// Directory to clone into; must not exist yet.
    pub directory: PathBuf,

    #[command(flatten)]
    pub passthrough: PassthroughArgs,
}

/// Arguments for `gw config`.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration.
    Show,

    /// Write a default .gitwrap.yaml into the repository directory.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

/// Arguments for `gw completion`.
#[derive(Args, Debug)]
pub struct CompletionArgs {
    /// Shell to generate completions for.
    #[arg(value_enum)]
    pub shell: Shell,
}
