//! Runtime context for command execution.
//!
//! The [`RuntimeContext`] holds what a command handler needs: the
//! repository directory, the resolved configuration and the global flags.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use gitwrap::{GitRepository, ProcessRunner};
use gitwrap_config::config::{WrapperConfig, load_config};
use gitwrap_config::discovery::find_config_file;

use crate::cli::GlobalArgs;

/// Runtime context passed to every command handler.
///
/// Constructed once in `main` after CLI parsing, before command dispatch.
#[derive(Debug)]
pub struct RuntimeContext {
    /// Working directory of the repository.
    pub repo_dir: PathBuf,

    /// Configuration file in effect, if any.
    pub config_path: Option<PathBuf>,

    /// Resolved configuration.
    pub config: WrapperConfig,

    /// Whether to produce JSON output.
    pub json: bool,
}

impl RuntimeContext {
    /// Build a `RuntimeContext` from parsed global arguments.
    ///
    /// The configuration file is `--config` when given, otherwise the one
    /// found by walking up from the repository directory. An explicit file
    /// must exist; a discovered one is optional.
    pub fn from_global_args(global: &GlobalArgs) -> Result<Self> {
        if let Some(missing) = global.config.as_ref().filter(|p| !p.is_file()) {
            bail!("configuration file {} does not exist", missing.display());
        }

        let config_path = global
            .config
            .clone()
            .or_else(|| find_config_file(&global.repo));

        let config = load_config(config_path.as_deref()).with_context(|| match &config_path {
            Some(p) => format!("failed to load configuration from {}", p.display()),
            None => "failed to load configuration".to_string(),
        })?;

        Ok(Self {
            repo_dir: global.repo.clone(),
            config_path,
            config,
            json: global.json,
        })
    }

    /// The repository handle for `--repo`.
    pub fn repository(&self) -> GitRepository<ProcessRunner> {
        self.repository_at(&self.repo_dir)
    }

    /// A repository handle for `dir`, sharing this context's runner settings.
    pub fn repository_at(&self, dir: &Path) -> GitRepository<ProcessRunner> {
        GitRepository::new(self.config.runner(), dir)
    }
}
