//! Repository handle bound to one working directory.

use crate::error::{GitError, Result};
use crate::output::{BranchStatusLine, TrackingInfo, split_output};
use crate::runner::{CommandRunner, Invocation};
use std::io::Write;
use std::path::{Path, PathBuf};

/// A git working directory plus the runner used to drive it.
///
/// Construction has no side effects; the directory does not have to exist
/// until a method is called (and for [`GitRepository::create`], not even
/// then). Every method spawns exactly one git process and propagates its
/// failure unchanged.
#[derive(Debug, Clone)]
pub struct GitRepository<R> {
    runner: R,
    directory: PathBuf,
}

impl<R: CommandRunner> GitRepository<R> {
    /// Bind `runner` to `directory`.
    pub fn new(runner: R, directory: impl Into<PathBuf>) -> Self {
        Self {
            runner,
            directory: directory.into(),
        }
    }

    /// The bound working directory.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// The runner driving this repository.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Run an arbitrary subcommand in the bound directory.
    ///
    /// Stdout is returned unmodified and, if `output` is given, copied into
    /// it as it arrives.
    ///
    /// # Errors
    ///
    /// Propagates any [`GitError`] from the runner.
    pub fn execute(
        &self,
        subcommand: &str,
        options: &[&str],
        arguments: &[&str],
        output: Option<&mut dyn Write>,
    ) -> Result<String> {
        let invocation = Invocation::new(subcommand, &self.directory)
            .options(options)
            .arguments(arguments);
        self.runner.execute(&invocation, output)
    }

    fn run(&self, subcommand: &str, options: &[&str], arguments: &[&str]) -> Result<String> {
        self.execute(subcommand, options, arguments, None)
    }

    fn run_trimmed(&self, subcommand: &str, options: &[&str], arguments: &[&str]) -> Result<String> {
        Ok(self.run(subcommand, options, arguments)?.trim().to_string())
    }

    /// Clone `clone_url` into the bound directory.
    ///
    /// Runs in the parent of the bound directory with the caller's
    /// arguments followed by `clone_url` and the directory's base name.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::InvalidDirectory`] if the bound path has no
    /// UTF-8 base name, otherwise propagates the runner's error.
    pub fn create(&self, clone_url: &str, options: &[&str], arguments: &[&str]) -> Result<String> {
        let name = self
            .directory
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| GitError::InvalidDirectory {
                path: self.directory.clone(),
            })?;
        let parent = match self.directory.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let invocation = Invocation::new("clone", parent)
            .options(options)
            .arguments(arguments)
            .arguments(&[clone_url, name]);
        Ok(self.runner.execute(&invocation, None)?.trim().to_string())
    }

    /// `git branch`, as trimmed non-empty lines.
    ///
    /// # Errors
    ///
    /// Propagates any [`GitError`] from the runner.
    pub fn branch(&self, options: &[&str], arguments: &[&str]) -> Result<Vec<String>> {
        Ok(split_output(&self.run("branch", options, arguments)?))
    }

    /// `git checkout`.
    ///
    /// # Errors
    ///
    /// Propagates any [`GitError`] from the runner.
    pub fn checkout(&self, options: &[&str], arguments: &[&str]) -> Result<String> {
        self.run_trimmed("checkout", options, arguments)
    }

    /// `git fetch`.
    ///
    /// # Errors
    ///
    /// Propagates any [`GitError`] from the runner.
    pub fn fetch(&self, options: &[&str], arguments: &[&str]) -> Result<String> {
        self.run_trimmed("fetch", options, arguments)
    }

    /// `git log`.
    ///
    /// # Errors
    ///
    /// Propagates any [`GitError`] from the runner.
    pub fn log(&self, options: &[&str], arguments: &[&str]) -> Result<String> {
        self.run_trimmed("log", options, arguments)
    }

    /// `git pull`.
    ///
    /// # Errors
    ///
    /// Propagates any [`GitError`] from the runner.
    pub fn pull(&self, options: &[&str], arguments: &[&str]) -> Result<String> {
        self.run_trimmed("pull", options, arguments)
    }

    /// `git reset`.
    ///
    /// # Errors
    ///
    /// Propagates any [`GitError`] from the runner.
    pub fn reset(&self, options: &[&str], arguments: &[&str]) -> Result<String> {
        self.run_trimmed("reset", options, arguments)
    }

    /// Name of the checked-out branch, or `HEAD` when detached.
    ///
    /// # Errors
    ///
    /// Propagates any [`GitError`] from the runner.
    pub fn current_branch(&self) -> Result<String> {
        self.run_trimmed("rev-parse", &["abbrev-ref"], &["HEAD"])
    }

    /// Short-format status, untrimmed.
    ///
    /// # Errors
    ///
    /// Propagates any [`GitError`] from the runner.
    pub fn status(&self) -> Result<String> {
        self.run("status", &["s"], &[])
    }

    /// Whether the working tree has any changes, including untracked files.
    ///
    /// # Errors
    ///
    /// Propagates any [`GitError`] from the runner.
    pub fn has_changes(&self) -> Result<bool> {
        Ok(!self.status()?.is_empty())
    }

    /// The branch summary line of `git status -s -b`.
    ///
    /// # Errors
    ///
    /// Propagates any [`GitError`] from the runner.
    pub fn branch_status(&self) -> Result<BranchStatusLine> {
        let output = self.run("status", &["s", "b"], &[])?;
        Ok(BranchStatusLine::from_status_output(&output))
    }

    /// Whether the current branch has an upstream.
    ///
    /// # Errors
    ///
    /// Propagates any [`GitError`] from the runner.
    pub fn has_tracking_branch(&self) -> Result<bool> {
        Ok(self.branch_status()?.has_tracking_branch())
    }

    /// Current branch, its upstream and the ahead/behind counts.
    ///
    /// Fetches a fresh status line on every call.
    ///
    /// # Errors
    ///
    /// Propagates any [`GitError`] from the runner.
    pub fn tracking_information(&self) -> Result<TrackingInfo> {
        Ok(self.branch_status()?.tracking_information())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
