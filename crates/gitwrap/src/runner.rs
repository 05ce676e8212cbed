//! Git process execution.
//!
//! [`CommandRunner`] is the seam between the repository handle and the
//! operating system: it turns one [`Invocation`] into exactly one external
//! process and hands back the captured stdout. [`ProcessRunner`] is the
//! production implementation built on `std::process::Command`.

use crate::args::FlagPolicy;
use crate::error::{GitError, Result};
use std::collections::BTreeMap;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use std::thread::JoinHandle;
use tracing::debug;

// ---------------------------------------------------------------------------
// Invocation
// ---------------------------------------------------------------------------

/// One git subcommand call: subcommand, options, positional arguments and
/// the directory to run it in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// The subcommand name, e.g. `"status"`.
    pub subcommand: String,
    /// Option names in caller order, rendered through a [`FlagPolicy`].
    pub options: Vec<String>,
    /// Positional arguments in caller order.
    pub arguments: Vec<String>,
    /// Working directory of the spawned process.
    pub cwd: PathBuf,
}

impl Invocation {
    /// An invocation of `subcommand` in `cwd` with no options or arguments.
    pub fn new(subcommand: impl Into<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            subcommand: subcommand.into(),
            options: Vec::new(),
            arguments: Vec::new(),
            cwd: cwd.into(),
        }
    }

    /// Append options.
    #[must_use]
    pub fn options<S: AsRef<str>>(mut self, options: &[S]) -> Self {
        self.options
            .extend(options.iter().map(|o| o.as_ref().to_string()));
        self
    }

    /// Append positional arguments.
    #[must_use]
    pub fn arguments<S: AsRef<str>>(mut self, arguments: &[S]) -> Self {
        self.arguments
            .extend(arguments.iter().map(|a| a.as_ref().to_string()));
        self
    }
}

// ---------------------------------------------------------------------------
// Runner trait
// ---------------------------------------------------------------------------

/// Executes git invocations.
pub trait CommandRunner {
    /// Run `invocation` to completion and return its stdout, unmodified.
    ///
    /// When `output` is given, stdout is also copied into it as it arrives.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::Spawn`] if the binary cannot be started,
    /// [`GitError::CommandFailed`] on a non-zero exit and
    /// [`GitError::Output`] if writing to `output` fails.
    fn execute(&self, invocation: &Invocation, output: Option<&mut dyn Write>) -> Result<String>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn execute(&self, invocation: &Invocation, output: Option<&mut dyn Write>) -> Result<String> {
        (**self).execute(invocation, output)
    }
}

// ---------------------------------------------------------------------------
// Process runner
// ---------------------------------------------------------------------------

/// Runs invocations by spawning the git binary synchronously.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    binary: PathBuf,
    policy: FlagPolicy,
    env: BTreeMap<String, String>,
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessRunner {
    /// A runner for `git` on the search path with the default flag policy.
    pub fn new() -> Self {
        Self {
            binary: PathBuf::from("git"),
            policy: FlagPolicy::default(),
            env: BTreeMap::new(),
        }
    }

    /// Use an explicit binary instead of `git` from the search path.
    #[must_use]
    pub fn with_binary(mut self, binary: impl Into<PathBuf>) -> Self {
        self.binary = binary.into();
        self
    }

    /// Replace the flag policy.
    #[must_use]
    pub fn with_policy(mut self, policy: FlagPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set an environment variable on every spawned process.
    #[must_use]
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    /// The binary this runner spawns.
    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// The flag policy used to render options.
    pub fn policy(&self) -> &FlagPolicy {
        &self.policy
    }

    /// The full argv (excluding the binary) for `invocation`.
    pub fn argv(&self, invocation: &Invocation) -> Vec<String> {
        let mut argv = vec![invocation.subcommand.clone()];
        argv.extend(
            self.policy
                .render(invocation.options.as_slice(), invocation.arguments.as_slice()),
        );
        argv
    }

    fn command(&self, invocation: &Invocation) -> Command {
        let mut cmd = Command::new(&self.binary);
        cmd.args(self.argv(invocation))
            .current_dir(&invocation.cwd)
            .envs(&self.env)
            .stdin(Stdio::null());
        cmd
    }

    fn spawn_error(&self, source: io::Error) -> GitError {
        GitError::Spawn {
            binary: self.binary.clone(),
            source,
        }
    }

    /// Spawn `cmd`, copying stdout into `sink` while capturing it.
    ///
    /// Stderr is drained on a separate thread so a chatty child cannot
    /// block on a full pipe.
    fn run_streaming(
        &self,
        mut cmd: Command,
        sink: &mut dyn Write,
    ) -> Result<(ExitStatus, Vec<u8>, Vec<u8>)> {
        let mut child = cmd
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| self.spawn_error(e))?;

        let mut stdout = child
            .stdout
            .take()
            .ok_or_else(|| self.spawn_error(io::Error::other("stdout was not captured")))?;
        let mut stderr = child
            .stderr
            .take()
            .ok_or_else(|| self.spawn_error(io::Error::other("stderr was not captured")))?;

        let stderr_reader = std::thread::spawn(move || {
            let mut buf = Vec::new();
            stderr.read_to_end(&mut buf).map(|_| buf)
        });

        let mut captured = Vec::new();
        if let Err(e) = copy_and_capture(&mut stdout, sink, &mut captured) {
            let _ = child.kill();
            let _ = child.wait();
            return Err(GitError::Output(e));
        }

        let status = child.wait().map_err(GitError::Output)?;
        let stderr = collect_stderr(stderr_reader)?;

        Ok((status, captured, stderr))
    }
}

impl CommandRunner for ProcessRunner {
    fn execute(&self, invocation: &Invocation, output: Option<&mut dyn Write>) -> Result<String> {
        debug!(
            binary = %self.binary.display(),
            argv = ?self.argv(invocation),
            cwd = %invocation.cwd.display(),
            "running git"
        );

        let (status, stdout, stderr) = match output {
            None => {
                let out = self
                    .command(invocation)
                    .output()
                    .map_err(|e| self.spawn_error(e))?;
                (out.status, out.stdout, out.stderr)
            }
            Some(sink) => self.run_streaming(self.command(invocation), sink)?,
        };

        debug!(
            code = ?status.code(),
            stdout_bytes = stdout.len(),
            stderr_bytes = stderr.len(),
            "git exited"
        );

        if !status.success() {
            return Err(GitError::CommandFailed {
                subcommand: invocation.subcommand.clone(),
                code: status.code(),
                stderr: String::from_utf8_lossy(&stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&stdout).into_owned())
    }
}

fn collect_stderr(reader: JoinHandle<io::Result<Vec<u8>>>) -> Result<Vec<u8>> {
    match reader.join() {
        Ok(read) => read.map_err(GitError::Output),
        Err(_) => Err(GitError::Output(io::Error::other("stderr reader panicked"))),
    }
}

fn copy_and_capture(
    src: &mut impl Read,
    sink: &mut dyn Write,
    captured: &mut Vec<u8>,
) -> io::Result<()> {
    let mut buf = [0u8; 8192];
    loop {
        let n = match src.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        sink.write_all(&buf[..n])?;
        captured.extend_from_slice(&buf[..n]);
    }
    sink.flush()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
