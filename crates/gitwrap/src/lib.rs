//! Thin wrapper around the `git` command-line tool.
//!
//! A [`GitRepository`] is bound to one working directory and exposes one
//! method per supported subcommand. Every call spawns exactly one `git`
//! process through a [`CommandRunner`], captures its stdout and applies
//! light post-processing (trimming, line splitting, tracking-status parsing).
//!
//! ```no_run
//! use gitwrap::{GitRepository, ProcessRunner};
//!
//! let repo = GitRepository::new(ProcessRunner::new(), "/tmp/checkout");
//! if repo.has_tracking_branch()? {
//!     let info = repo.tracking_information()?;
//!     println!("{} is {} ahead of {}", info.branch, info.ahead, info.remote_branch);
//! }
//! # Ok::<(), gitwrap::GitError>(())
//! ```

pub mod args;
pub mod error;
pub mod output;
pub mod repository;
pub mod runner;

pub use args::{FlagPolicy, GitOption};
pub use error::{GitError, Result};
pub use output::{BranchStatusLine, TrackingInfo, split_output};
pub use repository::GitRepository;
pub use runner::{CommandRunner, Invocation, ProcessRunner};
