//! End-to-end tests for [`GitRepository`] against a real `git` binary.
//!
//! Each test builds its own repositories inside a temporary directory.

use gitwrap::{GitError, GitRepository, ProcessRunner, TrackingInfo};
use pretty_assertions::assert_eq;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Run raw git for fixture setup, panicking on failure.
fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn configure_identity(dir: &Path) {
    git(dir, &["config", "user.name", "Test User"]);
    git(dir, &["config", "user.email", "test@example.com"]);
    git(dir, &["config", "commit.gpgsign", "false"]);
    git(dir, &["config", "pull.rebase", "false"]);
}

/// `git init` a repository on branch `main` with one commit.
fn init_repo(dir: &Path) {
    std::fs::create_dir_all(dir).unwrap();
    git(dir, &["init", "-q"]);
    git(dir, &["symbolic-ref", "HEAD", "refs/heads/main"]);
    configure_identity(dir);
    commit_file(dir, "README.md", "hello\n", "initial commit");
}

fn commit_file(dir: &Path, name: &str, content: &str, message: &str) {
    std::fs::write(dir.join(name), content).unwrap();
    git(dir, &["add", name]);
    git(dir, &["commit", "-q", "-m", message]);
}

fn runner(tmp: &TempDir) -> ProcessRunner {
    ProcessRunner::new().with_env(
        "GIT_CEILING_DIRECTORIES",
        tmp.path().to_string_lossy().to_string(),
    )
}

/// An origin repository plus a clone of it made through [`GitRepository::create`].
fn origin_and_clone(tmp: &TempDir) -> (PathBuf, GitRepository<ProcessRunner>) {
    let origin = tmp.path().join("origin");
    init_repo(&origin);

    let repo = GitRepository::new(runner(tmp), tmp.path().join("clone"));
    repo.create(origin.to_str().unwrap(), &["quiet"], &[])
        .unwrap();
    configure_identity(repo.directory());
    (origin, repo)
}

// ---------------------------------------------------------------------------
// Local repository
// ---------------------------------------------------------------------------

#[test]
fn test_clean_repo_without_upstream() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("repo");
    init_repo(&dir);
    let repo = GitRepository::new(runner(&tmp), &dir);

    assert_eq!(repo.current_branch().unwrap(), "main");
    assert_eq!(repo.status().unwrap(), "");
    assert!(!repo.has_changes().unwrap());
    assert!(!repo.has_tracking_branch().unwrap());
    assert_eq!(
        repo.tracking_information().unwrap(),
        TrackingInfo {
            branch: "main".to_string(),
            ..TrackingInfo::default()
        }
    );
}

#[test]
fn test_empty_repo_without_commits() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("empty");
    std::fs::create_dir_all(&dir).unwrap();
    git(&dir, &["init", "-q"]);
    git(&dir, &["symbolic-ref", "HEAD", "refs/heads/main"]);
    let repo = GitRepository::new(runner(&tmp), &dir);

    assert_eq!(repo.status().unwrap(), "");
    assert!(!repo.has_changes().unwrap());
    assert_eq!(repo.branch_status().unwrap().as_str(), "## No commits yet on main");
    assert!(!repo.has_tracking_branch().unwrap());
    assert_eq!(
        repo.tracking_information().unwrap(),
        TrackingInfo {
            branch: "No commits yet on main".to_string(),
            ..TrackingInfo::default()
        }
    );

    std::fs::write(dir.join("first.txt"), "x").unwrap();
    assert!(repo.has_changes().unwrap());
}

#[test]
fn test_untracked_file_is_a_change() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("repo");
    init_repo(&dir);
    let repo = GitRepository::new(runner(&tmp), &dir);

    std::fs::write(dir.join("new.txt"), "x").unwrap();
    assert!(repo.has_changes().unwrap());
    assert_eq!(repo.status().unwrap(), "?? new.txt\n");
}

#[test]
fn test_checkout_and_branch_listing() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("repo");
    init_repo(&dir);
    let repo = GitRepository::new(runner(&tmp), &dir);

    repo.checkout(&["b"], &["feature"]).unwrap();
    assert_eq!(repo.current_branch().unwrap(), "feature");
    assert_eq!(repo.branch(&[], &[]).unwrap(), vec!["* feature", "main"]);

    repo.checkout(&[], &["main"]).unwrap();
    assert_eq!(repo.current_branch().unwrap(), "main");
}

#[test]
fn test_detached_head_reports_head() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("repo");
    init_repo(&dir);
    let repo = GitRepository::new(runner(&tmp), &dir);

    repo.checkout(&["detach"], &[]).unwrap();
    assert_eq!(repo.current_branch().unwrap(), "HEAD");
}

#[test]
fn test_log_with_format() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("repo");
    init_repo(&dir);
    commit_file(&dir, "a.txt", "a\n", "second commit");
    let repo = GitRepository::new(runner(&tmp), &dir);

    let log = repo.log(&["format=%s"], &[]).unwrap();
    assert_eq!(log, "second commit\ninitial commit");
}

#[test]
fn test_reset_discards_changes() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("repo");
    init_repo(&dir);
    let repo = GitRepository::new(runner(&tmp), &dir);

    std::fs::write(dir.join("README.md"), "changed\n").unwrap();
    assert!(repo.has_changes().unwrap());

    let out = repo.reset(&["hard"], &["HEAD"]).unwrap();
    assert!(out.starts_with("HEAD is now at"), "unexpected output: {out}");
    assert!(!repo.has_changes().unwrap());
}

#[test]
fn test_execute_streams_output() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("repo");
    init_repo(&dir);
    let repo = GitRepository::new(runner(&tmp), &dir);

    let mut sink = Vec::new();
    let out = repo
        .execute("log", &["format=%s"], &[], Some(&mut sink))
        .unwrap();
    assert_eq!(out, "initial commit\n");
    assert_eq!(String::from_utf8(sink).unwrap(), out);
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[test]
fn test_checkout_unknown_branch_fails() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("repo");
    init_repo(&dir);
    let repo = GitRepository::new(runner(&tmp), &dir);

    match repo.checkout(&[], &["no-such-branch"]).unwrap_err() {
        GitError::CommandFailed {
            subcommand,
            code,
            stderr,
        } => {
            assert_eq!(subcommand, "checkout");
            assert!(code.is_some_and(|c| c != 0));
            assert!(!stderr.is_empty());
        }
        other => panic!("expected CommandFailed, got: {other:?}"),
    }
}

#[test]
fn test_not_a_repository_fails() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("plain");
    std::fs::create_dir_all(&dir).unwrap();
    let repo = GitRepository::new(runner(&tmp), &dir);

    assert!(matches!(
        repo.current_branch(),
        Err(GitError::CommandFailed { .. })
    ));
    assert!(repo.has_changes().is_err());
    assert!(repo.tracking_information().is_err());
}

#[test]
fn test_clone_into_existing_directory_fails() {
    let tmp = TempDir::new().unwrap();
    let origin = tmp.path().join("origin");
    init_repo(&origin);
    let target = tmp.path().join("taken");
    std::fs::create_dir_all(&target).unwrap();
    std::fs::write(target.join("file"), "x").unwrap();

    let repo = GitRepository::new(runner(&tmp), &target);
    let err = repo.create(origin.to_str().unwrap(), &[], &[]).unwrap_err();
    assert!(matches!(err, GitError::CommandFailed { .. }), "got: {err:?}");
}

// ---------------------------------------------------------------------------
// Clone and tracking
// ---------------------------------------------------------------------------

#[test]
fn test_create_clones_into_bound_directory() {
    let tmp = TempDir::new().unwrap();
    let (_origin, repo) = origin_and_clone(&tmp);

    assert!(repo.directory().join(".git").exists());
    assert!(repo.directory().join("README.md").exists());
    assert_eq!(repo.current_branch().unwrap(), "main");
}

#[test]
fn test_fresh_clone_tracks_origin() {
    let tmp = TempDir::new().unwrap();
    let (_origin, repo) = origin_and_clone(&tmp);

    assert!(repo.has_tracking_branch().unwrap());
    assert_eq!(
        repo.tracking_information().unwrap(),
        TrackingInfo {
            branch: "main".to_string(),
            remote_branch: "origin/main".to_string(),
            ahead: 0,
            behind: 0,
        }
    );
}

#[test]
fn test_ahead_and_behind_counts() {
    let tmp = TempDir::new().unwrap();
    let (origin, repo) = origin_and_clone(&tmp);

    commit_file(repo.directory(), "local.txt", "l\n", "local work");
    commit_file(repo.directory(), "local2.txt", "l\n", "more local work");
    commit_file(&origin, "remote.txt", "r\n", "remote work");
    repo.fetch(&["quiet"], &[]).unwrap();

    let info = repo.tracking_information().unwrap();
    assert_eq!(info.ahead, 2);
    assert_eq!(info.behind, 1);
    assert_eq!(info.remote_branch, "origin/main");
}

#[test]
fn test_pull_catches_up() {
    let tmp = TempDir::new().unwrap();
    let (origin, repo) = origin_and_clone(&tmp);

    commit_file(&origin, "remote.txt", "r\n", "remote work");
    repo.fetch(&["quiet"], &[]).unwrap();
    assert_eq!(repo.tracking_information().unwrap().behind, 1);

    repo.pull(&["quiet"], &[]).unwrap();
    let info = repo.tracking_information().unwrap();
    assert_eq!((info.ahead, info.behind), (0, 0));
    assert!(repo.directory().join("remote.txt").exists());
}
