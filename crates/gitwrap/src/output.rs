//! Translation of git's textual output into typed values.
//!
//! Everything that scrapes text produced by `git` lives here, so a future
//! switch to a structured output mode only has to touch this module.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::debug;

/// Separator git prints between the local and the upstream branch in
/// `status -s -b` output.
const TRACKING_SEPARATOR: &str = "...";

/// Length of the `## ` prefix on the branch line.
const BRANCH_LINE_PREFIX_LEN: usize = 3;

static AHEAD_BEHIND_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[(?:ahead ([0-9]+)(?:, )?)?(?:behind ([0-9]+))?\]").expect("Invalid ahead/behind regex")
});

// ---------------------------------------------------------------------------
// Line splitting
// ---------------------------------------------------------------------------

/// Split command output into trimmed, non-empty lines.
///
/// Accepts `\n`, `\r\n` and bare `\r` line endings. Order is preserved.
pub fn split_output(output: &str) -> Vec<String> {
    output
        .split(['\r', '\n'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

// ---------------------------------------------------------------------------
// Tracking information
// ---------------------------------------------------------------------------

/// Relationship between the current branch and its upstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingInfo {
    /// Local branch name.
    pub branch: String,
    /// Upstream branch name, empty when there is no upstream.
    pub remote_branch: String,
    /// Commits on the local branch that are not upstream.
    pub ahead: u32,
    /// Commits upstream that are not on the local branch.
    pub behind: u32,
}

/// The branch summary line of `git status -s -b`, e.g.
/// `## main...origin/main [ahead 2, behind 1]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchStatusLine(String);

impl BranchStatusLine {
    /// Wrap a raw branch line.
    pub fn new(line: impl Into<String>) -> Self {
        Self(line.into())
    }

    /// Take the first non-empty line of short-branch status output.
    ///
    /// Output without any non-empty line yields an empty status line.
    pub fn from_status_output(output: &str) -> Self {
        Self(split_output(output).into_iter().next().unwrap_or_default())
    }

    /// The raw line.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the line names an upstream branch.
    pub fn has_tracking_branch(&self) -> bool {
        self.0.contains(TRACKING_SEPARATOR)
    }

    /// Parse branch names and ahead/behind counts out of the line.
    ///
    /// Text that does not match the expected shape is not an error: missing
    /// pieces come back empty or zero.
    pub fn tracking_information(&self) -> TrackingInfo {
        let Some((local, remote)) = self.0.split_once(TRACKING_SEPARATOR) else {
            return TrackingInfo {
                branch: skip_chars(&self.0, BRANCH_LINE_PREFIX_LEN).to_string(),
                ..TrackingInfo::default()
            };
        };

        let (remote_branch, trailing) = remote.split_once(' ').unwrap_or((remote, ""));
        let (ahead, behind) = if trailing.is_empty() {
            (0, 0)
        } else {
            parse_ahead_behind(trailing)
        };

        TrackingInfo {
            branch: skip_chars(local, BRANCH_LINE_PREFIX_LEN).to_string(),
            remote_branch: remote_branch.to_string(),
            ahead,
            behind,
        }
    }
}

impl std::fmt::Display for BranchStatusLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn parse_ahead_behind(trailing: &str) -> (u32, u32) {
    let Some(caps) = AHEAD_BEHIND_REGEX.captures(trailing) else {
        debug!(trailing, "tracking trailer did not match, assuming in sync");
        return (0, 0);
    };
    // The pattern only admits ASCII digits, so a parse failure is overflow.
    let count = |i: usize| -> u32 {
        caps.get(i)
            .map_or(0, |m| m.as_str().parse().unwrap_or(u32::MAX))
    };
    (count(1), count(2))
}

/// `s` without its first `n` characters, or `""` if it is shorter.
fn skip_chars(s: &str, n: usize) -> &str {
    s.char_indices().nth(n).map_or("", |(i, _)| &s[i..])
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
