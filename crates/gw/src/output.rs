//! Output formatting helpers for the `gw` CLI.

use std::env;
use std::io::{self, Write};

use gitwrap::TrackingInfo;
use owo_colors::OwoColorize;
use serde::Serialize;

/// Print a value as pretty-printed JSON to stdout.
///
/// Terminates the process with exit code 1 if serialization fails.
pub fn output_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            // Ignore broken pipe errors (e.g., piped to `head`)
            let _ = writeln!(handle, "{json}");
        }
        Err(e) => {
            eprintln!("Error: failed to serialize JSON: {e}");
            std::process::exit(1);
        }
    }
}

/// Print trimmed command output, skipping it entirely when empty.
pub fn output_text(text: &str) {
    if !text.is_empty() {
        println!("{text}");
    }
}

/// Determines if ANSI color codes should be used.
///
/// Checks in order:
/// - `NO_COLOR` (any value): disables color
/// - `CLICOLOR=0`: disables color
/// - `TERM=dumb`: disables color
/// - `CLICOLOR_FORCE` (any value): forces color even in non-TTY
/// - Falls back to TTY detection
pub fn supports_color() -> bool {
    color_enabled(
        |name| env::var(name).ok(),
        crossterm::tty::IsTty::is_tty(&io::stdout()),
    )
}

fn color_enabled(var: impl Fn(&str) -> Option<String>, is_tty: bool) -> bool {
    if var("NO_COLOR").is_some() {
        return false;
    }
    if var("CLICOLOR").as_deref() == Some("0") {
        return false;
    }
    if var("TERM").as_deref() == Some("dumb") {
        return false;
    }
    if var("CLICOLOR_FORCE").is_some() {
        return true;
    }
    is_tty
}

/// One-line human summary of tracking information.
///
/// `main -> origin/main [ahead 2, behind 1]`, or `main (no upstream)`.
pub fn format_tracking(info: &TrackingInfo, color: bool) -> String {
    if info.remote_branch.is_empty() {
        return if color {
            format!("{} {}", info.branch.bold(), "(no upstream)".dimmed())
        } else {
            format!("{} (no upstream)", info.branch)
        };
    }

    let mut counts = Vec::new();
    if info.ahead > 0 {
        let s = format!("ahead {}", info.ahead);
        counts.push(if color { s.green().to_string() } else { s });
    }
    if info.behind > 0 {
        let s = format!("behind {}", info.behind);
        counts.push(if color { s.red().to_string() } else { s });
    }

    let head = if color {
        format!("{} -> {}", info.branch.bold(), info.remote_branch.cyan())
    } else {
        format!("{} -> {}", info.branch, info.remote_branch)
    };

    if counts.is_empty() {
        format!("{head} (up to date)")
    } else {
        format!("{head} [{}]", counts.join(", "))
    }
}
