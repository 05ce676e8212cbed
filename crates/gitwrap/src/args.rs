//! Argument-vector construction.
//!
//! Options are classified against an explicit [`FlagPolicy`] table instead
//! of being guessed from their length, so the rendered argv is a pure
//! function of the policy and the input and can be tested without spawning
//! anything.

use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// A single option passed to a git subcommand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitOption {
    /// A single-character flag, rendered as `-x` and grouped with its
    /// neighbours (`-sb`).
    Short(char),
    /// A long flag, rendered as `--name`.
    Long(String),
    /// A long flag with a value, rendered as `--name=value`.
    LongWithValue(String, String),
}

// ---------------------------------------------------------------------------
// Flag policy
// ---------------------------------------------------------------------------

/// Table of characters that render as short flags.
///
/// Anything not in the table renders as a long flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagPolicy {
    short: BTreeSet<char>,
}

impl Default for FlagPolicy {
    /// ASCII letters and digits.
    fn default() -> Self {
        Self::from_chars(('a'..='z').chain('A'..='Z').chain('0'..='9'))
    }
}

impl FlagPolicy {
    /// A policy whose short-flag table is exactly `chars`.
    pub fn from_chars(chars: impl IntoIterator<Item = char>) -> Self {
        Self {
            short: chars.into_iter().collect(),
        }
    }

    /// Add `c` to the short-flag table.
    #[must_use]
    pub fn with_short(mut self, c: char) -> Self {
        self.short.insert(c);
        self
    }

    /// Remove `c` from the short-flag table, so it renders as `--c`.
    #[must_use]
    pub fn without_short(mut self, c: char) -> Self {
        self.short.remove(&c);
        self
    }

    /// Whether `c` renders as a short flag.
    pub fn is_short(&self, c: char) -> bool {
        self.short.contains(&c)
    }

    /// Classify a raw option name.
    ///
    /// `"s"` becomes [`GitOption::Short`] when `s` is in the table,
    /// `"depth=1"` becomes [`GitOption::LongWithValue`] and everything else
    /// becomes [`GitOption::Long`].
    pub fn classify(&self, raw: &str) -> GitOption {
        let mut chars = raw.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if self.is_short(c) {
                return GitOption::Short(c);
            }
        }

        match raw.split_once('=') {
            Some((name, value)) if !name.is_empty() => {
                GitOption::LongWithValue(name.to_string(), value.to_string())
            }
            _ => GitOption::Long(raw.to_string()),
        }
    }

    /// Render options followed by positional arguments.
    ///
    /// Consecutive short flags are concatenated into one group. Order is
    /// preserved within options and within arguments; options always come
    /// first.
    pub fn render<O, A>(&self, options: &[O], arguments: &[A]) -> Vec<String>
    where
        O: AsRef<str>,
        A: AsRef<str>,
    {
        let mut argv = Vec::with_capacity(options.len() + arguments.len());
        let mut group = String::new();

        for option in options {
            match self.classify(option.as_ref()) {
                GitOption::Short(c) => group.push(c),
                long => {
                    flush_group(&mut group, &mut argv);
                    argv.push(render_long(&long));
                }
            }
        }
        flush_group(&mut group, &mut argv);

        argv.extend(arguments.iter().map(|a| a.as_ref().to_string()));
        argv
    }
}

fn flush_group(group: &mut String, argv: &mut Vec<String>) {
    if !group.is_empty() {
        argv.push(format!("-{group}"));
        group.clear();
    }
}

fn render_long(option: &GitOption) -> String {
    match option {
        GitOption::Short(c) => format!("-{c}"),
        GitOption::Long(name) => format!("--{name}"),
        GitOption::LongWithValue(name, value) => format!("--{name}={value}"),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
