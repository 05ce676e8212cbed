//! Command handlers, one module per group of `gw` subcommands.

pub mod clone;
pub mod completion;
pub mod config_cmd;
pub mod passthrough;
pub mod status;
pub mod tracking;

/// Borrow owned CLI values as the `&str` slices the library takes.
pub(crate) fn as_strs(values: &[String]) -> Vec<&str> {
    values.iter().map(String::as_str).collect()
}
