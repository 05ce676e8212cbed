//! Configuration management for gitwrap.
//!
//! This crate loads [`config::WrapperConfig`] from an optional
//! `.gitwrap.yaml` file and `GITWRAP_*` environment variables, and turns it
//! into a configured [`gitwrap::ProcessRunner`].

pub mod config;
pub mod discovery;
