//! Configuration layer for cloci.
//!
//! This module provides:
//! - The resolved configuration value ([`ServerConfig`])
//! - CLI argument parsing ([`Cli`])
//! - Option handlers for the override surface ([`options`])
//! - Override layers and their resolution ([`Layer`], [`Resolver`], [`resolve`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Later layers** - the command line is the last layer applied by [`resolve`]
//! 2. **Earlier layers** - any layer added to the [`Resolver`] before it
//! 3. **Built-in defaults** - [`ServerConfig::defaults`]
//!
//! Within the command line, repeated options are last-wins: `--bind-port 80
//! --bind-port 8080` binds port 8080.
//!
//! # Rejected Overrides
//!
//! An invalid override never falls back to the default. If any occurrence of
//! `--bind-address` or `--bind-port` is rejected by its handler, resolution
//! fails with [`ConfigError::InvalidAddress`] (code 1) or
//! [`ConfigError::InvalidPort`] (code 2). The address is checked first.
//! Port 0 is rejected like any other invalid port.
//!
//! # Non-Overridable Settings
//!
//! Route, certificate path, capacity, timeouts and size limits have no
//! command-line option. They can only be changed by adding a [`Layer`] to a
//! [`Resolver`].

mod cli;
pub mod defaults;
mod error;
mod layer;
pub mod options;
mod resolver;
mod value;

#[cfg(test)]
mod cli_tests;
#[cfg(test)]
mod resolver_tests;

pub use cli::Cli;
pub use error::{CallSite, ConfigError, OptionError, PortRejection, code};
pub use layer::{Layer, Parsed};
pub use resolver::{Resolver, resolve};
pub use value::ServerConfig;
