//! Tests for configuration resolution.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::time::Duration;

use super::ConfigError;
use super::layer::Layer;
use super::resolver::{Resolver, resolve};
use super::value::ServerConfig;

/// Helper to resolve an option list given as string slices
fn resolve_args(args: &[&str]) -> Result<ServerConfig, ConfigError> {
    resolve(args.iter().copied())
}
