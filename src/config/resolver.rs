//! Resolution of the final configuration.
//!
//! The resolver copies a base configuration, applies override layers in
//! order, and validates the result. Validation checks the bind address before
//! the bind port, so when both are invalid only the address is reported.

use std::ffi::OsString;

use super::cli::Cli;
use super::error::{CallSite, ConfigError};
use super::layer::Layer;
use super::value::ServerConfig;

/// Resolves the configuration from an option list (without program name).
///
/// Starts from [`ServerConfig::defaults`] and applies the command-line
/// overrides on top.
///
/// # Errors
///
/// - [`ConfigError::Usage`] if the option list is malformed or asks for help
/// - [`ConfigError::InvalidAddress`] if a `--bind-address` value is rejected
/// - [`ConfigError::InvalidPort`] if a `--bind-port` value is rejected
#[track_caller]
pub fn resolve<I, T>(options: I) -> Result<ServerConfig, ConfigError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_options(options)?;
    Resolver::new().layer(cli.to_layer()).resolve()
}

/// Builder that merges override layers over a base configuration.
///
/// Layers are applied in the order they are added; a later layer wins for
/// every field it sets.
#[derive(Debug, Clone)]
pub struct Resolver {
    base: ServerConfig,
    overrides: Layer,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolver {
    /// Creates a resolver starting from the compiled-in defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base(ServerConfig::defaults().clone())
    }

    /// Creates a resolver starting from `base`.
    #[must_use]
    pub fn with_base(base: ServerConfig) -> Self {
        Self {
            base,
            overrides: Layer::new(),
        }
    }

    /// Adds a layer on top of the ones already added.
    #[must_use]
    pub fn layer(mut self, layer: Layer) -> Self {
        self.overrides = self.overrides.merge(layer);
        self
    }

    /// Applies the layers and validates the result.
    ///
    /// Validation errors are annotated with the location of the caller.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidAddress`] or [`ConfigError::InvalidPort`]
    /// if the corresponding override was rejected, address first.
    #[track_caller]
    pub fn resolve(self) -> Result<ServerConfig, ConfigError> {
        let Self {
            base: mut config,
            mut overrides,
        } = self;

        match overrides.bind_address.take() {
            Some(Ok(address)) => config.bind_address = address,
            Some(Err(rejected)) => {
                return Err(ConfigError::InvalidAddress {
                    location: CallSite::capture(),
                    rejected: Some(rejected),
                });
            }
            None => {}
        }

        match overrides.bind_port.take() {
            Some(Ok(port)) => config.bind_port = port,
            Some(Err(rejected)) => {
                return Err(ConfigError::InvalidPort {
                    location: CallSite::capture(),
                    rejected: Some(rejected),
                });
            }
            None => {}
        }

        apply_unchecked(&mut config, overrides);

        tracing::debug!("{}", config.socket_addr());

        Ok(config)
    }
}

/// Applies the overrides whose types already rule out invalid values.
fn apply_unchecked(config: &mut ServerConfig, overrides: Layer) {
    let Layer {
        route,
        tls_cert_path,
        capacity,
        rate_limit,
        waiting_time_limit,
        timeout,
        response_write_timeout,
        tls_handshake_timeout,
        request_read_timeout,
        request_header_size_limit,
        request_body_size_limit,
        ..
    } = overrides;

    if let Some(route) = route {
        config.route = route;
    }
    if let Some(path) = tls_cert_path {
        config.tls_cert_path = path;
    }
    if let Some(capacity) = capacity {
        config.capacity = capacity;
    }
    if let Some(d) = rate_limit {
        config.rate_limit = d;
    }
    if let Some(d) = waiting_time_limit {
        config.waiting_time_limit = d;
    }
    if let Some(d) = timeout {
        config.timeout = d;
    }
    if let Some(d) = response_write_timeout {
        config.response_write_timeout = d;
    }
    if let Some(d) = tls_handshake_timeout {
        config.tls_handshake_timeout = d;
    }
    if let Some(d) = request_read_timeout {
        config.request_read_timeout = d;
    }
    if let Some(limit) = request_header_size_limit {
        config.request_header_size_limit = limit;
    }
    if let Some(limit) = request_body_size_limit {
        config.request_body_size_limit = limit;
    }
}
