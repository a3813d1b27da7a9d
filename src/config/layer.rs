//! Override layers applied on top of a base configuration.
//!
//! A [`Layer`] is one configuration source (the command line today). Every
//! field is optional; `None` means the source did not mention it. Fields that
//! come from string options hold the handler outcome, so "not overridden" and
//! "overridden with an invalid value" stay distinct.

use std::net::IpAddr;
use std::num::NonZeroU16;
use std::path::PathBuf;
use std::time::Duration;

use super::error::OptionError;

/// Outcome of an option handler for a single field.
pub type Parsed<T> = Result<T, OptionError>;

/// Partial set of overrides from one source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layer {
    /// Bind address override
    pub bind_address: Option<Parsed<IpAddr>>,
    /// Bind port override
    pub bind_port: Option<Parsed<NonZeroU16>>,
    /// Route override
    pub route: Option<String>,
    /// Certificate path override
    pub tls_cert_path: Option<PathBuf>,
    /// Capacity override
    pub capacity: Option<u16>,
    /// Rate limit override
    pub rate_limit: Option<Duration>,
    /// Waiting time limit override
    pub waiting_time_limit: Option<Duration>,
    /// Request timeout override
    pub timeout: Option<Duration>,
    /// Response write timeout override
    pub response_write_timeout: Option<Duration>,
    /// TLS handshake timeout override
    pub tls_handshake_timeout: Option<Duration>,
    /// Request read timeout override
    pub request_read_timeout: Option<Duration>,
    /// Header size limit override
    pub request_header_size_limit: Option<u64>,
    /// Body size limit override
    pub request_body_size_limit: Option<u64>,
}

impl Layer {
    /// Creates an empty layer that overrides nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the layer overrides no field.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Combines two layers; fields set in `later` win.
    #[must_use]
    pub fn merge(self, later: Self) -> Self {
        Self {
            bind_address: later.bind_address.or(self.bind_address),
            bind_port: later.bind_port.or(self.bind_port),
            route: later.route.or(self.route),
            tls_cert_path: later.tls_cert_path.or(self.tls_cert_path),
            capacity: later.capacity.or(self.capacity),
            rate_limit: later.rate_limit.or(self.rate_limit),
            waiting_time_limit: later.waiting_time_limit.or(self.waiting_time_limit),
            timeout: later.timeout.or(self.timeout),
            response_write_timeout: later.response_write_timeout.or(self.response_write_timeout),
            tls_handshake_timeout: later.tls_handshake_timeout.or(self.tls_handshake_timeout),
            request_read_timeout: later.request_read_timeout.or(self.request_read_timeout),
            request_header_size_limit: later
                .request_header_size_limit
                .or(self.request_header_size_limit),
            request_body_size_limit: later
                .request_body_size_limit
                .or(self.request_body_size_limit),
        }
    }
}
