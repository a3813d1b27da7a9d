//! The resolved server configuration.
//!
//! [`ServerConfig`] is a plain data carrier. It is only ever produced by the
//! resolver, which guarantees every field holds a usable value, and it offers
//! no way to change a field afterwards.

use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::num::NonZeroU16;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use std::time::Duration;

use serde::Serialize;

use super::defaults;

static DEFAULTS: LazyLock<ServerConfig> = LazyLock::new(|| ServerConfig {
    bind_address: defaults::BIND_ADDRESS,
    bind_port: defaults::BIND_PORT,
    route: defaults::ROUTE.to_string(),
    tls_cert_path: PathBuf::from(defaults::TLS_CERT_PATH),
    capacity: defaults::CAPACITY,
    rate_limit: defaults::rate_limit(),
    waiting_time_limit: defaults::waiting_time_limit(),
    timeout: defaults::timeout(),
    response_write_timeout: defaults::response_write_timeout(),
    tls_handshake_timeout: defaults::tls_handshake_timeout(),
    request_read_timeout: defaults::request_read_timeout(),
    request_header_size_limit: defaults::REQUEST_HEADER_SIZE_LIMIT,
    request_body_size_limit: defaults::REQUEST_BODY_SIZE_LIMIT,
});

/// Fully resolved configuration of the server.
///
/// Durations serialize as whole milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerConfig {
    pub(super) bind_address: IpAddr,
    pub(super) bind_port: NonZeroU16,
    pub(super) route: String,
    pub(super) tls_cert_path: PathBuf,
    pub(super) capacity: u16,
    #[serde(serialize_with = "millis")]
    pub(super) rate_limit: Duration,
    #[serde(serialize_with = "millis")]
    pub(super) waiting_time_limit: Duration,
    #[serde(serialize_with = "millis")]
    pub(super) timeout: Duration,
    #[serde(serialize_with = "millis")]
    pub(super) response_write_timeout: Duration,
    #[serde(serialize_with = "millis")]
    pub(super) tls_handshake_timeout: Duration,
    #[serde(serialize_with = "millis")]
    pub(super) request_read_timeout: Duration,
    pub(super) request_header_size_limit: u64,
    pub(super) request_body_size_limit: u64,
}

impl ServerConfig {
    /// Returns the compiled-in default configuration.
    ///
    /// The value is built once per process and never changes.
    #[must_use]
    pub fn defaults() -> &'static Self {
        &DEFAULTS
    }

    /// IP address to bind.
    #[must_use]
    pub const fn bind_address(&self) -> IpAddr {
        self.bind_address
    }

    /// Port to bind, never zero.
    #[must_use]
    pub const fn bind_port(&self) -> u16 {
        self.bind_port.get()
    }

    /// Address and port combined.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.bind_port.get())
    }

    /// Path segment of the exposed endpoint.
    #[must_use]
    pub fn route(&self) -> &str {
        &self.route
    }

    /// Location of the certificate material.
    #[must_use]
    pub fn tls_cert_path(&self) -> &Path {
        &self.tls_cert_path
    }

    /// Maximum number of concurrent work units.
    #[must_use]
    pub const fn capacity(&self) -> u16 {
        self.capacity
    }

    /// Minimum spacing between accepted requests.
    #[must_use]
    pub const fn rate_limit(&self) -> Duration {
        self.rate_limit
    }

    /// How long a request may wait for a free work unit.
    #[must_use]
    pub const fn waiting_time_limit(&self) -> Duration {
        self.waiting_time_limit
    }

    /// Overall time budget of a request.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Time allowed to write the response.
    #[must_use]
    pub const fn response_write_timeout(&self) -> Duration {
        self.response_write_timeout
    }

    /// Time allowed for the TLS handshake.
    #[must_use]
    pub const fn tls_handshake_timeout(&self) -> Duration {
        self.tls_handshake_timeout
    }

    /// Time allowed to read the request.
    #[must_use]
    pub const fn request_read_timeout(&self) -> Duration {
        self.request_read_timeout
    }

    /// Maximum size of the request headers in bytes.
    #[must_use]
    pub const fn request_header_size_limit(&self) -> u64 {
        self.request_header_size_limit
    }

    /// Maximum size of the request body in bytes.
    #[must_use]
    pub const fn request_body_size_limit(&self) -> u64 {
        self.request_body_size_limit
    }
}

impl fmt::Display for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ bind: {}, route: {}, tls_cert_path: {}, capacity: {}, \
             rate_limit: {}ms, waiting_time_limit: {}ms, timeout: {}ms, \
             response_write_timeout: {}ms, tls_handshake_timeout: {}ms, \
             request_read_timeout: {}ms, header_limit: {}B, body_limit: {}B }}",
            self.socket_addr(),
            self.route,
            self.tls_cert_path.display(),
            self.capacity,
            self.rate_limit.as_millis(),
            self.waiting_time_limit.as_millis(),
            self.timeout.as_millis(),
            self.response_write_timeout.as_millis(),
            self.tls_handshake_timeout.as_millis(),
            self.request_read_timeout.as_millis(),
            self.request_header_size_limit,
            self.request_body_size_limit,
        )
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)] // signature required by serde
fn millis<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_u64(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
}
