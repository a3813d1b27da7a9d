//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use std::net::{IpAddr, Ipv4Addr};
use std::num::NonZeroU16;
use std::time::Duration;

/// Default bind address (loopback).
pub const BIND_ADDRESS: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

/// Default bind port.
pub const BIND_PORT: NonZeroU16 = match NonZeroU16::new(443) {
    Some(port) => port,
    None => panic!("default port must be non-zero"),
};

/// Default route exposed by the server.
pub const ROUTE: &str = "compile";

/// Default certificate directory.
#[cfg(windows)]
pub const TLS_CERT_PATH: &str = r"C:\ProgramData\cloci\certificates";

/// Default certificate directory.
#[cfg(not(windows))]
pub const TLS_CERT_PATH: &str = "/etc/cloci/certificates";

/// Default number of concurrent work units.
pub const CAPACITY: u16 = 10;

/// Default rate limit in milliseconds.
pub const RATE_LIMIT_MS: u64 = 250;

/// Default waiting time limit in milliseconds.
pub const WAITING_TIME_LIMIT_MS: u64 = 1000;

/// Default request timeout in seconds.
pub const TIMEOUT_SECS: u64 = 5;

/// Default response write timeout in milliseconds.
pub const RESPONSE_WRITE_TIMEOUT_MS: u64 = 10_000;

/// Default TLS handshake timeout in milliseconds.
pub const TLS_HANDSHAKE_TIMEOUT_MS: u64 = 200;

/// Default request read timeout in milliseconds.
pub const REQUEST_READ_TIMEOUT_MS: u64 = 200;

/// Default request header size limit (1 KiB).
pub const REQUEST_HEADER_SIZE_LIMIT: u64 = 1 << 10;

/// Default request body size limit (16 KiB).
pub const REQUEST_BODY_SIZE_LIMIT: u64 = 1 << 14;

/// Default rate limit as Duration.
#[must_use]
pub const fn rate_limit() -> Duration {
    Duration::from_millis(RATE_LIMIT_MS)
}

/// Default waiting time limit as Duration.
#[must_use]
pub const fn waiting_time_limit() -> Duration {
    Duration::from_millis(WAITING_TIME_LIMIT_MS)
}

/// Default request timeout as Duration.
#[must_use]
pub const fn timeout() -> Duration {
    Duration::from_secs(TIMEOUT_SECS)
}

/// Default response write timeout as Duration.
#[must_use]
pub const fn response_write_timeout() -> Duration {
    Duration::from_millis(RESPONSE_WRITE_TIMEOUT_MS)
}

/// Default TLS handshake timeout as Duration.
#[must_use]
pub const fn tls_handshake_timeout() -> Duration {
    Duration::from_millis(TLS_HANDSHAKE_TIMEOUT_MS)
}

/// Default request read timeout as Duration.
#[must_use]
pub const fn request_read_timeout() -> Duration {
    Duration::from_millis(REQUEST_READ_TIMEOUT_MS)
}
