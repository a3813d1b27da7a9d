//! Option handlers for the command-line override surface.
//!
//! Each handler interprets the raw string of one named option. Handlers only
//! parse; whether a rejected value fails resolution is decided by the
//! resolver.

use std::net::IpAddr;
use std::num::NonZeroU16;

use super::error::{OptionError, PortRejection};
use super::layer::Parsed;

/// Name of the bind address option.
pub const BIND_ADDRESS: &str = "bind-address";

/// Name of the bind port option.
pub const BIND_PORT: &str = "bind-port";

/// Handler for `--bind-address`.
///
/// Accepts IPv4 dotted quads (`127.0.0.1`), IPv6 (`2001:db8::68`) and
/// IPv4-mapped IPv6 (`::ffff:192.0.2.1`). Zone suffixes are not accepted.
///
/// # Errors
///
/// Returns [`OptionError::Address`] if the value is not an IP literal.
pub fn bind_address(value: &str) -> Result<IpAddr, OptionError> {
    value.parse::<IpAddr>().map_err(|_| OptionError::Address {
        value: value.to_string(),
    })
}

/// Handler for `--bind-port`.
///
/// Only plain ASCII digits are accepted; signs and whitespace are rejected
/// even where `u16::from_str` would tolerate them.
///
/// # Errors
///
/// Returns [`OptionError::Port`] if the value is not decimal, exceeds 16 bits,
/// or is zero.
pub fn bind_port(value: &str) -> Result<NonZeroU16, OptionError> {
    let reject = |reason| OptionError::Port {
        value: value.to_string(),
        reason,
    };

    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(reject(PortRejection::NotDecimal));
    }

    let port = value
        .parse::<u16>()
        .map_err(|_| reject(PortRejection::OutOfRange))?;

    NonZeroU16::new(port).ok_or_else(|| reject(PortRejection::Reserved))
}

/// Runs `handler` over every occurrence of an option, in order.
///
/// The last value wins. The first rejected value ends the pass for this
/// option and is returned as the outcome, so a later valid occurrence cannot
/// mask an earlier invalid one. Returns `None` if the option never occurred.
pub fn apply_all<T, F>(values: &[String], handler: F) -> Option<Parsed<T>>
where
    F: Fn(&str) -> Parsed<T>,
{
    let mut outcome = None;
    for value in values {
        match handler(value) {
            Ok(parsed) => outcome = Some(Ok(parsed)),
            Err(e) => return Some(Err(e)),
        }
    }
    outcome
}
