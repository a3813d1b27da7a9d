//! Error types for configuration parsing and validation.

use std::fmt;
use std::panic::Location;

use thiserror::Error;

/// Error type for configuration resolution.
///
/// Resolution is all-or-nothing: any of these means no configuration was
/// produced.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Malformed invocation or unknown option.
    ///
    /// Also carries `--help` and `--version` requests, which clap reports
    /// through its error type.
    #[error("{0}")]
    Usage(#[from] clap::Error),

    /// The bind address override is not a valid IP literal.
    #[error("Given IP address is invalid{location}")]
    InvalidAddress {
        /// Where resolution was requested
        location: CallSite,
        /// The rejected override, if one was recorded
        #[source]
        rejected: Option<OptionError>,
    },

    /// The bind port override is not a usable port.
    #[error("Given port is invalid{location}")]
    InvalidPort {
        /// Where resolution was requested
        location: CallSite,
        /// The rejected override, if one was recorded
        #[source]
        rejected: Option<OptionError>,
    },
}

/// Numeric codes for the typed validation errors.
pub mod code {
    /// Invalid bind address.
    pub const INVALID_ADDRESS: u8 = 1;
    /// Invalid bind port.
    pub const INVALID_PORT: u8 = 2;
}

impl ConfigError {
    /// Numeric code of a validation error; `None` for usage errors.
    #[must_use]
    pub const fn code(&self) -> Option<u8> {
        match self {
            Self::Usage(_) => None,
            Self::InvalidAddress { .. } => Some(code::INVALID_ADDRESS),
            Self::InvalidPort { .. } => Some(code::INVALID_PORT),
        }
    }

    /// Source location the error was annotated with, or `""` if unknown.
    #[must_use]
    pub fn location(&self) -> &str {
        match self {
            Self::Usage(_) => "",
            Self::InvalidAddress { location, .. } | Self::InvalidPort { location, .. } => {
                location.as_str()
            }
        }
    }
}

/// Failure of a single option handler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionError {
    /// Value is not an IPv4, IPv6 or IPv4-mapped IPv6 literal.
    #[error("'{value}' is not an IP address")]
    Address {
        /// The raw value
        value: String,
    },

    /// Value is not a port in 1..=65535.
    #[error("'{value}' is not a valid port: {reason}")]
    Port {
        /// The raw value
        value: String,
        /// Why it was rejected
        reason: PortRejection,
    },
}

/// Reason a port value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortRejection {
    /// Contains something other than ASCII digits, or is empty.
    NotDecimal,
    /// Larger than 65535.
    OutOfRange,
    /// Port 0 never names a listening socket.
    Reserved,
}

impl fmt::Display for PortRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::NotDecimal => "not a decimal number",
            Self::OutOfRange => "out of range",
            Self::Reserved => "port 0 is reserved",
        };
        f.write_str(reason)
    }
}

/// Best-effort source location attached to validation errors.
///
/// An unknown location displays as nothing, so error messages degrade
/// to the bare message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallSite(Option<String>);

impl CallSite {
    /// Captures the location of the (tracked) caller.
    #[must_use]
    #[track_caller]
    pub fn capture() -> Self {
        let caller = Location::caller();
        Self(Some(format!(
            "{}:{}:{}",
            caller.file(),
            caller.line(),
            caller.column()
        )))
    }

    /// A call site that could not be determined.
    #[must_use]
    pub const fn unknown() -> Self {
        Self(None)
    }

    /// The location as `file:line:column`, or `""` if unknown.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_deref().unwrap_or_default()
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(location) => write!(f, " (at {location})"),
            None => Ok(()),
        }
    }
}
