//! CLI argument parsing using clap.
//!
//! clap only checks the shape of the invocation. Option values are kept as
//! raw strings and interpreted by the handlers in [`super::options`], so an
//! invalid value surfaces as a typed validation error instead of a usage
//! error.

use std::ffi::OsString;

use clap::Parser;

use super::layer::Layer;
use super::options;

/// cloci: TLS-fronted compilation server
///
/// Resolves the server configuration from built-in defaults and
/// command-line overrides.
#[derive(Debug, Parser)]
#[command(name = "cloci")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// IP address to bind (e.g. "127.0.0.1", "2001:db8::68" or "::ffff:192.0.2.1") [default: 127.0.0.1]
    #[arg(long = "bind-address", value_name = "IP", allow_hyphen_values = true)]
    pub bind_address: Vec<String>,

    /// Port to bind (e.g. 443) [default: 443]
    #[arg(long = "bind-port", value_name = "PORT", allow_hyphen_values = true)]
    pub bind_port: Vec<String>,
}

impl Cli {
    /// Parses an option list that does not include the program name.
    ///
    /// Options may also be spelled with a single dash (`-bind-port 443`,
    /// `-bind-address=::1`).
    ///
    /// # Errors
    ///
    /// Returns the clap error for unknown options, missing values, stray
    /// positionals, or a help/version request.
    pub fn try_parse_options<I, T>(options: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let program = std::iter::once(OsString::from("cloci"));
        let options = normalize_single_dash(options.into_iter().map(Into::into));
        Self::try_parse_from(program.chain(options))
    }

    /// Runs the option handlers and collects their outcomes as a layer.
    #[must_use]
    pub fn to_layer(&self) -> Layer {
        Layer {
            bind_address: options::apply_all(&self.bind_address, options::bind_address),
            bind_port: options::apply_all(&self.bind_port, options::bind_port),
            ..Layer::default()
        }
    }
}

/// Rewrites `-bind-address`/`-bind-port` (with or without `=value`) to the
/// long form clap expects.
///
/// Only tokens in option position are touched: a value following a bare
/// option name is passed through, as is everything after `--`.
fn normalize_single_dash<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut expects_value = false;
    let mut options_ended = false;

    args.into_iter()
        .map(|arg| {
            if options_ended || std::mem::take(&mut expects_value) {
                return arg;
            }

            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                options_ended = true;
                return arg;
            }

            let long = if text.starts_with("--") {
                text.to_string()
            } else if let Some(rest) = text.strip_prefix('-').filter(|rest| names_option(rest)) {
                format!("--{rest}")
            } else {
                return arg;
            };

            expects_value = long
                .strip_prefix("--")
                .is_some_and(|name| !name.contains('=') && names_option(name));
            OsString::from(long)
        })
        .collect()
}

/// True if `token` is `bind-address` or `bind-port`, optionally followed by `=value`.
fn names_option(token: &str) -> bool {
    let name = token.split_once('=').map_or(token, |(name, _)| name);
    name == options::BIND_ADDRESS || name == options::BIND_PORT
}
