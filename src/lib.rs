//! cloci: TLS-fronted compilation server
//!
//! Configuration resolution for the server: compiled-in defaults merged with
//! command-line overrides into one validated, immutable value.

pub mod config;
