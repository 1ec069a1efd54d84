// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Most of the notification engine resolves its failure modes locally:
//! closing an unknown id is a no-op and a full bucket evicts its oldest entry.
//! The variants here are the few conditions that must reach the caller.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A consumer asked for notifications but no manager was provided in scope.
    #[error("no notification manager is provided in this scope")]
    NoProvider,

    /// A notifier was used after the manager it points to was dropped.
    #[error("the notification manager for this notifier has been dropped")]
    ProviderDropped,

    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),
}

impl Error {
    /// Returns true for wiring mistakes (hook used outside a manager scope).
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::NoProvider | Error::ProviderDropped)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn toml_parse_failure_becomes_config_error() {
        let parsed: std::result::Result<toml::Value, _> = toml::from_str("not = valid = toml");
        let err: Error = parsed.expect_err("invalid toml must fail").into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn scope_errors_are_configuration_errors() {
        assert!(Error::NoProvider.is_configuration());
        assert!(Error::ProviderDropped.is_configuration());
        assert!(!Error::Io("x".into()).is_configuration());
    }
}
