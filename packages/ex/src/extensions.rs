//! Extension traits for `Result` and `Option`
//!
//! Only the error side is wrapped: `Ok` and `Some` pass through untouched, so
//! no chain node is ever built around "no error".

use crate::constructors::{conv, CRITICAL, DUMMY, UNEXPECTED, UNKNOWN};
use crate::types::{ChainedError, Identity};
use std::borrow::Cow;

/// Chain-building adapters for `Result`
pub trait ResultExt<T> {
    /// Wrap the error as the cause of `identity`
    fn because(self, identity: &Identity) -> Result<T, ChainedError>;

    /// Normalize the error with [`conv`]
    fn chained(self) -> Result<T, ChainedError>;

    /// Wrap the error with [`UNEXPECTED`]
    fn unexpected(self) -> Result<T, ChainedError>;

    /// Wrap the error with [`CRITICAL`]
    fn critical(self) -> Result<T, ChainedError>;

    /// Wrap the error with [`UNKNOWN`]
    fn unknown(self) -> Result<T, ChainedError>;

    /// Wrap the error with [`DUMMY`]
    fn dummy(self) -> Result<T, ChainedError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn because(self, identity: &Identity) -> Result<T, ChainedError> {
        self.map_err(|err| identity.because(err))
    }

    fn chained(self) -> Result<T, ChainedError> {
        self.map_err(conv)
    }

    fn unexpected(self) -> Result<T, ChainedError> {
        self.because(&UNEXPECTED)
    }

    fn critical(self) -> Result<T, ChainedError> {
        self.because(&CRITICAL)
    }

    fn unknown(self) -> Result<T, ChainedError> {
        self.because(&UNKNOWN)
    }

    fn dummy(self) -> Result<T, ChainedError> {
        self.because(&DUMMY)
    }
}

/// Turn a missing value into a chain error
pub trait OptionExt<T> {
    /// `None` becomes a leaf node for `identity`
    fn ok_or_identity(self, identity: &Identity) -> Result<T, ChainedError>;

    /// `None` becomes `identity` with `text` as its reason
    fn ok_or_reason<S>(self, identity: &Identity, text: S) -> Result<T, ChainedError>
    where
        S: Into<Cow<'static, str>>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_identity(self, identity: &Identity) -> Result<T, ChainedError> {
        self.ok_or_else(|| ChainedError::from(identity.clone()))
    }

    fn ok_or_reason<S>(self, identity: &Identity, text: S) -> Result<T, ChainedError>
    where
        S: Into<Cow<'static, str>>,
    {
        self.ok_or_else(|| identity.reason(text))
    }
}
