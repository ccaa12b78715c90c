//! Error identities with causal chains
//!
//! `ex` separates *what* an error is from *why* it happened:
//! - [`Identity`] - a constant, comparable sentinel such as `"user not found"`
//! - [`ChainedError`] - a node pairing a primary error with the cause behind it
//!
//! Chains stay usable with the standard error machinery: `source()` yields the
//! primary of a node, and [`is`], [`find`] and [`any`] search the whole chain,
//! causes included.
//!
//! ```
//! use ex::Identity;
//!
//! const ERR_USER_NOT_FOUND: Identity = Identity::new("user not found");
//! const ERR_DATABASE: Identity = Identity::new("database error");
//!
//! let io = std::io::Error::other("connection reset by peer");
//! let err = ERR_USER_NOT_FOUND.because(ERR_DATABASE.because(io));
//!
//! assert!(err.is(&ERR_USER_NOT_FOUND));
//! assert!(err.is(&ERR_DATABASE));
//! assert_eq!(err.root_cause().to_string(), "connection reset by peer");
//! assert_eq!(
//!     err.to_string(),
//!     "user not found: database error: connection reset by peer"
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod abort;
pub mod chain;
pub mod constructors;
mod display;
pub mod extensions;
pub mod logging;
#[doc(hidden)]
pub mod macros;
pub mod types;

pub use abort::{must, must_do};
pub use chain::{any, expose, find, is, root_cause, root_cause_shared};
pub use constructors::{
    conv, conv_opt, critical, dummy, share, share_boxed, unexpected, unknown, CRITICAL, DUMMY,
    UNEXPECTED, UNKNOWN,
};
pub use extensions::{OptionExt, ResultExt};
pub use logging::ChainLogger;
pub use types::{ChainedError, DynError, Identity, Result, SEPARATOR};
