//! Core error types and definitions

use std::borrow::Cow;
use std::sync::Arc;
use thiserror::Error;

/// Shared, immutable handle to any error that can sit inside a chain
pub type DynError = Arc<dyn std::error::Error + Send + Sync + 'static>;

/// Separator written between chain segments when a [`ChainedError`] is displayed
pub const SEPARATOR: &str = ": ";

/// Named, comparable error condition
///
/// An identity is a sentinel: two identities are the same error iff their
/// text is equal. They are usually declared once as `const` items and then
/// attached to concrete causes with [`Identity::because`] or
/// [`Identity::reason`].
///
/// ```
/// use ex::Identity;
///
/// const ERR_PAYMENT: Identity = Identity::new("payment failed");
///
/// let err = ERR_PAYMENT.reason("card declined");
/// assert_eq!(err.to_string(), "payment failed: card declined");
/// assert!(err.is(&ERR_PAYMENT));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Error)]
#[cfg_attr(feature = "structured", derive(serde::Serialize))]
#[cfg_attr(feature = "structured", serde(transparent))]
#[error("{0}")]
pub struct Identity(pub(crate) Cow<'static, str>);

/// Error node pairing a primary error with an optional cause
///
/// The primary is either an [`Identity`] or any external error; the cause is
/// the immediate underlying reason and may itself be a `ChainedError`.
/// Nodes are immutable: every deriving operation returns a new node and the
/// receiver stays untouched, so clones are cheap and freely shared.
#[derive(Debug, Clone)]
pub struct ChainedError {
    /// Identity of this node (never absent)
    pub(crate) primary: DynError,
    /// Immediate underlying reason, `None` for a leaf
    pub(crate) cause: Option<DynError>,
}

/// Result type alias using [`ChainedError`]
pub type Result<T> = std::result::Result<T, ChainedError>;
