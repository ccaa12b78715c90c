//! Error constructors and conversions

use super::types::{ChainedError, DynError, Identity};
use log::trace;
use std::borrow::Cow;
use std::sync::Arc;

/// Identity for errors that most likely signal a bug
pub const UNEXPECTED: Identity = Identity::new("unexpected");

/// Identity for severe, non-recoverable failures
pub const CRITICAL: Identity = Identity::new("critical");

/// Identity for failures whose nature could not be determined
pub const UNKNOWN: Identity = Identity::new("unknown");

/// Identity for placeholder errors in tests and scaffolding
pub const DUMMY: Identity = Identity::new("dummy");

impl Identity {
    /// Create an identity from static text, usable in `const` items
    #[must_use]
    pub const fn new(text: &'static str) -> Self {
        Self(Cow::Borrowed(text))
    }

    /// The identity text, verbatim
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Attach a cause, producing a chain node whose primary is this identity
    #[must_use]
    pub fn because<E>(&self, cause: E) -> ChainedError
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        ChainedError {
            primary: Arc::new(self.clone()),
            cause: Some(share(cause)),
        }
    }

    /// Attach a plain-text reason, same as `because(Identity::from(text))`
    #[must_use]
    pub fn reason<S>(&self, text: S) -> ChainedError
    where
        S: Into<Cow<'static, str>>,
    {
        self.because(Identity(text.into()))
    }
}

impl From<&'static str> for Identity {
    fn from(text: &'static str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Identity {
    fn from(text: String) -> Self {
        Self(Cow::Owned(text))
    }
}

impl From<Cow<'static, str>> for Identity {
    fn from(text: Cow<'static, str>) -> Self {
        Self(text)
    }
}

impl ChainedError {
    /// Create a leaf node whose primary is an identity built from `text`
    #[must_use]
    pub fn new<S>(text: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        Self::leaf(Arc::new(Identity(text.into())))
    }

    /// Create a causeless node around an already shared error
    #[must_use]
    pub fn leaf(primary: DynError) -> Self {
        Self {
            primary,
            cause: None,
        }
    }

    /// Same primary, new cause
    #[must_use]
    pub fn because<E>(&self, cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            primary: Arc::clone(&self.primary),
            cause: Some(share(cause)),
        }
    }

    /// Same primary, plain-text reason as the cause
    #[must_use]
    pub fn reason<S>(&self, text: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        self.because(Identity(text.into()))
    }

    /// The primary error of this node
    #[must_use]
    pub fn primary(&self) -> &DynError {
        &self.primary
    }

    /// The immediate cause, `None` for a leaf
    #[must_use]
    pub fn cause(&self) -> Option<&DynError> {
        self.cause.as_ref()
    }

    /// Borrow both halves of the node
    #[must_use]
    pub fn parts(&self) -> (&DynError, Option<&DynError>) {
        (&self.primary, self.cause.as_ref())
    }

    /// Split the node into its primary and cause
    #[must_use]
    pub fn into_parts(self) -> (DynError, Option<DynError>) {
        (self.primary, self.cause)
    }
}

impl From<Identity> for ChainedError {
    fn from(identity: Identity) -> Self {
        Self::leaf(Arc::new(identity))
    }
}

/// Move an error behind a shared handle
///
/// An error that already is a [`DynError`] is returned as is rather than
/// wrapped a second time, so downcasts keep seeing the concrete type. The
/// same holds for a chain node behind a `Box` or an `Arc`: the node itself is
/// shared, so traversal still reaches its cause.
pub fn share<E>(err: E) -> DynError
where
    E: std::error::Error + Send + Sync + 'static,
{
    share_boxed(Box::new(err))
}

/// Move a boxed trait object behind a shared handle, see [`share`]
#[must_use]
pub fn share_boxed(err: Box<dyn std::error::Error + Send + Sync>) -> DynError {
    let err = match err.downcast::<DynError>() {
        Ok(shared) => return *shared,
        Err(err) => err,
    };

    let err = match err.downcast::<Arc<ChainedError>>() {
        Ok(node) => return *node,
        Err(err) => err,
    };

    match err.downcast::<Box<ChainedError>>() {
        Ok(node) => Arc::new(**node) as DynError,
        Err(err) => Arc::from(err),
    }
}

/// Normalize any error into a [`ChainedError`]
///
/// A chain node (passed directly or behind a [`DynError`]) is copied field by
/// field into a fresh value; anything else becomes the primary of a leaf.
pub fn conv<E>(other: E) -> ChainedError
where
    E: std::error::Error + Send + Sync + 'static,
{
    let shared = share(other);
    match shared.downcast_ref::<ChainedError>() {
        Some(chained) => {
            trace!("conv: copying chain node \"{chained}\"");
            ChainedError {
                primary: Arc::clone(&chained.primary),
                cause: chained.cause.clone(),
            }
        }
        None => {
            trace!("conv: wrapping external error \"{shared}\" as leaf");
            ChainedError::leaf(shared)
        }
    }
}

/// [`conv`] for an optional error; no error in, no error out
pub fn conv_opt<E>(other: Option<E>) -> Option<ChainedError>
where
    E: std::error::Error + Send + Sync + 'static,
{
    other.map(conv)
}

/// Wrap `cause` with [`UNEXPECTED`]
pub fn unexpected<E>(cause: E) -> ChainedError
where
    E: std::error::Error + Send + Sync + 'static,
{
    UNEXPECTED.because(cause)
}

/// Wrap `cause` with [`CRITICAL`]
///
/// Returns normally; use [`crate::must`] when the failure has to stop the
/// current thread.
pub fn critical<E>(cause: E) -> ChainedError
where
    E: std::error::Error + Send + Sync + 'static,
{
    CRITICAL.because(cause)
}

/// Wrap `cause` with [`UNKNOWN`]
pub fn unknown<E>(cause: E) -> ChainedError
where
    E: std::error::Error + Send + Sync + 'static,
{
    UNKNOWN.because(cause)
}

/// Wrap `cause` with [`DUMMY`]
pub fn dummy<E>(cause: E) -> ChainedError
where
    E: std::error::Error + Send + Sync + 'static,
{
    DUMMY.because(cause)
}
