//! Chain traversal: membership tests, root cause extraction, decomposition
//!
//! A chain is walked the way `std` errors are walked, through
//! [`std::error::Error::source`], with one addition: when a [`ChainedError`]
//! is met, its primary is searched first and then its cause. The cause is
//! never visible through `source()` alone.

use super::types::{ChainedError, DynError};
use std::error::Error as StdError;
use std::sync::Arc;

/// Visit errors in chain order until `visit` returns `true`
///
/// Order: the error itself; for a chain node its primary subtree, then its
/// cause subtree; for any other error its `source()` chain.
pub fn any<'a, F>(err: &'a (dyn StdError + 'static), mut visit: F) -> bool
where
    F: FnMut(&'a (dyn StdError + 'static)) -> bool,
{
    walk(err, &mut visit)
}

fn walk<'a, F>(err: &'a (dyn StdError + 'static), visit: &mut F) -> bool
where
    F: FnMut(&'a (dyn StdError + 'static)) -> bool,
{
    let mut current = Some(err);

    while let Some(err) = current {
        if visit(err) {
            return true;
        }

        if let Some(chained) = err.downcast_ref::<ChainedError>() {
            let primary: &'a (dyn StdError + 'static) = &*chained.primary;
            if walk(primary, visit) {
                return true;
            }

            return match chained.cause.as_deref() {
                Some(cause) => walk(cause, visit),
                None => false,
            };
        }

        current = err.source();
    }

    false
}

/// Whether `target` appears anywhere in the chain of `err`
///
/// ```
/// use ex::Identity;
///
/// const L1: Identity = Identity::new("level 1");
/// const L2: Identity = Identity::new("level 2");
/// const L3: Identity = Identity::new("level 3");
///
/// let err = L1.because(L2.because(L3));
/// assert!(ex::is(&err, &L1));
/// assert!(ex::is(&err, &L2));
/// assert!(ex::is(&err, &L3));
/// assert!(!ex::is(&err, &Identity::new("level 4")));
/// ```
pub fn is<T>(err: &(dyn StdError + 'static), target: &T) -> bool
where
    T: StdError + PartialEq + 'static,
{
    any(err, |candidate| candidate.downcast_ref::<T>() == Some(target))
}

/// First error of type `T` in the chain, primary before cause
pub fn find<'a, T>(err: &'a (dyn StdError + 'static)) -> Option<&'a T>
where
    T: StdError + 'static,
{
    let mut found = None;
    any(err, |candidate| {
        found = candidate.downcast_ref::<T>();
        found.is_some()
    });
    found
}

/// Root cause of `err`
///
/// Follows cause links through chain nodes only. The first error that is not
/// a [`ChainedError`] is the root; a chain node without a cause is its own
/// root, represented by its primary.
pub fn root_cause<'a>(err: &'a (dyn StdError + 'static)) -> &'a (dyn StdError + 'static) {
    let mut err = err;

    loop {
        let Some(chained) = err.downcast_ref::<ChainedError>() else {
            return err;
        };

        match chained.cause.as_deref() {
            Some(cause) => err = cause,
            None => return &*chained.primary,
        }
    }
}

/// [`root_cause`] for a shared error, returning a shared handle
#[must_use]
pub fn root_cause_shared(err: &DynError) -> DynError {
    let mut err = err;

    loop {
        let Some(chained) = err.downcast_ref::<ChainedError>() else {
            return Arc::clone(err);
        };

        match &chained.cause {
            Some(cause) => err = cause,
            None => return Arc::clone(&chained.primary),
        }
    }
}

/// Decompose any shared error into `(primary, cause)`
///
/// A plain error is returned as its own primary with no cause.
#[must_use]
pub fn expose(err: &DynError) -> (DynError, Option<DynError>) {
    match err.downcast_ref::<ChainedError>() {
        Some(chained) => (Arc::clone(&chained.primary), chained.cause.clone()),
        None => (Arc::clone(err), None),
    }
}

impl ChainedError {
    /// Whether `target` matches the primary or anything in the cause chain
    #[must_use]
    pub fn is<T>(&self, target: &T) -> bool
    where
        T: StdError + PartialEq + 'static,
    {
        is(self, target)
    }

    /// First error of type `T` in this chain
    #[must_use]
    pub fn find<T>(&self) -> Option<&T>
    where
        T: StdError + 'static,
    {
        find(self)
    }

    /// Root cause of this chain, see [`root_cause_shared`]
    #[must_use]
    pub fn root_cause(&self) -> DynError {
        match &self.cause {
            Some(cause) => root_cause_shared(cause),
            None => Arc::clone(&self.primary),
        }
    }
}
