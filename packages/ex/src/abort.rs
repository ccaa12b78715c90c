//! Fail-fast helpers for call sites that must not fail
//!
//! These are the only functions in the crate that panic. The panic payload is
//! the root cause of the error as a [`DynError`], so a `catch_unwind` caller
//! can downcast it back.

use crate::chain::root_cause_shared;
use crate::constructors::share;
use crate::logging::ChainLogger;
use crate::types::DynError;

/// Unwrap `result` or panic with the root cause of its error
///
/// ```
/// let port: u16 = ex::must("8080".parse::<u16>());
/// assert_eq!(port, 8080);
/// ```
pub fn must<T, E>(result: Result<T, E>) -> T
where
    E: std::error::Error + Send + Sync + 'static,
{
    match result {
        Ok(value) => value,
        Err(err) => abort(share(err)),
    }
}

/// Panic with the root cause if `result` is an error
pub fn must_do<E>(result: Result<(), E>)
where
    E: std::error::Error + Send + Sync + 'static,
{
    if let Err(err) = result {
        abort(share(err));
    }
}

fn abort(err: DynError) -> ! {
    ChainLogger::log_abort(&*err);
    std::panic::panic_any(root_cause_shared(&err))
}
