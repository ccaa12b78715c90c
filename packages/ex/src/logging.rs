//! Structured logging for error chains
//!
//! Built on the `log` facade with `env_logger` as the default backend.
//! Levels are driven by `RUST_LOG`, e.g. `RUST_LOG=ex=trace`.

use crate::chain::root_cause;
use crate::types::ChainedError;
use log::{error, info, warn};
use std::error::Error as StdError;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Logging entry points for chain errors
pub struct ChainLogger;

impl ChainLogger {
    /// Initialize `env_logger` (once per process)
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .init();

            info!("error chain logging initialized");
        });
    }

    /// Initialize logging for tests; safe to call from every test
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Log a failed operation with its flattened chain and root cause
    pub fn log_chain(operation: &str, err: &(dyn StdError + 'static)) {
        let root = root_cause(err);

        match err.downcast_ref::<ChainedError>() {
            Some(chained) => warn!(
                "{operation} failed: {err} (root_cause: {root}, fields: {})",
                Self::fields(chained)
            ),
            None => warn!("{operation} failed: {err} (root_cause: {root})"),
        }
    }

    /// Log an error that is about to abort the current thread
    pub fn log_abort(err: &(dyn StdError + 'static)) {
        error!("aborting on error: {err} (root_cause: {})", root_cause(err));
    }

    #[cfg(feature = "structured")]
    fn fields(chained: &ChainedError) -> String {
        chained.structured()
    }

    #[cfg(not(feature = "structured"))]
    fn fields(chained: &ChainedError) -> String {
        format!("{chained:?}")
    }
}
