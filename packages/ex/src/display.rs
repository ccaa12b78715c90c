//! Display and trait implementations for ChainedError

use super::types::{ChainedError, SEPARATOR};
use std::fmt;

impl fmt::Display for ChainedError {
    /// Flattened form: every primary along the cause chain joined by
    /// [`SEPARATOR`], ending with the first cause that is not a chain node.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.primary)?;

        let mut next = self.cause.as_deref();
        while let Some(cause) = next {
            f.write_str(SEPARATOR)?;

            match cause.downcast_ref::<ChainedError>() {
                Some(chained) => {
                    write!(f, "{}", chained.primary)?;
                    next = chained.cause.as_deref();
                }
                None => {
                    write!(f, "{cause}")?;
                    next = None;
                }
            }
        }

        Ok(())
    }
}

impl std::error::Error for ChainedError {
    /// Only the primary is exposed here; the cause is reached through
    /// [`crate::is`] and friends.
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&*self.primary)
    }
}

#[cfg(feature = "structured")]
mod structured {
    use super::ChainedError;
    use serde::{Serialize, Serializer};

    #[derive(Serialize)]
    struct Fields {
        error: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        cause: Option<String>,
    }

    impl ChainedError {
        fn fields(&self) -> Fields {
            Fields {
                error: self.primary.to_string(),
                cause: self.cause.as_ref().map(ToString::to_string),
            }
        }

        /// Key-value rendering for logs: `{"error":"...","cause":"..."}`
        ///
        /// `cause` is omitted for a leaf. Not meant for control flow.
        #[must_use]
        pub fn structured(&self) -> String {
            serde_json::to_string(&self.fields()).unwrap_or_else(|_| self.to_string())
        }
    }

    impl Serialize for ChainedError {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            self.fields().serialize(serializer)
        }
    }
}
