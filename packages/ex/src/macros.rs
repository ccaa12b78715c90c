//! Macros for building and returning chain errors

/// Build a [`ChainedError`](crate::ChainedError) from an identity
///
/// - `err!(ID)` is a leaf node for `ID`
/// - `err!(ID, "format {}", args)` attaches the formatted text as the reason
#[macro_export]
macro_rules! err {
    ($id:expr) => {
        $crate::ChainedError::from(::core::clone::Clone::clone(&$id))
    };
    ($id:expr, $msg:literal) => {
        ($id).reason(::std::format!($msg))
    };
    ($id:expr, $fmt:literal, $($arg:tt)*) => {
        ($id).reason(::std::format!($fmt, $($arg)*))
    };
}

/// Return early with [`err!`]
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return ::core::result::Result::Err(::core::convert::From::from($crate::err!($($arg)*)))
    };
}

/// Return early with [`err!`] unless the condition holds
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($arg:tt)*) => {
        if !$cond {
            $crate::bail!($($arg)*);
        }
    };
}
