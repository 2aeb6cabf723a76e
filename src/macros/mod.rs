//! Formatted construction.

/// Builds a [`CompositeError`](crate::CompositeError) from a format string,
/// capturing the call site exactly like
/// [`CompositeError::new`](crate::CompositeError::new).
///
/// Accepts the same arguments as the standard `format!` macro.
///
/// # Examples
///
/// ```
/// use error_trail::errorf;
///
/// let err = errorf!("no such user: {}", 42);
/// assert_eq!(err.to_string(), "no such user: 42");
/// ```
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)*) => {
        $crate::CompositeError::new(format!($($arg)*))
    };
}
