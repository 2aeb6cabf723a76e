use std::error::Error;
use std::sync::Arc;

use crate::types::SharedError;

/// Type-erases a value into the shared constituent representation used by
/// [`CompositeError::combine`](crate::CompositeError::combine).
///
/// The blanket impl covers every `Error + Send + Sync` type, so native
/// [`CompositeError`](crate::CompositeError) values and foreign errors fold
/// in through the same call.
/// [`combine_opt`](crate::CompositeError::combine_opt) takes an `Option` of
/// any implementor, which makes an absent error an explicit no-op rather
/// than a failure.
///
/// # Examples
///
/// ```
/// use error_trail::CompositeError;
///
/// let base = CompositeError::new("request failed");
/// assert_eq!(base.combine_opt(None::<CompositeError>), base);
/// assert_eq!(
///     base.combine(std::io::Error::other("reset")).to_string(),
///     "request failed: reset",
/// );
/// ```
pub trait IntoConstituent {
    fn into_constituent(self) -> SharedError;
}

impl<E> IntoConstituent for E
where
    E: Error + Send + Sync + 'static,
{
    fn into_constituent(self) -> SharedError {
        Arc::new(self)
    }
}
