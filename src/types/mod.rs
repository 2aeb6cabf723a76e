//! Error value types.
//!
//! # Examples
//!
//! ```
//! use error_trail::CompositeError;
//!
//! let err = CompositeError::new("cache miss").combine(std::io::Error::other("timeout"));
//! assert_eq!(err.to_string(), "cache miss: timeout");
//! ```
use smallvec::SmallVec;
use std::error::Error;
use std::sync::Arc;

use crate::capture::MAX_TRACE_DEPTH;

pub mod composite_error;
pub mod stack_frame;

pub use composite_error::*;
pub use stack_frame::*;

/// SmallVec-backed frame sequence.
///
/// Inline storage covers the bounded capture depth, so a freshly constructed
/// error records its trace without a heap allocation.
pub type FrameVec = SmallVec<[StackFrame; MAX_TRACE_DEPTH]>;

/// Shared, type-erased error value stored as a combination constituent.
///
/// Any error satisfying the standard error protocol — native
/// [`CompositeError`] values and foreign ones alike — can be held here, which
/// is what lets [`CompositeError::combine`] accept both interchangeably.
pub type SharedError = Arc<dyn Error + Send + Sync + 'static>;

/// Result alias that fails with a [`CompositeError`].
pub type CompositeResult<T> = Result<T, CompositeError>;
