//! Convenience re-exports for quick starts.
//!
//! Import everything with:
//!
//! ```
//! use error_trail::prelude::*;
//! ```
//!
//! # Examples
//!
//! ```
//! use error_trail::prelude::*;
//!
//! fn migrate() -> CompositeResult<()> {
//!     Err(errorf!("migration {} failed", 3))
//! }
//!
//! let err = migrate().unwrap_err();
//! assert_eq!(err.to_string(), "migration 3 failed");
//! ```

pub use crate::capture::{BacktraceCapture, FixedCapture, FrameCapture, MAX_TRACE_DEPTH};
pub use crate::errorf;
pub use crate::policy::{
    always_debug, always_trace, set_always_debug, set_always_trace, RenderPolicy,
};
pub use crate::traits::IntoConstituent;
pub use crate::types::{CompositeError, CompositeResult, FrameVec, SharedError, StackFrame};
