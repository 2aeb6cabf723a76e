//! Diagnostic error values with call-site capture, bounded stack traces, and
//! lossless combination.
//!
//! A [`CompositeError`] wraps a plain message with the metadata generic error
//! handling loses: where the error was created (function, file, line), an
//! optional bounded call-stack trace, and a numeric classification code. Any
//! number of error values — including foreign ones that never captured a
//! stack — can be folded into one composite value without losing any
//! constituent's diagnostic trail.
//!
//! All of the enrichment is off by default: an undecorated value renders as
//! its bare message, so it drops into existing error-propagation paths
//! unchanged.
//!
//! # Examples
//!
//! ## Basic construction and rendering
//!
//! ```
//! use error_trail::CompositeError;
//!
//! let err = CompositeError::new("database connection failed");
//! assert_eq!(err.to_string(), "database connection failed");
//!
//! let mut coded = CompositeError::new("not found");
//! coded.code = 404;
//! assert_eq!(coded.to_string(), "404 not found");
//! ```
//!
//! ## Combining errors
//!
//! ```
//! use error_trail::CompositeError;
//!
//! let base = CompositeError::new("migration failed");
//! let cause = std::io::Error::other("disk full");
//!
//! let combined = base.combine(cause);
//! assert_eq!(combined.to_string(), "migration failed: disk full");
//! assert!(combined.contains(&base));
//! ```
//!
//! ## Debug and trace rendering
//!
//! [`CompositeError::new`] walks the real stack; the examples below inject a
//! [`FixedCapture`] so the output is exact.
//!
//! ```
//! use error_trail::{CompositeError, FixedCapture, StackFrame};
//!
//! let capture = FixedCapture::new([
//!     StackFrame::new("mycrate::load", "config.rs", 14),
//!     StackFrame::new("mycrate::main", "main.rs", 3),
//! ]);
//! let mut err = CompositeError::with_capture("an error", &capture);
//!
//! err.set_debug(true);
//! assert_eq!(err.to_string(), "an error [mycrate::load config.rs 14]");
//!
//! err.set_trace(true);
//! assert_eq!(
//!     err.to_string(),
//!     "an error\n\tmycrate::load config.rs 14\n\tmycrate::main main.rs 3",
//! );
//! ```

/// Call-stack introspection behind an injectable provider seam
pub mod capture;
/// Formatted-construction macro
pub mod macros;
/// Process-wide rendering overrides
pub mod policy;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Conversion traits for error combination
pub mod traits;
/// CompositeError and its supporting value types
pub mod types;

pub use capture::{BacktraceCapture, FixedCapture, FrameCapture, MAX_TRACE_DEPTH};
pub use policy::{
    always_debug, always_trace, set_always_debug, set_always_trace, RenderPolicy,
};
pub use traits::IntoConstituent;
pub use types::{CompositeError, CompositeResult, FrameVec, SharedError, StackFrame};
