//! Process-wide rendering overrides.
//!
//! Two flags force debug or trace rendering on for every error value in the
//! process, regardless of per-value settings. They are read at render time,
//! never cached, so toggling one takes effect immediately for existing and
//! future values alike. Constructors additionally seed each new value's
//! per-value flags from them.
//!
//! The flags are meant to be flipped during test or bootstrap phases.
//! Toggling them while other threads render concurrently needs external
//! coordination; the atomics only keep the reads and writes tear-free.

use std::sync::atomic::{AtomicBool, Ordering};

static ALWAYS_DEBUG: AtomicBool = AtomicBool::new(false);
static ALWAYS_TRACE: AtomicBool = AtomicBool::new(false);

/// Snapshot of the two override flags.
///
/// [`RenderPolicy::current`] reads the process-wide state; a literal value
/// can be handed to
/// [`CompositeError::render_with`](crate::CompositeError::render_with) to
/// render under an explicit policy without touching process state.
///
/// # Examples
///
/// ```
/// use error_trail::{CompositeError, FixedCapture, RenderPolicy, StackFrame};
///
/// let capture = FixedCapture::new([StackFrame::new("app::boot", "main.rs", 7)]);
/// let err = CompositeError::with_capture("an error", &capture);
///
/// let forced = err.render_with(RenderPolicy { debug: true, trace: false });
/// assert_eq!(forced, "an error [app::boot main.rs 7]");
/// assert_eq!(err.to_string(), "an error");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderPolicy {
    pub debug: bool,
    pub trace: bool,
}

impl RenderPolicy {
    /// Both overrides off.
    pub const OFF: RenderPolicy = RenderPolicy {
        debug: false,
        trace: false,
    };

    /// Reads the current process-wide flags.
    pub fn current() -> Self {
        Self {
            debug: always_debug(),
            trace: always_trace(),
        }
    }
}

/// Forces debug rendering on for every value in the process.
pub fn set_always_debug(enabled: bool) {
    ALWAYS_DEBUG.store(enabled, Ordering::Relaxed);
}

/// Current state of the process-wide debug override.
pub fn always_debug() -> bool {
    ALWAYS_DEBUG.load(Ordering::Relaxed)
}

/// Forces trace rendering on for every value in the process.
pub fn set_always_trace(enabled: bool) {
    ALWAYS_TRACE.store(enabled, Ordering::Relaxed);
}

/// Current state of the process-wide trace override.
pub fn always_trace() -> bool {
    ALWAYS_TRACE.load(Ordering::Relaxed)
}
