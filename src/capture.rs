//! Call-stack introspection.
//!
//! Error values never walk the stack themselves; they go through the
//! [`FrameCapture`] seam, so combination and rendering can be exercised with
//! a deterministic frame source instead of a real walk. [`BacktraceCapture`]
//! is the production provider, backed by the `backtrace` crate.

use crate::types::{FrameVec, StackFrame};

/// Maximum number of frames a capture walks upward from the capture point.
pub const MAX_TRACE_DEPTH: usize = 5;

/// Placeholder recorded when the resolver has no symbol, file, or line.
const UNRESOLVED: &str = "<unknown>";

/// Source of captured call-stack frames.
pub trait FrameCapture {
    /// Walks the current call stack and returns up to `max_depth` frames,
    /// most specific first, stopping early at the top of the stack.
    fn capture(&self, max_depth: usize) -> FrameVec;
}

/// Production capture over the host's stack-walking facility.
///
/// Frames belonging to this crate and to the walker itself are skipped, so
/// the first recorded frame identifies the construction or combination call
/// site rather than the machinery that performed the walk. Symbol names,
/// file names, and line numbers are recorded verbatim as resolved.
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktraceCapture;

impl FrameCapture for BacktraceCapture {
    fn capture(&self, max_depth: usize) -> FrameVec {
        let mut frames = FrameVec::new();
        if max_depth == 0 {
            return frames;
        }
        let mut skipping = true;
        backtrace::trace(|frame| {
            let mut resolved: Option<StackFrame> = None;
            backtrace::resolve_frame(frame, |symbol| {
                // A frame can resolve to several inlined symbols; keep the
                // innermost one, matching the walk's most-specific-first order.
                if resolved.is_some() {
                    return;
                }
                let function = symbol
                    .name()
                    .map(|name| name.to_string())
                    .unwrap_or_else(|| UNRESOLVED.to_string());
                let file = symbol
                    .filename()
                    .and_then(|path| path.file_name())
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| UNRESOLVED.to_string());
                let line = symbol.lineno().unwrap_or(0);
                resolved = Some(StackFrame::new(function, file, line));
            });
            match resolved {
                Some(frame) => {
                    if skipping && is_walk_machinery(&frame.function) {
                        return true;
                    }
                    skipping = false;
                    frames.push(frame);
                }
                None => {
                    // Unresolvable frames before the first real one belong to
                    // the walker; past that point they still count.
                    if !skipping {
                        frames.push(StackFrame::new(UNRESOLVED, UNRESOLVED, 0));
                    }
                }
            }
            frames.len() < max_depth
        });
        frames
    }
}

fn is_walk_machinery(function: &str) -> bool {
    function.contains("backtrace::") || function.contains("error_trail::")
}

/// Deterministic capture that hands back a pre-built frame sequence.
///
/// Intended for tests asserting exact rendered output, where a real walk
/// would make function names and line numbers fragile.
///
/// # Examples
///
/// ```
/// use error_trail::{CompositeError, FixedCapture, StackFrame};
///
/// let capture = FixedCapture::new([StackFrame::new("app::load", "config.rs", 14)]);
/// let mut err = CompositeError::with_capture("bad key", &capture);
/// err.set_debug(true);
/// assert_eq!(err.to_string(), "bad key [app::load config.rs 14]");
/// ```
#[derive(Debug, Clone, Default)]
pub struct FixedCapture {
    frames: FrameVec,
}

impl FixedCapture {
    pub fn new(frames: impl IntoIterator<Item = StackFrame>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }
}

impl FrameCapture for FixedCapture {
    fn capture(&self, max_depth: usize) -> FrameVec {
        self.frames.iter().take(max_depth).cloned().collect()
    }
}
