use std::error::Error as StdError;
use std::fmt::{self, Display, Write};

use crate::capture::{BacktraceCapture, FrameCapture, MAX_TRACE_DEPTH};
use crate::policy::RenderPolicy;
use crate::traits::IntoConstituent;
use crate::types::{FrameVec, SharedError, StackFrame};

/// A diagnostic error value: a message enriched with call-site frames, a
/// numeric classification code, and any number of combined-in constituents.
///
/// Construction captures the caller's call site. Rendering is a pure function
/// of current state: the bare message by default, a bracketed call site with
/// [`set_debug`](Self::set_debug), or a multi-line bounded trace with
/// [`set_trace`](Self::set_trace). [`combine`](Self::combine) folds further
/// errors in without mutating either operand.
///
/// # Examples
///
/// ```
/// use error_trail::CompositeError;
///
/// let one = CompositeError::new("one");
/// let two = CompositeError::new("two");
///
/// let both = one.combine(two.clone());
/// assert_eq!(both.to_string(), "one: two");
/// assert!(both.contains(&two));
/// ```
#[derive(Debug, Clone)]
pub struct CompositeError {
    description: String,
    /// Classification code; `0` means unset and is omitted from rendering.
    pub code: i32,
    frames: FrameVec,
    debug: bool,
    trace: bool,
    children: Vec<Constituent>,
}

/// A combined-in error paired with the frames recorded for it, so trace
/// rendering has a frame record even for foreign errors that never captured
/// their own stack.
#[derive(Debug, Clone)]
struct Constituent {
    error: SharedError,
    frames: FrameVec,
}

impl Constituent {
    /// Bare message of this constituent. A native error contributes only its
    /// own description: decoration is applied once per constituent by the
    /// top-level rendering, never nested.
    fn message(&self) -> String {
        match self.error.downcast_ref::<CompositeError>() {
            Some(native) => native.description.clone(),
            None => self.error.to_string(),
        }
    }

    fn matches(&self, target: &(dyn StdError + 'static)) -> bool {
        let stored: &(dyn StdError + 'static) = &*self.error;
        if std::ptr::addr_eq(stored as *const _, target as *const _) {
            return true;
        }
        match (
            stored.downcast_ref::<CompositeError>(),
            target.downcast_ref::<CompositeError>(),
        ) {
            (Some(stored), Some(target)) => stored.head_eq(target),
            (None, None) => stored.to_string() == target.to_string(),
            _ => false,
        }
    }
}

/// Children are compared by message and frame record; the shared pointer
/// itself carries no identity across clones.
impl PartialEq for Constituent {
    fn eq(&self, other: &Self) -> bool {
        self.frames == other.frames && self.message() == other.message()
    }
}

impl CompositeError {
    /// Wraps a literal message, capturing up to [`MAX_TRACE_DEPTH`] frames at
    /// the immediate call site. For formatted messages use
    /// [`errorf!`](crate::errorf).
    pub fn new(description: impl Into<String>) -> Self {
        Self::with_capture(description, &BacktraceCapture)
    }

    /// Like [`new`](Self::new), but walking the stack through an explicit
    /// capture source.
    pub fn with_capture(description: impl Into<String>, capture: &dyn FrameCapture) -> Self {
        Self::from_frames(description, capture.capture(MAX_TRACE_DEPTH))
    }

    /// Builds a value over a pre-captured frame sequence.
    ///
    /// Both rendering flags are seeded from the current process-wide
    /// overrides; the code starts unset and the child list empty.
    pub fn from_frames(description: impl Into<String>, frames: FrameVec) -> Self {
        let policy = RenderPolicy::current();
        Self {
            description: description.into(),
            code: 0,
            frames,
            debug: policy.debug,
            trace: policy.trace,
            children: Vec::new(),
        }
    }

    /// The message this value was constructed with. Combination never
    /// rewrites it; the `": "`-joined view exists only in rendered output.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Frames captured at construction, most specific first. Never mutated
    /// afterward.
    pub fn frames(&self) -> &[StackFrame] {
        &self.frames
    }

    /// Combined-in constituents, flattened in combination order.
    pub fn children(&self) -> impl Iterator<Item = &(dyn StdError + 'static)> + '_ {
        self.children.iter().map(|child| {
            let error: &(dyn StdError + 'static) = &*child.error;
            error
        })
    }

    /// Frame records positionally aligned with [`children`](Self::children).
    pub fn child_frames(&self) -> impl Iterator<Item = &[StackFrame]> + '_ {
        self.children.iter().map(|child| child.frames.as_slice())
    }

    /// Enables inclusion of the single most specific call-site frame in
    /// rendered output.
    pub fn set_debug(&mut self, enabled: bool) {
        self.debug = enabled;
    }

    /// Enables inclusion of the full captured frame sequence in rendered
    /// output. Supersedes the debug bracket when both are on.
    pub fn set_trace(&mut self, enabled: bool) {
        self.trace = enabled;
    }

    /// Produces a new value with `other` appended to the constituents.
    /// Neither operand is mutated.
    ///
    /// A native operand keeps its own captured frames, and any constituents
    /// it had accumulated are flattened in behind it, so chained combination
    /// yields one flat left-to-right list. A foreign operand gets a frame
    /// record captured at this call site. For an error that may be absent,
    /// see [`combine_opt`](Self::combine_opt).
    ///
    /// # Examples
    ///
    /// ```
    /// use error_trail::CompositeError;
    ///
    /// let err = CompositeError::new("one").combine(std::io::Error::other("my error"));
    /// assert_eq!(err.to_string(), "one: my error");
    /// ```
    pub fn combine(&self, other: impl IntoConstituent) -> CompositeError {
        self.combine_with(other, &BacktraceCapture)
    }

    /// Folds in an error that may be absent. `None` produces a value equal
    /// to the receiver, never a failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_trail::CompositeError;
    ///
    /// let err = CompositeError::new("one");
    /// assert_eq!(err.combine_opt(None::<CompositeError>), err);
    /// ```
    pub fn combine_opt(&self, other: Option<impl IntoConstituent>) -> CompositeError {
        match other {
            Some(other) => self.combine(other),
            None => self.clone(),
        }
    }

    /// Like [`combine`](Self::combine), but capturing a foreign operand's
    /// frame record through an explicit capture source.
    pub fn combine_with(
        &self,
        other: impl IntoConstituent,
        capture: &dyn FrameCapture,
    ) -> CompositeError {
        let error = other.into_constituent();
        let mut combined = self.clone();
        let native = error
            .downcast_ref::<CompositeError>()
            .map(|native| (native.frames.clone(), native.children.clone()));
        match native {
            Some((frames, flattened)) => {
                combined.children.push(Constituent { error, frames });
                combined.children.extend(flattened);
            }
            None => combined.children.push(Constituent {
                error,
                frames: capture.capture(MAX_TRACE_DEPTH),
            }),
        }
        combined
    }

    /// True when `target` is this value itself or one of its constituents.
    ///
    /// The receiver check compares own identity — description, code, and
    /// construction frames, ignoring children — so the left-hand operand of a
    /// combination is still found inside any value built from it. Child
    /// matching falls back from pointer identity to structural equality for
    /// native values and message equality for foreign ones; incomparable
    /// shapes compare unequal rather than panicking.
    pub fn contains(&self, target: &(dyn StdError + 'static)) -> bool {
        if let Some(native) = target.downcast_ref::<CompositeError>() {
            if self.head_eq(native) {
                return true;
            }
        }
        self.children.iter().any(|child| child.matches(target))
    }

    /// True when `predicate` accepts this value or any constituent.
    ///
    /// The receiver is tested first, then children in combination order,
    /// stopping at the first match; the predicate runs at most once per
    /// constituent.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_trail::CompositeError;
    ///
    /// let err = CompositeError::new("one").combine(std::io::Error::other("two"));
    /// assert!(err.contains_func(|e| e.to_string() == "two"));
    /// ```
    pub fn contains_func<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&(dyn StdError + 'static)) -> bool,
    {
        if predicate(self) {
            return true;
        }
        self.children.iter().any(|child| {
            let error: &(dyn StdError + 'static) = &*child.error;
            predicate(error)
        })
    }

    /// Own-identity comparison: description, code, and construction frames,
    /// ignoring combined children.
    fn head_eq(&self, other: &CompositeError) -> bool {
        self.description == other.description
            && self.code == other.code
            && self.frames == other.frames
    }

    /// Renders under an explicit policy instead of the process-wide flags.
    ///
    /// This is the full rendering algorithm; [`Display`] calls it with
    /// [`RenderPolicy::current`]. Repeated calls over unchanged state yield
    /// identical output.
    pub fn render_with(&self, policy: RenderPolicy) -> String {
        let debug = self.debug || policy.debug;
        let trace = self.trace || policy.trace;

        let mut out = String::new();
        if self.code != 0 {
            let _ = write!(out, "{} ", self.code);
        }
        out.push_str(&self.description);
        for child in &self.children {
            out.push_str(": ");
            out.push_str(&child.message());
        }

        if trace {
            for frame in &self.frames {
                let _ = write!(out, "\n\t{frame}");
            }
            for child in &self.children {
                let _ = write!(out, "\n{}", child.message());
                for frame in &child.frames {
                    let _ = write!(out, "\n\t{frame}");
                }
            }
        } else if debug {
            if let Some(frame) = self.frames.first() {
                let _ = write!(out, " [{frame}]");
            }
        }
        out
    }
}

impl Display for CompositeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with(RenderPolicy::current()))
    }
}

impl StdError for CompositeError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.children.first().map(|child| {
            let error: &(dyn StdError + 'static) = &*child.error;
            error
        })
    }
}

/// Structural equality over every observable field, so a no-op combination
/// compares equal to its receiver.
impl PartialEq for CompositeError {
    fn eq(&self, other: &Self) -> bool {
        self.description == other.description
            && self.code == other.code
            && self.debug == other.debug
            && self.trace == other.trace
            && self.frames == other.frames
            && self.children == other.children
    }
}
