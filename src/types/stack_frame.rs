use std::fmt;

/// One captured call-site record: the function that was executing, the file
/// it lives in, and the line the walk passed through.
///
/// Frames are immutable once captured; [`CompositeError`](crate::CompositeError)
/// only reads them back out during rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackFrame {
    /// Function name, or qualified symbol when the resolver provides one.
    pub function: String,
    /// File the frame points into, trimmed to the file name by the default
    /// capture so rendered output stays one line per frame.
    pub file: String,
    /// Line number, `0` when the resolver had no line information.
    pub line: u32,
}

impl StackFrame {
    pub fn new(function: impl Into<String>, file: impl Into<String>, line: u32) -> Self {
        Self {
            function: function.into(),
            file: file.into(),
            line,
        }
    }
}

/// Renders the `function file line` triple used in both the debug bracket
/// and trace lines.
impl fmt::Display for StackFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.function, self.file, self.line)
    }
}
