//! First-frame extraction from free-text stack traces.

use std::sync::LazyLock;

use regex::Regex;

/// Matches `at {path}:{line}:{column}` in a V8-style stack frame.
static FRAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"at\s+(.*):(\d+):(\d+)").unwrap());

/// Source location extracted from the topmost stack frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackFrame {
    pub path: String,
    pub line: u32,
}

/// Extract the first frame below the message line of a stack trace.
///
/// Only the second line is inspected: the first line is the error message
/// itself. Returns `None` when there is no second line or the frame does not
/// match the `at path:line:column` shape. For frames of the form
/// `at f (path:line:column)` the function-name prefix is stripped.
pub fn parse_first_frame(stack: &str) -> Option<StackFrame> {
    let frame_line = stack.lines().nth(1)?;
    let captures = FRAME_RE.captures(frame_line)?;

    let mut path = captures.get(1)?.as_str().trim();
    if let Some(open) = path.rfind('(') {
        path = path[open + 1..].trim();
    }
    let line = captures.get(2)?.as_str().parse().ok()?;

    Some(StackFrame {
        path: path.to_string(),
        line,
    })
}
