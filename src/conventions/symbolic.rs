use tracing::warn;

use crate::types::{Frame, Stacktrace};

/// One frame descriptor from the symbol-carrying convention. The source
/// renders each call site three ways, and we get the renderings as opaque
/// text, so all the structure has to be recovered by parsing here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolFrame {
    pub line: String,     // Decimal line number, e.g. "42"
    pub location: String, // "<package>.<symbol>\n\t<file>:<line>"
    pub function: String, // Bare function name, e.g. "run"
}

impl SymbolFrame {
    pub fn new(
        line: impl Into<String>,
        location: impl Into<String>,
        function: impl Into<String>,
    ) -> Self {
        SymbolFrame {
            line: line.into(),
            location: location.into(),
            function: function.into(),
        }
    }
}

impl From<&SymbolFrame> for Frame {
    fn from(raw: &SymbolFrame) -> Self {
        let line_number = raw.line.parse().unwrap_or_else(|_| {
            warn!(line = %raw.line, "unparsable line rendering in symbol frame");
            -1
        });

        // The location rendering puts the fully qualified symbol on the first
        // line and the file on the second, joined by a newline and tab. A
        // descriptor missing the separator degrades to an empty file name
        // rather than dropping the frame.
        let (symbol, file_name) = match raw.location.split_once("\n\t") {
            Some((symbol, file)) => (symbol, file),
            None => (raw.location.as_str(), ""),
        };

        // The last dot-separated segment is the symbol's own name; everything
        // before it is the package or namespace.
        let package_name = match symbol.rsplit_once('.') {
            Some((package, _)) => package,
            None => "",
        };

        Frame::new(line_number, package_name, file_name, raw.function.as_str())
    }
}

/// Turns the descriptor sequence into a trace, preserving the order the
/// source convention recorded.
pub fn to_stacktrace(frames: &[SymbolFrame]) -> Stacktrace {
    frames.iter().map(Frame::from).collect::<Vec<_>>().into()
}
