use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

// We consume a variety of differently shaped stack traces, which we have
// special-case extraction for, to produce a single, unified representation
// of a frame. This is what gets embedded in the report, so the wire keys
// are fixed by the ingestion API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    pub line_number: i64, // -1 when the source convention's line field didn't parse; always emitted, zero included, unlike the string fields
    #[serde(default, rename = "className", skip_serializing_if = "String::is_empty")]
    pub package_name: String, // Package or namespace - the API calls this "className"
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub file_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub method_name: String,
}

impl Frame {
    pub fn new(
        line_number: i64,
        package_name: impl Into<String>,
        file_name: impl Into<String>,
        method_name: impl Into<String>,
    ) -> Self {
        Frame {
            line_number,
            package_name: package_name.into(),
            file_name: file_name.into(),
            method_name: method_name.into(),
        }
    }
}

/// An ordered stack trace, innermost call first. Order is whatever the
/// extraction strategy appended, never re-sorted. An empty trace is valid,
/// and means no trace could be determined.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stacktrace(Vec<Frame>);

impl Stacktrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_entry(
        &mut self,
        line_number: i64,
        package_name: impl Into<String>,
        file_name: impl Into<String>,
        method_name: impl Into<String>,
    ) {
        self.0
            .push(Frame::new(line_number, package_name, file_name, method_name));
    }

    pub fn push(&mut self, frame: Frame) {
        self.0.push(frame);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
        self.0.iter()
    }
}

impl From<Vec<Frame>> for Stacktrace {
    fn from(frames: Vec<Frame>) -> Self {
        Stacktrace(frames)
    }
}

impl IntoIterator for Stacktrace {
    type Item = Frame;
    type IntoIter = std::vec::IntoIter<Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Display for Stacktrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for frame in &self.0 {
            writeln!(
                f,
                "{}/{}:{}",
                frame.package_name, frame.file_name, frame.line_number
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn add_entry_preserves_order() {
        let mut trace = Stacktrace::new();
        trace.add_entry(10, "a", "a.rs", "inner");
        trace.add_entry(20, "b", "b.rs", "outer");

        assert_eq!(trace.len(), 2);
        let frames: Vec<_> = trace.iter().collect();
        assert_eq!(frames[0].method_name, "inner");
        assert_eq!(frames[1].method_name, "outer");
    }

    #[test]
    fn display_renders_package_file_line() {
        let mut trace = Stacktrace::new();
        trace.add_entry(42, "mypkg", "main.rs", "run");

        assert_eq!(trace.to_string(), "mypkg/main.rs:42\n");
    }

    #[test]
    fn frame_serializes_with_api_keys() {
        let frame = Frame::new(7, "pkg", "lib.rs", "go");
        let json = serde_json::to_value(&frame).unwrap();

        assert_eq!(json["lineNumber"], 7);
        assert_eq!(json["className"], "pkg");
        assert_eq!(json["fileName"], "lib.rs");
        assert_eq!(json["methodName"], "go");
    }

    #[test]
    fn empty_fields_are_omitted() {
        let frame = Frame::new(-1, "", "file.rs", "");
        let json = serde_json::to_value(&frame).unwrap();

        assert!(json.get("className").is_none());
        assert!(json.get("methodName").is_none());
        assert_eq!(json["lineNumber"], -1);
    }

    #[test]
    fn zero_line_number_is_still_emitted() {
        let frame = Frame::new(0, "", "file.rs", "");
        let json = serde_json::to_value(&frame).unwrap();

        assert_eq!(json["lineNumber"], 0);
    }
}
