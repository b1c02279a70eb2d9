use crate::types::{Frame, Stacktrace};

// The flat convention records one plain string per call site, formatted
// "<file>:<line>", and nothing else. Package and method stay empty in the
// frames we build from it.
fn frame_from_line(line: &str) -> Frame {
    let mut parts = line.split(':');
    let file_name = parts.next().unwrap_or_default();
    let line_number = parts
        .next()
        .and_then(|field| field.parse().ok())
        .unwrap_or(-1);

    Frame::new(line_number, "", file_name, "")
}

pub fn to_stacktrace(lines: &[String]) -> Stacktrace {
    lines
        .iter()
        .map(|line| frame_from_line(line))
        .collect::<Vec<_>>()
        .into()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_file_and_line() {
        let frame = frame_from_line("handlers.go:57");

        assert_eq!(frame.file_name, "handlers.go");
        assert_eq!(frame.line_number, 57);
        assert_eq!(frame.package_name, "");
        assert_eq!(frame.method_name, "");
    }

    #[test]
    fn missing_line_field_degrades_to_sentinel() {
        let frame = frame_from_line("handlers.go");

        assert_eq!(frame.file_name, "handlers.go");
        assert_eq!(frame.line_number, -1);
    }

    #[test]
    fn non_numeric_line_degrades_to_sentinel() {
        let frame = frame_from_line("handlers.go:abc");

        assert_eq!(frame.line_number, -1);
    }

    #[test]
    fn one_frame_per_line_in_order() {
        let lines = vec!["a.go:1".to_string(), "b.go:2".to_string()];
        let trace = to_stacktrace(&lines);

        assert_eq!(trace.len(), 2);
        let files: Vec<_> = trace.iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(files, vec!["a.go", "b.go"]);
    }
}
