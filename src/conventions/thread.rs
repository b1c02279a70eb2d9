use std::backtrace::Backtrace;

use crate::types::{Frame, Stacktrace};

/// Upper bound on captured stack text. Large enough that realistic traces
/// never truncate.
pub const MAX_STACK_TEXT_BYTES: usize = 1 << 16;

// The capture and the introspection entry point sit at the top of every
// captured stack, and are dropped so the visible trace starts at the caller.
const OWN_FRAME_COUNT: usize = 2;

/// Source of the calling thread's execution stack as text. The production
/// implementation is [`ThreadStack`]; tests substitute synthetic text.
///
/// A capture always describes the thread it runs on. Never hand a source
/// across threads expecting it to describe the original one.
pub trait StackSource {
    fn capture(&self) -> String;
}

/// Captures the current thread's stack via `std::backtrace`.
pub struct ThreadStack;

impl StackSource for ThreadStack {
    fn capture(&self) -> String {
        bounded(Backtrace::force_capture().to_string())
    }
}

fn bounded(mut text: String) -> String {
    if text.len() > MAX_STACK_TEXT_BYTES {
        let mut cut = MAX_STACK_TEXT_BYTES;
        while !text.is_char_boundary(cut) {
            cut -= 1;
        }
        text.truncate(cut);
    }
    text
}

/// The last-resort extraction strategy: snapshot the calling thread's stack,
/// parse it, and drop our own leading frames.
pub fn current_stacktrace(source: &impl StackSource) -> Stacktrace {
    let text = source.capture();
    let mut frames = parse_stack_text(&text);
    if frames.len() > OWN_FRAME_COUNT {
        frames.drain(..OWN_FRAME_COUNT);
    } else {
        frames.clear();
    }
    frames.into()
}

/// Parses the numbered `N: symbol` / `at file:line:col` pairs the standard
/// backtrace rendering emits. Lines that fit neither shape are skipped, and
/// a frame missing its location line keeps the `-1` sentinel.
pub fn parse_stack_text(text: &str) -> Vec<Frame> {
    let mut frames: Vec<Frame> = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();

        if let Some(location) = trimmed.strip_prefix("at ") {
            if let Some(frame) = frames.last_mut() {
                apply_location(frame, location);
            }
            continue;
        }

        let Some((index, symbol)) = trimmed.split_once(": ") else {
            continue;
        };
        if index.parse::<usize>().is_err() {
            continue;
        }

        let (package_name, method_name) = match symbol.rsplit_once("::") {
            Some((package, method)) => (package, method),
            None => ("", symbol),
        };

        frames.push(Frame::new(-1, package_name, "", method_name));
    }

    frames
}

fn apply_location(frame: &mut Frame, location: &str) {
    // Rendered as file:line:col, but the column is not always present.
    let mut fields: Vec<&str> = location.rsplitn(3, ':').collect();
    fields.reverse();

    match fields.as_slice() {
        [file, line, _] | [file, line] => {
            frame.file_name = (*file).to_string();
            frame.line_number = line.parse().unwrap_or(-1);
        }
        [file] => {
            frame.file_name = (*file).to_string();
        }
        _ => {}
    }
}
