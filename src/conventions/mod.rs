use tracing::debug;

pub mod flat;
pub mod symbolic;
pub mod thread;

pub use thread::{StackSource, ThreadStack};

use crate::{reportable::Reportable, types::Stacktrace};

/// Extracts a stack trace from an error, trying each convention in a fixed
/// priority order. The first capability the error exposes wins, even when
/// the sequence it returns is empty; the raw thread-stack capture only runs
/// when the error carries no trace convention at all.
pub fn extract_stacktrace(err: &dyn Reportable, source: &impl StackSource) -> Stacktrace {
    if let Some(frames) = err.symbol_frames() {
        debug!(frames = frames.len(), "extracting symbol-convention trace");
        return symbolic::to_stacktrace(&frames);
    }

    if let Some(lines) = err.frame_lines() {
        debug!(lines = lines.len(), "extracting flat-convention trace");
        return flat::to_stacktrace(&lines);
    }

    debug!("no trace convention on error, capturing thread stack");
    thread::current_stacktrace(source)
}
