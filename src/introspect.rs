use crate::{
    conventions::{self, StackSource, ThreadStack},
    reportable::Reportable,
    types::ErrorDetails,
};

// A cause chain deeper than this is assumed to be cyclic. Real chains are a
// handful of levels at most, so the bound changes nothing for well-formed
// errors while keeping a buggy `cause` implementation from looping forever.
const MAX_CAUSE_DEPTH: usize = 128;

/// Follows the cause chain to the innermost error. An error with no cause
/// capability, or whose cause is exhausted, resolves to itself.
pub fn root_cause(err: &dyn Reportable) -> &dyn Reportable {
    let mut current = err;
    for _ in 0..MAX_CAUSE_DEPTH {
        match Reportable::cause(current) {
            Some(cause) => current = cause,
            None => break,
        }
    }
    current
}

impl ErrorDetails {
    /// Normalizes an error, extracting the stack trace with the calling
    /// thread's own stack as the raw-capture fallback. Never fails: all
    /// degradation ends up as best-effort field values. Run this on the
    /// thread that produced the error, or the fallback trace will describe
    /// the wrong stack.
    pub fn from_error(err: &dyn Reportable) -> Self {
        Self::from_error_with_stack(err, &ThreadStack)
    }

    /// As [`from_error`](Self::from_error), with an explicit stack source.
    pub fn from_error_with_stack(err: &dyn Reportable, source: &impl StackSource) -> Self {
        // Already normalized - hand it back untouched
        if let Some(details) = err.as_details() {
            return details.clone();
        }

        // The message stays the error's own text. The root cause's text only
        // ever lands in inner_error, and only when there was a chain to walk.
        let inner_error = match Reportable::cause(err) {
            Some(_) => root_cause(err).to_string(),
            None => String::new(),
        };

        ErrorDetails {
            message: err.to_string(),
            inner_error,
            class_name: err.class().unwrap_or_default().to_string(),
            data: err.data(),
            stack_trace: conventions::extract_stacktrace(err, source),
        }
    }
}
