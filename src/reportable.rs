use serde_json::Value;

use crate::{conventions::symbolic::SymbolFrame, types::ErrorDetails};

/// An error value that can be normalized into an [`ErrorDetails`] record.
///
/// The required contract is minimal: a textual description, via the
/// `std::error::Error` supertrait. Everything else is an optional capability
/// with a default implementation returning `None`, so implementors opt in to
/// exactly the conventions their error type actually carries. Normalization
/// probes these methods at runtime rather than assuming any shared base type.
///
/// For the two stack-trace capabilities, presence selects the extraction
/// strategy, not non-emptiness: returning `Some(vec![])` means "this error
/// records its own trace, and that trace is empty", and suppresses the
/// raw-capture fallback.
pub trait Reportable: std::error::Error {
    /// One unwrap step into the cause chain. `None` means there is nothing
    /// further to unwrap.
    fn cause(&self) -> Option<&dyn Reportable> {
        None
    }

    /// A short category tag for the error, when the type declares one.
    fn class(&self) -> Option<&str> {
        None
    }

    /// Arbitrary structured payload attached to the error.
    fn data(&self) -> Option<Value> {
        None
    }

    /// Frame descriptors in the rich, symbol-carrying convention.
    fn symbol_frames(&self) -> Option<Vec<SymbolFrame>> {
        None
    }

    /// Frame records in the flat `<file>:<line>` string convention.
    fn frame_lines(&self) -> Option<Vec<String>> {
        None
    }

    /// Set only by [`ErrorDetails`] itself, so normalizing an
    /// already-normalized error is an identity operation.
    fn as_details(&self) -> Option<&ErrorDetails> {
        None
    }
}
