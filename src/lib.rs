//! Normalizes heterogeneous error values into one uniform, serializable
//! crash report, and submits it over HTTP.
//!
//! Errors produced by different wrapping conventions get probed for optional
//! capabilities ([`Reportable`]) - a cause chain, a class tag, structured
//! data, and one of two stack-trace conventions - and collapse into a single
//! [`ErrorDetails`] record. When an error carries no trace of its own, the
//! calling thread's stack is captured and parsed as a last resort.
//!
//! ```no_run
//! use crashreport::{Config, ErrorDetails, Report, Reportable};
//!
//! # async fn example(err: &dyn Reportable) -> Result<(), crashreport::Error> {
//! let details = ErrorDetails::from_error(err);
//! let report = Report::new(details);
//! let config = Config::init_with_defaults()?;
//! crashreport::submit(&report, &config, None).await
//! # }
//! ```

pub mod config;
pub mod conventions;
pub mod error;
pub mod introspect;
pub mod reportable;
pub mod submit;
pub mod types;

pub use config::Config;
pub use conventions::{StackSource, ThreadStack};
pub use error::Error;
pub use introspect::root_cause;
pub use reportable::Reportable;
pub use submit::submit;
pub use types::{ErrorDetails, Frame, Report, Stacktrace};
