//! deployenv - Typed deployment environments for applications
//!
//! This library models the environment an application runs under
//! (production, staging, development), normalizes loosely formatted text into
//! it, and tracks the active environment for the process.
//!
//! # Features
//!
//! - **Lenient Parsing**: `"  'production' "`, `"Staging"` and `"dev"` all resolve
//! - **Safe Fallback**: unrecognized input resolves to production with a warning
//! - **Open Values**: unrecognized text can still be carried and compared
//! - **Current Environment**: a lock-protected process-wide value, or an
//!   injectable [`CurrentEnvironment`] handle
//! - **Serde**: serializes as canonical text, deserializes leniently
//!
//! # Example
//!
//! ```
//! use deployenv::{Environment, current, set_current};
//!
//! let env = Environment::parse("development");
//! assert!(env.is_development());
//! assert_eq!(env.label(), "Development");
//!
//! set_current(env);
//! assert_eq!(current(), Environment::DEV);
//! ```

// Internal modules
mod current;
mod environment;
mod error;

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;

// Public API exports
pub use current::{CurrentEnvironment, current, global, set_current};
pub use environment::{Environment, normalize};
pub use error::{ParseError, Result};
