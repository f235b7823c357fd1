//! # vigil-engine
//!
//! The [`ValidationOrchestrator`] routes each value to its field validator,
//! merges the signals into a clamped score and records the outcome.
//!
//! ```no_run
//! use vigil_engine::ValidationOrchestrator;
//!
//! let engine = ValidationOrchestrator::with_defaults()?;
//! let result = engine.validate_email("user@gmial.com");
//! assert_eq!(result.suggestion(), Some("user@gmail.com"));
//! # Ok::<(), vigil_core::VigilError>(())
//! ```

pub mod engine;
pub mod format;
pub mod runtime;
pub mod validators;

pub use engine::ValidationOrchestrator;
pub use format::{DefaultFormatValidator, EmailFormatError};
