//! Pre-flight validation of SMP/E APPLY request options.
//!
//! This crate is a gate in front of the processing engine: it takes the
//! caller-supplied APPLY option mapping, checks it against a fixed
//! schema, and either accepts it or rejects it with every problem it
//! found. It never transforms the input.
//!
//! The crate provides:
//! - A declarative schema table mapping each legal attribute to its
//!   expected shape ([`schema`])
//! - A single-pass traversal that collects all violations instead of
//!   stopping at the first ([`validate`])
//! - Cross-field rules for option combinations that are individually
//!   legal but disallowed together
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use smpe_validate::validate;
//!
//! let options = json!({
//!     "check": true,
//!     "bypass": { "holdclass": ["HIPER", "PE"] }
//! });
//! let outcome = validate(&options).expect("input is a mapping");
//! assert!(outcome.is_valid());
//! ```
//!
//! The only fatal condition is a top-level value that is not a mapping;
//! everything else is an aggregated [`Diagnostic`].

pub mod diagnostic;
pub mod schema;
pub mod validate;

pub use diagnostic::{Diagnostic, Diagnostics};
pub use validate::{
    ensure_valid, validate, PreflightError, StructuralError, ValidationOutcome,
};
