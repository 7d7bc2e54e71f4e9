//! SMP/E pre-flight common domain types.
//!
//! This crate provides the closed enumerations the APPLY option schema
//! draws from:
//! - Hold classes accepted by BYPASS HOLDCLASS
//! - System reason IDs accepted by BYPASS HOLDSYSTEM
//! - GROUPEXTEND modifier tokens
//!
//! The values are fixed by the downstream processing engine and never
//! change at runtime.

pub mod enums;

pub use enums::{GroupExtendToken, HoldClass, SystemReason};
