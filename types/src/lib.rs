//! Core domain types for precond.
//!
//! This crate contains pure types with no IO, no async, and minimal dependencies:
//! the violation taxonomy every check reports with, and the identity seam the
//! role check reads from.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod identity;
mod violation;

pub use identity::{Identity, Principal};
pub use violation::{CheckResult, Violation, ViolationKind};
