//! Shared helpers for precond.
//!
//! Small total functions that the checks in `precond-core` build on and that
//! callers are free to use directly:
//!
//! - **`reference`**: null-coalescing default selection
//! - **`collection`**: "absent or empty" tests for optional lists

pub mod collection;
pub mod reference;

pub use collection::{OptionSliceExt, is_empty};
pub use reference::null_safe;
