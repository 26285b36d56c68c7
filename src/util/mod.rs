//! Small shared utilities.

pub mod format;
