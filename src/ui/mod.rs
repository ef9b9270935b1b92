//! User interface module - status lines printed while a release runs.

pub mod formatter;

pub use formatter::{display_error, display_status, display_success, display_version_change};
