//! Domain logic - pure release rules independent of external tools

pub mod tag;
pub mod version;

pub use tag::ReleaseTag;
pub use version::{Version, VersionBump};
