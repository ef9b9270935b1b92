pub mod build;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod exec;
pub mod exit_codes;
pub mod git;
pub mod manifest;
pub mod notes;
pub mod preflight;
pub mod publish;
pub mod ui;

pub use error::{ReleaseError, Result};
