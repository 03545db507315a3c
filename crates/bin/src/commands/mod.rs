//! Subcommand implementations.

pub mod convert;
pub mod draft;
pub mod share;
pub mod starter;
pub mod validate;
