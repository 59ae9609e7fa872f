//! CLI command implementations.
//!
//! Each submodule handles one subcommand: loading inputs, composing the
//! report where needed, and writing to the chosen sink. Commands return
//! `anyhow::Result` and leave error presentation to `main`.

pub mod catalog;
pub mod export;
pub mod init;
pub mod print;
pub mod report;
pub mod submit;
pub mod suggest;
pub mod wizard;
