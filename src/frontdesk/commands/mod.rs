//! # Command Layer
//!
//! Pure business logic, one module per operation. Commands take a store
//! and plain arguments, return plain results, and never touch stdout or a
//! terminal; the CLI layer is the only place that renders.

pub mod config;
pub mod delete;
pub mod export;
pub mod init;
pub mod list;
pub mod report;
pub mod seed;
pub mod stats;
pub mod status;
pub mod view;
