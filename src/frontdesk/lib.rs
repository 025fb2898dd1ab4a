//! # Frontdesk Architecture
//!
//! Frontdesk is a **UI-agnostic hotel administration library**. This is not a
//! CLI application that happens to have some library code—it's a library that
//! happens to have a CLI client.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (wired by main.rs + args.rs)                     │
//! │  - Parses arguments, renders tables, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, generic over the domain       │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic                                      │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The List Pipeline
//!
//! Four screens (reservations, rooms, guests, payments) share one query
//! path instead of four parallel ones. Each domain record implements
//! [`model::Record`], and [`query::run`] carries any of them through the
//! same stages:
//!
//! ```text
//! snapshot → filter (status, search, dates, categories)
//!          → paginate (clamped page, div_ceil total)
//!          → ListPage { rows, pagination }
//! ```
//!
//! Stats aggregation ([`query::stats`]) and the page-window presenter
//! ([`query::window`]) hang off the same snapshot-and-filter discipline:
//! every operation works on an owned copy of the collection, so a list in
//! flight never observes a concurrent status change.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<ListPage<R>>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//!
//! This means the same core could serve a REST API, a browser app, or any
//! other UI.
//!
//! ## Testing Strategy
//!
//! 1. **Commands and query stages** (`commands/*.rs`, `query/*.rs`):
//!    thorough unit tests of business logic. This is where the lion's
//!    share of testing lives.
//! 2. **API** (`api.rs`): dispatch tests over an in-memory store.
//! 3. **CLI** (`tests/cli_integration.rs`): end-to-end runs of the binary
//!    against a temporary data directory.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`query`]: The shared list pipeline (filter, paginate, stats, window)
//! - [`model`]: Domain records and their status enumerations
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod query;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_fixtures;
