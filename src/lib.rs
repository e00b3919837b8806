//! # Go Sessions
//!
//! Small programs from a systems-language learning track, one module per
//! session exercise.
//!
//! ## Sessions
//!
//! 1. **ATM** - menu loop over a single account balance
//! 2. **Calculator / Converter** - pure functions returning `Result`
//! 3. **User** - validated record written out as JSON
//! 4. **Inventory** - trait objects and generics over shop items
//! 5. **Library** - borrow/return bookkeeping
//! 6. **Concurrency** - ticker with timeout, worker pool, shared counter
//!
//! ## Running
//!
//! ```bash
//! cargo run --bin session_07_concurrency -- counter -n 100
//! cargo run --bin session_07_concurrency -- workers --workers 5
//! cargo run --bin session_07_concurrency -- ticker --timeout-ms 3000
//! ```
//!
//! ## Key Dependencies
//!
//! - `tokio` - runtime for the ticker and counter tasks
//! - `crossbeam` - wait group for the worker pool
//! - `thiserror` - error enums for every session
//! - `serde` / `toml` / `serde_json` - config files and the user record
//! - `tracing` - diagnostics on stderr

pub mod atm;
pub mod calculator;
pub mod config;
pub mod converter;
pub mod inventory;
pub mod library;
pub mod logging;
pub mod output;
pub mod session7;
pub mod user;
