//! Session 7: goroutine-style concurrency, done with tasks and threads.
//!
//! * [`ticker`] - periodic producer/consumer raced against a timeout
//! * [`workers`] - fixed fan-out worker pool joined by a wait group
//! * [`counter`] - lock-guarded shared counter

pub mod counter;
pub mod ticker;
pub mod workers;

use std::str::FromStr;
use thiserror::Error;

pub use counter::{run_counter, SharedCounter};
pub use ticker::{run_ticker, TickerReport};
pub use workers::{run_worker_pool, WorkerPoolReport};

/// Runtime faults surfaced by the demos. None of them is expected in
/// normal operation.
#[derive(Error, Debug)]
pub enum DemoError {
    #[error("failed to spawn worker thread: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("worker {id} panicked")]
    WorkerPanicked { id: usize },

    #[error("task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Entries of the interactive Session 7 menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Program {
    Ticker,
    Workers,
    Counter,
    Exit,
}

impl Program {
    pub const MENU: [&'static str; 4] = [
        "1. Goroutine and Ticker Example",
        "2. Wait Group Example",
        "3. Mutex Example",
        "4. Exit",
    ];
}

impl FromStr for Program {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Program::Ticker),
            "2" => Ok(Program::Workers),
            "3" => Ok(Program::Counter),
            "4" => Ok(Program::Exit),
            other => Err(format!("invalid choice '{other}', please select 1-4")),
        }
    }
}
