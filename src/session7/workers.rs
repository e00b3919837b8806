//! Fixed fan-out worker pool joined by a wait group.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crossbeam::sync::WaitGroup;
use tracing::{debug, info};

use super::DemoError;
use crate::config::WorkerConfig;
use crate::output::Output;

pub const COMPLETED_NOTICE: &str = "All workers completed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerPoolReport {
    pub workers: usize,
    pub elapsed: Duration,
}

/// One unit of simulated work. `done` is the worker's share of the wait
/// group; dropping it is the completion signal, so it fires exactly once
/// whether the body returns or unwinds.
fn worker(id: usize, work: Duration, done: WaitGroup, out: &dyn Output) {
    out.line(format!("Worker {id} starting"));
    thread::sleep(work);
    out.line(format!("Worker {id} done"));
    drop(done);
}

/// Starts `config.count` workers (ids from 1), waits for all of them, then
/// prints the completion notice once.
pub fn run_worker_pool(
    config: &WorkerConfig,
    out: Arc<dyn Output>,
) -> Result<WorkerPoolReport, DemoError> {
    let started = Instant::now();
    let wg = WaitGroup::new();
    let mut handles = Vec::with_capacity(config.count);

    for id in 1..=config.count {
        let done = wg.clone();
        let out = Arc::clone(&out);
        let work = config.work();
        let handle = thread::Builder::new()
            .name(format!("worker-{id}"))
            .spawn(move || worker(id, work, done, out.as_ref()))?;
        handles.push((id, handle));
    }

    debug!(workers = config.count, "waiting for workers");
    wg.wait();
    out.line(COMPLETED_NOTICE.to_string());

    for (id, handle) in handles {
        handle
            .join()
            .map_err(|_| DemoError::WorkerPanicked { id })?;
    }

    let report = WorkerPoolReport {
        workers: config.count,
        elapsed: started.elapsed(),
    };
    info!(?report, "worker pool finished");
    Ok(report)
}
