//! Shared counter incremented by N concurrent tasks under one lock.

use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task::JoinSet;
use tracing::info;

use super::DemoError;
use crate::output::Output;

/// Integer cell bundled with the lock that guards it. The value is never
/// reachable except through the lock.
#[derive(Debug, Default)]
pub struct SharedCounter {
    value: Mutex<u64>,
}

impl SharedCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments and prints the new value while still holding the lock,
    /// so printed values come out in increment order.
    pub async fn increment(&self, out: &dyn Output) -> u64 {
        let mut value = self.value.lock().await;
        *value += 1;
        out.line(format!("Counter: {}", *value));
        *value
    }

    pub async fn get(&self) -> u64 {
        *self.value.lock().await
    }
}

/// Spawns `n` increment tasks, joins them all and prints the final value.
pub async fn run_counter(n: u64, out: Arc<dyn Output>) -> Result<u64, DemoError> {
    let counter = Arc::new(SharedCounter::new());
    let mut tasks = JoinSet::new();

    for _ in 0..n {
        let counter = Arc::clone(&counter);
        let out = Arc::clone(&out);
        tasks.spawn(async move {
            counter.increment(out.as_ref()).await;
        });
    }

    while let Some(joined) = tasks.join_next().await {
        joined?;
    }

    let total = counter.get().await;
    out.line(format!("Final Counter: {total}"));
    info!(increments = n, total, "counter finished");
    Ok(total)
}
