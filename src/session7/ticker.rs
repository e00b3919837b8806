//! Ticker-driven producer/consumer with a fixed timeout.
//!
//! Every tick spawns a producer task that sends one timestamped message on a
//! shared channel. The consumer loop races three sources (timeout, tick,
//! message) and stops for good when the timeout fires:
//!
//! * the interval is dropped, so no further ticks are observed;
//! * producers still in flight are aborted;
//! * messages already buffered are discarded without being printed.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::Local;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{info, warn};

use super::DemoError;
use crate::config::TickerConfig;
use crate::output::Output;

pub const STOPPED_NOTICE: &str = "The counter has been stopped.";
pub const MESSAGE_PREFIX: &str = "New Message - Time: ";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickerReport {
    /// Ticks observed before the timeout.
    pub ticks: usize,
    /// Messages that made it into the channel.
    pub produced: usize,
    /// Messages received and printed.
    pub consumed: usize,
    /// Messages left in the channel at timeout and dropped unprinted.
    pub discarded: usize,
    /// Set once the interval has been dropped.
    pub timer_stopped: bool,
}

fn timestamped_message() -> String {
    format!(
        "{MESSAGE_PREFIX}{}",
        Local::now().format("%Y-%m-%d %H:%M:%S%.3f %z")
    )
}

pub async fn run_ticker(
    config: &TickerConfig,
    out: Arc<dyn Output>,
) -> Result<TickerReport, DemoError> {
    let period = config.interval();
    // First tick after one full period, like a Go ticker.
    let mut ticker = time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let deadline = time::sleep(config.timeout());
    tokio::pin!(deadline);

    let (tx, mut rx) = mpsc::channel::<String>(1);
    let produced = Arc::new(AtomicUsize::new(0));
    let mut producers = JoinSet::new();
    let mut report = TickerReport::default();

    info!(?period, timeout = ?config.timeout(), "ticker started");

    loop {
        tokio::select! {
            // Timeout wins any tie so a late tick is never acted on.
            biased;

            _ = &mut deadline => break,

            _ = ticker.tick() => {
                report.ticks += 1;
                let tx = tx.clone();
                let produced = Arc::clone(&produced);
                producers.spawn(async move {
                    if tx.send(timestamped_message()).await.is_ok() {
                        produced.fetch_add(1, Ordering::Relaxed);
                    }
                });
            }

            Some(msg) = rx.recv() => {
                report.consumed += 1;
                out.line(msg);
            }

            Some(joined) = producers.join_next(), if !producers.is_empty() => {
                joined?;
            }
        }
    }

    drop(ticker);
    report.timer_stopped = true;

    if !producers.is_empty() {
        warn!(in_flight = producers.len(), "timeout fired, aborting producers");
    }
    producers.shutdown().await;

    drop(tx);
    rx.close();
    while rx.try_recv().is_ok() {
        report.discarded += 1;
    }
    report.produced = produced.load(Ordering::Relaxed);

    out.line(STOPPED_NOTICE.to_string());
    info!(?report, "ticker stopped");
    Ok(report)
}
