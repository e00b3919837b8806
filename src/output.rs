//! Line-oriented console sink shared by concurrent tasks.

use std::sync::{Mutex, PoisonError};

/// Destination for the plain-text lines a demo prints.
pub trait Output: Send + Sync {
    fn line(&self, text: String);
}

/// Prints every line to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct Stdout;

impl Output for Stdout {
    fn line(&self, text: String) {
        println!("{text}");
    }
}

/// Keeps lines in arrival order so callers can inspect them afterwards.
#[derive(Debug, Default)]
pub struct Recorder {
    lines: Mutex<Vec<String>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn count_matching(&self, pred: impl Fn(&str) -> bool) -> usize {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|line| pred(line))
            .count()
    }
}

impl Output for Recorder {
    fn line(&self, text: String) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn recorder_keeps_order_for_single_writer() {
        let rec = Recorder::new();
        rec.line("a".into());
        rec.line("b".into());
        assert_eq!(rec.lines(), vec!["a", "b"]);
    }

    #[test]
    fn recorder_collects_from_many_threads() {
        let rec = Arc::new(Recorder::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let rec = Arc::clone(&rec);
                thread::spawn(move || rec.line(format!("thread {i}")))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(rec.lines().len(), 8);
        assert_eq!(rec.count_matching(|l| l.starts_with("thread")), 8);
    }
}
