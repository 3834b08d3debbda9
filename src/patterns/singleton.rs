//! Singleton pattern: one process-wide counter.
//!
//! The instance is created on first access and lives until the process exits;
//! there is no reset. The count is atomic, so the shared instance can be used
//! from any thread.

use crate::config::DemoConfig;
use crate::error::PatternResult;
use lazy_static::lazy_static;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug)]
pub struct Counter {
    count: AtomicU64,
}

lazy_static! {
    static ref COUNTER: Counter = Counter {
        count: AtomicU64::new(0),
    };
}

impl Counter {
    pub fn instance() -> &'static Counter {
        &COUNTER
    }

    /// Increments and returns the new value.
    pub fn count_up(&self) -> u64 {
        self.count.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn count(&self) -> u64 {
        self.count.load(Ordering::SeqCst)
    }
}

pub fn demo(_config: &DemoConfig) -> PatternResult<Vec<String>> {
    let counter_1 = Counter::instance();
    let first = counter_1.count_up();

    let counter_2 = Counter::instance();
    let second = counter_2.count_up();

    Ok(vec![
        format!("counter_1 after count_up: {}", first),
        format!("counter_2 after count_up: {}", second),
        format!("same instance: {}", std::ptr::eq(counter_1, counter_2)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_instance_is_shared() {
        let a = Counter::instance();
        let b = Counter::instance();
        assert!(std::ptr::eq(a, b));

        let first = a.count_up();
        let second = b.count_up();
        assert!(second > first);
        assert!(a.count() >= second);
    }

    #[test]
    fn test_concurrent_count_up() {
        let before = Counter::instance().count();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                thread::spawn(|| {
                    for _ in 0..100 {
                        Counter::instance().count_up();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert!(Counter::instance().count() >= before + 400);
    }
}
