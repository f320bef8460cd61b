//! OS threads and shared state.

use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, RwLock};
use std::thread;
use std::time::Duration;

use super::section;
use crate::ui::Theme;

/// Sum a slice by splitting it across scoped threads.
fn parallel_sum(values: &[u64], workers: usize) -> u64 {
    if values.is_empty() {
        return 0;
    }
    let workers = workers.max(1);
    let chunk = (values.len() + workers - 1) / workers;
    thread::scope(|s| {
        let handles: Vec<_> = values
            .chunks(chunk)
            .map(|part| s.spawn(move || part.iter().sum::<u64>()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap_or(0)).sum()
    })
}

/// Increment a shared counter from several threads.
fn mutex_counter(threads: usize, per_thread: usize) -> usize {
    let counter = Arc::new(Mutex::new(0));
    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let counter = Arc::clone(&counter);
            thread::spawn(move || {
                for _ in 0..per_thread {
                    if let Ok(mut n) = counter.lock() {
                        *n += 1;
                    }
                }
            })
        })
        .collect();
    for handle in handles {
        let _ = handle.join();
    }
    Arc::try_unwrap(counter)
        .ok()
        .and_then(|m| m.into_inner().ok())
        .unwrap_or(0)
}

/// The same count with an atomic instead of a lock.
fn atomic_counter(threads: usize, per_thread: usize) -> usize {
    let counter = AtomicUsize::new(0);
    thread::scope(|s| {
        for _ in 0..threads {
            s.spawn(|| {
                for _ in 0..per_thread {
                    counter.fetch_add(1, Ordering::Relaxed);
                }
            });
        }
    });
    counter.into_inner()
}

pub fn run(out: &mut dyn Write, t: &Theme) -> io::Result<()> {
    section(out, t, "1. Spawning and joining")?;
    let handles: Vec<_> = (1..=3)
        .map(|id| {
            thread::spawn(move || {
                thread::sleep(Duration::from_millis(5 * (4 - id)));
                format!("worker {} finished", id)
            })
        })
        .collect();
    for handle in handles {
        match handle.join() {
            Ok(message) => writeln!(out, "  {}", message)?,
            Err(_) => writeln!(out, "{}", t.error("worker panicked"))?,
        }
    }
    writeln!(
        out,
        "{}",
        t.dim("join() order is the order we wait, not finish order")
    )?;

    section(out, t, "2. Scoped threads borrow local data")?;
    let data: Vec<u64> = (1..=1000).collect();
    writeln!(
        out,
        "parallel_sum(1..=1000, 4 workers) = {}",
        parallel_sum(&data, 4)
    )?;

    section(out, t, "3. Arc<Mutex<T>>")?;
    writeln!(
        out,
        "mutex counter (4 threads x 1000) = {}",
        mutex_counter(4, 1000)
    )?;

    section(out, t, "4. Atomics")?;
    writeln!(
        out,
        "atomic counter (4 threads x 1000) = {}",
        atomic_counter(4, 1000)
    )?;

    section(out, t, "5. RwLock for read-heavy data")?;
    let config = Arc::new(RwLock::new(vec!["alpha".to_string()]));
    let readers: Vec<_> = (0..3)
        .map(|i| {
            let config = Arc::clone(&config);
            thread::spawn(move || {
                let len = config.read().map(|c| c.len()).unwrap_or(0);
                (i, len)
            })
        })
        .collect();
    for reader in readers {
        if let Ok((i, len)) = reader.join() {
            writeln!(out, "  reader {} saw {} entries", i, len)?;
        }
    }
    if let Ok(mut c) = config.write() {
        c.push("beta".to_string());
    }
    let entries = config.read().map(|c| c.join(", ")).unwrap_or_default();
    writeln!(out, "after write: [{}]", entries)?;
    writeln!(
        out,
        "{}",
        t.success("Send and Sync make data races a compile error")
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallel_sum() {
        let data: Vec<u64> = (1..=100).collect();
        assert_eq!(parallel_sum(&data, 3), 5050);
        assert_eq!(parallel_sum(&data, 0), 5050);
        assert_eq!(parallel_sum(&[], 4), 0);
    }

    #[test]
    fn test_counters_agree() {
        assert_eq!(mutex_counter(3, 100), 300);
        assert_eq!(atomic_counter(3, 100), 300);
    }

    #[test]
    fn test_output() {
        let text = super::super::capture(run);
        assert!(text.contains("parallel_sum(1..=1000, 4 workers) = 500500"));
        assert!(text.contains("worker 1 finished"));
        assert!(text.contains("after write: [alpha, beta]"));
    }
}
