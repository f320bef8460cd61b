//! Message passing with `std::sync::mpsc`.

use std::io::{self, Write};
use std::sync::mpsc::{self, RecvTimeoutError, TrySendError};
use std::thread;
use std::time::Duration;

use super::section;
use crate::ui::Theme;

/// Producer → squarer → collector, each stage on its own thread.
fn square_pipeline(inputs: Vec<u32>) -> Vec<u32> {
    let (numbers_tx, numbers_rx) = mpsc::channel();
    let (squares_tx, squares_rx) = mpsc::channel();

    let producer = thread::spawn(move || {
        for n in inputs {
            if numbers_tx.send(n).is_err() {
                break;
            }
        }
    });

    let squarer = thread::spawn(move || {
        for n in numbers_rx {
            if squares_tx.send(n * n).is_err() {
                break;
            }
        }
    });

    // Receiving ends once every sender is dropped
    let results: Vec<u32> = squares_rx.iter().collect();
    let _ = producer.join();
    let _ = squarer.join();
    results
}

/// Several producers share one receiver by cloning the sender.
fn fan_in(producers: usize, per_producer: usize) -> Vec<(usize, usize)> {
    let (tx, rx) = mpsc::channel();
    let handles: Vec<_> = (0..producers)
        .map(|id| {
            let tx = tx.clone();
            thread::spawn(move || {
                for seq in 0..per_producer {
                    let _ = tx.send((id, seq));
                }
            })
        })
        .collect();
    drop(tx);

    let mut received: Vec<_> = rx.iter().collect();
    for handle in handles {
        let _ = handle.join();
    }
    received.sort_unstable();
    received
}

pub fn run(out: &mut dyn Write, t: &Theme) -> io::Result<()> {
    section(out, t, "1. Unbounded channel")?;
    let (tx, rx) = mpsc::channel();
    let sender = thread::spawn(move || {
        for word in ["hello", "from", "a", "thread"] {
            let _ = tx.send(word.to_string());
        }
    });
    let words: Vec<String> = rx.iter().collect();
    let _ = sender.join();
    writeln!(out, "received in order: {:?}", words)?;

    section(out, t, "2. Bounded sync_channel applies backpressure")?;
    let (tx, rx) = mpsc::sync_channel::<u32>(2);
    let mut accepted = Vec::new();
    for n in 1..=4 {
        match tx.try_send(n) {
            Ok(()) => accepted.push(n),
            Err(TrySendError::Full(v)) => {
                writeln!(out, "  buffer full, {} rejected by try_send", v)?
            }
            Err(TrySendError::Disconnected(_)) => break,
        }
    }
    writeln!(out, "accepted before full: {:?}", accepted)?;
    let drained: Vec<u32> = rx.try_iter().collect();
    writeln!(out, "drained: {:?}", drained)?;

    section(out, t, "3. Fan-in from several producers")?;
    let messages = fan_in(3, 2);
    writeln!(out, "{} messages, sorted: {:?}", messages.len(), messages)?;

    section(out, t, "4. Pipelines")?;
    writeln!(
        out,
        "squares of 1..=5: {:?}",
        square_pipeline((1..=5).collect())
    )?;

    section(out, t, "5. Timeouts and disconnection")?;
    let (tx, rx) = mpsc::channel::<&str>();
    match rx.recv_timeout(Duration::from_millis(10)) {
        Err(RecvTimeoutError::Timeout) => writeln!(out, "{}", t.warning("nothing within 10ms"))?,
        other => writeln!(out, "unexpected: {:?}", other)?,
    }
    drop(tx);
    match rx.recv() {
        Err(_) => writeln!(out, "recv after all senders dropped: disconnected")?,
        Ok(v) => writeln!(out, "unexpected value {}", v)?,
    }
    writeln!(
        out,
        "{}",
        t.info("Share memory by communicating through channels")
    )?;

    Ok(())
}
