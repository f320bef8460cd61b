//! Timeouts, deadlines and cooperative cancellation on a tokio runtime.

use std::future::Future;
use std::io::{self, Write};
use std::time::Duration;

use thiserror::Error;
use tokio::sync::{mpsc, watch};
use tokio::time::{self, Instant};

use super::section;
use crate::ui::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Completed,
    Cancelled,
    TimedOut,
}

/// Sleep for `duration` unless the cancel signal fires first.
async fn step(duration: Duration, mut cancel: watch::Receiver<bool>) -> Status {
    tokio::select! {
        _ = time::sleep(duration) => Status::Completed,
        _ = cancel.changed() => Status::Cancelled,
    }
}

async fn bounded(work: Duration, limit: Duration) -> Status {
    match time::timeout(limit, time::sleep(work)).await {
        Ok(()) => Status::Completed,
        Err(_) => Status::TimedOut,
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
enum ScopeError {
    #[error("deadline exceeded")]
    DeadlineExceeded,

    #[error("request cancelled")]
    Cancelled,
}

/// Values and limits carried by one request through its call tree.
#[derive(Debug, Clone)]
struct RequestScope {
    request_id: String,
    user_id: String,
    deadline: Instant,
    cancel: watch::Receiver<bool>,
}

impl RequestScope {
    fn new(request_id: &str, user_id: &str, budget: Duration) -> (Self, watch::Sender<bool>) {
        let (tx, rx) = watch::channel(false);
        let scope = Self {
            request_id: request_id.to_string(),
            user_id: user_id.to_string(),
            deadline: Instant::now() + budget,
            cancel: rx,
        };
        (scope, tx)
    }

    /// A child scope with a tighter deadline; never extends the parent's.
    fn child(&self, budget: Duration) -> Self {
        let mut child = self.clone();
        child.deadline = self.deadline.min(Instant::now() + budget);
        child
    }

    fn remaining(&self) -> Duration {
        self.deadline.saturating_duration_since(Instant::now())
    }

    async fn run<F: Future>(&self, fut: F) -> Result<F::Output, ScopeError> {
        let mut cancel = self.cancel.clone();
        if *cancel.borrow() {
            return Err(ScopeError::Cancelled);
        }
        tokio::select! {
            res = time::timeout_at(self.deadline, fut) => {
                res.map_err(|_| ScopeError::DeadlineExceeded)
            }
            _ = cancel.changed() => Err(ScopeError::Cancelled),
        }
    }
}

/// Producer task feeds numbers until told to stop; the consumer stops it
/// after `wanted` values. The flag reports whether the producer exited.
async fn cancellable_stream(wanted: usize) -> (Vec<u32>, bool) {
    let (stop_tx, mut stop_rx) = watch::channel(false);
    let (tx, mut rx) = mpsc::channel(4);

    let producer = tokio::spawn(async move {
        let mut n = 0u32;
        loop {
            tokio::select! {
                _ = stop_rx.changed() => break,
                sent = tx.send(n) => {
                    if sent.is_err() {
                        break;
                    }
                    n += 1;
                }
            }
        }
    });

    let mut received = Vec::with_capacity(wanted);
    while received.len() < wanted {
        match rx.recv().await {
            Some(n) => received.push(n),
            None => break,
        }
    }
    let _ = stop_tx.send(true);
    drop(rx);
    let stopped = producer.await.is_ok();
    (received, stopped)
}

fn label(status: Status) -> &'static str {
    match status {
        Status::Completed => "completed",
        Status::Cancelled => "cancelled",
        Status::TimedOut => "timed out",
    }
}

pub fn run(out: &mut dyn Write, t: &Theme) -> io::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    section(out, t, "1. Timeouts")?;
    let (fast, slow) = runtime.block_on(async {
        tokio::join!(
            bounded(Duration::from_millis(5), Duration::from_millis(100)),
            bounded(Duration::from_millis(500), Duration::from_millis(30)),
        )
    });
    writeln!(out, "fast operation (5ms, limit 100ms): {}", label(fast))?;
    writeln!(out, "slow operation (500ms, limit 30ms): {}", label(slow))?;

    section(out, t, "2. Cancelling through a watch channel")?;
    let statuses = runtime.block_on(async {
        let (cancel_tx, cancel_rx) = watch::channel(false);
        let short = step(Duration::from_millis(5), cancel_rx.clone());
        let long = step(Duration::from_millis(500), cancel_rx);
        let trigger = async move {
            time::sleep(Duration::from_millis(20)).await;
            let _ = cancel_tx.send(true);
        };
        let (short, long, ()) = tokio::join!(short, long, trigger);
        [short, long]
    });
    writeln!(out, "short task: {}", label(statuses[0]))?;
    writeln!(out, "long task: {}", label(statuses[1]))?;

    section(out, t, "3. Request scope with a deadline")?;
    let (scope, cancel) = RequestScope::new("req-456", "user-123", Duration::from_millis(60));
    writeln!(out, "request {} for {}", scope.request_id, scope.user_id)?;
    let (lookup, report) = runtime.block_on(async {
        let lookup = scope
            .run(async {
                time::sleep(Duration::from_millis(5)).await;
                "profile loaded"
            })
            .await;
        let report = scope.run(time::sleep(Duration::from_millis(500))).await;
        (lookup, report)
    });
    match lookup {
        Ok(msg) => writeln!(out, "  lookup: {}", t.success(msg))?,
        Err(e) => writeln!(out, "  lookup: {}", t.error(&e.to_string()))?,
    }
    match report {
        Ok(()) => writeln!(out, "  report: finished")?,
        Err(e) => writeln!(out, "  report: {}", t.error(&e.to_string()))?,
    }

    section(out, t, "4. Child scopes never outlive the parent")?;
    let (parent, _parent_cancel) =
        RequestScope::new("req-789", "user-123", Duration::from_millis(50));
    let child = parent.child(Duration::from_secs(10));
    writeln!(
        out,
        "child deadline within parent budget: {}",
        child.remaining() <= Duration::from_millis(50)
    )?;
    let _ = cancel.send(true);
    let after_cancel = runtime.block_on(scope.run(async { "late work" }));
    writeln!(out, "work after cancel: {:?}", after_cancel)?;

    section(out, t, "5. Stopping a producer task")?;
    let (received, stopped) = runtime.block_on(cancellable_stream(5));
    writeln!(out, "received {:?}, producer done: {}", received, stopped)?;
    writeln!(
        out,
        "{}",
        t.info("select! drops the losing branches, which cancels them")
    )?;

    Ok(())
}
