//! `Drop` order, scope guards and recovering from panics.

use std::cell::RefCell;
use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe};

use super::section;
use crate::ui::Theme;

/// Records its name into a shared log when dropped.
struct Noisy<'a> {
    name: &'static str,
    log: &'a RefCell<Vec<String>>,
}

impl<'a> Noisy<'a> {
    fn new(name: &'static str, log: &'a RefCell<Vec<String>>) -> Self {
        Self { name, log }
    }
}

impl Drop for Noisy<'_> {
    fn drop(&mut self) {
        self.log.borrow_mut().push(format!("drop {}", self.name));
    }
}

/// Runs a closure when it goes out of scope, unless defused.
struct Guard<F: FnOnce()> {
    on_exit: Option<F>,
}

impl<F: FnOnce()> Guard<F> {
    fn new(on_exit: F) -> Self {
        Self {
            on_exit: Some(on_exit),
        }
    }

    fn defuse(mut self) {
        self.on_exit = None;
    }
}

impl<F: FnOnce()> Drop for Guard<F> {
    fn drop(&mut self) {
        if let Some(f) = self.on_exit.take() {
            f();
        }
    }
}

/// Drop order for locals: reverse declaration order.
fn drop_order() -> Vec<String> {
    let log = RefCell::new(Vec::new());
    {
        let _first = Noisy::new("first", &log);
        let _second = Noisy::new("second", &log);
        let _third = Noisy::new("third", &log);
        log.borrow_mut().push("end of scope".to_string());
    }
    log.into_inner()
}

/// Divide, turning a panic into an error message.
fn safe_divide(a: i32, b: i32) -> Result<i32, String> {
    catch_quietly(|| a / b)
}

/// `catch_unwind` with the default panic message suppressed.
fn catch_quietly<T>(f: impl FnOnce() -> T) -> Result<T, String> {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(|_| {}));
    let result = panic::catch_unwind(AssertUnwindSafe(f));
    panic::set_hook(previous);

    result.map_err(|payload| {
        payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string())
    })
}

/// A transaction that rolls back unless committed.
fn transfer(balance: &RefCell<i64>, amount: i64, commit: bool) {
    let before = *balance.borrow();
    *balance.borrow_mut() -= amount;
    let rollback = Guard::new(|| *balance.borrow_mut() = before);
    if commit {
        rollback.defuse();
    }
}

pub fn run(out: &mut dyn Write, t: &Theme) -> io::Result<()> {
    section(out, t, "1. Drop runs in reverse declaration order")?;
    for line in drop_order() {
        writeln!(out, "  {}", line)?;
    }

    section(out, t, "2. Explicit drop")?;
    let log = RefCell::new(Vec::new());
    let early = Noisy::new("early", &log);
    drop(early);
    log.borrow_mut().push("after drop(early)".to_string());
    for line in log.borrow().iter() {
        writeln!(out, "  {}", line)?;
    }

    section(out, t, "3. Scope guards")?;
    let balance = RefCell::new(100);
    transfer(&balance, 30, true);
    writeln!(
        out,
        "committed transfer of 30: balance = {}",
        balance.borrow()
    )?;
    transfer(&balance, 50, false);
    writeln!(
        out,
        "rolled-back transfer of 50: balance = {}",
        balance.borrow()
    )?;

    section(out, t, "4. Recovering from a panic")?;
    writeln!(out, "safe_divide(10, 2) = {:?}", safe_divide(10, 2))?;
    match safe_divide(1, 0) {
        Ok(v) => writeln!(out, "unexpected value {}", v)?,
        Err(msg) => {
            let message = format!("recovered from panic: {}", msg);
            writeln!(out, "{}", t.error(&message))?
        }
    }
    let custom = catch_quietly::<i32>(|| panic!("custom failure {}", 42));
    writeln!(out, "custom panic payload: {:?}", custom)?;
    writeln!(
        out,
        "{}",
        t.info("Panics are for bugs; return Result for expected failures")
    )?;

    Ok(())
}
