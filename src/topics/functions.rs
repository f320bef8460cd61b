//! Functions, closures and higher-order functions.

use std::io::{self, Write};

use super::section;
use crate::ui::Theme;

fn add(a: i32, b: i32) -> i32 {
    a + b
}

/// Multiple return values come back as a tuple.
fn div_mod(a: i32, b: i32) -> Option<(i32, i32)> {
    if b == 0 {
        None
    } else {
        Some((a / b, a % b))
    }
}

/// Variadic-style input is just a slice.
fn sum_all(values: &[i32]) -> i32 {
    values.iter().sum()
}

fn apply_twice(f: impl Fn(i32) -> i32, x: i32) -> i32 {
    f(f(x))
}

/// Returns a closure that remembers `step`.
fn make_adder(step: i32) -> impl Fn(i32) -> i32 {
    move |x| x + step
}

/// Returns a stateful closure; each call yields the next value.
fn make_counter() -> impl FnMut() -> u32 {
    let mut count = 0;
    move || {
        count += 1;
        count
    }
}

fn factorial(n: u64) -> u64 {
    if n <= 1 {
        1
    } else {
        n * factorial(n - 1)
    }
}

fn compose<A, B, C>(f: impl Fn(A) -> B, g: impl Fn(B) -> C) -> impl Fn(A) -> C {
    move |x| g(f(x))
}

pub fn run(out: &mut dyn Write, t: &Theme) -> io::Result<()> {
    section(out, t, "1. Plain functions")?;
    writeln!(out, "add(2, 3) = {}", add(2, 3))?;
    match div_mod(17, 5) {
        Some((q, r)) => writeln!(out, "div_mod(17, 5) = ({}, {})", q, r)?,
        None => writeln!(out, "division by zero")?,
    }
    writeln!(out, "div_mod(1, 0) = {:?}", div_mod(1, 0))?;
    writeln!(out, "sum_all(&[1, 2, 3, 4]) = {}", sum_all(&[1, 2, 3, 4]))?;

    section(out, t, "2. Closures capture their environment")?;
    let factor = 3;
    let triple = |x: i32| x * factor;
    writeln!(out, "triple(7) = {}", triple(7))?;
    let add5 = make_adder(5);
    writeln!(out, "make_adder(5)(10) = {}", add5(10))?;

    section(out, t, "3. Fn, FnMut and FnOnce")?;
    let mut next = make_counter();
    let ticks: Vec<u32> = (0..3).map(|_| next()).collect();
    writeln!(out, "counter ticks: {:?}", ticks)?;
    let name = String::from("moved string");
    let consume = move || name.len();
    writeln!(
        out,
        "FnOnce-style closure owns its capture: len = {}",
        consume()
    )?;

    section(out, t, "4. Higher-order functions")?;
    writeln!(
        out,
        "apply_twice(add 5, 1) = {}",
        apply_twice(make_adder(5), 1)
    )?;
    let double_then_inc = compose(|x: i32| x * 2, |x: i32| x + 1);
    writeln!(out, "compose(*2, +1)(10) = {}", double_then_inc(10))?;
    let ops: [(&str, fn(i32, i32) -> i32); 2] = [("add", add), ("max", std::cmp::max)];
    for (label, op) in ops {
        writeln!(out, "fn pointer {}(4, 9) = {}", label, op(4, 9))?;
    }

    section(out, t, "5. Recursion")?;
    writeln!(out, "factorial(10) = {}", factorial(10))?;
    writeln!(
        out,
        "{}",
        t.info("Prefer iterators where recursion depth is unbounded")
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_div_mod() {
        assert_eq!(div_mod(17, 5), Some((3, 2)));
        assert_eq!(div_mod(1, 0), None);
    }

    #[test]
    fn test_closures() {
        assert_eq!(make_adder(2)(3), 5);
        assert_eq!(apply_twice(|x| x * 3, 2), 18);
        assert_eq!(compose(|x: i32| x - 1, |x: i32| x * 10)(3), 20);
    }

    #[test]
    fn test_counter_keeps_state() {
        let mut c = make_counter();
        assert_eq!(c(), 1);
        assert_eq!(c(), 2);
        assert_eq!(c(), 3);
    }

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0), 1);
        assert_eq!(factorial(5), 120);
    }

    #[test]
    fn test_output() {
        let text = super::super::capture(run);
        assert!(text.contains("div_mod(17, 5) = (3, 2)"));
        assert!(text.contains("counter ticks: [1, 2, 3]"));
        assert!(text.contains("factorial(10) = 3628800"));
    }
}
