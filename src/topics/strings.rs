//! Formatting with `format!` and working with UTF-8 strings.

use std::fmt;
use std::io::{self, Write};

use super::section;
use crate::ui::Theme;

#[derive(Debug)]
struct Point {
    x: f64,
    y: f64,
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Respect a precision given by the caller, e.g. `{:.1}`
        match f.precision() {
            Some(p) => write!(f, "({:.*}, {:.*})", p, self.x, p, self.y),
            None => write!(f, "({}, {})", self.x, self.y),
        }
    }
}

/// Reverse by Unicode scalar values, not bytes.
fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

/// Capitalize the first character of every whitespace-separated word.
fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render a simple fixed-width table row.
fn table_row(name: &str, qty: u32, price: f64) -> String {
    format!("| {:<10} | {:>5} | {:>8.2} |", name, qty, price)
}

pub fn run(out: &mut dyn Write, t: &Theme) -> io::Result<()> {
    section(out, t, "1. Format specifiers")?;
    let n = 255;
    writeln!(
        out,
        "decimal {0}, hex {0:x}, HEX {0:#X}, octal {0:o}, binary {0:#b}",
        n
    )?;
    let pi = std::f64::consts::PI;
    writeln!(out, "pi = {0:.2}, {0:10.4}|, {0:<10.3}|, {0:+e}", pi)?;
    writeln!(out, "padding: [{0:>6}] [{0:<6}] [{0:^6}] [{0:*^6}]", "ab")?;
    writeln!(out, "zero pad: {:05}", 42)?;
    writeln!(out, "width from arg: {:>width$}", "x", width = 4)?;
    let name = "Ferris";
    writeln!(out, "inline captured identifiers: hello {name}!")?;

    section(out, t, "2. Display vs Debug")?;
    let p = Point { x: 1.5, y: -2.25 };
    writeln!(out, "Display: {}", p)?;
    writeln!(out, "Display with precision: {:.1}", p)?;
    writeln!(out, "Debug: {:?}", p)?;
    writeln!(out, "Pretty Debug:\n{:#?}", p)?;

    section(out, t, "3. String and &str")?;
    let mut owned = String::from("hello");
    owned.push_str(", world");
    owned.push('!');
    let slice: &str = &owned[..5];
    writeln!(out, "owned = {:?}, slice = {:?}", owned, slice)?;
    let joined = ["a", "b", "c"].join("-");
    writeln!(out, "join: {}, concat: {}", joined, ["x", "y"].concat())?;
    writeln!(
        out,
        "title_case(\"the rust book\") = {}",
        title_case("the rust book")
    )?;

    section(out, t, "4. UTF-8: bytes and chars")?;
    let word = "héllo";
    writeln!(
        out,
        "{:?}: {} bytes, {} chars",
        word,
        word.len(),
        word.chars().count()
    )?;
    writeln!(out, "reverse({:?}) = {:?}", word, reverse(word))?;
    writeln!(
        out,
        "get(0..2) = {:?} (not a char boundary)",
        word.get(0..2)
    )?;
    writeln!(out, "get(0..3) = {:?}", word.get(0..3))?;

    section(out, t, "5. Building tables")?;
    writeln!(out, "| {:<10} | {:>5} | {:>8} |", "Item", "Qty", "Price")?;
    for (item, qty, price) in [("coffee", 2, 3.5), ("bagel", 12, 1.25)] {
        writeln!(out, "{}", table_row(item, qty, price))?;
    }
    writeln!(
        out,
        "{}",
        t.info("Use {:?} to see quotes and escapes while debugging")
    )?;

    Ok(())
}
