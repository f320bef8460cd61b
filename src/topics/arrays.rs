//! Arrays, slices and vectors.

use std::io::{self, Write};

use super::section;
use crate::ui::Theme;

/// Largest value in a slice, or `None` for an empty one.
fn largest(values: &[i32]) -> Option<i32> {
    values.iter().copied().max()
}

/// Remove every element matching `pred` in place, keeping order.
fn remove_if(values: &mut Vec<i32>, pred: impl Fn(i32) -> bool) {
    values.retain(|&v| !pred(v));
}

/// Sums of each sliding window of `size` elements.
fn window_sums(values: &[i32], size: usize) -> Vec<i32> {
    if size == 0 {
        return Vec::new();
    }
    values.windows(size).map(|w| w.iter().sum()).collect()
}

pub fn run(out: &mut dyn Write, t: &Theme) -> io::Result<()> {
    section(out, t, "1. Fixed-size arrays")?;
    let primes = [2, 3, 5, 7, 11];
    let zeros = [0u8; 4];
    writeln!(out, "primes = {:?} (len {})", primes, primes.len())?;
    writeln!(out, "zeros = {:?}", zeros)?;
    let mut copy = primes;
    copy[0] = 100;
    writeln!(out, "arrays are Copy: {} vs {}", primes[0], copy[0])?;
    let grid = [[1, 2, 3], [4, 5, 6]];
    writeln!(out, "2D array: {:?}", grid)?;

    section(out, t, "2. Slices borrow a view")?;
    let middle = &primes[1..4];
    writeln!(out, "&primes[1..4] = {:?}", middle)?;
    let (first, last) = (middle.first(), middle.last());
    writeln!(out, "first = {:?}, last = {:?}", first, last)?;
    writeln!(out, "largest(&primes) = {:?}", largest(&primes))?;
    writeln!(out, "largest(&[]) = {:?}", largest(&[]))?;
    if let [head, rest @ ..] = &primes[..] {
        writeln!(out, "slice pattern: head = {}, rest = {:?}", head, rest)?;
    }

    section(out, t, "3. Vec growth")?;
    let mut v: Vec<i32> = Vec::with_capacity(2);
    for i in 1..=5 {
        v.push(i * 10);
        let (len, capacity) = (v.len(), v.capacity());
        writeln!(out, "push {:>2}: len = {}, cap = {}", i * 10, len, capacity)?;
    }
    v.extend_from_slice(&[60, 70]);
    v.insert(0, 5);
    writeln!(out, "after extend + insert: {:?}", v)?;
    remove_if(&mut v, |x| x % 20 == 0);
    writeln!(out, "after removing multiples of 20: {:?}", v)?;

    section(out, t, "4. Windows and chunks")?;
    let data = [1, 2, 3, 4, 5, 6, 7];
    writeln!(out, "window sums (3): {:?}", window_sums(&data, 3))?;
    let chunks: Vec<&[i32]> = data.chunks(3).collect();
    writeln!(out, "chunks(3): {:?}", chunks)?;

    section(out, t, "5. Sorting, dedup and iterators")?;
    let mut words = vec!["pear", "apple", "fig", "apple", "banana"];
    words.sort_unstable();
    words.dedup();
    writeln!(out, "sorted + dedup: {:?}", words)?;
    words.sort_by_key(|w| w.len());
    writeln!(out, "by length: {:?}", words)?;
    let evens_squared: Vec<i32> = (1..=10).filter(|n| n % 2 == 0).map(|n| n * n).collect();
    writeln!(out, "even squares: {:?}", evens_squared)?;
    let (small, big): (Vec<i32>, Vec<i32>) = data.iter().copied().partition(|&n| n < 4);
    writeln!(out, "partition < 4: {:?} / {:?}", small, big)?;
    writeln!(
        out,
        "{}",
        t.success("Slices work for arrays and vectors alike")
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_largest() {
        assert_eq!(largest(&[3, 9, 1]), Some(9));
        assert_eq!(largest(&[]), None);
    }

    #[test]
    fn test_remove_if_keeps_order() {
        let mut v = vec![1, 2, 3, 4, 5, 6];
        remove_if(&mut v, |x| x % 2 == 0);
        assert_eq!(v, vec![1, 3, 5]);
    }

    #[test]
    fn test_window_sums() {
        assert_eq!(window_sums(&[1, 2, 3, 4], 2), vec![3, 5, 7]);
        assert!(window_sums(&[1, 2], 3).is_empty());
        assert!(window_sums(&[1, 2], 0).is_empty());
    }

    #[test]
    fn test_output() {
        let text = super::super::capture(run);
        assert!(text.contains("&primes[1..4] = [3, 5, 7]"));
        assert!(text.contains("dedup: [\"apple\", \"banana\", \"fig\", \"pear\"]"));
        assert!(text.contains("after removing multiples of 20: [5, 10, 30, 50, 70]"));
    }
}
