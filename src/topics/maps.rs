//! `HashMap`, `BTreeMap` and `HashSet`.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::io::{self, Write};

use super::section;
use crate::ui::Theme;

/// Count word occurrences, case-insensitively, sorted by word.
fn word_counts(text: &str) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for word in text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
    {
        *counts.entry(word.to_lowercase()).or_insert(0) += 1;
    }
    counts
}

/// Group words by their first letter.
fn group_by_initial<'a>(words: &[&'a str]) -> BTreeMap<char, Vec<&'a str>> {
    let mut groups: BTreeMap<char, Vec<&str>> = BTreeMap::new();
    for word in words {
        if let Some(initial) = word.chars().next() {
            groups.entry(initial).or_default().push(*word);
        }
    }
    groups
}

/// Swap keys and values.
fn invert(map: &HashMap<String, u32>) -> BTreeMap<u32, String> {
    map.iter().map(|(k, v)| (*v, k.clone())).collect()
}

pub fn run(out: &mut dyn Write, t: &Theme) -> io::Result<()> {
    section(out, t, "1. HashMap basics")?;
    let mut ages: HashMap<String, u32> = HashMap::new();
    ages.insert("alice".to_string(), 31);
    ages.insert("bob".to_string(), 27);
    ages.insert("carol".to_string(), 45);
    writeln!(out, "len = {}", ages.len())?;
    writeln!(out, "get(\"bob\") = {:?}", ages.get("bob"))?;
    writeln!(out, "get(\"dave\") = {:?}", ages.get("dave"))?;
    if let Some(age) = ages.get_mut("alice") {
        *age += 1;
    }
    writeln!(out, "alice after birthday = {}", ages["alice"])?;
    let removed = ages.remove("carol");
    writeln!(out, "remove(\"carol\") = {:?}", removed)?;
    writeln!(out, "still contains carol: {}", ages.contains_key("carol"))?;

    section(out, t, "2. Entry API")?;
    let counts = word_counts("the cat and the hat and THE bat");
    for (word, count) in &counts {
        writeln!(out, "  {:<4} {}", word, count)?;
    }
    let mut cache: HashMap<u32, u64> = HashMap::new();
    let value = *cache.entry(10).or_insert_with(|| (1..=10).product());
    writeln!(out, "computed once via or_insert_with: 10! = {}", value)?;

    section(out, t, "3. BTreeMap keeps keys ordered")?;
    let groups = group_by_initial(&["kiwi", "apple", "avocado", "banana", "kale"]);
    for (initial, words) in &groups {
        writeln!(out, "  {} -> {:?}", initial, words)?;
    }
    let range: Vec<_> = counts.range("b".to_string().."d".to_string()).collect();
    writeln!(out, "words in [b, d): {:?}", range)?;
    writeln!(out, "inverted ages: {:?}", invert(&ages))?;

    section(out, t, "4. HashSet")?;
    let a: HashSet<i32> = [1, 2, 3, 4].into_iter().collect();
    let b: HashSet<i32> = [3, 4, 5].into_iter().collect();
    let mut inter: Vec<_> = a.intersection(&b).copied().collect();
    let mut union: Vec<_> = a.union(&b).copied().collect();
    let mut diff: Vec<_> = a.difference(&b).copied().collect();
    inter.sort_unstable();
    union.sort_unstable();
    diff.sort_unstable();
    writeln!(out, "a ∩ b = {:?}", inter)?;
    writeln!(out, "a ∪ b = {:?}", union)?;
    writeln!(out, "a - b = {:?}", diff)?;
    writeln!(
        out,
        "{}",
        t.warning("HashMap order is unspecified; BTreeMap keeps keys sorted")
    )?;

    Ok(())
}
