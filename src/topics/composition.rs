//! Composition over inheritance: embedding, delegation and `Deref`.

use std::collections::HashMap;
use std::io::{self, Write};
use std::ops::{Deref, DerefMut};

use super::section;
use crate::ui::Theme;

#[derive(Debug, Default)]
struct Logger {
    lines: Vec<String>,
}

impl Logger {
    fn log(&mut self, message: &str) {
        self.lines.push(message.to_string());
    }
}

/// A service that *has* a logger and forwards to it explicitly.
#[derive(Debug, Default)]
struct UserService {
    logger: Logger,
    users: Vec<String>,
}

impl UserService {
    fn add(&mut self, name: &str) {
        self.users.push(name.to_string());
        self.logger.log(&format!("added {}", name));
    }
}

/// Wrapper that exposes every `Vec` method through `Deref`.
#[derive(Debug, Default)]
struct History {
    entries: Vec<String>,
    limit: usize,
}

impl History {
    fn with_limit(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            limit,
        }
    }

    /// Shadows `Vec::push` to enforce the limit.
    fn push(&mut self, entry: &str) {
        if self.entries.len() == self.limit {
            self.entries.remove(0);
        }
        self.entries.push(entry.to_string());
    }
}

impl Deref for History {
    type Target = Vec<String>;

    fn deref(&self) -> &Self::Target {
        &self.entries
    }
}

impl DerefMut for History {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.entries
    }
}

/// Shared behavior through trait default methods.
trait Storage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);

    fn get_or(&self, key: &str, fallback: &str) -> String {
        self.get(key).unwrap_or_else(|| fallback.to_string())
    }

    fn increment(&mut self, key: &str) -> u64 {
        let next = self
            .get(key)
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(0)
            + 1;
        self.set(key, &next.to_string());
        next
    }
}

#[derive(Default)]
struct MemoryStore {
    data: HashMap<String, String>,
}

impl Storage for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.data.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.data.insert(key.to_string(), value.to_string());
    }
}

/// Composes a store and a logger into a cache with both behaviors.
struct LoggedCache<S: Storage> {
    store: S,
    logger: Logger,
}

impl<S: Storage> Storage for LoggedCache<S> {
    fn get(&self, key: &str) -> Option<String> {
        self.store.get(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        self.logger.log(&format!("set {}={}", key, value));
        self.store.set(key, value);
    }
}

pub fn run(out: &mut dyn Write, t: &Theme) -> io::Result<()> {
    section(out, t, "1. Has-a composition with explicit delegation")?;
    let mut service = UserService::default();
    service.add("alice");
    service.add("bob");
    writeln!(out, "users: {:?}", service.users)?;
    writeln!(out, "log: {:?}", service.logger.lines)?;

    section(out, t, "2. Deref exposes the inner type's methods")?;
    let mut history = History::with_limit(3);
    for cmd in ["ls", "cd src", "cargo build", "cargo test"] {
        history.push(cmd);
    }
    writeln!(out, "len() via Deref: {}", history.len())?;
    writeln!(out, "last() via Deref: {:?}", history.last())?;
    writeln!(
        out,
        "contains(\"ls\"): {}",
        history.contains(&"ls".to_string())
    )?;
    history.sort();
    writeln!(out, "sorted through DerefMut: {:?}", *history)?;

    section(out, t, "3. Default methods as shared behavior")?;
    let mut store = MemoryStore::default();
    store.increment("visits");
    store.increment("visits");
    writeln!(out, "visits = {}", store.get_or("visits", "0"))?;
    writeln!(out, "missing = {}", store.get_or("missing", "n/a"))?;

    section(out, t, "4. Layering behavior by wrapping")?;
    let mut cache = LoggedCache {
        store: MemoryStore::default(),
        logger: Logger::default(),
    };
    cache.set("theme", "dark");
    cache.increment("hits");
    let theme = cache.get_or("theme", "?");
    let hits = cache.get_or("hits", "0");
    writeln!(out, "theme = {}, hits = {}", theme, hits)?;
    writeln!(out, "cache log: {:?}", cache.logger.lines)?;
    writeln!(
        out,
        "{}",
        t.warning("Deref is for smart-pointer wrappers, not inheritance")
    )?;

    Ok(())
}
