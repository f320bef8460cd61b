//! Topic registry for the command-line dispatcher.
//!
//! Holds the ordered list of known topics. Insertion order is the order
//! topics appear in the help listing and the order `all` runs them in.

use std::fmt;

use thiserror::Error;
use tracing::trace;

use super::dispatch::ALL_TOPIC;

/// Errors raised while building a registry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A topic with this key is already registered.
    #[error("topic '{0}' is already registered")]
    DuplicateKey(String),

    /// Topic keys must be non-empty.
    #[error("topic key cannot be empty")]
    EmptyKey,

    /// The key is reserved for a meta-topic and can never be dispatched.
    #[error("topic key '{0}' is reserved")]
    ReservedKey(String),
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;

/// A runnable topic.
pub struct CommandEntry {
    /// Unique, case-sensitive identifier typed on the command line.
    key: String,
    /// One-line summary shown in the help listing.
    description: String,
    /// The work performed when the topic is selected.
    action: Box<dyn Fn()>,
}

impl CommandEntry {
    /// The topic key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The one-line description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Invoke the topic's action.
    pub fn run(&self) {
        trace!(topic = %self.key, "invoking action");
        (self.action)();
    }
}

impl fmt::Debug for CommandEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandEntry")
            .field("key", &self.key)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Ordered collection of topics.
///
/// Built once at startup and only shared by reference afterwards.
#[derive(Debug, Default)]
pub struct Registry {
    entries: Vec<CommandEntry>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a topic.
    ///
    /// # Errors
    ///
    /// Fails without modifying the registry if the key is empty, reserved,
    /// or already taken.
    pub fn register(
        &mut self,
        key: impl Into<String>,
        description: impl Into<String>,
        action: impl Fn() + 'static,
    ) -> Result<()> {
        let key = key.into();

        if key.is_empty() {
            return Err(RegistryError::EmptyKey);
        }
        if key == ALL_TOPIC {
            return Err(RegistryError::ReservedKey(key));
        }
        if self.lookup(&key).is_some() {
            return Err(RegistryError::DuplicateKey(key));
        }

        self.entries.push(CommandEntry {
            key,
            description: description.into(),
            action: Box::new(action),
        });
        Ok(())
    }

    /// Find a topic by exact, case-sensitive key.
    pub fn lookup(&self, key: &str) -> Option<&CommandEntry> {
        self.entries.iter().find(|entry| entry.key == key)
    }

    /// All topics in registration order.
    pub fn all(&self) -> &[CommandEntry] {
        &self.entries
    }

    /// Number of registered topics.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no topics are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn noop() {}

    fn keys(registry: &Registry) -> Vec<&str> {
        registry.all().iter().map(|e| e.key()).collect()
    }

    #[test]
    fn test_new_registry_is_empty() {
        let registry = Registry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.all().is_empty());
    }

    #[test]
    fn test_lookup_after_register() {
        let mut registry = Registry::new();
        registry
            .register("pointers", "Pointer examples", noop)
            .unwrap();

        let entry = registry.lookup("pointers").unwrap();
        assert_eq!(entry.key(), "pointers");
        assert_eq!(entry.description(), "Pointer examples");
    }

    #[test]
    fn test_lookup_runs_the_registered_action() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);

        let mut registry = Registry::new();
        registry
            .register("json", "JSON examples", move || {
                counter.set(counter.get() + 1)
            })
            .unwrap();

        registry.lookup("json").unwrap().run();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let mut registry = Registry::new();
        registry.register("json", "JSON examples", noop).unwrap();

        assert!(registry.lookup("JSON").is_none());
        assert!(registry.lookup("json ").is_none());
    }

    #[test]
    fn test_lookup_missing_returns_none() {
        let registry = Registry::new();
        assert!(registry.lookup("nothing").is_none());
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let mut registry = Registry::new();
        registry.register("maps", "Map examples", noop).unwrap();

        let err = registry
            .register("maps", "Other map examples", noop)
            .unwrap_err();
        assert_eq!(err, RegistryError::DuplicateKey("maps".to_string()));

        // Original entry survives untouched
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.lookup("maps").unwrap().description(),
            "Map examples"
        );
    }

    #[test]
    fn test_empty_key_rejected() {
        let mut registry = Registry::new();
        let err = registry.register("", "Nothing", noop).unwrap_err();
        assert_eq!(err, RegistryError::EmptyKey);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_reserved_key_rejected() {
        let mut registry = Registry::new();
        let err = registry.register("all", "Everything", noop).unwrap_err();
        assert_eq!(err, RegistryError::ReservedKey("all".to_string()));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_all_preserves_registration_order() {
        let mut registry = Registry::new();
        for key in ["c", "a", "b"] {
            registry.register(key, "x", noop).unwrap();
        }

        assert_eq!(keys(&registry), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_failed_register_keeps_order() {
        let mut registry = Registry::new();
        registry.register("a", "x", noop).unwrap();
        registry.register("b", "x", noop).unwrap();
        assert!(registry.register("a", "x", noop).is_err());
        registry.register("c", "x", noop).unwrap();

        assert_eq!(keys(&registry), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            RegistryError::DuplicateKey("io".to_string()).to_string(),
            "topic 'io' is already registered"
        );
        assert_eq!(
            RegistryError::EmptyKey.to_string(),
            "topic key cannot be empty"
        );
    }

    #[test]
    fn test_entry_debug_omits_action() {
        let mut registry = Registry::new();
        registry.register("os", "OS examples", noop).unwrap();

        let debug = format!("{:?}", registry.lookup("os").unwrap());
        assert!(debug.contains("\"os\""));
        assert!(debug.contains("OS examples"));
    }
}
