//! Resolves a requested topic against the registry.

use std::process::ExitCode;

use tracing::{debug, info};

use super::registry::Registry;

/// Meta-topic that runs every registered topic in order.
pub const ALL_TOPIC: &str = "all";

/// Exit status reported for an unknown topic.
pub const USAGE_ERROR: u8 = 2;

/// Result of dispatching a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No topic was supplied.
    ShowHelp,
    /// The named topic ran.
    RanOne(String),
    /// Every topic ran; holds how many.
    RanAll(usize),
    /// The supplied topic is not registered.
    UnknownTopic(String),
}

impl Outcome {
    /// Process exit code for this outcome.
    ///
    /// An unknown topic is a usage error, so scripts can tell it apart from
    /// an explicit request for help.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Outcome::ShowHelp | Outcome::RanOne(_) | Outcome::RanAll(_) => ExitCode::SUCCESS,
            Outcome::UnknownTopic(_) => ExitCode::from(USAGE_ERROR),
        }
    }

    /// Whether the caller should print the help listing.
    pub fn wants_help(&self) -> bool {
        matches!(self, Outcome::ShowHelp | Outcome::UnknownTopic(_))
    }
}

/// Turns requests into action invocations.
pub struct Dispatcher<'a> {
    registry: &'a Registry,
    separator: Option<Box<dyn Fn() + 'a>>,
}

impl<'a> Dispatcher<'a> {
    /// Create a dispatcher over a registry.
    pub fn new(registry: &'a Registry) -> Self {
        Self {
            registry,
            separator: None,
        }
    }

    /// Run `separator` between consecutive topics in `all` mode.
    pub fn with_separator(mut self, separator: impl Fn() + 'a) -> Self {
        self.separator = Some(Box::new(separator));
        self
    }

    /// Dispatch one request.
    ///
    /// Actions run synchronously on the calling thread. A panic inside an
    /// action is not caught, so in `all` mode it stops the remaining topics.
    pub fn dispatch(&self, request: Option<&str>) -> Outcome {
        let Some(topic) = request else {
            debug!("no topic requested");
            return Outcome::ShowHelp;
        };

        if topic == ALL_TOPIC {
            return self.run_all();
        }

        match self.registry.lookup(topic) {
            Some(entry) => {
                info!(topic, "running topic");
                entry.run();
                Outcome::RanOne(entry.key().to_string())
            }
            None => {
                debug!(topic, "unknown topic");
                Outcome::UnknownTopic(topic.to_string())
            }
        }
    }

    fn run_all(&self) -> Outcome {
        if self.registry.is_empty() {
            debug!("no topics registered, nothing to run");
            return Outcome::RanAll(0);
        }

        let entries = self.registry.all();
        info!(count = entries.len(), "running all topics");

        for (i, entry) in entries.iter().enumerate() {
            if i > 0 {
                if let Some(separator) = &self.separator {
                    separator();
                }
            }
            debug!(topic = entry.key(), "running topic");
            entry.run();
        }

        Outcome::RanAll(entries.len())
    }
}
