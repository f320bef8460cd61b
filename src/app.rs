//! Process entry.
//!
//! Turns one command-line request into output and an [`Outcome`]. Topic
//! actions write straight to stdout; the help listing and the unknown-topic
//! message go to the writer passed to [`App::run`].

use std::io::{self, Write};

use tracing::{debug, warn};

use crate::commands::{Dispatcher, Outcome, Registry};
use crate::ui::{help, Theme};

/// Width of the dim rule printed between topics in `all` mode.
const SEPARATOR_WIDTH: usize = 50;

/// Holds what a single invocation needs.
pub struct App<'a> {
    registry: &'a Registry,
    theme: Theme,
}

impl<'a> App<'a> {
    pub fn new(registry: &'a Registry, theme: Theme) -> Self {
        Self { registry, theme }
    }

    /// Handle one request.
    ///
    /// Returns the dispatch outcome; the caller maps it to an exit code.
    pub fn run(&self, request: Option<&str>, out: &mut dyn Write) -> io::Result<Outcome> {
        let theme = self.theme;
        let dispatcher = Dispatcher::new(self.registry).with_separator(move || {
            if let Err(e) = write_separator(&mut io::stdout().lock(), &theme) {
                warn!(error = %e, "failed to write topic separator");
            }
        });

        let outcome = dispatcher.dispatch(request);
        debug!(?outcome, "dispatch finished");

        if let Outcome::UnknownTopic(topic) = &outcome {
            let message = format!("Unknown topic: {}", topic);
            writeln!(out, "{}", self.theme.error(&message))?;
        }
        if outcome.wants_help() {
            self.write_help(out)?;
        }
        out.flush()?;

        Ok(outcome)
    }

    fn write_help(&self, out: &mut dyn Write) -> io::Result<()> {
        for line in help::render(self.registry, &self.theme) {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }
}

fn write_separator(out: &mut dyn Write, theme: &Theme) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", theme.dim(&"-".repeat(SEPARATOR_WIDTH)))?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording_registry(log: &Rc<RefCell<Vec<String>>>) -> Registry {
        let mut registry = Registry::new();
        for (key, description) in [("pointers", "Pointer examples"), ("json", "JSON examples")] {
            let log = Rc::clone(log);
            registry
                .register(key, description, move || {
                    log.borrow_mut().push(key.to_string())
                })
                .unwrap();
        }
        registry
    }

    fn run(registry: &Registry, request: Option<&str>) -> (Outcome, String) {
        let app = App::new(registry, Theme::plain());
        let mut buf = Vec::new();
        let outcome = app.run(request, &mut buf).unwrap();
        (outcome, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_no_topic_prints_help() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let registry = recording_registry(&log);
        let (outcome, text) = run(&registry, None);

        assert_eq!(outcome, Outcome::ShowHelp);
        assert!(log.borrow().is_empty());
        let pointers = text.find("pointers").unwrap();
        let json = text.find("  json ").unwrap();
        assert!(pointers < json);
        assert!(text.contains("all"));
    }

    #[test]
    fn test_known_topic_runs_without_help() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let registry = recording_registry(&log);
        let (outcome, text) = run(&registry, Some("json"));

        assert_eq!(outcome, Outcome::RanOne("json".to_string()));
        assert_eq!(*log.borrow(), vec!["json"]);
        assert!(text.is_empty());
    }

    #[test]
    fn test_unknown_topic_prints_message_then_help() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let registry = recording_registry(&log);
        let (outcome, text) = run(&registry, Some("bogus"));

        assert_eq!(outcome, Outcome::UnknownTopic("bogus".to_string()));
        assert_ne!(outcome.exit_code(), std::process::ExitCode::SUCCESS);
        assert!(log.borrow().is_empty());
        assert!(text.starts_with("❌ Unknown topic: bogus\n"));
        let header = text.find("Available topics:").unwrap();
        let pointers = text.find("  pointers ").unwrap();
        let json = text.find("  json ").unwrap();
        assert!(header < pointers);
        assert!(pointers < json);
    }

    #[test]
    fn test_all_runs_everything_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let registry = recording_registry(&log);
        let (outcome, text) = run(&registry, Some("all"));

        assert_eq!(outcome, Outcome::RanAll(2));
        assert_eq!(*log.borrow(), vec!["pointers", "json"]);
        assert!(text.is_empty());
    }

    #[test]
    fn test_separator() {
        let mut buf = Vec::new();
        write_separator(&mut buf, &Theme::plain()).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            format!("\n{}\n", "-".repeat(50))
        );
    }
}
