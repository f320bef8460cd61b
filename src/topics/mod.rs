//! The demonstration topics.
//!
//! Each topic is a function that writes an explanatory walkthrough to the
//! writer it is given. [`registry`] wraps every topic in an action that prints
//! a banner and then runs the topic against stdout.

mod arrays;
mod cancellation;
mod channels;
mod colors;
mod composition;
mod defer;
mod errors;
mod fileio;
mod functions;
mod io_streams;
mod json;
mod maps;
mod methods;
mod modules;
mod os;
mod pointers;
mod reflection;
mod strings;
mod structs;
mod threads;
mod traits;

use std::io::{self, Write};

use tracing::{debug, warn};

use crate::commands::{Registry, RegistryError};
use crate::ui::Theme;

/// Signature shared by every topic body.
pub type TopicFn = fn(&mut dyn Write, &Theme) -> io::Result<()>;

/// A row of the topic table.
#[derive(Clone, Copy)]
pub struct Topic {
    /// Name typed on the command line.
    pub key: &'static str,
    /// Banner printed before the body.
    pub title: &'static str,
    /// One-line summary for the help listing.
    pub description: &'static str,
    /// The walkthrough itself.
    pub run: TopicFn,
}

/// Built-in topics, in help-listing order.
pub const TOPICS: &[Topic] = &[
    Topic {
        key: "pointers",
        title: "🔗 References & Smart Pointers",
        description: "References, Box, Rc and RefCell",
        run: pointers::run,
    },
    Topic {
        key: "functions",
        title: "🔧 Functions & Closures",
        description: "Functions, closures and higher-order functions",
        run: functions::run,
    },
    Topic {
        key: "arrays",
        title: "📊 Arrays, Slices & Vectors",
        description: "Array, slice and Vec examples",
        run: arrays::run,
    },
    Topic {
        key: "maps",
        title: "🗺️ Maps & Sets",
        description: "HashMap, BTreeMap and HashSet examples",
        run: maps::run,
    },
    Topic {
        key: "defer",
        title: "🔄 Drop, Panic & Recovery",
        description: "Drop order, scope guards and catch_unwind",
        run: defer::run,
    },
    Topic {
        key: "strings",
        title: "📝 String Formatting",
        description: "String formatting examples",
        run: strings::run,
    },
    Topic {
        key: "structs",
        title: "📦 Structs",
        description: "Struct examples",
        run: structs::run,
    },
    Topic {
        key: "methods",
        title: "📦 Methods",
        description: "Method examples",
        run: methods::run,
    },
    Topic {
        key: "traits",
        title: "🔌 Traits",
        description: "Trait objects, generics and default methods",
        run: traits::run,
    },
    Topic {
        key: "errors",
        title: "🚨 Error Handling",
        description: "Custom errors, ? and error chains",
        run: errors::run,
    },
    Topic {
        key: "threads",
        title: "🚀 Threads",
        description: "Threads, scoped threads and shared state",
        run: threads::run,
    },
    Topic {
        key: "channels",
        title: "📺 Channels",
        description: "Channel examples",
        run: channels::run,
    },
    Topic {
        key: "modules",
        title: "📦 Modules & Visibility",
        description: "Module system and visibility examples",
        run: modules::run,
    },
    Topic {
        key: "composition",
        title: "🧩 Composition & Delegation",
        description: "Composition, Deref and trait defaults",
        run: composition::run,
    },
    Topic {
        key: "reflection",
        title: "🔍 Runtime Type Information",
        description: "Any, TypeId and type_name examples",
        run: reflection::run,
    },
    Topic {
        key: "cancellation",
        title: "🌐 Timeouts & Cancellation",
        description: "Async timeouts, deadlines and cancellation",
        run: cancellation::run,
    },
    Topic {
        key: "json",
        title: "📋 JSON & Serialization",
        description: "JSON & Serialization examples",
        run: json::run,
    },
    Topic {
        key: "fileio",
        title: "📁 File I/O",
        description: "File I/O & buffered readers/writers",
        run: fileio::run,
    },
    Topic {
        key: "os",
        title: "🖥️ Environment & Process",
        description: "Environment variables and process info",
        run: os::run,
    },
    Topic {
        key: "io",
        title: "📄 Read & Write Traits",
        description: "IO trait examples",
        run: io_streams::run,
    },
    Topic {
        key: "colors",
        title: "🎨 Colors",
        description: "Color examples",
        run: colors::run,
    },
];

/// Build the registry of built-in topics.
///
/// # Errors
///
/// Fails if the topic table holds a duplicate, empty or reserved key.
pub fn registry(theme: Theme, rule_width: usize) -> Result<Registry, RegistryError> {
    let mut registry = Registry::new();
    for topic in TOPICS.iter().copied() {
        registry.register(topic.key, topic.description, move || {
            present(&topic, &theme, rule_width)
        })?;
    }
    debug!(count = registry.len(), "registered topics");
    Ok(registry)
}

/// Run a topic against stdout, preceded by its banner.
fn present(topic: &Topic, theme: &Theme, rule_width: usize) {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = write_banner(&mut out, topic, theme, rule_width)
        .and_then(|()| (topic.run)(&mut out, theme))
        .and_then(|()| out.flush());

    if let Err(e) = result {
        warn!(topic = topic.key, error = %e, "failed to write topic output");
    }
}

fn write_banner(
    out: &mut dyn Write,
    topic: &Topic,
    theme: &Theme,
    rule_width: usize,
) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        theme.header(&format!("{} Examples:", topic.title))
    )?;
    writeln!(out, "{}", theme.rule(rule_width))
}

/// Write a numbered section title inside a topic.
fn section(out: &mut dyn Write, theme: &Theme, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", theme.subtitle(title))
}

/// Run a topic body into a buffer with styling off.
#[cfg(test)]
fn capture(run: TopicFn) -> String {
    let mut buf = Vec::new();
    run(&mut buf, &Theme::plain()).unwrap();
    String::from_utf8(buf).unwrap()
}
