//! Topic dispatch for the command line.
//!
//! This module provides:
//! - The ordered topic registry
//! - The dispatcher that maps a requested topic to actions

mod dispatch;
mod registry;

pub use dispatch::{Dispatcher, Outcome, ALL_TOPIC};
pub use registry::{Registry, RegistryError};
