//! `people` - Build and print a small roster of person records
//!
//! This library provides the `Person` record, the ordered `People` list that
//! holds them, and the renderers that write a list to the console.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod person;
pub mod roster;

pub use config::Config;
pub use display::{display, render, write_people, OutputFormat};
pub use error::{Error, Result};
pub use logging::init_logging;
pub use person::Person;
pub use roster::People;
