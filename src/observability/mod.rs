//! Observability for ets-validate
//!
//! Two output channels:
//! - Console: the `[TAG] message` lines on stdout that make up the report
//! - Logger: structured JSON lifecycle events on stderr, off unless `--verbose`
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on validation
//! 3. Deterministic output
//!
//! # Usage
//!
//! ```ignore
//! use ets_validate::observability::{Console, Event, Logger};
//!
//! let logger = Logger::stderr();
//! logger.event(Event::TableLoaded, &[("table", "cs_topics.csv"), ("rows", "12")]);
//!
//! let mut console = Console::new(std::io::stdout());
//! console.line("INFO", "Validating CSVs in: /srv/ets-viz/data")?;
//! ```

mod console;
mod events;
mod logger;

pub use console::Console;
pub use events::Event;
pub use logger::{Logger, Severity};
