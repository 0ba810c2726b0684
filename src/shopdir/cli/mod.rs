//! # CLI Layer
//!
//! This module is **one possible UI client** for shopdir. It is not the
//! application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, stdin)
//! - Initialises logging and the async runtime's entry point
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `setup.rs`: clap definitions
//! - `commands.rs`: `run()`, context setup and per-command handlers
//! - `browse.rs`: the interactive stdin session
//! - `render.rs`: `CmdResult` to terminal text or HTML
//! - `styles.rs`, `theme.rs`, `templates.rs`: how output looks
//!
//! CLI tests should **not** test business logic; that is the command layer's
//! job. They check that arguments reach the API and that results print.

mod browse;
mod commands;
mod render;
mod setup;
mod styles;
mod templates;
mod theme;

pub use commands::run;
