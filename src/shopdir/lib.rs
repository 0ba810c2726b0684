//! # Shopdir Architecture
//!
//! Shopdir is a **UI-agnostic shop-directory library**: it loads a list of shop
//! records, narrows it by category, subcategory and free-text search, and
//! projects records into display cards. The terminal client in `cli/` is one
//! consumer; an HTML page or a web view could be another.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders cards, handles terminal I/O    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Session state: records, filter state, facet index        │
//! │  - Turns filter events into `CmdResult` values              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Query engine, facet index builder, state transitions     │
//! │  - Pure functions over Rust types                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecordStore, DataSource trait, bundled fallback list     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Filtering Rules
//!
//! - Non-empty (trimmed) search text wins: the facet selectors are ignored and
//!   a record is shown when the text occurs, case-insensitively, in its name,
//!   description, category, subcategory or address.
//! - Otherwise the category selector, then the subcategory selector, keep
//!   exact (case-sensitive) matches. `"all"` means no restriction.
//! - Results keep the dataset order. An empty result is a normal outcome.
//!
//! ## Loading
//!
//! The startup load is the only fallible, suspending operation. Any failure
//! is replaced by the bundled shop list unless fallback is disabled.
//!
//! ## Module Overview
//!
//! - [`api`]: The session facade, entry point for all operations
//! - [`commands`]: Query engine, facets and filter transitions
//! - [`store`]: Record store and data sources
//! - [`model`]: Core data types (`ShopRecord`, `Facet`, `FilterState`)
//! - [`card`]: Display projection of a record (stars, rating text)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod card;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
