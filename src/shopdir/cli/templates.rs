//! Output templates.
//!
//! Templates live as stand-alone files next to this module and are embedded
//! at compile time. Terminal templates (`.tmp`) use the `style` filter with
//! semantic style names; HTML templates (`.html`) are auto-escaped.
//!
//! Layout decisions that need Unicode width math (truncation) and style
//! selection that depends on state (active facet) are made in Rust and handed
//! to the templates as plain values, so templates branch on *what* to print,
//! not on *how* it looks.

pub const LIST_TEMPLATE: &str = include_str!("templates/list.tmp");
pub const MENU_TEMPLATE: &str = include_str!("templates/menu.tmp");
pub const FACETS_TEMPLATE: &str = include_str!("templates/facets.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const PAGE_TEMPLATE: &str = include_str!("templates/page.html");
pub const CARD_TEMPLATE: &str = include_str!("templates/card.html");
pub const STATUS_TEMPLATE: &str = include_str!("templates/status.html");

/// Every template with the name it is registered under.
pub const ALL: &[(&str, &str)] = &[
    ("list", LIST_TEMPLATE),
    ("menu", MENU_TEMPLATE),
    ("facets", FACETS_TEMPLATE),
    ("messages", MESSAGES_TEMPLATE),
    ("page.html", PAGE_TEMPLATE),
    ("card.html", CARD_TEMPLATE),
    ("status.html", STATUS_TEMPLATE),
];
