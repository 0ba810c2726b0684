//! Styles for the terminal client.
//!
//! Templates only use the semantic names in [`names`]; the actual colours
//! and decorations are decided here.

use super::theme::Theme;
use console::Style;
use once_cell::sync::Lazy;

pub mod names {
    pub const NAME: &str = "name";
    pub const CATEGORY: &str = "category";
    pub const SUBCATEGORY: &str = "subcategory";
    pub const MUTED: &str = "muted";
    pub const LINK: &str = "link";
    pub const STARS: &str = "stars";
    pub const FACET: &str = "facet";
    pub const FACET_ACTIVE: &str = "facet_active";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
}

pub static SHOPDIR_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add(names::NAME, Style::new().bold())
        .add(names::CATEGORY, Style::new().cyan())
        .add(names::SUBCATEGORY, Style::new().blue())
        .add(names::MUTED, Style::new().color256(246).italic())
        .add(names::LINK, Style::new().underlined())
        .add(names::STARS, Style::new().yellow())
        .add(names::FACET, Style::new())
        .add(names::FACET_ACTIVE, Style::new().black().on_yellow())
        .add(names::INFO, Style::new().dim())
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow())
        .add(names::ERROR, Style::new().red())
});
