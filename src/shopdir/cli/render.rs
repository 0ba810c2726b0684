//! # Rendering Module
//!
//! Turns `CmdResult` values into terminal text or HTML markup using the
//! templates in `templates/` and the theme in `styles.rs`.
//!
//! Width calculations and truncation stay in Rust because they need
//! Unicode-aware processing. Templates decide what to print; the data they get
//! already carries the style names to use.

use super::styles::{names, SHOPDIR_THEME};
use super::templates;
use super::theme::Renderer;
use serde::Serialize;
use shopdir::card::{cards, ShopCard};
use shopdir::commands::{CmdMessage, CmdResult, FacetMenu, FacetOption, MessageLevel};
use shopdir::error::{Result, ShopdirError};
use unicode_width::UnicodeWidthStr;

pub const LINE_WIDTH: usize = 100;
const INDENT_WIDTH: usize = 4;

pub const NO_SHOPS_MESSAGE: &str = "No shops found.";
pub const LOADING_MESSAGE: &str = "Loading shops...";
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load shops data. Please try again later.";

/// How much of the session to show alongside the shop cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListLayout {
    /// Cards only, descriptions truncated to the line width.
    Compact,
    /// Cards only, nothing truncated.
    Full,
    /// Filter menu and search line above compact cards.
    Session,
}

#[derive(Serialize)]
struct CardLine {
    name: String,
    category: String,
    subcategory: Option<String>,
    description: String,
    address: String,
    phone: Option<String>,
    website: Option<String>,
    stars: Option<String>,
    rating_text: Option<String>,
}

#[derive(Serialize)]
struct MenuLine {
    label: String,
    style: &'static str,
}

#[derive(Serialize)]
struct ListData {
    cards: Vec<CardLine>,
    empty: bool,
    empty_message: &'static str,
    show_menu: bool,
    categories: Vec<MenuLine>,
    subcategories: Vec<MenuLine>,
    search: Option<String>,
}

#[derive(Serialize)]
struct FacetRow {
    label: String,
    count: String,
}

#[derive(Serialize)]
struct FacetsData {
    rows: Vec<FacetRow>,
    row_style: &'static str,
    empty_message: &'static str,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Serialize)]
struct PageData<'a> {
    menu: &'a FacetMenu,
    cards: Vec<ShopCard>,
    empty_message: &'static str,
}

#[derive(Serialize)]
struct StatusData<'a> {
    message: &'a str,
    is_error: bool,
}

/// Which facet a `facet_counts` listing shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetKind {
    Category,
    Subcategory,
}

pub struct Presenter {
    renderer: Renderer,
}

impl Presenter {
    pub fn new(use_color: bool) -> Result<Self> {
        let mut renderer = Renderer::new(SHOPDIR_THEME.clone(), use_color);
        for &(name, source) in templates::ALL {
            renderer.add_template(name, source).map_err(render_error)?;
        }
        Ok(Self { renderer })
    }

    /// Terminal rendering of the listed shops.
    pub fn shop_list(&self, result: &CmdResult, layout: ListLayout) -> Result<String> {
        let truncate = layout != ListLayout::Full;
        let show_menu = layout == ListLayout::Session;
        let data = ListData {
            cards: cards(&result.listed_shops)
                .into_iter()
                .map(|c| card_line(c, truncate))
                .collect(),
            empty: result.no_shops_found(),
            empty_message: NO_SHOPS_MESSAGE,
            show_menu,
            categories: menu_lines(&result.menu.categories),
            subcategories: if result.menu.subcategories.len() > 1 {
                menu_lines(&result.menu.subcategories)
            } else {
                Vec::new()
            },
            search: result.state.search_query().map(str::to_string),
        };
        self.render("list", &data)
    }

    /// HTML markup: filter buttons followed by the shop grid.
    pub fn shop_page(&self, result: &CmdResult) -> Result<String> {
        let data = PageData {
            menu: &result.menu,
            cards: cards(&result.listed_shops),
            empty_message: NO_SHOPS_MESSAGE,
        };
        self.render("page.html", &data)
    }

    /// The HTML placeholder that occupies the grid while loading, or the
    /// error that replaces it when loading fails.
    pub fn status_page(&self, message: &str, is_error: bool) -> Result<String> {
        self.render("status.html", &StatusData { message, is_error })
    }

    pub fn status_text(&self, message: &str, is_error: bool) -> Result<String> {
        let level = if is_error {
            CmdMessage::error(message)
        } else {
            CmdMessage::info(message)
        };
        self.messages(&[level])
    }

    pub fn facet_counts(&self, counts: &[(String, usize)], kind: FacetKind) -> Result<String> {
        let (row_style, empty_message) = match kind {
            FacetKind::Category => (names::CATEGORY, "No categories."),
            FacetKind::Subcategory => (names::SUBCATEGORY, "No subcategories."),
        };
        let data = FacetsData {
            rows: counts
                .iter()
                .map(|(label, n)| FacetRow {
                    label: label.clone(),
                    count: format!("({})", n),
                })
                .collect(),
            row_style,
            empty_message,
        };
        self.render("facets", &data)
    }

    pub fn messages(&self, messages: &[CmdMessage]) -> Result<String> {
        if messages.is_empty() {
            return Ok(String::new());
        }
        let data = MessagesData {
            messages: messages
                .iter()
                .map(|msg| MessageData {
                    content: msg.content.clone(),
                    style: match msg.level {
                        MessageLevel::Info => names::INFO,
                        MessageLevel::Success => names::SUCCESS,
                        MessageLevel::Warning => names::WARNING,
                        MessageLevel::Error => names::ERROR,
                    },
                })
                .collect(),
        };
        self.render("messages", &data)
    }

    fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        let output = self.renderer.render(name, data).map_err(render_error)?;
        Ok(finish(&output))
    }
}

fn render_error(e: minijinja::Error) -> ShopdirError {
    ShopdirError::Render(e.to_string())
}

/// Drops the blank lines templates leave at the edges and ends with one newline.
fn finish(output: &str) -> String {
    let trimmed = output.trim_matches('\n');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("{}\n", trimmed)
    }
}

fn card_line(card: ShopCard, truncate: bool) -> CardLine {
    let description = if truncate {
        truncate_to_width(&card.description, LINE_WIDTH - INDENT_WIDTH)
    } else {
        card.description
    };
    let (stars, rating_text) = match card.rating {
        Some(block) => (Some(block.stars), Some(block.text)),
        None => (None, None),
    };
    CardLine {
        name: card.name,
        category: card.category,
        subcategory: card.subcategory,
        description,
        address: card.address,
        phone: card.phone,
        website: card.website,
        stars,
        rating_text,
    }
}

fn menu_lines(options: &[FacetOption]) -> Vec<MenuLine> {
    options
        .iter()
        .map(|o| {
            if o.active {
                MenuLine {
                    label: format!("[{}]", o.label),
                    style: names::FACET_ACTIVE,
                }
            } else {
                MenuLine {
                    label: o.label.clone(),
                    style: names::FACET,
                }
            }
        })
        .collect()
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
