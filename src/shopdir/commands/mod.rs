use crate::model::{FilterState, ShopRecord};

pub mod facets;
pub mod transition;
pub mod visible;

pub use facets::{ActiveSelection, FacetIndex, FacetMenu, FacetOption};
pub use transition::{FilterEvent, SelectionPolicy};

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Everything a presentation layer needs after one interaction.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_shops: Vec<ShopRecord>,
    pub state: FilterState,
    pub selection: ActiveSelection,
    pub menu: FacetMenu,
    pub facet_counts: Vec<(String, usize)>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_shops(mut self, shops: Vec<ShopRecord>) -> Self {
        self.listed_shops = shops;
        self
    }

    pub fn with_state(mut self, state: FilterState) -> Self {
        self.selection = ActiveSelection::project(&state);
        self.state = state;
        self
    }

    pub fn with_menu(mut self, menu: FacetMenu) -> Self {
        self.menu = menu;
        self
    }

    pub fn with_facet_counts(mut self, counts: Vec<(String, usize)>) -> Self {
        self.facet_counts = counts;
        self
    }

    /// The query ran and matched nothing. This is a normal outcome, not an error.
    pub fn no_shops_found(&self) -> bool {
        self.listed_shops.is_empty()
    }
}
