//! # API Facade
//!
//! [`ShopdirApi`] is the single entry point for every UI client. It owns the
//! session: the loaded [`RecordStore`], the current [`FilterState`] and the
//! facet index for the current category. UI code feeds [`FilterEvent`]s in and
//! gets a [`CmdResult`] back; it never touches shared state directly.
//!
//! The facade holds no business logic of its own. Filtering lives in
//! `commands::visible`, facet derivation in `commands::facets` and the state
//! machine in `commands::transition`; this layer only sequences them and keeps
//! the cached facet index in step with the selection.
//!
//! ## Generic Over DataSource
//!
//! `ShopdirApi<S: DataSource>` is generic over where the records come from:
//! - Production: `ShopdirApi<Source>` (file or URL)
//! - Testing: `ShopdirApi<InMemorySource>`

use crate::commands::{
    facets, transition, visible, CmdResult, FacetIndex, FacetMenu, FilterEvent, SelectionPolicy,
};
use crate::error::{Result, ShopdirError};
use crate::model::{Facet, FilterState, ShopRecord};
use crate::store::{load_records, DataSource, FallbackMode, LoadOrigin, RecordStore};
use tracing::debug;

pub struct ShopdirApi<S: DataSource> {
    source: S,
    mode: FallbackMode,
    policy: SelectionPolicy,
    store: RecordStore,
    origin: LoadOrigin,
    state: FilterState,
    facets: FacetIndex,
}

impl<S: DataSource> ShopdirApi<S> {
    /// Performs the startup load and builds the initial facet index.
    pub async fn load(source: S, mode: FallbackMode, policy: SelectionPolicy) -> Result<Self> {
        let loaded = load_records(&source, mode).await?;
        let state = FilterState::new();
        let facets = FacetIndex::build(loaded.store.records(), &state.category);
        Ok(Self {
            source,
            mode,
            policy,
            store: loaded.store,
            origin: loaded.origin,
            state,
            facets,
        })
    }

    /// Replaces the record store wholesale and starts over from the initial
    /// filter state. On failure (without fallback) the current store is kept.
    pub async fn reload(&mut self) -> Result<CmdResult> {
        let loaded = load_records(&self.source, self.mode).await?;
        self.store = loaded.store;
        self.origin = loaded.origin;
        self.state = FilterState::new();
        self.facets = FacetIndex::build(self.store.records(), &self.state.category);
        Ok(self.current())
    }

    pub fn origin(&self) -> &LoadOrigin {
        &self.origin
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn records(&self) -> &[ShopRecord] {
        self.store.records()
    }

    /// The visible shops, filter menu and active selection for the current state.
    pub fn current(&self) -> CmdResult {
        let shown: Vec<ShopRecord> = visible::visible(self.store.records(), &self.state)
            .into_iter()
            .cloned()
            .collect();
        let result = CmdResult::default()
            .with_listed_shops(shown)
            .with_state(self.state.clone());
        let menu = FacetMenu::new(&self.facets, &result.selection);
        result.with_menu(menu)
    }

    /// Applies one user interaction. A rejected event leaves the session untouched.
    pub fn dispatch(&mut self, event: FilterEvent) -> Result<CmdResult> {
        debug!(?event, "filter event");
        let next = transition::apply(&self.state, event, &self.facets, self.policy)?;
        if next.category != self.state.category {
            self.facets = FacetIndex::build(self.store.records(), &next.category);
        }
        self.state = next;

        let result = self.current();
        debug!(
            shown = result.listed_shops.len(),
            total = self.store.len(),
            "visible shops"
        );
        Ok(result)
    }

    /// Applies a sequence of interactions, stopping at the first rejected one.
    pub fn browse<I>(&mut self, events: I) -> Result<CmdResult>
    where
        I: IntoIterator<Item = FilterEvent>,
    {
        for event in events {
            self.dispatch(event)?;
        }
        Ok(self.current())
    }

    /// Category facet values with their record counts.
    pub fn categories(&self) -> CmdResult {
        CmdResult::default().with_facet_counts(facets::category_counts(self.store.records()))
    }

    /// Subcategory facet values (with counts) scoped to `category`.
    pub fn subcategories(&self, category: &Facet) -> Result<CmdResult> {
        if let Some(value) = category.as_value() {
            if !self.facets.has_category(value) {
                return Err(ShopdirError::UnknownFacet {
                    facet: "category",
                    value: value.to_string(),
                });
            }
        }
        let counts = facets::subcategory_counts(self.store.records(), category);
        Ok(CmdResult::default().with_facet_counts(counts))
    }

    /// A single shop by id.
    pub fn shop(&self, id: &str) -> Result<CmdResult> {
        let record = self.store.get(id)?.clone();
        Ok(CmdResult::default().with_listed_shops(vec![record]))
    }
}
