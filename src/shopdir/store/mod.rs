//! # Record Store and Data Loading
//!
//! The [`RecordStore`] holds the loaded shop records. It is built once at
//! startup and never mutated in place; a reload replaces it wholesale.
//!
//! Records come from a [`DataSource`]:
//!
//! - [`fs::FileSource`]: a JSON file on disk (the default `shops.json`)
//! - [`http::HttpSource`]: a JSON resource fetched over HTTP(S)
//! - [`memory::InMemorySource`]: fixed records for tests, optionally failing
//!
//! [`Source`] picks between the file and HTTP variants from a single string,
//! which is what the CLI and the config file carry around.
//!
//! ## Fallback
//!
//! Loading is the only operation that can fail. [`load_records`] recovers from
//! every failure (I/O, HTTP status, malformed JSON, invalid records) by
//! substituting the bundled dataset in [`fallback`], unless the caller asked
//! for [`FallbackMode::Disabled`], in which case the error propagates.

use crate::error::{Result, ShopdirError};
use crate::model::{ShopId, ShopRecord};
use std::collections::HashSet;
use std::future::Future;
use tracing::{debug, warn};

pub mod fallback;
pub mod fs;
pub mod http;
pub mod memory;

/// The loaded, ordered record sequence. Insertion order is display order.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<ShopRecord>,
}

impl RecordStore {
    /// Builds a store, enforcing id uniqueness and the required-field checks.
    pub fn new(records: Vec<ShopRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if record.name.trim().is_empty() {
                return Err(invalid(&record.id, "name is empty"));
            }
            if record.category.trim().is_empty() {
                return Err(invalid(&record.id, "category is empty"));
            }
            if !seen.insert(&record.id) {
                return Err(ShopdirError::DuplicateId(record.id.clone()));
            }
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[ShopRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks a shop up by the textual form of its id, so `"7"` finds both
    /// `7` and `"7"`.
    pub fn get(&self, id: &str) -> Result<&ShopRecord> {
        self.records
            .iter()
            .find(|r| r.id.to_string() == id)
            .ok_or_else(|| ShopdirError::ShopNotFound(id.to_string()))
    }
}

fn invalid(id: &ShopId, reason: &str) -> ShopdirError {
    ShopdirError::InvalidRecord {
        id: id.clone(),
        reason: reason.to_string(),
    }
}

/// Abstract interface for the data load collaborator.
pub trait DataSource {
    /// Fetch the full record sequence.
    fn fetch(&self) -> impl Future<Output = Result<Vec<ShopRecord>>> + Send;

    /// Human-readable location, for logging.
    fn describe(&self) -> String;
}

/// A file path or an HTTP(S) URL.
#[derive(Debug, Clone)]
pub enum Source {
    File(fs::FileSource),
    Http(http::HttpSource),
}

impl Source {
    pub fn parse(location: &str) -> Result<Self> {
        if location.starts_with("http://") || location.starts_with("https://") {
            Ok(Source::Http(http::HttpSource::new(location)?))
        } else {
            Ok(Source::File(fs::FileSource::new(location)))
        }
    }
}

impl DataSource for Source {
    async fn fetch(&self) -> Result<Vec<ShopRecord>> {
        match self {
            Source::File(s) => s.fetch().await,
            Source::Http(s) => s.fetch().await,
        }
    }

    fn describe(&self) -> String {
        match self {
            Source::File(s) => s.describe(),
            Source::Http(s) => s.describe(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FallbackMode {
    /// Substitute the bundled dataset on any load failure.
    #[default]
    Embedded,
    /// Surface the load failure to the caller.
    Disabled,
}

/// Where the current records came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOrigin {
    Primary,
    Fallback { reason: String },
}

#[derive(Debug)]
pub struct Loaded {
    pub store: RecordStore,
    pub origin: LoadOrigin,
}

pub async fn load_records<S: DataSource>(source: &S, mode: FallbackMode) -> Result<Loaded> {
    let location = source.describe();
    debug!(%location, "loading shops");

    let attempt = match source.fetch().await {
        Ok(records) => RecordStore::new(records),
        Err(e) => Err(e),
    };

    match (attempt, mode) {
        (Ok(store), _) => {
            debug!(%location, count = store.len(), "loaded shops");
            Ok(Loaded {
                store,
                origin: LoadOrigin::Primary,
            })
        }
        (Err(e), FallbackMode::Embedded) => {
            warn!(%location, error = %e, "failed to load shops, using bundled list");
            Ok(Loaded {
                store: RecordStore::new(fallback::shops())?,
                origin: LoadOrigin::Fallback {
                    reason: e.to_string(),
                },
            })
        }
        (Err(e), FallbackMode::Disabled) => {
            warn!(%location, error = %e, "failed to load shops");
            Err(e)
        }
    }
}
