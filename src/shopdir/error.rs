use crate::model::ShopId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShopdirError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("Invalid shop record {id}: {reason}")]
    InvalidRecord { id: ShopId, reason: String },

    #[error("Duplicate shop id: {0}")]
    DuplicateId(ShopId),

    #[error("Unknown {facet}: {value}")]
    UnknownFacet { facet: &'static str, value: String },

    #[error("Shop not found: {0}")]
    ShopNotFound(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Render error: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, ShopdirError>;
