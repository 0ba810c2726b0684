use super::DataSource;
use crate::error::{Result, ShopdirError};
use crate::model::ShopRecord;

/// In-memory source for testing and development.
/// Either returns its records or fails every fetch.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    records: Vec<ShopRecord>,
    fail: bool,
}

impl InMemorySource {
    pub fn new(records: Vec<ShopRecord>) -> Self {
        Self {
            records,
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            records: Vec::new(),
            fail: true,
        }
    }
}

impl DataSource for InMemorySource {
    async fn fetch(&self) -> Result<Vec<ShopRecord>> {
        if self.fail {
            return Err(ShopdirError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "in-memory source set to fail",
            )));
        }
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
