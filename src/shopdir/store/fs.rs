use super::DataSource;
use crate::error::Result;
use crate::model::ShopRecord;
use std::path::{Path, PathBuf};

/// Reads the shop list from a JSON file (an array of shop records).
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataSource for FileSource {
    async fn fetch(&self) -> Result<Vec<ShopRecord>> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        let records = serde_json::from_str(&content)?;
        Ok(records)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShopdirError;
    use std::fs;

    #[tokio::test]
    async fn reads_records_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shops.json");
        fs::write(
            &path,
            r#"[{"id": 1, "name": "Corner Books", "category": "Books",
                 "description": "Used books", "address": "3 Elm St", "rating": 4.5}]"#,
        )
        .unwrap();

        let records = FileSource::new(&path).fetch().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Corner Books");
        assert_eq!(records[0].rating, Some(4.5));
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileSource::new(dir.path().join("nope.json"))
            .fetch()
            .await
            .unwrap_err();
        assert!(matches!(err, ShopdirError::Io(_)));
    }

    #[tokio::test]
    async fn malformed_json_is_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shops.json");
        fs::write(&path, "{ not json").unwrap();

        let err = FileSource::new(&path).fetch().await.unwrap_err();
        assert!(matches!(err, ShopdirError::Serialization(_)));
    }
}
