use serde::{Deserialize, Serialize};
use std::fmt;

/// The sentinel selector value meaning "no restriction on this facet".
pub const ALL: &str = "all";

/// Opaque shop identifier. The JSON data uses both numbers and strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ShopId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ShopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShopId::Number(n) => write!(f, "{}", n),
            ShopId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// One directory entry, as found in `shops.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopRecord {
    pub id: ShopId,
    pub name: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    pub description: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    // Absent and zero are different things: zero still renders a rating block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<u32>,
}

impl ShopRecord {
    pub fn new(
        id: ShopId,
        name: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            subcategory: None,
            description: description.into(),
            address: address.into(),
            phone: None,
            website: None,
            rating: None,
            reviews: None,
        }
    }

    pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = Some(subcategory.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }

    pub fn with_rating(mut self, rating: f64, reviews: Option<u32>) -> Self {
        self.rating = Some(rating);
        self.reviews = reviews;
        self
    }

    /// The subcategory, treating an empty label as absent.
    pub fn subcategory(&self) -> Option<&str> {
        non_empty(&self.subcategory)
    }

    pub fn phone(&self) -> Option<&str> {
        non_empty(&self.phone)
    }

    pub fn website(&self) -> Option<&str> {
        non_empty(&self.website)
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// A facet selector: either the `"all"` sentinel or one concrete value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Facet {
    #[default]
    All,
    Value(String),
}

impl Facet {
    pub fn value(value: impl Into<String>) -> Self {
        Facet::from(value.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Facet::All)
    }

    pub fn as_value(&self) -> Option<&str> {
        match self {
            Facet::All => None,
            Facet::Value(v) => Some(v),
        }
    }

    /// True when `candidate` passes this selector.
    pub fn admits(&self, candidate: Option<&str>) -> bool {
        match self {
            Facet::All => true,
            Facet::Value(v) => candidate == Some(v.as_str()),
        }
    }
}

impl From<String> for Facet {
    fn from(s: String) -> Self {
        if s == ALL {
            Facet::All
        } else {
            Facet::Value(s)
        }
    }
}

impl From<&str> for Facet {
    fn from(s: &str) -> Self {
        Facet::from(s.to_string())
    }
}

impl From<Facet> for String {
    fn from(f: Facet) -> Self {
        f.to_string()
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Facet::All => f.write_str(ALL),
            Facet::Value(v) => f.write_str(v),
        }
    }
}

/// Current UI selection. Lives for the session only and is never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterState {
    pub category: Facet,
    pub subcategory: Facet,
    pub search_text: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The trimmed search text when search mode is active.
    pub fn search_query(&self) -> Option<&str> {
        let trimmed = self.search_text.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    pub fn is_searching(&self) -> bool {
        self.search_query().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shop_id_accepts_numbers_and_strings() {
        let ids: Vec<ShopId> = serde_json::from_str(r#"[7, "shop-7"]"#).unwrap();
        assert_eq!(ids[0], ShopId::Number(7));
        assert_eq!(ids[1], ShopId::Text("shop-7".into()));
        assert_eq!(ids[0].to_string(), "7");
    }

    #[test]
    fn record_optional_fields_default_to_absent() {
        let json = r#"{
            "id": 1,
            "name": "Urban Coffee House",
            "category": "Coffee & Tea",
            "description": "Artisan coffee",
            "address": "1 Main St"
        }"#;
        let record: ShopRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.subcategory(), None);
        assert_eq!(record.rating, None);
        assert_eq!(record.reviews, None);
    }

    #[test]
    fn record_missing_required_field_fails() {
        let json = r#"{ "id": 1, "name": "No Category", "description": "", "address": "" }"#;
        assert!(serde_json::from_str::<ShopRecord>(json).is_err());
    }

    #[test]
    fn empty_optional_labels_count_as_absent() {
        let record = ShopRecord::new(ShopId::Number(1), "A", "B", "", "")
            .with_subcategory("")
            .with_phone("");
        assert_eq!(record.subcategory(), None);
        assert_eq!(record.phone(), None);
    }

    #[test]
    fn facet_parses_the_all_sentinel() {
        assert_eq!(Facet::from("all"), Facet::All);
        assert_eq!(Facet::from("Books"), Facet::Value("Books".into()));
        assert_eq!(Facet::All.to_string(), "all");
    }

    #[test]
    fn facet_admits() {
        assert!(Facet::All.admits(None));
        assert!(Facet::value("Cafe").admits(Some("Cafe")));
        assert!(!Facet::value("Cafe").admits(Some("cafe")));
        assert!(!Facet::value("Cafe").admits(None));
    }

    #[test]
    fn whitespace_search_is_not_search_mode() {
        let state = FilterState {
            search_text: "   ".into(),
            ..FilterState::default()
        };
        assert!(!state.is_searching());

        let state = FilterState {
            search_text: "  tea ".into(),
            ..FilterState::default()
        };
        assert_eq!(state.search_query(), Some("tea"));
    }
}
