//! Display projection of a shop record.
//!
//! [`ShopCard`] is what every presentation (terminal, HTML) renders: optional
//! fields are already resolved to present/absent and the rating block is
//! precomputed. Layout stays with the presenters.

use crate::model::ShopRecord;
use serde::Serialize;

pub const FULL_STAR: char = '★';
pub const HALF_STAR: char = '⯪';
pub const EMPTY_STAR: char = '☆';
pub const STAR_SLOTS: usize = 5;

/// Star breakdown for a rating: always five slots in total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StarRating {
    pub full: usize,
    pub half: usize,
    pub empty: usize,
}

impl StarRating {
    pub fn from_rating(rating: f64) -> Self {
        let rating = if rating.is_finite() {
            rating.clamp(0.0, STAR_SLOTS as f64)
        } else {
            0.0
        };
        let full = rating.floor() as usize;
        let half = usize::from(rating.fract() != 0.0);
        Self {
            full,
            half,
            empty: STAR_SLOTS - full - half,
        }
    }

    pub fn glyphs(&self) -> String {
        std::iter::repeat(FULL_STAR)
            .take(self.full)
            .chain(std::iter::repeat(HALF_STAR).take(self.half))
            .chain(std::iter::repeat(EMPTY_STAR).take(self.empty))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingBlock {
    pub stars: String,
    pub breakdown: StarRating,
    pub text: String,
}

impl RatingBlock {
    pub fn new(rating: f64, reviews: Option<u32>) -> Self {
        let breakdown = StarRating::from_rating(rating);
        Self {
            stars: breakdown.glyphs(),
            breakdown,
            text: format!("{}/5 ({} reviews)", rating, reviews.unwrap_or(0)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShopCard {
    pub id: String,
    pub name: String,
    pub category: String,
    pub subcategory: Option<String>,
    pub description: String,
    pub address: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub rating: Option<RatingBlock>,
}

impl ShopCard {
    pub fn new(record: &ShopRecord) -> Self {
        Self {
            id: record.id.to_string(),
            name: record.name.clone(),
            category: record.category.clone(),
            subcategory: record.subcategory().map(str::to_string),
            description: record.description.clone(),
            address: record.address.clone(),
            phone: record.phone().map(str::to_string),
            website: record.website().map(str::to_string),
            rating: record.rating.map(|r| RatingBlock::new(r, record.reviews)),
        }
    }
}

pub fn cards(records: &[ShopRecord]) -> Vec<ShopCard> {
    records.iter().map(ShopCard::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ShopId;

    fn stars(rating: f64) -> (usize, usize, usize) {
        let s = StarRating::from_rating(rating);
        (s.full, s.half, s.empty)
    }

    #[test]
    fn half_point_rating() {
        assert_eq!(stars(4.5), (4, 1, 0));
    }

    #[test]
    fn whole_rating() {
        assert_eq!(stars(3.0), (3, 0, 2));
    }

    #[test]
    fn any_fraction_gets_a_half_star() {
        assert_eq!(stars(4.2), (4, 1, 0));
        assert_eq!(stars(0.1), (0, 1, 4));
    }

    #[test]
    fn out_of_range_ratings_are_clamped() {
        assert_eq!(stars(7.0), (5, 0, 0));
        assert_eq!(stars(-1.0), (0, 0, 5));
        assert_eq!(stars(f64::NAN), (0, 0, 5));
    }

    #[test]
    fn glyphs_fill_five_slots() {
        let glyphs = StarRating::from_rating(2.5).glyphs();
        assert_eq!(glyphs, "★★⯪☆☆");
        assert_eq!(glyphs.chars().count(), STAR_SLOTS);
    }

    #[test]
    fn rating_text_defaults_reviews_to_zero() {
        assert_eq!(RatingBlock::new(4.5, None).text, "4.5/5 (0 reviews)");
        assert_eq!(RatingBlock::new(3.0, Some(12)).text, "3/5 (12 reviews)");
    }

    #[test]
    fn card_without_rating_has_no_block() {
        let record = ShopRecord::new(ShopId::Number(1), "A", "B", "d", "a");
        assert!(ShopCard::new(&record).rating.is_none());
    }

    #[test]
    fn zero_rating_still_renders() {
        let record = ShopRecord::new(ShopId::Number(1), "A", "B", "d", "a").with_rating(0.0, None);
        let card = ShopCard::new(&record);
        assert_eq!(card.rating.unwrap().stars, "☆☆☆☆☆");
    }

    #[test]
    fn card_drops_empty_optionals() {
        let record = ShopRecord::new(ShopId::Text("x1".into()), "A", "B", "d", "a")
            .with_subcategory("")
            .with_website("https://a.example.com");
        let card = ShopCard::new(&record);
        assert_eq!(card.id, "x1");
        assert_eq!(card.subcategory, None);
        assert_eq!(card.website.as_deref(), Some("https://a.example.com"));
    }
}
