//! The bundled shop list, used when the primary data cannot be loaded
//! (offline use, a missing `shops.json`, a broken download).

use crate::model::{ShopId, ShopRecord};

pub fn shops() -> Vec<ShopRecord> {
    vec![
        ShopRecord::new(
            ShopId::Number(1),
            "Urban Coffee House",
            "Coffee & Tea",
            "Specialty coffee roasted in-house, fresh pastries and a quiet upstairs reading room.",
            "123 Main Street, Downtown",
        )
        .with_subcategory("Coffee Shop")
        .with_phone("(555) 123-4567")
        .with_website("https://urbancoffeehouse.example.com")
        .with_rating(4.5, Some(128)),
        ShopRecord::new(
            ShopId::Number(2),
            "Leaf & Kettle Tea Room",
            "Coffee & Tea",
            "Over sixty loose-leaf teas, afternoon tea service on weekends.",
            "48 Garden Row, Old Town",
        )
        .with_subcategory("Tea House")
        .with_phone("(555) 234-8890")
        .with_rating(4.8, Some(64)),
        ShopRecord::new(
            ShopId::Number(3),
            "Tech Solutions Store",
            "Electronics",
            "Laptops, desktops and accessories, with same-day repair service.",
            "456 Tech Avenue, Midtown",
        )
        .with_subcategory("Computer")
        .with_phone("(555) 987-6543")
        .with_website("https://techsolutions.example.com")
        .with_rating(4.2, Some(89)),
        ShopRecord::new(
            ShopId::Number(4),
            "Signal Mobile Repair",
            "Electronics",
            "Screen and battery replacement for phones and tablets while you wait.",
            "9 Station Square",
        )
        .with_subcategory("Mobile Phones")
        .with_rating(3.0, None),
        ShopRecord::new(
            ShopId::Number(5),
            "Chapter One Books",
            "Books & Stationery",
            "Independent bookshop with a strong local-authors shelf and a children's corner.",
            "77 Library Lane",
        )
        .with_subcategory("Bookstore")
        .with_website("https://chapterone.example.com")
        .with_rating(4.9, Some(212)),
        ShopRecord::new(
            ShopId::Number(6),
            "Green Thumb Garden Center",
            "Home & Garden",
            "Houseplants, seeds, tools and friendly advice for balcony gardeners.",
            "310 Meadow Road",
        )
        .with_phone("(555) 456-7777"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::RecordStore;

    #[test]
    fn fallback_is_a_valid_store() {
        let store = RecordStore::new(shops()).unwrap();
        assert!(!store.is_empty());
    }
}
