//! Predicates narrowing the product catalog.
//!
//! All filters are total: a filter that matches nothing yields an empty
//! list, never an error. Input order is preserved.

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::shared::records::Product;

/// Inclusive price bounds. `min > max` is allowed and matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl PriceRange {
    pub fn new(min: Decimal, max: Decimal) -> Self {
        Self { min, max }
    }

    /// Build a range from optional bounds; `None` when both are absent.
    ///
    /// A missing lower bound is zero and a missing upper bound is unbounded.
    pub fn from_bounds(min: Option<Decimal>, max: Option<Decimal>) -> Option<Self> {
        if min.is_none() && max.is_none() {
            return None;
        }
        Some(Self {
            min: min.unwrap_or(Decimal::ZERO),
            max: max.unwrap_or(Decimal::MAX),
        })
    }

    pub fn contains(&self, price: Decimal) -> bool {
        self.min <= price && price <= self.max
    }
}

/// Filter state for one catalog query
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub category_id: Option<Uuid>,
    pub query: String,
    pub price: Option<PriceRange>,
}

pub fn filter_by_category(products: &[Product], category_id: Option<Uuid>) -> Vec<Product> {
    match category_id {
        None => products.to_vec(),
        Some(id) => products
            .iter()
            .filter(|p| p.category_id == id)
            .cloned()
            .collect(),
    }
}

/// Case-insensitive substring match against the title in every language.
///
/// A blank query returns the input unchanged.
pub fn filter_by_text(products: &[Product], query: &str) -> Vec<Product> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return products.to_vec();
    }

    products
        .iter()
        .filter(|p| title_matches(p, &needle))
        .cloned()
        .collect()
}

pub fn filter_by_price_range(products: &[Product], min: Decimal, max: Decimal) -> Vec<Product> {
    let range = PriceRange::new(min, max);
    products
        .iter()
        .filter(|p| range.contains(p.price))
        .cloned()
        .collect()
}

/// Category and text narrow together; the price range is applied last.
pub fn apply(products: &[Product], filter: &ProductFilter) -> Vec<Product> {
    let needle = filter.query.trim().to_lowercase();

    products
        .iter()
        .filter(|p| filter.category_id.is_none_or(|id| p.category_id == id))
        .filter(|p| needle.is_empty() || title_matches(p, &needle))
        .filter(|p| filter.price.is_none_or(|range| range.contains(p.price)))
        .cloned()
        .collect()
}

// `needle` is already lowercased
fn title_matches(product: &Product, needle: &str) -> bool {
    product
        .title
        .values()
        .any(|title| !title.is_empty() && title.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::locale::LocalizedText;
    use chrono::Utc;
    use proptest::prelude::*;

    fn product(title: LocalizedText, price: i64, category_id: Uuid) -> Product {
        Product {
            id: Uuid::new_v4(),
            title,
            price: Decimal::new(price, 0),
            image: String::new(),
            category_id,
            description: LocalizedText::default(),
            created_at: Utc::now(),
        }
    }

    fn priced(price: i64) -> Product {
        product(LocalizedText::new("Livre", "Book", "كتاب"), price, Uuid::nil())
    }

    fn prices(products: &[Product]) -> Vec<Decimal> {
        products.iter().map(|p| p.price).collect()
    }

    #[test]
    fn test_price_range_inclusive() {
        let products = vec![priced(10), priced(50), priced(99)];
        let result = filter_by_price_range(&products, Decimal::new(20, 0), Decimal::new(100, 0));
        assert_eq!(prices(&result), vec![Decimal::new(50, 0), Decimal::new(99, 0)]);

        let edges = filter_by_price_range(&products, Decimal::new(10, 0), Decimal::new(99, 0));
        assert_eq!(edges.len(), 3);
    }

    #[test]
    fn test_inverted_price_range_is_empty() {
        let products = vec![priced(10), priced(50)];
        assert!(
            filter_by_price_range(&products, Decimal::new(60, 0), Decimal::new(5, 0)).is_empty()
        );
    }

    #[test]
    fn test_category_filter() {
        let romans = Uuid::new_v4();
        let poesie = Uuid::new_v4();
        let products = vec![
            product(LocalizedText::new("A", "A", "A"), 10, romans),
            product(LocalizedText::new("B", "B", "B"), 20, poesie),
        ];

        assert_eq!(filter_by_category(&products, None), products);
        let only_romans = filter_by_category(&products, Some(romans));
        assert_eq!(only_romans.len(), 1);
        assert_eq!(only_romans[0].category_id, romans);
        assert!(filter_by_category(&products, Some(Uuid::new_v4())).is_empty());
    }

    #[test]
    fn test_text_filter_matches_any_language() {
        let products = vec![
            product(
                LocalizedText::new("Le Petit Prince", "The Little Prince", "الأمير الصغير"),
                10,
                Uuid::nil(),
            ),
            product(
                LocalizedText::new("L'Étranger", "The Stranger", "الغريب"),
                12,
                Uuid::nil(),
            ),
        ];

        assert_eq!(filter_by_text(&products, "petit").len(), 1);
        assert_eq!(filter_by_text(&products, "STRANGER").len(), 1);
        assert_eq!(filter_by_text(&products, "الغريب").len(), 1);
        assert_eq!(filter_by_text(&products, "l'étranger").len(), 1);
        assert_eq!(filter_by_text(&products, "the").len(), 2);
        assert!(filter_by_text(&products, "dune").is_empty());
    }

    #[test]
    fn test_blank_query_is_identity() {
        let products = vec![priced(1), priced(2)];
        assert_eq!(filter_by_text(&products, ""), products);
        assert_eq!(filter_by_text(&products, "   "), products);
    }

    #[test]
    fn test_untitled_product_never_matches() {
        let products = vec![product(LocalizedText::default(), 5, Uuid::nil())];
        assert!(filter_by_text(&products, "a").is_empty());
        assert_eq!(filter_by_text(&products, "").len(), 1);
    }

    #[test]
    fn test_empty_input() {
        let empty: Vec<Product> = Vec::new();
        assert!(filter_by_category(&empty, Some(Uuid::nil())).is_empty());
        assert!(filter_by_text(&empty, "x").is_empty());
        assert!(filter_by_price_range(&empty, Decimal::ZERO, Decimal::MAX).is_empty());
        assert!(apply(&empty, &ProductFilter::default()).is_empty());
    }

    #[test]
    fn test_apply_combines_filters() {
        let romans = Uuid::new_v4();
        let other = Uuid::new_v4();
        let products = vec![
            product(LocalizedText::new("Roman noir", "Noir novel", "رواية"), 30, romans),
            product(LocalizedText::new("Roman rose", "Romance", "رواية"), 150, romans),
            product(LocalizedText::new("Roman graphique", "Graphic novel", "رواية"), 40, other),
        ];

        let filter = ProductFilter {
            category_id: Some(romans),
            query: "roman".to_string(),
            price: PriceRange::from_bounds(None, Some(Decimal::new(100, 0))),
        };
        let result = apply(&products, &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title.fr, "Roman noir");
    }

    #[test]
    fn test_price_range_from_bounds() {
        assert_eq!(PriceRange::from_bounds(None, None), None);
        let lower = PriceRange::from_bounds(Some(Decimal::new(5, 0)), None).unwrap();
        assert!(lower.contains(Decimal::new(1_000_000, 0)));
        assert!(!lower.contains(Decimal::new(4, 0)));
        let upper = PriceRange::from_bounds(None, Some(Decimal::new(5, 0))).unwrap();
        assert!(upper.contains(Decimal::ZERO));
    }

    proptest! {
        #[test]
        fn prop_apply_matches_composed_filters(
            raw_prices in proptest::collection::vec(0i64..500, 0..30),
            min in 0i64..300,
            max in 0i64..500,
            pick_category in any::<bool>(),
        ) {
            let categories = [Uuid::from_u128(1), Uuid::from_u128(2)];
            let products: Vec<Product> = raw_prices
                .iter()
                .enumerate()
                .map(|(i, price)| {
                    let title = if i % 3 == 0 { "Atlas" } else { "Roman" };
                    product(LocalizedText::new(title, title, ""), *price, categories[i % 2])
                })
                .collect();

            let category_id = pick_category.then_some(categories[0]);
            let filter = ProductFilter {
                category_id,
                query: "rom".to_string(),
                price: Some(PriceRange::new(Decimal::new(min, 0), Decimal::new(max, 0))),
            };

            let composed = filter_by_price_range(
                &filter_by_text(&filter_by_category(&products, category_id), "rom"),
                Decimal::new(min, 0),
                Decimal::new(max, 0),
            );
            prop_assert_eq!(apply(&products, &filter), composed);
        }
    }
}
