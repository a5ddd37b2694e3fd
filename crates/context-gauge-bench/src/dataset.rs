// crates/context-gauge-bench/src/dataset.rs
// ============================================================================
// Module: Context Gauge Mock Dataset
// Description: Deterministic synthetic business dataset for benchmarking.
// Purpose: Provide stable entity payloads whose serialized size is measured.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A deterministic stand-in for a small business database: users,
//! categories, products, orders, and reviews. Identifiers are sequential
//! and derived purely from the entity index, so two generations with the
//! same size produce byte-identical JSON and the token measurements built
//! on top stay reproducible.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Fixed timestamp stamped onto every generated entity.
const CREATED_AT: &str = "2024-01-01T00:00:00Z";

/// Categories below this index are roots without a parent.
const ROOT_CATEGORY_COUNT: usize = 20;

// ============================================================================
// SECTION: Entity Records
// ============================================================================

/// A registered user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MockUser {
    /// Stable synthetic identifier.
    pub id: String,
    /// Contact email.
    pub email: String,
    /// Login name.
    pub username: String,
    /// Display name.
    pub full_name: String,
    /// Whether the account is active.
    pub is_active: bool,
    /// Creation timestamp.
    pub created_at: String,
}

/// A product category, optionally nested under a parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MockCategory {
    /// Stable synthetic identifier.
    pub id: String,
    /// Category name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Parent category, absent for roots.
    pub parent_id: Option<String>,
    /// Creation timestamp.
    pub created_at: String,
}

/// A sellable product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MockProduct {
    /// Stable synthetic identifier.
    pub id: String,
    /// Product name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Unit price as a decimal string.
    pub price: String,
    /// Owning category.
    pub category_id: String,
    /// Units in stock.
    pub stock_quantity: u32,
    /// Stock keeping unit code.
    pub sku: String,
    /// Whether the product can be ordered.
    pub is_available: bool,
    /// Creation timestamp.
    pub created_at: String,
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MockOrder {
    /// Stable synthetic identifier.
    pub id: String,
    /// Ordering user.
    pub user_id: String,
    /// Order total as a decimal string.
    pub total_price: String,
    /// Order lifecycle status.
    pub status: String,
    /// Creation timestamp.
    pub created_at: String,
    /// Last update timestamp.
    pub updated_at: String,
}

/// A product review left by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MockReview {
    /// Stable synthetic identifier.
    pub id: String,
    /// Reviewing user.
    pub user_id: String,
    /// Reviewed product.
    pub product_id: String,
    /// Star rating from 1 to 5.
    pub rating: u32,
    /// Free-text comment.
    pub comment: String,
    /// Creation timestamp.
    pub created_at: String,
}

// ============================================================================
// SECTION: Dataset
// ============================================================================

/// The full generated dataset, one collection per entity type.
///
/// # Invariants
/// - All five collections have the same length.
/// - Cross-references (category, user, product ids) resolve within the
///   dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MockDataset {
    /// Registered users.
    pub users: Vec<MockUser>,
    /// Product categories.
    pub categories: Vec<MockCategory>,
    /// Sellable products.
    pub products: Vec<MockProduct>,
    /// Placed orders.
    pub orders: Vec<MockOrder>,
    /// Product reviews.
    pub reviews: Vec<MockReview>,
}

impl MockDataset {
    /// Generates a deterministic dataset with `entities_per_type` rows in
    /// each collection.
    #[must_use]
    pub fn generate(entities_per_type: usize) -> Self {
        let users = (0..entities_per_type)
            .map(|index| MockUser {
                id: entity_id("user", index),
                email: format!("user{index}@example.com"),
                username: format!("user{index}"),
                full_name: format!("User Number {index}"),
                is_active: true,
                created_at: CREATED_AT.to_string(),
            })
            .collect::<Vec<_>>();
        let categories = (0..entities_per_type)
            .map(|index| MockCategory {
                id: entity_id("category", index),
                name: format!("Category {index}"),
                description: format!("Description for category {index}"),
                parent_id: (index >= ROOT_CATEGORY_COUNT)
                    .then(|| entity_id("category", index % ROOT_CATEGORY_COUNT)),
                created_at: CREATED_AT.to_string(),
            })
            .collect::<Vec<_>>();
        let products = (0..entities_per_type)
            .map(|index| MockProduct {
                id: entity_id("product", index),
                name: format!("Product {index}"),
                description: format!(
                    "Detailed description for product {index}. This is a great product \
                     with many features."
                ),
                price: "29.99".to_string(),
                category_id: entity_id("category", index % entities_per_type.max(1)),
                stock_quantity: 100,
                sku: format!("SKU{index:06}"),
                is_available: true,
                created_at: CREATED_AT.to_string(),
            })
            .collect::<Vec<_>>();
        let orders = (0..entities_per_type)
            .map(|index| MockOrder {
                id: entity_id("order", index),
                user_id: entity_id("user", index % entities_per_type.max(1)),
                total_price: "149.95".to_string(),
                status: "PENDING".to_string(),
                created_at: CREATED_AT.to_string(),
                updated_at: CREATED_AT.to_string(),
            })
            .collect::<Vec<_>>();
        let reviews = (0..entities_per_type)
            .map(|index| MockReview {
                id: entity_id("review", index),
                user_id: entity_id("user", index % entities_per_type.max(1)),
                product_id: entity_id("product", index % entities_per_type.max(1)),
                rating: review_rating(index),
                comment: format!(
                    "This is my review for product {index}. Great quality and fast \
                     shipping!"
                ),
                created_at: CREATED_AT.to_string(),
            })
            .collect::<Vec<_>>();
        Self { users, categories, products, orders, reviews }
    }

    /// Total entity count across all five collections.
    #[must_use]
    pub fn total_entities(&self) -> usize {
        self.users.len()
            + self.categories.len()
            + self.products.len()
            + self.orders.len()
            + self.reviews.len()
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Builds the stable identifier for one entity.
fn entity_id(kind: &str, index: usize) -> String {
    format!("{kind}-{index:06}")
}

/// Cycles ratings through 1..=5 by entity index.
fn review_rating(index: usize) -> u32 {
    #[allow(clippy::cast_possible_truncation, reason = "value is reduced modulo 5 first")]
    let cycled = (index % 5) as u32;
    cycled + 1
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "Test-only assertions are permitted.")]

    use super::MockDataset;

    #[test]
    fn generation_is_deterministic() {
        assert_eq!(MockDataset::generate(25), MockDataset::generate(25));
    }

    #[test]
    fn collections_share_the_requested_length() {
        let dataset = MockDataset::generate(7);
        assert_eq!(dataset.users.len(), 7);
        assert_eq!(dataset.categories.len(), 7);
        assert_eq!(dataset.products.len(), 7);
        assert_eq!(dataset.orders.len(), 7);
        assert_eq!(dataset.reviews.len(), 7);
        assert_eq!(dataset.total_entities(), 35);
    }

    #[test]
    fn root_categories_have_no_parent() {
        let dataset = MockDataset::generate(30);
        assert!(dataset.categories[19].parent_id.is_none());
        assert_eq!(dataset.categories[20].parent_id.as_deref(), Some("category-000000"));
    }

    #[test]
    fn cross_references_resolve_within_the_dataset() {
        let dataset = MockDataset::generate(12);
        for review in &dataset.reviews {
            assert!(dataset.users.iter().any(|user| user.id == review.user_id));
            assert!(dataset.products.iter().any(|product| product.id == review.product_id));
        }
    }

    #[test]
    fn ratings_cycle_through_one_to_five() {
        let dataset = MockDataset::generate(10);
        let ratings: Vec<u32> = dataset.reviews.iter().map(|review| review.rating).collect();
        assert_eq!(ratings, vec![1, 2, 3, 4, 5, 1, 2, 3, 4, 5]);
    }
}
