//! Product records as published by the content store.

use crate::error::CatalogError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are owned by the content store; the storefront treats them as
/// immutable values and refers to them by [`ProductId`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Image URL or asset path.
    #[serde(default)]
    pub image_path: String,
    /// List price.
    #[serde(with = "crate::money::decimal")]
    pub price: Money,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Advertised discount, 0 to 100. Fractions such as 12.5 are allowed.
    #[serde(default)]
    pub discount_percentage: f64,
    /// Whether the product is promoted as featured.
    #[serde(default)]
    pub is_featured_product: bool,
    /// Units in stock.
    #[serde(default)]
    pub stock_level: u32,
    /// Category name, matched exactly.
    #[serde(default)]
    pub category: String,
}

impl Product {
    /// Create a product with the required fields; the rest start empty.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image_path: String::new(),
            price,
            description: String::new(),
            discount_percentage: 0.0,
            is_featured_product: false,
            stock_level: 0,
            category: String::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the image path.
    pub fn with_image(mut self, image_path: impl Into<String>) -> Self {
        self.image_path = image_path.into();
        self
    }

    /// Set the stock level.
    pub fn with_stock(mut self, stock_level: u32) -> Self {
        self.stock_level = stock_level;
        self
    }

    /// Set the discount percentage.
    pub fn with_discount(mut self, percent: f64) -> Self {
        self.discount_percentage = percent;
        self
    }

    /// Mark the product as featured.
    pub fn featured(mut self) -> Self {
        self.is_featured_product = true;
        self
    }

    /// Check the record against the catalog invariants.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.id.is_empty() {
            return Err(CatalogError::InvalidRecord(format!(
                "product '{}' has an empty id",
                self.name
            )));
        }
        if self.price.is_negative() {
            return Err(CatalogError::InvalidRecord(format!(
                "product {} has a negative price",
                self.id
            )));
        }
        if !(0.0..=100.0).contains(&self.discount_percentage) {
            return Err(CatalogError::InvalidRecord(format!(
                "product {} has discount {}%",
                self.id, self.discount_percentage
            )));
        }
        Ok(())
    }

    /// Price after the advertised discount.
    pub fn discounted_price(&self) -> Money {
        self.price.percent_off(self.discount_percentage)
    }

    /// Check if any stock is left.
    pub fn is_in_stock(&self) -> bool {
        self.stock_level > 0
    }

    /// Badge text shown on listings.
    pub fn featured_label(&self) -> &'static str {
        if self.is_featured_product {
            "Featured"
        } else {
            "Regular"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn jacket() -> Product {
        Product::new("p-1", "Red Jacket", Money::new(5000, Currency::USD))
    }

    #[test]
    fn test_decode_content_store_record() {
        let json = r#"{
            "id": "42",
            "name": "Trail Shoe",
            "imagePath": "https://cdn.example.com/shoe.png",
            "price": 89.99,
            "description": "Light and grippy",
            "discountPercentage": 15,
            "isFeaturedProduct": true,
            "stockLevel": 7,
            "category": "shoes",
            "_id": "ignored",
            "_type": "productnew"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id.as_str(), "42");
        assert_eq!(product.price.amount_cents, 8999);
        assert_eq!(product.discount_percentage, 15.0);
        assert!(product.is_featured_product);
        assert_eq!(product.stock_level, 7);
        assert_eq!(product.category, "shoes");
        assert!(product.validate().is_ok());
    }

    #[test]
    fn test_decode_fractional_discount() {
        let product: Product = serde_json::from_str(
            r#"{"id": "7", "name": "Lamp", "price": 80, "discountPercentage": 12.5}"#,
        )
        .unwrap();
        assert_eq!(product.discount_percentage, 12.5);
        assert!(product.validate().is_ok());
        assert_eq!(product.discounted_price().amount_cents, 7000);
    }

    #[test]
    fn test_decode_fills_optional_fields() {
        let product: Product =
            serde_json::from_str(r#"{"id": "1", "name": "Cap", "price": 10}"#).unwrap();
        assert_eq!(product.description, "");
        assert_eq!(product.stock_level, 0);
        assert!(!product.is_featured_product);
    }

    #[test]
    fn test_validate_rejects_bad_records() {
        let negative = Product::new("p-2", "Broken", Money::new(-1, Currency::USD));
        assert!(matches!(negative.validate(), Err(CatalogError::InvalidRecord(_))));

        let over = jacket().with_discount(101.0);
        assert!(over.validate().is_err());
        assert!(jacket().with_discount(-0.5).validate().is_err());
        assert!(jacket().with_discount(f64::NAN).validate().is_err());
        assert!(jacket().with_discount(100.0).validate().is_ok());

        let unnamed = Product::new("", "No Id", Money::zero(Currency::USD));
        assert!(unnamed.validate().is_err());
    }

    #[test]
    fn test_display_helpers() {
        let product = jacket().with_discount(20.0).with_stock(0).featured();
        assert_eq!(product.discounted_price().amount_cents, 4000);
        assert!(!product.is_in_stock());
        assert_eq!(product.featured_label(), "Featured");
        assert_eq!(jacket().featured_label(), "Regular");
    }
}
