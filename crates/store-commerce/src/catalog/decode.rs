//! Record-by-record decoding of product documents.

use serde_json::Value;

use crate::catalog::Product;
use crate::error::CatalogError;

/// Decode documents into products, skipping any that do not parse or
/// validate. One bad record never fails the batch.
pub fn decode_products(documents: Vec<Value>) -> Vec<Product> {
    documents
        .into_iter()
        .filter_map(|doc| {
            let product = serde_json::from_value::<Product>(doc)
                .map_err(CatalogError::from)
                .and_then(|p| p.validate().map(|()| p));
            match product {
                Ok(product) => Some(product),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping invalid product record");
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bad_records_are_skipped_individually() {
        let products = decode_products(vec![
            json!({"id": "1", "name": "Lamp", "price": 40, "discountPercentage": 12.5}),
            json!({"id": "2", "name": "Stool", "price": "cheap"}),
            json!({"id": "", "name": "Nameless", "price": 10}),
            json!({"id": "3", "name": "Rug", "price": 80, "discountPercentage": 120}),
            json!("not an object"),
            json!({"id": "4", "name": "Shelf", "price": 55.5}),
        ]);

        let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "4"]);
        assert_eq!(products[0].discount_percentage, 12.5);
    }
}
