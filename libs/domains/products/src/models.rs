use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The six business fields every create payload must carry
pub const REQUIRED_FIELDS: [&str; 6] = [
    "name",
    "quantity",
    "code_value",
    "is_published",
    "expiration",
    "price",
];

/// Product entity - one row of the `products` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier, assigned by the datastore on creation
    pub id: i32,
    /// Product name
    pub name: String,
    /// Stock quantity
    pub quantity: i32,
    /// Universal product code, unique across products
    pub code_value: String,
    /// Publication status flag
    pub is_published: String,
    /// Expiration date
    pub expiration: String,
    /// Unit price
    pub price: f64,
}

/// DTO for creating a product; the id is assigned by the datastore
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewProduct {
    pub name: String,
    pub quantity: i32,
    pub code_value: String,
    pub is_published: String,
    pub expiration: String,
    pub price: f64,
}

/// DTO for partial updates.
///
/// Absent fields decode to their zero values, and zero values mean
/// "leave the persisted value untouched", never "clear this field".
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct ProductPatch {
    pub id: i32,
    pub name: String,
    pub quantity: i32,
    pub code_value: String,
    pub is_published: String,
    pub expiration: String,
    pub price: f64,
}

impl ProductPatch {
    /// Overlay the non-zero/non-empty fields of this patch onto the
    /// persisted record.
    pub fn merge_into(self, mut persisted: Product) -> Product {
        if !self.name.is_empty() {
            persisted.name = self.name;
        }
        if self.quantity != 0 {
            persisted.quantity = self.quantity;
        }
        if !self.code_value.is_empty() {
            persisted.code_value = self.code_value;
        }
        if !self.is_published.is_empty() {
            persisted.is_published = self.is_published;
        }
        if !self.expiration.is_empty() {
            persisted.expiration = self.expiration;
        }
        if self.price != 0.0 {
            persisted.price = self.price;
        }
        persisted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn persisted() -> Product {
        Product {
            id: 7,
            name: "widget".to_string(),
            quantity: 5,
            code_value: "W1".to_string(),
            is_published: "true".to_string(),
            expiration: "2025-01-01".to_string(),
            price: 9.99,
        }
    }

    #[test]
    fn test_empty_patch_changes_nothing() {
        let merged = ProductPatch::default().merge_into(persisted());
        assert_eq!(merged, persisted());
    }

    #[test]
    fn test_partial_patch_overwrites_only_set_fields() {
        let patch = ProductPatch {
            id: 7,
            name: "gadget".to_string(),
            price: 19.99,
            ..Default::default()
        };

        let merged = patch.merge_into(persisted());
        assert_eq!(merged.name, "gadget");
        assert_eq!(merged.price, 19.99);
        // untouched fields keep their persisted values
        assert_eq!(merged.quantity, 5);
        assert_eq!(merged.code_value, "W1");
        assert_eq!(merged.is_published, "true");
        assert_eq!(merged.expiration, "2025-01-01");
    }

    #[test]
    fn test_full_patch_overwrites_everything_but_id() {
        let patch = ProductPatch {
            id: 7,
            name: "gadget".to_string(),
            quantity: 3,
            code_value: "G1".to_string(),
            is_published: "false".to_string(),
            expiration: "2026-06-30".to_string(),
            price: 1.5,
        };

        let merged = patch.merge_into(persisted());
        assert_eq!(merged.id, 7);
        assert_eq!(merged.name, "gadget");
        assert_eq!(merged.quantity, 3);
        assert_eq!(merged.code_value, "G1");
        assert_eq!(merged.is_published, "false");
        assert_eq!(merged.expiration, "2026-06-30");
        assert_eq!(merged.price, 1.5);
    }

    #[test]
    fn test_patch_deserializes_with_absent_fields() {
        let patch: ProductPatch = serde_json::from_str(r#"{"id": 7, "name": "gadget"}"#).unwrap();
        assert_eq!(patch.id, 7);
        assert_eq!(patch.name, "gadget");
        assert_eq!(patch.quantity, 0);
        assert!(patch.code_value.is_empty());
    }
}
