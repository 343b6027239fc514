//! # Wire types for the Catalog Service
//!
//! Everything the remote service sends or accepts is defined here as a serde
//! type, so the rest of the workspace never touches raw JSON.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Category`] | A node in the category tree as returned by the list endpoint. Carries its own `subcategories`, so the root list is a forest. |
//! | [`CategoryDetail`] | The single-category payload: category fields plus owned [`Product`]s and direct subcategories. |
//! | [`Product`] | A product owned by exactly one category. |
//! | [`NewCategory`] | Create payload. |
//! | [`CategoryPatch`] | Partial-update payload; only the fields that are `Some` go on the wire. |
//! | [`UserInfo`] / [`Organization`] | The authenticated user shown in the header. |
//! | [`LoginResponse`] | The issued session token (camelCase on the wire). |

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A category in the catalog tree.
///
/// `subcategories` nests the children directly; the service guarantees a tree
/// by convention (cycles are not validated here or server-side).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    /// Number of products owned by this category; some listings omit it.
    #[serde(default)]
    pub products_count: Option<u32>,
    /// Id of the parent category, `None` for roots.
    #[serde(default)]
    pub parent_category: Option<u64>,
    #[serde(default)]
    pub subcategories: Vec<Category>,
}

impl Category {
    /// "Active" / "Inactive" label for the status column.
    pub fn status_label(&self) -> &'static str {
        if self.is_active {
            "Active"
        } else {
            "Inactive"
        }
    }

    /// Creation date formatted for display.
    pub fn created_date(&self) -> String {
        self.created_at.format("%Y-%m-%d").to_string()
    }

    /// Product count with missing values rendered as 0.
    pub fn product_count_or_zero(&self) -> u32 {
        self.products_count.unwrap_or(0)
    }
}

/// A product owned by a category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub sku: String,
    pub ean: String,
    /// External product page.
    pub url: String,
}

/// Full category payload from `GET /categories/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryDetail {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub subcategories: Vec<Category>,
}

impl CategoryDetail {
    pub fn status_label(&self) -> &'static str {
        if self.is_active {
            "Active"
        } else {
            "Inactive"
        }
    }

    pub fn created_date(&self) -> String {
        self.created_at.format("%Y-%m-%d").to_string()
    }
}

/// Payload for creating a category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
    pub description: String,
    pub is_active: bool,
    pub parent_category: Option<u64>,
}

/// Partial-update payload; unset fields stay untouched server-side.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_category: Option<u64>,
}

/// Organization the user belongs to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub id: u64,
    pub name: String,
}

/// The authenticated user, as shown in the header.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub organization: Organization,
}

impl UserInfo {
    /// Full name, falling back to the email when both name parts are empty.
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        let name = name.trim();
        if name.is_empty() {
            self.email.clone()
        } else {
            name.to_string()
        }
    }
}

/// Response of `POST /session`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(rename = "sessionToken")]
    pub session_token: String,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_deserializes_with_defaults() {
        // Minimal listing payload: no description, count, parent, or children
        let json = r#"{
            "id": 7,
            "name": "Dairy",
            "is_active": true,
            "created_at": "2024-03-01T09:30:00Z"
        }"#;
        let cat: Category = serde_json::from_str(json).unwrap();
        assert_eq!(cat.id, 7);
        assert_eq!(cat.name, "Dairy");
        assert!(cat.description.is_none());
        assert!(cat.products_count.is_none());
        assert!(cat.parent_category.is_none());
        assert!(cat.subcategories.is_empty());
        assert_eq!(cat.product_count_or_zero(), 0);
        assert_eq!(cat.status_label(), "Active");
        assert_eq!(cat.created_date(), "2024-03-01");
    }

    #[test]
    fn test_category_deserializes_nested_tree() {
        let json = r#"{
            "id": 1,
            "name": "Food",
            "description": "Everything edible",
            "is_active": true,
            "created_at": "2024-01-15T12:00:00Z",
            "products_count": 4,
            "subcategories": [
                {
                    "id": 2,
                    "name": "Snacks",
                    "is_active": false,
                    "created_at": "2024-02-01T08:00:00Z",
                    "parent_category": 1,
                    "subcategories": [
                        {
                            "id": 3,
                            "name": "Chips",
                            "is_active": true,
                            "created_at": "2024-02-02T08:00:00Z",
                            "parent_category": 2
                        }
                    ]
                }
            ]
        }"#;
        let cat: Category = serde_json::from_str(json).unwrap();
        assert_eq!(cat.subcategories.len(), 1);
        assert_eq!(cat.subcategories[0].name, "Snacks");
        assert_eq!(cat.subcategories[0].status_label(), "Inactive");
        assert_eq!(cat.subcategories[0].subcategories[0].id, 3);
        assert_eq!(cat.subcategories[0].subcategories[0].parent_category, Some(2));
    }

    #[test]
    fn test_category_detail_with_products() {
        let json = r#"{
            "id": 5,
            "name": "Beverages",
            "is_active": true,
            "created_at": "2024-01-01T00:00:00Z",
            "products": [
                {
                    "id": 11,
                    "name": "Cola 330ml",
                    "description": "Can",
                    "sku": "COL-330",
                    "ean": "5410188031234",
                    "url": "https://example.com/cola"
                }
            ]
        }"#;
        let detail: CategoryDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.products.len(), 1);
        assert_eq!(detail.products[0].sku, "COL-330");
        assert!(detail.subcategories.is_empty());
    }

    #[test]
    fn test_patch_serializes_only_set_fields() {
        let patch = CategoryPatch {
            name: Some("Renamed".to_string()),
            is_active: Some(false),
            ..Default::default()
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "Renamed", "is_active": false })
        );

        // Empty patch is an empty object
        let empty = serde_json::to_value(CategoryPatch::default()).unwrap();
        assert_eq!(empty, serde_json::json!({}));
    }

    #[test]
    fn test_login_response_field_is_camel_case() {
        let resp: LoginResponse =
            serde_json::from_str(r#"{"sessionToken": "abc123"}"#).unwrap();
        assert_eq!(resp.session_token, "abc123");
    }

    #[test]
    fn test_user_display_name() {
        let mut user = UserInfo {
            id: 1,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            organization: Organization {
                id: 1,
                name: "Analytical".to_string(),
            },
        };
        assert_eq!(user.display_name(), "Ada Lovelace");

        user.first_name.clear();
        user.last_name.clear();
        assert_eq!(user.display_name(), "ada@example.com");
    }
}
