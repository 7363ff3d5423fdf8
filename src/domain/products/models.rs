//! Product models.

use serde::{Deserialize, Serialize};

/// Product as returned by the API.
///
/// The server merges current stock figures into the product row; prices are
/// decimal strings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub unit: String,
    pub default_price: String,
    pub is_active: bool,
    pub quantity: i32,
    pub min_quantity: i32,
    pub is_low: bool,
    pub damaged_count: i32,
    pub returned_count: i32,
}

/// Payload for creating a product.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub unit: String,
    pub default_price: String,
}

/// Partial update of a product; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_price: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListProductsResponse {
    pub products: Vec<Product>,
}
