use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Order record as the KOT endpoint serves it. Amount fields arrive as
/// numbers or numeric strings depending on the backend version, so they stay
/// `Value` until normalization.
#[derive(Debug, Clone, Deserialize)]
pub struct RawOrder {
    pub order_number: String,
    pub mode: Option<String>,
    pub order_date: String,
    pub status: String,
    pub items: Vec<RawItem>,
    #[serde(default)]
    pub total_price: Value,
    #[serde(default)]
    pub gst: Value,
    pub address: Option<String>,
    pub customers: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawItem {
    #[serde(default)]
    pub quantity: Value,
    pub name: Option<String>,
    pub product_name: Option<String>,
    #[serde(default)]
    pub price: Value,
}

/// Normalized, rendering-ready projection of one order. Built once per fetch
/// and never patched; a new fetch replaces the whole list.
#[derive(Debug, Clone, Serialize)]
pub struct DisplayOrder {
    pub table_no: String,
    pub order_type: String,
    pub time: String,
    pub estimate: String,
    pub status: String,
    pub items: Vec<DisplayItem>,
    pub total_price: f64,
    pub gst: f64,
    pub address: Option<String>,
    pub customer: Option<Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DisplayItem {
    pub quantity: i64,
    pub name: String,
    pub price: f64,
}
