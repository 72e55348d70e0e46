use thiserror::Error;
use tracing::debug;

use crate::models::{DisplayItem, DisplayOrder, RawItem, RawOrder};
use crate::utils::{format_order_time, value_to_amount, value_to_quantity};

/// Placeholder until the backend exposes a real preparation-time estimate.
pub const DEFAULT_ESTIMATE: &str = "15 mins";

const ORDERS_PATH: &str = "/kot/api/orders/";
const DEFAULT_ORDER_TYPE: &str = "Dine-in";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to fetch orders: {0}")]
    Network(String),
    #[error("failed to parse orders: {0}")]
    Parse(String),
}

/// HTTP client for the KOT orders endpoint.
#[derive(Clone)]
pub struct OrderClient {
    client: reqwest::Client,
    base_url: String,
}

impl OrderClient {
    pub fn new(base_url: String) -> Self {
        OrderClient {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// One GET against the orders endpoint. The transform below cannot fail,
    /// so any error out of here is a whole-fetch failure: transport problems
    /// and non-2xx statuses surface as `Network`, an unusable body as
    /// `Parse`.
    pub async fn fetch_orders(&self) -> Result<Vec<DisplayOrder>, FetchError> {
        let url = format!("{}{}", self.base_url, ORDERS_PATH);
        debug!(%url, "fetching orders");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Network(format!("{}: {}", status, body)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        let raw: Vec<RawOrder> =
            serde_json::from_str(&body).map_err(|e| FetchError::Parse(e.to_string()))?;

        debug!(count = raw.len(), "orders fetched");
        Ok(raw.into_iter().map(transform_order).collect())
    }
}

/// Normalizes one wire record. Total by construction: every per-field
/// anomaly degrades to a default instead of failing the order.
pub fn transform_order(raw: RawOrder) -> DisplayOrder {
    let items = raw.items.into_iter().map(transform_item).collect();
    DisplayOrder {
        table_no: raw.order_number,
        order_type: raw.mode.unwrap_or_else(|| DEFAULT_ORDER_TYPE.to_string()),
        time: format_order_time(&raw.order_date),
        estimate: DEFAULT_ESTIMATE.to_string(),
        status: raw.status,
        items,
        total_price: value_to_amount(&raw.total_price),
        gst: value_to_amount(&raw.gst),
        address: raw.address,
        customer: raw.customers.and_then(|c| c.into_iter().next()),
    }
}

fn transform_item(raw: RawItem) -> DisplayItem {
    DisplayItem {
        quantity: value_to_quantity(&raw.quantity),
        name: raw.name.or(raw.product_name).unwrap_or_default(),
        price: value_to_amount(&raw.price),
    }
}
