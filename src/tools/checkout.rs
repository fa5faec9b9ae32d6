use rmcp::schemars::{self, JsonSchema};
use serde::{Deserialize, Serialize};

use crate::checkout::{FormDescriptor, OrderContext, OrderItem};

// ==================== build_checkout_form ====================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum ItemParam {
    /// Bare display name
    Name(String),
    /// Item object
    Item {
        name: String,
        quantity: Option<u32>,
    },
}

impl From<ItemParam> for OrderItem {
    fn from(param: ItemParam) -> Self {
        match param {
            ItemParam::Name(name) => OrderItem::named(name),
            ItemParam::Item { name, quantity } => OrderItem { name, quantity },
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct BuildCheckoutFormParams {
    /// Stable order identifier, sent back as item_number
    pub order_id: String,
    /// Amount in the currency's minor units, e.g. 2599 for 25.99
    pub amount_minor_units: i64,
    /// ISO 4217 code, uppercase, e.g. "USD"
    pub currency_code: String,
    /// Items in display order
    pub items: Option<Vec<ItemParam>>,
}

impl From<BuildCheckoutFormParams> for OrderContext {
    fn from(params: BuildCheckoutFormParams) -> Self {
        OrderContext {
            order_id: params.order_id,
            amount_minor_units: params.amount_minor_units,
            currency_code: params.currency_code,
            items: params
                .items
                .unwrap_or_default()
                .into_iter()
                .map(OrderItem::from)
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BuildCheckoutFormResponse {
    pub form: FormDescriptor,
    /// Form-encoded body for the POST to action_url
    pub body: String,
}

// ==================== list_supported_currencies ====================

#[derive(Debug, Serialize, JsonSchema)]
pub struct SupportedCurrenciesResponse {
    pub currencies: Vec<String>,
    pub count: u32,
}
