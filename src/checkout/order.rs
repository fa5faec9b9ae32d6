use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
}

impl OrderItem {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderContext {
    pub order_id: String,
    pub amount_minor_units: i64,
    pub currency_code: String,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

impl OrderContext {
    /// Item display names joined by single spaces, in order.
    pub fn item_description(&self) -> String {
        self.items
            .iter()
            .map(|item| item.name.as_str())
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerchantConfig {
    pub business_id: String,
    pub environment: String,
}
