use serde::{Serialize, Serializer};

use super::amount::format_minor_units;
use super::currency::validate_currency;
use super::order::{MerchantConfig, OrderContext};
use super::resolver::UrlResolver;
use crate::error::CheckoutError;

/// Field names in submission order.
pub const FIELD_NAMES: [&str; 9] = [
    "item_name",
    "amount",
    "business",
    "return",
    "cancel_return",
    "notify_url",
    "item_number",
    "currency_code",
    "env",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FormMethod {
    Post,
}

impl FormMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormMethod::Post => "POST",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormDescriptor {
    pub action_url: String,
    pub method: FormMethod,
    #[serde(serialize_with = "serialize_ordered")]
    pub fields: Vec<(String, String)>,
}

fn serialize_ordered<S>(fields: &[(String, String)], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_map(fields.iter().map(|(k, v)| (k, v)))
}

impl FormDescriptor {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// `application/x-www-form-urlencoded` body, in field order.
    pub fn to_form_body(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.fields.iter())
            .finish()
    }
}

/// Shape the hosted checkout redirect form for one order.
pub fn build(
    order: &OrderContext,
    merchant: &MerchantConfig,
    resolver: &dyn UrlResolver,
) -> Result<FormDescriptor, CheckoutError> {
    let amount = format_minor_units(order.amount_minor_units)?;
    let currency = validate_currency(&order.currency_code)?;
    let urls = resolver.urls_for(&order.order_id)?;
    let item_name = order.item_description();

    let values = [
        item_name,
        amount,
        merchant.business_id.clone(),
        urls.return_url,
        urls.cancel_url,
        urls.notify_url,
        order.order_id.clone(),
        currency.to_string(),
        merchant.environment.clone(),
    ];
    let fields = FIELD_NAMES
        .iter()
        .map(|name| name.to_string())
        .zip(values)
        .collect();

    tracing::debug!(
        order_id = %order.order_id,
        currency = currency,
        environment = %merchant.environment,
        "Built checkout form"
    );

    Ok(FormDescriptor {
        action_url: urls.base_submit_url,
        method: FormMethod::Post,
        fields,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::order::OrderItem;
    use crate::checkout::resolver::{CallbackUrls, StaticUrlResolver};

    fn resolver() -> StaticUrlResolver {
        StaticUrlResolver::new(CallbackUrls {
            return_url: "https://x/return/ORD-1".into(),
            cancel_url: "https://x/cancel/ORD-1".into(),
            notify_url: "https://x/notify/ORD-1".into(),
            base_submit_url: "https://paypal.example/cgi-bin".into(),
        })
    }

    fn merchant() -> MerchantConfig {
        MerchantConfig {
            business_id: "biz@example.com".into(),
            environment: "sandbox".into(),
        }
    }

    fn order(currency: &str, items: &[&str]) -> OrderContext {
        OrderContext {
            order_id: "ORD-1".into(),
            amount_minor_units: 2599,
            currency_code: currency.into(),
            items: items.iter().map(|n| OrderItem::named(*n)).collect(),
        }
    }

    struct FailingResolver;

    impl UrlResolver for FailingResolver {
        fn urls_for(&self, order_id: &str) -> Result<CallbackUrls, CheckoutError> {
            Err(CheckoutError::UrlResolution(format!("no route for {order_id}")))
        }
    }

    #[test]
    fn test_build_book_order() {
        let form = build(&order("USD", &["Book"]), &merchant(), &resolver()).unwrap();

        assert_eq!(form.action_url, "https://paypal.example/cgi-bin");
        assert_eq!(form.method, FormMethod::Post);
        let expected: Vec<(String, String)> = [
            ("item_name", "Book"),
            ("amount", "25.99"),
            ("business", "biz@example.com"),
            ("return", "https://x/return/ORD-1"),
            ("cancel_return", "https://x/cancel/ORD-1"),
            ("notify_url", "https://x/notify/ORD-1"),
            ("item_number", "ORD-1"),
            ("currency_code", "USD"),
            ("env", "sandbox"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        assert_eq!(form.fields, expected);
    }

    #[test]
    fn test_field_order_is_fixed() {
        for items in [&[][..], &["Widget", "Gadget"][..]] {
            let form = build(&order("EUR", items), &merchant(), &resolver()).unwrap();
            let keys: Vec<&str> = form.fields.iter().map(|(k, _)| k.as_str()).collect();
            assert_eq!(keys, FIELD_NAMES);
        }
    }

    #[test]
    fn test_item_name_concatenation() {
        let form = build(&order("USD", &["Widget", "Gadget"]), &merchant(), &resolver()).unwrap();
        assert_eq!(form.field("item_name"), Some("Widget Gadget"));

        let form = build(&order("USD", &[]), &merchant(), &resolver()).unwrap();
        assert_eq!(form.field("item_name"), Some(""));
    }

    #[test]
    fn test_unsupported_currency_fails() {
        let err = build(&order("XXX", &["Book"]), &merchant(), &resolver()).unwrap_err();
        assert_eq!(
            err,
            CheckoutError::CurrencyNotSupported {
                code: "XXX".into()
            }
        );
    }

    #[test]
    fn test_negative_amount_fails() {
        let mut o = order("USD", &["Book"]);
        o.amount_minor_units = -5;
        let err = build(&o, &merchant(), &resolver()).unwrap_err();
        assert_eq!(err, CheckoutError::InvalidAmount(-5));
    }

    #[test]
    fn test_resolver_error_propagates() {
        let err = build(&order("USD", &["Book"]), &merchant(), &FailingResolver).unwrap_err();
        assert_eq!(err, CheckoutError::UrlResolution("no route for ORD-1".into()));
    }

    #[test]
    fn test_form_body_encoding() {
        let form = build(&order("USD", &["Blue Mug"]), &merchant(), &resolver()).unwrap();
        let body = form.to_form_body();
        assert!(body.starts_with("item_name=Blue+Mug&amount=25.99&business=biz%40example.com&return="));
        assert!(body.ends_with("&item_number=ORD-1&currency_code=USD&env=sandbox"));
    }

    #[test]
    fn test_serializes_fields_in_order() {
        let form = build(&order("USD", &["Book"]), &merchant(), &resolver()).unwrap();
        let json = serde_json::to_string(&form).unwrap();
        assert!(json.starts_with(
            r#"{"action_url":"https://paypal.example/cgi-bin","method":"POST","fields":{"item_name":"Book","amount":"25.99""#
        ));
        assert!(json.ends_with(r#""currency_code":"USD","env":"sandbox"}}"#));
    }
}
