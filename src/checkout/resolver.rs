use serde::Serialize;
use url::Url;

use crate::config::CallbackConfig;
use crate::error::CheckoutError;

pub const ORDER_ID_PLACEHOLDER: &str = "{order_id}";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallbackUrls {
    pub return_url: String,
    pub cancel_url: String,
    pub notify_url: String,
    pub base_submit_url: String,
}

/// Produces the callback routes and the provider submission URL for an order.
pub trait UrlResolver: Send + Sync {
    fn urls_for(&self, order_id: &str) -> Result<CallbackUrls, CheckoutError>;
}

/// Returns the same four URLs for every order.
#[derive(Debug, Clone)]
pub struct StaticUrlResolver {
    urls: CallbackUrls,
}

impl StaticUrlResolver {
    pub fn new(urls: CallbackUrls) -> Self {
        Self { urls }
    }
}

impl UrlResolver for StaticUrlResolver {
    fn urls_for(&self, _order_id: &str) -> Result<CallbackUrls, CheckoutError> {
        Ok(self.urls.clone())
    }
}

/// Builds callback URLs by substituting the order id into path templates
/// joined onto the shop's public base URL.
#[derive(Debug, Clone)]
pub struct CallbackUrlResolver {
    base: Url,
    return_path: String,
    cancel_path: String,
    notify_path: String,
    submit_url: String,
}

impl CallbackUrlResolver {
    pub fn new(callbacks: &CallbackConfig, submit_url: &str) -> Result<Self, CheckoutError> {
        let base = Url::parse(&callbacks.public_base_url).map_err(|e| {
            CheckoutError::UrlResolution(format!(
                "invalid public base URL '{}': {e}",
                callbacks.public_base_url
            ))
        })?;
        if base.cannot_be_a_base() {
            return Err(CheckoutError::UrlResolution(format!(
                "public base URL '{}' cannot carry a path",
                callbacks.public_base_url
            )));
        }

        for template in [
            &callbacks.return_path,
            &callbacks.cancel_path,
            &callbacks.notify_path,
        ] {
            if !template.split('/').any(|s| s == ORDER_ID_PLACEHOLDER) {
                return Err(CheckoutError::UrlResolution(format!(
                    "path template '{template}' has no {ORDER_ID_PLACEHOLDER} segment"
                )));
            }
        }

        Url::parse(submit_url).map_err(|e| {
            CheckoutError::UrlResolution(format!("invalid submit URL '{submit_url}': {e}"))
        })?;

        Ok(Self {
            base,
            return_path: callbacks.return_path.clone(),
            cancel_path: callbacks.cancel_path.clone(),
            notify_path: callbacks.notify_path.clone(),
            submit_url: submit_url.to_string(),
        })
    }

    fn route(&self, template: &str, order_id: &str) -> Result<String, CheckoutError> {
        let mut url = self.base.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                CheckoutError::UrlResolution("public base URL cannot carry a path".into())
            })?;
            segments.pop_if_empty();
            for segment in template.split('/').filter(|s| !s.is_empty()) {
                if segment == ORDER_ID_PLACEHOLDER {
                    segments.push(order_id);
                } else {
                    segments.push(segment);
                }
            }
        }
        Ok(url.to_string())
    }
}

impl UrlResolver for CallbackUrlResolver {
    fn urls_for(&self, order_id: &str) -> Result<CallbackUrls, CheckoutError> {
        if order_id.trim().is_empty() {
            return Err(CheckoutError::UrlResolution("order id is empty".into()));
        }
        // Dot segments are dropped when pushed onto a path.
        if order_id == "." || order_id == ".." {
            return Err(CheckoutError::UrlResolution(format!(
                "order id '{order_id}' cannot be used as a path segment"
            )));
        }

        Ok(CallbackUrls {
            return_url: self.route(&self.return_path, order_id)?,
            cancel_url: self.route(&self.cancel_path, order_id)?,
            notify_url: self.route(&self.notify_path, order_id)?,
            base_submit_url: self.submit_url.clone(),
        })
    }
}
