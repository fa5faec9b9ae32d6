use anyhow::Context;
use serde::Deserialize;

use crate::checkout::MerchantConfig;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub merchant: MerchantSection,
    pub provider: ProviderConfig,
    pub callbacks: CallbackConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MerchantSection {
    pub business_id: String,
    pub environment: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    pub sandbox_url: String,
    pub live_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CallbackConfig {
    pub public_base_url: String,
    pub return_path: String,
    pub cancel_path: String,
    pub notify_path: String,
}

impl ProviderConfig {
    /// Only "live" targets production; anything else stays on the sandbox.
    pub fn submit_url(&self, environment: &str) -> &str {
        if environment == "live" {
            &self.live_url
        } else {
            &self.sandbox_url
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let path = std::env::var("CHECKOUT_CONFIG").unwrap_or_else(|_| "config.toml".into());
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {path}"))?;

        let mut config = Self::parse(&content)?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        toml::from_str(content).context("Failed to parse checkout config")
    }

    fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(business_id) = non_empty("PAYPAL_BUSINESS_ID") {
            self.merchant.business_id = business_id;
        }
        if let Some(environment) = non_empty("PAYPAL_ENVIRONMENT") {
            self.merchant.environment = environment;
        }
        if let Some(base_url) = non_empty("CHECKOUT_PUBLIC_BASE_URL") {
            self.callbacks.public_base_url = base_url;
        }
    }

    pub fn merchant(&self) -> MerchantConfig {
        MerchantConfig {
            business_id: self.merchant.business_id.clone(),
            environment: self.merchant.environment.clone(),
        }
    }

    pub fn submit_url(&self) -> &str {
        self.provider.submit_url(&self.merchant.environment)
    }
}
