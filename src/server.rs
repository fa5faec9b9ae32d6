use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{ServerCapabilities, ServerInfo};
use rmcp::{tool, tool_handler, tool_router, ServerHandler};

use crate::checkout::{self, CallbackUrlResolver, MerchantConfig, OrderContext};
use crate::config::Config;
use crate::tools::checkout::*;

pub struct CheckoutServer {
    config: Arc<Config>,
    merchant: MerchantConfig,
    resolver: Arc<CallbackUrlResolver>,
    tool_router: ToolRouter<Self>,
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for CheckoutServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Hosted checkout form builder. Builds the POST form that redirects a \
                 buyer to the PayPal Web Checkout page for an order, and lists the \
                 currencies the provider accepts."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[tool_router(router = tool_router)]
impl CheckoutServer {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let config = Arc::new(config);
        let merchant = config.merchant();

        let resolver = CallbackUrlResolver::new(&config.callbacks, config.submit_url())
            .map_err(|e| anyhow::anyhow!("Invalid callback configuration: {e}"))?;

        Ok(Self {
            config,
            merchant,
            resolver: Arc::new(resolver),
            tool_router: Self::tool_router(),
        })
    }

    #[tool(
        name = "build_checkout_form",
        description = "Build the hosted checkout redirect form (action URL, method, ordered fields) for an order"
    )]
    async fn build_checkout_form(
        &self,
        Parameters(params): Parameters<BuildCheckoutFormParams>,
    ) -> Result<String, String> {
        let order = OrderContext::from(params);

        let form = checkout::build(&order, &self.merchant, self.resolver.as_ref()).map_err(|e| {
            tracing::warn!(order_id = %order.order_id, "Checkout form rejected: {e}");
            e.to_string()
        })?;

        let response = BuildCheckoutFormResponse {
            body: form.to_form_body(),
            form,
        };

        serde_json::to_string_pretty(&response).map_err(|e| e.to_string())
    }

    #[tool(
        name = "list_supported_currencies",
        description = "List the ISO 4217 currency codes accepted by the hosted checkout"
    )]
    async fn list_supported_currencies(&self) -> Result<String, String> {
        let currencies: Vec<String> = checkout::supported_currencies()
            .iter()
            .map(|c| c.to_string())
            .collect();
        let count = currencies.len() as u32;

        serde_json::to_string_pretty(&SupportedCurrenciesResponse { currencies, count })
            .map_err(|e| e.to_string())
    }

    pub fn server_name(&self) -> &str {
        &self.config.server.name
    }
}
