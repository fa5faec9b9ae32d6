use paypal_checkout::config::Config;
use paypal_checkout::server::CheckoutServer;
use rmcp::ServiceExt;
use rmcp::transport::stdio;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Log to stderr, stdout carries the MCP JSON-RPC stream
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,paypal_checkout=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .init();

    let config = Config::load()?;
    tracing::info!(
        business_id = %config.merchant.business_id,
        environment = %config.merchant.environment,
        submit_url = config.submit_url(),
        "Checkout configuration loaded"
    );

    let server = CheckoutServer::new(config)?;
    tracing::info!(
        "{} ready, building checkout forms over MCP stdio",
        server.server_name()
    );

    let service = server.serve(stdio()).await?;
    service.waiting().await?;

    Ok(())
}
