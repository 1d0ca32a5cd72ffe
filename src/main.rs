use log::{error, info};
use porkbun_api::config::Config;
use porkbun_api::{Credentials, PorkbunClient};
use tracing_subscriber::EnvFilter;

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env().map_err(|e| format!("PORKBUN_DOMAIN: {e}"))?;
    let credentials = Credentials::from_env()?;

    let porkbun = PorkbunClient::new(config.porkbun_config(), credentials).await?;
    let response = porkbun
        .ddns_update(
            None,
            &config.subdomain,
            config.ip.as_deref(),
            config.ipv4_only,
        )
        .await?;

    if response["status"] == "SUCCESS" {
        info!("DDNS update for {} succeeded", config.domain);
        Ok(())
    } else {
        let message = response["message"].as_str().unwrap_or("unknown error");
        Err(format!("DDNS update rejected: {message}").into())
    }
}

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        error!("{}", e);
        std::process::exit(1);
    }
}
