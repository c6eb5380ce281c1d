//! Connectivity smoke tool: fetch and print the product list.
//!
//! Lets an operator verify the API is reachable without a browser:
//! `STOCKDECK_API_URL=http://host:8000 stockdeck-client`.

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use anyhow::Context as _;
    use stockdeck_client::{ApiConfig, HttpProductApi, ProductApi};
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ApiConfig::from_env();
    tracing::info!("listing products from {}", config.base_url);

    let api = HttpProductApi::with_config(config);
    let products = api
        .list_products()
        .await
        .context("failed to list products")?;

    println!("{} product(s)", products.len());
    for product in &products {
        println!(
            "{:>8}  {:<28} ${:>10.2}  x{}",
            product.id, product.name, product.price, product.quantity
        );
    }

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
