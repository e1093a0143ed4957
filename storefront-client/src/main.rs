//! `storefront` - command line front for the storefront client
//!
//! Every subcommand runs one synchronizing operation and prints the
//! affected store branch as JSON on stdout. Logs go to stderr.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use storefront_client::logging::{self, LogConfig};
use storefront_client::{CartLine, ClientConfig, StorefrontClient};

#[derive(Debug, Parser)]
#[command(name = "storefront", version, about = "Storefront API client")]
struct Cli {
    /// API origin (overrides STOREFRONT_API_URL)
    #[arg(long, env = "STOREFRONT_API_URL")]
    base_url: Option<String>,

    /// Session cookie sent with every request
    #[arg(long, env = "STOREFRONT_COOKIE")]
    cookie: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load one catalog page
    Products {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 15)]
        limit: u32,
    },
    /// Show one product
    Product { id: String },
    /// Show the server cart
    Cart,
    /// Put a product into the cart (adds to the quantity already there)
    Add {
        product_id: String,
        #[arg(long, default_value_t = 1)]
        quantity: u32,
    },
    /// Load one page of order history
    Orders {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
    /// Check out the server cart
    Submit,
    /// Empty the server cart
    Clean,
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = ClientConfig::from_env()?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(cookie) = cli.cookie {
        config.cookie = Some(cookie);
    }

    let _guard = logging::init(&LogConfig {
        dir: config.log_dir.clone(),
        default_filter: None,
    })?;

    let client = StorefrontClient::connect(&config)?;
    let store = client.store();

    match cli.command {
        Command::Products { page, limit } => {
            client.catalog().load_page(page, limit).await?;
            print_json(&store.catalog().await)?;
        }
        Command::Product { id } => {
            let product = client.catalog().product(&id).await?;
            print_json(&product)?;
        }
        Command::Cart => {
            client.cart().fetch_cart().await?;
            print_json(&store.cart().await)?;
        }
        Command::Add {
            product_id,
            quantity,
        } => {
            let cart = client.cart();
            cart.fetch_cart().await?;

            let mut lines = store.cart().await.products;
            match lines.iter_mut().find(|l| l.product.id == product_id) {
                Some(line) => line.quantity = Some(line.resolved_quantity() + quantity),
                None => {
                    let product = client
                        .catalog()
                        .product(&product_id)
                        .await
                        .with_context(|| format!("looking up product {product_id}"))?;
                    lines.push(CartLine::new(product, quantity));
                }
            }

            cart.update_cart(lines).await?;
            print_json(&store.cart().await)?;
        }
        Command::Orders { page, limit } => {
            client.orders().fetch_page(page, limit).await?;
            print_json(&store.orders().await)?;
        }
        Command::Submit => {
            client.orders().submit_order().await?;
            print_json(&store.snapshot().await)?;
        }
        Command::Clean => {
            client.cart().clean_cart().await?;
            client.cart().clear().await;
            print_json(&store.cart().await)?;
        }
    }

    Ok(())
}
