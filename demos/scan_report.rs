//! Ping the API, then write a web page scan, a package report and the
//! showcase to JSON files in the current directory.
//!
//! ```bash
//! RUST_LOG=gradejs_sdk=debug cargo run --example scan_report
//! ```

use gradejs_sdk::prelude::*;
use std::fs::File;
use std::io::BufWriter;
use tracing_subscriber::EnvFilter;

const URL_EXAMPLE: &str = "https://github.com/";
const PACKAGE_EXAMPLE: &str = "axios";

fn write_json(path: &str, payload: &Payload) -> Result<(), Box<dyn std::error::Error>> {
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer(writer, payload)?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let base_url = std::env::var("GRADEJS_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    let client = GradeJsClient::builder().base_url(&base_url).build()?;

    println!("Ping: {}", client.ping().await?);

    println!("getOrRequestWebPageScan for {} writing...", URL_EXAMPLE);
    let scan = client.get_or_request_web_page_scan(URL_EXAMPLE).await?;
    write_json("getOrRequestWebPageScan.json", &scan)?;

    println!("getPackageInfo for {} writing...", PACKAGE_EXAMPLE);
    let package = client.get_package_info(PACKAGE_EXAMPLE).await?;
    write_json("getPackageInfo.json", &package)?;

    println!("getShowcase writing...");
    let showcase = client.get_showcase().await?;
    write_json("getShowcase.json", &showcase)?;

    client.close().await;
    Ok(())
}
