use std::io;

use mysmsmasking::{Config, MaskingClient, StatusMapping};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let username = require("MYSMSMASKING_USERNAME")?;
    let password = require("MYSMSMASKING_PASSWORD")?;
    let airwaybill = require("MYSMSMASKING_AIRWAYBILL")?;
    let mapping = match std::env::var("MYSMSMASKING_DETAILED_STATUS").as_deref() {
        Ok("1") => StatusMapping::Detailed,
        _ => StatusMapping::Collapsed,
    };

    let client = MaskingClient::builder(Config::from_env(username, password))
        .status_mapping(mapping)
        .build()?;
    let status = client.get_status(&airwaybill).await?;
    println!("status: {status:?}");

    Ok(())
}

fn require(var: &str) -> Result<String, io::Error> {
    std::env::var(var).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{var} environment variable is required"),
        )
    })
}
