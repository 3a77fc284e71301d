use std::io;
use std::time::Duration;

use mysmsmasking::{Config, MaskingClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let username = std::env::var("MYSMSMASKING_USERNAME").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "MYSMSMASKING_USERNAME environment variable is required",
        )
    })?;
    let password = std::env::var("MYSMSMASKING_PASSWORD").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "MYSMSMASKING_PASSWORD environment variable is required",
        )
    })?;

    let client = MaskingClient::builder(Config::from_env(username, password))
        .timeout(Duration::from_secs(10))
        .build()?;
    let info = client.get_account_info().await?;
    println!("balance: {}, expires: {}", info.balance, info.expiry);

    Ok(())
}
