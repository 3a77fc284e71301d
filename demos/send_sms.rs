use std::io;

use mysmsmasking::{Config, MaskingClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (username, password) = credentials()?;
    let msisdn = std::env::var("MYSMSMASKING_MSISDN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "MYSMSMASKING_MSISDN environment variable is required",
        )
    })?;
    let message = std::env::var("MYSMSMASKING_MESSAGE")
        .unwrap_or_else(|_| "Hello from the mysmsmasking demo.".to_owned());

    let client = MaskingClient::new(Config::from_env(username, password));
    let awb = client.send(&msisdn, &message).await?;
    println!("airwaybill: {:?}, received at: {}", awb.id, awb.timestamp);

    Ok(())
}

fn credentials() -> Result<(String, String), io::Error> {
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
    Ok((username, password))
}
