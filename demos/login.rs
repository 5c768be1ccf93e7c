use rsimgur::client::{Client, Credentials};
use rsimgur::token::AccessToken;

macro_rules! input {
    ($($arg:tt)*) => ({
        use std::io::prelude::*;

        print!($($arg)*);

        let mut buffer = String::new();

        std::io::stdout()
            .flush()
            .and_then(|_| std::io::stdin().read_line(&mut buffer))
            .map(move |_| if buffer.trim().is_empty() {
                None
            } else {
                Some(String::from(buffer.trim()))
            })
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let client_id = input!("Client ID: ")?.unwrap_or_default();
    let client_secret = input!("Client secret (optional): ")?;

    let client = Client::imgur()?.set_credentials(
        Credentials::new()
            .client_id(client_id)
            .client_secret::<_, String>(client_secret),
    )?;

    println!("Authorize the application here: {}", client.authorize_url()?);

    let token = match input!("Access token: ")? {
        Some(token) => token,
        None => return Ok(()),
    };
    let mut client = client.with_token(&token)?;

    if let Some(refresh_token) = input!("Refresh token (optional): ")? {
        let response = client.refresh_token(&refresh_token).await?;

        if let Some(token) = AccessToken::from_response(&response) {
            println!("Refreshed, new token expires in {:?}s", token.expires_in);
            client = client.with_token(&token.access_token)?;
        }
    }

    let settings = client.account().settings().await?;
    println!("Logged in: {}", settings.data().map_or(false, |d| d.is_object()));

    let images = client.account().images().await?;
    let count = images
        .data()
        .and_then(|d| d.as_array())
        .map_or(0, Vec::len);
    println!("You have {} images", count);

    Ok(())
}
