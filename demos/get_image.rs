use rsimgur::client::{Client, Credentials};

#[tokio::main]
async fn main() -> rsimgur::error::Result<()> {
    env_logger::init();

    let client_id = std::env::var("IMGUR_CLIENT_ID").unwrap_or_default();
    let client = Client::imgur()?.set_credentials(Credentials::new().client_id(client_id))?;

    let hash = std::env::args().nth(1).unwrap_or_else(|| String::from("abc123"));
    let image = client.get_image(&hash).await?;

    match image.data() {
        Some(data) => println!("- {}: {} ({}x{})", hash, data["link"], data["width"], data["height"]),
        None => println!("- {}: unexpected response: {:?}", hash, image),
    }

    Ok(())
}
