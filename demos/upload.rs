use rsimgur::client::{Client, Credentials};
use rsimgur::image::UploadOptions;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let path = match std::env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("usage: upload <file> [title]");
            return Ok(());
        }
    };
    let title = std::env::args().nth(2);

    // Uploads go to the user's account when a token is set, and are anonymous otherwise.
    let client = Client::imgur()?.set_credentials(
        Credentials::new()
            .client_id::<_, String>(std::env::var("IMGUR_CLIENT_ID").ok())
            .token::<_, String>(std::env::var("IMGUR_ACCESS_TOKEN").ok()),
    )?;

    let uploaded = client
        .upload_image(&path, &UploadOptions::new().title::<_, String>(title))
        .await?;

    if let Some(data) = uploaded.data() {
        println!("link: {}", data["link"]);
        println!("deletehash: {}", data["deletehash"]);
    }

    Ok(())
}
