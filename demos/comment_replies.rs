use rsimgur::client::{Client, Credentials};

#[tokio::main]
async fn main() -> rsimgur::error::Result<()> {
    env_logger::init();

    let client = Client::imgur()?.set_credentials(
        Credentials::new().client_id(std::env::var("IMGUR_CLIENT_ID").unwrap_or_default()),
    )?;

    let comment_id = std::env::args().nth(1).unwrap_or_else(|| String::from("1"));
    let replies = client.comment_replies(&comment_id).await?;

    let children = replies
        .data()
        .and_then(|data| data["children"].as_array())
        .cloned()
        .unwrap_or_default();

    println!("{} replies to comment {}", children.len(), comment_id);

    for reply in children {
        println!("- #{} by {}: {}", reply["id"], reply["author"], reply["comment"]);
    }

    Ok(())
}
