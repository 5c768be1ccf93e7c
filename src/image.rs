use super::{
    client::{Auth, Client},
    error::{Error, Result as ImgurResult},
    response::Response,
    utils::path_segment,
};

use base64::{engine::general_purpose::STANDARD, Engine as _};

use reqwest::Method;

use serde::Serialize;
use serde_with::skip_serializing_none;

use std::path::Path;

/// Optional information attached to an uploaded image.
///
/// ```
/// # use rsimgur::image::UploadOptions;
/// let options = UploadOptions::new()
///     .title("Sunset")
///     .description("Taken from the balcony")
///     .album("deletehash-of-an-album");
/// ```
#[skip_serializing_none]
#[derive(Default, Debug, PartialEq, Eq, Serialize, Clone)]
pub struct UploadOptions {
    album: Option<String>,
    name: Option<String>,
    title: Option<String>,
    description: Option<String>,
}

impl UploadOptions {
    /// Create a new instance of `UploadOptions` with nothing set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The ID of the album to add the image to. For anonymous albums this is the album's
    /// deletehash.
    pub fn album<T: Into<Option<S>>, S: Into<String>>(mut self, album: T) -> Self {
        self.album = album.into().map(Into::into);
        self
    }

    /// The name of the file.
    pub fn name<T: Into<Option<S>>, S: Into<String>>(mut self, name: T) -> Self {
        self.name = name.into().map(Into::into);
        self
    }

    /// The title of the image.
    pub fn title<T: Into<Option<S>>, S: Into<String>>(mut self, title: T) -> Self {
        self.title = title.into().map(Into::into);
        self
    }

    /// The description of the image.
    pub fn description<T: Into<Option<S>>, S: Into<String>>(mut self, description: T) -> Self {
        self.description = description.into().map(Into::into);
        self
    }
}

#[derive(Serialize)]
struct UploadBody<'a> {
    #[serde(flatten)]
    options: &'a UploadOptions,
    #[serde(rename = "type")]
    kind: &'static str,
    image: String,
}

/// New title and/or description for an existing image. Fields left unset aren't sent.
#[skip_serializing_none]
#[derive(Default, Debug, PartialEq, Eq, Serialize, Clone)]
pub struct ImageUpdate {
    title: Option<String>,
    description: Option<String>,
}

impl ImageUpdate {
    /// Create an update that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// The new title of the image.
    pub fn title<T: Into<Option<S>>, S: Into<String>>(mut self, title: T) -> Self {
        self.title = title.into().map(Into::into);
        self
    }

    /// The new description of the image.
    pub fn description<T: Into<Option<S>>, S: Into<String>>(mut self, description: T) -> Self {
        self.description = description.into().map(Into::into);
        self
    }
}

impl Client {
    /// Returns information about the image with the given hash. Always sent anonymously, even
    /// when the client holds an access token.
    ///
    /// ```no_run
    /// # use rsimgur::client::{Client, Credentials};
    /// # #[tokio::main]
    /// # async fn main() -> rsimgur::error::Result<()> {
    /// let client = Client::imgur()?.set_credentials(Credentials::new().client_id("my-client-id"))?;
    /// let image = client.get_image("abc123").await?;
    ///
    /// println!("{}", image.data().unwrap()["link"]);
    /// # Ok(()) }
    /// ```
    pub async fn get_image(&self, hash: &str) -> ImgurResult<Response> {
        let hash = path_segment("hash", hash)?;

        self.get_endpoint(&format!("image/{}", hash), Auth::Anonymous)
            .await
    }

    /// Uploads the file at `path`. The whole file is read into memory and sent base64-encoded.
    /// The upload is tied to the user's account when the client holds an access token, and is
    /// anonymous otherwise.
    ///
    /// ```no_run
    /// # use rsimgur::client::{Client, Credentials};
    /// # use rsimgur::image::UploadOptions;
    /// # #[tokio::main]
    /// # async fn main() -> rsimgur::error::Result<()> {
    /// let client = Client::imgur()?.set_credentials(Credentials::new().client_id("my-client-id"))?;
    /// let uploaded = client
    ///     .upload_image("./photo.png", &UploadOptions::new().title("x"))
    ///     .await?;
    ///
    /// println!("{}", uploaded.data().unwrap()["link"]);
    /// # Ok(()) }
    /// ```
    pub async fn upload_image<P: AsRef<Path>>(
        &self,
        path: P,
        options: &UploadOptions,
    ) -> ImgurResult<Response> {
        let path = path.as_ref();

        if path.as_os_str().is_empty() {
            return Err(Error::InvalidArgument(String::from(
                "file path must not be empty",
            )));
        }

        let file = tokio::fs::read(path).await?;

        self.upload_image_bytes(&file, options).await
    }

    /// Uploads an image that is already in memory.
    pub async fn upload_image_bytes(
        &self,
        image: &[u8],
        options: &UploadOptions,
    ) -> ImgurResult<Response> {
        let url = self.make_url("image", options)?;
        let body = UploadBody {
            options,
            kind: "base64",
            image: STANDARD.encode(image),
        };

        self.send(
            Method::POST,
            url,
            Auth::Optional,
            Some(serde_json::to_value(&body)?),
        )
        .await
    }

    /// Updates the title and/or description of an image. Requires an access token.
    pub async fn update_image(&self, hash: &str, update: &ImageUpdate) -> ImgurResult<Response> {
        let hash = path_segment("hash", hash)?;

        self.post_endpoint(&format!("image/{}", hash), Auth::Required, Some(update))
            .await
    }

    /// Deletes an image. `hash` is the image's deletehash for anonymous uploads, or its ID when
    /// the client holds the owner's access token.
    pub async fn delete_image(&self, hash: &str) -> ImgurResult<Response> {
        let hash = path_segment("hash", hash)?;

        self.delete_endpoint(&format!("image/{}", hash), Auth::Optional)
            .await
    }

    /// Favorites an image, or unfavorites it if it already was. Requires an access token.
    pub async fn favorite_image(&self, hash: &str) -> ImgurResult<Response> {
        let hash = path_segment("hash", hash)?;

        self.post_endpoint(
            &format!("image/{}/favorite", hash),
            Auth::Required,
            None::<&()>,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;
    use std::io::Write;

    const IMAGE_JSON: &str = r#"{"data":{"id":"abc123","title":null,"type":"image/png","width":640,"height":480,"link":"https://i.imgur.com/abc123.png"},"success":true,"status":200}"#;

    #[tokio::test]
    async fn get_image_anonymously() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("GET", "/image/abc123")
            .match_header("authorization", "Client-ID my-client-id")
            .with_body(IMAGE_JSON)
            .create_async()
            .await;

        let client = Client::new_mocked(&server.url(), None);
        let image = client.get_image("abc123").await.unwrap();

        assert_eq!(
            image,
            Response::Json(serde_json::from_str(IMAGE_JSON).unwrap())
        );
        assert_eq!(image.data().unwrap()["id"], "abc123");
        m.assert_async().await;
    }

    #[tokio::test]
    async fn get_image_ignores_token() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("GET", "/image/abc123")
            .match_header("authorization", "Client-ID my-client-id")
            .with_body(IMAGE_JSON)
            .create_async()
            .await;

        let client = Client::new_mocked(&server.url(), Some("tkn"));
        client.get_image("abc123").await.unwrap();

        m.assert_async().await;
    }

    #[tokio::test]
    async fn get_image_requires_hash() {
        let client = Client::new_mocked("http://127.0.0.1:1", None);

        assert!(matches!(
            client.get_image("").await,
            Err(Error::InvalidArgument(_))
        ));
    }

    #[tokio::test]
    async fn hashes_stay_in_their_segment() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("GET", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let client = Client::new_mocked(&server.url(), Some("tkn"));

        assert!(matches!(
            client.get_image("a/b").await,
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            client.get_image("..").await,
            Err(Error::InvalidArgument(_))
        ));
        m.assert_async().await;
    }

    #[tokio::test]
    async fn upload_image_sends_base64_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"\x89PNG not really a png").unwrap();

        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", Matcher::Regex(r"^/image(\?.*)?$".into()))
            .match_header("authorization", "Client-ID my-client-id")
            .match_query(Matcher::UrlEncoded("title".into(), "x".into()))
            .match_body(Matcher::PartialJson(json!({
                "title": "x",
                "type": "base64",
                "image": STANDARD.encode(b"\x89PNG not really a png"),
            })))
            .with_body(IMAGE_JSON)
            .create_async()
            .await;

        let client = Client::new_mocked(&server.url(), None);
        let uploaded = client
            .upload_image(file.path(), &UploadOptions::new().title("x"))
            .await
            .unwrap();

        assert_eq!(uploaded.data().unwrap()["link"], "https://i.imgur.com/abc123.png");
        m.assert_async().await;
    }

    #[tokio::test]
    async fn upload_image_with_token_uses_bearer() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/image")
            .match_header("authorization", "Bearer tkn")
            .with_body(IMAGE_JSON)
            .create_async()
            .await;

        let client = Client::new_mocked(&server.url(), Some("tkn"));
        client
            .upload_image_bytes(b"raw", &UploadOptions::new())
            .await
            .unwrap();

        m.assert_async().await;
    }

    #[tokio::test]
    async fn upload_missing_file_is_io_error() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let client = Client::new_mocked(&server.url(), None);
        let result = client
            .upload_image("./definitely/not/here.png", &UploadOptions::new())
            .await;

        assert!(matches!(result, Err(Error::Io(_))));
        assert!(matches!(
            client.upload_image("", &UploadOptions::new()).await,
            Err(Error::InvalidArgument(_))
        ));
        m.assert_async().await;
    }

    #[tokio::test]
    async fn update_image_requires_token() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let client = Client::new_mocked(&server.url(), None);
        let result = client
            .update_image("abc123", &ImageUpdate::new().title("new title"))
            .await;

        assert!(matches!(result, Err(Error::AuthenticationRequired)));
        m.assert_async().await;
    }

    #[tokio::test]
    async fn update_image_sends_only_set_fields() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/image/abc123")
            .match_header("authorization", "Bearer tkn")
            .match_body(Matcher::Json(json!({ "title": "new title" })))
            .with_body(r#"{"data":true,"success":true,"status":200}"#)
            .create_async()
            .await;

        let client = Client::new_mocked(&server.url(), Some("tkn"));
        let updated = client
            .update_image("abc123", &ImageUpdate::new().title("new title"))
            .await
            .unwrap();

        assert_eq!(updated.success(), Some(true));
        m.assert_async().await;
    }

    #[tokio::test]
    async fn delete_image_with_deletehash() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("DELETE", "/image/deletehash")
            .match_header("authorization", "Client-ID my-client-id")
            .with_body(r#"{"data":true,"success":true,"status":200}"#)
            .create_async()
            .await;

        let client = Client::new_mocked(&server.url(), None);
        client.delete_image("deletehash").await.unwrap();

        m.assert_async().await;
    }

    #[tokio::test]
    async fn favorite_image_requires_token() {
        let mut server = mockito::Server::new_async().await;
        let unauthorized = server
            .mock("POST", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let client = Client::new_mocked(&server.url(), None);
        assert!(matches!(
            client.favorite_image("abc123").await,
            Err(Error::AuthenticationRequired)
        ));
        unauthorized.assert_async().await;
    }

    #[tokio::test]
    async fn favorite_image() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/image/abc123/favorite")
            .match_header("authorization", "Bearer tkn")
            .with_body(r#"{"data":"favorited","success":true,"status":200}"#)
            .create_async()
            .await;

        let client = Client::new_mocked(&server.url(), Some("tkn"));
        let favorited = client.favorite_image("abc123").await.unwrap();

        assert_eq!(favorited.data().unwrap(), "favorited");
        m.assert_async().await;
    }
}
