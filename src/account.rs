use super::{
    client::{Auth, Client},
    error::Result as ImgurResult,
    response::Response,
};

use serde::Serialize;
use serde_with::skip_serializing_none;

/// Who can see the user's albums by default.
#[derive(Debug, PartialEq, Eq, Serialize, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum AlbumPrivacy {
    Public,
    Hidden,
    Secret,
}

/// Changes to the authenticated account's settings. Only the fields that were set are sent.
///
/// ```
/// # use rsimgur::account::{AccountSettings, AlbumPrivacy};
/// let settings = AccountSettings::new()
///     .bio("I take pictures of clouds")
///     .album_privacy(AlbumPrivacy::Hidden)
///     .show_mature(false);
/// ```
#[skip_serializing_none]
#[derive(Default, Debug, PartialEq, Eq, Serialize, Clone)]
pub struct AccountSettings {
    bio: Option<String>,
    public_images: Option<bool>,
    messaging_enabled: Option<bool>,
    album_privacy: Option<AlbumPrivacy>,
    accepted_gallery_terms: Option<bool>,
    username: Option<String>,
    show_mature: Option<bool>,
}

impl AccountSettings {
    /// Create a new instance of `AccountSettings` changing nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// The biography of the user, displayed in the gallery profile page.
    pub fn bio<T: Into<Option<S>>, S: Into<String>>(mut self, bio: T) -> Self {
        self.bio = bio.into().map(Into::into);
        self
    }

    /// Whether new images are public by default.
    pub fn public_images<T: Into<Option<bool>>>(mut self, public_images: T) -> Self {
        self.public_images = public_images.into();
        self
    }

    /// Whether other users can send private messages to the user.
    pub fn messaging_enabled<T: Into<Option<bool>>>(mut self, messaging_enabled: T) -> Self {
        self.messaging_enabled = messaging_enabled.into();
        self
    }

    pub fn album_privacy<T: Into<Option<AlbumPrivacy>>>(mut self, album_privacy: T) -> Self {
        self.album_privacy = album_privacy.into();
        self
    }

    /// Whether the user accepts the terms to submit to the gallery.
    pub fn accepted_gallery_terms<T: Into<Option<bool>>>(mut self, accepted: T) -> Self {
        self.accepted_gallery_terms = accepted.into();
        self
    }

    /// A new username for the account.
    pub fn username<T: Into<Option<S>>, S: Into<String>>(mut self, username: T) -> Self {
        self.username = username.into().map(Into::into);
        self
    }

    pub fn show_mature<T: Into<Option<bool>>>(mut self, show_mature: T) -> Self {
        self.show_mature = show_mature.into();
        self
    }
}

/// Handle on the account the client's access token belongs to, returned by [`Client::account`].
/// Every method requires an access token.
#[derive(Debug, Clone, Copy)]
pub struct Account<'a> {
    client: &'a Client,
}

impl Client {
    /// Returns a handle on the authenticated account.
    ///
    /// ```no_run
    /// # use rsimgur::client::{Client, Credentials};
    /// # #[tokio::main]
    /// # async fn main() -> rsimgur::error::Result<()> {
    /// let client = Client::imgur()?.set_credentials(
    ///     Credentials::new()
    ///         .client_id("my-client-id")
    ///         .token("user-access-token"),
    /// )?;
    ///
    /// let images = client.account().images().await?;
    /// # Ok(()) }
    /// ```
    pub fn account(&self) -> Account<'_> {
        Account { client: self }
    }
}

impl Account<'_> {
    /// Returns the images uploaded by the user.
    pub async fn images(&self) -> ImgurResult<Response> {
        self.client
            .get_endpoint("account/me/images", Auth::Required)
            .await
    }

    /// Returns the users the user blocked.
    pub async fn blocked(&self) -> ImgurResult<Response> {
        self.client
            .get_endpoint("account/me/block", Auth::Required)
            .await
    }

    /// Returns the user's current avatar.
    pub async fn avatar(&self) -> ImgurResult<Response> {
        self.client
            .get_endpoint("account/me/avatar", Auth::Required)
            .await
    }

    /// Returns the user's settings.
    pub async fn settings(&self) -> ImgurResult<Response> {
        self.client
            .get_endpoint("account/me/settings", Auth::Required)
            .await
    }

    /// Changes the user's settings.
    pub async fn edit_settings(&self, settings: &AccountSettings) -> ImgurResult<Response> {
        self.client
            .post_endpoint("account/me/settings", Auth::Required, Some(settings))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use mockito::Matcher;
    use serde_json::json;

    const OK_JSON: &str = r#"{"data":true,"success":true,"status":200}"#;

    #[test]
    fn build_settings() {
        let settings = AccountSettings::new()
            .bio("bio")
            .public_images(true)
            .messaging_enabled(false)
            .album_privacy(AlbumPrivacy::Secret)
            .accepted_gallery_terms(true)
            .username("new_name")
            .show_mature(false);

        assert_eq!(
            settings,
            AccountSettings {
                bio: Some("bio".into()),
                public_images: Some(true),
                messaging_enabled: Some(false),
                album_privacy: Some(AlbumPrivacy::Secret),
                accepted_gallery_terms: Some(true),
                username: Some("new_name".into()),
                show_mature: Some(false),
            }
        );
    }

    #[tokio::test]
    async fn account_reads() {
        let mut server = mockito::Server::new_async().await;
        let mocks = vec![
            server
                .mock("GET", "/account/me/images")
                .match_header("authorization", "Bearer tkn")
                .with_body(r#"{"data":[{"id":"abc123"}],"success":true,"status":200}"#)
                .create_async()
                .await,
            server
                .mock("GET", "/account/me/block")
                .match_header("authorization", "Bearer tkn")
                .with_body(OK_JSON)
                .create_async()
                .await,
            server
                .mock("GET", "/account/me/avatar")
                .match_header("authorization", "Bearer tkn")
                .with_body(OK_JSON)
                .create_async()
                .await,
            server
                .mock("GET", "/account/me/settings")
                .match_header("authorization", "Bearer tkn")
                .with_body(OK_JSON)
                .create_async()
                .await,
        ];

        let client = Client::new_mocked(&server.url(), Some("tkn"));
        let account = client.account();

        let images = account.images().await.unwrap();
        assert_eq!(images.data().unwrap()[0]["id"], "abc123");
        account.blocked().await.unwrap();
        account.avatar().await.unwrap();
        account.settings().await.unwrap();

        for m in mocks {
            m.assert_async().await;
        }
    }

    #[tokio::test]
    async fn edit_settings_sends_set_fields_only() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/account/me/settings")
            .match_header("authorization", "Bearer tkn")
            .match_body(Matcher::Json(json!({
                "bio": "clouds",
                "album_privacy": "hidden",
            })))
            .with_body(OK_JSON)
            .create_async()
            .await;

        let client = Client::new_mocked(&server.url(), Some("tkn"));
        client
            .account()
            .edit_settings(
                &AccountSettings::new()
                    .bio("clouds")
                    .album_privacy(AlbumPrivacy::Hidden),
            )
            .await
            .unwrap();

        m.assert_async().await;
    }

    #[tokio::test]
    async fn account_requires_token() {
        let mut server = mockito::Server::new_async().await;
        let gets = server
            .mock("GET", Matcher::Any)
            .expect(0)
            .create_async()
            .await;
        let posts = server
            .mock("POST", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let client = Client::new_mocked(&server.url(), None);

        assert!(matches!(
            client.account().images().await,
            Err(Error::AuthenticationRequired)
        ));
        assert!(matches!(
            client.account().edit_settings(&AccountSettings::new()).await,
            Err(Error::AuthenticationRequired)
        ));

        gets.assert_async().await;
        posts.assert_async().await;
    }
}
