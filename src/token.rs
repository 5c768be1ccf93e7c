use super::{
    client::{Auth, Client},
    error::{Error, Result as ImgurResult},
    response::Response,
    utils::non_empty,
};

use serde::{Deserialize, Serialize};

use url::Url;

/// The interesting part of a successful `oauth2/token` response.
#[derive(Debug, PartialEq, Eq, Deserialize, Clone)]
#[non_exhaustive]
pub struct AccessToken {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub account_id: Option<u64>,
    #[serde(default)]
    pub account_username: Option<String>,
}

impl AccessToken {
    /// Extracts the token from a response returned by [`Client::refresh_token`]. Returns `None`
    /// if the body doesn't contain one.
    pub fn from_response(response: &Response) -> Option<AccessToken> {
        response
            .as_json()
            .and_then(|json| serde_json::from_value(json.clone()).ok())
    }
}

#[derive(Serialize)]
struct AuthorizeParams<'a> {
    client_id: &'a str,
    response_type: &'static str,
}

#[derive(Serialize)]
struct RefreshBody<'a> {
    refresh_token: &'a str,
    client_id: Option<&'a str>,
    client_secret: Option<&'a str>,
    grant_type: &'static str,
}

impl Client {
    /// Returns the URL to send users to so that they authorize your application. After
    /// authorizing, Imgur redirects them to your application's callback with the access token in
    /// the URL fragment.
    ///
    /// ```
    /// # use rsimgur::client::{Client, Credentials};
    /// # fn main() -> rsimgur::error::Result<()> {
    /// let client = Client::imgur()?.set_credentials(Credentials::new().client_id("my-client-id"))?;
    ///
    /// assert_eq!(
    ///     client.authorize_url()?.as_str(),
    ///     "https://api.imgur.com/3/oauth2/authorize?client_id=my-client-id&response_type=token"
    /// );
    /// # Ok(()) }
    /// ```
    pub fn authorize_url(&self) -> ImgurResult<Url> {
        let client_id = self.client_id().unwrap_or_default();

        if client_id.is_empty() {
            return Err(Error::InvalidArgument(String::from(
                "a client_id is needed to authorize users",
            )));
        }

        self.make_url(
            "oauth2/authorize",
            &AuthorizeParams {
                client_id,
                response_type: "token",
            },
        )
    }

    /// Exchanges a refresh token for a new access token. Requires the current access token.
    ///
    /// ```no_run
    /// # use rsimgur::client::{Client, Credentials};
    /// # use rsimgur::token::AccessToken;
    /// # #[tokio::main]
    /// # async fn main() -> rsimgur::error::Result<()> {
    /// let client = Client::imgur()?.set_credentials(
    ///     Credentials::new()
    ///         .client_id("my-client-id")
    ///         .client_secret("my-secret")
    ///         .token("expired-access-token"),
    /// )?;
    ///
    /// let response = client.refresh_token("my-refresh-token").await?;
    ///
    /// if let Some(token) = AccessToken::from_response(&response) {
    ///     let client = client.with_token(&token.access_token)?;
    /// }
    /// # Ok(()) }
    /// ```
    pub async fn refresh_token(&self, refresh_token: &str) -> ImgurResult<Response> {
        let body = RefreshBody {
            refresh_token: non_empty("refresh_token", refresh_token)?,
            client_id: self.client_id(),
            client_secret: self.client_secret(),
            grant_type: "refresh_token",
        };

        self.post_endpoint("oauth2/token", Auth::Required, Some(&body))
            .await
    }
}
