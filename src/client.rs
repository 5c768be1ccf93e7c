use super::error::{Error, Result};
use super::response::Response;

use log::{debug, trace};

use reqwest::{
    header::{self, HeaderMap, HeaderValue},
    Method,
};

use secrecy::{ExposeSecret, SecretString};

use serde::Serialize;
use serde_json::Value as JsonValue;

use std::sync::Arc;

use url::Url;

/// Base URL of version 3 of the Imgur API.
pub const API_URL: &str = "https://api.imgur.com/3/";

/// Application and user credentials.
///
/// The client ID identifies your application and is all anonymous requests need. The access
/// token is a per-user OAuth token needed for everything acting on behalf of a user.
///
/// ```
/// # use rsimgur::client::Credentials;
/// let credentials = Credentials::new()
///     .client_id("0123456789abcde")
///     .client_secret("secret")
///     .token("user-access-token");
/// ```
#[derive(Debug, Default)]
pub struct Credentials {
    client_id: Option<String>,
    client_secret: Option<SecretString>,
    token: Option<SecretString>,
}

impl Credentials {
    /// Create an empty set of credentials.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the application's client ID.
    pub fn client_id<T: Into<Option<S>>, S: Into<String>>(mut self, client_id: T) -> Self {
        self.client_id = client_id.into().map(Into::into);
        self
    }

    /// Set the application's client secret.
    pub fn client_secret<T: Into<Option<S>>, S: Into<String>>(mut self, secret: T) -> Self {
        self.client_secret = secret
            .into()
            .map(|s| SecretString::new(Into::<String>::into(s).into_boxed_str()));
        self
    }

    /// Set the user's access token. An empty token is the same as no token.
    pub fn token<T: Into<Option<S>>, S: Into<String>>(mut self, token: T) -> Self {
        self.token = token
            .into()
            .map(Into::<String>::into)
            .filter(|t| !t.is_empty())
            .map(|t| SecretString::new(t.into_boxed_str()));
        self
    }

    fn is_usable(&self) -> bool {
        let has_id = self.client_id.as_deref().map_or(false, |id| !id.is_empty());
        let has_secret = self
            .client_secret
            .as_ref()
            .map_or(false, |s| !s.expose_secret().is_empty());

        has_id || has_secret
    }
}

/// Which kind of authorization a request is sent with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Auth {
    /// Bearer token when there is one, Client-ID otherwise.
    Optional,
    /// Always Client-ID, even when a token is held.
    Anonymous,
    /// Bearer token, failing when there is none.
    Required,
}

/// Client struct.
///
/// Cloning a `Client` is cheap: the underlying connection pool and the credentials are shared.
#[derive(Debug, Clone)]
pub struct Client {
    client: reqwest::Client,
    url: Url,
    credentials: Arc<Credentials>,
}

impl Client {
    /// Create a new client without credentials, sending requests to the API found at `url`. Most
    /// of the time you want [`Client::imgur`] instead; a custom base URL is useful to go through
    /// a proxy or to test against a mock server.
    pub fn new(url: &str) -> Result<Self> {
        let mut url = Url::parse(url)?;

        if url.cannot_be_a_base() {
            return Err(Error::CannotCreateClient(format!(
                "{} can't be used as a base URL",
                url
            )));
        }

        // Keep only the meaningful path segments so that endpoints can be appended as-is.
        let segments: Vec<String> = url
            .path_segments()
            .map(|s| s.filter(|s| !s.is_empty()).map(String::from).collect())
            .unwrap_or_default();

        if let Ok(mut path) = url.path_segments_mut() {
            path.clear().extend(segments);
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            HeaderValue::from_static(concat!("rsimgur/", env!("CARGO_PKG_VERSION"))),
        );

        match reqwest::Client::builder().default_headers(headers).build() {
            Ok(c) => Ok(Client {
                client: c,
                url,
                credentials: Arc::new(Credentials::default()),
            }),
            Err(e) => Err(Error::CannotCreateClient(format!("{:?}", e))),
        }
    }

    /// Create a new client for the official API at [`API_URL`].
    ///
    /// ```no_run
    /// # use rsimgur::client::Client;
    /// # fn main() -> rsimgur::error::Result<()> {
    /// let client = Client::imgur()?;
    /// # Ok(()) }
    /// ```
    pub fn imgur() -> Result<Self> {
        Self::new(API_URL)
    }

    /// Returns a new client using the given credentials. At least one of the client ID and the
    /// client secret must be non-empty; if they aren't, an [`Error::InvalidArgument`] is returned
    /// and nothing changes.
    ///
    /// ```
    /// # use rsimgur::client::{Client, Credentials};
    /// # fn main() -> rsimgur::error::Result<()> {
    /// let client = Client::imgur()?.set_credentials(
    ///     Credentials::new()
    ///         .client_id("0123456789abcde")
    ///         .client_secret("secret"),
    /// )?;
    /// # Ok(()) }
    /// ```
    pub fn set_credentials(&self, credentials: Credentials) -> Result<Client> {
        if !credentials.is_usable() {
            return Err(Error::InvalidArgument(String::from(
                "invalid client_id/client_secret",
            )));
        }

        Ok(Client {
            client: self.client.clone(),
            url: self.url.clone(),
            credentials: Arc::new(credentials),
        })
    }

    /// Returns a new client with the same application credentials and the given access token,
    /// e.g. after [`Client::refresh_token`].
    pub fn with_token(&self, token: &str) -> Result<Client> {
        self.set_credentials(
            Credentials::new()
                .client_id::<_, String>(self.client_id().map(String::from))
                .client_secret::<_, String>(self.client_secret().map(String::from))
                .token(token),
        )
    }

    /// Whether the client holds a user access token.
    pub fn has_token(&self) -> bool {
        self.credentials.token.is_some()
    }

    pub(crate) fn client_id(&self) -> Option<&str> {
        self.credentials.client_id.as_deref()
    }

    pub(crate) fn client_secret(&self) -> Option<&str> {
        self.credentials
            .client_secret
            .as_ref()
            .map(|s| s.expose_secret())
    }

    pub(crate) fn auth_header(&self, auth: Auth) -> Result<HeaderValue> {
        let value = match (auth, &self.credentials.token) {
            (Auth::Required, None) => return Err(Error::AuthenticationRequired),
            (Auth::Optional, Some(token)) | (Auth::Required, Some(token)) => {
                format!("Bearer {}", token.expose_secret())
            }
            _ => format!("Client-ID {}", self.client_id().unwrap_or_default()),
        };

        let mut value = HeaderValue::from_str(&value)?;
        value.set_sensitive(true);
        Ok(value)
    }

    /// Build the URL of an endpoint. The endpoint is appended to the base URL, and each parameter
    /// that isn't `None`/`null` is added to the query string. Parameters are sorted by name.
    ///
    /// ```
    /// # use rsimgur::client::Client;
    /// # fn main() -> rsimgur::error::Result<()> {
    /// let client = Client::imgur()?;
    /// let url = client.make_url("/image//abc/", &serde_json::json!({ "title": "t", "album": null }))?;
    ///
    /// assert_eq!(url.as_str(), "https://api.imgur.com/3/image/abc?title=t");
    /// # Ok(()) }
    /// ```
    pub fn make_url<Q: Serialize + ?Sized>(&self, endpoint: &str, params: &Q) -> Result<Url> {
        if endpoint.is_empty() {
            return Err(Error::InvalidArgument(String::from(
                "endpoint must not be empty",
            )));
        }

        let mut url = self.url.clone();

        url.path_segments_mut()
            .map_err(|_| Error::CannotCreateClient(format!("{} can't be used as a base URL", self.url)))?
            .pop_if_empty()
            .extend(endpoint.split('/').filter(|s| !s.is_empty()));

        let mut pairs = match serde_json::to_value(params)? {
            JsonValue::Null => Vec::new(),
            JsonValue::Object(map) => map
                .into_iter()
                .filter_map(|(k, v)| match v {
                    JsonValue::Null => None,
                    JsonValue::String(s) => Some((k, s)),
                    other => Some((k, other.to_string())),
                })
                .collect(),
            other => {
                return Err(Error::InvalidArgument(format!(
                    "query parameters must be a map, got {}",
                    other
                )))
            }
        };
        pairs.sort();

        if pairs.is_empty() {
            url.set_query(None);
        } else {
            url.query_pairs_mut().clear().extend_pairs(pairs);
        }

        Ok(url)
    }

    /// Send a request and parse its body. The authorization header is resolved first, so a
    /// missing token fails before anything goes over the wire.
    pub(crate) async fn send(
        &self,
        method: Method,
        url: Url,
        auth: Auth,
        body: Option<JsonValue>,
    ) -> Result<Response> {
        let authorization = self.auth_header(auth)?;

        debug!("{} {} ({:?} auth)", method, url, auth);

        let mut request = self
            .client
            .request(method, url)
            .header(header::AUTHORIZATION, authorization);

        if let Some(body) = body {
            request = request.json(&body);
        }

        let res = request.send().await?;
        let status = res.status();

        trace!("{} responded with {}", res.url(), status);

        let body = Response::parse(res.text().await?);

        if status.is_success() {
            Ok(body)
        } else {
            Err(Error::Http(status.as_u16(), body.error_message()))
        }
    }

    pub(crate) async fn get_endpoint(&self, endpoint: &str, auth: Auth) -> Result<Response> {
        let url = self.make_url(endpoint, &())?;
        self.send(Method::GET, url, auth, None).await
    }

    pub(crate) async fn post_endpoint<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        auth: Auth,
        body: Option<&B>,
    ) -> Result<Response> {
        let url = self.make_url(endpoint, &())?;
        let body = body.map(serde_json::to_value).transpose()?;
        self.send(Method::POST, url, auth, body).await
    }

    pub(crate) async fn delete_endpoint(&self, endpoint: &str, auth: Auth) -> Result<Response> {
        let url = self.make_url(endpoint, &())?;
        self.send(Method::DELETE, url, auth, None).await
    }
}


#[cfg(test)]
impl Client {
    /// A client pointed at a mock server, with a client ID, a secret and optionally a token.
    pub(crate) fn new_mocked(url: &str, token: Option<&str>) -> Client {
        Client::new(url)
            .unwrap()
            .set_credentials(
                Credentials::new()
                    .client_id("my-client-id")
                    .client_secret("my-secret")
                    .token::<_, &str>(token),
            )
            .unwrap()
    }
}
