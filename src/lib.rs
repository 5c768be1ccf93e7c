//! Wrapper crate for the [Imgur](https://imgur.com) API.
//!
//! ## Usage
//!
//! First, create a [`Client`] and give it your application's credentials. You get a client ID
//! (and secret) by [registering an application](https://api.imgur.com/oauth2/addclient).
//!
//! ```no_run
//! # use rsimgur::client::{Client, Credentials};
//! # fn main() -> Result<(), rsimgur::error::Error> {
//! let client = Client::imgur()?.set_credentials(
//!     Credentials::new()
//!         .client_id("my-client-id")
//!         .client_secret("my-client-secret"),
//! )?;
//! # Ok(()) }
//! ```
//!
//! Now it's ready to go! For example you can get image `abc123` like this:
//!
//! ```no_run
//! # use rsimgur::client::{Client, Credentials};
//! # #[tokio::main]
//! # async fn main() -> Result<(), rsimgur::error::Error> {
//! # let client = Client::imgur()?.set_credentials(Credentials::new().client_id("my-client-id"))?;
//! let image = client.get_image("abc123").await?;
//!
//! println!("{}", image.data().unwrap()["link"]);
//! # Ok(()) }
//! ```
//!
//! Or upload one from your disk:
//!
//! ```no_run
//! # use rsimgur::client::{Client, Credentials};
//! # use rsimgur::image::UploadOptions;
//! # #[tokio::main]
//! # async fn main() -> Result<(), rsimgur::error::Error> {
//! # let client = Client::imgur()?.set_credentials(Credentials::new().client_id("my-client-id"))?;
//! let uploaded = client
//!     .upload_image("./photo.png", &UploadOptions::new().title("My photo"))
//!     .await?;
//! # Ok(()) }
//! ```
//!
//! ## Authentication
//!
//! Requests are sent with one of two `Authorization` headers:
//!
//! - `Client-ID <client_id>` identifies your application only. This is enough to read public
//!   data and to upload anonymously.
//! - `Bearer <access_token>` acts on behalf of a user. Give the client a token with
//!   [`Credentials::token`] or [`Client::with_token`]; users obtain one by visiting
//!   [`Client::authorize_url`].
//!
//! Operations that act on behalf of a user (favoriting, commenting, account settings...) fail
//! with [`Error::AuthenticationRequired`] when the client has no token, without sending
//! anything. Operations that work both ways use the token when there is one.
//!
//! ## Responses
//!
//! Every operation returns the body of the response as a [`Response`]: parsed JSON when the body
//! is JSON, the raw text otherwise. Unsuccessful HTTP statuses are returned as [`Error::Http`]
//! with the error message Imgur gave, if any.
//!
//! `rsimgur` performs exactly one request per call: nothing is cached, retried or throttled.
//! Imgur does [rate limit](https://apidocs.imgur.com/#rate-limits) applications though, so keep
//! an eye on your usage.
//!
//! [`Client`]: client/struct.Client.html
//! [`Credentials::token`]: client/struct.Credentials.html#method.token
//! [`Client::with_token`]: client/struct.Client.html#method.with_token
//! [`Client::authorize_url`]: client/struct.Client.html#method.authorize_url
//! [`Error::AuthenticationRequired`]: error/enum.Error.html#variant.AuthenticationRequired
//! [`Error::Http`]: error/enum.Error.html#variant.Http
//! [`Response`]: response/enum.Response.html

mod utils;

/// Client related structures.
pub mod client;

/// Error management.
pub mod error;

/// Response bodies.
pub mod response;

/// Image management.
pub mod image;

/// Comment management.
pub mod comment;

/// Other users' accounts.
pub mod user;

/// The authenticated user's account.
pub mod account;

/// OAuth tokens.
pub mod token;
