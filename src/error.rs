use reqwest::header::InvalidHeaderValue;

use thiserror::Error;

/// Result type for `rsimgur`, using [`rsimgur::error::Error`].
///
/// [`rsimgur::error::Error`]: enum.Error.html
pub type Result<T> = ::std::result::Result<T, Error>;

/// Enum for `rsimgur` errors.
#[derive(Error, Debug)]
pub enum Error {
    /// A required argument was missing or empty, or a value couldn't be interpreted. Contains a
    /// description of the offending argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The operation needs an access token but the client doesn't hold one. No request was sent.
    #[error("Access token required for this action")]
    AuthenticationRequired,

    /// A local file couldn't be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The request couldn't be sent or the response couldn't be received.
    #[error("Couldn't send request: {0}")]
    Network(#[from] reqwest::Error),

    /// An HTTP error has occurred. The first value is the error code, the second is the reason of
    /// the failure given by the API, if available.
    #[error("HTTP error {0}{}", http_reason(.0, .1))]
    Http(u16, Option<String>),

    /// A request URL couldn't be built.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serial(#[from] serde_json::Error),

    /// The client couldn't be created. Contains a description of the error.
    #[error("Couldn't create client: {0}")]
    CannotCreateClient(String),
}

fn http_reason(code: &u16, reason: &Option<String>) -> String {
    match reason {
        Some(reason) => format!(": {}", reason),
        // Give em a generic reason
        None => match *code {
            400 => String::from(" Bad Request: A parameter is missing or has the wrong value"),
            401 => String::from(" Unauthorized: The request requires user authentication"),
            403 => String::from(" Forbidden: Invalid authentication, or not allowed to access this resource"),
            404 => String::from(" Not Found: The requested resource does not exist"),
            429 => String::from(" Rate Limited: The application or user has hit the request limit"),
            500 => String::from(" Internal Server Error: Unexpected error on Imgur's side"),
            _ => String::new(),
        },
    }
}

impl From<InvalidHeaderValue> for Error {
    fn from(e: InvalidHeaderValue) -> Error {
        Error::CannotCreateClient(format!("Invalid header value: {}", e))
    }
}
