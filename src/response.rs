use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

/// A response body returned by the API.
///
/// Imgur answers with JSON almost everywhere, usually wrapped in an envelope looking like
/// `{ "data": ..., "success": true, "status": 200 }`. Bodies that aren't valid JSON are kept as
/// they were received.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// The body parsed as JSON.
    Json(JsonValue),
    /// The body as received, because it wasn't valid JSON.
    Text(String),
}

impl Response {
    /// Parses a response body. This never fails: anything that isn't valid JSON is returned
    /// unchanged as [`Response::Text`].
    ///
    /// ```
    /// # use rsimgur::response::Response;
    /// assert_eq!(
    ///     Response::parse(String::from(r#"{"a":1}"#)),
    ///     Response::Json(serde_json::json!({ "a": 1 }))
    /// );
    /// assert_eq!(
    ///     Response::parse(String::from("not json")),
    ///     Response::Text(String::from("not json"))
    /// );
    /// ```
    pub fn parse(body: String) -> Self {
        match serde_json::from_str(&body) {
            Ok(json) => Response::Json(json),
            Err(_) => Response::Text(body),
        }
    }

    /// The parsed JSON, if the body was JSON.
    pub fn as_json(&self) -> Option<&JsonValue> {
        match self {
            Response::Json(json) => Some(json),
            Response::Text(_) => None,
        }
    }

    /// The raw text, if the body wasn't JSON.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Response::Json(_) => None,
            Response::Text(text) => Some(text),
        }
    }

    /// Consumes the response, returning the parsed JSON if there is any.
    pub fn into_json(self) -> Option<JsonValue> {
        match self {
            Response::Json(json) => Some(json),
            Response::Text(_) => None,
        }
    }

    /// The `data` member of the Imgur envelope.
    pub fn data(&self) -> Option<&JsonValue> {
        self.as_json().and_then(|json| json.get("data"))
    }

    /// The `success` member of the Imgur envelope.
    pub fn success(&self) -> Option<bool> {
        self.as_json()
            .and_then(|json| json.get("success"))
            .and_then(JsonValue::as_bool)
    }

    /// Deserializes the `data` member of the envelope into `T`. Returns `None` when there is no
    /// envelope or when `data` doesn't have the expected shape.
    pub fn data_as<T: DeserializeOwned>(&self) -> Option<T> {
        self.data()
            .and_then(|data| serde_json::from_value(data.clone()).ok())
    }

    /// The error message Imgur puts in `data.error`, if any. Depending on the endpoint it's either
    /// a string or an object with a `message` field.
    pub(crate) fn error_message(&self) -> Option<String> {
        let error = self.data()?.get("error")?;

        match error {
            JsonValue::String(msg) => Some(msg.clone()),
            other => other
                .get("message")
                .and_then(JsonValue::as_str)
                .map(String::from),
        }
    }
}

impl From<Response> for JsonValue {
    fn from(response: Response) -> JsonValue {
        match response {
            Response::Json(json) => json,
            Response::Text(text) => JsonValue::String(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_json_body() {
        assert_eq!(
            Response::parse(String::from(r#"{"a":1}"#)),
            Response::Json(json!({ "a": 1 }))
        );
    }

    #[test]
    fn parse_falls_back_to_text() {
        let response = Response::parse(String::from("not json"));

        assert_eq!(response, Response::Text(String::from("not json")));
        assert_eq!(response.as_text(), Some("not json"));
        assert_eq!(response.as_json(), None);
    }

    #[test]
    fn parse_empty_body() {
        assert_eq!(
            Response::parse(String::new()),
            Response::Text(String::new())
        );
    }

    #[test]
    fn envelope_accessors() {
        let response = Response::parse(String::from(
            r#"{"data":{"id":"abc123","width":640},"success":true,"status":200}"#,
        ));

        assert_eq!(response.success(), Some(true));
        assert_eq!(response.data().unwrap()["id"], "abc123");

        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Image {
            id: String,
            width: u64,
        }

        assert_eq!(
            response.data_as::<Image>(),
            Some(Image {
                id: String::from("abc123"),
                width: 640
            })
        );
    }

    #[test]
    fn error_message_from_string_or_object() {
        let plain = Response::parse(String::from(
            r#"{"data":{"error":"Unable to find an image with the id, nope","request":"/3/image/nope"},"success":false,"status":404}"#,
        ));
        assert_eq!(
            plain.error_message().as_deref(),
            Some("Unable to find an image with the id, nope")
        );

        let nested = Response::parse(String::from(
            r#"{"data":{"error":{"code":1003,"message":"File type invalid (1)"}},"success":false,"status":400}"#,
        ));
        assert_eq!(
            nested.error_message().as_deref(),
            Some("File type invalid (1)")
        );

        assert_eq!(Response::parse(String::from("oops")).error_message(), None);
    }
}
