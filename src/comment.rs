use super::{
    client::{Auth, Client},
    error::{Error, Result as ImgurResult},
    response::Response,
    utils::{non_empty, path_segment},
};

use serde::Serialize;
use serde_repr::Serialize_repr;
use serde_with::skip_serializing_none;

use std::{convert::TryFrom, fmt, str::FromStr};

/// A vote on a comment.
///
/// Votes can be built from their name (case-insensitive), from a `bool` (`true` is an upvote,
/// `false` a downvote) or from `0`, which vetoes a previous vote.
///
/// ```
/// # use rsimgur::comment::Vote;
/// # use std::convert::TryFrom;
/// assert_eq!("UP".parse::<Vote>().unwrap(), Vote::Up);
/// assert_eq!(Vote::from(false), Vote::Down);
/// assert_eq!(Vote::try_from(0_i64).unwrap(), Vote::Veto);
/// assert!("sideways".parse::<Vote>().is_err());
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Vote {
    Up,
    Down,
    Veto,
}

impl Vote {
    /// The name of the vote, as used in request paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            Vote::Up => "up",
            Vote::Down => "down",
            Vote::Veto => "veto",
        }
    }
}

impl Default for Vote {
    fn default() -> Self {
        Vote::Up
    }
}

impl fmt::Display for Vote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Vote {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "up" => Ok(Vote::Up),
            "down" => Ok(Vote::Down),
            "veto" => Ok(Vote::Veto),
            _ => Err(Error::InvalidArgument(format!("unknown vote {:?}", s))),
        }
    }
}

impl From<bool> for Vote {
    fn from(up: bool) -> Self {
        if up {
            Vote::Up
        } else {
            Vote::Down
        }
    }
}

impl TryFrom<i64> for Vote {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Vote::Veto),
            _ => Err(Error::InvalidArgument(format!("unknown vote {}", value))),
        }
    }
}

/// Why a comment is being reported. Sent to the API as its numeric code.
#[derive(Debug, PartialEq, Eq, Serialize_repr, Clone, Copy)]
#[repr(u8)]
pub enum ReportReason {
    DoesNotBelongToCommunity = 1,
    Spam = 2,
    Abusive = 3,
    MatureNotMarked = 4,
    Pornography = 5,
}

#[skip_serializing_none]
#[derive(Serialize)]
struct NewComment<'a> {
    image_id: &'a str,
    parent_id: Option<&'a str>,
    comment: &'a str,
}

#[skip_serializing_none]
#[derive(Serialize)]
struct Report {
    reason: Option<ReportReason>,
}

impl Client {
    /// Returns the comment with the given ID.
    pub async fn get_comment(&self, comment_id: &str) -> ImgurResult<Response> {
        let comment_id = path_segment("comment_id", comment_id)?;

        self.get_endpoint(&format!("comment/{}", comment_id), Auth::Optional)
            .await
    }

    /// Posts a comment on an image, optionally as a reply to the comment `parent_id`. Requires an
    /// access token.
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
    /// client.create_comment("Nice shot!", "abc123", None).await?;
    /// # Ok(()) }
    /// ```
    pub async fn create_comment(
        &self,
        comment: &str,
        image_id: &str,
        parent_id: Option<&str>,
    ) -> ImgurResult<Response> {
        let body = NewComment {
            comment: non_empty("comment", comment)?,
            image_id: non_empty("image_id", image_id)?,
            parent_id: parent_id.filter(|id| !id.is_empty()),
        };

        self.post_endpoint("comment", Auth::Required, Some(&body))
            .await
    }

    /// Deletes a comment. Requires an access token.
    pub async fn delete_comment(&self, comment_id: &str) -> ImgurResult<Response> {
        let comment_id = path_segment("comment_id", comment_id)?;

        self.delete_endpoint(&format!("comment/{}", comment_id), Auth::Required)
            .await
    }

    /// Votes on a comment. Requires an access token.
    ///
    /// ```no_run
    /// # use rsimgur::client::{Client, Credentials};
    /// # #[tokio::main]
    /// # async fn main() -> rsimgur::error::Result<()> {
    /// # let client = Client::imgur()?;
    /// client.vote_comment("1234", true.into()).await?;
    /// client.vote_comment("1234", "veto".parse()?).await?;
    /// # Ok(()) }
    /// ```
    pub async fn vote_comment(&self, comment_id: &str, vote: Vote) -> ImgurResult<Response> {
        let comment_id = path_segment("comment_id", comment_id)?;

        self.post_endpoint(
            &format!("comment/{}/vote/{}", comment_id, vote),
            Auth::Required,
            None::<&()>,
        )
        .await
    }

    /// Reports a comment. Requires an access token.
    pub async fn report_comment(
        &self,
        comment_id: &str,
        reason: Option<ReportReason>,
    ) -> ImgurResult<Response> {
        let comment_id = path_segment("comment_id", comment_id)?;

        self.post_endpoint(
            &format!("comment/{}/report", comment_id),
            Auth::Required,
            Some(&Report { reason }),
        )
        .await
    }

    /// Replies to a comment on an image. Requires an access token.
    pub async fn reply_to_comment(
        &self,
        comment_id: &str,
        image_id: &str,
        comment: &str,
    ) -> ImgurResult<Response> {
        let comment_id = path_segment("comment_id", comment_id)?;
        let body = NewComment {
            image_id: non_empty("image_id", image_id)?,
            parent_id: None,
            comment: non_empty("comment", comment)?,
        };

        self.post_endpoint(&format!("comment/{}", comment_id), Auth::Required, Some(&body))
            .await
    }

    /// Returns the replies to a comment. Always sent anonymously.
    pub async fn comment_replies(&self, comment_id: &str) -> ImgurResult<Response> {
        let comment_id = path_segment("comment_id", comment_id)?;

        self.get_endpoint(&format!("comment/{}/replies", comment_id), Auth::Anonymous)
            .await
    }
}
