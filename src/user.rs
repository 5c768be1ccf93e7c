use super::{
    client::{Auth, Client},
    error::Result as ImgurResult,
    response::Response,
    utils::path_segment,
};

/// Handle on a named Imgur account, returned by [`Client::user`].
///
/// Building the handle doesn't perform any request; each method performs exactly one.
#[derive(Debug, Clone, Copy)]
pub struct User<'a> {
    client: &'a Client,
    username: &'a str,
}

/// Handle on an album belonging to a [`User`].
#[derive(Debug, Clone, Copy)]
pub struct UserAlbum<'a> {
    user: User<'a>,
    album_hash: &'a str,
}

impl Client {
    /// Returns a handle on the account named `username`.
    ///
    /// ```no_run
    /// # use rsimgur::client::{Client, Credentials};
    /// # #[tokio::main]
    /// # async fn main() -> rsimgur::error::Result<()> {
    /// let client = Client::imgur()?.set_credentials(Credentials::new().client_id("my-client-id"))?;
    /// let user = client.user("ghostinspector");
    ///
    /// let profile = user.get().await?;
    /// let album_count = user.album_count().await?;
    /// # Ok(()) }
    /// ```
    pub fn user<'a>(&'a self, username: &'a str) -> User<'a> {
        User {
            client: self,
            username,
        }
    }
}

impl<'a> User<'a> {
    fn endpoint(&self, path: &str) -> ImgurResult<String> {
        let username = path_segment("username", self.username)?;

        Ok(if path.is_empty() {
            format!("account/{}", username)
        } else {
            format!("account/{}/{}", username, path)
        })
    }

    async fn get_path(&self, path: &str, auth: Auth) -> ImgurResult<Response> {
        self.client.get_endpoint(&self.endpoint(path)?, auth).await
    }

    /// The user's name, as given to [`Client::user`].
    pub fn username(&self) -> &'a str {
        self.username
    }

    /// Returns the account's base information.
    pub async fn get(&self) -> ImgurResult<Response> {
        self.get_path("", Auth::Optional).await
    }

    /// Returns the gallery images the user favorited.
    pub async fn gallery_favorites(&self) -> ImgurResult<Response> {
        self.get_path("gallery_favorites", Auth::Optional).await
    }

    /// Returns the images the user favorited. Requires an access token.
    pub async fn favorites(&self) -> ImgurResult<Response> {
        self.get_path("favorites", Auth::Required).await
    }

    /// Returns the images the user submitted to the gallery.
    pub async fn submissions(&self) -> ImgurResult<Response> {
        self.get_path("submissions", Auth::Optional).await
    }

    /// Blocks the user. Requires an access token.
    pub async fn block(&self) -> ImgurResult<Response> {
        self.client
            .post_endpoint(&self.endpoint("block")?, Auth::Required, None::<&()>)
            .await
    }

    /// Whether the authenticated user blocked this user. Requires an access token.
    pub async fn is_blocked(&self) -> ImgurResult<Response> {
        self.get_path("block", Auth::Required).await
    }

    /// Unblocks the user. Requires an access token.
    pub async fn unblock(&self) -> ImgurResult<Response> {
        self.client
            .delete_endpoint(&self.endpoint("block")?, Auth::Required)
            .await
    }

    /// Returns the avatars available to the user. Requires an access token.
    pub async fn avatars(&self) -> ImgurResult<Response> {
        self.get_path("avatars", Auth::Required).await
    }

    /// Whether the user verified their email address. Requires an access token.
    pub async fn verify_email(&self) -> ImgurResult<Response> {
        self.get_path("verifyemail", Auth::Required).await
    }

    /// Sends a verification email to the user. Requires an access token.
    pub async fn send_verify_email(&self) -> ImgurResult<Response> {
        self.client
            .post_endpoint(&self.endpoint("verifyemail")?, Auth::Required, None::<&()>)
            .await
    }

    /// Returns the user's gallery profile: totals and trophies.
    pub async fn gallery_profile(&self) -> ImgurResult<Response> {
        self.get_path("gallery_profile", Auth::Optional).await
    }

    /// Returns the user's albums, one page at a time. `None` is the first page.
    pub async fn albums(&self, page: Option<u32>) -> ImgurResult<Response> {
        let path = match page {
            Some(page) => format!("albums/{}", page),
            None => String::from("albums"),
        };

        self.get_path(&path, Auth::Optional).await
    }

    /// Returns the IDs of the user's albums, one page at a time. `None` is the first page.
    pub async fn album_ids(&self, page: Option<u32>) -> ImgurResult<Response> {
        let path = match page {
            Some(page) => format!("albums/ids/{}", page),
            None => String::from("albums/ids"),
        };

        self.get_path(&path, Auth::Optional).await
    }

    /// Returns how many albums the user has.
    pub async fn album_count(&self) -> ImgurResult<Response> {
        self.get_path("albums/count", Auth::Optional).await
    }

    /// Returns a handle on one of the user's albums.
    pub fn album(&self, album_hash: &'a str) -> UserAlbum<'a> {
        UserAlbum {
            user: *self,
            album_hash,
        }
    }
}

impl<'a> UserAlbum<'a> {
    fn endpoint(&self) -> ImgurResult<String> {
        let album_hash = path_segment("album_hash", self.album_hash)?;
        self.user.endpoint(&format!("album/{}", album_hash))
    }

    /// Returns information about the album.
    pub async fn get(&self) -> ImgurResult<Response> {
        self.user
            .client
            .get_endpoint(&self.endpoint()?, Auth::Optional)
            .await
    }

    /// Deletes the album. Requires the owner's access token.
    pub async fn delete(&self) -> ImgurResult<Response> {
        self.user
            .client
            .delete_endpoint(&self.endpoint()?, Auth::Required)
            .await
    }
}
