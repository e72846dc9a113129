use serde::de::DeserializeOwned;

use super::super::types::{
    Comment, Post, PostDetails, PostId, User, UserDetails, UserId, DEFAULT_API_URL,
};

/// Client for the JSONPlaceholder REST api
#[derive(Clone)]
pub struct Model {
    pub url: String,
    client: reqwest::Client,
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model").field("url", &self.url).finish()
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL.to_string())
    }
}

impl Model {
    pub fn new(url: String) -> Self {
        let url = url.trim_end_matches('/').to_string();
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.url)
    }

    pub async fn posts(&self) -> Result<Vec<Post>, String> {
        log::trace!("Posts");
        self.unchecked("/posts", "posts").await
    }

    pub async fn users(&self) -> Result<Vec<User>, String> {
        log::trace!("Users");
        self.unchecked("/users", "users").await
    }

    pub async fn comments(&self) -> Result<Vec<Comment>, String> {
        log::trace!("Comments");
        self.unchecked("/comments", "comments").await
    }

    /// Loads a post, its author and its comments at the same time.
    /// Fails as soon as any of the three requests fails.
    pub async fn post_details(
        &self,
        post_id: PostId,
        user_id: UserId,
    ) -> Result<PostDetails, String> {
        log::trace!("PostDetails {post_id} {user_id}");
        let post = self.checked::<Post>(format!("/posts/{post_id}"), "post");
        let user = self.checked::<User>(format!("/users/{user_id}"), "user");
        let comments =
            self.checked::<Vec<Comment>>(format!("/comments?postId={post_id}"), "post_comments");
        let (post_data, user_data, comments_data) = tokio::try_join!(post, user, comments)?;
        Ok(PostDetails {
            post_data,
            user_data,
            comments_data,
        })
    }

    /// Loads a user and all posts, keeping only the posts of that user.
    pub async fn user_details(&self, user_id: UserId) -> Result<UserDetails, String> {
        log::trace!("UserDetails {user_id}");
        let user = self.checked::<User>(format!("/users/{user_id}"), "user");
        let posts = self.checked::<Vec<Post>>("/posts".to_string(), "posts");
        let (user, posts) = tokio::try_join!(user, posts)?;
        let details = UserDetails::new(user, posts, user_id);
        log::debug!("filtered {} posts for user {user_id}", details.posts.len());
        Ok(details)
    }

    /// The collection endpoints don't look at the status code. Only transport
    /// and decoding failures count as errors.
    async fn unchecked<T: DeserializeOwned>(
        &self,
        path: &str,
        call: &'static str,
    ) -> Result<T, String> {
        self.client
            .get(self.endpoint(path))
            .send()
            .await
            .string_error(call)?
            .json::<T>()
            .await
            .string_error(call)
    }

    async fn checked<T: DeserializeOwned>(
        &self,
        path: String,
        call: &'static str,
    ) -> Result<T, String> {
        let url = self.endpoint(&path);
        let response = self.client.get(&url).send().await.string_error(call)?;
        let status = response.status();
        if !status.is_success() {
            let string_error = format!("API Error: {call} {status} {url}");
            log::error!("{string_error}");
            return Err(string_error);
        }
        response.json::<T>().await.string_error(call)
    }
}

trait ResultExt {
    type Output;
    fn string_error(self, call: &'static str) -> Result<Self::Output, String>;
}

impl<T, E: std::fmt::Debug> ResultExt for Result<T, E> {
    type Output = T;
    fn string_error(self, call: &'static str) -> Result<T, String> {
        self.map_err(|e| {
            let string_error = format!("API Error: {call} {e:?}");
            log::error!("{string_error}");
            string_error
        })
    }
}
