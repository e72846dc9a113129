use serde::{Deserialize, Serialize};

// Api Types

pub type PostId = u64;
pub type UserId = u64;
pub type CommentId = u64;

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub user_id: UserId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<Company>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub suite: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub zipcode: String,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub catch_phrase: String,
    #[serde(default)]
    pub bs: String,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub post_id: PostId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub body: String,
}

// Aggregates

/// A post joined with its author and its comments
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PostDetails {
    pub post_data: Post,
    pub user_data: User,
    pub comments_data: Vec<Comment>,
}

/// A user joined with the posts they wrote
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserDetails {
    pub data: User,
    pub posts: Vec<Post>,
}

impl UserDetails {
    /// Keeps only the posts whose author is `user_id`
    pub fn new(data: User, posts: Vec<Post>, user_id: UserId) -> Self {
        let posts = posts
            .into_iter()
            .filter(|post| post.user_id == user_id)
            .collect();
        Self { data, posts }
    }
}

/// Either the reset placeholder that is set before a join starts, or the
/// joined aggregate.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum Loadable<T> {
    #[default]
    Empty,
    Loaded(T),
}

impl<T> Loadable<T> {
    pub fn loaded(&self) -> Option<&T> {
        match self {
            Loadable::Empty => None,
            Loadable::Loaded(value) => Some(value),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Loadable::Empty)
    }
}

// Repository Types

pub const DEFAULT_API_URL: &str = "https://jsonplaceholder.typicode.com";

#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct Config {
    #[serde(default = "default_api_url")]
    pub api_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_url(),
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

// Menu

use strum_macros::Display;
use strum_macros::EnumIter;
use strum_macros::IntoStaticStr;

/// The top level pages reachable from the navigation bar
#[derive(IntoStaticStr, EnumIter, Display, Debug, Clone, Copy, Eq, PartialEq)]
#[strum(serialize_all = "lowercase")]
pub enum MainPage {
    Posts,
    Users,
    Comments,
}

impl MainPage {
    pub fn title(&self) -> &'static str {
        match self {
            MainPage::Posts => "Posts",
            MainPage::Users => "Users",
            MainPage::Comments => "Comments",
        }
    }
}

#[derive(IntoStaticStr, EnumIter, Display, Debug, Clone, Copy, Eq, PartialEq)]
pub enum MainMenuEvent {
    Reload,
    Back,
}

#[derive(Clone, Debug)]
pub enum AppEvent {
    MenuEvent(MainMenuEvent),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_api_shapes() {
        let post: Post =
            serde_json::from_str(r#"{"id":1,"userId":2,"title":"t","body":"b"}"#).unwrap();
        assert_eq!(post.user_id, 2);

        let comment: Comment = serde_json::from_str(
            r#"{"id":3,"postId":1,"name":"n","email":"e@x.org","body":"b"}"#,
        )
        .unwrap();
        assert_eq!(comment.post_id, 1);

        let user: User = serde_json::from_str(
            r#"{"id":2,"name":"B","company":{"name":"C","catchPhrase":"cp","bs":"x"}}"#,
        )
        .unwrap();
        assert_eq!(user.name, "B");
        assert_eq!(user.company.map(|c| c.catch_phrase), Some("cp".to_string()));
        assert_eq!(user.email, "");
    }

    #[test]
    fn user_details_filters_by_author() {
        let posts = vec![
            Post {
                id: 1,
                user_id: 2,
                ..Default::default()
            },
            Post {
                id: 2,
                user_id: 3,
                ..Default::default()
            },
        ];
        let user = User {
            id: 2,
            name: "B".to_string(),
            ..Default::default()
        };
        let details = UserDetails::new(user.clone(), posts, 2);
        assert_eq!(details.data, user);
        assert_eq!(details.posts.len(), 1);
        assert_eq!(details.posts[0].id, 1);
    }

    #[test]
    fn main_page_paths() {
        let path: &'static str = MainPage::Comments.into();
        assert_eq!(path, "comments");
        assert_eq!(MainPage::Users.to_string(), "users");
    }

    #[test]
    fn config_defaults_missing_fields() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
    }
}
