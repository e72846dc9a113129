//! The application data and the pure transitions between its snapshots.

use crate::environment::types::{
    Comment, Loadable, Post, PostDetails, User, UserDetails, UserId,
};

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AppData {
    pub posts: Vec<Post>,
    pub users: Vec<User>,
    pub comments: Vec<Comment>,
    pub post_details: Loadable<PostDetails>,
    pub user_id: Option<UserId>,
    pub user: Loadable<UserDetails>,
}

impl AppData {
    pub fn user_with_id(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }
}

/// Each action replaces exactly one field of `AppData` with its payload
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StoreAction {
    SetPosts(Vec<Post>),
    SetUsers(Vec<User>),
    SetComments(Vec<Comment>),
    SetUserId(Option<UserId>),
    SetUserDetails(Loadable<UserDetails>),
    SetPostDetails(Loadable<PostDetails>),
}

pub fn apply(state: &AppData, action: StoreAction) -> AppData {
    match action {
        StoreAction::SetPosts(posts) => AppData {
            posts,
            ..state.clone()
        },
        StoreAction::SetUsers(users) => AppData {
            users,
            ..state.clone()
        },
        StoreAction::SetComments(comments) => AppData {
            comments,
            ..state.clone()
        },
        StoreAction::SetUserId(user_id) => AppData {
            user_id,
            ..state.clone()
        },
        StoreAction::SetUserDetails(user) => AppData {
            user,
            ..state.clone()
        },
        StoreAction::SetPostDetails(post_details) => AppData {
            post_details,
            ..state.clone()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: u64, user_id: u64) -> Post {
        Post {
            id,
            user_id,
            title: format!("post {id}"),
            body: String::new(),
        }
    }

    fn user(id: u64, name: &str) -> User {
        User {
            id,
            name: name.to_string(),
            ..Default::default()
        }
    }

    fn populated() -> AppData {
        AppData {
            posts: vec![post(1, 1), post(2, 2)],
            users: vec![user(1, "A")],
            comments: vec![Comment {
                id: 1,
                post_id: 1,
                ..Default::default()
            }],
            post_details: Loadable::Empty,
            user_id: Some(1),
            user: Loadable::Loaded(UserDetails {
                data: user(1, "A"),
                posts: vec![post(1, 1)],
            }),
        }
    }

    #[test]
    fn replaces_only_the_named_field() {
        let before = populated();
        let snapshot = before.clone();

        let after = apply(&before, StoreAction::SetUsers(vec![user(7, "Z")]));
        assert_eq!(before, snapshot);
        assert_eq!(after.users, vec![user(7, "Z")]);
        assert_eq!(
            AppData {
                users: before.users.clone(),
                ..after
            },
            before
        );
    }

    #[test]
    fn collections_are_replaced_not_merged() {
        let before = populated();
        let after = apply(&before, StoreAction::SetPosts(vec![post(9, 3)]));
        assert_eq!(after.posts, vec![post(9, 3)]);

        let after = apply(&after, StoreAction::SetComments(Vec::new()));
        assert!(after.comments.is_empty());
        assert_eq!(after.posts, vec![post(9, 3)]);
    }

    #[test]
    fn every_action_touches_one_field() {
        let before = populated();
        let details = PostDetails {
            post_data: post(1, 1),
            user_data: user(1, "A"),
            comments_data: Vec::new(),
        };
        let cases = vec![
            StoreAction::SetPosts(Vec::new()),
            StoreAction::SetUsers(Vec::new()),
            StoreAction::SetComments(Vec::new()),
            StoreAction::SetUserId(Some(9)),
            StoreAction::SetUserDetails(Loadable::Empty),
            StoreAction::SetPostDetails(Loadable::Loaded(details)),
        ];
        for action in cases {
            let after = apply(&before, action.clone());
            let changed = [
                after.posts != before.posts,
                after.users != before.users,
                after.comments != before.comments,
                after.user_id != before.user_id,
                after.user != before.user,
                after.post_details != before.post_details,
            ];
            assert_eq!(
                changed.iter().filter(|c| **c).count(),
                1,
                "{action:?} changed {changed:?}"
            );
        }
    }

    #[test]
    fn placeholder_reset() {
        let before = populated();
        let after = apply(&before, StoreAction::SetUserDetails(Loadable::Empty));
        assert!(after.user.is_empty());
        assert_eq!(after.user_with_id(1), Some(&user(1, "A")));
    }
}
