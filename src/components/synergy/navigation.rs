use super::store::StoreAction;
use crate::environment::router::Router;
use crate::environment::types::{PostId, UserId};

/// Opens the details of a post. The returned action has to be dispatched
/// after the push so that the stored user id follows the new location.
pub fn route_to_details(
    router: &Router,
    post_id: PostId,
    user_id: UserId,
) -> Result<StoreAction, String> {
    router.push(&format!("/posts/{post_id}?user={user_id}"))?;
    Ok(StoreAction::SetUserId(Some(user_id)))
}

pub fn route_to_user(router: &Router, user_id: UserId) -> Result<(), String> {
    router.push(&format!("/users/{user_id}"))
}

pub fn route_to_uri(router: &Router, page: &str) -> Result<(), String> {
    router.push(&format!("/{page}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::synergy::store::{apply, AppData};
    use crate::environment::router::{Route, UserParam};
    use std::sync::{Arc, Mutex};

    #[test]
    fn details_pushes_then_sets_user_id() {
        let router = Router::default();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let moved = seen.clone();
        router.set_listener(move |location| {
            moved.lock().unwrap().push(location.to_string());
        });

        let state = AppData::default();
        let action = route_to_details(&router, 5, 9).unwrap();
        // the push already happened before anything is dispatched
        assert_eq!(*seen.lock().unwrap(), vec!["/posts/5?user=9".to_string()]);
        assert_eq!(state.user_id, None);

        let state = apply(&state, action);
        assert_eq!(state.user_id, Some(9));
        assert_eq!(
            router.route(),
            Route::PostDetails {
                post_id: 5,
                user: UserParam::Id(9)
            }
        );
    }

    #[test]
    fn user_and_uri() {
        let router = Router::default();
        route_to_user(&router, 4).unwrap();
        assert_eq!(router.location().pathname, "/users/4");

        route_to_uri(&router, "comments").unwrap();
        assert_eq!(router.location().pathname, "/comments");
        assert_eq!(router.location().search, "");
    }
}
