//! In-app navigation. A history stack of locations plus a typed view of the
//! current location.

use std::sync::{Arc, Mutex};

use url::Url;

use super::types::{MainPage, PostId, UserId};

/// Only used to give relative paths something to resolve against
const BASE: &str = "app://synergy/";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Location {
    pub pathname: String,
    /// The query string, including the leading `?` if there is one
    pub search: String,
}

impl Default for Location {
    fn default() -> Self {
        Self {
            pathname: "/".to_string(),
            search: String::new(),
        }
    }
}

impl Location {
    pub fn parse(path: &str) -> Result<Self, String> {
        let base = Url::parse(BASE).map_err(|e| format!("Invalid base: {e:?}"))?;
        let url = base
            .join(path)
            .map_err(|e| format!("Invalid path {path}: {e:?}"))?;
        Ok(Self {
            pathname: url.path().to_string(),
            search: url.query().map(|q| format!("?{q}")).unwrap_or_default(),
        })
    }

    pub fn query(&self, key: &str) -> Option<String> {
        let query = self.search.trim_start_matches('?');
        url::form_urlencoded::parse(query.as_bytes())
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    /// The path segments without empty parts, e.g. `/posts/5` -> `["posts", "5"]`
    pub fn segments(&self) -> Vec<&str> {
        self.pathname.split('/').filter(|s| !s.is_empty()).collect()
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.pathname, self.search)
    }
}

/// The `user` query parameter of a post details location
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum UserParam {
    Missing,
    Id(UserId),
    Invalid(String),
}

impl UserParam {
    fn from_query(value: Option<String>) -> Self {
        match value {
            None => UserParam::Missing,
            Some(value) => match value.parse() {
                Ok(id) => UserParam::Id(id),
                Err(_) => UserParam::Invalid(value),
            },
        }
    }
}

/// The pages of the app, decoded from a `Location`
#[derive(Clone, Debug, Eq, PartialEq, Default)]
pub enum Route {
    #[default]
    Home,
    List(MainPage),
    PostDetails {
        post_id: PostId,
        user: UserParam,
    },
    User {
        user_id: UserId,
    },
    Page(String),
}

impl Route {
    pub fn parse(location: &Location) -> Self {
        let segments = location.segments();
        match segments.as_slice() {
            [] => Route::Home,
            ["posts"] => Route::List(MainPage::Posts),
            ["users"] => Route::List(MainPage::Users),
            ["comments"] => Route::List(MainPage::Comments),
            ["posts", id] => match id.parse() {
                Ok(post_id) => Route::PostDetails {
                    post_id,
                    user: UserParam::from_query(location.query("user")),
                },
                Err(_) => Route::Page(location.pathname.clone()),
            },
            ["users", id] => match id.parse() {
                Ok(user_id) => Route::User { user_id },
                Err(_) => Route::Page(location.pathname.clone()),
            },
            _ => Route::Page(location.pathname.clone()),
        }
    }

    pub fn page(&self) -> Option<MainPage> {
        match self {
            Route::Home => Some(MainPage::Posts),
            Route::List(page) => Some(*page),
            _ => None,
        }
    }
}

type Listener = Arc<dyn Fn(&Location) + Send + Sync>;

/// Shared navigation history. Clones point to the same history.
#[derive(Clone, Default)]
pub struct Router {
    history: Arc<Mutex<Vec<Location>>>,
    listener: Arc<Mutex<Option<Listener>>>,
}

impl std::fmt::Debug for Router {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("location", &self.location())
            .finish()
    }
}

impl Router {
    /// Registers the callback that is informed about every location change.
    /// Replaces a previous one.
    pub fn set_listener(&self, listener: impl Fn(&Location) + Send + Sync + 'static) {
        let listener: Listener = Arc::new(listener);
        if let Ok(mut current) = self.listener.lock() {
            *current = Some(listener);
        }
    }

    pub fn location(&self) -> Location {
        self.history
            .lock()
            .ok()
            .and_then(|history| history.last().cloned())
            .unwrap_or_default()
    }

    pub fn route(&self) -> Route {
        Route::parse(&self.location())
    }

    pub fn push(&self, path: &str) -> Result<(), String> {
        let location = Location::parse(path)?;
        log::debug!("push {location}");
        self.history
            .lock()
            .map_err(|e| format!("History Error: {e:?}"))?
            .push(location.clone());
        self.notify(&location);
        Ok(())
    }

    /// Returns to the previous location. Returns `false` if there is none.
    pub fn back(&self) -> bool {
        let location = {
            let Ok(mut history) = self.history.lock() else {
                return false;
            };
            if history.pop().is_none() {
                return false;
            }
            history.last().cloned().unwrap_or_default()
        };
        log::debug!("back to {location}");
        self.notify(&location);
        true
    }

    pub fn can_go_back(&self) -> bool {
        self.history
            .lock()
            .map(|history| !history.is_empty())
            .unwrap_or(false)
    }

    fn notify(&self, location: &Location) {
        let listener = self.listener.lock().ok().and_then(|l| l.clone());
        if let Some(listener) = listener {
            listener(location)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn parses_locations() {
        let location = Location::parse("/posts/5?user=9").unwrap();
        assert_eq!(location.pathname, "/posts/5");
        assert_eq!(location.search, "?user=9");
        assert_eq!(location.query("user"), Some("9".to_string()));
        assert_eq!(location.query("other"), None);
        assert_eq!(location.to_string(), "/posts/5?user=9");
    }

    #[test]
    fn decodes_routes() {
        let route = |p: &str| Route::parse(&Location::parse(p).unwrap());
        assert_eq!(route("/"), Route::Home);
        assert_eq!(route("/posts"), Route::List(MainPage::Posts));
        assert_eq!(route("/users/"), Route::List(MainPage::Users));
        assert_eq!(route("/comments"), Route::List(MainPage::Comments));
        assert_eq!(
            route("/posts/5?user=9"),
            Route::PostDetails {
                post_id: 5,
                user: UserParam::Id(9)
            }
        );
        assert_eq!(
            route("/posts/5"),
            Route::PostDetails {
                post_id: 5,
                user: UserParam::Missing
            }
        );
        assert_eq!(
            route("/posts/5?user=abc"),
            Route::PostDetails {
                post_id: 5,
                user: UserParam::Invalid("abc".to_string())
            }
        );
        assert_eq!(route("/users/2"), Route::User { user_id: 2 });
        assert_eq!(route("/users/abc"), Route::Page("/users/abc".to_string()));
        assert_eq!(route("/about"), Route::Page("/about".to_string()));
    }

    #[test]
    fn push_and_back() {
        let router = Router::default();
        assert_eq!(router.route(), Route::Home);
        assert!(!router.can_go_back());

        router.push("/users").unwrap();
        router.push("/users/3").unwrap();
        assert_eq!(router.route(), Route::User { user_id: 3 });

        assert!(router.back());
        assert_eq!(router.route(), Route::List(MainPage::Users));
        assert!(router.back());
        assert_eq!(router.location(), Location::default());
        assert!(!router.back());
    }

    #[test]
    fn listener_sees_every_change() {
        let router = Router::default();
        let calls = Arc::new(AtomicUsize::new(0));
        let moved = calls.clone();
        router.set_listener(move |_| {
            moved.fetch_add(1, Ordering::SeqCst);
        });
        router.push("/posts").unwrap();
        router.push("/comments").unwrap();
        router.back();
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn clones_share_history() {
        let router = Router::default();
        let other = router.clone();
        other.push("/posts/1?user=1").unwrap();
        assert_eq!(router.location().pathname, "/posts/1");
    }
}
