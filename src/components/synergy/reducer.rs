use super::navigation;
use super::store::{apply, AppData, StoreAction};
use crate::environment::router::{Route, UserParam};
use crate::environment::types::{
    AppEvent, Comment, Loadable, MainMenuEvent, Post, PostDetails, PostId, User, UserDetails,
    UserId,
};
use crate::environment::Environment;
use navicula::Effect;

pub type ViewStore<'a> = navicula::ViewStore<'a, super::SynergyReducer>;

#[derive(Default)]
pub struct State {
    pub data: AppData,
    pub route: Route,
    pub can_go_back: bool,
    /// User visible failure of the last join
    pub error: Option<String>,
    pub pending_fetches: usize,
    // Bumped for every join. Completions carrying an older value are stale.
    post_details_generation: u64,
    user_generation: u64,
}

/// A join the reducer has to start after a route change
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Join {
    PostDetails {
        generation: u64,
        post_id: PostId,
        user_id: UserId,
    },
    User {
        generation: u64,
        user_id: UserId,
    },
}

impl State {
    pub fn is_loading_collections(&self) -> bool {
        self.pending_fetches > 0
    }

    fn dispatch(&mut self, action: StoreAction) {
        self.data = apply(&self.data, action);
    }

    /// Fetches of an earlier reload may still be in flight, so this adds up
    fn fetches_started(&mut self, count: usize) {
        self.pending_fetches += count;
    }

    fn fetch_finished(&mut self) {
        self.pending_fetches = self.pending_fetches.saturating_sub(1);
    }

    /// Stores the new route and resets the aggregate it shows to the placeholder
    pub fn route_changed(&mut self, route: Route, can_go_back: bool) -> Option<Join> {
        self.route = route;
        self.can_go_back = can_go_back;
        match self.route.clone() {
            Route::PostDetails { post_id, user } => {
                let user_id = match user {
                    UserParam::Id(id) => id,
                    // `/posts/{id}` without `?user=` falls back to the last selected user
                    UserParam::Missing => match self.data.user_id {
                        Some(id) => id,
                        None => {
                            self.error = Some(format!("Post {post_id}: unknown author"));
                            return None;
                        }
                    },
                    UserParam::Invalid(value) => {
                        self.error = Some(format!("Post {post_id}: invalid author {value}"));
                        return None;
                    }
                };
                self.dispatch(StoreAction::SetPostDetails(Loadable::Empty));
                self.post_details_generation += 1;
                Some(Join::PostDetails {
                    generation: self.post_details_generation,
                    post_id,
                    user_id,
                })
            }
            Route::User { user_id } => {
                self.dispatch(StoreAction::SetUserDetails(Loadable::Empty));
                self.user_generation += 1;
                Some(Join::User {
                    generation: self.user_generation,
                    user_id,
                })
            }
            _ => None,
        }
    }

    pub fn post_details_loaded(&mut self, generation: u64, result: Result<PostDetails, String>) {
        if generation != self.post_details_generation {
            log::debug!("Dropping stale post details {generation}");
            return;
        }
        match result {
            Ok(details) => self.dispatch(StoreAction::SetPostDetails(Loadable::Loaded(details))),
            Err(e) => {
                log::error!("Error getting post details: {e}");
                self.error = Some(e);
            }
        }
    }

    pub fn user_details_loaded(&mut self, generation: u64, result: Result<UserDetails, String>) {
        if generation != self.user_generation {
            log::debug!("Dropping stale user details {generation}");
            return;
        }
        match result {
            Ok(details) => self.dispatch(StoreAction::SetUserDetails(Loadable::Loaded(details))),
            Err(e) => {
                log::error!("Error getting user: {e}");
                self.error = Some(e);
            }
        }
    }
}

#[allow(clippy::large_enum_variant)]
#[derive(Clone)]
pub enum Action {
    Initial,
    LoadCollections,
    LoadedPosts(Result<Vec<Post>, String>),
    LoadedUsers(Result<Vec<User>, String>),
    LoadedComments(Result<Vec<Comment>, String>),
    RouteToDetails(PostId, UserId),
    RouteToUser(UserId),
    RouteToUri(String),
    RouteChanged,
    LoadedPostDetails(u64, Result<PostDetails, String>),
    LoadedUserDetails(u64, Result<UserDetails, String>),
    AppEvent(AppEvent),
    ClearError,
}

impl std::fmt::Debug for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Initial => write!(f, "Initial"),
            Self::LoadCollections => write!(f, "LoadCollections"),
            Self::LoadedPosts(_arg0) => f.debug_tuple("LoadedPosts").finish(),
            Self::LoadedUsers(_arg0) => f.debug_tuple("LoadedUsers").finish(),
            Self::LoadedComments(_arg0) => f.debug_tuple("LoadedComments").finish(),
            Self::RouteToDetails(arg0, arg1) => f
                .debug_tuple("RouteToDetails")
                .field(arg0)
                .field(arg1)
                .finish(),
            Self::RouteToUser(arg0) => f.debug_tuple("RouteToUser").field(arg0).finish(),
            Self::RouteToUri(arg0) => f.debug_tuple("RouteToUri").field(arg0).finish(),
            Self::RouteChanged => write!(f, "RouteChanged"),
            Self::LoadedPostDetails(arg0, _arg1) => {
                f.debug_tuple("LoadedPostDetails").field(arg0).finish()
            }
            Self::LoadedUserDetails(arg0, _arg1) => {
                f.debug_tuple("LoadedUserDetails").field(arg0).finish()
            }
            Self::AppEvent(arg0) => f.debug_tuple("AppEvent").field(arg0).finish(),
            Self::ClearError => write!(f, "ClearError"),
        }
    }
}

pub fn reduce<'a>(
    _context: &'a impl navicula::types::MessageContext<Action, Action, Action>,
    action: Action,
    state: &'a mut State,
    environment: &'a Environment,
) -> Effect<'static, Action> {
    log::trace!("{action:?}");
    let model = environment.model.clone();
    match action {
        Action::Initial => {
            return Effect::merge2(
                Effect::action(Action::LoadCollections),
                Effect::action(Action::RouteChanged),
            );
        }
        Action::LoadCollections => {
            state.fetches_started(3);
            let (posts, users, comments) = (model.clone(), model.clone(), model);
            return Effect::merge3(
                Effect::future(async move { posts.posts().await }, Action::LoadedPosts),
                Effect::future(async move { users.users().await }, Action::LoadedUsers),
                Effect::future(
                    async move { comments.comments().await },
                    Action::LoadedComments,
                ),
            );
        }
        Action::LoadedPosts(result) => {
            state.fetch_finished();
            match result {
                Ok(posts) => state.dispatch(StoreAction::SetPosts(posts)),
                Err(e) => log::warn!("Error getting posts: {e}"),
            }
        }
        Action::LoadedUsers(result) => {
            state.fetch_finished();
            match result {
                Ok(users) => {
                    log::debug!("synergy users {}", users.len());
                    state.dispatch(StoreAction::SetUsers(users))
                }
                Err(e) => log::warn!("Error getting users: {e}"),
            }
        }
        Action::LoadedComments(result) => {
            state.fetch_finished();
            match result {
                Ok(comments) => state.dispatch(StoreAction::SetComments(comments)),
                Err(e) => log::warn!("Error getting comments: {e}"),
            }
        }
        // The router informs the view about the push, which sends `RouteChanged`
        Action::RouteToDetails(post_id, user_id) => {
            match navigation::route_to_details(&environment.router, post_id, user_id) {
                Ok(set_user_id) => state.dispatch(set_user_id),
                Err(e) => state.error = Some(e),
            }
        }
        Action::RouteToUser(user_id) => {
            if let Err(e) = navigation::route_to_user(&environment.router, user_id) {
                state.error = Some(e);
            }
        }
        Action::RouteToUri(page) => {
            if let Err(e) = navigation::route_to_uri(&environment.router, &page) {
                state.error = Some(e);
            }
        }
        Action::RouteChanged => {
            let route = environment.router.route();
            return match state.route_changed(route, environment.router.can_go_back()) {
                Some(Join::PostDetails {
                    generation,
                    post_id,
                    user_id,
                }) => Effect::future(
                    async move { model.post_details(post_id, user_id).await },
                    move |result| Action::LoadedPostDetails(generation, result),
                ),
                Some(Join::User {
                    generation,
                    user_id,
                }) => Effect::future(
                    async move { model.user_details(user_id).await },
                    move |result| Action::LoadedUserDetails(generation, result),
                ),
                None => Effect::NONE,
            };
        }
        Action::LoadedPostDetails(generation, result) => {
            state.post_details_loaded(generation, result)
        }
        Action::LoadedUserDetails(generation, result) => {
            state.user_details_loaded(generation, result)
        }
        Action::AppEvent(AppEvent::MenuEvent(event)) => match event {
            MainMenuEvent::Reload => {
                return Effect::merge2(
                    Effect::action(Action::LoadCollections),
                    Effect::action(Action::RouteChanged),
                );
            }
            MainMenuEvent::Back => {
                environment.router.back();
            }
        },
        Action::ClearError => state.error = None,
    }
    Effect::NONE
}
