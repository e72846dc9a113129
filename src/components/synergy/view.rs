use dioxus::prelude::*;
use navicula::root;
use strum::IntoEnumIterator;

use super::reducer::{Action, State, ViewStore};
use crate::environment::router::Route;
use crate::environment::types::{AppEvent, MainMenuEvent, MainPage, Post};
use crate::environment::Environment;
use crate::widgets::*;

#[inline_props]
pub fn SynergyApp<'a>(cx: Scope<'a>, environment: &'a UseState<Environment>) -> Element<'a> {
    log::trace!("rerender synergy-app");

    let updater = cx.schedule_update();
    let (sender, receiver) = cx.use_hook(flume::unbounded);

    // Every push or pop on the router becomes a `RouteChanged` for the reducer
    let moved_sender = sender.clone();
    cx.use_hook(|| {
        environment.router.set_listener(move |location| {
            log::trace!("location {location}");
            if let Err(e) = moved_sender.send(Action::RouteChanged) {
                log::error!("Could not send msg: {e:?}");
            }
            updater();
        });
    });

    let view_store: ViewStore = root(cx, &[receiver.clone()], environment.get(), || {
        State::default()
    });

    let error = view_store.error.clone();
    let error_store = view_store.clone();

    cx.render(rsx!(
        div {
            class: "vstack",
            NavigationBar { store: view_store.clone() }
            {
                error.map(|error|
                    rsx!(ErrorBox {
                        content: error,
                        onclick: move |_| error_store.send(Action::ClearError)
                    })
                )
            }
            MainComponent { store: view_store.clone() }
        }
    ))
}

#[inline_props]
fn NavigationBar<'a>(cx: Scope<'a>, store: ViewStore<'a>) -> Element<'a> {
    let selected = store.route.page();
    render! {
        HStack { class: "navigation-bar align-items-center",
            store.can_go_back.then(|| rsx!(button {
                class: "button",
                title: "Back",
                onclick: move |_| store.send(Action::AppEvent(AppEvent::MenuEvent(MainMenuEvent::Back))),
                "Back"
            }))
            for page in MainPage::iter() {
                NavigationButton {
                    key: "{page}",
                    store: store,
                    page: page,
                    is_selected: selected == Some(page),
                }
            }
            div { class: "grow" }
            button {
                class: "button",
                title: "Reload",
                onclick: move |_| store.send(Action::AppEvent(AppEvent::MenuEvent(MainMenuEvent::Reload))),
                "Reload"
            }
        }
    }
}

#[inline_props]
fn NavigationButton<'a>(
    cx: Scope<'a>,
    store: &'a ViewStore<'a>,
    page: MainPage,
    is_selected: bool,
) -> Element<'a> {
    let title = page.title();
    let class = if *is_selected { "selected" } else { "" };
    render! {
        button {
            class: "button {class}",
            onclick: move |_| store.send(Action::RouteToUri(page.to_string())),
            "{title}"
        }
    }
}

#[inline_props]
fn MainComponent<'a>(cx: Scope<'a>, store: ViewStore<'a>) -> Element<'a> {
    let content = match &store.route {
        Route::Home | Route::List(MainPage::Posts) => rsx!(PostsList { store: store }),
        Route::List(MainPage::Users) => rsx!(UsersList { store: store }),
        Route::List(MainPage::Comments) => rsx!(CommentsList { store: store }),
        Route::PostDetails { .. } => rsx!(PostDetailsView { store: store }),
        Route::User { .. } => rsx!(UserDetailsView { store: store }),
        Route::Page(path) => rsx!(ErrorPage {
            content: format!("There is no page at {path}")
        }),
    };

    render! {
        div { class: "scroll", {content} }
    }
}

#[inline_props]
fn PostsList<'a>(cx: Scope<'a>, store: &'a ViewStore<'a>) -> Element<'a> {
    render! {
        VStack {
            { store.is_loading_collections().then(|| rsx!(Spinner {})) }
            for post in &store.data.posts {
                PostCell {
                    key: "{post.id}",
                    store: store,
                    post: post,
                }
            }
        }
    }
}

#[inline_props]
fn PostCell<'a>(
    cx: Scope<'a>,
    store: &'a ViewStore<'a>,
    post: &'a Post,
) -> Element<'a> {
    let subtitle = match store.data.user_with_id(post.user_id) {
        Some(user) => format!("by {}", user.name),
        None => format!("by user {}", post.user_id),
    };
    render! {
        Cell {
            title: post.title.clone(),
            subtitle: subtitle,
            onclick: move |_| store.send(Action::RouteToDetails(post.id, post.user_id)),
        }
    }
}

#[inline_props]
fn UsersList<'a>(cx: Scope<'a>, store: &'a ViewStore<'a>) -> Element<'a> {
    render! {
        VStack {
            { store.is_loading_collections().then(|| rsx!(Spinner {})) }
            for user in &store.data.users {
                Cell {
                    key: "{user.id}",
                    title: user.name.clone(),
                    subtitle: user.email.clone(),
                    onclick: move |_| store.send(Action::RouteToUser(user.id)),
                }
            }
        }
    }
}

#[inline_props]
fn CommentsList<'a>(cx: Scope<'a>, store: &'a ViewStore<'a>) -> Element<'a> {
    render! {
        VStack {
            { store.is_loading_collections().then(|| rsx!(Spinner {})) }
            for comment in &store.data.comments {
                div {
                    key: "{comment.id}",
                    class: "cell",
                    h4 { "{comment.name}" }
                    Paragraph { style: TextStyle::Secondary, "{comment.email} on post {comment.post_id}" }
                    Paragraph { "{comment.body}" }
                }
            }
        }
    }
}

#[inline_props]
fn PostDetailsView<'a>(cx: Scope<'a>, store: &'a ViewStore<'a>) -> Element<'a> {
    let Some(details) = store.data.post_details.loaded() else {
        return render!(Spinner {});
    };
    let post = &details.post_data;
    let user = &details.user_data;
    let count = details.comments_data.len();

    render! {
        VStack { class: "p-3",
            h2 { "{post.title}" }
            Cell {
                title: user.name.clone(),
                subtitle: user.email.clone(),
                onclick: move |_| store.send(Action::RouteToUser(user.id)),
            }
            Paragraph { "{post.body}" }
            h4 { "{count} comments" }
            for comment in &details.comments_data {
                div {
                    key: "{comment.id}",
                    class: "cell",
                    h4 { "{comment.name}" }
                    Paragraph { style: TextStyle::Secondary, "{comment.email}" }
                    Paragraph { "{comment.body}" }
                }
            }
        }
    }
}

#[inline_props]
fn UserDetailsView<'a>(cx: Scope<'a>, store: &'a ViewStore<'a>) -> Element<'a> {
    let Some(details) = store.data.user.loaded() else {
        return render!(Spinner {});
    };
    let user = &details.data;
    let website = user.website.clone().unwrap_or_default();
    let company = user
        .company
        .as_ref()
        .map(|c| c.name.clone())
        .unwrap_or_default();

    render! {
        VStack { class: "p-3",
            h2 { "{user.name}" }
            Paragraph { style: TextStyle::Secondary, "@{user.username} · {user.email}" }
            Paragraph { style: TextStyle::Secondary, "{website} {company}" }
            h4 { "Posts" }
            for post in &details.posts {
                Cell {
                    key: "{post.id}",
                    title: post.title.clone(),
                    subtitle: post.body.clone(),
                    onclick: move |_| store.send(Action::RouteToDetails(post.id, user.id)),
                }
            }
        }
    }
}
