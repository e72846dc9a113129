#![allow(non_snake_case)]

mod app;
mod components;
mod environment;
mod style;
mod widgets;

pub use app::run;
pub use components::synergy::navigation::{route_to_details, route_to_uri, route_to_user};
pub use components::synergy::store::{apply, AppData, StoreAction};
pub use environment::router::{Location, Route, Router, UserParam};
pub use environment::types::{
    Address, Comment, Company, Config, Loadable, MainPage, Post, PostDetails, User, UserDetails,
    DEFAULT_API_URL,
};
pub use environment::{Model, Repository};
