#![allow(non_snake_case)]

use crate::environment::{Environment, Repository};
use dioxus::prelude::*;

use crate::style::STYLE;

use dioxus_desktop::{Config, LogicalSize, WindowBuilder};

pub fn run() {
    use env_logger::Env;
    use std::io::Write;
    env_logger::Builder::from_env(Env::default().default_filter_or("debug"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{}:{} {} [{}] - {}",
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .target(env_logger::Target::Stdout)
        .init();

    let style = STYLE;
    let config = Config::new()
        .with_custom_head(format!(
            r#"
        <title>Synergy</title>
        <style>{style}</style>
        <meta name='color-scheme' content='dark'>
        "#
        ))
        .with_window(default_window());

    dioxus_desktop::launch_with_props(RootApp, RootAppProps {}, config);
}

fn default_window() -> WindowBuilder {
    WindowBuilder::new()
        .with_title("Synergy")
        .with_theme(Some(dioxus_desktop::tao::window::Theme::Dark))
        .with_inner_size(LogicalSize::new(900.0, 700.0))
        .with_min_inner_size(LogicalSize::new(480.0, 400.0))
}

pub struct RootAppProps {}

pub fn RootApp(cx: Scope<'_, RootAppProps>) -> Element<'_> {
    log::trace!("rerender root-app");
    let repository = use_state(cx, Repository::new);

    let environment_state = use_state(cx, || {
        let environment = Environment::from_repository(repository.get());
        log::info!("Using api at {}", environment.model.url);
        environment
    });

    cx.render(rsx! {
        crate::components::synergy::SynergyApp {
            environment: environment_state,
        }
    })
}
