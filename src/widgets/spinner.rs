use dioxus::prelude::*;

/// Shown while a collection or a join is in flight
#[inline_props]
pub fn Spinner(cx: Scope, class: Option<&'static str>) -> Element {
    let c = class.unwrap_or_default();
    cx.render(rsx!( div { class: "hstack grow align-items-center", div { class: "loader {c}" } } ))
}
