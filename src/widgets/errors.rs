use super::{HStack, Paragraph, VStack};
use dioxus::prelude::*;

/// A small box that displays an error until it is dismissed
#[inline_props]
pub fn ErrorBox<'a>(cx: Scope<'a>, content: String, onclick: EventHandler<'a, ()>) -> Element<'a> {
    cx.render(rsx!(
        div { class: "error-box",
            HStack { class: "align-items-center",
                div { class: "grow",
                    Paragraph { "{content}" }
                }
                button {
                    class: "button",
                    title: "Dismiss",
                    onclick: move |_| onclick.call(()),
                    "Dismiss"
                }
            }
        }
    ))
}

/// A growing page with a centered error message
#[inline_props]
pub fn ErrorPage(cx: Scope, content: String) -> Element {
    cx.render(rsx!(
        div { class: "p-3",
            VStack { class: "grow label-primary",
                h4 { "Not found" }
                Paragraph { "{content}" }
            }
        }
    ))
}
