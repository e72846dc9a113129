use dioxus::prelude::*;

#[derive(Clone, Copy, Eq, PartialEq, Debug, Default)]
pub enum TextStyle {
    #[default]
    Primary,
    Secondary,
}

impl TextStyle {
    fn as_css(&self) -> &'static str {
        match self {
            TextStyle::Primary => "label-primary",
            TextStyle::Secondary => "label-secondary",
        }
    }
}

#[inline_props]
pub fn Paragraph<'a>(
    cx: Scope<'a>,
    style: Option<TextStyle>,
    class: Option<&'static str>,
    children: Element<'a>,
) -> Element<'a> {
    let style_class = style.unwrap_or_default().as_css();
    let class = class.unwrap_or_default();

    cx.render(rsx!(p {
        class: "{style_class} {class}",
        children
    }))
}

/// A clickable list entry with a headline and a secondary line
#[inline_props]
pub fn Cell<'a>(
    cx: Scope<'a>,
    title: String,
    subtitle: String,
    onclick: EventHandler<'a, ()>,
) -> Element<'a> {
    cx.render(rsx!(
        div {
            class: "cell",
            onclick: move |_| onclick.call(()),
            h4 { "{title}" }
            Paragraph { style: TextStyle::Secondary, "{subtitle}" }
        }
    ))
}
