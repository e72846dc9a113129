use dioxus::prelude::*;

#[derive(Props)]
pub struct StackProps<'a> {
    #[props(optional)]
    pub class: Option<&'a str>,
    pub children: Element<'a>,
}

pub fn VStack<'a>(cx: Scope<'a, StackProps<'a>>) -> Element {
    let custom_cls = cx.props.class.unwrap_or_default();
    cx.render(rsx!(
        div { class: "vstack {custom_cls}", &cx.props.children }
    ))
}

pub fn HStack<'a>(cx: Scope<'a, StackProps<'a>>) -> Element {
    let custom_cls = cx.props.class.unwrap_or_default();
    cx.render(rsx!(
        div { class: "hstack {custom_cls}", &cx.props.children }
    ))
}
