use dioxus::prelude::*;
use strum::Display;

#[derive(Display, Debug, Clone, Copy, PartialEq)]
pub enum Color {
    #[strum(to_string = "primary")]
    Primary,
    #[strum(to_string = "white")]
    White,
}

#[component]
pub fn Block(children: Element, class: Option<String>) -> Element {
    rsx! {
        div {
            class: "block",
            class: if let Some(class) = &class { "{class}" },
            {children}
        }
    }
}

#[component]
pub fn CenteredBlock(children: Element) -> Element {
    rsx! {
        div { class: "block has-text-centered", {children} }
    }
}

#[component]
pub fn Title(title: String, class: Option<String>, x_padding: Option<u8>) -> Element {
    rsx! {
        CenteredBlock {
            div {
                class: "container",
                class: if let Some(value) = x_padding { "px-{value}" },
                h1 {
                    class: "title is-5",
                    class: if let Some(c) = &class { "{c}" },
                    "{title}"
                }
            }
        }
    }
}

#[component]
pub fn NoData() -> Element {
    rsx! {
        div {
            class: "block is-size-7 has-text-centered has-text-grey-light mb-6",
            "No exercises"
        }
    }
}

#[component]
pub fn Icon(name: String, onclick: Option<EventHandler<MouseEvent>>) -> Element {
    rsx! {
        span {
            class: "icon",
            onclick: move |evt| {
                if let Some(event_handler) = onclick {
                    event_handler.call(evt);
                }
            },
            i { class: "fas fa-{name}" }
        }
    }
}

#[component]
pub fn IconText(icon: String, text: String, color: Option<Color>) -> Element {
    rsx! {
        span {
            class: "icon-text",
            class: if let Some(color) = color { "has-text-{color}" },
            Icon { name: icon }
            span { {text} }
        }
    }
}
