use dioxus::prelude::*;

use crate::component::element::{Color, Icon};

#[component]
pub fn Navbar(title: String, back: Option<EventHandler<MouseEvent>>) -> Element {
    rsx! {
        nav {
            class: "navbar is-primary has-shadow has-text-weight-bold mb-4",
            div {
                class: "container",
                div {
                    class: "navbar-brand is-flex-grow-1",
                    a {
                        class: "navbar-item is-size-5",
                        class: if back.is_none() { "has-text-{Color::Primary}" },
                        Icon {
                            name: "chevron-left",
                            onclick: move |evt| {
                                if let Some(back) = back {
                                    back.call(evt);
                                }
                            },
                        }
                    }
                    div { class: "navbar-item is-size-5", "{title}" }
                    div { class: "mx-auto" }
                }
            }
        }
    }
}
