use dioxus::prelude::*;

use oriana_domain as domain;

use crate::component::element::{Block, Title};

#[component]
pub fn Exercise(exercise: domain::Exercise) -> Element {
    rsx! {
        Title { title: "{exercise.name}", x_padding: 2 }
        Block {
            class: "box mx-2",
            p { "{exercise.description}" }
        }
    }
}
