#![warn(clippy::pedantic)]

use std::sync::Arc;

use dioxus::prelude::*;
use log::error;
use rand::{SeedableRng, rngs::StdRng};

use oriana_domain as domain;
use oriana_web_app as web_app;

use component::navbar::Navbar;
use page::{exercise::Exercise, routines::Routines};

mod component;
mod page;

const TITLE: &str = "Oriana Coach Gym App";
const MAIN_CSS: Asset = asset!("/assets/main.css");

/// State shared by all pages. Only `dispatch` mutates the model.
#[derive(Clone, Copy)]
pub struct AppState {
    pub model: Signal<web_app::Model>,
    pub catalog: Signal<domain::Catalog>,
    quotes: Signal<domain::Quotes>,
    rng: Signal<domain::RngSource<StdRng>>,
}

impl AppState {
    pub fn dispatch(mut self, msg: web_app::Msg) {
        web_app::update(
            msg,
            &mut self.model.write(),
            &self.quotes.read(),
            &mut *self.rng.write(),
        );
    }
}

fn main() {
    init_logging();
    dioxus::launch(App);
}

fn init_logging() {
    let settings = web_app::Settings::default();
    let _ = web_app::log::init(Arc::new(web_app::log::MemoryLog::new(
        settings.log_capacity,
    )));
}

fn load_catalog() -> domain::Catalog {
    domain::Catalog::builtin().unwrap_or_else(|err| {
        error!("invalid built-in catalog: {err}");
        domain::Catalog::default()
    })
}

#[component]
fn App() -> Element {
    let state = use_context_provider(|| AppState {
        model: Signal::new(web_app::Model::default()),
        catalog: Signal::new(load_catalog()),
        quotes: Signal::new(domain::Quotes::builtin()),
        rng: Signal::new(domain::RngSource(StdRng::from_entropy())),
    });
    let theme = match web_app::Settings::default().current_theme() {
        web_app::Theme::Dark => "is-theme-dark",
        web_app::Theme::Light | web_app::Theme::System => "is-theme-light",
    };
    let exercise = state.model.read().current_exercise().cloned();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div {
            class: "container is-max-desktop py-4 {theme}",
            if let Some(exercise) = exercise {
                Navbar {
                    title: exercise.name.to_string(),
                    back: move |_| state.dispatch(web_app::Msg::Back),
                }
                Exercise { exercise: exercise.clone() }
            } else {
                Navbar { title: "{TITLE}" }
                Routines {}
            }
        }
    }
}
