use dioxus::prelude::*;

use oriana_domain as domain;
use oriana_web_app as web_app;

use crate::{
    AppState,
    component::{
        element::{Block, Color, Icon, IconText, NoData, Title},
        form::SelectField,
    },
};

#[component]
pub fn Routines() -> Element {
    let state = use_context::<AppState>();
    let (routines, selected, selected_routine, exercises, quote) = {
        let model = state.model.read();
        let catalog = state.catalog.read();
        (
            catalog
                .routines()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>(),
            model.selected_routine,
            model
                .selected_routine_name(&catalog)
                .map(ToString::to_string)
                .unwrap_or_default(),
            model.exercises(&catalog).to_vec(),
            model.quote().map(ToString::to_string),
        )
    };

    rsx! {
        Block {
            class: "box mx-2",
            SelectField {
                label: "Select Routine",
                options: routines,
                selected,
                onselect: move |index| state.dispatch(web_app::Msg::SelectRoutine(index)),
            }
            p { "Selected Routine: {selected_routine}" }
        }
        Block {
            class: "workout mx-2 p-3",
            Title { title: "Today's Workout", class: "has-text-white" }
            if exercises.is_empty() {
                NoData {}
            }
            for exercise in exercises {
                ExerciseEntry { key: "{exercise.name}", exercise: exercise.clone() }
            }
        }
        div {
            class: "block has-text-centered",
            button {
                class: "button is-link",
                onclick: move |_| state.dispatch(web_app::Msg::ToggleQuote),
                IconText { icon: "quote-left", text: "Show Motivational Quote", color: Color::White }
            }
        }
        if let Some(quote) = quote {
            div {
                class: "block quote mx-2 p-4 has-text-centered",
                "{quote}"
            }
        }
    }
}

#[component]
fn ExerciseEntry(exercise: domain::Exercise) -> Element {
    let state = use_context::<AppState>();
    let name = exercise.name.to_string();
    rsx! {
        a {
            class: "panel-block is-justify-content-space-between",
            onclick: move |_| state.dispatch(web_app::Msg::OpenExercise(exercise.clone())),
            span { "{name}" }
            Icon { name: "chevron-right" }
        }
    }
}
