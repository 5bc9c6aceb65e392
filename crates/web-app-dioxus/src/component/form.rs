use dioxus::prelude::*;

#[component]
pub fn SelectField(
    label: String,
    options: Vec<String>,
    selected: usize,
    onselect: EventHandler<usize>,
) -> Element {
    rsx! {
        div {
            class: "field",
            label { class: "label has-text-white", "{label}" }
            div {
                class: "control",
                div {
                    class: "select is-fullwidth",
                    select {
                        onchange: move |evt: FormEvent| {
                            if let Ok(index) = evt.value().parse::<usize>() {
                                onselect.call(index);
                            }
                        },
                        for (index, name) in options.iter().enumerate() {
                            option {
                                value: "{index}",
                                selected: index == selected,
                                "{name}"
                            }
                        }
                    }
                }
            }
        }
    }
}
