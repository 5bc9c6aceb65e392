use log::debug;

use oriana_domain::{Catalog, Exercise, Name, Quotes, RandomSource};

// ------ ------
//     Model
// ------ ------

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Model {
    pub selected_routine: usize,
    show_quote: bool,
    quote: Option<String>,
    pub screen: Screen,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Routines,
    Exercise(Exercise),
}

impl Model {
    #[must_use]
    pub fn selected_routine_name<'a>(&self, catalog: &'a Catalog) -> Option<&'a Name> {
        catalog.routine_name(self.selected_routine)
    }

    #[must_use]
    pub fn exercises<'a>(&self, catalog: &'a Catalog) -> &'a [Exercise] {
        catalog.exercises_at(self.selected_routine)
    }

    #[must_use]
    pub fn show_quote(&self) -> bool {
        self.show_quote
    }

    #[must_use]
    pub fn quote(&self) -> Option<&str> {
        if self.show_quote {
            self.quote.as_deref()
        } else {
            None
        }
    }

    #[must_use]
    pub fn current_exercise(&self) -> Option<&Exercise> {
        match &self.screen {
            Screen::Routines => None,
            Screen::Exercise(exercise) => Some(exercise),
        }
    }
}

// ------ ------
//    Update
// ------ ------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    SelectRoutine(usize),
    OpenExercise(Exercise),
    Back,
    ToggleQuote,
}

pub fn update(msg: Msg, model: &mut Model, quotes: &Quotes, rng: &mut impl RandomSource) {
    match msg {
        Msg::SelectRoutine(index) => {
            debug!("select routine {index}");
            model.selected_routine = index;
        }
        Msg::OpenExercise(exercise) => {
            debug!("open exercise {}", exercise.name);
            model.screen = Screen::Exercise(exercise);
        }
        Msg::Back => {
            if let Screen::Exercise(ref exercise) = model.screen {
                debug!("leave exercise {}", exercise.name);
            }
            model.screen = Screen::Routines;
        }
        Msg::ToggleQuote => {
            model.show_quote = !model.show_quote;
            model.quote = if model.show_quote {
                Some(quotes.pick(rng).to_string())
            } else {
                None
            };
            debug!("quote shown: {}", model.show_quote);
        }
    }
}
