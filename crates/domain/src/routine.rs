use crate::{Exercise, Name};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Routine {
    pub name: Name,
    pub exercises: Vec<Exercise>,
}

impl Routine {
    #[must_use]
    pub fn new(name: Name, exercises: Vec<Exercise>) -> Self {
        Self { name, exercises }
    }

    #[must_use]
    pub fn find_exercise(&self, name: &Name) -> Option<&Exercise> {
        self.exercises.iter().find(|e| &e.name == name)
    }
}
