use crate::{Name, NameError};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate routine \"{0}\"")]
    DuplicateRoutine(Name),
    #[error("duplicate exercise \"{exercise}\" in routine \"{routine}\"")]
    DuplicateExercise { routine: Name, exercise: Name },
    #[error(transparent)]
    Name(#[from] NameError),
}
