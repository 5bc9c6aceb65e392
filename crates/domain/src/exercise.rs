use crate::{Name, NameError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub name: Name,
    pub description: String,
}

impl Exercise {
    pub fn new(name: &str, description: &str) -> Result<Self, NameError> {
        Ok(Self {
            name: Name::new(name)?,
            description: description.to_string(),
        })
    }
}
