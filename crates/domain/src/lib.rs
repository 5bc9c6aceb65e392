#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod catalog;
mod error;
mod exercise;
mod name;
mod quote;
mod random;
mod routine;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use exercise::Exercise;
pub use name::{Name, NameError};
pub use quote::Quotes;
pub use random::{FixedSource, RandomSource, RngSource};
pub use routine::Routine;
