#![warn(clippy::pedantic)]

pub mod log;
mod settings;
mod state;

pub use settings::{Settings, Theme};
pub use state::{Model, Msg, Screen, update};
