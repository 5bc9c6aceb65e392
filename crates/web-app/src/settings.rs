use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub theme: Theme,
    pub log_capacity: usize,
}

impl Settings {
    #[must_use]
    pub fn current_theme(&self) -> Theme {
        match self.theme {
            Theme::System => system_theme(),
            Theme::Light | Theme::Dark => self.theme,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::System,
            log_capacity: 100,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    System,
    Light,
    Dark,
}

#[cfg(target_arch = "wasm32")]
fn system_theme() -> Theme {
    use log::error;

    if let Some(window) = web_sys::window() {
        if let Ok(prefers_dark_scheme) = window.match_media("(prefers-color-scheme: dark)") {
            if let Some(media_query_list) = prefers_dark_scheme {
                if media_query_list.matches() {
                    Theme::Dark
                } else {
                    Theme::Light
                }
            } else {
                error!("failed to determine preferred color scheme");
                Theme::Light
            }
        } else {
            error!("failed to match media to determine preferred color scheme");
            Theme::Light
        }
    } else {
        error!("failed to access window to determine preferred color scheme");
        Theme::Light
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn system_theme() -> Theme {
    Theme::Light
}
