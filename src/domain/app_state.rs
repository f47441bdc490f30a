use serde::{Deserialize, Serialize};

use super::calculator::CalculatorInputs;

/// Colour scheme of the whole site.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Icon for the navbar toggle.
    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Dark => "🌙",
            Theme::Light => "☀️",
        }
    }
}

/// State shared by every page. Each field is persisted under its own key.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub theme: Theme,
    pub calculator: CalculatorInputs,
}
