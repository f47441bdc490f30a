//! Class names shared across pages. Colours live in `assets/main.css` and are
//! switched by the theme class on the root element.

use crate::domain::Theme;

pub fn root_class(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "site theme-dark",
        Theme::Light => "site theme-light",
    }
}

pub fn toggle_title(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "Switch to light mode",
        Theme::Light => "Switch to dark mode",
    }
}

pub fn nav_link(active: bool) -> &'static str {
    if active {
        "nav-link active"
    } else {
        "nav-link"
    }
}

pub fn input(valid: bool) -> &'static str {
    if valid {
        "input"
    } else {
        "input invalid"
    }
}

pub const PANEL: &str = "panel";
pub const LABEL: &str = "label";
pub const HELP: &str = "help";
pub const BTN: &str = "btn";
pub const BTN_PRIMARY: &str = "btn btn-primary";
