pub mod components;
pub mod navbar;
pub mod pages;
pub mod shell;
pub mod theme;
