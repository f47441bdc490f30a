//! Compile-time configuration: site identity, storage keys and the navbar tree.

pub mod keys;
pub mod navbar;

pub const APP_NAME: &str = "Paddy's solar calculator";

// Native config directory, e.g. ~/.config/solar-calculators on Linux.
pub const APP_QUALIFIER: &str = "uk";
pub const APP_ORG: &str = "SolarCalculators";
pub const APP_DIR: &str = "solar-calculators";
