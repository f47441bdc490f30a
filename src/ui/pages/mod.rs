pub mod day_night_import;
pub mod home;
pub mod not_found;

pub use day_night_import::DayNightImportPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
