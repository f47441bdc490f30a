//! Calculator model, navigation tree and the state they hang off.

pub mod app_state;
pub mod calculator;
pub mod form;
pub mod navigation;

#[allow(unused_imports)]
pub use app_state::{AppState, Theme};
#[allow(unused_imports)]
pub use calculator::{
    calculate, CalculationResult, CalculatorInputs, LoadItem, Scenario, ScenarioComparison,
};
#[allow(unused_imports)]
pub use form::{format_number, parse_number, parse_power, InputError, NewLoadDraft};
#[allow(unused_imports)]
pub use navigation::{build_nav, NavNode, NavbarConfig, NavbarItem};
