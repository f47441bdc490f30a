use crate::domain::{CalculatorInputs, Theme};
use crate::util::persistence::PreferenceKey;

pub const CALCULATOR_INPUTS: PreferenceKey<CalculatorInputs> = PreferenceKey {
    name: "day-night-import-calc-inputs",
    default: CalculatorInputs::default,
};

pub const THEME: PreferenceKey<Theme> = PreferenceKey {
    name: "theme",
    default: Theme::default,
};
