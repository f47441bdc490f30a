//! Day vs. night import cost model.
//!
//! Prices are entered in pence per kWh, loads in kW. Costs come out in pounds
//! for one hour at the given load.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A named load that can be moved between the day and night periods.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoadItem {
    #[serde(default)]
    pub label: String,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub power: f64,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

fn enabled_by_default() -> bool {
    true
}

/// Older saves hold `null` where a field was cleared mid-edit.
fn lenient_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(|value| value.as_f64()))
}

fn number_or_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(lenient_number(deserializer)?.unwrap_or(0.0))
}

fn lenient_loads<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Vec<LoadItem>>, D::Error> {
    Ok(Option::<Value>::deserialize(deserializer)?
        .and_then(|value| serde_json::from_value(value).ok()))
}

/// Stored form of [`CalculatorInputs`]: every field may be missing, `null` or
/// of the wrong type, and falls back to its own default.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredInputs {
    #[serde(default, deserialize_with = "lenient_number")]
    import_price_day: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    import_price_night: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    export_price_day: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pv_power: Option<f64>,
    #[serde(default, deserialize_with = "lenient_loads")]
    shiftable_import_loads: Option<Vec<LoadItem>>,
    #[serde(default, deserialize_with = "lenient_number")]
    base_load: Option<f64>,
}

/// Only an object is read field by field; anything else is rejected whole.
impl TryFrom<Map<String, Value>> for CalculatorInputs {
    type Error = serde_json::Error;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        serde_json::from_value::<StoredInputs>(Value::Object(fields)).map(Self::from)
    }
}

impl From<StoredInputs> for CalculatorInputs {
    fn from(stored: StoredInputs) -> Self {
        let defaults = Self::default();
        Self {
            import_price_day: stored.import_price_day.unwrap_or(defaults.import_price_day),
            import_price_night: stored
                .import_price_night
                .unwrap_or(defaults.import_price_night),
            export_price_day: stored.export_price_day.unwrap_or(defaults.export_price_day),
            pv_power: stored.pv_power.unwrap_or(defaults.pv_power),
            shiftable_loads: stored
                .shiftable_import_loads
                .unwrap_or(defaults.shiftable_loads),
            base_load: stored.base_load.unwrap_or(defaults.base_load),
        }
    }
}

impl LoadItem {
    pub fn new(label: impl Into<String>, power: f64) -> Self {
        Self {
            label: label.into(),
            power,
            enabled: true,
        }
    }
}

/// Everything the user types into the calculator form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "Map<String, Value>")]
pub struct CalculatorInputs {
    pub import_price_day: f64,
    pub import_price_night: f64,
    pub export_price_day: f64,
    pub pv_power: f64,
    #[serde(rename = "shiftableImportLoads")]
    pub shiftable_loads: Vec<LoadItem>,
    pub base_load: f64,
}

impl Default for CalculatorInputs {
    fn default() -> Self {
        Self {
            import_price_day: 12.0,
            import_price_night: 10.0,
            export_price_day: 15.0,
            pv_power: 4.0,
            shiftable_loads: Vec::new(),
            base_load: 0.3,
        }
    }
}

impl CalculatorInputs {
    /// Total power of the enabled shiftable loads.
    pub fn shiftable_total(&self) -> f64 {
        self.shiftable_loads
            .iter()
            .filter(|item| item.enabled)
            .map(|item| item.power)
            .sum()
    }

    pub fn add_load(&mut self, item: LoadItem) {
        self.shiftable_loads.push(item);
    }

    pub fn remove_load(&mut self, index: usize) -> Option<LoadItem> {
        (index < self.shiftable_loads.len()).then(|| self.shiftable_loads.remove(index))
    }

    /// Flips the `enabled` flag of the load at `index`. Returns false when the
    /// index is out of range.
    pub fn toggle_load(&mut self, index: usize) -> bool {
        match self.shiftable_loads.get_mut(index) {
            Some(item) => {
                item.enabled = !item.enabled;
                true
            }
            None => false,
        }
    }
}

/// Where the shiftable load is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scenario {
    DayImport,
    NightImport,
}

impl Scenario {
    pub fn title(&self) -> &'static str {
        match self {
            Scenario::DayImport => "Day import",
            Scenario::NightImport => "Night import",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            Scenario::DayImport => "If you import your shiftable load during the daytime",
            Scenario::NightImport => "If you import your shiftable load during the night",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CalculationResult {
    pub day_load: f64,
    /// Negative when PV exceeds the day load and the surplus is exported.
    pub day_net_import: f64,
    pub day_cost: f64,
    pub night_load: f64,
    pub night_cost: f64,
    pub net_cost: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScenarioComparison {
    pub day: CalculationResult,
    pub night: CalculationResult,
}

impl ScenarioComparison {
    pub fn result(&self, scenario: Scenario) -> &CalculationResult {
        match scenario {
            Scenario::DayImport => &self.day,
            Scenario::NightImport => &self.night,
        }
    }

    /// The scenario with the lower net cost. `None` on a tie or when either
    /// side is NaN.
    pub fn cheaper(&self) -> Option<Scenario> {
        match self.day.net_cost.partial_cmp(&self.night.net_cost)? {
            std::cmp::Ordering::Less => Some(Scenario::DayImport),
            std::cmp::Ordering::Greater => Some(Scenario::NightImport),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Absolute difference between the two net costs, per hour.
    pub fn saving(&self) -> f64 {
        (self.day.net_cost - self.night.net_cost).abs()
    }
}

/// Cost of one hour at `day_load` plus one hour at `night_load`.
pub fn calculate_scenario(
    inputs: &CalculatorInputs,
    day_load: f64,
    night_load: f64,
) -> CalculationResult {
    let day_net_import = day_load - inputs.pv_power;
    let day_cost = if day_net_import > 0.0 {
        day_net_import * inputs.import_price_day
    } else {
        day_net_import * inputs.export_price_day
    };
    let night_cost = night_load * inputs.import_price_night;
    let net_cost = day_cost + night_cost;

    CalculationResult {
        day_load,
        day_net_import,
        day_cost: day_cost / 100.0,
        night_load,
        night_cost: night_cost / 100.0,
        net_cost: net_cost / 100.0,
    }
}

pub fn calculate(inputs: &CalculatorInputs) -> ScenarioComparison {
    let shiftable = inputs.shiftable_total();
    let base = inputs.base_load;

    ScenarioComparison {
        day: calculate_scenario(inputs, shiftable + base, base),
        night: calculate_scenario(inputs, base, shiftable + base),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn example_inputs() -> CalculatorInputs {
        CalculatorInputs {
            import_price_day: 8.0,
            import_price_night: 12.0,
            export_price_day: 15.0,
            pv_power: 4.0,
            base_load: 0.3,
            shiftable_loads: vec![LoadItem::new("EV", 2.0)],
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn day_import_example() {
        let day = calculate(&example_inputs()).day;
        assert_close(day.day_load, 2.3);
        assert_close(day.day_net_import, -1.7);
        assert_close(day.day_cost, -0.255);
        assert_close(day.night_load, 0.3);
        assert_close(day.night_cost, 0.036);
        assert_close(day.net_cost, -0.219);
    }

    #[test]
    fn night_import_example() {
        let night = calculate(&example_inputs()).night;
        assert_close(night.day_load, 0.3);
        assert_close(night.day_net_import, -3.7);
        assert_close(night.day_cost, -0.555);
        assert_close(night.night_load, 2.3);
        assert_close(night.night_cost, 0.276);
        assert_close(night.net_cost, -0.279);
    }

    #[test]
    fn importing_uses_the_import_rate() {
        let inputs = CalculatorInputs {
            pv_power: 1.0,
            ..example_inputs()
        };
        let day = calculate(&inputs).day;
        // 2.3 kW load, 1 kW PV: 1.3 kW imported at 8p.
        assert_close(day.day_net_import, 1.3);
        assert_close(day.day_cost, 1.3 * 8.0 / 100.0);
    }

    #[test]
    fn no_pv_means_net_import_equals_load() {
        for base_load in [0.0, 0.3, 1.5] {
            for power in [0.0, 2.0, 7.4] {
                let inputs = CalculatorInputs {
                    pv_power: 0.0,
                    base_load,
                    shiftable_loads: vec![LoadItem::new("load", power)],
                    ..example_inputs()
                };
                let comparison = calculate(&inputs);
                assert_eq!(comparison.day.day_net_import, comparison.day.day_load);
                assert_eq!(comparison.night.day_net_import, comparison.night.day_load);
            }
        }
    }

    #[test]
    fn scenarios_match_without_shiftable_load() {
        let mut inputs = example_inputs();
        inputs.shiftable_loads.clear();
        let comparison = calculate(&inputs);
        assert_eq!(comparison.day, comparison.night);
        assert_eq!(comparison.cheaper(), None);

        inputs.add_load(LoadItem {
            label: "off".into(),
            power: 3.0,
            enabled: false,
        });
        let comparison = calculate(&inputs);
        assert_eq!(comparison.day, comparison.night);
    }

    #[test]
    fn disabled_loads_are_excluded() {
        let mut inputs = example_inputs();
        inputs.add_load(LoadItem::new("Hot water", 3.0));
        assert_close(inputs.shiftable_total(), 5.0);

        assert!(inputs.toggle_load(1));
        assert_close(inputs.shiftable_total(), 2.0);
        assert_eq!(inputs.shiftable_loads.len(), 2);

        assert!(inputs.toggle_load(1));
        assert_close(inputs.shiftable_total(), 5.0);
    }

    #[test]
    fn toggle_out_of_range_is_a_no_op() {
        let mut inputs = example_inputs();
        let before = inputs.clone();
        assert!(!inputs.toggle_load(5));
        assert_eq!(inputs, before);
    }

    #[test]
    fn add_then_remove_restores_the_list() {
        let mut inputs = example_inputs();
        inputs.add_load(LoadItem::new("Battery", 3.6));
        let before = inputs.clone();

        inputs.add_load(LoadItem::new("Dishwasher", 1.2));
        let removed = inputs.remove_load(2);

        assert_eq!(removed, Some(LoadItem::new("Dishwasher", 1.2)));
        assert_eq!(inputs, before);
        assert_eq!(inputs.remove_load(9), None);
    }

    #[test]
    fn cheaper_scenario_and_saving() {
        let comparison = calculate(&example_inputs());
        assert_eq!(comparison.cheaper(), Some(Scenario::NightImport));
        assert_close(comparison.saving(), 0.06);
        assert_eq!(
            comparison.result(Scenario::NightImport).net_cost,
            comparison.night.net_cost
        );
    }

    #[test]
    fn nan_passes_through() {
        let inputs = CalculatorInputs {
            base_load: f64::NAN,
            ..example_inputs()
        };
        let comparison = calculate(&inputs);
        assert!(comparison.day.net_cost.is_nan());
        assert!(comparison.night.net_cost.is_nan());
        assert_eq!(comparison.cheaper(), None);
        assert_eq!(format!("{:.2}", comparison.day.net_cost), "NaN");
    }

    #[test]
    fn stored_shape_uses_camel_case_keys() {
        let json = r#"{
            "importPriceDay": 12,
            "importPriceNight": 10,
            "exportPriceDay": 15,
            "pvPower": 4,
            "shiftableImportLoads": [{"label": "EV", "power": 7, "enabled": false}],
            "baseLoad": 0.3
        }"#;
        let inputs: CalculatorInputs = serde_json::from_str(json).unwrap();
        assert_eq!(inputs.shiftable_loads.len(), 1);
        assert!(!inputs.shiftable_loads[0].enabled);
        assert_close(inputs.shiftable_total(), 0.0);
    }

    #[test]
    fn cleared_fields_fall_back_one_by_one() {
        let json = r#"{
            "importPriceDay": null,
            "importPriceNight": 9.5,
            "exportPriceDay": "15",
            "shiftableImportLoads": [
                {"label": "EV", "power": 7, "enabled": true},
                {"label": "Kettle", "power": null, "enabled": false}
            ],
            "baseLoad": null
        }"#;
        let inputs: CalculatorInputs = serde_json::from_str(json).unwrap();
        let defaults = CalculatorInputs::default();

        assert_eq!(inputs.import_price_day, defaults.import_price_day);
        assert_eq!(inputs.import_price_night, 9.5);
        assert_eq!(inputs.export_price_day, defaults.export_price_day);
        assert_eq!(inputs.pv_power, defaults.pv_power);
        assert_eq!(inputs.base_load, defaults.base_load);
        assert_eq!(
            inputs.shiftable_loads,
            vec![
                LoadItem::new("EV", 7.0),
                LoadItem {
                    label: "Kettle".into(),
                    power: 0.0,
                    enabled: false,
                },
            ]
        );
    }

    #[test]
    fn non_object_is_rejected() {
        assert!(serde_json::from_str::<CalculatorInputs>("[1, 2]").is_err());
        assert!(serde_json::from_str::<CalculatorInputs>("42").is_err());
    }
}
