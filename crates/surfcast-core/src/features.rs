//! The structured inputs for a single prediction.

/// Feature names in the order the model was trained on. Model weights and
/// per-feature explanations are aligned to this order.
pub const FEATURE_NAMES: [&str; 5] = [
    "hour",
    "water_temp",
    "air_temp",
    "water_level",
    "weather_condition",
];

/// A single-row feature record.
///
/// `weather_condition` is the one optional input; requests may omit it
/// entirely, in which case it contributes nothing to the prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRecord {
    pub hour: f64,
    pub water_temp: f64,
    pub air_temp: f64,
    pub water_level: f64,
    pub weather_condition: Option<f64>,
}

impl FeatureRecord {
    /// Values in [`FEATURE_NAMES`] order; an absent `weather_condition`
    /// reads as `0.0`.
    pub fn values(&self) -> [f64; 5] {
        [
            self.hour,
            self.water_temp,
            self.air_temp,
            self.water_level,
            self.weather_condition.unwrap_or(0.0),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_follow_feature_name_order() {
        let record = FeatureRecord {
            hour: 10.0,
            water_temp: 70.0,
            air_temp: 75.0,
            water_level: 150.0,
            weather_condition: Some(61.0),
        };
        assert_eq!(record.values(), [10.0, 70.0, 75.0, 150.0, 61.0]);
    }

    #[test]
    fn absent_weather_condition_reads_as_zero() {
        let record = FeatureRecord {
            hour: 10.0,
            water_temp: 70.0,
            air_temp: 75.0,
            water_level: 150.0,
            weather_condition: None,
        };
        assert_eq!(record.values()[4], 0.0);
    }
}
