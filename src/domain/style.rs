// Per-sensor-type visual styling
use serde::Serialize;

use super::device::SensorType;

/// One color-threshold step. The first step of a style has no boundary
/// and covers everything below the next step's value.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ThresholdStep {
    pub color: &'static str,
    pub value: Option<f64>,
}

/// Visual styling for one sensor type: value unit, "traffic light"
/// threshold steps for stat panels, and the line color used in history
/// charts.
#[derive(Debug, Clone, Copy)]
pub struct SensorStyle {
    pub unit: &'static str,
    pub thresholds: &'static [ThresholdStep],
    pub graph_color: &'static str,
}

const SOIL_MOISTURE: SensorStyle = SensorStyle {
    unit: "percent",
    thresholds: &[
        ThresholdStep { color: "red", value: None },
        ThresholdStep { color: "yellow", value: Some(30.0) },
        ThresholdStep { color: "green", value: Some(50.0) },
    ],
    graph_color: "green",
};

const TEMPERATURE: SensorStyle = SensorStyle {
    unit: "celsius",
    thresholds: &[
        ThresholdStep { color: "blue", value: None },
        ThresholdStep { color: "green", value: Some(18.0) },
        ThresholdStep { color: "yellow", value: Some(28.0) },
        ThresholdStep { color: "red", value: Some(35.0) },
    ],
    graph_color: "orange",
};

const HUMIDITY: SensorStyle = SensorStyle {
    unit: "percent",
    thresholds: &[
        ThresholdStep { color: "yellow", value: None },
        ThresholdStep { color: "green", value: Some(40.0) },
        ThresholdStep { color: "blue", value: Some(80.0) },
    ],
    graph_color: "blue",
};

const AIR_QUALITY: SensorStyle = SensorStyle {
    unit: "concentrationpm25",
    thresholds: &[
        ThresholdStep { color: "green", value: None },
        ThresholdStep { color: "yellow", value: Some(12.0) },
        ThresholdStep { color: "orange", value: Some(35.0) },
        ThresholdStep { color: "red", value: Some(55.0) },
    ],
    graph_color: "purple",
};

impl SensorType {
    /// Fixed style for this sensor type. Total by construction since
    /// unknown registry types already collapsed to `SoilMoisture`.
    pub fn style(self) -> &'static SensorStyle {
        match self {
            Self::SoilMoisture => &SOIL_MOISTURE,
            Self::Temperature => &TEMPERATURE,
            Self::Humidity => &HUMIDITY,
            Self::AirQuality => &AIR_QUALITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soil_moisture_style() {
        let style = SensorType::SoilMoisture.style();
        assert_eq!(style.unit, "percent");
        assert_eq!(style.graph_color, "green");
        assert_eq!(style.thresholds.len(), 3);
        assert!(style.thresholds[0].value.is_none());
        assert_eq!(style.thresholds[0].color, "red");
    }

    #[test]
    fn test_unrecognized_type_gets_soil_moisture_style() {
        let style = SensorType::parse(Some("mystery")).style();
        assert_eq!(style.unit, "percent");
        assert_eq!(style.graph_color, "green");
    }

    #[test]
    fn test_first_step_is_always_unbounded() {
        for kind in [
            SensorType::SoilMoisture,
            SensorType::Temperature,
            SensorType::Humidity,
            SensorType::AirQuality,
        ] {
            let style = kind.style();
            assert!(style.thresholds[0].value.is_none());
            for step in &style.thresholds[1..] {
                assert!(step.value.is_some());
            }
        }
    }
}
