// Device domain model
use indexmap::IndexMap;

/// The fixed set of sensor kinds the generator knows how to style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorType {
    SoilMoisture,
    Temperature,
    Humidity,
    AirQuality,
}

impl SensorType {
    /// Lenient parse: an unrecognized or absent type falls back to soil
    /// moisture rather than failing. Registries in the field contain
    /// typos and the dashboards should still render something sensible.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("temperature") => Self::Temperature,
            Some("humidity") => Self::Humidity,
            Some("air_quality") => Self::AirQuality,
            _ => Self::SoilMoisture,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SensorSpec {
    pub kind: SensorType,
    pub name: Option<String>,
}

impl SensorSpec {
    pub fn new(kind: SensorType, name: Option<String>) -> Self {
        Self { kind, name }
    }

    /// Panel label for this sensor: the configured display name, or the
    /// raw field name when none was given.
    pub fn display_name<'a>(&'a self, field: &'a str) -> &'a str {
        self.name.as_deref().unwrap_or(field)
    }
}

/// One physical sensor unit, annotated with its registry id. Sensor
/// fields keep their registry order.
#[derive(Debug, Clone)]
pub struct Device {
    pub id: String,
    pub description: String,
    pub sensors: IndexMap<String, SensorSpec>,
}

impl Device {
    pub fn new(id: String, description: String, sensors: IndexMap<String, SensorSpec>) -> Self {
        Self {
            id,
            description,
            sensors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_types() {
        assert_eq!(SensorType::parse(Some("temperature")), SensorType::Temperature);
        assert_eq!(SensorType::parse(Some("humidity")), SensorType::Humidity);
        assert_eq!(SensorType::parse(Some("air_quality")), SensorType::AirQuality);
        assert_eq!(SensorType::parse(Some("soil_moisture")), SensorType::SoilMoisture);
    }

    #[test]
    fn test_parse_falls_back_to_soil_moisture() {
        assert_eq!(SensorType::parse(Some("mystery")), SensorType::SoilMoisture);
        assert_eq!(SensorType::parse(None), SensorType::SoilMoisture);
    }

    #[test]
    fn test_display_name_defaults_to_field() {
        let spec = SensorSpec::new(SensorType::Temperature, None);
        assert_eq!(spec.display_name("temp_1"), "temp_1");

        let spec = SensorSpec::new(SensorType::Temperature, Some("Air Temp".to_string()));
        assert_eq!(spec.display_name("temp_1"), "Air Temp");
    }
}
