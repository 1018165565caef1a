// Location grouping - partitions the registry into per-site device lists
use indexmap::IndexMap;

use crate::domain::device::{Device, SensorSpec, SensorType};
use crate::infrastructure::config::DeviceConfig;

/// Sentinel location for devices whose registry entry has none.
pub const UNKNOWN_LOCATION: &str = "unknown";

/// Partition devices by location, keeping registry order both for the
/// locations themselves and for the devices within each. Each record is
/// annotated with its own registry id; nothing is merged or dropped.
pub fn group_by_location(devices: IndexMap<String, DeviceConfig>) -> IndexMap<String, Vec<Device>> {
    let mut locations: IndexMap<String, Vec<Device>> = IndexMap::new();

    for (device_id, device_config) in devices {
        let location = device_config
            .location
            .clone()
            .unwrap_or_else(|| UNKNOWN_LOCATION.to_string());

        locations
            .entry(location)
            .or_default()
            .push(to_device(device_id, device_config));
    }

    locations
}

fn to_device(id: String, config: DeviceConfig) -> Device {
    let sensors = config
        .sensors
        .into_iter()
        .map(|(field, sensor)| {
            let kind = SensorType::parse(sensor.sensor_type.as_deref());
            (field, SensorSpec::new(kind, sensor.name))
        })
        .collect();

    Device::new(id, config.description.unwrap_or_default(), sensors)
}
