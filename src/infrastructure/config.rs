use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

/// Registry path, resolved by the config crate against the working
/// directory with any supported extension (sensors.yml in practice).
pub const REGISTRY_PATH: &str = "config/sensors";

#[derive(Debug, Deserialize, Clone)]
pub struct RegistryConfig {
    #[serde(default)]
    pub devices: IndexMap<String, DeviceConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DeviceConfig {
    pub location: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub sensors: IndexMap<String, SensorConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SensorConfig {
    #[serde(rename = "type")]
    pub sensor_type: Option<String>,
    pub name: Option<String>,
}

/// The one failure the tool reports on its own terms: no usable
/// registry means nothing to generate, so exit before touching the
/// output directory.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("could not load sensor registry: {0}")]
    Unavailable(#[from] config::ConfigError),
    #[error("no devices found in sensor registry")]
    Empty,
}

pub fn load_registry(path: &str) -> Result<RegistryConfig, RegistryError> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(path))
        .build()?;

    registry_from(settings)
}

fn registry_from(settings: config::Config) -> Result<RegistryConfig, RegistryError> {
    let registry: RegistryConfig = settings.try_deserialize()?;

    if registry.devices.is_empty() {
        return Err(RegistryError::Empty);
    }

    Ok(registry)
}
