// Grafana dashboard document model
//
// Serialized shape must match Grafana's provisioning format exactly in
// key names and nesting, otherwise the files are silently ignored at
// load time. Every rename below is part of that contract.
use serde::Serialize;
use serde_json::Value;

use super::style::ThresholdStep;

pub const SCHEMA_VERSION: u32 = 39;
pub const REFRESH_INTERVAL: &str = "10s";

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub title: String,
    pub uid: String,
    pub editable: bool,
    pub panels: Vec<Panel>,
    #[serde(rename = "schemaVersion")]
    pub schema_version: u32,
    pub version: u32,
    pub refresh: String,
}

impl Dashboard {
    pub fn new(title: String, uid: String, panels: Vec<Panel>) -> Self {
        Self {
            title,
            uid,
            editable: true,
            panels,
            schema_version: SCHEMA_VERSION,
            version: 1,
            refresh: REFRESH_INTERVAL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct GridPos {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Datasource {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub uid: &'static str,
}

impl Datasource {
    pub fn influxdb() -> Self {
        Self {
            kind: "influxdb",
            uid: "influxdb",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Target {
    #[serde(rename = "refId")]
    pub ref_id: &'static str,
    pub query: String,
}

impl Target {
    pub fn new(query: String) -> Self {
        Self { ref_id: "A", query }
    }
}

/// One dashboard tile. Row headers carry no datasource.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Panel {
    Row {
        id: u32,
        title: String,
        #[serde(rename = "gridPos")]
        grid_pos: GridPos,
        collapsed: bool,
    },
    Stat {
        id: u32,
        title: String,
        #[serde(rename = "gridPos")]
        grid_pos: GridPos,
        datasource: Datasource,
        #[serde(rename = "fieldConfig")]
        field_config: StatFieldConfig,
        options: StatOptions,
        targets: Vec<Target>,
    },
    Timeseries {
        id: u32,
        title: String,
        #[serde(rename = "gridPos")]
        grid_pos: GridPos,
        datasource: Datasource,
        #[serde(rename = "fieldConfig")]
        field_config: SeriesFieldConfig,
        options: SeriesOptions,
        targets: Vec<Target>,
    },
}

impl Panel {
    pub fn id(&self) -> u32 {
        match self {
            Self::Row { id, .. } | Self::Stat { id, .. } | Self::Timeseries { id, .. } => *id,
        }
    }

    pub fn grid_pos(&self) -> GridPos {
        match self {
            Self::Row { grid_pos, .. }
            | Self::Stat { grid_pos, .. }
            | Self::Timeseries { grid_pos, .. } => *grid_pos,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StatFieldConfig {
    pub defaults: StatDefaults,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatDefaults {
    pub unit: &'static str,
    pub thresholds: Thresholds,
}

#[derive(Debug, Clone, Serialize)]
pub struct Thresholds {
    pub mode: &'static str,
    pub steps: Vec<ThresholdStep>,
}

impl Thresholds {
    pub fn absolute(steps: &[ThresholdStep]) -> Self {
        Self {
            mode: "absolute",
            steps: steps.to_vec(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatOptions {
    pub color_mode: &'static str,
    pub graph_mode: &'static str,
    pub text_mode: &'static str,
}

impl Default for StatOptions {
    fn default() -> Self {
        Self {
            color_mode: "background",
            graph_mode: "none",
            text_mode: "auto",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SeriesFieldConfig {
    pub defaults: SeriesDefaults,
    pub overrides: Vec<FieldOverride>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeriesDefaults {
    pub custom: SeriesCustom,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesCustom {
    pub line_width: u32,
    pub fill_opacity: u32,
    pub point_size: u32,
    pub show_points: &'static str,
}

impl Default for SeriesCustom {
    fn default() -> Self {
        Self {
            line_width: 2,
            fill_opacity: 10,
            point_size: 5,
            show_points: "auto",
        }
    }
}

/// Per-field visual override, matched by series name.
#[derive(Debug, Clone, Serialize)]
pub struct FieldOverride {
    pub matcher: Matcher,
    pub properties: Vec<OverrideProperty>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Matcher {
    pub id: &'static str,
    pub options: String,
}

impl Matcher {
    pub fn by_name(options: String) -> Self {
        Self { id: "byName", options }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OverrideProperty {
    pub id: &'static str,
    pub value: Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeriesOptions {
    pub legend: Legend,
    pub tooltip: Tooltip,
}

impl Default for SeriesOptions {
    fn default() -> Self {
        Self {
            legend: Legend {
                display_mode: "list",
                placement: "bottom",
                show_legend: true,
            },
            tooltip: Tooltip { mode: "multi" },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Legend {
    pub display_mode: &'static str,
    pub placement: &'static str,
    pub show_legend: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Tooltip {
    pub mode: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_row_panel_shape() {
        let panel = Panel::Row {
            id: 1,
            title: "esp32-a - Bench unit".to_string(),
            grid_pos: GridPos { x: 0, y: 0, w: 24, h: 1 },
            collapsed: false,
        };
        let value = serde_json::to_value(&panel).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "row",
                "id": 1,
                "title": "esp32-a - Bench unit",
                "gridPos": {"x": 0, "y": 0, "w": 24, "h": 1},
                "collapsed": false,
            })
        );
    }

    #[test]
    fn test_unbounded_threshold_serializes_as_null() {
        let thresholds = Thresholds::absolute(&[
            ThresholdStep { color: "red", value: None },
            ThresholdStep { color: "green", value: Some(50.0) },
        ]);
        let value = serde_json::to_value(&thresholds).unwrap();
        assert_eq!(
            value,
            json!({
                "mode": "absolute",
                "steps": [
                    {"color": "red", "value": null},
                    {"color": "green", "value": 50.0},
                ],
            })
        );
    }

    #[test]
    fn test_dashboard_metadata() {
        let dashboard = Dashboard::new(
            "Indoor".to_string(),
            "greenhouse-indoor".to_string(),
            Vec::new(),
        );
        let value = serde_json::to_value(&dashboard).unwrap();
        assert_eq!(value["schemaVersion"], 39);
        assert_eq!(value["version"], 1);
        assert_eq!(value["refresh"], "10s");
        assert_eq!(value["editable"], true);
    }
}
