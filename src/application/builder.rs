// Dashboard assembly - grid layout, panel factories, query construction
use indexmap::IndexMap;
use serde_json::json;

use crate::domain::dashboard::{
    Dashboard, Datasource, FieldOverride, GridPos, Matcher, OverrideProperty, Panel,
    SeriesCustom, SeriesDefaults, SeriesFieldConfig, SeriesOptions, StatDefaults,
    StatFieldConfig, StatOptions, Target, Thresholds,
};
use crate::domain::device::{Device, SensorSpec};

const BUCKET: &str = "greenhouse";
const MEASUREMENT: &str = "greenhouse";

const ROW_WIDTH: u32 = 24;
const STAT_WIDTH: u32 = 6;
const STAT_HEIGHT: u32 = 4;
const HISTORY_HEIGHT: u32 = 8;

/// Grid cursor threaded through the layout walk. x only matters while
/// placing stat panels; row headers and history panels span the full
/// row width.
#[derive(Debug, Clone, Copy)]
struct GridCursor {
    x: u32,
    y: u32,
}

/// Build the dashboard document for one location.
///
/// Per device, in order: a row header, one 6x4 stat panel per sensor
/// field packed four to a row, then a full-width history panel starting
/// on a fresh row. Panel ids are a single counter across the whole
/// dashboard, starting at 1.
pub fn build_dashboard(location: &str, devices: &[Device]) -> Dashboard {
    let mut panels = Vec::new();
    let mut next_id = 1;
    let mut cursor = GridCursor { x: 0, y: 0 };

    for device in devices {
        panels.push(device_row(next_id, device, cursor.y));
        next_id += 1;
        cursor.y += 1;
        cursor.x = 0;

        for (field, spec) in &device.sensors {
            panels.push(stat_panel(
                next_id, field, spec, &device.id, location, cursor.x, cursor.y,
            ));
            next_id += 1;
            cursor.x += STAT_WIDTH;
            if cursor.x >= ROW_WIDTH {
                cursor.x = 0;
                cursor.y += STAT_HEIGHT;
            }
        }

        // A partially filled stat row still occupies its full height
        if cursor.x > 0 {
            cursor.y += STAT_HEIGHT;
        }

        panels.push(history_panel(
            next_id,
            &device.id,
            location,
            &device.sensors,
            cursor.y,
        ));
        next_id += 1;
        cursor.y += HISTORY_HEIGHT;
    }

    Dashboard::new(
        dashboard_title(location),
        format!("greenhouse-{location}"),
        panels,
    )
}

/// Human-readable dashboard title: separators become spaces, words get
/// title casing ("green-house_1" -> "Green House 1").
fn dashboard_title(location: &str) -> String {
    let mut title = String::with_capacity(location.len());
    let mut word_start = true;

    for c in location.chars() {
        if c == '-' || c == '_' {
            title.push(' ');
            word_start = true;
        } else if c.is_alphabetic() {
            if word_start {
                title.extend(c.to_uppercase());
            } else {
                title.extend(c.to_lowercase());
            }
            word_start = false;
        } else {
            title.push(c);
            word_start = true;
        }
    }

    title
}

/// Section header for one device: full-width, one unit tall, never
/// collapsed. An empty description leaves a bare trailing separator.
fn device_row(id: u32, device: &Device, y: u32) -> Panel {
    Panel::Row {
        id,
        title: format!("{} - {}", device.id, device.description),
        grid_pos: GridPos { x: 0, y, w: ROW_WIDTH, h: 1 },
        collapsed: false,
    }
}

/// Single-value summary tile for one sensor, colored by the sensor
/// type's threshold steps.
fn stat_panel(
    id: u32,
    field: &str,
    spec: &SensorSpec,
    device_id: &str,
    location: &str,
    x: u32,
    y: u32,
) -> Panel {
    let style = spec.kind.style();

    // Identifiers are interpolated verbatim; a quote character in a
    // field, device id, or location would produce a malformed query.
    let query = format!(
        r#"from(bucket: "{BUCKET}")
  |> range(start: -1h)
  |> filter(fn: (r) => r._measurement == "{MEASUREMENT}")
  |> filter(fn: (r) => r._field == "{field}")
  |> filter(fn: (r) => r.device_id == "{device_id}")
  |> filter(fn: (r) => r.location == "{location}")
  |> last()"#
    );

    Panel::Stat {
        id,
        title: spec.display_name(field).to_string(),
        grid_pos: GridPos { x, y, w: STAT_WIDTH, h: STAT_HEIGHT },
        datasource: Datasource::influxdb(),
        field_config: StatFieldConfig {
            defaults: StatDefaults {
                unit: style.unit,
                thresholds: Thresholds::absolute(style.thresholds),
            },
        },
        options: StatOptions::default(),
        targets: vec![Target::new(query)],
    }
}

/// Full-width time-series chart over every sensor field of one device,
/// following the dashboard's active time range. A device with no
/// sensors gets a vacuous field filter that matches nothing.
fn history_panel(
    id: u32,
    device_id: &str,
    location: &str,
    sensors: &IndexMap<String, SensorSpec>,
    y: u32,
) -> Panel {
    let field_filter = sensors
        .keys()
        .map(|field| format!(r#"r._field == "{field}""#))
        .collect::<Vec<_>>()
        .join(" or ");

    let query = format!(
        r#"from(bucket: "{BUCKET}")
  |> range(start: v.timeRangeStart, stop: v.timeRangeStop)
  |> filter(fn: (r) => r._measurement == "{MEASUREMENT}")
  |> filter(fn: (r) => r.device_id == "{device_id}")
  |> filter(fn: (r) => r.location == "{location}")
  |> filter(fn: (r) => {field_filter})"#
    );

    let overrides = sensors
        .iter()
        .map(|(field, spec)| {
            let style = spec.kind.style();
            FieldOverride {
                matcher: Matcher::by_name(field.clone()),
                properties: vec![
                    OverrideProperty {
                        id: "unit",
                        value: json!(style.unit),
                    },
                    OverrideProperty {
                        id: "color",
                        value: json!({"fixedColor": style.graph_color, "mode": "fixed"}),
                    },
                    OverrideProperty {
                        id: "displayName",
                        value: json!(spec.display_name(field)),
                    },
                ],
            }
        })
        .collect();

    Panel::Timeseries {
        id,
        title: "Sensor History".to_string(),
        grid_pos: GridPos { x: 0, y, w: ROW_WIDTH, h: HISTORY_HEIGHT },
        datasource: Datasource::influxdb(),
        field_config: SeriesFieldConfig {
            defaults: SeriesDefaults {
                custom: SeriesCustom::default(),
            },
            overrides,
        },
        options: SeriesOptions::default(),
        targets: vec![Target::new(query)],
    }
}
