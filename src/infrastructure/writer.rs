// Dashboard file output
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::dashboard::Dashboard;

/// Destination picked up by Grafana's dashboard provisioner.
pub const DASHBOARDS_DIR: &str = "grafana/provisioning/dashboards";

/// Serialize each dashboard to `<uid>.json` under `dir`, creating the
/// directory first. Writes are independent per file; a failure part way
/// through leaves the files already written in place, which is fine
/// because a re-run regenerates everything from scratch.
pub fn write_dashboards(dir: &Path, dashboards: &[Dashboard]) -> Result<Vec<String>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create dashboard directory {}", dir.display()))?;

    let mut written = Vec::with_capacity(dashboards.len());
    for dashboard in dashboards {
        let file_name = format!("{}.json", dashboard.uid);
        let path = dir.join(&file_name);
        let body = serde_json::to_string_pretty(dashboard)
            .with_context(|| format!("failed to serialize dashboard {}", dashboard.uid))?;

        fs::write(&path, body).with_context(|| format!("failed to write {}", path.display()))?;
        tracing::debug!("wrote {}", path.display());
        println!("Generated: {}", path.display());
        written.push(file_name);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dashboard::{GridPos, Panel};
    use std::env;

    fn sample_dashboard() -> Dashboard {
        Dashboard::new(
            "Indoor".to_string(),
            "greenhouse-indoor".to_string(),
            vec![Panel::Row {
                id: 1,
                title: "esp32-a - ".to_string(),
                grid_pos: GridPos { x: 0, y: 0, w: 24, h: 1 },
                collapsed: false,
            }],
        )
    }

    #[test]
    fn test_write_creates_directory_and_files() {
        let dir = env::temp_dir().join("greenhouse-dashboards-writer-test");
        let _ = fs::remove_dir_all(&dir);

        let written = write_dashboards(&dir, &[sample_dashboard()]).unwrap();
        assert_eq!(written, ["greenhouse-indoor.json"]);

        let body = fs::read_to_string(dir.join("greenhouse-indoor.json")).unwrap();
        // Pretty printer uses 2-space indentation
        assert!(body.starts_with("{\n  \"title\": \"Indoor\""));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_rewrite_is_byte_identical() {
        let dir = env::temp_dir().join("greenhouse-dashboards-writer-idempotence");
        let _ = fs::remove_dir_all(&dir);

        write_dashboards(&dir, &[sample_dashboard()]).unwrap();
        let first = fs::read(dir.join("greenhouse-indoor.json")).unwrap();

        write_dashboards(&dir, &[sample_dashboard()]).unwrap();
        let second = fs::read(dir.join("greenhouse-indoor.json")).unwrap();

        assert_eq!(first, second);
        fs::remove_dir_all(&dir).unwrap();
    }
}
