// Main entry point - Registry in, provisioning documents out
mod application;
mod domain;
mod infrastructure;

use std::path::Path;
use std::process;

use crate::application::builder::build_dashboard;
use crate::application::grouping::group_by_location;
use crate::infrastructure::config::{REGISTRY_PATH, load_registry};
use crate::infrastructure::writer::{DASHBOARDS_DIR, write_dashboards};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // A missing or empty registry is the one user-facing failure; stop
    // before any output is produced.
    let registry = match load_registry(REGISTRY_PATH) {
        Ok(registry) => registry,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    let locations = group_by_location(registry.devices);
    tracing::debug!("grouped registry into {} location(s)", locations.len());

    let dashboards: Vec<_> = locations
        .iter()
        .map(|(location, devices)| build_dashboard(location, devices))
        .collect();

    let written = write_dashboards(Path::new(DASHBOARDS_DIR), &dashboards)?;

    println!(
        "\nGenerated {} dashboard(s): {}",
        written.len(),
        written.join(", ")
    );

    Ok(())
}
