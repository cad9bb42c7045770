use anyhow::Result;
use log::{debug, info, warn};
use std::path::Path;

mod attributes;
mod config;
mod generator;
mod lattice;
mod model;
// Standalone interactive-prompt utility; not consumed by the generation
// pipeline (see its module docs).
#[allow(dead_code)]
mod prompt;
mod topology;
mod writers;

use config::GeneratorConfig;

fn main() -> Result<()> {
    env_logger::init();

    info!("Starting MD initial-condition generator...");

    // --- Load Configuration ---
    // All generation parameters come from config.toml; without it, the
    // built-in defaults reproduce the reference FENE test case.
    let config_path = Path::new("config.toml");
    let config = if config_path.exists() {
        GeneratorConfig::load(config_path)?
    } else {
        warn!("No config.toml found; using built-in defaults.");
        GeneratorConfig::default()
    };
    debug!("Generator configuration: {:#?}", config);

    // --- Build the Configuration Model ---
    let configuration = generator::generate(&config)?;
    info!(
        "Generated {} particles ({} types, {} bonds) in a {} box.",
        configuration.particle_count(),
        configuration.type_count(),
        configuration.bond_count(),
        configuration.box_length
    );

    // --- Write Both Formats ---
    // The writers are independent readers of the same model; if the second
    // one fails, the first one's completed file stays in place.
    writers::hoomd_xml::write_file(&config.output.xml_filename, &configuration)?;
    writers::lammps::write_file(&config.output.lammps_filename, &configuration)?;

    info!("Generation complete.");
    Ok(())
}
