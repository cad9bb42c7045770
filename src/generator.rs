use crate::attributes;
use crate::config::GeneratorConfig;
use crate::lattice;
use crate::model::{Configuration, TypeLabels};
use crate::topology;
use anyhow::Result;
use log::debug;
use rand::prelude::*;

/// This generator always works in three dimensions.
pub const DIMENSIONS: u32 = 3;

/// Builds the full in-memory configuration: lattice positions, sampled
/// per-particle attributes, and the bond chain. Validates every precondition
/// before generating anything, so a bad configuration fails fast with no
/// output files touched.
pub fn generate(config: &GeneratorConfig) -> Result<Configuration> {
    config.validate()?;

    // A seeded run reproduces byte-identical output; an unseeded run draws
    // fresh OS entropy every time.
    let mut rng = match config.particles.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let particle_count = config.particle_count();
    let type_labels = TypeLabels::new(config.particles.type_labels.clone());
    let type_count = type_labels.count();

    let positions = lattice::cubic_lattice(config.lattice.grid_side, config.lattice.box_length)?;
    let types = attributes::sample_types(&mut rng, particle_count, type_count)?;
    let velocities = attributes::sample_velocities(&mut rng, particle_count)?;
    let masses = attributes::mass_table(type_count);
    let bonds = topology::linear_chain(config.topology.bond_count as usize);

    debug!(
        "Generated {} positions, {} types, {} bonds (seed: {:?}).",
        positions.len(),
        type_count,
        bonds.len(),
        config.particles.seed
    );

    Ok(Configuration {
        dimensions: DIMENSIONS,
        box_length: config.lattice.box_length,
        positions,
        velocities,
        types,
        type_labels,
        masses,
        diameter: config.particles.diameter,
        molecule_id: config.particles.molecule_id,
        bonds,
    })
}
