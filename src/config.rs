use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

// Lattice geometry: grid_side^3 particles in a cubic box with one corner at
// the origin.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LatticeConfig {
    pub grid_side: u32,
    pub box_length: f64,
}

// Per-particle attribute settings. `type_labels` doubles as the type table:
// its length is the type count and its order fixes the index -> label map.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ParticleConfig {
    pub type_labels: Vec<String>,
    pub diameter: f64,
    #[serde(default = "default_molecule_id")]
    pub molecule_id: u32,
    /// Optional RNG seed. `None` draws fresh entropy each run; setting a seed
    /// makes reruns byte-identical.
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct TopologyConfig {
    pub bond_count: u32,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct OutputConfig {
    pub xml_filename: String,
    pub lammps_filename: String,
}

// Main generator configuration, loaded from config.toml.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct GeneratorConfig {
    pub lattice: LatticeConfig,
    pub particles: ParticleConfig,
    pub topology: TopologyConfig,
    pub output: OutputConfig,
}

fn default_molecule_id() -> u32 {
    1
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            lattice: LatticeConfig {
                grid_side: 5,
                box_length: 10.0,
            },
            particles: ParticleConfig {
                type_labels: vec!["A".to_string(), "B".to_string()],
                diameter: 1.0,
                molecule_id: default_molecule_id(),
                seed: None,
            },
            topology: TopologyConfig { bond_count: 3 },
            output: OutputConfig {
                xml_filename: "fene.xml".to_string(),
                lammps_filename: "fene.lammps".to_string(),
            },
        }
    }
}

impl GeneratorConfig {
    /// Loads the generator configuration from a TOML file and validates it.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();

        let config_str = std::fs::read_to_string(path_ref).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path_ref.display(), e)
        })?;
        let config: GeneratorConfig = toml::from_str(&config_str).map_err(|e| {
            anyhow::anyhow!("Failed to parse TOML from '{}': {}", path_ref.display(), e)
        })?;

        config.validate()?;
        Ok(config)
    }

    /// The total number of particles the lattice will hold.
    pub fn particle_count(&self) -> usize {
        (self.lattice.grid_side as usize).pow(3)
    }

    pub fn type_count(&self) -> usize {
        self.particles.type_labels.len()
    }

    /// Checks every generation precondition. Must pass before any output file
    /// is opened, so a bad configuration never leaves partial output behind.
    pub fn validate(&self) -> Result<()> {
        if self.lattice.grid_side < 1 {
            anyhow::bail!("grid_side must be at least 1.");
        }
        if self.lattice.box_length <= 0.0 {
            anyhow::bail!("box_length must be positive.");
        }
        if self.particles.diameter <= 0.0 {
            anyhow::bail!("diameter must be positive.");
        }
        if self.particles.type_labels.is_empty() {
            anyhow::bail!("type_labels must name at least one particle type.");
        }
        let particle_count = self.particle_count();
        if self.type_count() > particle_count {
            anyhow::bail!(
                "type_labels lists {} types but the lattice only holds {} particles; \
                 every type needs an exemplar particle.",
                self.type_count(),
                particle_count
            );
        }
        // The chain bond i connects particles i and i+1, so the last bond
        // references particle bond_count.
        if self.topology.bond_count as usize + 1 > particle_count {
            anyhow::bail!(
                "bond_count ({}) requires {} particles but the lattice only holds {}.",
                self.topology.bond_count,
                self.topology.bond_count + 1,
                particle_count
            );
        }
        Ok(())
    }
}
