use anyhow::Result;

/// Finite index -> label table for particle types. Index 0 is the first
/// configured label ("A" by default), index 1 the second, and so on.
#[derive(Debug, Clone)]
pub struct TypeLabels {
    labels: Vec<String>,
}

impl TypeLabels {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.labels.len()
    }

    /// Looks up the symbolic label for a type index. Indices outside
    /// `[0, count)` are an error, not a panic.
    pub fn label(&self, type_index: usize) -> Result<&str> {
        self.labels
            .get(type_index)
            .map(String::as_str)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "type index {} has no label (only {} types are defined)",
                    type_index,
                    self.labels.len()
                )
            })
    }
}

/// The fully-built particle configuration. Assembled once by the generator
/// and immutable afterwards; each format writer only reads it.
#[derive(Debug, Clone)]
pub struct Configuration {
    pub dimensions: u32,
    /// Side of the cubic box; one corner sits at the origin.
    pub box_length: f64,
    pub positions: Vec<[f64; 3]>,
    pub velocities: Vec<[f64; 3]>,
    /// Per-particle type index into `type_labels` / `masses`.
    pub types: Vec<usize>,
    pub type_labels: TypeLabels,
    /// Per-type mass table.
    pub masses: Vec<f64>,
    /// Uniform particle diameter, not type-dependent.
    pub diameter: f64,
    /// Single molecule label applied to every particle.
    pub molecule_id: u32,
    /// Linear bond chain as 0-based particle index pairs.
    pub bonds: Vec<(usize, usize)>,
}

impl Configuration {
    #[inline]
    pub fn particle_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    #[inline]
    pub fn type_count(&self) -> usize {
        self.type_labels.count()
    }

    /// Mass of the particle's type. Fails for a type index missing from
    /// the mass table.
    pub fn mass_of_type(&self, type_index: usize) -> Result<f64> {
        self.masses.get(type_index).copied().ok_or_else(|| {
            anyhow::anyhow!(
                "type index {} has no mass entry (only {} types are defined)",
                type_index,
                self.masses.len()
            )
        })
    }
}
