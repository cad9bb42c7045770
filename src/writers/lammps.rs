use crate::model::Configuration;
use anyhow::Result;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Serializes the configuration as a LAMMPS data file: counts header, type
/// counts, box bounds, then the Atoms / Masses / Velocities / Bonds sections.
/// Every id in this format is 1-based; the +1 offset from the model's 0-based
/// indices is applied here, at serialization time, and nowhere else.
pub fn write<W: Write>(mut w: W, configuration: &Configuration) -> Result<()> {
    let natoms = configuration.particle_count();
    let nbonds = configuration.bond_count();
    let l = configuration.box_length;

    writeln!(w, "LAMMPS Description")?;
    writeln!(w)?;
    writeln!(w, "{} atoms", natoms)?;
    writeln!(w, "{} bonds", nbonds)?;
    // This generator never emits angle, dihedral, or improper topology.
    writeln!(w, "0 angles")?;
    writeln!(w, "0 dihedrals")?;
    writeln!(w, "0 impropers")?;
    writeln!(w)?;

    writeln!(w, "{} atom types", configuration.type_count())?;
    writeln!(w, "1 bond types")?;
    writeln!(w)?;

    writeln!(w, "{:.2} {:.2} xlo xhi", 0.0, l)?;
    writeln!(w, "{:.2} {:.2} ylo yhi", 0.0, l)?;
    writeln!(w, "{:.2} {:.2} zlo zhi", 0.0, l)?;
    writeln!(w)?;

    writeln!(w, "Atoms")?;
    writeln!(w)?;
    for (i, pos) in configuration.positions.iter().enumerate() {
        writeln!(
            w,
            "{} {} {} {:.2} {:.2} {:.2}",
            i + 1,
            configuration.molecule_id,
            configuration.types[i] + 1,
            pos[0],
            pos[1],
            pos[2]
        )?;
    }
    writeln!(w)?;

    writeln!(w, "Masses")?;
    writeln!(w)?;
    for t in 0..configuration.type_count() {
        writeln!(w, "{} {:.2}", t + 1, configuration.mass_of_type(t)?)?;
    }
    writeln!(w)?;

    writeln!(w, "Velocities")?;
    writeln!(w)?;
    for (i, vel) in configuration.velocities.iter().enumerate() {
        writeln!(w, "{} {:.2} {:.2} {:.2}", i + 1, vel[0], vel[1], vel[2])?;
    }
    writeln!(w)?;

    writeln!(w, "Bonds")?;
    writeln!(w)?;
    for (b, &(i, j)) in configuration.bonds.iter().enumerate() {
        // bond id, bond type (always 1), then 1-based particle ids.
        writeln!(w, "{} 1 {} {}", b + 1, i + 1, j + 1)?;
    }
    writeln!(w)?;

    Ok(())
}

/// Creates (or overwrites) `path` and writes the data file into it. Scoped
/// file handle, no retry, no partial-write recovery.
pub fn write_file<P: AsRef<Path>>(path: P, configuration: &Configuration) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to create LAMMPS output file '{}': {}",
            path.display(),
            e
        )
    })?;
    let mut writer = BufWriter::new(file);
    write(&mut writer, configuration)?;
    writer.flush()?;
    info!("Wrote LAMMPS configuration to {}", path.display());
    Ok(())
}
