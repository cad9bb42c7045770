use crate::model::Configuration;
use anyhow::Result;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Serializes the configuration as a HOOMD XML document: a header with
/// particle count, dimensionality, and box extents, then one tagged block per
/// attribute category. Types are rendered as symbolic labels here; bond
/// endpoints stay 0-based, matching the engine that consumes this format
/// (the LAMMPS writer shifts the same bonds to 1-based ids).
pub fn write<W: Write>(mut w: W, configuration: &Configuration) -> Result<()> {
    let natoms = configuration.particle_count();
    let l = configuration.box_length;

    writeln!(w, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(w, r#"<hoomd_xml version="1.4">"#)?;
    writeln!(
        w,
        r#"<configuration time_step="0" dimensions="{}" natoms="{}">"#,
        configuration.dimensions, natoms
    )?;
    writeln!(w, r#"<box lx="{}" ly="{}" lz="{}"/>"#, l, l, l)?;

    writeln!(w, r#"<position num="{}">"#, natoms)?;
    for pos in &configuration.positions {
        writeln!(w, "{:.2} {:.2} {:.2}", pos[0], pos[1], pos[2])?;
    }
    writeln!(w, "</position>")?;

    writeln!(w, r#"<velocity num="{}">"#, natoms)?;
    for vel in &configuration.velocities {
        writeln!(w, "{:.2} {:.2} {:.2}", vel[0], vel[1], vel[2])?;
    }
    writeln!(w, "</velocity>")?;

    // Mass lives in the per-type table but this format lists it per particle.
    writeln!(w, r#"<mass num="{}">"#, natoms)?;
    for &t in &configuration.types {
        writeln!(w, "{:.2}", configuration.mass_of_type(t)?)?;
    }
    writeln!(w, "</mass>")?;

    writeln!(w, r#"<diameter num="{}">"#, natoms)?;
    for _ in 0..natoms {
        writeln!(w, "{:.2}", configuration.diameter)?;
    }
    writeln!(w, "</diameter>")?;

    writeln!(w, r#"<type num="{}">"#, natoms)?;
    for &t in &configuration.types {
        writeln!(w, "{}", configuration.type_labels.label(t)?)?;
    }
    writeln!(w, "</type>")?;

    writeln!(w, r#"<bonds num="{}">"#, configuration.bond_count())?;
    for &(i, j) in &configuration.bonds {
        // Single bond type, labelled "bond1".
        writeln!(w, "bond1 {} {}", i, j)?;
    }
    writeln!(w, "</bonds>")?;

    writeln!(w, "</configuration>")?;
    writeln!(w, "</hoomd_xml>")?;

    Ok(())
}

/// Creates (or overwrites) `path` and writes the XML document into it. The
/// file handle is scoped to this call; a mid-write failure leaves a truncated
/// file behind, with no retry.
pub fn write_file<P: AsRef<Path>>(path: P, configuration: &Configuration) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| {
        anyhow::anyhow!("Failed to create XML output file '{}': {}", path.display(), e)
    })?;
    let mut writer = BufWriter::new(file);
    write(&mut writer, configuration)?;
    writer.flush()?;
    info!("Wrote XML configuration to {}", path.display());
    Ok(())
}
