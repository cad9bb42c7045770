use anyhow::Result;

/// Places `grid_side^3` particles on a simple cubic lattice with spacing
/// `box_length / grid_side`, one box corner at the origin. Nested row-major
/// order: the x index varies slowest, the z index fastest. Deterministic for
/// identical inputs.
pub fn cubic_lattice(grid_side: u32, box_length: f64) -> Result<Vec<[f64; 3]>> {
    if grid_side < 1 {
        anyhow::bail!("grid_side must be at least 1.");
    }
    if box_length <= 0.0 {
        anyhow::bail!("box_length must be positive.");
    }

    let n = grid_side as usize;
    let spacing = box_length / grid_side as f64;
    let mut positions = Vec::with_capacity(n * n * n);
    for i in 0..n {
        for j in 0..n {
            for k in 0..n {
                positions.push([
                    i as f64 * spacing,
                    j as f64 * spacing,
                    k as f64 * spacing,
                ]);
            }
        }
    }
    Ok(positions)
}
