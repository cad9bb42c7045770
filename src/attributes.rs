use anyhow::Result;
use rand::distr::Uniform;
use rand::prelude::*;

/// Velocity components are drawn uniformly from [-VELOCITY_LIMIT, VELOCITY_LIMIT).
pub const VELOCITY_LIMIT: f64 = 0.25;

/// Draws `count` type indices uniformly from `[0, type_count)`, then forces
/// exemplars so every type is represented at the lowest indices.
pub fn sample_types(rng: &mut StdRng, count: usize, type_count: usize) -> Result<Vec<usize>> {
    if type_count == 0 || type_count > count {
        anyhow::bail!(
            "type_count ({}) must be between 1 and the particle count ({}).",
            type_count,
            count
        );
    }
    let mut types: Vec<usize> = (0..count).map(|_| rng.random_range(0..type_count)).collect();
    force_exemplars(&mut types, type_count);
    Ok(types)
}

/// Overwrites `types[t] = t` for every `t < type_count`. Downstream consumers
/// map type index to label positionally, so the lowest-indexed particles must
/// cover every type in order.
pub fn force_exemplars(types: &mut [usize], type_count: usize) {
    for t in 0..type_count {
        types[t] = t;
    }
}

/// Samples `count` velocity vectors with independent uniform components.
/// No thermostat and no net-momentum cancellation.
pub fn sample_velocities(rng: &mut StdRng, count: usize) -> Result<Vec<[f64; 3]>> {
    let component = Uniform::new(-VELOCITY_LIMIT, VELOCITY_LIMIT)?;
    Ok((0..count)
        .map(|_| {
            [
                rng.sample(component),
                rng.sample(component),
                rng.sample(component),
            ]
        })
        .collect())
}

/// Per-type mass table, all 1.0 in this generator. Kept as a table rather
/// than a constant because both output formats externalize mass per type.
pub fn mass_table(type_count: usize) -> Vec<f64> {
    vec![1.0; type_count]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(1234)
    }

    #[test]
    fn types_cover_every_index_with_exemplars_first() {
        let types = sample_types(&mut rng(), 125, 2).unwrap();
        assert_eq!(types.len(), 125);
        assert_eq!(types[0], 0);
        assert_eq!(types[1], 1);
        assert!(types.iter().all(|&t| t < 2));
    }

    #[test]
    fn exemplar_forcing_overwrites_prefix_only() {
        let mut types = vec![2, 2, 2, 2, 2];
        force_exemplars(&mut types, 3);
        assert_eq!(types, vec![0, 1, 2, 2, 2]);
    }

    #[test]
    fn rejects_more_types_than_particles() {
        assert!(sample_types(&mut rng(), 1, 2).is_err());
        assert!(sample_types(&mut rng(), 10, 0).is_err());
    }

    #[test]
    fn velocities_stay_in_range() {
        let velocities = sample_velocities(&mut rng(), 500).unwrap();
        assert_eq!(velocities.len(), 500);
        for vel in &velocities {
            for &c in vel {
                assert!((-VELOCITY_LIMIT..VELOCITY_LIMIT).contains(&c));
            }
        }
    }

    #[test]
    fn seeded_sampling_is_reproducible() {
        let a = sample_velocities(&mut rng(), 50).unwrap();
        let b = sample_velocities(&mut rng(), 50).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn mass_table_is_unit_per_type() {
        assert_eq!(mass_table(3), vec![1.0, 1.0, 1.0]);
    }
}
