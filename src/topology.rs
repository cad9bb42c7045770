/// Builds an open linear chain over the first `bond_count + 1` particles:
/// bond `i` connects particle `i` to particle `i + 1`. All bonds share the
/// single bond type. The caller guarantees the chain fits the particle count
/// (validated in `GeneratorConfig::validate`).
pub fn linear_chain(bond_count: usize) -> Vec<(usize, usize)> {
    (0..bond_count).map(|i| (i, i + 1)).collect()
}
