//! Lattice utilities layered on [`FactorKind`] (§2 component 2): the
//! atom-divisibility filter used to deduplicate candidate minimal
//! conjugators in `min_super_summit` (§4.2.2).

use crate::factor::FactorKind;

fn left_divides<F: FactorKind>(a: &F, b: &F) -> bool {
    a.left_meet(b) == *a
}

/// Keeps only the candidates that are not strictly above a smaller one in
/// the same list, deduplicating equal candidates along the way.
pub fn minimal_factors<F: FactorKind>(candidates: &[F]) -> Vec<F> {
    let mut uniq: Vec<F> = Vec::new();
    for c in candidates {
        if !uniq.iter().any(|u| u == c) {
            uniq.push(c.clone());
        }
    }
    uniq.iter()
        .filter(|c| {
            !uniq
                .iter()
                .any(|other| other != *c && left_divides(other, c))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::classical::Classical;

    #[test]
    fn drops_non_minimal_candidates() {
        let atoms = Classical::atoms(&4);
        let composite = atoms[0].product(&atoms[2]);
        let candidates = vec![atoms[0].clone(), composite.clone()];
        let minimal = minimal_factors(&candidates);
        assert_eq!(minimal, vec![atoms[0].clone()]);
    }
}
