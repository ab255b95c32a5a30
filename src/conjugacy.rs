//! Conjugacy testing (§4.5): two elements are conjugate iff their sliding
//! circuits sets coincide. Decided by sending both to a sliding circuits
//! representative, then walking a breadth-first exploration of the first
//! representative's class looking for the second.

use crate::element::Element;
use crate::factor::FactorKind;
use crate::summit::{build_class_bfs, scs::send_to_scs};

/// Tests whether `b1` and `b2` are conjugate, returning a witness `c` with
/// `conjugate_by(c)(b1) == b2` when they are.
pub fn are_conjugate<F: FactorKind>(b1: &Element<F>, b2: &Element<F>) -> Option<Element<F>> {
    let (scs1, c1) = send_to_scs(b1);
    let (scs2, c2) = send_to_scs(b2);
    if scs1.inf() != scs2.inf() || scs1.canonical_length() != scs2.canonical_length() {
        return None;
    }
    let bfs = build_class_bfs(&scs1);
    let idx = bfs.position(&scs2)?;
    let path = bfs.tree_path(idx);
    // c1 sends b1 to scs1, path sends scs1 to scs2, c2^{-1} sends scs2 back
    // to b2: compose left to right so the witness conjugates b1 into b2.
    let mut witness = c1;
    witness.right_multiply(&path);
    witness.right_multiply(&c2.invert());
    Some(witness)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::classical::Classical;
    use crate::text::parse_element;

    #[test]
    fn conjugate_elements_are_detected() {
        let mut pos = 0usize;
        let b = parse_element::<Classical>("s_1 . s_1 . s_2", &mut pos, &3).unwrap();
        let conjugator_factor = Classical::atoms(&3)[1].clone();
        let conjugated = b.conjugate_by_factor(&conjugator_factor);
        let witness = are_conjugate(&b, &conjugated).expect("should be conjugate");
        assert_eq!(b.conjugate_by(&witness), conjugated);
    }

    #[test]
    fn s1_s2_is_conjugate_to_s2_s1() {
        // scenario S3: s1 s2 and s2 s1 for n = 3, conjugate by a cyclic
        // rotation of the word.
        let mut pos1 = 0usize;
        let a = parse_element::<Classical>("s_1 . s_2", &mut pos1, &3).unwrap();
        let mut pos2 = 0usize;
        let b = parse_element::<Classical>("s_2 . s_1", &mut pos2, &3).unwrap();
        let witness = are_conjugate(&a, &b).expect("s1 s2 and s2 s1 should be conjugate");
        assert_eq!(a.conjugate_by(&witness), b);
    }

    #[test]
    fn self_conjugacy_is_detected() {
        let mut pos = 0usize;
        let b = parse_element::<Classical>("s_1 . s_2", &mut pos, &3).unwrap();
        assert!(are_conjugate(&b, &b).is_some());
    }

    #[test]
    fn different_canonical_length_is_not_conjugate() {
        let mut pos1 = 0usize;
        let b1 = parse_element::<Classical>("s_1", &mut pos1, &3).unwrap();
        let mut pos2 = 0usize;
        let b2 = parse_element::<Classical>("s_1 . s_2 . s_1 . s_2", &mut pos2, &3).unwrap();
        assert!(are_conjugate(&b1, &b2).is_none());
    }
}
