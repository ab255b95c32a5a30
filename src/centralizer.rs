//! Centralizer generation (§4.6): generators of `C(b)` are read off the
//! "extra" edges of an ultra summit set's conjugation graph — every edge
//! not used by the breadth-first spanning tree closes a loop back to an
//! already-visited element, and that loop's holonomy centralizes the
//! ultra summit representative. Conjugating each such generator back by
//! the witness that sent `b` there centralizes `b` itself.

use crate::element::Element;
use crate::factor::FactorKind;
use crate::summit::uss::send_to_uss;
use std::collections::VecDeque;

/// Generators of the centralizer of `b`.
pub fn centralizer_generators<F: FactorKind>(b: &Element<F>) -> Vec<Element<F>> {
    let (uss_rep, c) = send_to_uss(b);
    let target_inf = uss_rep.inf();
    let target_len = uss_rep.canonical_length();

    let mut elements = vec![uss_rep.clone()];
    let mut mins: Vec<F> = vec![F::identity(uss_rep.parameter())];
    let mut prev: Vec<usize> = vec![0usize];
    let mut queue = VecDeque::new();
    queue.push_back(0usize);
    let mut local_generators: Vec<Element<F>> = Vec::new();

    let tree_path = |mins: &[F], prev: &[usize], idx: usize| -> Element<F> {
        let mut chain = Vec::new();
        let mut i = idx;
        while i != 0 {
            chain.push(mins[i].clone());
            i = prev[i];
        }
        chain.reverse();
        let mut conj = Element::identity(uss_rep.parameter().clone());
        for f in chain {
            conj.right_multiply(&Element::from_factor(f));
        }
        conj
    };

    while let Some(i) = queue.pop_front() {
        let cur = elements[i].clone();
        for atom in F::atoms(cur.parameter()) {
            let candidate = cur.conjugate_by_factor(&atom);
            if candidate.inf() != target_inf || candidate.canonical_length() != target_len {
                continue;
            }
            if let Some(j) = elements.iter().position(|e| *e == candidate) {
                if prev[j] == i && mins[j] == atom {
                    continue; // the tree edge that discovered j
                }
                let path_i = tree_path(&mins, &prev, i);
                let path_j = tree_path(&mins, &prev, j);
                let mut gen = path_i;
                gen.right_multiply(&Element::from_factor(atom));
                gen.right_multiply(&path_j.invert());
                if !gen.is_identity() {
                    local_generators.push(gen);
                }
            } else {
                elements.push(candidate);
                mins.push(atom);
                prev.push(i);
                queue.push_back(elements.len() - 1);
            }
        }
    }

    let c_inv = c.invert();
    let mut result: Vec<Element<F>> = local_generators
        .into_iter()
        .map(|g| {
            let mut r = c.clone();
            r.right_multiply(&g);
            r.right_multiply(&c_inv);
            r
        })
        .collect();

    let mut dedup: Vec<Element<F>> = Vec::new();
    for g in result.drain(..) {
        if !dedup.iter().any(|d| *d == g) {
            dedup.push(g);
        }
    }
    dedup
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::classical::Classical;
    use crate::text::parse_element;

    #[test]
    fn generators_actually_commute_with_b() {
        let mut pos = 0usize;
        let b = parse_element::<Classical>(
            "s_1 . s_2 . s_1 . s_2 . s_1 . s_2 . s_1 . s_2",
            &mut pos,
            &3,
        )
        .unwrap();
        for g in centralizer_generators(&b) {
            let commuted = b.conjugate_by(&g);
            assert_eq!(commuted, b);
        }
    }

    #[test]
    fn delta_squared_centralizer_contains_every_atom() {
        // scenario S6 (adapted, see DESIGN.md): Delta^2 is central for
        // every strand count, so its centralizer generators should cover
        // every atom of the generating set.
        let mut pos = 0usize;
        let b = parse_element::<Classical>("D ^ 2", &mut pos, &3).unwrap();
        let generators = centralizer_generators(&b);
        for atom in Classical::atoms(&3) {
            let atom_elem = Element::from_factor(atom);
            assert!(
                generators.iter().any(|g| *g == atom_elem),
                "expected atom {:?} among the centralizer generators",
                atom_elem
            );
        }
    }

    #[test]
    fn trivial_centralizer_check_does_not_panic() {
        let mut pos = 0usize;
        let b = parse_element::<Classical>("s_1", &mut pos, &3).unwrap();
        let _ = centralizer_generators(&b);
    }
}
