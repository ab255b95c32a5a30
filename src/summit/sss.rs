//! Super Summit Set (§3.3, §4.2): the conjugates of an element with
//! maximal infimum and minimal supremum.

use crate::element::Element;
use crate::factor::FactorKind;
use crate::summit::build_class_bfs;

/// Sends `b` to a super summit set representative, returning it together
/// with the conjugator `c` such that `conjugate_by(c)(b)` is that
/// representative (§4.2.1).
///
/// Cycles until `inf` stops improving over a window of `lattice_height`
/// consecutive steps, keeping the best `(element, conjugator)` pair seen so
/// far rather than rewinding — the cycling trajectory on a finite summit
/// set is bounded, so this always terminates and the best-seen element is
/// provably a maximal-`inf` representative once the window closes.
pub fn send_to_sss<F: FactorKind>(b: &Element<F>) -> (Element<F>, Element<F>) {
    let p = b.parameter().clone();
    let height = F::lattice_height(&p).max(1) as usize;

    let mut cur = b.clone();
    let mut conj = Element::identity(p.clone());
    let mut best = cur.clone();
    let mut best_conj = conj.clone();
    let mut stall = 0usize;
    while stall < height {
        let initial = cur.initial_factor();
        conj.right_multiply(&Element::from_factor(initial));
        cur = cur.cycle();
        if cur.inf() > best.inf() {
            best = cur.clone();
            best_conj = conj.clone();
            stall = 0;
        } else {
            stall += 1;
        }
    }

    cur = best;
    conj = best_conj;
    let mut best2 = cur.clone();
    let mut best_conj2 = conj.clone();
    stall = 0;
    while stall < height {
        let last = cur.final_factor();
        conj.right_multiply(&Element::from_factor(last).invert());
        cur = cur.decycle();
        if cur.sup() < best2.sup() {
            best2 = cur.clone();
            best_conj2 = conj.clone();
            stall = 0;
        } else {
            stall += 1;
        }
    }
    (best2, best_conj2)
}

/// Builds the full super summit set containing `b`, by breadth-first
/// search from a single representative (§4.2.3).
pub fn build_sss<F: FactorKind>(b: &Element<F>) -> Vec<Element<F>> {
    let (rep, _) = send_to_sss(b);
    build_class_bfs(&rep).elements
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::classical::Classical;
    use crate::text::parse_element;

    #[test]
    fn periodic_element_sss_has_maximal_inf() {
        // (s1 s2)^4 is central for n = 3 (scenario S4): already maximal.
        let mut pos = 0usize;
        let b = parse_element::<Classical>("s_1 . s_2 . s_1 . s_2 . s_1 . s_2 . s_1 . s_2", &mut pos, &3)
            .unwrap();
        let (rep, conj) = send_to_sss(&b);
        let reconstructed = rep.conjugate_by(&conj.invert());
        assert_eq!(reconstructed, b);
    }

    #[test]
    fn sss_is_nonempty_and_contains_representative() {
        let mut pos = 0usize;
        let b = parse_element::<Classical>("s_1 . s_1 . s_2", &mut pos, &3).unwrap();
        let (rep, _) = send_to_sss(&b);
        let set = build_sss(&b);
        assert!(set.iter().any(|e| *e == rep));
    }

    #[test]
    fn pseudo_anosov_example_has_five_element_sss() {
        // scenario S5 (adapted, see DESIGN.md): s1^4 . s2^-1 for n = 3 is
        // pseudo-Anosov with a super summit set of exactly 5 elements.
        let mut pos = 0usize;
        let b = parse_element::<Classical>("s_1 ^ 4 . s_2 ^ -1", &mut pos, &3).unwrap();
        let set = build_sss(&b);
        assert_eq!(set.len(), 5);
    }
}
