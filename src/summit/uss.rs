//! Ultra Summit Set (§3.3, §4.3): the periodic points of cycling restricted
//! to the super summit set — a single cycling orbit closes up after
//! finitely many steps, and USS is the union of all such closed orbits.

use crate::element::Element;
use crate::factor::FactorKind;
use crate::summit::sss::build_sss;
use crate::summit::periodic_orbits;

/// Sends `b` into the ultra summit set: first to a super summit
/// representative, then cycles until a repeat is observed, which proves
/// the repeated element lies on a cycling orbit (§4.3.2).
pub fn send_to_uss<F: FactorKind>(b: &Element<F>) -> (Element<F>, Element<F>) {
    let (sss_rep, mut conj) = crate::summit::sss::send_to_sss(b);
    let mut cur = sss_rep;
    let mut seen = vec![cur.clone()];
    loop {
        let initial = cur.initial_factor();
        let next = cur.cycle();
        conj.right_multiply(&Element::from_factor(initial));
        if seen.iter().any(|e| *e == next) {
            return (next, conj);
        }
        seen.push(next.clone());
        cur = next;
    }
}

/// The ultra summit set's orbits: the union of cycling's periodic orbits
/// over the super summit set (§4.3.5).
pub fn build_uss<F: FactorKind>(b: &Element<F>) -> Vec<Vec<Element<F>>> {
    let sss = build_sss(b);
    periodic_orbits(&sss, |e| e.cycle())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::classical::Classical;
    use crate::text::parse_element;

    #[test]
    fn send_to_uss_stays_inside_sss_class() {
        let mut pos = 0usize;
        let b = parse_element::<Classical>("s_1 . s_1 . s_2", &mut pos, &3).unwrap();
        let (rep, conj) = send_to_uss(&b);
        let reconstructed = rep.conjugate_by(&conj.invert());
        assert_eq!(reconstructed, b);
    }

    #[test]
    fn uss_orbits_are_subsets_of_sss() {
        let mut pos = 0usize;
        let b = parse_element::<Classical>("s_1 . s_1 . s_2", &mut pos, &3).unwrap();
        let sss = build_sss(&b);
        let orbits = build_uss(&b);
        for orbit in &orbits {
            for e in orbit {
                assert!(sss.iter().any(|s| s == e));
            }
        }
    }
}
