//! Sliding Circuits Set (§3.3, §4.4): the periodic points of cyclic sliding
//! restricted to the ultra summit set — mirrors [`crate::summit::uss`] with
//! `cyclic_slide` in place of `cycle`.

use crate::element::Element;
use crate::factor::FactorKind;
use crate::summit::uss::build_uss;
use crate::summit::periodic_orbits;

/// Sends `b` into the sliding circuits set, via its ultra summit
/// representative (§4.4).
pub fn send_to_scs<F: FactorKind>(b: &Element<F>) -> (Element<F>, Element<F>) {
    let (uss_rep, mut conj) = crate::summit::uss::send_to_uss(b);
    let mut cur = uss_rep;
    let mut seen = vec![cur.clone()];
    loop {
        let prefix = cur.preferred_prefix();
        let next = cur.cyclic_slide();
        conj.right_multiply(&Element::from_factor(prefix));
        if seen.iter().any(|e| *e == next) {
            return (next, conj);
        }
        seen.push(next.clone());
        cur = next;
    }
}

/// The sliding circuits set's circuits: the periodic orbits of cyclic
/// sliding over the ultra summit set (§4.4).
pub fn build_scs<F: FactorKind>(b: &Element<F>) -> Vec<Vec<Element<F>>> {
    let orbits = build_uss(b);
    let pool: Vec<Element<F>> = orbits.into_iter().flatten().collect();
    periodic_orbits(&pool, |e| e.cyclic_slide())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::classical::Classical;
    use crate::text::parse_element;

    #[test]
    fn send_to_scs_stays_in_conjugacy_class() {
        let mut pos = 0usize;
        let b = parse_element::<Classical>("s_1 . s_1 . s_2", &mut pos, &3).unwrap();
        let (rep, conj) = send_to_scs(&b);
        let reconstructed = rep.conjugate_by(&conj.invert());
        assert_eq!(reconstructed, b);
    }

    #[test]
    fn scs_is_nonempty() {
        let mut pos = 0usize;
        let b = parse_element::<Classical>("s_1 . s_1 . s_2", &mut pos, &3).unwrap();
        assert!(!build_scs(&b).is_empty());
    }
}
