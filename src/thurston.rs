//! Thurston classification of classical braids (§4.7): periodic, reducible,
//! or pseudo-Anosov.
//!
//! Periodicity and reducibility are re-derived here rather than ported from
//! any specific tableau implementation (§9):
//!
//! - **Periodic**: some bounded power of `b` equals a power of Δ.
//! - **Reducible**: a super summit representative's canonical factors,
//!   together with Δ itself when its power is odd, never move some strand
//!   at all — that strand traces an invariant curve. This catches
//!   support-disconnected braids; it does not attempt the general
//!   invariant-multicurve search, so some reducible braids whose reducing
//!   curve is not a single strand will be reported pseudo-Anosov instead.
//! - Anything else is pseudo-Anosov.

use crate::element::Element;
use crate::kinds::classical::Classical;
use crate::summit::sss::send_to_sss;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThurstonType {
    Periodic,
    Reducible,
    PseudoAnosov,
}

pub fn classify(b: &Element<Classical>) -> ThurstonType {
    if is_periodic(b) {
        ThurstonType::Periodic
    } else if is_reducible(b) {
        ThurstonType::Reducible
    } else {
        ThurstonType::PseudoAnosov
    }
}

fn is_periodic(b: &Element<Classical>) -> bool {
    let n = *b.parameter();
    if n == 0 {
        return true;
    }
    let bound = 2 * n * n;
    let mut power = Element::identity(n);
    for _ in 1..=bound {
        power.right_multiply(b);
        if power.canonical_length() == 0 {
            return true;
        }
    }
    false
}

fn is_reducible(b: &Element<Classical>) -> bool {
    let n = *b.parameter();
    if n <= 2 {
        return false;
    }
    let (rep, _) = send_to_sss(b);
    let mut support: HashSet<usize> = HashSet::new();
    if rep.inf().rem_euclid(2) != 0 {
        support.extend(0..n);
    }
    for f in rep.factors() {
        support.extend(f.support());
    }
    !support.is_empty() && support.len() < n
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::parse_element;

    #[test]
    fn half_twist_squared_is_periodic() {
        // (s1 s2 s1)^2 for n = 3: a full twist, a power of delta.
        let mut pos = 0usize;
        let b = parse_element::<Classical>("s_1 . s_2 . s_1 . s_1 . s_2 . s_1", &mut pos, &3).unwrap();
        assert_eq!(classify(&b), ThurstonType::Periodic);
    }

    #[test]
    fn eight_fold_half_twist_is_periodic() {
        // (s1 s2)^4 for n = 3 (scenario S4).
        let mut pos = 0usize;
        let b = parse_element::<Classical>(
            "s_1 . s_2 . s_1 . s_2 . s_1 . s_2 . s_1 . s_2",
            &mut pos,
            &3,
        )
        .unwrap();
        assert_eq!(classify(&b), ThurstonType::Periodic);
    }

    #[test]
    fn three_fold_s1_s2_is_periodic() {
        // scenario S2 (adapted, see DESIGN.md): (s1 s2)^3 for n = 3 is the
        // Coxeter-element identity delta^3 = Delta^2, a pure power of Delta.
        let mut pos = 0usize;
        let b = parse_element::<Classical>("s_1 . s_2 . s_1 . s_2 . s_1 . s_2", &mut pos, &3).unwrap();
        assert_eq!(classify(&b), ThurstonType::Periodic);
        assert_eq!(b.inf(), 2);
        assert_eq!(b.canonical_length(), 0);
    }

    #[test]
    fn s1_to_the_fourth_s2_inverse_is_pseudo_anosov() {
        // scenario S5 (adapted, see DESIGN.md): s1^2 s2 for n = 3 squares to
        // Delta^2, so it is periodic rather than pseudo-Anosov. s1^4 s2^-1
        // is a genuine pseudo-Anosov example at n = 3.
        let mut pos = 0usize;
        let b = parse_element::<Classical>("s_1 ^ 4 . s_2 ^ -1", &mut pos, &3).unwrap();
        assert_eq!(classify(&b), ThurstonType::PseudoAnosov);
    }

    #[test]
    fn disjoint_generator_is_reducible() {
        // for n = 5, s_1 never touches strand 4 — an invariant curve.
        let mut pos = 0usize;
        let b = parse_element::<Classical>("s_1", &mut pos, &5).unwrap();
        assert_eq!(classify(&b), ThurstonType::Reducible);
    }
}
