//! Group elements as a signed Δ power plus a canonical factor sequence
//! (§3.2, §4.1).
//!
//! Every algorithm here (multiply, invert, meet, join, cycling) is
//! implemented once against the LCF representation; public entry points
//! that receive or return an RCF-form element convert at the boundary via
//! [`Element::to_lcf`]/[`Element::to_rcf`] rather than maintaining a second,
//! mirrored set of right-handed algorithms.

use crate::factor::FactorKind;

/// Which canonical form an [`Element`] is currently held in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanonicalForm {
    Lcf,
    Rcf,
}

/// A group element: `Δ^inf · factors[0] · factors[1] · ...` in LCF, or the
/// mirror image (Δ on the right) in RCF.
#[derive(Debug, Clone)]
pub struct Element<F: FactorKind> {
    parameter: F::Parameter,
    inf: i32,
    factors: Vec<F>,
    form: CanonicalForm,
}

impl<F: FactorKind> PartialEq for Element<F> {
    fn eq(&self, other: &Self) -> bool {
        self.form == other.form && self.inf == other.inf && self.factors == other.factors
    }
}
impl<F: FactorKind> Eq for Element<F> {}

impl<F: FactorKind> Element<F> {
    pub fn identity(parameter: F::Parameter) -> Self {
        Element {
            parameter,
            inf: 0,
            factors: Vec::new(),
            form: CanonicalForm::Lcf,
        }
    }

    pub fn from_factor(f: F) -> Self {
        let parameter = f.parameter();
        let mut e = Element::identity(parameter);
        if f.is_delta() {
            e.inf = 1;
        } else if !f.is_identity() {
            e.factors.push(f);
        }
        e
    }

    pub fn parameter(&self) -> &F::Parameter {
        &self.parameter
    }

    pub fn inf(&self) -> i32 {
        self.inf
    }

    pub fn canonical_length(&self) -> usize {
        self.factors.len()
    }

    pub fn sup(&self) -> i32 {
        self.inf + self.factors.len() as i32
    }

    pub fn form(&self) -> CanonicalForm {
        self.form
    }

    pub fn factors(&self) -> &[F] {
        &self.factors
    }

    pub fn is_identity(&self) -> bool {
        self.inf == 0 && self.factors.is_empty()
    }

    // --- normal-form bookkeeping ------------------------------------------

    fn clean_lcf(&mut self) {
        while self.factors.first().map_or(false, |f| f.is_delta()) {
            self.factors.remove(0);
            self.inf += 1;
        }
        // A trailing Δ has to cross every remaining factor to join the
        // Δ^inf prefix, conjugating each one by Δ on the way:
        // f_0···f_{k-1}·Δ = Δ·(Δ⁻¹f_0Δ)···(Δ⁻¹f_{k-1}Δ).
        while self.factors.last().map_or(false, |f| f.is_delta()) {
            self.factors.pop();
            self.inf += 1;
            for f in self.factors.iter_mut() {
                *f = f.delta_conjugate(1);
            }
        }
        self.factors.retain(|f| !f.is_identity());
    }

    fn clean_rcf(&mut self) {
        while self.factors.last().map_or(false, |f| f.is_delta()) {
            self.factors.pop();
            self.inf += 1;
        }
        // Mirror of `clean_lcf`: a leading Δ has to cross every remaining
        // factor to join the Δ^inf suffix.
        while self.factors.first().map_or(false, |f| f.is_delta()) {
            self.factors.remove(0);
            self.inf += 1;
            for f in self.factors.iter_mut() {
                *f = f.delta_conjugate(1);
            }
        }
        self.factors.retain(|f| !f.is_identity());
    }

    fn rebubble_left(factors: &mut [F]) {
        for i in 0..factors.len().saturating_sub(1) {
            let u = factors[i].clone();
            let v = factors[i + 1].clone();
            let t = u.tilde_right().left_meet(&v);
            if !t.is_identity() {
                factors[i] = u.product(&t);
                factors[i + 1] = t.right_complement(&v);
            }
        }
    }

    fn rebubble_right(factors: &mut [F]) {
        for i in (0..factors.len().saturating_sub(1)).rev() {
            let u = factors[i].clone();
            let v = factors[i + 1].clone();
            let s = u.right_meet(&v.tilde_left());
            if !s.is_identity() {
                factors[i] = s.left_complement(&u);
                factors[i + 1] = s.product(&v);
            }
        }
    }

    fn make_left_weighted(factors: &mut Vec<F>) {
        loop {
            let mut changed = false;
            for i in 0..factors.len().saturating_sub(1) {
                let u = factors[i].clone();
                let v = factors[i + 1].clone();
                let t = u.tilde_right().left_meet(&v);
                if !t.is_identity() {
                    factors[i] = u.product(&t);
                    factors[i + 1] = t.right_complement(&v);
                    changed = true;
                }
            }
            if !changed {
                break;
            }
        }
    }

    fn make_right_weighted(factors: &mut Vec<F>) {
        loop {
            let mut changed = false;
            for i in 0..factors.len().saturating_sub(1) {
                let u = factors[i].clone();
                let v = factors[i + 1].clone();
                let s = u.right_meet(&v.tilde_left());
                if !s.is_identity() {
                    factors[i] = s.left_complement(&u);
                    factors[i + 1] = s.product(&v);
                    changed = true;
                }
            }
            if !changed {
                break;
            }
        }
    }

    // --- multiplication (§4.1.1, §4.1.2), LCF only ------------------------

    /// Left-multiplies `self` by a single factor. Assumes `self` is in LCF.
    pub fn left_multiply_factor(&mut self, f: &F) {
        let conjugated = f.delta_conjugate(self.inf);
        if conjugated.is_identity() {
            return;
        }
        self.factors.insert(0, conjugated);
        Self::rebubble_left(&mut self.factors);
        self.clean_lcf();
    }

    /// Right-multiplies `self` by a single factor. Assumes `self` is in LCF.
    pub fn right_multiply_factor(&mut self, f: &F) {
        if f.is_identity() {
            return;
        }
        self.factors.push(f.clone());
        Self::rebubble_right(&mut self.factors);
        self.clean_lcf();
    }

    fn left_multiply_lcf(&mut self, other: &Self) {
        for f in other.factors.iter().rev() {
            self.left_multiply_factor(f);
        }
        self.inf += other.inf;
    }

    fn right_multiply_lcf(&mut self, other: &Self) {
        if other.inf != 0 {
            for f in self.factors.iter_mut() {
                *f = f.delta_conjugate(other.inf);
            }
        }
        self.inf += other.inf;
        for f in &other.factors {
            self.right_multiply_factor(f);
        }
    }

    /// Left-multiplies `self` by `other`, in whatever form `self` is
    /// currently in.
    pub fn left_multiply(&mut self, other: &Self) {
        let was_rcf = self.form == CanonicalForm::Rcf;
        let mut lcf_self = if was_rcf { self.to_lcf() } else { self.clone() };
        let lcf_other = other.to_lcf();
        lcf_self.left_multiply_lcf(&lcf_other);
        *self = if was_rcf { lcf_self.to_rcf() } else { lcf_self };
    }

    /// Right-multiplies `self` by `other`, in whatever form `self` is
    /// currently in.
    pub fn right_multiply(&mut self, other: &Self) {
        let was_rcf = self.form == CanonicalForm::Rcf;
        let mut lcf_self = if was_rcf { self.to_lcf() } else { self.clone() };
        let lcf_other = other.to_lcf();
        lcf_self.right_multiply_lcf(&lcf_other);
        *self = if was_rcf { lcf_self.to_rcf() } else { lcf_self };
    }

    pub fn multiplied_by(&self, other: &Self) -> Self {
        let mut r = self.clone();
        r.right_multiply(other);
        r
    }

    // --- inversion (§4.1.3) ------------------------------------------------

    fn invert_lcf(&self) -> Self {
        let mut result = Element::identity(self.parameter.clone());
        let k = self.factors.len() as i32;
        for idx in (0..self.factors.len()).rev() {
            let w = self.factors[idx].tilde_left().delta_conjugate(idx as i32);
            result.right_multiply_factor(&w);
        }
        result.inf -= self.inf + k;
        result
    }

    /// The group inverse, in the same canonical form as `self`.
    pub fn invert(&self) -> Self {
        match self.form {
            CanonicalForm::Lcf => self.invert_lcf(),
            CanonicalForm::Rcf => self.to_lcf().invert_lcf().to_rcf(),
        }
    }

    // --- LCF <-> RCF (§4.1.4) -----------------------------------------------

    pub fn to_rcf(&self) -> Self {
        if self.form == CanonicalForm::Rcf {
            return self.clone();
        }
        let mut factors: Vec<F> = self
            .factors
            .iter()
            .map(|f| f.delta_conjugate(-self.inf))
            .collect();
        Self::make_right_weighted(&mut factors);
        let mut result = Element {
            parameter: self.parameter.clone(),
            inf: self.inf,
            factors,
            form: CanonicalForm::Rcf,
        };
        result.clean_rcf();
        result
    }

    pub fn to_lcf(&self) -> Self {
        if self.form == CanonicalForm::Lcf {
            return self.clone();
        }
        let mut factors: Vec<F> = self
            .factors
            .iter()
            .map(|f| f.delta_conjugate(self.inf))
            .collect();
        Self::make_left_weighted(&mut factors);
        let mut result = Element {
            parameter: self.parameter.clone(),
            inf: self.inf,
            factors,
            form: CanonicalForm::Lcf,
        };
        result.clean_lcf();
        result
    }

    // --- meet / join (§4.1.5) -----------------------------------------------

    /// `self /\L other`, computed directly by a greedy LCF walk: repeatedly
    /// extract a common leading factor.
    fn left_meet_lcf(&self, other: &Self) -> Self {
        let shift = self.inf.min(other.inf);
        let mut a = self.clone();
        a.inf -= shift;
        let mut b = other.clone();
        b.inf -= shift;
        let mut acc = Element::identity(self.parameter.clone());
        loop {
            let fa = a.first_factor();
            let fb = b.first_factor();
            let f = fa.left_meet(&fb);
            if f.is_identity() {
                break;
            }
            acc.right_multiply_factor(&f);
            let quotient_a = Element::from_factor(f.clone()).invert();
            a = quotient_a.multiplied_by(&a);
            let quotient_b = Element::from_factor(f.clone()).invert();
            b = quotient_b.multiplied_by(&b);
        }
        acc.inf += shift;
        acc
    }

    pub fn left_meet(&self, other: &Self) -> Self {
        self.to_lcf().left_meet_lcf(&other.to_lcf())
    }

    /// `!( (!self) \/L (!other) )` — the right-dual of [`Self::left_meet`].
    pub fn right_join(&self, other: &Self) -> Self {
        self.invert().left_meet(&other.invert()).invert()
    }

    /// `!( (!self) /\L (!other) )` — used to derive `right_meet` below.
    fn left_join_lcf(&self, other: &Self) -> Self {
        // left_join(a,b) = !( right_meet(!a, !b) ), and right_meet is itself
        // defined from left_meet via the same duality, so we bottom out by
        // computing right_meet directly (mirroring left_meet_lcf on RCF).
        self.invert()
            .right_meet_rcf_mirror(&other.invert())
            .invert()
    }

    /// Direct greedy RCF-side walk, mirroring `left_meet_lcf`: repeatedly
    /// extract a common trailing factor.
    fn right_meet_rcf_mirror(&self, other: &Self) -> Self {
        let a = self.to_rcf();
        let b = other.to_rcf();
        let shift = a.inf.min(b.inf);
        let mut a = a;
        a.inf -= shift;
        let mut b = b;
        b.inf -= shift;
        let mut acc = Element {
            parameter: self.parameter.clone(),
            inf: 0,
            factors: Vec::new(),
            form: CanonicalForm::Rcf,
        };
        loop {
            let fa = a.final_factor();
            let fb = b.final_factor();
            let f = fa.right_meet(&fb);
            if f.is_identity() {
                break;
            }
            acc.factors.insert(0, f.clone());
            Self::make_right_weighted(&mut acc.factors);
            acc.clean_rcf();
            a = a.multiplied_by(&Element::from_factor(f.clone()).to_rcf().invert());
            b = b.multiplied_by(&Element::from_factor(f.clone()).to_rcf().invert());
        }
        acc.inf += shift;
        acc
    }

    pub fn right_meet(&self, other: &Self) -> Self {
        self.to_rcf().right_meet_rcf_mirror(&other.to_rcf())
    }

    pub fn left_join(&self, other: &Self) -> Self {
        self.to_lcf().left_join_lcf(&other.to_lcf())
    }

    // --- cycling / decycling / sliding (§4.1.6) -----------------------------

    /// The leftmost non-Δ factor, or identity if canonical length is 0.
    pub fn first_factor(&self) -> F {
        self.factors
            .first()
            .cloned()
            .unwrap_or_else(|| F::identity(&self.parameter))
    }

    pub fn initial_factor(&self) -> F {
        self.first_factor().delta_conjugate(-self.inf)
    }

    pub fn final_factor(&self) -> F {
        self.factors
            .last()
            .cloned()
            .unwrap_or_else(|| F::identity(&self.parameter))
    }

    pub fn preferred_prefix(&self) -> F {
        self.initial_factor()
            .left_meet(&self.final_factor().tilde_right())
    }

    pub fn preferred_suffix(&self) -> F {
        let conjugated_final = self.final_factor().delta_conjugate(self.inf);
        conjugated_final.right_meet(&self.first_factor().tilde_left())
    }

    pub fn cycle(&self) -> Self {
        if self.factors.is_empty() {
            return self.clone();
        }
        let initial = self.initial_factor();
        let mut rest = self.clone();
        rest.factors.remove(0);
        rest.right_multiply_factor(&initial);
        rest
    }

    pub fn decycle(&self) -> Self {
        if self.factors.is_empty() {
            return self.clone();
        }
        let last = self.final_factor();
        let mut rest = self.clone();
        rest.factors.pop();
        rest.left_multiply_factor(&last);
        rest
    }

    /// Conjugates `self` by the element corresponding to factor `f`:
    /// `f^-1 . self . f`.
    pub fn conjugate_by_factor(&self, f: &F) -> Self {
        self.conjugate_by(&Element::from_factor(f.clone()))
    }

    pub fn conjugate_by(&self, c: &Self) -> Self {
        let mut r = c.invert();
        r.right_multiply(self);
        r.right_multiply(c);
        r
    }

    pub fn cyclic_slide(&self) -> Self {
        let p = self.preferred_prefix();
        if p.is_identity() {
            return self.clone();
        }
        self.conjugate_by_factor(&p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::classical::Classical;

    #[test]
    fn identity_round_trips_through_forms() {
        let e = Element::<Classical>::identity(4);
        assert_eq!(e.to_rcf().to_lcf(), e);
    }

    #[test]
    fn from_delta_factor_absorbs_into_inf() {
        let d = Classical::delta(&4);
        let e = Element::from_factor(d);
        assert_eq!(e.inf(), 1);
        assert_eq!(e.canonical_length(), 0);
    }

    #[test]
    fn multiply_then_invert_is_identity() {
        let mut e = Element::<Classical>::identity(4);
        for a in Classical::atoms(&4) {
            e.right_multiply_factor(&a);
        }
        let inv = e.invert();
        let mut prod = inv.clone();
        prod.right_multiply(&e);
        assert!(prod.is_identity());
        let mut prod2 = e.clone();
        prod2.right_multiply(&inv);
        assert!(prod2.is_identity());
    }

    #[test]
    fn lcf_rcf_round_trip_after_multiplication() {
        let mut e = Element::<Classical>::identity(5);
        for a in Classical::atoms(&5) {
            e.right_multiply_factor(&a);
        }
        assert_eq!(e.to_rcf().to_lcf(), e);
    }
}
