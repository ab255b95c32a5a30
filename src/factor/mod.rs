//! The factor kind contract (§3.1).
//!
//! A *factor kind* is a type implementing [`FactorKind`]: the canonical
//! factors of one Garside group, equipped with a bounded lattice (min
//! `identity`, max `delta`) and the handful of operations the rest of the
//! engine needs to stay generic over it. Concrete kinds live under
//! `crate::kinds`.

use crate::error::GarsideResult;
use rand::RngCore;
use std::fmt;
use std::hash::Hash;

/// The operations any Garside group's canonical factors must support.
///
/// Implementors are expected to be small, cheaply `Clone`-able value types
/// (a permutation, a bit-vector, ...). `left_meet`/`right_meet`/`product`
/// assume their preconditions hold; violating them is a logic error in the
/// caller, not a recoverable `GarsideError`.
pub trait FactorKind: Sized + Clone + Eq + Hash + fmt::Debug {
    /// Discriminates between the different groups in the family (e.g.
    /// number of strands).
    type Parameter: Clone + Eq + Hash + fmt::Debug;

    /// The parameter shared by `self`'s whole lattice.
    fn parameter(&self) -> Self::Parameter;

    /// Parses a `Parameter` out of a whole string.
    fn parameter_of_string(s: &str) -> GarsideResult<Self::Parameter>;

    /// The lattice minimum (empty factor).
    fn identity(p: &Self::Parameter) -> Self;

    /// The lattice maximum, the Garside element's single factor.
    fn delta(p: &Self::Parameter) -> Self;

    /// Length of `delta(p)` as a product of atoms.
    fn lattice_height(p: &Self::Parameter) -> u32;

    /// `left_meet(a, b)`: the largest factor dividing both `self` and
    /// `other` on the left.
    fn left_meet(&self, other: &Self) -> Self;

    /// `right_meet(a, b)`: the largest factor dividing both `self` and
    /// `other` on the right.
    fn right_meet(&self, other: &Self) -> Self;

    /// `self * other`, assuming `self * other <= delta`.
    fn product(&self, other: &Self) -> Self;

    /// The `c` with `c * self == other`, assuming `self` right-divides
    /// `other`.
    fn left_complement(&self, other: &Self) -> Self;

    /// The `c` with `self * c == other`, assuming `self` left-divides
    /// `other`.
    fn right_complement(&self, other: &Self) -> Self;

    /// Conjugate `self` by `delta^k`.
    fn delta_conjugate(&self, k: i32) -> Self;

    /// The (ordered) atoms of the lattice with parameter `p`.
    fn atoms(p: &Self::Parameter) -> Vec<Self>;

    /// Draws a uniformly random factor, or fails with `NonRandomizable` if
    /// this kind has no such sampler.
    fn randomize(p: &Self::Parameter, rng: &mut dyn RngCore) -> GarsideResult<Self>;

    /// Extracts one factor from `s` starting at `*pos`, advancing `*pos`
    /// past it.
    fn parse(s: &str, pos: &mut usize, p: &Self::Parameter) -> GarsideResult<Self>;

    /// Prints the canonical textual representation of `self`.
    fn print(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// `self == identity(self.parameter())`.
    fn is_identity(&self) -> bool {
        *self == Self::identity(&self.parameter())
    }

    /// `self == delta(self.parameter())`.
    fn is_delta(&self) -> bool {
        *self == Self::delta(&self.parameter())
    }

    /// `~self`: the right complement of `self` w.r.t. Δ, i.e. the `c` with
    /// `self * c == delta`.
    fn tilde_right(&self) -> Self {
        let delta = Self::delta(&self.parameter());
        self.right_complement(&delta)
    }

    /// The symmetric left complement of `self` w.r.t. Δ: the `c` with
    /// `c * self == delta`.
    fn tilde_left(&self) -> Self {
        let delta = Self::delta(&self.parameter());
        self.left_complement(&delta)
    }

    /// `left_join(a, b) = ~(~a /\R ~b)`.
    fn left_join(&self, other: &Self) -> Self {
        let na = self.tilde_right();
        let nb = other.tilde_right();
        na.right_meet(&nb).tilde_right()
    }

    /// The right-dual of [`FactorKind::left_join`], built from the
    /// symmetric left complement.
    fn right_join(&self, other: &Self) -> Self {
        let ha = self.tilde_left();
        let hb = other.tilde_left();
        ha.left_meet(&hb).tilde_left()
    }
}

/// The smallest simple factor `s` such that `w * s` is left-divisible by
/// `left_join(w, a)` (§4.2.2).
///
/// Grounded on the same "peel the first factor off a quotient" idiom used
/// by `transport` (§4.3.3): compute the join, divide it out, and take
/// whatever is left closest to `w`.
pub fn remainder<F: FactorKind>(w: &F, a: &F) -> F {
    let j = w.left_join(a);
    w.right_complement(&j)
}
