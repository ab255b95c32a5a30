//! Classical (Artin) braid group canonical factors, represented as
//! permutations of `{0, ..., n-1}` ordered by the left weak order (§6.1).
//!
//! A simple factor corresponds to a permutation; `Δ` is the order-reversing
//! permutation. `left_meet`/`right_meet` are reconstructed from the
//! intersection of inversion sets rather than ported from any pointer-based
//! divide-and-conquer routine, since the weak-order lattice guarantees that
//! intersection to itself be realizable by a permutation.

use crate::error::{GarsideError, GarsideResult};
use crate::factor::FactorKind;
use rand::Rng;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Classical {
    n: usize,
    image: Vec<usize>,
}

impl Classical {
    fn inverse_perm(&self) -> Vec<usize> {
        let mut inv = vec![0usize; self.n];
        for (i, &v) in self.image.iter().enumerate() {
            inv[v] = i;
        }
        inv
    }

    fn inversions(&self) -> HashSet<(usize, usize)> {
        let mut set = HashSet::new();
        for i in 0..self.n {
            for j in (i + 1)..self.n {
                if self.image[i] > self.image[j] {
                    set.insert((i, j));
                }
            }
        }
        set
    }

    fn from_inversions(n: usize, inv: &HashSet<(usize, usize)>) -> Self {
        let mut positions: Vec<usize> = (0..n).collect();
        positions.sort_by(|&i, &j| {
            if i == j {
                return Ordering::Equal;
            }
            let (lo, hi) = if i < j { (i, j) } else { (j, i) };
            let inverted = inv.contains(&(lo, hi));
            match (i < j, inverted) {
                (true, false) => Ordering::Less,
                (true, true) => Ordering::Greater,
                (false, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
            }
        });
        let mut image = vec![0usize; n];
        for (rank, pos) in positions.into_iter().enumerate() {
            image[pos] = rank;
        }
        Classical { n, image }
    }

    fn perm_invert(&self) -> Self {
        Classical {
            n: self.n,
            image: self.inverse_perm(),
        }
    }

    /// The strand indices this factor actually moves — used by the
    /// reducibility check in [`crate::thurston`].
    pub fn support(&self) -> HashSet<usize> {
        (0..self.n)
            .filter(|&i| self.image[i] != i)
            .collect()
    }
}

impl FactorKind for Classical {
    type Parameter = usize;

    fn parameter(&self) -> usize {
        self.n
    }

    fn parameter_of_string(s: &str) -> GarsideResult<usize> {
        s.trim()
            .parse::<usize>()
            .map_err(|_| GarsideError::invalid_string(format!("`{}` is not a strand count", s)))
            .and_then(|n| {
                if n < 2 {
                    Err(GarsideError::invalid_string(
                        "classical braid groups need at least 2 strands",
                    ))
                } else {
                    Ok(n)
                }
            })
    }

    fn identity(p: &usize) -> Self {
        Classical {
            n: *p,
            image: (0..*p).collect(),
        }
    }

    fn delta(p: &usize) -> Self {
        Classical {
            n: *p,
            image: (0..*p).rev().collect(),
        }
    }

    fn lattice_height(p: &usize) -> u32 {
        (*p as u32) * (*p as u32 - 1) / 2
    }

    fn left_meet(&self, other: &Self) -> Self {
        let inter: HashSet<(usize, usize)> =
            self.inversions().intersection(&other.inversions()).cloned().collect();
        Self::from_inversions(self.n, &inter)
    }

    fn right_meet(&self, other: &Self) -> Self {
        self.perm_invert()
            .left_meet(&other.perm_invert())
            .perm_invert()
    }

    fn product(&self, other: &Self) -> Self {
        let image = self.image.iter().map(|&v| other.image[v]).collect();
        Classical { n: self.n, image }
    }

    fn left_complement(&self, other: &Self) -> Self {
        // c with c * self == other: c = other . self^-1
        other.product(&self.perm_invert())
    }

    fn right_complement(&self, other: &Self) -> Self {
        // c with self * c == other: c = self^-1 . other
        self.perm_invert().product(other)
    }

    fn delta_conjugate(&self, k: i32) -> Self {
        if k.rem_euclid(2) == 0 {
            self.clone()
        } else {
            let d = Self::delta(&self.n);
            d.product(self).product(&d)
        }
    }

    fn atoms(p: &usize) -> Vec<Self> {
        (0..p.saturating_sub(1))
            .map(|k| {
                let mut image: Vec<usize> = (0..*p).collect();
                image.swap(k, k + 1);
                Classical { n: *p, image }
            })
            .collect()
    }

    fn randomize(p: &usize, rng: &mut dyn rand::RngCore) -> GarsideResult<Self> {
        let mut image: Vec<usize> = (0..*p).collect();
        for i in (1..image.len()).rev() {
            let j = rng.gen_range(0..=i);
            image.swap(i, j);
        }
        Ok(Classical { n: *p, image })
    }

    fn parse(s: &str, pos: &mut usize, p: &usize) -> GarsideResult<Self> {
        let bytes = s.as_bytes();
        if *pos >= bytes.len() {
            return Err(GarsideError::invalid_string(
                "expected a classical braid factor, found end of input",
            ));
        }
        if bytes[*pos] as char == 'D' {
            *pos += 1;
            return Ok(Self::delta(p));
        }
        let mut i = *pos;
        if i < bytes.len() && bytes[i] as char == 's' {
            i += 1;
            if i < bytes.len() && bytes[i] as char == '_' {
                i += 1;
            }
        }
        let start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == start {
            return Err(GarsideError::invalid_string(format!(
                "expected `D` or a generator index at position {}",
                pos
            )));
        }
        let num: usize = s[start..i]
            .parse()
            .map_err(|_| GarsideError::invalid_string(format!("bad generator index `{}`", &s[start..i])))?;
        if num < 1 || num > p.saturating_sub(1) {
            return Err(GarsideError::invalid_string(format!(
                "generator index {} out of range for {} strands",
                num, p
            )));
        }
        *pos = i;
        Ok(Self::atoms(p)[num - 1].clone())
    }

    fn print(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_delta() {
            return write!(f, "D");
        }
        if self.is_identity() {
            return write!(f, "1");
        }
        let mut img = self.image.clone();
        let mut word = Vec::new();
        loop {
            let mut progressed = false;
            for i in 0..img.len().saturating_sub(1) {
                if img[i] > img[i + 1] {
                    img.swap(i, i + 1);
                    word.push(i + 1);
                    progressed = true;
                    break;
                }
            }
            if !progressed {
                break;
            }
        }
        let rendered: Vec<String> = word.iter().map(|k| format!("s_{}", k)).collect();
        write!(f, "{}", rendered.join(" . "))
    }
}

impl fmt::Display for Classical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FactorKind::print(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_twist_identity_for_three_strands() {
        let atoms = Classical::atoms(&3);
        let s1 = &atoms[0];
        let s2 = &atoms[1];
        let p = s1.product(s2).product(s1);
        assert_eq!(p, Classical::delta(&3));
    }

    #[test]
    fn meet_with_delta_is_identity_law() {
        let atoms = Classical::atoms(&4);
        for a in &atoms {
            let d = Classical::delta(&4);
            assert_eq!(a.left_meet(&d), a.clone());
        }
    }

    #[test]
    fn left_meet_is_idempotent_and_commutative() {
        let atoms = Classical::atoms(&5);
        let a = atoms[0].product(&atoms[1]);
        let b = atoms[1].product(&atoms[2]);
        assert_eq!(a.left_meet(&a), a);
        assert_eq!(a.left_meet(&b), b.left_meet(&a));
    }

    #[test]
    fn complement_duality_holds() {
        let atoms = Classical::atoms(&4);
        let a = atoms[0].product(&atoms[2]);
        let reconstructed = a.tilde_right().tilde_left();
        assert_eq!(reconstructed, a);
    }
}
