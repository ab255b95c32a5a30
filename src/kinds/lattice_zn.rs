//! The euclidean lattice ℤⁿ as a Garside group on the hypercube (§6.1):
//! canonical factors are bit-vectors in `{0,1}ⁿ`, Δ is the all-ones vector,
//! atoms are the unit vectors. Meet/join are componentwise AND/OR;
//! complement is bitwise NOT relative to Δ. Grounded on the teacher's
//! `bitvec`-backed `coordinates` representation.

use crate::error::{GarsideError, GarsideResult};
use crate::factor::FactorKind;
use bitvec::prelude::*;
use rand::RngCore;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LatticeZn {
    n: usize,
    bits: BitVec<u8, Lsb0>,
}

impl LatticeZn {
    fn zeros(n: usize) -> Self {
        LatticeZn {
            n,
            bits: bitvec![u8, Lsb0; 0; n],
        }
    }
}

impl FactorKind for LatticeZn {
    type Parameter = usize;

    fn parameter(&self) -> usize {
        self.n
    }

    fn parameter_of_string(s: &str) -> GarsideResult<usize> {
        s.trim()
            .parse::<usize>()
            .map_err(|_| GarsideError::invalid_string(format!("`{}` is not a dimension", s)))
            .and_then(|n| {
                if n == 0 {
                    Err(GarsideError::invalid_string("dimension must be at least 1"))
                } else {
                    Ok(n)
                }
            })
    }

    fn identity(p: &usize) -> Self {
        Self::zeros(*p)
    }

    fn delta(p: &usize) -> Self {
        LatticeZn {
            n: *p,
            bits: bitvec![u8, Lsb0; 1; *p],
        }
    }

    fn lattice_height(p: &usize) -> u32 {
        *p as u32
    }

    fn left_meet(&self, other: &Self) -> Self {
        LatticeZn {
            n: self.n,
            bits: self.bits.clone() & other.bits.clone(),
        }
    }

    fn right_meet(&self, other: &Self) -> Self {
        self.left_meet(other)
    }

    fn product(&self, other: &Self) -> Self {
        debug_assert!((self.bits.clone() & other.bits.clone()).not_any());
        LatticeZn {
            n: self.n,
            bits: self.bits.clone() | other.bits.clone(),
        }
    }

    fn left_complement(&self, other: &Self) -> Self {
        LatticeZn {
            n: self.n,
            bits: other.bits.clone() & !self.bits.clone(),
        }
    }

    fn right_complement(&self, other: &Self) -> Self {
        self.left_complement(other)
    }

    fn delta_conjugate(&self, _k: i32) -> Self {
        self.clone()
    }

    fn atoms(p: &usize) -> Vec<Self> {
        (0..*p)
            .map(|i| {
                let mut f = Self::zeros(*p);
                f.bits.set(i, true);
                f
            })
            .collect()
    }

    fn randomize(p: &usize, rng: &mut dyn RngCore) -> GarsideResult<Self> {
        let mut bits = bitvec![u8, Lsb0; 0; *p];
        for mut b in bits.iter_mut() {
            *b = rng.next_u32() % 2 == 0;
        }
        Ok(LatticeZn { n: *p, bits })
    }

    fn parse(s: &str, pos: &mut usize, p: &usize) -> GarsideResult<Self> {
        let bytes = s.as_bytes();
        if *pos >= bytes.len() {
            return Err(GarsideError::invalid_string(
                "expected a lattice factor, found end of input",
            ));
        }
        if bytes[*pos] as char == 'D' {
            *pos += 1;
            return Ok(Self::delta(p));
        }
        let mut i = *pos;
        if i < bytes.len() && bytes[i] as char == 'e' {
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
            return Err(GarsideError::invalid_string(
                "expected `D` or a coordinate index",
            ));
        }
        let num: usize = s[start..i]
            .parse()
            .map_err(|_| GarsideError::invalid_string(format!("bad coordinate `{}`", &s[start..i])))?;
        if num < 1 || num > *p {
            return Err(GarsideError::invalid_string(format!(
                "coordinate {} out of range for dimension {}",
                num, p
            )));
        }
        *pos = i;
        let mut f = Self::zeros(*p);
        f.bits.set(num - 1, true);
        Ok(f)
    }

    fn print(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_delta() {
            return write!(f, "D");
        }
        if self.is_identity() {
            return write!(f, "1");
        }
        let tokens: Vec<String> = self
            .bits
            .iter()
            .enumerate()
            .filter(|(_, b)| **b)
            .map(|(i, _)| format!("e_{}", i + 1))
            .collect();
        write!(f, "{}", tokens.join(" . "))
    }
}

impl fmt::Display for LatticeZn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FactorKind::print(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meet_is_componentwise_and() {
        let atoms = LatticeZn::atoms(&4);
        assert!(atoms[0].left_meet(&atoms[1]).is_identity());
        assert_eq!(atoms[0].left_meet(&atoms[0]), atoms[0]);
    }

    #[test]
    fn delta_is_all_ones_and_meet_with_any_is_identity_law() {
        let d = LatticeZn::delta(&4);
        for a in LatticeZn::atoms(&4) {
            assert_eq!(a.left_meet(&d), a);
        }
    }

    #[test]
    fn complement_duality_holds() {
        let a = LatticeZn::atoms(&5)[2].clone();
        assert_eq!(a.tilde_right().tilde_left(), a);
    }
}
