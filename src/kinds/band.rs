//! Dual (Birman–Ko–Lee) braid canonical factors: non-crossing partitions of
//! `{0, ..., n-1}`, represented internally as the permutation built from the
//! partition's increasing cycles and ordered by absolute (reflection) order
//! rather than weak order (§6.1).
//!
//! Meets are computed on the partition view (common refinement, the
//! classical partition-lattice meet, which is always non-crossing when both
//! operands are); joins come for free from the `FactorKind` default methods.
//! `product`/`left_complement`/`right_complement`/`delta_conjugate` reuse
//! plain permutation arithmetic, since a non-crossing-partition permutation
//! is still just a permutation of `{0,...,n-1}` under composition.

use crate::error::{GarsideError, GarsideResult};
use crate::factor::FactorKind;
use rand::RngCore;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Band {
    n: usize,
    image: Vec<usize>,
}

impl Band {
    fn inverse_perm(&self) -> Vec<usize> {
        let mut inv = vec![0usize; self.n];
        for (i, &v) in self.image.iter().enumerate() {
            inv[v] = i;
        }
        inv
    }

    fn perm_invert(&self) -> Self {
        Band {
            n: self.n,
            image: self.inverse_perm(),
        }
    }

    fn blocks(&self) -> Vec<Vec<usize>> {
        let mut visited = vec![false; self.n];
        let mut blocks = Vec::new();
        for start in 0..self.n {
            if visited[start] {
                continue;
            }
            let mut block = Vec::new();
            let mut cur = start;
            loop {
                visited[cur] = true;
                block.push(cur);
                cur = self.image[cur];
                if cur == start {
                    break;
                }
            }
            block.sort_unstable();
            blocks.push(block);
        }
        blocks
    }

    fn from_blocks(n: usize, blocks: &[Vec<usize>]) -> Self {
        let mut image: Vec<usize> = (0..n).collect();
        for block in blocks {
            for w in 0..block.len() {
                let from = block[w];
                let to = block[(w + 1) % block.len()];
                image[from] = to;
            }
        }
        Band { n, image }
    }

    fn block_id_of(&self, blocks: &[Vec<usize>]) -> Vec<usize> {
        let mut id = vec![0usize; self.n];
        for (bi, block) in blocks.iter().enumerate() {
            for &e in block {
                id[e] = bi;
            }
        }
        id
    }

    fn random_nc_blocks(lo: usize, hi: usize, rng: &mut dyn RngCore, out: &mut Vec<Vec<usize>>) {
        if lo >= hi {
            return;
        }
        if hi - lo == 1 {
            out.push(vec![lo]);
            return;
        }
        match rng.next_u32() % 3 {
            0 => out.push((lo..hi).collect()),
            1 => {
                let mid = lo + 1 + (rng.next_u32() as usize % (hi - lo - 1));
                Self::random_nc_blocks(lo, mid, rng, out);
                Self::random_nc_blocks(mid, hi, rng, out);
            }
            _ => {
                out.push(vec![lo]);
                Self::random_nc_blocks(lo + 1, hi, rng, out);
            }
        }
    }
}

impl FactorKind for Band {
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
                        "band braid groups need at least 2 strands",
                    ))
                } else {
                    Ok(n)
                }
            })
    }

    fn identity(p: &usize) -> Self {
        Band {
            n: *p,
            image: (0..*p).collect(),
        }
    }

    fn delta(p: &usize) -> Self {
        Band {
            n: *p,
            image: (0..*p).map(|i| (i + 1) % *p).collect(),
        }
    }

    fn lattice_height(p: &usize) -> u32 {
        p.saturating_sub(1) as u32
    }

    fn left_meet(&self, other: &Self) -> Self {
        let a_blocks = self.blocks();
        let b_blocks = other.blocks();
        let a_id = self.block_id_of(&a_blocks);
        let b_id = other.block_id_of(&b_blocks);
        let mut merged: Vec<Vec<usize>> = Vec::new();
        let mut seen: std::collections::HashMap<(usize, usize), usize> = std::collections::HashMap::new();
        for e in 0..self.n {
            let key = (a_id[e], b_id[e]);
            let idx = *seen.entry(key).or_insert_with(|| {
                merged.push(Vec::new());
                merged.len() - 1
            });
            merged[idx].push(e);
        }
        Self::from_blocks(self.n, &merged)
    }

    fn right_meet(&self, other: &Self) -> Self {
        self.left_meet(other)
    }

    fn product(&self, other: &Self) -> Self {
        let image = self.image.iter().map(|&v| other.image[v]).collect();
        Band { n: self.n, image }
    }

    fn left_complement(&self, other: &Self) -> Self {
        other.product(&self.perm_invert())
    }

    fn right_complement(&self, other: &Self) -> Self {
        self.perm_invert().product(other)
    }

    fn delta_conjugate(&self, k: i32) -> Self {
        let n = self.n as i32;
        if n == 0 {
            return self.clone();
        }
        let shift = k.rem_euclid(n);
        if shift == 0 {
            return self.clone();
        }
        let mut d = Self::identity(&self.n);
        let base = Self::delta(&self.n);
        for _ in 0..shift {
            d = d.product(&base);
        }
        let d_inv = d.perm_invert();
        d_inv.product(self).product(&d)
    }

    fn atoms(p: &usize) -> Vec<Self> {
        let mut out = Vec::new();
        for i in 0..*p {
            for j in (i + 1)..*p {
                let mut image: Vec<usize> = (0..*p).collect();
                image.swap(i, j);
                out.push(Band { n: *p, image });
            }
        }
        out
    }

    fn randomize(p: &usize, rng: &mut dyn RngCore) -> GarsideResult<Self> {
        let mut blocks = Vec::new();
        Self::random_nc_blocks(0, *p, rng, &mut blocks);
        Ok(Self::from_blocks(*p, &blocks))
    }

    fn parse(s: &str, pos: &mut usize, p: &usize) -> GarsideResult<Self> {
        let bytes = s.as_bytes();
        if *pos >= bytes.len() {
            return Err(GarsideError::invalid_string(
                "expected a band factor, found end of input",
            ));
        }
        if bytes[*pos] as char == 'D' {
            *pos += 1;
            return Ok(Self::delta(p));
        }
        let mut i = *pos;
        if i < bytes.len() && bytes[i] as char == 'a' {
            i += 1;
            if i < bytes.len() && bytes[i] as char == '_' {
                i += 1;
            }
        }
        if i >= bytes.len() || bytes[i] as char != '(' {
            return Err(GarsideError::invalid_string(
                "expected `(` to start a band transposition",
            ));
        }
        i += 1;
        let read_int = |s: &str, i: &mut usize| -> GarsideResult<usize> {
            let start = *i;
            let bytes = s.as_bytes();
            while *i < bytes.len() && bytes[*i].is_ascii_digit() {
                *i += 1;
            }
            if *i == start {
                return Err(GarsideError::invalid_string("expected an integer"));
            }
            s[start..*i]
                .parse()
                .map_err(|_| GarsideError::invalid_string(format!("bad integer `{}`", &s[start..*i])))
        };
        let first = read_int(s, &mut i)?;
        while i < bytes.len() && (bytes[i] as char == ',' || (bytes[i] as char).is_whitespace()) {
            i += 1;
        }
        let second = read_int(s, &mut i)?;
        if i >= bytes.len() || bytes[i] as char != ')' {
            return Err(GarsideError::invalid_string("expected `)` to close a band transposition"));
        }
        i += 1;
        if first == 0 || second == 0 || first > *p || second > *p || first == second {
            return Err(GarsideError::invalid_string(format!(
                "transposition ({},{}) out of range for {} strands",
                first, second, p
            )));
        }
        let (a, b) = (first.min(second) - 1, first.max(second) - 1);
        let mut image: Vec<usize> = (0..*p).collect();
        image.swap(a, b);
        *pos = i;
        Ok(Band { n: *p, image })
    }

    fn print(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_delta() {
            return write!(f, "D");
        }
        if self.is_identity() {
            return write!(f, "1");
        }
        let mut tokens = Vec::new();
        for block in self.blocks() {
            if block.len() < 2 {
                continue;
            }
            for w in 0..block.len() - 1 {
                tokens.push(format!("a_({},{})", block[w] + 1, block[w + 1] + 1));
            }
        }
        write!(f, "{}", tokens.join(" . "))
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FactorKind::print(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_is_the_n_cycle() {
        let d = Band::delta(&4);
        assert_eq!(d.blocks().len(), 1);
    }

    #[test]
    fn meet_with_delta_is_identity_law() {
        let atoms = Band::atoms(&5);
        for a in &atoms {
            assert_eq!(a.left_meet(&Band::delta(&5)), a.clone());
        }
    }

    #[test]
    fn meet_is_idempotent() {
        let atoms = Band::atoms(&5);
        let a = &atoms[0];
        assert_eq!(a.left_meet(a), a.clone());
    }

    #[test]
    fn atom_count_matches_all_transpositions() {
        assert_eq!(Band::atoms(&5).len(), 5 * 4 / 2);
    }
}
