//! Summit-set machinery (§3.3, §4.2-§4.4): the super/ultra/sliding-circuits
//! summit sets used by conjugacy testing and centralizer computation.
//!
//! [`ClassBfs`] is the shared bookkeeping structure behind all three: a
//! breadth-first exploration of a conjugacy class by atom-conjugation,
//! recording for each newly-discovered element the parent it was reached
//! from and the atom that reached it (§3.3's `mins`/`prev` vectors). Both
//! [`crate::conjugacy`] and [`crate::centralizer`] walk this structure.

pub mod scs;
pub mod sss;
pub mod uss;

use crate::element::Element;
use crate::factor::FactorKind;
use std::collections::VecDeque;

/// A breadth-first exploration of one conjugacy class, rooted at some
/// summit-set representative, by conjugating with every atom in turn.
pub struct ClassBfs<F: FactorKind> {
    pub elements: Vec<Element<F>>,
    /// `mins[i]`: the atom conjugating `elements[prev[i]]` into `elements[i]`
    /// (identity for the root).
    pub mins: Vec<F>,
    /// `prev[i]`: the index this element was first discovered from.
    pub prev: Vec<usize>,
}

impl<F: FactorKind> ClassBfs<F> {
    pub fn position(&self, e: &Element<F>) -> Option<usize> {
        self.elements.iter().position(|x| x == e)
    }

    /// The conjugator `c` with `conjugate_by(c)(elements[0]) == elements[idx]`.
    pub fn tree_path(&self, idx: usize) -> Element<F> {
        let mut chain = Vec::new();
        let mut i = idx;
        while i != 0 {
            chain.push(self.mins[i].clone());
            i = self.prev[i];
        }
        chain.reverse();
        let mut conj = Element::identity(self.elements[0].parameter().clone());
        for f in chain {
            conj.right_multiply(&Element::from_factor(f));
        }
        conj
    }
}

/// Explores the conjugation graph reachable from `start` by atom
/// conjugation, keeping only elements that share `start`'s `(inf,
/// canonical_length)` class — the standard necessary condition for summit
/// membership.
///
/// This enumerates *all* atoms rather than the refined minimal-conjugator
/// set of §4.2.2: a safe, if less tight, superset that stays correct
/// without needing the sharper optimization.
pub fn build_class_bfs<F: FactorKind>(start: &Element<F>) -> ClassBfs<F> {
    let target_inf = start.inf();
    let target_len = start.canonical_length();
    let mut elements = vec![start.clone()];
    let mut mins = vec![F::identity(start.parameter())];
    let mut prev = vec![0usize];
    let mut queue = VecDeque::new();
    queue.push_back(0usize);
    while let Some(i) = queue.pop_front() {
        let cur = elements[i].clone();
        for atom in F::atoms(cur.parameter()) {
            let candidate = cur.conjugate_by_factor(&atom);
            if candidate.inf() != target_inf || candidate.canonical_length() != target_len {
                continue;
            }
            if elements.iter().any(|e| *e == candidate) {
                continue;
            }
            elements.push(candidate);
            mins.push(atom);
            prev.push(i);
            queue.push_back(elements.len() - 1);
        }
    }
    ClassBfs { elements, mins, prev }
}

/// Partitions `pool` into the orbits of repeatedly applying `step`,
/// returning only the *periodic* orbits (the cycles of the functional
/// graph `step` induces on `pool`) — transient elements that flow into a
/// cycle without being part of one are dropped, matching the summit-set
/// definition that only the periodic points belong to USS/SCS.
pub fn periodic_orbits<F, S>(pool: &[Element<F>], step: S) -> Vec<Vec<Element<F>>>
where
    F: FactorKind,
    S: Fn(&Element<F>) -> Element<F>,
{
    let mut orbits: Vec<Vec<Element<F>>> = Vec::new();
    let mut done: Vec<Element<F>> = Vec::new();
    for start in pool {
        if done.iter().any(|e| e == start) {
            continue;
        }
        let mut path = vec![start.clone()];
        loop {
            let next = step(path.last().unwrap());
            if let Some(pos) = path.iter().position(|e| *e == next) {
                orbits.push(path[pos..].to_vec());
                done.extend(path);
                break;
            }
            if done.iter().any(|e| e == &next) {
                done.extend(path);
                break;
            }
            path.push(next);
        }
    }
    orbits
}
