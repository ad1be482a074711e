#![allow(non_snake_case)]
//! Deterministic, nothing-up-my-sleeve generator derivation.
//!
//! Every generator is obtained by hashing a label of the form
//! `tag || "::" || sub-tag || "::" || index` to a group element, so any
//! implementation handed the same domain-separation tag reproduces the same
//! points bit-for-bit. No generator has a known discrete-log relation to any
//! other.

use curve25519_dalek::ristretto::RistrettoPoint;
use curve25519_dalek::scalar::Scalar;
use curve25519_dalek::traits::MultiscalarMul;
use sha3::Sha3_512;

/// Number of bits covered by a single range proof; shifted values are proven
/// to lie in `[0, 2^RANGE_BITS)`.
pub const RANGE_BITS: usize = 64;

/// Largest number of values a single aggregated proof may cover. Generator
/// contexts are sized for this aggregation up front.
pub const MAX_AGGREGATION: usize = 4;

/// Hash a `(tag, sub-tag, index)` label to a group element.
fn derive_generator(tag: &[u8], sub: &[u8], index: u64) -> RistrettoPoint {
    let mut label = Vec::with_capacity(tag.len() + sub.len() + 12);
    label.extend_from_slice(tag);
    label.extend_from_slice(b"::");
    label.extend_from_slice(sub);
    label.extend_from_slice(b"::");
    label.extend_from_slice(&index.to_le_bytes());

    RistrettoPoint::hash_from_bytes::<Sha3_512>(&label)
}

/// Represents a pair of base points for Pedersen commitments.
///
/// Both bases are derived from the context's domain-separation tag, so two
/// contexts with distinct tags commit under unrelated bases.
#[derive(Copy, Clone)]
pub struct PedersenGens {
    /// Base for the committed value.
    pub B: RistrettoPoint,
    /// Base for the blinding factor.
    pub B_blinding: RistrettoPoint,
}

impl PedersenGens {
    /// Derives the commitment bases for the given domain-separation tag.
    pub fn new(tag: &[u8]) -> PedersenGens {
        PedersenGens {
            B: derive_generator(tag, b"B", 0),
            B_blinding: derive_generator(tag, b"B-blinding", 0),
        }
    }

    /// Creates a Pedersen commitment using the value scalar and a blinding
    /// factor.
    pub fn commit(&self, value: Scalar, blinding: Scalar) -> RistrettoPoint {
        RistrettoPoint::multiscalar_mul(&[value, blinding], &[self.B, self.B_blinding])
    }
}

/// The vector generators needed for range proofs up to `gens_capacity` total
/// bit dimensions under one domain-separation tag.
///
/// The `G` and `H` vectors are derived under disjoint sub-tags of the same
/// context tag.
#[derive(Clone)]
pub struct BulletproofGens {
    /// The maximum number of usable generators in each vector.
    pub gens_capacity: usize,
    G_vec: Vec<RistrettoPoint>,
    H_vec: Vec<RistrettoPoint>,
}

impl BulletproofGens {
    /// Derives `gens_capacity` generators for each of the `G` and `H`
    /// vectors under `tag`.
    pub fn new(tag: &[u8], gens_capacity: usize) -> BulletproofGens {
        let G_vec = (0..gens_capacity)
            .map(|i| derive_generator(tag, b"G", i as u64))
            .collect();
        let H_vec = (0..gens_capacity)
            .map(|i| derive_generator(tag, b"H", i as u64))
            .collect();

        BulletproofGens {
            gens_capacity,
            G_vec,
            H_vec,
        }
    }

    /// Return an iterator over the first `n` generators of the `G` vector.
    pub(crate) fn G(&self, n: usize) -> impl Iterator<Item = &RistrettoPoint> {
        self.G_vec[..n].iter()
    }

    /// Return an iterator over the first `n` generators of the `H` vector.
    pub(crate) fn H(&self, n: usize) -> impl Iterator<Item = &RistrettoPoint> {
        self.H_vec[..n].iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn derivation_is_deterministic() {
        let first = BulletproofGens::new(b"test.tag", 16);
        let second = BulletproofGens::new(b"test.tag", 16);

        let g1: Vec<_> = first.G(16).cloned().collect();
        let g2: Vec<_> = second.G(16).cloned().collect();
        assert_eq!(g1, g2);

        let h1: Vec<_> = first.H(16).cloned().collect();
        let h2: Vec<_> = second.H(16).cloned().collect();
        assert_eq!(h1, h2);
    }

    #[test]
    fn generators_are_pairwise_distinct() {
        let gens = BulletproofGens::new(b"test.tag", 32);
        let pc = PedersenGens::new(b"test.tag");

        let mut seen = HashSet::new();
        for p in gens.G(32).chain(gens.H(32)) {
            assert!(seen.insert(p.compress().to_bytes()));
        }
        assert!(seen.insert(pc.B.compress().to_bytes()));
        assert!(seen.insert(pc.B_blinding.compress().to_bytes()));
    }

    #[test]
    fn distinct_tags_give_distinct_contexts() {
        let a = PedersenGens::new(b"test.tag.a");
        let b = PedersenGens::new(b"test.tag.b");

        assert_ne!(a.B.compress(), b.B.compress());
        assert_ne!(a.B_blinding.compress(), b.B_blinding.compress());
    }

    #[test]
    fn prefix_of_larger_context_matches() {
        let small = BulletproofGens::new(b"test.tag", 8);
        let large = BulletproofGens::new(b"test.tag", 64);

        let small_g: Vec<_> = small.G(8).cloned().collect();
        let large_g: Vec<_> = large.G(8).cloned().collect();
        assert_eq!(small_g, large_g);
    }
}
