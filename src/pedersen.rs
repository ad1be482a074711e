//! Pedersen commitments with homomorphic addition and subtraction.
//!
//! A [`Pedersen`] context bundles the distinguished commitment bases with the
//! vector generators for one domain-separation tag. Commitments carry their
//! blinding factor in memory so the committer can open and combine them, but
//! only the group element is ever serialized.

use curve25519_dalek::ristretto::{CompressedRistretto, RistrettoPoint};
use curve25519_dalek::scalar::Scalar;
use curve25519_dalek::traits::MultiscalarMul;
use rand_core::{CryptoRng, RngCore};

use crate::errors::ProofError;
use crate::generators::{BulletproofGens, PedersenGens, MAX_AGGREGATION, RANGE_BITS};
use crate::util;

/// A Pedersen commitment together with its blinding factor.
///
/// The blinding factor is known only to the committer; the transportable form
/// produced by [`Commitment::to_bytes`] is the 32-byte group element alone. A
/// commitment reconstructed from bytes carries a zero blinding factor and can
/// be verified or opened only by whoever holds the original blinder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Commitment {
    /// The committed group element.
    pub point: RistrettoPoint,
    /// The blinding factor, held by the committer.
    pub blinding: Scalar,
}

impl Commitment {
    /// Adds two commitments componentwise, committing to the sum of the
    /// committed values under the sum of the blinders.
    pub fn add(&self, other: &Commitment) -> Commitment {
        Commitment {
            point: self.point + other.point,
            blinding: self.blinding + other.blinding,
        }
    }

    /// Subtracts `other` componentwise.
    pub fn sub(&self, other: &Commitment) -> Commitment {
        Commitment {
            point: self.point - other.point,
            blinding: self.blinding - other.blinding,
        }
    }

    /// Serializes the committed group element. The blinding factor is not
    /// part of the encoding.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.point.compress().to_bytes()
    }

    /// Deserializes a commitment from its 32-byte canonical encoding.
    ///
    /// Rejects non-canonical point encodings. The returned commitment has a
    /// zero blinding factor.
    pub fn from_bytes(slice: &[u8]) -> Result<Commitment, ProofError> {
        if slice.len() != 32 {
            return Err(ProofError::FormatError);
        }
        let point = CompressedRistretto(util::read32(slice))
            .decompress()
            .ok_or(ProofError::FormatError)?;

        Ok(Commitment {
            point,
            blinding: Scalar::zero(),
        })
    }

    /// Replaces the blinding factor, reattaching a blinder the committer kept
    /// across a serialization round trip.
    pub fn with_blinding(self, blinding: Scalar) -> Commitment {
        Commitment {
            point: self.point,
            blinding,
        }
    }
}

/// A commitment context: distinguished bases plus vector generators derived
/// from a single domain-separation tag.
pub struct Pedersen {
    /// Bases for scalar commitments.
    pub pc_gens: PedersenGens,
    /// Vector generators, sized for the maximum aggregated proof.
    pub bp_gens: BulletproofGens,
}

impl Pedersen {
    /// Builds the context for `tag`, deriving `MAX_AGGREGATION * RANGE_BITS`
    /// vector generators.
    pub fn new(tag: &[u8]) -> Pedersen {
        Pedersen {
            pc_gens: PedersenGens::new(tag),
            bp_gens: BulletproofGens::new(tag, MAX_AGGREGATION * RANGE_BITS),
        }
    }

    /// Commits to `value` under a blinding factor drawn from `rng`.
    pub fn commit<T: RngCore + CryptoRng>(&self, value: Scalar, rng: &mut T) -> Commitment {
        self.commit_with(value, Scalar::random(rng))
    }

    /// Commits to `value` under the supplied blinding factor.
    pub fn commit_with(&self, value: Scalar, blinding: Scalar) -> Commitment {
        Commitment {
            point: self.pc_gens.commit(value, blinding),
            blinding,
        }
    }

    /// Commits to a vector of scalars: `P = <values, G> + r * B_blinding`.
    pub fn commit_vector<T: RngCore + CryptoRng>(
        &self,
        values: &[Scalar],
        rng: &mut T,
    ) -> Result<Commitment, ProofError> {
        if values.len() > self.bp_gens.gens_capacity {
            return Err(ProofError::InvalidGeneratorsLength);
        }
        let blinding = Scalar::random(rng);
        let point = RistrettoPoint::multiscalar_mul(
            values.iter().chain(std::iter::once(&blinding)),
            self.bp_gens
                .G(values.len())
                .chain(std::iter::once(&self.pc_gens.B_blinding)),
        );

        Ok(Commitment { point, blinding })
    }

    /// Recomputes the commitment from `value` and the stored blinder and
    /// compares it against `commitment`.
    pub fn verify(&self, value: Scalar, commitment: &Commitment) -> bool {
        self.pc_gens.commit(value, commitment.blinding) == commitment.point
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::scalar_from_i64;

    fn test_context() -> Pedersen {
        Pedersen::new(b"pedersen.test")
    }

    #[test]
    fn commit_verify_round_trip() {
        let ped = test_context();
        let mut rng = rand::thread_rng();

        for &v in &[0i64, 1, 42, -1, i64::MAX, i64::MIN] {
            let c = ped.commit(scalar_from_i64(v), &mut rng);
            assert!(ped.verify(scalar_from_i64(v), &c));
            assert!(!ped.verify(scalar_from_i64(v) + Scalar::one(), &c));
        }
    }

    #[test]
    fn addition_is_homomorphic() {
        let ped = test_context();
        let mut rng = rand::thread_rng();

        let c1 = ped.commit(Scalar::from(42u64), &mut rng);
        let c2 = ped.commit(Scalar::from(41u64), &mut rng);

        assert!(ped.verify(Scalar::from(83u64), &c1.add(&c2)));
        assert!(ped.verify(Scalar::one(), &c1.sub(&c2)));
    }

    #[test]
    fn serialization_drops_the_blinder() {
        let ped = test_context();
        let mut rng = rand::thread_rng();

        let c = ped.commit(Scalar::from(42u64), &mut rng);
        let decoded = Commitment::from_bytes(&c.to_bytes()).unwrap();

        assert_eq!(decoded.point.compress(), c.point.compress());
        assert_eq!(decoded.blinding, Scalar::zero());

        // Reattaching the original blinder makes the commitment openable
        // again.
        let restored = decoded.with_blinding(c.blinding);
        assert!(ped.verify(Scalar::from(42u64), &restored));
    }

    #[test]
    fn truncated_encoding_is_rejected() {
        assert_eq!(
            Commitment::from_bytes(&[0u8; 31]),
            Err(ProofError::FormatError)
        );
    }

    #[test]
    fn vector_commitment_capacity_is_enforced() {
        let ped = test_context();
        let mut rng = rand::thread_rng();

        let too_long = vec![Scalar::one(); ped.bp_gens.gens_capacity + 1];
        assert_eq!(
            ped.commit_vector(&too_long, &mut rng).unwrap_err(),
            ProofError::InvalidGeneratorsLength
        );

        let ok = vec![Scalar::one(); 4];
        assert!(ped.commit_vector(&ok, &mut rng).is_ok());
    }
}
