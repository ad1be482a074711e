#![allow(non_snake_case)]
//! The aggregated range proof: each of `m` committed values lies in
//! \\([0, 2^{64})\\).
//!
//! The prover commits to the bit decompositions of the values (`A`), masks
//! them (`S`), reduces the range statement to a single inner-product relation
//! through the challenges `y`, `z`, commits to the resulting polynomial
//! \\(t(x) = t_0 + t_1 x + t_2 x^2\\) (`T_1`, `T_2`), and delegates the
//! evaluated vectors to the inner-product argument. The verifier folds every
//! identity into one multiscalar multiplication batched under a random
//! scalar.

use std::convert::TryInto;
use std::iter;

use clear_on_drop::clear::Clear;
use curve25519_dalek::ristretto::{CompressedRistretto, RistrettoPoint};
use curve25519_dalek::scalar::Scalar;
use curve25519_dalek::traits::{IsIdentity, MultiscalarMul, VartimeMultiscalarMul};
use merlin::Transcript;
use rand_core::{CryptoRng, RngCore};
use serde::de::Visitor;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use subtle::{Choice, ConditionallySelectable};

use crate::errors::ProofError;
use crate::generators::{MAX_AGGREGATION, RANGE_BITS};
use crate::inner_product_proof::InnerProductProof;
use crate::pedersen::Pedersen;
use crate::transcript::TranscriptProtocol;
use crate::util;

/// An aggregated proof that `m` committed values all lie in
/// \\([0, 2^{64})\\).
///
/// The statement commitments `V` are produced by the prover and travel
/// inside the proof; the wire encoding can omit them when the verifier
/// obtains them elsewhere.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Proof {
    /// Commitments to the proven values.
    pub(crate) V: Vec<CompressedRistretto>,
    /// Commitment to the bits of the values.
    pub(crate) A: CompressedRistretto,
    /// Commitment to the blinding vectors.
    pub(crate) S: CompressedRistretto,
    /// Commitment to the \\(t_1\\) coefficient of \\(t(x)\\).
    pub(crate) T_1: CompressedRistretto,
    /// Commitment to the \\(t_2\\) coefficient of \\(t(x)\\).
    pub(crate) T_2: CompressedRistretto,
    /// Evaluation of \\(t(x)\\) at the challenge point.
    pub(crate) t_x: Scalar,
    /// Blinding factor for the synthetic commitment to \\(t(x)\\).
    pub(crate) t_x_blinding: Scalar,
    /// Blinding factor for the synthetic commitment to the inner-product
    /// arguments.
    pub(crate) e_blinding: Scalar,
    /// Proof data for the inner-product argument.
    pub(crate) ipp_proof: InnerProductProof,
}

impl Proof {
    /// Create an aggregated range proof for `values` under the context
    /// `ped`, committing each value with the corresponding blinding factor.
    ///
    /// The number of values must be a nonzero power of two no larger than
    /// the context's capacity allows ([`MAX_AGGREGATION`]).
    pub fn create<T: RngCore + CryptoRng>(
        ped: &Pedersen,
        transcript: &mut Transcript,
        values: &[u64],
        blindings: &[Scalar],
        rng: &mut T,
    ) -> Result<Proof, ProofError> {
        let n = RANGE_BITS;
        let m = values.len();

        if blindings.len() != m {
            return Err(ProofError::WrongNumBlindingFactors);
        }
        if m == 0 || !m.is_power_of_two() {
            return Err(ProofError::InvalidAggregation);
        }
        let nm = n * m;
        if ped.bp_gens.gens_capacity < nm {
            return Err(ProofError::InvalidGeneratorsLength);
        }

        let pc_gens = &ped.pc_gens;
        let G: Vec<RistrettoPoint> = ped.bp_gens.G(nm).cloned().collect();
        let H: Vec<RistrettoPoint> = ped.bp_gens.H(nm).cloned().collect();

        let V: Vec<CompressedRistretto> = values
            .iter()
            .zip(blindings.iter())
            .map(|(&v, &r)| pc_gens.commit(Scalar::from(v), r).compress())
            .collect();

        transcript.rangeproof_domain_sep(n as u64, m as u64);
        for V_j in &V {
            transcript.append_point(b"V", V_j);
        }

        let mut a_blinding = Scalar::random(rng);
        let mut s_blinding = Scalar::random(rng);

        // A = <a_L, G> + <a_R, H> + a_blinding * B_blinding, where a_L is the
        // concatenated bit decomposition and a_R = a_L - 1. Since each entry
        // contributes either G_i or -H_i, the sum is assembled by
        // constant-time selection rather than by branching on secret bits.
        let mut a_L: Vec<Scalar> = Vec::with_capacity(nm);
        let mut a_R: Vec<Scalar> = Vec::with_capacity(nm);
        let mut A = pc_gens.B_blinding * a_blinding;
        let mut i = 0;
        for &v in values {
            for j in 0..n {
                let bit = ((v >> j) & 1) as u8;
                let bit_scalar = Scalar::from(bit);
                a_L.push(bit_scalar);
                a_R.push(bit_scalar - Scalar::one());

                let mut point = -H[i];
                point.conditional_assign(&G[i], Choice::from(bit));
                A += point;
                i += 1;
            }
        }

        let mut s_L: Vec<Scalar> = (0..nm).map(|_| Scalar::random(rng)).collect();
        let mut s_R: Vec<Scalar> = (0..nm).map(|_| Scalar::random(rng)).collect();

        let S = RistrettoPoint::multiscalar_mul(
            iter::once(&s_blinding).chain(s_L.iter()).chain(s_R.iter()),
            iter::once(&pc_gens.B_blinding)
                .chain(G.iter())
                .chain(H.iter()),
        );

        transcript.append_point(b"A", &A.compress());
        transcript.append_point(b"S", &S.compress());

        let y = transcript.challenge_scalar(b"y");
        let z = transcript.challenge_scalar(b"z");

        // l(x) = (a_L - z 1) + s_L x
        // r(x) = y^i (a_R + z 1 + s_R x) + sum_j z^{2+j} 2^k
        let mut l_poly = util::VecPoly1::zero(nm);
        let mut r_poly = util::VecPoly1::zero(nm);

        let mut exp_z = z * z;
        let mut exp_y = Scalar::one();
        let mut i = 0;
        for _j in 0..m {
            let mut exp_2 = Scalar::one();
            for _k in 0..n {
                l_poly.0[i] = a_L[i] - z;
                l_poly.1[i] = s_L[i];
                r_poly.0[i] = exp_y * (a_R[i] + z) + exp_z * exp_2;
                r_poly.1[i] = exp_y * s_R[i];

                exp_y *= y;
                exp_2 = exp_2 + exp_2;
                i += 1;
            }
            exp_z *= z;
        }

        let t_poly = l_poly.inner_product(&r_poly);

        let mut t_1_blinding = Scalar::random(rng);
        let mut t_2_blinding = Scalar::random(rng);
        let T_1 = pc_gens.commit(t_poly.1, t_1_blinding);
        let T_2 = pc_gens.commit(t_poly.2, t_2_blinding);

        transcript.append_point(b"T_1", &T_1.compress());
        transcript.append_point(b"T_2", &T_2.compress());

        let x = transcript.challenge_scalar(b"x");

        let t_x = t_poly.eval(x);

        // tau_x folds the statement blinders in by powers of z, matching the
        // z^{2+j} weights the verifier puts on V_j.
        let mut agg_blinding = Scalar::zero();
        let mut exp_z = z;
        for r in blindings {
            exp_z *= z;
            agg_blinding += exp_z * r;
        }
        let t_x_blinding = agg_blinding + x * t_1_blinding + x * x * t_2_blinding;
        let e_blinding = a_blinding + x * s_blinding;

        let l_vec = l_poly.eval(x);
        let r_vec = r_poly.eval(x);

        transcript.append_scalar(b"t_x", &t_x);
        transcript.append_scalar(b"t_x_blinding", &t_x_blinding);
        transcript.append_scalar(b"e_blinding", &e_blinding);

        let w = transcript.challenge_scalar(b"w");
        let Q = pc_gens.B * w;

        let H_prime: Vec<RistrettoPoint> = H
            .iter()
            .zip(util::exp_iter(y.invert()))
            .map(|(H_i, exp_y_inv)| H_i * exp_y_inv)
            .collect();

        let ipp_proof = InnerProductProof::create(transcript, &Q, G, H_prime, l_vec, r_vec);

        for e in a_L.iter_mut() {
            e.clear();
        }
        for e in a_R.iter_mut() {
            e.clear();
        }
        for e in s_L.iter_mut() {
            e.clear();
        }
        for e in s_R.iter_mut() {
            e.clear();
        }
        a_blinding.clear();
        s_blinding.clear();
        t_1_blinding.clear();
        t_2_blinding.clear();

        Ok(Proof {
            V,
            A: A.compress(),
            S: S.compress(),
            T_1: T_1.compress(),
            T_2: T_2.compress(),
            t_x,
            t_x_blinding,
            e_blinding,
            ipp_proof,
        })
    }

    /// The commitments to the proven values.
    pub fn commitments(&self) -> &[CompressedRistretto] {
        &self.V
    }

    /// Verify the proof against its carried commitments.
    ///
    /// Replays the transcript to recover the challenges, then checks both
    /// the \\(t(x)\\) identity and the inner-product commitment identity in
    /// one multiscalar multiplication, batched under the random scalar `c`.
    pub fn verify<T: RngCore + CryptoRng>(
        &self,
        ped: &Pedersen,
        transcript: &mut Transcript,
        rng: &mut T,
    ) -> Result<(), ProofError> {
        let n = RANGE_BITS;
        let m = self.V.len();

        if m == 0 || !m.is_power_of_two() {
            return Err(ProofError::InvalidAggregation);
        }
        let nm = n * m;
        if ped.bp_gens.gens_capacity < nm {
            return Err(ProofError::InvalidGeneratorsLength);
        }

        transcript.rangeproof_domain_sep(n as u64, m as u64);
        for V_j in &self.V {
            transcript.append_point(b"V", V_j);
        }
        transcript.validate_and_append_point(b"A", &self.A)?;
        transcript.validate_and_append_point(b"S", &self.S)?;

        let y = transcript.challenge_scalar(b"y");
        let z = transcript.challenge_scalar(b"z");
        let zz = z * z;
        let minus_z = -z;

        transcript.validate_and_append_point(b"T_1", &self.T_1)?;
        transcript.validate_and_append_point(b"T_2", &self.T_2)?;

        let x = transcript.challenge_scalar(b"x");

        transcript.append_scalar(b"t_x", &self.t_x);
        transcript.append_scalar(b"t_x_blinding", &self.t_x_blinding);
        transcript.append_scalar(b"e_blinding", &self.e_blinding);

        let w = transcript.challenge_scalar(b"w");

        // Random scalar batching the two verification identities.
        let c = Scalar::random(rng);

        let (u_sq, u_inv_sq, s) = self.ipp_proof.verification_scalars(nm, transcript)?;
        let s_inv = s.iter().rev();

        let a = self.ipp_proof.a;
        let b = self.ipp_proof.b;

        // z^0 2^0, ..., z^0 2^{n-1}, z^1 2^0, ..., z^{m-1} 2^{n-1}
        let powers_of_2: Vec<Scalar> = util::exp_iter(Scalar::from(2u64)).take(n).collect();
        let concat_z_and_2: Vec<Scalar> = util::exp_iter(z)
            .take(m)
            .flat_map(|exp_z| powers_of_2.iter().map(move |exp_2| exp_2 * exp_z))
            .collect();

        let g = s.iter().map(|s_i| minus_z - a * s_i);
        let h = s_inv
            .zip(util::exp_iter(y.invert()))
            .zip(concat_z_and_2.iter())
            .map(|((s_i_inv, exp_y_inv), z_and_2)| z + exp_y_inv * (zz * z_and_2 - b * s_i_inv));

        let value_commitment_scalars = util::exp_iter(z).take(m).map(|z_exp| c * zz * z_exp);
        let basepoint_scalar = w * (self.t_x - a * b) + c * (delta(n, m, &y, &z) - self.t_x);

        let mega_check = RistrettoPoint::optional_multiscalar_mul(
            iter::once(Scalar::one())
                .chain(iter::once(x))
                .chain(iter::once(c * x))
                .chain(iter::once(c * x * x))
                .chain(u_sq.iter().cloned())
                .chain(u_inv_sq.iter().cloned())
                .chain(iter::once(-self.e_blinding - c * self.t_x_blinding))
                .chain(iter::once(basepoint_scalar))
                .chain(g)
                .chain(h)
                .chain(value_commitment_scalars),
            iter::once(self.A.decompress())
                .chain(iter::once(self.S.decompress()))
                .chain(iter::once(self.T_1.decompress()))
                .chain(iter::once(self.T_2.decompress()))
                .chain(self.ipp_proof.L_vec.iter().map(|L| L.decompress()))
                .chain(self.ipp_proof.R_vec.iter().map(|R| R.decompress()))
                .chain(iter::once(Some(ped.pc_gens.B_blinding)))
                .chain(iter::once(Some(ped.pc_gens.B)))
                .chain(ped.bp_gens.G(nm).map(|&p| Some(p)))
                .chain(ped.bp_gens.H(nm).map(|&p| Some(p)))
                .chain(self.V.iter().map(|V_j| V_j.decompress())),
        )
        .ok_or(ProofError::FormatError)?;

        if mega_check.is_identity() {
            Ok(())
        } else {
            Err(ProofError::VerificationError)
        }
    }

    /// Returns the size in bytes required to serialize the proof.
    pub fn serialized_size(&self, include_commits: bool) -> usize {
        let commits = if include_commits {
            4 + self.V.len() * 32
        } else {
            0
        };
        commits + 7 * 32 + self.ipp_proof.serialized_size()
    }

    /// Serializes the proof.
    ///
    /// The layout is the optional commitment list (a little-endian `u32`
    /// count followed by the compressed points), the four points
    /// \\(A, S, T_1, T_2\\), the three scalars \\(t_x, \tilde{t}_x,
    /// \tilde{e}\\), then the inner-product proof.
    pub fn to_bytes(&self, include_commits: bool) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.serialized_size(include_commits));
        if include_commits {
            buf.extend_from_slice(&(self.V.len() as u32).to_le_bytes());
            for V_j in &self.V {
                buf.extend_from_slice(V_j.as_bytes());
            }
        }
        buf.extend_from_slice(self.A.as_bytes());
        buf.extend_from_slice(self.S.as_bytes());
        buf.extend_from_slice(self.T_1.as_bytes());
        buf.extend_from_slice(self.T_2.as_bytes());
        buf.extend_from_slice(self.t_x.as_bytes());
        buf.extend_from_slice(self.t_x_blinding.as_bytes());
        buf.extend_from_slice(self.e_blinding.as_bytes());
        buf.extend_from_slice(&self.ipp_proof.to_bytes());
        buf
    }

    /// Deserializes the proof from a byte slice, expecting the commitment
    /// list iff `include_commits` is set.
    ///
    /// Rejects truncated buffers, implausible commitment counts, and
    /// non-canonical point or scalar encodings. A proof decoded without
    /// commitments cannot be verified until its statements are known.
    pub fn from_bytes(slice: &[u8], include_commits: bool) -> Result<Proof, ProofError> {
        let mut pos = 0;

        let V = if include_commits {
            if slice.len() < 4 {
                return Err(ProofError::FormatError);
            }
            let count = u32::from_le_bytes(slice[..4].try_into().unwrap()) as usize;
            if count == 0 || count > MAX_AGGREGATION {
                return Err(ProofError::FormatError);
            }
            pos += 4;
            if slice.len() < pos + count * 32 {
                return Err(ProofError::FormatError);
            }
            let mut V = Vec::with_capacity(count);
            for _ in 0..count {
                let point = CompressedRistretto(util::read32(&slice[pos..]));
                point.decompress().ok_or(ProofError::FormatError)?;
                V.push(point);
                pos += 32;
            }
            V
        } else {
            Vec::new()
        };

        if slice.len() < pos + 7 * 32 {
            return Err(ProofError::FormatError);
        }

        let read_point = |pos: &mut usize| -> Result<CompressedRistretto, ProofError> {
            let point = CompressedRistretto(util::read32(&slice[*pos..]));
            point.decompress().ok_or(ProofError::FormatError)?;
            *pos += 32;
            Ok(point)
        };

        let A = read_point(&mut pos)?;
        let S = read_point(&mut pos)?;
        let T_1 = read_point(&mut pos)?;
        let T_2 = read_point(&mut pos)?;

        let read_scalar = |pos: &mut usize| -> Result<Scalar, ProofError> {
            let s = Scalar::from_canonical_bytes(util::read32(&slice[*pos..]))
                .ok_or(ProofError::FormatError)?;
            *pos += 32;
            Ok(s)
        };

        let t_x = read_scalar(&mut pos)?;
        let t_x_blinding = read_scalar(&mut pos)?;
        let e_blinding = read_scalar(&mut pos)?;

        let ipp_proof = InnerProductProof::from_bytes(&slice[pos..])?;

        Ok(Proof {
            V,
            A,
            S,
            T_1,
            T_2,
            t_x,
            t_x_blinding,
            e_blinding,
            ipp_proof,
        })
    }
}

impl Serialize for Proof {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bytes(&self.to_bytes(true)[..])
    }
}

impl<'de> Deserialize<'de> for Proof {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ProofVisitor;

        impl<'de> Visitor<'de> for ProofVisitor {
            type Value = Proof;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("a valid aggregated range proof")
            }

            fn visit_bytes<E>(self, v: &[u8]) -> Result<Proof, E>
            where
                E: serde::de::Error,
            {
                Proof::from_bytes(v, true).map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_bytes(ProofVisitor)
    }
}

/// Compute
/// \\[
/// \delta(y,z) = (z - z^{2}) \langle \mathbf{1}, \mathbf{y}^{nm} \rangle
///   - \sum_{j=0}^{m-1} z^{j+3} \langle \mathbf{1}, \mathbf{2}^{n} \rangle
/// \\]
fn delta(n: usize, m: usize, y: &Scalar, z: &Scalar) -> Scalar {
    let sum_y = util::sum_of_powers(y, n * m);
    let sum_2 = util::sum_of_powers(&Scalar::from(2u64), n);
    let sum_z = util::sum_of_powers(z, m);

    (z - z * z) * sum_y - z * z * z * sum_2 * sum_z
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn test_context() -> Pedersen {
        Pedersen::new(b"rangeproof.test")
    }

    fn create_and_verify_helper(m: usize) {
        let ped = test_context();
        let mut rng = rand::thread_rng();

        let values: Vec<u64> = (0..m).map(|_| rng.gen::<u64>()).collect();
        let blindings: Vec<Scalar> = (0..m).map(|_| Scalar::random(&mut rng)).collect();

        let mut transcript = Transcript::new(b"AggregatedRangeProofTest");
        let proof =
            Proof::create(&ped, &mut transcript, &values, &blindings, &mut rng).unwrap();

        let mut transcript = Transcript::new(b"AggregatedRangeProofTest");
        assert!(proof.verify(&ped, &mut transcript, &mut rng).is_ok());
    }

    #[test]
    fn create_and_verify_m_1() {
        create_and_verify_helper(1);
    }

    #[test]
    fn create_and_verify_m_2() {
        create_and_verify_helper(2);
    }

    #[test]
    fn create_and_verify_m_4() {
        create_and_verify_helper(4);
    }

    #[test]
    fn delta_matches_the_unrolled_sum() {
        let mut rng = rand::thread_rng();
        let y = Scalar::random(&mut rng);
        let z = Scalar::random(&mut rng);

        // m = 1: delta = sum_i ((z - z^2) y^i - z^3 2^i), i in 0..n.
        let n = 64;
        let z2 = z * z;
        let z3 = z2 * z;
        let mut expected = Scalar::zero();
        let mut exp_y = Scalar::one();
        let mut exp_2 = Scalar::one();
        for _ in 0..n {
            expected += (z - z2) * exp_y - z3 * exp_2;
            exp_y *= y;
            exp_2 = exp_2 + exp_2;
        }

        assert_eq!(expected, delta(n, 1, &y, &z));
    }

    #[test]
    fn bad_aggregation_sizes_are_rejected() {
        let ped = test_context();
        let mut rng = rand::thread_rng();
        let mut transcript = Transcript::new(b"AggregatedRangeProofTest");

        let blindings: Vec<Scalar> = (0..3).map(|_| Scalar::random(&mut rng)).collect();
        assert_eq!(
            Proof::create(&ped, &mut transcript, &[1, 2, 3], &blindings, &mut rng)
                .unwrap_err(),
            ProofError::InvalidAggregation
        );

        let mut transcript = Transcript::new(b"AggregatedRangeProofTest");
        assert_eq!(
            Proof::create(&ped, &mut transcript, &[1, 2], &blindings, &mut rng)
                .unwrap_err(),
            ProofError::WrongNumBlindingFactors
        );

        // Aggregation above the context capacity.
        let mut transcript = Transcript::new(b"AggregatedRangeProofTest");
        let values = vec![1u64; 2 * MAX_AGGREGATION];
        let blindings: Vec<Scalar> = (0..2 * MAX_AGGREGATION)
            .map(|_| Scalar::random(&mut rng))
            .collect();
        assert_eq!(
            Proof::create(&ped, &mut transcript, &values, &blindings, &mut rng)
                .unwrap_err(),
            ProofError::InvalidGeneratorsLength
        );
    }

    #[test]
    fn tampered_commitment_fails_verification() {
        let ped = test_context();
        let mut rng = rand::thread_rng();

        let values = [1037578891u64, 42];
        let blindings: Vec<Scalar> = (0..2).map(|_| Scalar::random(&mut rng)).collect();

        let mut transcript = Transcript::new(b"AggregatedRangeProofTest");
        let mut proof =
            Proof::create(&ped, &mut transcript, &values, &blindings, &mut rng).unwrap();

        let shifted = proof.V[0].decompress().unwrap() + ped.pc_gens.B;
        proof.V[0] = shifted.compress();

        let mut transcript = Transcript::new(b"AggregatedRangeProofTest");
        assert_eq!(
            proof.verify(&ped, &mut transcript, &mut rng),
            Err(ProofError::VerificationError)
        );
    }

    #[test]
    fn wrong_context_fails_verification() {
        let mut rng = rand::thread_rng();

        let values = [99u64];
        let blindings = [Scalar::random(&mut rng)];

        let ped = test_context();
        let mut transcript = Transcript::new(b"AggregatedRangeProofTest");
        let proof =
            Proof::create(&ped, &mut transcript, &values, &blindings, &mut rng).unwrap();

        let other = Pedersen::new(b"rangeproof.test.other");
        let mut transcript = Transcript::new(b"AggregatedRangeProofTest");
        assert_eq!(
            proof.verify(&other, &mut transcript, &mut rng),
            Err(ProofError::VerificationError)
        );
    }

    #[test]
    fn serialization_round_trips() {
        let ped = test_context();
        let mut rng = rand::thread_rng();

        let values = [0u64, u64::MAX];
        let blindings: Vec<Scalar> = (0..2).map(|_| Scalar::random(&mut rng)).collect();

        let mut transcript = Transcript::new(b"AggregatedRangeProofTest");
        let proof =
            Proof::create(&ped, &mut transcript, &values, &blindings, &mut rng).unwrap();

        // With commitments: full structural round trip, still verifies.
        let decoded = Proof::from_bytes(&proof.to_bytes(true), true).unwrap();
        assert_eq!(decoded, proof);

        let mut transcript = Transcript::new(b"AggregatedRangeProofTest");
        assert!(decoded.verify(&ped, &mut transcript, &mut rng).is_ok());

        // Without commitments: everything but the statement list survives.
        let stripped = Proof::from_bytes(&proof.to_bytes(false), false).unwrap();
        assert!(stripped.V.is_empty());
        assert_eq!(stripped.to_bytes(false), proof.to_bytes(false));
    }

    #[test]
    fn bincode_round_trips() {
        let ped = test_context();
        let mut rng = rand::thread_rng();

        let values = [7u64];
        let blindings = [Scalar::random(&mut rng)];

        let mut transcript = Transcript::new(b"AggregatedRangeProofTest");
        let proof =
            Proof::create(&ped, &mut transcript, &values, &blindings, &mut rng).unwrap();

        let wire = bincode::serialize(&proof).unwrap();
        let decoded: Proof = bincode::deserialize(&wire).unwrap();
        assert_eq!(decoded, proof);
    }
}
