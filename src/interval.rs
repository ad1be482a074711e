#![allow(non_snake_case)]
//! Interval membership proofs: `v` committed in `C` lies in `[a, b)`.
//!
//! Membership is reduced to the non-negativity of two shifted values,
//!
//! * `u_a = v - a`, which is in `[0, 2^64)` iff `v >= a`, and
//! * `u_b = v + 2^64 - b`, which is in `[0, 2^64)` iff `v < b`,
//!
//! covered together by one aggregated range proof. The shifted commitments
//! reuse `C`'s blinding factor, which makes them public functions of the
//! statement itself:
//!
//! * `C_a = C - a * B` commits `v - a`, and
//! * `C_b = C + (2^64 - b) * B` commits `v + 2^64 - b`,
//!
//! so only a prover who can open `C` can open them, and the verifier can
//! recompute both from `C` and the public bounds. The verifier enforces the
//! homomorphic identities `C_ApC = C - C_a` and `C_BpC = C + C_b`, anchors
//! `C_a` and `C_b` against the recomputed shifts, and requires the enclosed
//! range proof's statement commitments to be exactly `(C_b, C_a)` — the
//! range proof then cannot be rebound to values unrelated to `C`. The public
//! bounds and all five commitments also seed the proof transcript.

use std::convert::TryInto;

use curve25519_dalek::ristretto::CompressedRistretto;
use curve25519_dalek::scalar::Scalar;
use lazy_static::lazy_static;
use merlin::Transcript;
use serde::de::Visitor;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::ProofError;
use crate::pedersen::{Commitment, Pedersen};
use crate::range_proof::Proof;
use crate::transcript::TranscriptProtocol;
use crate::util;

/// Domain-separation tag of the commitment context. All commitments — the
/// caller's, the two shifted ones, and the range proof's statements — live
/// under this single context so the linkage checks can compare them.
const MAIN_TAG: &[u8] = b"vosbor.BulletProof.v1";

const TRANSCRIPT_LABEL: &[u8] = b"vosbor.BulletProof.v1";

lazy_static! {
    static ref MAIN_CONTEXT: Pedersen = Pedersen::new(MAIN_TAG);
}

/// A proof that the value committed in `C` lies in the public interval
/// `[a, b)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RangeProof {
    /// The aggregated proof that both shifted values are in `[0, 2^64)`.
    pub(crate) proof: Proof,
    /// Inclusive lower bound.
    pub(crate) a: i64,
    /// Exclusive upper bound.
    pub(crate) b: i64,
    /// Commitment to `v - a`: equals `C - a * B`, sharing `C`'s blinder.
    pub(crate) C_a: CompressedRistretto,
    /// `C - C_a`, linking the lower-bound shift to `C`.
    pub(crate) C_ApC: CompressedRistretto,
    /// Commitment to `v + 2^64 - b`: equals `C + (2^64 - b) * B`, sharing
    /// `C`'s blinder.
    pub(crate) C_b: CompressedRistretto,
    /// `C + C_b`, linking the upper-bound shift to `C`.
    pub(crate) C_BpC: CompressedRistretto,
    /// The caller's original commitment.
    pub(crate) C: CompressedRistretto,
    /// Base64 rendering of `C`, carried as an opaque identifier. Never
    /// consulted during verification.
    pub(crate) commitment_id: String,
}

/// Commits to `v` with a fresh blinding factor under the main context.
pub fn commit(v: i64) -> Commitment {
    MAIN_CONTEXT.commit(util::scalar_from_i64(v), &mut rand::thread_rng())
}

/// Recomputes the commitment from `v` and the blinder held in `c` and
/// compares. Only the party holding the blinding factor can pass this check.
pub fn verify_commit(v: i64, c: &Commitment) -> bool {
    MAIN_CONTEXT.verify(util::scalar_from_i64(v), c)
}

/// The additive shift `2^64 - b` for the upper-bound side. Callers validate
/// `0 < b` first.
fn upper_shift(b: i64) -> u64 {
    ((1u128 << 64) - b as u128) as u64
}

/// Derive the two shifted witnesses, rejecting values outside `[a, b)`.
fn shifted_witnesses(v: i64, a: i64, b: i64) -> Result<(u64, u64), ProofError> {
    if a < 0 || b <= a {
        return Err(ProofError::OutOfRange);
    }
    if v < a || v >= b {
        return Err(ProofError::OutOfRange);
    }

    let u_a = (v - a) as u64;
    // v < b keeps this strictly below 2^64; v >= a >= 0 keeps it nonnegative.
    let u_b = (v as u128 + upper_shift(b) as u128) as u64;

    Ok((u_a, u_b))
}

/// Seed the proof transcript with everything the statement consists of: the
/// bounds, the original commitment, and the four derived commitments.
fn statement_transcript(
    a: i64,
    b: i64,
    C: &CompressedRistretto,
    C_a: &CompressedRistretto,
    C_ApC: &CompressedRistretto,
    C_b: &CompressedRistretto,
    C_BpC: &CompressedRistretto,
) -> Transcript {
    let mut transcript = Transcript::new(TRANSCRIPT_LABEL);
    transcript.append_u64(b"a", a as u64);
    transcript.append_u64(b"b", b as u64);
    transcript.append_point(b"C", C);
    transcript.append_point(b"C_a", C_a);
    transcript.append_point(b"C_ApC", C_ApC);
    transcript.append_point(b"C_b", C_b);
    transcript.append_point(b"C_BpC", C_BpC);
    transcript
}

/// Produce a zero-knowledge proof that the value committed in `c` lies in
/// `[a, b)`.
///
/// Fails with [`ProofError::BadWitness`] when `c` does not open to `v`, and
/// with [`ProofError::OutOfRange`] when `v` is outside `[a, b)` or the
/// bounds themselves are unusable.
pub fn gen_proof(v: i64, c: &Commitment, a: i64, b: i64) -> Result<RangeProof, ProofError> {
    if !verify_commit(v, c) {
        return Err(ProofError::BadWitness);
    }

    let (u_a, u_b) = shifted_witnesses(v, a, b)?;

    // Shift C by the public bounds. Subtracting an unblinded commitment to a
    // leaves C's blinder in place, so c_a opens to (v - a, r) and c_b to
    // (v + 2^64 - b, r); both are recomputable by the verifier from C alone.
    let c_a = c.sub(&MAIN_CONTEXT.commit_with(util::scalar_from_i64(a), Scalar::zero()));
    let c_b = c.add(&MAIN_CONTEXT.commit_with(Scalar::from(upper_shift(b)), Scalar::zero()));
    let c_apc = c.sub(&c_a);
    let c_bpc = c.add(&c_b);

    let C = c.point.compress();
    let C_a = c_a.point.compress();
    let C_ApC = c_apc.point.compress();
    let C_b = c_b.point.compress();
    let C_BpC = c_bpc.point.compress();

    let mut transcript = statement_transcript(a, b, &C, &C_a, &C_ApC, &C_b, &C_BpC);

    // The range proof's statements are c_b and c_a themselves: committing
    // (u_b, u_a) under their blinders reproduces exactly those points.
    let mut rng = rand::thread_rng();
    let proof = Proof::create(
        &MAIN_CONTEXT,
        &mut transcript,
        &[u_b, u_a],
        &[c_b.blinding, c_a.blinding],
        &mut rng,
    )?;

    Ok(RangeProof {
        proof,
        a,
        b,
        C_a,
        C_ApC,
        C_b,
        C_BpC,
        C,
        commitment_id: base64::encode(&C.to_bytes()),
    })
}

/// Check an interval membership proof.
///
/// Enforces, in order: the homomorphic identities between the carried
/// commitments, the anchoring of `C_a` and `C_b` to the shifts of `C` by the
/// public bounds, and the identity of the enclosed range proof's statement
/// commitments with `(C_b, C_a)` — all [`ProofError::LinkageError`] on
/// mismatch. Only then is the aggregated range proof itself verified.
pub fn verify_proof(rp: &RangeProof) -> Result<(), ProofError> {
    if rp.a < 0 || rp.b <= rp.a {
        return Err(ProofError::FormatError);
    }

    let C = rp.C.decompress().ok_or(ProofError::FormatError)?;
    let C_a = rp.C_a.decompress().ok_or(ProofError::FormatError)?;
    let C_ApC = rp.C_ApC.decompress().ok_or(ProofError::FormatError)?;
    let C_b = rp.C_b.decompress().ok_or(ProofError::FormatError)?;
    let C_BpC = rp.C_BpC.decompress().ok_or(ProofError::FormatError)?;

    if C_ApC != C - C_a {
        return Err(ProofError::LinkageError);
    }
    if C_BpC != C + C_b {
        return Err(ProofError::LinkageError);
    }

    // The shifted commitments are determined by C and the bounds; anything
    // else would let the range proof speak about values unrelated to C.
    let B = MAIN_CONTEXT.pc_gens.B;
    if C_a != C - Scalar::from(rp.a as u64) * B {
        return Err(ProofError::LinkageError);
    }
    if C_b != C + Scalar::from(upper_shift(rp.b)) * B {
        return Err(ProofError::LinkageError);
    }

    // The range proof must be a statement about exactly those commitments.
    if rp.proof.commitments() != [rp.C_b, rp.C_a] {
        return Err(ProofError::LinkageError);
    }

    let mut transcript =
        statement_transcript(rp.a, rp.b, &rp.C, &rp.C_a, &rp.C_ApC, &rp.C_b, &rp.C_BpC);

    rp.proof
        .verify(&MAIN_CONTEXT, &mut transcript, &mut rand::thread_rng())
}

impl RangeProof {
    /// The public interval `[a, b)` the proof speaks about.
    pub fn bounds(&self) -> (i64, i64) {
        (self.a, self.b)
    }

    /// The opaque display identifier of the underlying commitment.
    pub fn commitment_id(&self) -> &str {
        &self.commitment_id
    }

    /// Serializes the proof.
    ///
    /// The layout is the length-prefixed inner proof (with its statement
    /// commitments), the bounds `a` and `b` as little-endian `i64`, the five
    /// points `C_a, C_ApC, C_b, C_BpC, C`, then the length-prefixed display
    /// identifier.
    pub fn to_bytes(&self) -> Vec<u8> {
        let inner = self.proof.to_bytes(true);
        let id = self.commitment_id.as_bytes();

        let mut buf = Vec::with_capacity(4 + inner.len() + 16 + 5 * 32 + 4 + id.len());
        buf.extend_from_slice(&(inner.len() as u32).to_le_bytes());
        buf.extend_from_slice(&inner);
        buf.extend_from_slice(&self.a.to_le_bytes());
        buf.extend_from_slice(&self.b.to_le_bytes());
        buf.extend_from_slice(self.C_a.as_bytes());
        buf.extend_from_slice(self.C_ApC.as_bytes());
        buf.extend_from_slice(self.C_b.as_bytes());
        buf.extend_from_slice(self.C_BpC.as_bytes());
        buf.extend_from_slice(self.C.as_bytes());
        buf.extend_from_slice(&(id.len() as u32).to_le_bytes());
        buf.extend_from_slice(id);
        buf
    }

    /// Deserializes a proof from its canonical encoding.
    ///
    /// Rejects truncated or oversized buffers and any non-canonical point
    /// encoding. The display identifier is kept verbatim.
    pub fn from_bytes(slice: &[u8]) -> Result<RangeProof, ProofError> {
        let mut pos = 0;

        let read_u32 = |pos: &mut usize| -> Result<usize, ProofError> {
            if slice.len() < *pos + 4 {
                return Err(ProofError::FormatError);
            }
            let n = u32::from_le_bytes(slice[*pos..*pos + 4].try_into().unwrap()) as usize;
            *pos += 4;
            Ok(n)
        };

        let inner_len = read_u32(&mut pos)?;
        if slice.len() < pos + inner_len {
            return Err(ProofError::FormatError);
        }
        let proof = Proof::from_bytes(&slice[pos..pos + inner_len], true)?;
        pos += inner_len;

        if slice.len() < pos + 16 + 5 * 32 {
            return Err(ProofError::FormatError);
        }
        let a = i64::from_le_bytes(slice[pos..pos + 8].try_into().unwrap());
        pos += 8;
        let b = i64::from_le_bytes(slice[pos..pos + 8].try_into().unwrap());
        pos += 8;

        let read_point = |pos: &mut usize| -> Result<CompressedRistretto, ProofError> {
            let point = CompressedRistretto(util::read32(&slice[*pos..]));
            point.decompress().ok_or(ProofError::FormatError)?;
            *pos += 32;
            Ok(point)
        };

        let C_a = read_point(&mut pos)?;
        let C_ApC = read_point(&mut pos)?;
        let C_b = read_point(&mut pos)?;
        let C_BpC = read_point(&mut pos)?;
        let C = read_point(&mut pos)?;

        let id_len = read_u32(&mut pos)?;
        if slice.len() != pos + id_len {
            return Err(ProofError::FormatError);
        }
        let commitment_id = String::from_utf8(slice[pos..].to_vec())
            .map_err(|_| ProofError::FormatError)?;

        Ok(RangeProof {
            proof,
            a,
            b,
            C_a,
            C_ApC,
            C_b,
            C_BpC,
            C,
            commitment_id,
        })
    }
}

impl Serialize for RangeProof {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bytes(&self.to_bytes()[..])
    }
}

impl<'de> Deserialize<'de> for RangeProof {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RangeProofVisitor;

        impl<'de> Visitor<'de> for RangeProofVisitor {
            type Value = RangeProof;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("a valid interval range proof")
            }

            fn visit_bytes<E>(self, v: &[u8]) -> Result<RangeProof, E>
            where
                E: serde::de::Error,
            {
                RangeProof::from_bytes(v).map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_bytes(RangeProofVisitor)
    }
}
