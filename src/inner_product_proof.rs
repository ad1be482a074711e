#![allow(non_snake_case)]
//! The recursive inner-product argument.
//!
//! Proves knowledge of vectors \\(\mathbf{a}, \mathbf{b}\\) with
//! \\(P = \langle \mathbf{a}, \mathbf{G} \rangle + \langle \mathbf{b},
//! \mathbf{H} \rangle + \langle \mathbf{a}, \mathbf{b} \rangle Q\\) using
//! \\(\lceil \lg n \rceil\\) rounds of two group elements each. The caller
//! supplies the bases already weighted (the range proof hands in
//! \\(\mathbf{H}'\\) scaled by inverse powers of its `y` challenge), so
//! folding here is uniform in every round.

use std::convert::TryInto;
use std::iter;

use curve25519_dalek::ristretto::{CompressedRistretto, RistrettoPoint};
use curve25519_dalek::scalar::Scalar;
use curve25519_dalek::traits::VartimeMultiscalarMul;
use merlin::Transcript;

use crate::errors::ProofError;
use crate::transcript::TranscriptProtocol;
use crate::util;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InnerProductProof {
    pub(crate) L_vec: Vec<CompressedRistretto>,
    pub(crate) R_vec: Vec<CompressedRistretto>,
    pub(crate) a: Scalar,
    pub(crate) b: Scalar,
}

impl InnerProductProof {
    /// Create an inner-product proof for \\(\langle \mathbf{a}, \mathbf{b}
    /// \rangle\\) relative to the bases `G_vec`, `H_vec` and `Q`.
    ///
    /// The `transcript` is passed in so that the round challenges depend on
    /// the entire enclosing protocol. All four vectors must share one length,
    /// which must be a power of two.
    pub fn create(
        transcript: &mut Transcript,
        Q: &RistrettoPoint,
        mut G_vec: Vec<RistrettoPoint>,
        mut H_vec: Vec<RistrettoPoint>,
        mut a_vec: Vec<Scalar>,
        mut b_vec: Vec<Scalar>,
    ) -> InnerProductProof {
        let mut G = &mut G_vec[..];
        let mut H = &mut H_vec[..];
        let mut a = &mut a_vec[..];
        let mut b = &mut b_vec[..];

        let mut n = G.len();

        assert_eq!(H.len(), n);
        assert_eq!(a.len(), n);
        assert_eq!(b.len(), n);
        assert!(n.is_power_of_two());

        transcript.innerproduct_domain_sep(n as u64);

        let lg_n = n.trailing_zeros() as usize;
        let mut L_vec = Vec::with_capacity(lg_n);
        let mut R_vec = Vec::with_capacity(lg_n);

        while n != 1 {
            n /= 2;
            let (a_L, a_R) = a.split_at_mut(n);
            let (b_L, b_R) = b.split_at_mut(n);
            let (G_L, G_R) = G.split_at_mut(n);
            let (H_L, H_R) = H.split_at_mut(n);

            let c_L = util::inner_product(a_L, b_R);
            let c_R = util::inner_product(a_R, b_L);

            let L = RistrettoPoint::vartime_multiscalar_mul(
                a_L.iter().chain(b_R.iter()).chain(iter::once(&c_L)),
                G_R.iter().chain(H_L.iter()).chain(iter::once(Q)),
            )
            .compress();

            let R = RistrettoPoint::vartime_multiscalar_mul(
                a_R.iter().chain(b_L.iter()).chain(iter::once(&c_R)),
                G_L.iter().chain(H_R.iter()).chain(iter::once(Q)),
            )
            .compress();

            transcript.append_point(b"L", &L);
            transcript.append_point(b"R", &R);
            L_vec.push(L);
            R_vec.push(R);

            let u = transcript.challenge_scalar(b"u");
            let u_inv = u.invert();

            for i in 0..n {
                a_L[i] = a_L[i] * u + u_inv * a_R[i];
                b_L[i] = b_L[i] * u_inv + u * b_R[i];
                G_L[i] = RistrettoPoint::vartime_multiscalar_mul(&[u_inv, u], &[G_L[i], G_R[i]]);
                H_L[i] = RistrettoPoint::vartime_multiscalar_mul(&[u, u_inv], &[H_L[i], H_R[i]]);
            }

            a = a_L;
            b = b_L;
            G = G_L;
            H = H_L;
        }

        InnerProductProof {
            L_vec,
            R_vec,
            a: a[0],
            b: b[0],
        }
    }

    /// Recompute the round challenges from the transcript and derive the
    /// folding scalars the verifier needs: the squared challenges, their
    /// inverses, and the vector \\(\mathbf{s}\\) of products that unrolls the
    /// generator folding.
    pub(crate) fn verification_scalars(
        &self,
        n: usize,
        transcript: &mut Transcript,
    ) -> Result<(Vec<Scalar>, Vec<Scalar>, Vec<Scalar>), ProofError> {
        let lg_n = self.L_vec.len();
        if lg_n >= 32 || self.R_vec.len() != lg_n {
            return Err(ProofError::VerificationError);
        }
        if n != (1 << lg_n) {
            return Err(ProofError::VerificationError);
        }

        transcript.innerproduct_domain_sep(n as u64);

        let mut challenges = Vec::with_capacity(lg_n);
        for (L, R) in self.L_vec.iter().zip(self.R_vec.iter()) {
            transcript.append_point(b"L", L);
            transcript.append_point(b"R", R);
            challenges.push(transcript.challenge_scalar(b"u"));
        }

        let mut challenges_inv = challenges.clone();
        let allinv = Scalar::batch_invert(&mut challenges_inv);

        for i in 0..lg_n {
            challenges[i] = challenges[i] * challenges[i];
            challenges_inv[i] = challenges_inv[i] * challenges_inv[i];
        }
        let challenges_sq = challenges;
        let challenges_inv_sq = challenges_inv;

        // s[0] is the product of all inverse challenges; each further entry
        // flips one challenge from inverse to direct, following the binary
        // decomposition of its index.
        let mut s = Vec::with_capacity(n);
        s.push(allinv);
        for i in 1..n {
            let lg_i = (32 - 1 - (i as u32).leading_zeros()) as usize;
            let k = 1 << lg_i;
            // Challenges are stored in creation order as u_k,...,u_1.
            let u_lg_i_sq = challenges_sq[(lg_n - 1) - lg_i];
            s.push(s[i - k] * u_lg_i_sq);
        }

        Ok((challenges_sq, challenges_inv_sq, s))
    }

    /// Check the proof against an explicitly recomputed \\(P\\).
    ///
    /// The range-proof verifier folds these scalars into its own single
    /// multiscalar check instead; this standalone entry point serves direct
    /// users of the argument and the test suite.
    pub fn verify(
        &self,
        n: usize,
        transcript: &mut Transcript,
        P: &RistrettoPoint,
        Q: &RistrettoPoint,
        G: &[RistrettoPoint],
        H: &[RistrettoPoint],
    ) -> Result<(), ProofError> {
        let (u_sq, u_inv_sq, s) = self.verification_scalars(n, transcript)?;

        let g_times_a_times_s = s.iter().map(|s_i| self.a * s_i);
        let h_times_b_div_s = s.iter().rev().map(|s_i_inv| self.b * s_i_inv);

        let neg_u_sq = u_sq.iter().map(|u| -u);
        let neg_u_inv_sq = u_inv_sq.iter().map(|u| -u);

        let Ls = self
            .L_vec
            .iter()
            .map(|p| p.decompress().ok_or(ProofError::FormatError))
            .collect::<Result<Vec<_>, _>>()?;
        let Rs = self
            .R_vec
            .iter()
            .map(|p| p.decompress().ok_or(ProofError::FormatError))
            .collect::<Result<Vec<_>, _>>()?;

        let expect_P = RistrettoPoint::vartime_multiscalar_mul(
            iter::once(self.a * self.b)
                .chain(g_times_a_times_s)
                .chain(h_times_b_div_s)
                .chain(neg_u_sq)
                .chain(neg_u_inv_sq),
            iter::once(Q)
                .chain(G.iter())
                .chain(H.iter())
                .chain(Ls.iter())
                .chain(Rs.iter()),
        );

        if expect_P == *P {
            Ok(())
        } else {
            Err(ProofError::VerificationError)
        }
    }

    /// Returns the size in bytes required to serialize the proof.
    pub fn serialized_size(&self) -> usize {
        4 + (self.L_vec.len() * 2 + 2) * 32
    }

    /// Serializes the proof.
    ///
    /// The layout is the round count as a little-endian `u32`, the round
    /// pairs \\(L_0, R_0, \dots, L_{k-1}, R_{k-1}\\) as compressed points,
    /// then the two terminal scalars \\(a, b\\).
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.serialized_size());
        buf.extend_from_slice(&(self.L_vec.len() as u32).to_le_bytes());
        for (l, r) in self.L_vec.iter().zip(self.R_vec.iter()) {
            buf.extend_from_slice(l.as_bytes());
            buf.extend_from_slice(r.as_bytes());
        }
        buf.extend_from_slice(self.a.as_bytes());
        buf.extend_from_slice(self.b.as_bytes());
        buf
    }

    /// Deserializes the proof from a byte slice.
    ///
    /// Rejects truncated or oversized buffers, an implausible round count,
    /// and any non-canonical point or scalar encoding.
    pub fn from_bytes(slice: &[u8]) -> Result<InnerProductProof, ProofError> {
        if slice.len() < 4 {
            return Err(ProofError::FormatError);
        }
        let lg_n = u32::from_le_bytes(slice[..4].try_into().unwrap()) as usize;
        if lg_n >= 32 {
            return Err(ProofError::FormatError);
        }
        if slice.len() != 4 + (2 * lg_n + 2) * 32 {
            return Err(ProofError::FormatError);
        }

        let body = &slice[4..];
        let mut L_vec = Vec::with_capacity(lg_n);
        let mut R_vec = Vec::with_capacity(lg_n);
        for i in 0..lg_n {
            let pos = 2 * i * 32;
            let L = CompressedRistretto(util::read32(&body[pos..]));
            let R = CompressedRistretto(util::read32(&body[pos + 32..]));
            // Validate canonicity up front; verification decompresses again
            // from the compressed form it absorbs into the transcript.
            L.decompress().ok_or(ProofError::FormatError)?;
            R.decompress().ok_or(ProofError::FormatError)?;
            L_vec.push(L);
            R_vec.push(R);
        }

        let pos = 2 * lg_n * 32;
        let a = Scalar::from_canonical_bytes(util::read32(&body[pos..]))
            .ok_or(ProofError::FormatError)?;
        let b = Scalar::from_canonical_bytes(util::read32(&body[pos + 32..]))
            .ok_or(ProofError::FormatError)?;

        Ok(InnerProductProof { L_vec, R_vec, a, b })
    }
}
