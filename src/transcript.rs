//! Extension trait driving a Merlin transcript through the proof protocols.
//!
//! Every value a later challenge depends on must be appended before that
//! challenge is squeezed, and the prover's and verifier's sequences must
//! match label-for-label.

use byteorder::{ByteOrder, LittleEndian};
use curve25519_dalek::ristretto::CompressedRistretto;
use curve25519_dalek::scalar::Scalar;
use curve25519_dalek::traits::IsIdentity;
use merlin::Transcript;

use crate::errors::ProofError;

pub trait TranscriptProtocol {
    /// Append a domain separator for an `n`-bit, `m`-value aggregated range
    /// proof.
    fn rangeproof_domain_sep(&mut self, n: u64, m: u64);

    /// Append a domain separator for a length-`n` inner-product argument.
    fn innerproduct_domain_sep(&mut self, n: u64);

    /// Append a `u64` with the given `label`.
    fn append_u64(&mut self, label: &'static [u8], n: u64);

    /// Append a `scalar` with the given `label`.
    fn append_scalar(&mut self, label: &'static [u8], scalar: &Scalar);

    /// Append a `point` with the given `label`.
    fn append_point(&mut self, label: &'static [u8], point: &CompressedRistretto);

    /// Check that a point is not the identity, then append it to the
    /// transcript.
    fn validate_and_append_point(
        &mut self,
        label: &'static [u8],
        point: &CompressedRistretto,
    ) -> Result<(), ProofError>;

    /// Compute a `label`ed challenge scalar.
    fn challenge_scalar(&mut self, label: &'static [u8]) -> Scalar;
}

fn le_u64(value: u64) -> [u8; 8] {
    let mut value_bytes = [0u8; 8];
    LittleEndian::write_u64(&mut value_bytes, value);
    value_bytes
}

impl TranscriptProtocol for Transcript {
    fn rangeproof_domain_sep(&mut self, n: u64, m: u64) {
        self.append_message(b"dom-sep", b"rangeproof v1");
        self.append_message(b"n", &le_u64(n));
        self.append_message(b"m", &le_u64(m));
    }

    fn innerproduct_domain_sep(&mut self, n: u64) {
        self.append_message(b"dom-sep", b"ipp v1");
        self.append_message(b"n", &le_u64(n));
    }

    fn append_u64(&mut self, label: &'static [u8], n: u64) {
        self.append_message(label, &le_u64(n));
    }

    fn append_scalar(&mut self, label: &'static [u8], scalar: &Scalar) {
        self.append_message(label, scalar.as_bytes());
    }

    fn append_point(&mut self, label: &'static [u8], point: &CompressedRistretto) {
        self.append_message(label, point.as_bytes());
    }

    fn validate_and_append_point(
        &mut self,
        label: &'static [u8],
        point: &CompressedRistretto,
    ) -> Result<(), ProofError> {
        if point.is_identity() {
            Err(ProofError::VerificationError)
        } else {
            self.append_message(label, point.as_bytes());
            Ok(())
        }
    }

    fn challenge_scalar(&mut self, label: &'static [u8]) -> Scalar {
        let mut buf = [0u8; 64];
        self.challenge_bytes(label, &mut buf);

        Scalar::from_bytes_mod_order_wide(&buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_transcripts_agree() {
        let mut a = Transcript::new(b"transcript test");
        let mut b = Transcript::new(b"transcript test");

        a.rangeproof_domain_sep(64, 2);
        b.rangeproof_domain_sep(64, 2);
        a.append_scalar(b"s", &Scalar::from(7u64));
        b.append_scalar(b"s", &Scalar::from(7u64));

        assert_eq!(a.challenge_scalar(b"c"), b.challenge_scalar(b"c"));
    }

    #[test]
    fn diverging_transcripts_disagree() {
        let mut a = Transcript::new(b"transcript test");
        let mut b = Transcript::new(b"transcript test");

        a.append_scalar(b"s", &Scalar::from(7u64));
        b.append_scalar(b"s", &Scalar::from(8u64));

        assert_ne!(a.challenge_scalar(b"c"), b.challenge_scalar(b"c"));
    }

    #[test]
    fn identity_point_is_rejected() {
        use curve25519_dalek::traits::Identity;

        let mut t = Transcript::new(b"transcript test");
        assert_eq!(
            t.validate_and_append_point(b"P", &CompressedRistretto::identity()),
            Err(ProofError::VerificationError)
        );
    }
}
