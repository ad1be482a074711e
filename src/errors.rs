//! Errors surfaced while creating or checking proofs.

use thiserror::Error;

/// Represents an error in proof creation, verification, or parsing.
#[derive(Error, Clone, Debug, Eq, PartialEq)]
pub enum ProofError {
    /// The supplied commitment does not open to the claimed value.
    #[error("Commitment does not open to the claimed value.")]
    BadWitness,
    /// The secret value, or one of the shifted values derived from it, lies
    /// outside the provable range.
    #[error("Value lies outside the provable range.")]
    OutOfRange,
    /// The homomorphic relation between the interval commitments and the
    /// original commitment does not hold.
    #[error("Commitment is inconsistent with the interval bounds.")]
    LinkageError,
    /// This error occurs when the proof encoding is malformed: a truncated
    /// buffer, a non-canonical point or scalar, or inconsistent lengths.
    #[error("Proof data could not be parsed.")]
    FormatError,
    /// This error occurs when a proof fails to verify.
    #[error("Proof verification failed.")]
    VerificationError,
    /// This error occurs when the number of blinding factors does not match
    /// the number of values.
    #[error("Wrong number of blinding factors supplied.")]
    WrongNumBlindingFactors,
    /// This error occurs when the aggregation size is not a power of two.
    #[error("Aggregation size must be a nonzero power of two.")]
    InvalidAggregation,
    /// This error occurs when there are not enough generators for the
    /// requested proof size.
    #[error("Generator context is too small for the requested proof size.")]
    InvalidGeneratorsLength,
}
