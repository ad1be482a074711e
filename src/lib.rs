//! Zero-knowledge interval membership proofs over the ristretto255 group.
//!
//! A prover holding a Pedersen commitment `C` to a secret integer `v` can
//! produce a short proof that `v` lies in a public interval `[a, b)` without
//! revealing anything else about `v`. Interval membership is reduced to the
//! non-negativity of two shifted values, which are then covered by a single
//! aggregated Bulletproofs range proof. The shifted commitments reuse `C`'s
//! blinding factor, so they equal the public shifts of `C` by the bounds;
//! the verifier recomputes them and requires the range proof's statement
//! commitments to be exactly those points, binding the proof to `C`'s
//! opening.
//!
//! The top-level API is four functions:
//!
//! ```
//! use rangeproof::{commit, verify_commit, gen_proof, verify_proof};
//!
//! let c = commit(40);
//! assert!(verify_commit(40, &c));
//!
//! let proof = gen_proof(40, &c, 20, 100).unwrap();
//! assert!(verify_proof(&proof).is_ok());
//! ```
//!
//! The lower layers (Pedersen commitments, the aggregated range proof and the
//! recursive inner-product argument) are exposed for callers that want to
//! drive them directly with their own transcripts and generator contexts.

mod util;

pub mod errors;
mod generators;
mod inner_product_proof;
mod interval;
mod pedersen;
mod range_proof;
mod transcript;

pub use crate::errors::ProofError;
pub use crate::generators::{BulletproofGens, PedersenGens, MAX_AGGREGATION, RANGE_BITS};
pub use crate::inner_product_proof::InnerProductProof;
pub use crate::interval::{commit, gen_proof, verify_commit, verify_proof, RangeProof};
pub use crate::pedersen::{Commitment, Pedersen};
pub use crate::range_proof::Proof;
