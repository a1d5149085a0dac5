//! Commutative Merkle authentication trees for off-chain claim distribution.
//!
//! An off-chain process builds the tree over a batch of claims, publishes only
//! the 32-byte root on-chain, and each claimant later submits their leaf
//! digest plus an inclusion proof to unlock funds. The pair hash sorts its two
//! inputs before concatenation, so proofs carry no left/right flags and the
//! fold here matches the OpenZeppelin-style verifiers deployed on EVM and SVM
//! chains.
//!
//! The tree is generic over the leaf type: callers supply a [`LeafHasher`]
//! (or a closure via [`FnLeafHasher`]) that owns the leaf encoding, and the
//! tree only ever handles fixed-width keccak digests. Construction is a
//! single synchronous pass; the finished tree is immutable and safe to share
//! across threads.

pub mod hash;
pub mod proof;
pub mod ser;
pub mod traits;
pub mod tree;
pub mod types;

pub use hash::{combine, keccak256, KeccakLeafHasher};
pub use proof::{compute_root, verify_proof, Proof};
pub use ser::{decode_proof, encode_proof, PROOF_VERSION};
pub use traits::{FnLeafHasher, LeafHasher};
pub use tree::MerkleTree;
pub use types::{Digest, MerkleError, SerKind, DIGEST_SIZE};
