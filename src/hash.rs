//! Keccak-256 helpers shared by the layer builder and the proof fold.
//!
//! The parent hash sorts its two inputs byte-lexicographically before
//! concatenating, so a node's value does not depend on which sibling sat left
//! or right. Proofs therefore carry no per-step position flag, and the fold
//! here must match the on-chain checker exactly.

use sha3::{Digest as _, Keccak256};

use super::traits::LeafHasher;
use super::types::{Digest, DIGEST_SIZE};

/// Hashes arbitrary bytes with keccak-256.
pub fn keccak256(bytes: &[u8]) -> Digest {
    let mut output = [0u8; DIGEST_SIZE];
    output.copy_from_slice(&Keccak256::digest(bytes));
    Digest::new(output)
}

/// Combines two sibling digests into their parent.
///
/// Inputs are ordered low-to-high before concatenation, making the operation
/// commutative: `combine(a, b) == combine(b, a)`.
pub fn combine(a: &Digest, b: &Digest) -> Digest {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let mut input = [0u8; 2 * DIGEST_SIZE];
    input[..DIGEST_SIZE].copy_from_slice(lo.as_bytes());
    input[DIGEST_SIZE..].copy_from_slice(hi.as_bytes());
    keccak256(&input)
}

/// Reference leaf hasher applying keccak-256 to the leaf's byte encoding.
///
/// Matches the hash used for claim leaves in the distribution tooling; callers
/// with a bespoke leaf encoding supply their own [`LeafHasher`] instead.
pub struct KeccakLeafHasher;

impl<T> LeafHasher<T> for KeccakLeafHasher
where
    T: AsRef<[u8]> + ?Sized,
{
    fn hash_leaf(&self, leaf: &T) -> Digest {
        keccak256(leaf.as_ref())
    }
}
