use serde::{Deserialize, Serialize};

use super::hash::combine;
use super::types::Digest;

/// Inclusion proof: the sibling digests needed to recompute the root from one
/// leaf digest, ordered leaf-to-root.
///
/// Levels where the leaf's ancestor was an unpaired promoted node contribute
/// no sibling, so the proof can be shorter than `height - 1`. The fold is
/// position-free; the commutative pair hash makes left/right bookkeeping
/// unnecessary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proof {
    siblings: Vec<Digest>,
}

impl Proof {
    /// Wraps an ordered sibling sequence.
    pub fn new(siblings: Vec<Digest>) -> Self {
        Self { siblings }
    }

    /// Sibling digests in fold order.
    pub fn siblings(&self) -> &[Digest] {
        &self.siblings
    }

    /// Number of proof steps.
    pub fn len(&self) -> usize {
        self.siblings.len()
    }

    /// Whether the proof carries no siblings (single-leaf tree).
    pub fn is_empty(&self) -> bool {
        self.siblings.is_empty()
    }

    /// Renders every sibling as `0x`-prefixed lowercase hex.
    pub fn to_hex(&self) -> Vec<String> {
        self.siblings.iter().map(Digest::to_hex).collect()
    }

    /// Checks the proof against a leaf digest and an expected root.
    pub fn verify(&self, leaf: &Digest, expected_root: &Digest) -> bool {
        verify_proof(leaf, self, expected_root)
    }
}

/// Folds the siblings over a leaf digest, reproducing the candidate root.
///
/// Mirrors the on-chain `processProof` fold bit-for-bit: each step hashes the
/// sorted concatenation of the accumulator and the next sibling.
pub fn compute_root(leaf: &Digest, siblings: &[Digest]) -> Digest {
    let mut acc = *leaf;
    for sibling in siblings {
        acc = combine(&acc, sibling);
    }
    acc
}

/// Returns whether the proof links the leaf digest to the expected root.
pub fn verify_proof(leaf: &Digest, proof: &Proof, expected_root: &Digest) -> bool {
    compute_root(leaf, proof.siblings()) == *expected_root
}
