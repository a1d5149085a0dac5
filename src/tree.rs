use std::collections::HashMap;
use std::fmt;

use super::hash::combine;
use super::proof::Proof;
use super::traits::LeafHasher;
use super::types::{Digest, MerkleError};

/// Merkle tree committing a batch of claim leaves to a single root.
///
/// Construction hashes every leaf, deduplicates the digests keeping first-seen
/// order, and folds the resulting layer pairwise until one digest remains. The
/// tree is immutable afterwards; root and proof queries only read the stored
/// layer stack.
///
/// ```
/// use merkle_distributor::{verify_proof, KeccakLeafHasher, MerkleTree};
///
/// let claims = ["alice:100", "bob:200", "carol:300"];
/// let tree = MerkleTree::new(&claims, KeccakLeafHasher).unwrap();
///
/// let root = tree.root();
/// let proof = tree.proof(&"bob:200").unwrap();
/// assert!(verify_proof(&tree.leaf_digest(&"bob:200"), &proof, &root));
/// ```
pub struct MerkleTree<H> {
    hasher: H,
    layers: Vec<Vec<Digest>>,
    positions: HashMap<Digest, usize>,
}

impl<H> MerkleTree<H> {
    /// Builds the tree over the provided leaves.
    ///
    /// Duplicate leaves (by digest) collapse onto their first occurrence; the
    /// position index only ever points at that slot. Fails with
    /// [`MerkleError::EmptyLeaves`] on an empty batch.
    pub fn new<T>(leaves: &[T], hasher: H) -> Result<Self, MerkleError>
    where
        H: LeafHasher<T>,
    {
        if leaves.is_empty() {
            return Err(MerkleError::EmptyLeaves);
        }

        let mut base = Vec::with_capacity(leaves.len());
        let mut positions = HashMap::with_capacity(leaves.len());
        for leaf in leaves {
            let digest = hasher.hash_leaf(leaf);
            if !positions.contains_key(&digest) {
                positions.insert(digest, base.len());
                base.push(digest);
            }
        }

        let mut layers = Vec::new();
        layers.push(base);
        while layers[layers.len() - 1].len() > 1 {
            let next = next_layer(&layers[layers.len() - 1]);
            layers.push(next);
        }

        Ok(Self {
            hasher,
            layers,
            positions,
        })
    }

    /// Returns the root digest.
    pub fn root(&self) -> Digest {
        // Construction always terminates in a single-digest top layer.
        self.layers[self.layers.len() - 1][0]
    }

    /// Returns the root as `0x`-prefixed lowercase hex.
    pub fn hex_root(&self) -> String {
        self.root().to_hex()
    }

    /// Hashes a leaf with the tree's hasher without touching the layer stack.
    pub fn leaf_digest<T>(&self, leaf: &T) -> Digest
    where
        H: LeafHasher<T>,
        T: ?Sized,
    {
        self.hasher.hash_leaf(leaf)
    }

    /// Generates the inclusion proof for a leaf value.
    pub fn proof<T>(&self, leaf: &T) -> Result<Proof, MerkleError>
    where
        H: LeafHasher<T>,
        T: ?Sized,
    {
        self.proof_for_digest(&self.hasher.hash_leaf(leaf))
    }

    /// Generates the inclusion proof for an already-hashed leaf digest.
    ///
    /// The digest must match a first-occurrence leaf supplied at construction;
    /// anything else fails with [`MerkleError::LeafNotFound`].
    pub fn proof_for_digest(&self, digest: &Digest) -> Result<Proof, MerkleError> {
        let mut index = *self
            .positions
            .get(digest)
            .ok_or(MerkleError::LeafNotFound)?;

        let mut siblings = Vec::with_capacity(self.layers.len().saturating_sub(1));
        for layer in &self.layers[..self.layers.len() - 1] {
            // An odd trailing element was promoted unchanged; it has no
            // sibling at this level and the proof skips it.
            if let Some(sibling) = layer.get(index ^ 1) {
                siblings.push(*sibling);
            }
            index /= 2;
        }

        Ok(Proof::new(siblings))
    }

    /// Number of distinct leaf digests committed (layer 0 length).
    pub fn leaf_count(&self) -> usize {
        self.layers[0].len()
    }

    /// Number of layers from leaves to root.
    pub fn height(&self) -> usize {
        self.layers.len()
    }

    /// Full layer stack, from leaf digests up to the single-digest root layer.
    pub fn layers(&self) -> &[Vec<Digest>] {
        &self.layers
    }
}

// The hasher is opaque (often a closure), so render the digest state only.
impl<H> fmt::Debug for MerkleTree<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MerkleTree")
            .field("layers", &self.layers)
            .field("positions", &self.positions)
            .finish_non_exhaustive()
    }
}

fn next_layer(current: &[Digest]) -> Vec<Digest> {
    let mut next = Vec::with_capacity(current.len().div_ceil(2));
    for pair in current.chunks(2) {
        match pair {
            [a, b] => next.push(combine(a, b)),
            // Unpaired tail carried forward, not self-combined.
            [a] => next.push(*a),
            _ => unreachable!("chunks(2) yields one or two digests"),
        }
    }
    next
}
