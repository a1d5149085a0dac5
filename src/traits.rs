use super::types::Digest;

/// Hash abstraction mapping an opaque leaf value to a fixed-width digest.
///
/// The tree never inspects leaves directly; callers own the leaf encoding and
/// supply whatever hasher their on-chain counterpart expects. Implementations
/// must be deterministic — the same leaf always yields the same digest.
pub trait LeafHasher<T: ?Sized> {
    fn hash_leaf(&self, leaf: &T) -> Digest;
}

/// Adapter turning a plain closure into a [`LeafHasher`].
///
/// Useful when the leaf encoding lives in deployment tooling and the hash is
/// most naturally written inline:
///
/// ```
/// use merkle_distributor::{keccak256, FnLeafHasher, MerkleTree};
///
/// let hasher = FnLeafHasher(|claim: &String| keccak256(claim.as_bytes()));
/// let tree = MerkleTree::new(&["alice:100".to_string()], hasher).unwrap();
/// assert_eq!(tree.leaf_count(), 1);
/// ```
pub struct FnLeafHasher<F>(pub F);

impl<T: ?Sized, F> LeafHasher<T> for FnLeafHasher<F>
where
    F: Fn(&T) -> Digest,
{
    fn hash_leaf(&self, leaf: &T) -> Digest {
        (self.0)(leaf)
    }
}
