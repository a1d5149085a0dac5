use serde::{Deserialize, Serialize};
use std::fmt;

/// Width in bytes of every digest handled by the tree.
///
/// The builder and the on-chain verifier must agree on this width bit-for-bit;
/// proofs produced here are consumed by keccak256-based contract checkers.
pub const DIGEST_SIZE: usize = 32;

/// Canonical fixed-width digest used for leaves, internal nodes and roots.
///
/// Ordering is byte-lexicographic, which is what the commutative pair hash
/// relies on to stay independent of sibling position.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Digest([u8; DIGEST_SIZE]);

impl Digest {
    /// Creates a digest from a raw byte array.
    pub const fn new(bytes: [u8; DIGEST_SIZE]) -> Self {
        Self(bytes)
    }

    /// Returns the all-zero digest.
    pub const fn zero() -> Self {
        Self([0u8; DIGEST_SIZE])
    }

    /// Returns a reference to the underlying bytes.
    pub const fn as_bytes(&self) -> &[u8; DIGEST_SIZE] {
        &self.0
    }

    /// Consumes the digest and returns the byte array.
    pub const fn into_bytes(self) -> [u8; DIGEST_SIZE] {
        self.0
    }

    /// Creates a digest from a byte slice, rejecting any width other than
    /// [`DIGEST_SIZE`] before the caller touches the tree.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, MerkleError> {
        if bytes.len() != DIGEST_SIZE {
            return Err(MerkleError::DigestLength {
                expected: DIGEST_SIZE,
                got: bytes.len(),
            });
        }
        let mut out = [0u8; DIGEST_SIZE];
        out.copy_from_slice(bytes);
        Ok(Self(out))
    }

    /// Parses a hex string with or without a `0x` prefix, in either case.
    pub fn from_hex(s: &str) -> Result<Self, MerkleError> {
        let stripped = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s);
        let bytes = hex::decode(stripped).map_err(|_| MerkleError::InvalidHex)?;
        Self::from_slice(&bytes)
    }

    /// Renders the digest as `0x`-prefixed lowercase hex.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; DIGEST_SIZE]> for Digest {
    fn from(bytes: [u8; DIGEST_SIZE]) -> Self {
        Self(bytes)
    }
}

impl From<Digest> for [u8; DIGEST_SIZE] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

/// Canonical serialisation error domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerKind {
    Proof,
}

/// Errors emitted by the Merkle layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MerkleError {
    EmptyLeaves,
    LeafNotFound,
    DigestLength { expected: usize, got: usize },
    InvalidHex,
    ProofVersionMismatch { expected: u16, got: u16 },
    Serialization(SerKind),
}

impl fmt::Display for MerkleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MerkleError::EmptyLeaves => write!(f, "no leaves supplied"),
            MerkleError::LeafNotFound => write!(f, "digest does not exist in the tree"),
            MerkleError::DigestLength { expected, got } => {
                write!(f, "digest length mismatch: expected {}, got {}", expected, got)
            }
            MerkleError::InvalidHex => write!(f, "invalid hex digest encoding"),
            MerkleError::ProofVersionMismatch { expected, got } => write!(
                f,
                "proof version mismatch: expected {}, got {}",
                expected, got
            ),
            MerkleError::Serialization(kind) => {
                write!(f, "serialisation error in {:?}", kind)
            }
        }
    }
}

impl std::error::Error for MerkleError {}
