//! Canonical byte encoding for proofs handed to claimants and CLI tooling.

use super::proof::Proof;
use super::types::{Digest, MerkleError, SerKind, DIGEST_SIZE};

/// Version identifier for the canonical proof layout.
pub const PROOF_VERSION: u16 = 1;

// version (u16) + digest width (u16) + sibling count (u32)
const PROOF_HEADER_LEN: usize = 8;

/// Serialises a [`Proof`] into the canonical byte layout: version, digest
/// width, sibling count, then the raw digests, all little-endian.
pub fn encode_proof(proof: &Proof) -> Vec<u8> {
    let siblings = proof.siblings();
    let mut out = Vec::with_capacity(PROOF_HEADER_LEN + siblings.len() * DIGEST_SIZE);
    out.extend_from_slice(&PROOF_VERSION.to_le_bytes());
    out.extend_from_slice(&(DIGEST_SIZE as u16).to_le_bytes());
    out.extend_from_slice(&(siblings.len() as u32).to_le_bytes());
    for digest in siblings {
        out.extend_from_slice(digest.as_bytes());
    }
    out
}

/// Deserialises a [`Proof`] from its canonical byte representation.
pub fn decode_proof(bytes: &[u8]) -> Result<Proof, MerkleError> {
    let mut cursor = 0usize;
    let mut take = |len: usize| -> Result<&[u8], MerkleError> {
        if cursor + len > bytes.len() {
            return Err(MerkleError::Serialization(SerKind::Proof));
        }
        let slice = &bytes[cursor..cursor + len];
        cursor += len;
        Ok(slice)
    };

    let mut version_bytes = [0u8; 2];
    version_bytes.copy_from_slice(take(2)?);
    let version = u16::from_le_bytes(version_bytes);
    if version != PROOF_VERSION {
        return Err(MerkleError::ProofVersionMismatch {
            expected: PROOF_VERSION,
            got: version,
        });
    }
    let mut digest_size_bytes = [0u8; 2];
    digest_size_bytes.copy_from_slice(take(2)?);
    let digest_size = u16::from_le_bytes(digest_size_bytes) as usize;
    if digest_size != DIGEST_SIZE {
        return Err(MerkleError::Serialization(SerKind::Proof));
    }
    let mut count_bytes = [0u8; 4];
    count_bytes.copy_from_slice(take(4)?);
    let count = u32::from_le_bytes(count_bytes) as usize;
    // The count is untrusted wire data; check it against the bytes actually
    // present before reserving anything. This also rejects trailing garbage.
    let payload_len = bytes.len() - PROOF_HEADER_LEN;
    if count.checked_mul(DIGEST_SIZE) != Some(payload_len) {
        return Err(MerkleError::Serialization(SerKind::Proof));
    }
    let mut siblings = Vec::with_capacity(count);
    for _ in 0..count {
        let raw = take(DIGEST_SIZE)?;
        siblings.push(Digest::from_slice(raw).map_err(|_| MerkleError::Serialization(SerKind::Proof))?);
    }

    Ok(Proof::new(siblings))
}
