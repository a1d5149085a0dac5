//! Fixed keccak-256 vectors pinning the wire-level contract with on-chain
//! verifiers. Any change to the leaf hash, the pair hash, or the layer rules
//! shows up here as a root mismatch.

use merkle_distributor::{
    decode_proof, encode_proof, verify_proof, Digest, KeccakLeafHasher, MerkleError, MerkleTree,
    Proof, SerKind, DIGEST_SIZE, PROOF_VERSION,
};

const ALICE_DIGEST: &str = "0xc3f88fdb1b27e916aea6951bdc090b0f1a584ffbef890e0c726c1f623babb32c";
const BOB_DIGEST: &str = "0x36867b9bf89a4f2e8da68989d8860d15e3c428ee03b14917a43f056f77d8b09c";
const CAROL_DIGEST: &str = "0x044f2751c2f169b89dfd28a7386e90d5b9cdb81dd091e51b4adcb9496559e49f";
const AB_PARENT: &str = "0x5898cc004563b3348545e2fb5ebced471ddea668bb058e57080eeb71576e7259";
const BATCH_ROOT: &str = "0x4d312ddc4b32de0944684e2358de03725789589b6a40a1a54ce38c14d18e229e";

fn sample_tree() -> MerkleTree<KeccakLeafHasher> {
    let claims = ["alice:100", "bob:200", "carol:300"];
    MerkleTree::new(&claims, KeccakLeafHasher).unwrap()
}

#[test]
fn sample_batch_root() {
    let tree = sample_tree();
    assert_eq!(tree.hex_root(), BATCH_ROOT);
    assert_eq!(tree.root(), Digest::from_hex(BATCH_ROOT).unwrap());
}

#[test]
fn sample_batch_leaf_digests() {
    let tree = sample_tree();
    assert_eq!(tree.leaf_digest(&"alice:100").to_hex(), ALICE_DIGEST);
    assert_eq!(tree.leaf_digest(&"bob:200").to_hex(), BOB_DIGEST);
    assert_eq!(tree.leaf_digest(&"carol:300").to_hex(), CAROL_DIGEST);
}

#[test]
fn sample_batch_proofs() {
    let tree = sample_tree();
    let root = tree.root();

    let alice = tree.proof(&"alice:100").unwrap();
    assert_eq!(alice.to_hex(), vec![BOB_DIGEST, CAROL_DIGEST]);

    let bob = tree.proof(&"bob:200").unwrap();
    assert_eq!(bob.to_hex(), vec![ALICE_DIGEST, CAROL_DIGEST]);

    let carol = tree.proof(&"carol:300").unwrap();
    assert_eq!(carol.to_hex(), vec![AB_PARENT]);

    for (claim, proof) in [("alice:100", &alice), ("bob:200", &bob), ("carol:300", &carol)] {
        assert!(verify_proof(&tree.leaf_digest(&claim), proof, &root));
    }
}

#[test]
fn five_leaf_batch_root() {
    let claims: Vec<String> = (0..5).map(|i| format!("claim-{i}")).collect();
    let tree = MerkleTree::new(&claims, KeccakLeafHasher).unwrap();
    assert_eq!(
        tree.hex_root(),
        "0x00210d89ffc2d25c830c5f2e2156c1e675b38d5d217a3910cfc181beb75f277e"
    );
}

#[test]
fn hex_parsing_accepts_prefix_and_case() {
    let canonical = Digest::from_hex(BATCH_ROOT).unwrap();
    let unprefixed = Digest::from_hex(&BATCH_ROOT[2..]).unwrap();
    let uppercase = Digest::from_hex(&BATCH_ROOT.to_uppercase().replace("0X", "0x")).unwrap();
    assert_eq!(canonical, unprefixed);
    assert_eq!(canonical, uppercase);
    assert_eq!(canonical.to_hex(), BATCH_ROOT);

    let raw: [u8; DIGEST_SIZE] = canonical.into();
    assert_eq!(Digest::from(raw), canonical);
}

#[test]
fn proof_wire_roundtrip() {
    let tree = sample_tree();
    let proof = tree.proof(&"alice:100").unwrap();

    let bytes = encode_proof(&proof);
    assert_eq!(bytes.len(), 8 + proof.len() * DIGEST_SIZE);
    assert_eq!(&bytes[..2], &PROOF_VERSION.to_le_bytes());
    assert_eq!(&bytes[2..4], &(DIGEST_SIZE as u16).to_le_bytes());

    let decoded = decode_proof(&bytes).unwrap();
    assert_eq!(decoded, proof);
    assert!(decoded.verify(&tree.leaf_digest(&"alice:100"), &tree.root()));
}

#[test]
fn proof_wire_rejects_bad_input() {
    let tree = sample_tree();
    let proof = tree.proof(&"bob:200").unwrap();
    let bytes = encode_proof(&proof);

    // Truncated payload.
    let err = decode_proof(&bytes[..bytes.len() - 1]).unwrap_err();
    assert_eq!(err, MerkleError::Serialization(SerKind::Proof));

    // Trailing garbage.
    let mut padded = bytes.clone();
    padded.push(0);
    let err = decode_proof(&padded).unwrap_err();
    assert_eq!(err, MerkleError::Serialization(SerKind::Proof));

    // Unknown version tag.
    let mut wrong_version = bytes;
    wrong_version[0] = 0xff;
    let err = decode_proof(&wrong_version).unwrap_err();
    assert_eq!(
        err,
        MerkleError::ProofVersionMismatch {
            expected: PROOF_VERSION,
            got: 0x00ff
        }
    );
}

#[test]
fn proof_wire_rejects_overstated_count() {
    // A header may claim far more siblings than the payload carries; the
    // decoder must fail cleanly instead of reserving space for them.
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&PROOF_VERSION.to_le_bytes());
    bytes.extend_from_slice(&(DIGEST_SIZE as u16).to_le_bytes());
    bytes.extend_from_slice(&u32::MAX.to_le_bytes());
    let err = decode_proof(&bytes).unwrap_err();
    assert_eq!(err, MerkleError::Serialization(SerKind::Proof));

    // Same with a short but still wrong payload behind the count.
    bytes.extend_from_slice(&[0u8; DIGEST_SIZE]);
    let err = decode_proof(&bytes).unwrap_err();
    assert_eq!(err, MerkleError::Serialization(SerKind::Proof));
}

#[test]
fn empty_proof_roundtrip() {
    let proof = Proof::new(Vec::new());
    let bytes = encode_proof(&proof);
    assert_eq!(decode_proof(&bytes).unwrap(), proof);
}
