//! Prints the root and per-claim proofs for a small sample batch, useful when
//! exercising a verifier contract on a public test net. Pass alternative
//! claims as command line arguments to override the defaults.

use std::env;
use std::process;

use merkle_distributor::{KeccakLeafHasher, MerkleTree};

const DEFAULT_CLAIMS: [&str; 3] = ["alice:100", "bob:200", "carol:300"];

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let claims: Vec<String> = if args.is_empty() {
        DEFAULT_CLAIMS.iter().map(|claim| claim.to_string()).collect()
    } else {
        args
    };

    let tree = match MerkleTree::new(&claims, KeccakLeafHasher) {
        Ok(tree) => tree,
        Err(err) => {
            eprintln!("failed to build sample tree: {err}");
            process::exit(1);
        }
    };

    println!("leaves: {}", tree.leaf_count());
    println!("root:   {}", tree.hex_root());
    for claim in &claims {
        match tree.proof(claim) {
            Ok(proof) => {
                println!("claim {claim}");
                println!("  leaf:  {}", tree.leaf_digest(claim));
                for sibling in proof.to_hex() {
                    println!("  proof: {sibling}");
                }
            }
            Err(err) => eprintln!("claim {claim}: {err}"),
        }
    }
}
