use opal_accumulators::merkle_tree::{verify_proof, MerkleTree};
use sha2::{Digest, Sha512};

#[test]
fn prove_and_verify_field_sized_leaves() {
    // 32-byte leaves, the shape polynomial-evaluation vectors produce.
    let leaves: Vec<Vec<u8>> = (0..64u8).map(|i| {
        let mut leaf = vec![0u8; 32];
        leaf[31] = i;
        leaf
    }).collect();

    for index in [0u64, 1, 31, 32, 62, 63] {
        let mut tree = MerkleTree::<Sha512>::new();
        tree.set_index(index).unwrap();
        for leaf in &leaves {
            tree.push(leaf);
        }
        let (root, proof_set, idx, num_leaves) = tree.prove().unwrap();
        assert_eq!(num_leaves, 64);
        assert_eq!(proof_set[0], leaves[index as usize]);
        assert!(verify_proof::<Sha512>(&root, &proof_set, idx, num_leaves));
    }
}

#[test]
fn root_is_independent_of_proof_index() {
    let mut plain = MerkleTree::<Sha512>::new();
    let mut indexed = MerkleTree::<Sha512>::new();
    indexed.set_index(3).unwrap();
    for i in 0..16u8 {
        plain.push(&[i; 7]);
        indexed.push(&[i; 7]);
    }
    assert_eq!(plain.root(), indexed.root());

    let (root, _, _, _) = indexed.prove().unwrap();
    assert_eq!(root, plain.root());
}

#[test]
fn paths_of_neighboring_leaves_share_nodes() {
    // Everything past the first two entries of sibling proof sets is
    // identical, which is what lets a prover ship the second path as just
    // two entries.
    let mut even = MerkleTree::<Sha512>::new();
    even.set_index(6).unwrap();
    let mut odd = MerkleTree::<Sha512>::new();
    odd.set_index(7).unwrap();
    for i in 0..32u8 {
        even.push(&[i; 3]);
        odd.push(&[i; 3]);
    }
    let (_, even_set, _, _) = even.prove().unwrap();
    let (_, odd_set, _, _) = odd.prove().unwrap();
    assert_eq!(even_set[2..], odd_set[2..]);
    assert_eq!(odd_set[1], Sha512::digest(&even_set[0]).to_vec());
    assert_eq!(even_set[1], Sha512::digest(&odd_set[0]).to_vec());
}
