use crate::errors::{AccumulatorError, Result};
use digest::Digest;
use std::marker::PhantomData;

/// A Merkle tree over raw byte leaves.
///
/// Leaves are hashed as `H(leaf)` and internal nodes as `H(left ∥ right)`.
/// A tree whose leaf count is not a power of two is split at the largest
/// power of two strictly below its size, so the left subtree is always
/// perfect and the leftover leaves cascade to the right.
///
/// Proof sets are laid out as `[leaf ∥ node_1 ∥ … ∥ node_k]`, where the leaf
/// is stored *unhashed* and `node_1` is the hash of the leaf's sibling
/// subtree. This layout lets a prover that opens two sibling leaves ship the
/// second path as just two entries: the sibling's raw leaf and the hash of
/// the first leaf.
pub struct MerkleTree<D: Digest> {
    leaves: Vec<Vec<u8>>,
    proof_index: Option<u64>,
    _hash: PhantomData<D>,
}

impl<D: Digest> Default for MerkleTree<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Digest> MerkleTree<D> {
    /// Return an empty tree.
    pub fn new() -> Self {
        Self {
            leaves: vec![],
            proof_index: None,
            _hash: PhantomData,
        }
    }

    /// Choose the leaf index a later [`Self::prove`] call will open.
    /// Must be called before the first [`Self::push`].
    pub fn set_index(&mut self, index: u64) -> Result<()> {
        if !self.leaves.is_empty() {
            return Err(AccumulatorError::IndexSetOnNonEmptyTree);
        }
        self.proof_index = Some(index);
        Ok(())
    }

    /// Append a leaf. The bytes are stored as given; hashing happens when
    /// the root or a proof is computed.
    pub fn push(&mut self, leaf: &[u8]) {
        self.leaves.push(leaf.to_vec());
    }

    /// Return the number of leaves.
    pub fn num_leaves(&self) -> u64 {
        self.leaves.len() as u64
    }

    /// Return the root of the tree, or an empty vector if no leaf was
    /// pushed.
    pub fn root(&self) -> Vec<u8> {
        if self.leaves.is_empty() {
            return vec![];
        }
        subtree_root::<D>(&self.leaves)
    }

    /// Build the opening proof for the index chosen with [`Self::set_index`].
    /// Returns `(root, proof_set, index, num_leaves)`.
    pub fn prove(&self) -> Result<(Vec<u8>, Vec<Vec<u8>>, u64, u64)> {
        let index = self.proof_index.ok_or(AccumulatorError::IndexNotSet)?;
        if self.leaves.is_empty() {
            return Err(AccumulatorError::EmptyTree);
        }
        if index >= self.leaves.len() as u64 {
            return Err(AccumulatorError::IndexOutOfRange);
        }

        let mut proof_set = vec![self.leaves[index as usize].clone()];
        push_siblings::<D>(&self.leaves, index as usize, &mut proof_set);

        Ok((
            self.root(),
            proof_set,
            index,
            self.leaves.len() as u64,
        ))
    }
}

/// Verify that `proof_set` opens the leaf at `index` of a tree with
/// `num_leaves` leaves and the given root.
pub fn verify_proof<D: Digest>(
    root: &[u8],
    proof_set: &[Vec<u8>],
    index: u64,
    num_leaves: u64,
) -> bool {
    if proof_set.is_empty() || num_leaves == 0 || index >= num_leaves {
        return false;
    }

    // Walk down the tree to record on which side of each split the leaf
    // sits, then fold the proof set back up in reverse order.
    let mut sides = Vec::new();
    let mut n = num_leaves;
    let mut idx = index;
    while n > 1 {
        let split = split_point(n);
        if idx < split {
            sides.push(true); // running hash is the left child
            n = split;
        } else {
            sides.push(false);
            idx -= split;
            n -= split;
        }
    }

    if proof_set.len() != sides.len() + 1 {
        return false;
    }

    let mut sum = D::digest(&proof_set[0]).to_vec();
    for (height, left) in sides.iter().rev().enumerate() {
        let sibling = &proof_set[height + 1];
        sum = if *left {
            node_sum::<D>(&sum, sibling)
        } else {
            node_sum::<D>(sibling, &sum)
        };
    }

    sum == root
}

/// The size of the left subtree: the largest power of two strictly below
/// `n`, or `n/2` when `n` is itself a power of two. `n` must be at least 2.
fn split_point(n: u64) -> u64 {
    if n.is_power_of_two() {
        n / 2
    } else {
        n.next_power_of_two() / 2
    }
}

fn node_sum<D: Digest>(left: &[u8], right: &[u8]) -> Vec<u8> {
    let mut h = D::new();
    h.update(left);
    h.update(right);
    h.finalize().to_vec()
}

fn subtree_root<D: Digest>(leaves: &[Vec<u8>]) -> Vec<u8> {
    if leaves.len() == 1 {
        return D::digest(&leaves[0]).to_vec();
    }
    let split = split_point(leaves.len() as u64) as usize;
    node_sum::<D>(
        &subtree_root::<D>(&leaves[..split]),
        &subtree_root::<D>(&leaves[split..]),
    )
}

/// Collect the sibling subtree roots along the path to `index`, bottom-up.
fn push_siblings<D: Digest>(leaves: &[Vec<u8>], index: usize, proof_set: &mut Vec<Vec<u8>>) {
    if leaves.len() == 1 {
        return;
    }
    let split = split_point(leaves.len() as u64) as usize;
    if index < split {
        push_siblings::<D>(&leaves[..split], index, proof_set);
        proof_set.push(subtree_root::<D>(&leaves[split..]));
    } else {
        push_siblings::<D>(&leaves[split..], index - split, proof_set);
        proof_set.push(subtree_root::<D>(&leaves[..split]));
    }
}
