//! # Merkle Tree
//!
//! Classic binary tree over transaction hashes. Each interior node is
//! `H(H(left || right))`; a level with an odd number of nodes pairs its last
//! node with itself.
//!
//! A single-leaf tree's root is the leaf. An empty tree's root is the zero
//! hash.

use shared_types::Hash;

use crate::ports::DoubleHasher;

/// A fully built Merkle tree, stored level by level from leaves to root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerkleTree {
    levels: Vec<Vec<Hash>>,
}

impl MerkleTree {
    /// Build the tree bottom-up from ordered leaf hashes.
    pub fn build<H: DoubleHasher + ?Sized>(hasher: &H, leaves: Vec<Hash>) -> Self {
        if leaves.is_empty() {
            return Self { levels: Vec::new() };
        }

        let mut levels = vec![leaves];
        while let Some(level) = levels.last().filter(|level| level.len() > 1) {
            let next = level
                .chunks(2)
                .map(|pair| {
                    let left = &pair[0];
                    let right = pair.get(1).unwrap_or(left);
                    hasher.double_hash_pair(left, right)
                })
                .collect();
            levels.push(next);
        }

        Self { levels }
    }

    /// Root hash, or zero for an empty tree.
    pub fn root(&self) -> Hash {
        self.levels
            .last()
            .and_then(|level| level.first())
            .copied()
            .unwrap_or(Hash::ZERO)
    }

    /// Number of leaves the tree was built from.
    pub fn leaf_count(&self) -> usize {
        self.levels.first().map_or(0, Vec::len)
    }

    /// Number of levels including leaves and root.
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// All levels, leaves first.
    pub fn levels(&self) -> &[Vec<Hash>] {
        &self.levels
    }
}
