// Copyright (c) 2018 The MasterCoin developers
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.
//

//! MasterCoin Block
//!
//! A block is a bundle of transactions with a proof-of-work attached,
//! which commits to an earlier block to form the blockchain. This
//! module describes structures and functions needed to describe
//! these blocks and the blockchain.
//!

use primitive_types::U256;

use crate::blockdata::transaction::Transaction;
use crate::consensus::encode::serialize;
use crate::hash_types::{BlockHash, TxMerkleNode};
use crate::util::hash::bitcoin_merkle_root;
use crate::util::pow::target_from_compact;

/// The hash function that identifies block headers on the network, the
/// chain's proof-of-work hash.
///
/// It belongs to the node's mining and validation code. This crate holds no
/// implementation and needs one only to check genesis blocks, see
/// [install_header_hasher](crate::chainparams::install_header_hasher).
pub trait HeaderHasher: Send + Sync {
    /// Hashes the 80-byte consensus encoding of a block header.
    fn hash_header(&self, header: &[u8]) -> BlockHash;
}

/// A block header, which contains all the block's information except
/// the actual transactions
#[derive(Copy, PartialEq, Eq, Clone, Debug, Hash)]
pub struct BlockHeader {
    /// The protocol version. Should always be 1.
    pub version: i32,
    /// Reference to the previous block in the chain
    pub prev_blockhash: BlockHash,
    /// The root hash of the merkle tree of transactions in the block
    pub merkle_root: TxMerkleNode,
    /// The timestamp of the block, as claimed by the miner
    pub time: u32,
    /// The target value below which the blockhash must lie, encoded as a
    /// a float (with well-defined rounding, of course)
    pub bits: u32,
    /// The nonce, selected to obtain a low enough blockhash
    pub nonce: u32,
}

impl_consensus_encoding!(BlockHeader, version, prev_blockhash, merkle_root, time, bits, nonce);

impl BlockHeader {
    /// The number of bytes that the block header contributes to the size of a block.
    pub const SIZE: usize = 4 + 32 + 32 + 4 + 4 + 4; // 80

    /// Returns the block hash under the network's header hash function.
    pub fn block_hash<H: HeaderHasher + ?Sized>(&self, hasher: &H) -> BlockHash {
        hasher.hash_header(&serialize(self))
    }

    /// Computes the target [0, T] that a blockhash must land in to be valid.
    /// Returns `None` for an unrepresentable compact value.
    pub fn target(&self) -> Option<U256> {
        target_from_compact(self.bits)
    }
}

/// A MasterCoin block, which is a collection of transactions with an attached
/// proof of work.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Block {
    /// The block header
    pub header: BlockHeader,
    /// List of transactions contained in the block
    pub txdata: Vec<Transaction>,
}

impl_consensus_encoding!(Block, header, txdata);

impl Block {
    /// Returns the block hash.
    pub fn block_hash<H: HeaderHasher + ?Sized>(&self, hasher: &H) -> BlockHash {
        self.header.block_hash(hasher)
    }

    /// Checks if merkle root of header matches merkle root of the transaction list.
    pub fn check_merkle_root(&self) -> bool {
        self.header.merkle_root == self.compute_merkle_root()
    }

    /// Calculate the transaction merkle root.
    pub fn compute_merkle_root(&self) -> TxMerkleNode {
        let hashes = self.txdata.iter().map(|obj| TxMerkleNode::from_hash(obj.txid().as_hash()));
        bitcoin_merkle_root(hashes)
    }

    /// Returns the coinbase transaction, if one is present.
    pub fn coinbase(&self) -> Option<&Transaction> {
        self.txdata.first()
    }
}
