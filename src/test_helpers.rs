// Copyright (c) 2018 The MasterCoin developers
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.

//! Internal helper functions for unit tests
//!
//!

use std::collections::HashMap;

use hashes::Hash;
use hashes::hex::FromHex;

use crate::blockdata::block::HeaderHasher;
use crate::chainparams;
use crate::checkpoints::{BlockIndexNode, ChainIndex};
use crate::hash_types::BlockHash;

/// Encoded header of the main network genesis block.
pub const MAINNET_GENESIS_HEADER: &str = "0100000000000000000000000000000000000000000000000000000000000000000000004e13f354335d66d1db519ce25ca916df9f975478ddba9ce209c7787a5003b2903466825bffff0f1e288c0300";

/// Published hash of [MAINNET_GENESIS_HEADER].
pub const MAINNET_GENESIS_HASH: &str = "00000da06cd87b66c2dd4f8df68031815af3297c713e962f72af0349d53216d1";

/// Header hasher answering from a table of published header hashes.
/// Headers outside the table get their double SHA256, so distinct headers
/// still hash apart.
pub struct KnownHeaders(HashMap<Vec<u8>, BlockHash>);

impl KnownHeaders {
    /// Knows the main network genesis header.
    pub fn published() -> KnownHeaders {
        let mut table = HashMap::new();
        table.insert(Vec::from_hex(MAINNET_GENESIS_HEADER).unwrap(),
                     BlockHash::from_hex(MAINNET_GENESIS_HASH).unwrap());
        KnownHeaders(table)
    }
}

impl HeaderHasher for KnownHeaders {
    fn hash_header(&self, header: &[u8]) -> BlockHash {
        self.0.get(header).copied().unwrap_or_else(|| BlockHash::hash(header))
    }
}

/// Double SHA256 of the header, which is not how the network hashes headers.
pub struct Sha256dHeaders;

impl HeaderHasher for Sha256dHeaders {
    fn hash_header(&self, header: &[u8]) -> BlockHash {
        BlockHash::hash(header)
    }
}

/// Makes [KnownHeaders] the registry's header hasher. Unit tests share the
/// process, so every test reading the registry calls this first.
pub fn install_known_headers() {
    let _ = chainparams::install_header_hasher(KnownHeaders::published());
}

/// Deterministic stand-in block hash for `height`.
pub fn synthetic_hash(height: u32) -> BlockHash {
    BlockHash::hash(&height.to_le_bytes())
}

/// A block index held in memory, a single chain from genesis to tip.
#[derive(Default)]
pub struct MemoryChain {
    nodes: HashMap<BlockHash, BlockIndexNode>,
    by_height: Vec<BlockHash>,
}

impl MemoryChain {
    pub fn new() -> MemoryChain {
        MemoryChain::default()
    }

    /// Chain of `length` blocks with synthetic hashes, heights 0..length.
    pub fn with_length(length: u32) -> MemoryChain {
        let mut chain = MemoryChain::new();
        for height in 0..length {
            chain.push(synthetic_hash(height));
        }
        chain
    }

    /// Chain of `length` blocks whose genesis hashes to `genesis`.
    pub fn from_genesis(genesis: BlockHash, length: u32) -> MemoryChain {
        let mut chain = MemoryChain::new();
        chain.push(genesis);
        for height in 1..length {
            chain.push(synthetic_hash(height));
        }
        chain
    }

    /// Appends a block on top of the tip.
    pub fn push(&mut self, block_hash: BlockHash) -> BlockIndexNode {
        let node = BlockIndexNode {
            height: self.by_height.len() as u32,
            block_hash,
            prev_blockhash: self.by_height.last().copied(),
        };
        self.nodes.insert(block_hash, node);
        self.by_height.push(block_hash);
        node
    }

    /// Drops every block below `height`, leaving a partially populated index.
    pub fn forget_below(&mut self, height: u32) {
        for hash in self.by_height.iter().take(height as usize) {
            self.nodes.remove(hash);
        }
    }

    pub fn hash_at(&self, height: u32) -> BlockHash {
        self.by_height[height as usize]
    }

    pub fn node_at(&self, height: u32) -> Option<BlockIndexNode> {
        self.by_height.get(height as usize).and_then(|hash| self.lookup(hash))
    }
}

impl ChainIndex for MemoryChain {
    fn best_tip(&self) -> Option<BlockIndexNode> {
        self.by_height.last().and_then(|hash| self.lookup(hash))
    }

    fn lookup(&self, hash: &BlockHash) -> Option<BlockIndexNode> {
        self.nodes.get(hash).copied()
    }
}
