// Copyright (c) 2018 The MasterCoin developers
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.
//

//! Checkpoints
//!
//! Hardened checkpoints pin the block hash at a few heights of the canonical
//! chain; a block contradicting one is permanently invalid on its network.
//! The sync checkpoint is re-derived from the best tip, [CHECKPOINT_SPAN]
//! blocks back, and bounds how deep a reorganization may reach.
//!
//! The block index itself belongs to the caller and is only read here,
//! through [ChainIndex].
//!

use std::collections::BTreeMap;

use hashes::hex::FromHex;
use log::{debug, warn};
use once_cell::sync::OnceCell;

use crate::chainparams;
use crate::consensus::params::Error;
use crate::hash_types::BlockHash;
use crate::network::constants::Network;

/// How many blocks behind the best tip the sync checkpoint sits.
pub const CHECKPOINT_SPAN: u32 = 5000;

/// Hardened checkpoints of the main network, as (height, block hash).
pub const MAINNET_CHECKPOINTS: &[(u32, &str)] = &[
    (0, "00000da06cd87b66c2dd4f8df68031815af3297c713e962f72af0349d53216d1"),
    (1, "00000db4be834e9b5615c7d57d463d31c9ac97e22166f763444b6e54164bb3dd"),
    (2, "00000f55632d78f57adaf4b54df8dbb092d219379ebbdd4e99e637cf0cc7ad95"),
    (3, "0000021bfb7dfa609fca2f3d29344c25bc69c175819174b46fd70b83fffa939b"),
    (4, "000004ecb20ca01864ac45d4e4a64507ccde88a6e6e75daac1639382c45d1163"),
    (5, "000001c2b69925e76f5d1c3e4f398bce88ce08adcbeca54209578ea60cb09047"),
    (6, "000004031be3dec954b5aef07af663d80793e1d8d0e096c452004a7416f16b23"),
    (7, "00000189c84b75c6adc4bb8b8c5bc47e36bd9787215f10ca22bebc381e8f373d"),
    (8, "000001181add9211ef50b27835a2cd5c3df9c0bf818dba70ed45170d687f314f"),
    (9, "000000ac3cf05cbcc090fdeb8f25b7c41fd0f439842ddf35260ca7cab969173f"),
];

static MAINNET: OnceCell<Checkpoints> = OnceCell::new();
static TESTNET: OnceCell<Checkpoints> = OnceCell::new();

/// Hardened checkpoints of `network`, parsed on first call. The test
/// network has none.
pub fn for_network(network: Network) -> Result<&'static Checkpoints, Error> {
    match network {
        Network::Main => MAINNET.get_or_try_init(|| Checkpoints::from_table(MAINNET_CHECKPOINTS)),
        Network::Testnet => TESTNET.get_or_try_init(|| Ok(Checkpoints::default())),
    }
}

/// A block as seen through the block index.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BlockIndexNode {
    /// Height in the chain; genesis is 0
    pub height: u32,
    /// Hash of the block
    pub block_hash: BlockHash,
    /// Hash of the parent, `None` for genesis
    pub prev_blockhash: Option<BlockHash>,
}

/// Read access to the node's block index.
pub trait ChainIndex {
    /// The current best tip, `None` while the index is empty.
    fn best_tip(&self) -> Option<BlockIndexNode>;

    /// Looks a block up by hash.
    fn lookup(&self, hash: &BlockHash) -> Option<BlockIndexNode>;

    /// The parent of `node`, if it is in the index.
    fn previous(&self, node: &BlockIndexNode) -> Option<BlockIndexNode> {
        node.prev_blockhash.as_ref().and_then(|hash| self.lookup(hash))
    }
}

/// Hardened checkpoints of one network, ordered by height.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Checkpoints(BTreeMap<u32, BlockHash>);

impl Checkpoints {
    /// Parses a literal (height, hex hash) table.
    pub fn from_table(table: &[(u32, &str)]) -> Result<Checkpoints, Error> {
        let mut entries = Vec::with_capacity(table.len());
        for &(height, hash) in table {
            entries.push((height, BlockHash::from_hex(hash)?));
        }
        Checkpoints::from_hashes(entries)
    }

    /// Builds the table from entries given in strictly increasing height order.
    pub fn from_hashes<I>(entries: I) -> Result<Checkpoints, Error>
    where
        I: IntoIterator<Item = (u32, BlockHash)>,
    {
        let mut map = BTreeMap::new();
        let mut previous: Option<u32> = None;
        for (height, hash) in entries {
            if let Some(previous) = previous {
                if height <= previous {
                    return Err(Error::NonIncreasingCheckpoint { previous, height });
                }
            }
            map.insert(height, hash);
            previous = Some(height);
        }
        Ok(Checkpoints(map))
    }

    /// Whether a block with `hash` may sit at `height`. Heights without a
    /// checkpoint accept any hash.
    pub fn check_hardened(&self, height: u32, hash: &BlockHash) -> bool {
        match self.0.get(&height) {
            None => true,
            Some(expected) if expected == hash => true,
            Some(expected) => {
                warn!("block {} at height {} contradicts checkpoint {}", hash, height, expected);
                false
            }
        }
    }

    /// Height of the highest checkpoint, 0 without checkpoints.
    pub fn total_blocks_estimate(&self) -> u32 {
        self.0.keys().next_back().copied().unwrap_or(0)
    }

    /// The highest checkpoint already present in `index`.
    pub fn last_checkpoint<I: ChainIndex + ?Sized>(&self, index: &I) -> Option<BlockIndexNode> {
        self.0.values().rev().find_map(|hash| index.lookup(hash))
    }

    /// The checkpointed hash at `height`.
    pub fn get(&self, height: u32) -> Option<BlockHash> {
        self.0.get(&height).copied()
    }

    /// Iterates over (height, hash) in increasing height order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, BlockHash)> + '_ {
        self.0.iter().map(|(height, hash)| (*height, *hash))
    }

    /// Number of checkpoints.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no checkpoints.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Walks back from `tip` to the sync checkpoint: the first ancestor at least
/// [CHECKPOINT_SPAN] blocks below `tip`, or the oldest ancestor the index
/// holds if the chain is shorter than that.
pub fn auto_select_sync_checkpoint<I: ChainIndex + ?Sized>(index: &I, tip: &BlockIndexNode) -> BlockIndexNode {
    let mut node = *tip;
    while node.height.saturating_add(CHECKPOINT_SPAN) > tip.height {
        match index.previous(&node) {
            Some(prev) => node = prev,
            None => break,
        }
    }
    debug!("sync checkpoint {} at height {} for tip at height {}", node.block_hash, node.height, tip.height);
    node
}

/// Whether a block at `height` lies above the sync checkpoint of the
/// current best tip. An empty index has no sync checkpoint.
pub fn check_sync<I: ChainIndex + ?Sized>(index: &I, height: u32) -> bool {
    let tip = match index.best_tip() {
        Some(tip) => tip,
        None => return true,
    };
    let sync = auto_select_sync_checkpoint(index, &tip);
    if height <= sync.height {
        warn!("refusing block at height {}: at or below sync checkpoint at height {}", height, sync.height);
        return false;
    }
    true
}

/// Checkpoints of the active network.
///
/// # Panics
///
/// When the network's checkpoint table is malformed.
fn active() -> &'static Checkpoints {
    let network = chainparams::selected_network();
    match for_network(network) {
        Ok(checkpoints) => checkpoints,
        Err(e) => panic!("{} checkpoint table is malformed: {}", network, e),
    }
}

/// [Checkpoints::check_hardened] against the active network.
pub fn check_hardened(height: u32, hash: &BlockHash) -> bool {
    active().check_hardened(height, hash)
}

/// [Checkpoints::total_blocks_estimate] of the active network.
pub fn total_blocks_estimate() -> u32 {
    active().total_blocks_estimate()
}

/// [Checkpoints::last_checkpoint] of the active network.
pub fn last_checkpoint<I: ChainIndex + ?Sized>(index: &I) -> Option<BlockIndexNode> {
    active().last_checkpoint(index)
}
