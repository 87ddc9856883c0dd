// Copyright (c) 2018 The MasterCoin developers
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.
//

//! Blockdata constants
//!
//! This module provides various constants relating to the blockchain and
//! consensus code. In particular, it defines the genesis block and its
//! single transaction, and the check that rebuilding them reproduces the
//! known-good hashes.
//!

use std::default::Default;

use hashes::hex::FromHex;
use log::info;

use crate::blockdata::block::{Block, BlockHeader, HeaderHasher};
use crate::blockdata::script;
use crate::blockdata::transaction::{OutPoint, Transaction, TxIn, TxOut};
use crate::consensus::params::Error;
use crate::hash_types::{BlockHash, TxMerkleNode};
use crate::network::constants::Network;

/// The maximum allowable sequence number
pub const MAX_SEQUENCE: u32 = 0xFFFFFFFF;

/// Everything needed to rebuild a network's genesis block, together with
/// the hashes the rebuilt block must reproduce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenesisDescriptor {
    /// Block and transaction version
    pub version: i32,
    /// Block timestamp
    pub time: u32,
    /// Compact difficulty target
    pub bits: u32,
    /// Proof-of-work nonce
    pub nonce: u32,
    /// Timestamp of the coinbase transaction
    pub coinbase_time: u32,
    /// Proof-of-publication message pushed by the coinbase input
    pub coinbase_message: &'static str,
    /// Extra nonce pushed ahead of the message
    pub extra_nonce: i64,
    /// Expected block hash, in display (byte-reversed) hex
    pub hash: &'static str,
    /// Expected merkle root, in display (byte-reversed) hex
    pub merkle_root: &'static str,
}

/// Genesis of the main network. The test network starts from the same block.
pub const MAINNET_GENESIS: GenesisDescriptor = GenesisDescriptor {
    version: 1,
    time: 1535272500,
    bits: 0x1e0fffff,
    nonce: 232488,
    coinbase_time: 1535272500,
    coinbase_message: "MasterCoinV2 on new codebase. Today is 25 June 2018.",
    extra_nonce: 42,
    hash: "00000da06cd87b66c2dd4f8df68031815af3297c713e962f72af0349d53216d1",
    merkle_root: "90b203507a78c709e29cbadd7854979fdf16a95ce29c51dbd1665d3354f3134e",
};

impl GenesisDescriptor {
    /// Returns the descriptor of `network`'s genesis block.
    pub fn for_network(network: Network) -> GenesisDescriptor {
        match network {
            Network::Main | Network::Testnet => MAINNET_GENESIS,
        }
    }

    /// Constructs the coinbase (and only) transaction of the genesis block.
    pub fn coinbase(&self) -> Transaction {
        // Base
        let mut ret = Transaction {
            version: self.version,
            time: self.coinbase_time,
            lock_time: 0,
            input: vec![],
            output: vec![],
        };

        // Inputs
        let in_script = script::Builder::new().push_int(0)
                                              .push_scriptint(self.extra_nonce)
                                              .push_slice(self.coinbase_message.as_bytes())
                                              .into_script();
        ret.input.push(TxIn {
            previous_output: OutPoint::null(),
            script_sig: in_script,
            sequence: MAX_SEQUENCE,
        });

        // Outputs
        ret.output.push(TxOut::empty());

        // end
        ret
    }

    /// Assembles the genesis block. The merkle root is computed from the
    /// coinbase, never taken from the descriptor.
    pub fn block(&self) -> Block {
        let txdata = vec![self.coinbase()];
        let mut block = Block {
            header: BlockHeader {
                version: self.version,
                prev_blockhash: Default::default(),
                merkle_root: Default::default(),
                time: self.time,
                bits: self.bits,
                nonce: self.nonce,
            },
            txdata,
        };
        block.header.merkle_root = block.compute_merkle_root();
        block
    }

    /// The expected block hash.
    pub fn expected_hash(&self) -> Result<BlockHash, Error> {
        Ok(BlockHash::from_hex(self.hash)?)
    }

    /// The expected merkle root.
    pub fn expected_merkle_root(&self) -> Result<TxMerkleNode, Error> {
        Ok(TxMerkleNode::from_hex(self.merkle_root)?)
    }

    /// Assembles the genesis block and checks it against the expected
    /// merkle root and, under `hasher`, the expected block hash. A mismatch
    /// means the binary's constants or hashing are inconsistent and the
    /// node must not start.
    pub fn verify<H: HeaderHasher + ?Sized>(&self, hasher: &H) -> Result<Block, Error> {
        let block = self.block();

        let expected_root = self.expected_merkle_root()?;
        if block.header.merkle_root != expected_root {
            return Err(Error::GenesisMerkleRootMismatch {
                expected: expected_root,
                computed: block.header.merkle_root,
            });
        }

        let expected_hash = self.expected_hash()?;
        let hash = block.block_hash(hasher);
        if hash != expected_hash {
            return Err(Error::GenesisHashMismatch {
                expected: expected_hash,
                computed: hash,
            });
        }

        info!("genesis block {} verified (merkle root {})", hash, expected_root);
        Ok(block)
    }
}

/// Constructs and returns the genesis block of `network`
pub fn genesis_block(network: Network) -> Block {
    GenesisDescriptor::for_network(network).block()
}

#[cfg(test)]
mod test {
    use hex::decode as hex_decode;

    use crate::blockdata::constants::{genesis_block, GenesisDescriptor, MAINNET_GENESIS, MAX_SEQUENCE};
    use crate::consensus::encode::serialize;
    use crate::consensus::params::Error;
    use crate::network::constants::Network;
    use crate::test_helpers::{KnownHeaders, Sha256dHeaders, MAINNET_GENESIS_HEADER};

    #[test]
    fn mainnet_genesis_first_transaction() {
        let gen = MAINNET_GENESIS.coinbase();

        assert_eq!(gen.version, 1);
        assert_eq!(gen.time, 1535272500);
        assert_eq!(gen.input.len(), 1);
        assert_eq!(gen.input[0].previous_output.txid, Default::default());
        assert_eq!(gen.input[0].previous_output.vout, 0xFFFFFFFF);
        assert_eq!(serialize(&gen.input[0].script_sig),
                   hex_decode("3800012a344d6173746572436f696e5632206f6e206e657720636f6465626173652e20546f646179206973203235204a756e6520323031382e").unwrap());

        assert_eq!(gen.input[0].sequence, MAX_SEQUENCE);
        assert_eq!(gen.output.len(), 1);
        assert!(gen.output[0].is_empty());
        assert_eq!(gen.lock_time, 0);

        assert_eq!(serialize(&gen),
                   hex_decode("010000003466825b010000000000000000000000000000000000000000000000000000000000000000ffffffff3800012a344d6173746572436f696e5632206f6e206e657720636f6465626173652e20546f646179206973203235204a756e6520323031382effffffff0100000000000000000000000000").unwrap());
        assert_eq!(format!("{:x}", gen.txid()),
                   "90b203507a78c709e29cbadd7854979fdf16a95ce29c51dbd1665d3354f3134e".to_string());
    }

    #[test]
    fn mainnet_genesis_full_block() {
        let gen = genesis_block(Network::Main);

        assert_eq!(gen.header.version, 1);
        assert_eq!(gen.header.prev_blockhash, Default::default());
        assert_eq!(format!("{:x}", gen.header.merkle_root),
                   "90b203507a78c709e29cbadd7854979fdf16a95ce29c51dbd1665d3354f3134e".to_string());
        assert_eq!(gen.header.time, 1535272500);
        assert_eq!(gen.header.bits, 0x1e0fffff);
        assert_eq!(gen.header.nonce, 232488);
        assert_eq!(serialize(&gen.header), hex_decode(MAINNET_GENESIS_HEADER).unwrap());
        assert_eq!(
            format!("{:x}", MAINNET_GENESIS.expected_hash().unwrap()),
            "00000da06cd87b66c2dd4f8df68031815af3297c713e962f72af0349d53216d1".to_string()
        );
    }

    #[test]
    fn testnet_shares_mainnet_genesis() {
        assert_eq!(genesis_block(Network::Testnet), genesis_block(Network::Main));
    }

    #[test]
    fn every_network_genesis_verifies() {
        for network in [Network::Main, Network::Testnet].iter() {
            let descriptor = GenesisDescriptor::for_network(*network);
            let block = descriptor.verify(&KnownHeaders::published()).unwrap();
            assert_eq!(block.block_hash(&KnownHeaders::published()), descriptor.expected_hash().unwrap());
            assert_eq!(block.header.merkle_root, descriptor.expected_merkle_root().unwrap());
            assert!(block.check_merkle_root());
        }
    }

    #[test]
    fn altered_descriptor_is_rejected() {
        let hasher = KnownHeaders::published();
        let wrong_nonce = GenesisDescriptor { nonce: 232489, ..MAINNET_GENESIS };
        match wrong_nonce.verify(&hasher) {
            Err(Error::GenesisHashMismatch { expected, computed }) => {
                assert_eq!(expected, MAINNET_GENESIS.expected_hash().unwrap());
                assert_ne!(expected, computed);
            }
            other => panic!("unexpected result {:?}", other),
        }

        let wrong_message = GenesisDescriptor { coinbase_message: "MasterCoinV2", ..MAINNET_GENESIS };
        assert!(matches!(wrong_message.verify(&hasher), Err(Error::GenesisMerkleRootMismatch { .. })));

        let bad_constant = GenesisDescriptor { hash: "zz", ..MAINNET_GENESIS };
        assert!(matches!(bad_constant.verify(&hasher), Err(Error::Hex(_))));
    }

    #[test]
    fn double_sha256_does_not_reproduce_genesis_hash() {
        match MAINNET_GENESIS.verify(&Sha256dHeaders) {
            Err(Error::GenesisHashMismatch { expected, computed }) => {
                assert_eq!(format!("{:x}", expected),
                           "00000da06cd87b66c2dd4f8df68031815af3297c713e962f72af0349d53216d1");
                assert_eq!(format!("{:x}", computed),
                           "2fd312186dc4a97d5e9f354cf4f63bbdeea5ec27621d274aee149e88b48bc8b8");
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn genesis_hash_matches_first_checkpoint() {
        let checkpoint = crate::checkpoints::MAINNET_CHECKPOINTS[0];
        assert_eq!(checkpoint, (0, MAINNET_GENESIS.hash));
    }
}
