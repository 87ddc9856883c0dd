// Copyright (c) 2018 The MasterCoin developers
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.
//

//! Consensus parameters
//!
//! This module provides the predefined set of parameters of each network.
//! The test network is the main network with a handful of fields
//! overridden; every other field is inherited as is.
//!

use std::{error, fmt};

use hashes::hex::{self, FromHex};
use log::debug;
use primitive_types::U256;
use secp256k1::PublicKey;

use crate::blockdata::block::{Block, HeaderHasher};
use crate::blockdata::constants::GenesisDescriptor;
use crate::checkpoints::{self, Checkpoints};
use crate::hash_types::{BlockHash, TxMerkleNode};
use crate::network::address::Address;
use crate::network::constants::Network;
use crate::network::seeds::{self, DnsSeed};
use crate::util::base58;
use crate::util::pow::pow_limit;

const MAINNET_ALERT_KEY: &str = "04e0f2d55652f65432f06ec097dd0362e98a32505238199f8b2b36ba75239e68ff42a193c908ac672064ca6747ca9e20bfb7181fd360fbc1594964b95881f497a7";
const TESTNET_ALERT_KEY: &str = "04c2866e141665f47eaf958665276333bab6ffb13f7fd05db01fc494ad3fcc89f26a273a9604e1157fbd2180f80ea6be7c243855eb42d93b82882fa3d452696918";

/// Configuration fault found while building a network's parameters.
///
/// Any of these means the binary's constants are inconsistent; the node
/// must not start on the affected network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The assembled genesis block does not hash to the expected value
    GenesisHashMismatch {
        /// Hash the constants claim
        expected: BlockHash,
        /// Hash of the assembled block
        computed: BlockHash,
    },
    /// The assembled genesis block has an unexpected merkle root
    GenesisMerkleRootMismatch {
        /// Root the constants claim
        expected: TxMerkleNode,
        /// Root of the assembled transaction list
        computed: TxMerkleNode,
    },
    /// Genesis difficulty bits decode to a target above the proof-of-work limit
    GenesisTargetAboveLimit {
        /// Compact target of the genesis header
        bits: u32,
    },
    /// The alert public key is not a valid curve point
    InvalidAlertKey(secp256k1::Error),
    /// The pool dummy address is not valid base58check
    InvalidPoolAddress(base58::Error),
    /// Checkpoint heights must be strictly increasing
    NonIncreasingCheckpoint {
        /// Height of the preceding entry
        previous: u32,
        /// Offending height
        height: u32,
    },
    /// A hardcoded hash or key is not valid hex
    Hex(hex::Error),
    /// No block header hash function is installed, so the genesis block
    /// cannot be verified
    MissingHeaderHasher,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::GenesisHashMismatch { expected, computed } => {
                write!(f, "genesis block hash {} does not match expected {}", computed, expected)
            }
            Error::GenesisMerkleRootMismatch { expected, computed } => {
                write!(f, "genesis merkle root {} does not match expected {}", computed, expected)
            }
            Error::GenesisTargetAboveLimit { bits } => {
                write!(f, "genesis target {:#010x} exceeds the proof-of-work limit", bits)
            }
            Error::InvalidAlertKey(ref e) => write!(f, "invalid alert public key: {}", e),
            Error::InvalidPoolAddress(ref e) => write!(f, "invalid pool dummy address: {}", e),
            Error::NonIncreasingCheckpoint { previous, height } => {
                write!(f, "checkpoint at height {} does not follow height {}", height, previous)
            }
            Error::Hex(ref e) => write!(f, "invalid hex constant: {}", e),
            Error::MissingHeaderHasher => {
                f.write_str("no block header hash function installed, cannot verify the genesis block")
            }
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::InvalidAlertKey(ref e) => Some(e),
            Error::InvalidPoolAddress(ref e) => Some(e),
            Error::Hex(ref e) => Some(e),
            Error::GenesisHashMismatch { .. }
            | Error::GenesisMerkleRootMismatch { .. }
            | Error::GenesisTargetAboveLimit { .. }
            | Error::NonIncreasingCheckpoint { .. }
            | Error::MissingHeaderHasher => None,
        }
    }
}

#[doc(hidden)]
impl From<hex::Error> for Error {
    fn from(e: hex::Error) -> Error {
        Error::Hex(e)
    }
}

#[doc(hidden)]
impl From<secp256k1::Error> for Error {
    fn from(e: secp256k1::Error) -> Error {
        Error::InvalidAlertKey(e)
    }
}

#[doc(hidden)]
impl From<base58::Error> for Error {
    fn from(e: base58::Error) -> Error {
        Error::InvalidPoolAddress(e)
    }
}

/// The kinds of data that get a network-specific base58 prefix.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Base58Type {
    /// Pay-to-pubkey-hash address
    PubkeyAddress,
    /// Pay-to-script-hash address
    ScriptAddress,
    /// Private key in wallet import format
    SecretKey,
    /// Stealth address
    StealthAddress,
    /// BIP32 extended public key
    ExtPublicKey,
    /// BIP32 extended private key
    ExtSecretKey,
}

impl Base58Type {
    /// Every address kind
    pub const ALL: [Base58Type; 6] = [
        Base58Type::PubkeyAddress,
        Base58Type::ScriptAddress,
        Base58Type::SecretKey,
        Base58Type::StealthAddress,
        Base58Type::ExtPublicKey,
        Base58Type::ExtSecretKey,
    ];
}

/// Byte prefix of each [Base58Type] on one network.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Base58Prefixes {
    /// Prefix of [Base58Type::PubkeyAddress]
    pub pubkey_address: &'static [u8],
    /// Prefix of [Base58Type::ScriptAddress]
    pub script_address: &'static [u8],
    /// Prefix of [Base58Type::SecretKey]
    pub secret_key: &'static [u8],
    /// Prefix of [Base58Type::StealthAddress]
    pub stealth_address: &'static [u8],
    /// Prefix of [Base58Type::ExtPublicKey]
    pub ext_public_key: &'static [u8],
    /// Prefix of [Base58Type::ExtSecretKey]
    pub ext_secret_key: &'static [u8],
}

impl Base58Prefixes {
    /// Returns the prefix of `kind`.
    pub fn get(&self, kind: Base58Type) -> &'static [u8] {
        match kind {
            Base58Type::PubkeyAddress => self.pubkey_address,
            Base58Type::ScriptAddress => self.script_address,
            Base58Type::SecretKey => self.secret_key,
            Base58Type::StealthAddress => self.stealth_address,
            Base58Type::ExtPublicKey => self.ext_public_key,
            Base58Type::ExtSecretKey => self.ext_secret_key,
        }
    }
}

#[derive(Debug, Clone)]
/// Parameters that influence chain consensus.
pub struct Params {
    /// Network for which parameters are valid.
    pub network: Network,
    /// Message start bytes of every wire message.
    pub magic: [u8; 4],
    /// Key that signs network alerts.
    pub alert_pubkey: PublicKey,
    /// Default P2P port.
    pub default_port: u16,
    /// Default RPC port.
    pub rpc_port: u16,
    /// Highest (easiest) proof-of-work target accepted.
    pub pow_limit: U256,
    /// The genesis block, verified at construction.
    pub genesis: Block,
    /// Hash of [Params::genesis].
    pub genesis_hash: BlockHash,
    /// Base58 prefix table.
    pub base58_prefixes: Base58Prefixes,
    /// DNS bootstrap seeds, in query order.
    pub dns_seeds: Vec<DnsSeed>,
    /// Hardcoded bootstrap peers, with aged timestamps.
    pub fixed_seeds: Vec<Address>,
    /// Hardened checkpoints.
    pub checkpoints: Checkpoints,
    /// Sub-directory of the data directory; empty on the main network.
    pub data_dir: &'static str,
    /// Last height at which proof-of-work blocks are accepted.
    pub last_pow_block: u32,
    /// First height of proof-of-stake.
    pub pos_start_block: u32,
    /// First height paying masternodes.
    pub masternode_payment_start_block: u32,
    /// Transactions per mixing pool session.
    pub pool_max_transactions: u32,
    /// Placeholder address of the mixing pool.
    pub pool_dummy_address: &'static str,
}

impl Params {
    /// Creates parameters set for the given network.
    ///
    /// Assembles the genesis block and verifies it, hashing its header with
    /// `hasher`, so an error here is an unrecoverable configuration fault.
    pub fn new<H: HeaderHasher + ?Sized>(network: Network, hasher: &H) -> Result<Params, Error> {
        let params = match network {
            Network::Main => Params::mainnet(hasher)?,
            Network::Testnet => Params::testnet(hasher)?,
        };
        params.check_consistency()?;
        debug!("built {} parameters: genesis {}, {} checkpoints, {} fixed seeds",
               network, params.genesis_hash, params.checkpoints.len(), params.fixed_seeds.len());
        Ok(params)
    }

    fn mainnet<H: HeaderHasher + ?Sized>(hasher: &H) -> Result<Params, Error> {
        let genesis = GenesisDescriptor::for_network(Network::Main).verify(hasher)?;
        let default_port = 16000;
        Ok(Params {
            network: Network::Main,
            magic: [0x1c, 0x2a, 0xd3, 0x1e],
            alert_pubkey: parse_pubkey(MAINNET_ALERT_KEY)?,
            default_port,
            rpc_port: 15000,
            pow_limit: pow_limit(20),
            genesis_hash: genesis.block_hash(hasher),
            genesis,
            base58_prefixes: Base58Prefixes {
                pubkey_address: &[110],
                script_address: &[85],
                secret_key: &[153],
                stealth_address: &[40],
                ext_public_key: &[0x04, 0x88, 0xB2, 0x1E],
                ext_secret_key: &[0x04, 0x88, 0xAD, 0xE4],
            },
            dns_seeds: seeds::MAINNET_DNS_SEEDS.to_vec(),
            fixed_seeds: seeds::convert_seeds_now(seeds::MAINNET_FIXED_SEEDS, default_port),
            checkpoints: checkpoints::for_network(Network::Main)?.clone(),
            data_dir: "",
            last_pow_block: 5000,
            pos_start_block: 100,
            masternode_payment_start_block: 100,
            pool_max_transactions: 3,
            pool_dummy_address: "mSMi85DAQTLwHpTGAifncdSu7eovVXepc4",
        })
    }

    fn testnet<H: HeaderHasher + ?Sized>(hasher: &H) -> Result<Params, Error> {
        let genesis = GenesisDescriptor::for_network(Network::Testnet).verify(hasher)?;
        let default_port = 45311;
        Ok(Params {
            network: Network::Testnet,
            magic: [0x4e, 0x44, 0x43, 0x54],
            alert_pubkey: parse_pubkey(TESTNET_ALERT_KEY)?,
            default_port,
            rpc_port: 45312,
            pow_limit: pow_limit(16),
            genesis_hash: genesis.block_hash(hasher),
            genesis,
            base58_prefixes: Base58Prefixes {
                pubkey_address: &[53],
                script_address: &[196],
                secret_key: &[239],
                stealth_address: &[43],
                ext_public_key: &[0x04, 0x35, 0x87, 0xCF],
                ext_secret_key: &[0x04, 0x35, 0x83, 0x94],
            },
            dns_seeds: vec![],
            fixed_seeds: seeds::convert_seeds_now(seeds::TESTNET_FIXED_SEEDS, default_port),
            checkpoints: checkpoints::for_network(Network::Testnet)?.clone(),
            data_dir: "testnet",
            last_pow_block: 30,
            ..Params::mainnet(hasher)?
        })
    }

    /// Cross-field checks that hold on every network.
    fn check_consistency(&self) -> Result<(), Error> {
        match self.genesis.header.target() {
            Some(target) if target <= self.pow_limit => {}
            _ => return Err(Error::GenesisTargetAboveLimit { bits: self.genesis.header.bits }),
        }

        if let Some(expected) = self.checkpoints.get(0) {
            if expected != self.genesis_hash {
                return Err(Error::GenesisHashMismatch { expected, computed: self.genesis_hash });
            }
        }

        base58::from_check(self.pool_dummy_address)?;
        Ok(())
    }

    /// Returns the base58 prefix of `kind` on this network.
    pub fn base58_prefix(&self, kind: Base58Type) -> &'static [u8] {
        self.base58_prefixes.get(kind)
    }

    /// Base58check-encodes `payload` behind this network's prefix for `kind`.
    pub fn encode_base58(&self, kind: Base58Type, payload: &[u8]) -> String {
        let mut data = self.base58_prefix(kind).to_vec();
        data.extend_from_slice(payload);
        base58::check_encode_slice(&data)
    }

    /// Whether a proof-of-work block is still acceptable at `height`.
    pub fn is_pow_allowed(&self, height: u32) -> bool {
        height <= self.last_pow_block
    }

    /// Whether blocks at `height` must pay a masternode.
    pub fn is_masternode_payment_active(&self, height: u32) -> bool {
        height >= self.masternode_payment_start_block
    }
}

fn parse_pubkey(key_hex: &str) -> Result<PublicKey, Error> {
    let bytes = Vec::<u8>::from_hex(key_hex)?;
    Ok(PublicKey::from_slice(&bytes)?)
}
