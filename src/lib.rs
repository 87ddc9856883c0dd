// Copyright (c) 2018 The MasterCoin developers
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.
//

//! # MasterCoin network parameters
//!
//! This library holds the immutable consensus parameters of the MasterCoin
//! networks (message magic, ports, proof-of-work ceiling, genesis block,
//! address prefixes, bootstrap seeds and rule switchover heights) and the
//! checkpoint integrity checks that keep a node from following a chain
//! which contradicts the hardcoded history or reorganizes too deeply.
//!
//! The process selects a network once at startup with
//! [`select_params`](chainparams/fn.select_params.html); everything else
//! reads the active set through [`params`](chainparams/fn.params.html).
//!

#![crate_name = "mastercoin"]

// Coding conventions
#![forbid(unsafe_code)]
#![deny(non_upper_case_globals)]
#![deny(non_camel_case_types)]
#![deny(non_snake_case)]
#![deny(unused_mut)]
#![warn(missing_docs)]

// Re-exported dependencies.
#[macro_use] pub extern crate bitcoin_hashes as hashes;
pub extern crate secp256k1;

#[cfg(feature = "serde")] #[macro_use] extern crate serde;

#[cfg(target_pointer_width = "16")]
compile_error!("mastercoin cannot be used on 16-bit architectures");

#[cfg(test)]
mod test_helpers;
#[macro_use]
mod internal_macros;
pub mod network;
pub mod blockdata;
pub mod util;
pub mod consensus;
pub mod chainparams;
pub mod checkpoints;
// Do not remove: required in order to get hash types implementation macros to work correctly
#[allow(unused_imports)]
pub mod hash_types;

pub use crate::hash_types::*;
pub use crate::blockdata::block::Block;
pub use crate::blockdata::block::BlockHeader;
pub use crate::blockdata::block::HeaderHasher;
pub use crate::blockdata::script::Script;
pub use crate::blockdata::transaction::Transaction;
pub use crate::blockdata::transaction::TxIn;
pub use crate::blockdata::transaction::TxOut;
pub use crate::blockdata::transaction::OutPoint;
pub use crate::chainparams::{install_header_hasher, params, select_params};
pub use crate::checkpoints::{BlockIndexNode, ChainIndex, Checkpoints};
pub use crate::consensus::encode::VarInt;
pub use crate::consensus::params::{Base58Type, Params};
pub use crate::network::address::Address;
pub use crate::network::constants::Network;
pub use primitive_types::U256;
