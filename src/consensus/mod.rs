// Copyright (c) 2018 The MasterCoin developers
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.
//

//! Consensus
//!
//! This module defines structures, functions, and traits that are needed to
//! conform to MasterCoin consensus.
//!

pub mod encode;
pub mod params;

pub use self::encode::{serialize, serialize_hex, Encodable};
pub use self::params::Params;
