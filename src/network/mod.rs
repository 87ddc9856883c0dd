// Copyright (c) 2018 The MasterCoin developers
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.
//

//! Network support
//!
//! This module defines the supported networks, peer addresses and the
//! bootstrap seeds a node starts from.
//!

pub mod constants;
pub mod address;
pub mod seeds;
