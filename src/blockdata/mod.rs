// Copyright (c) 2018 The MasterCoin developers
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.
//

//! Blockdata
//!
//! This module defines structures and functions for storing the blocks and
//! transactions which make up the MasterCoin system.
//!

pub mod constants;
pub mod opcodes;
pub mod script;
pub mod transaction;
pub mod block;
