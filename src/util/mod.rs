// Copyright (c) 2018 The MasterCoin developers
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.
//

//! Utility functions
//!
//! Functions needed by all parts of the library.
//!

pub mod base58;
pub mod hash;
pub mod pow;
