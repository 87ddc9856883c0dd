// Copyright (c) 2018 The MasterCoin developers
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.
//

//! Hash functions
//!
//! Utility functions related to hashing data, including merkleization

use std::cmp::min;

use hashes::{sha256d, Hash, HashEngine};

use crate::consensus::encode::Encodable;

/// Calculates the merkle root of a list of hashes inline
/// into the allocated slice.
///
/// In most cases, you'll want to use [bitcoin_merkle_root] instead.
pub fn bitcoin_merkle_root_inline<T>(data: &mut [T]) -> T
    where T: Hash + Encodable,
          <T as Hash>::Engine: ::std::io::Write,
{
    // Base case
    if data.is_empty() {
        return Default::default();
    }
    if data.len() < 2 {
        return data[0];
    }
    // Recursion
    for idx in 0..((data.len() + 1) / 2) {
        let idx1 = 2 * idx;
        let idx2 = min(idx1 + 1, data.len() - 1);
        let mut encoder = T::engine();
        data[idx1].consensus_encode(&mut encoder).expect("in-memory writers don't error");
        data[idx2].consensus_encode(&mut encoder).expect("in-memory writers don't error");
        data[idx] = T::from_engine(encoder);
    }
    let half_len = data.len() / 2 + data.len() % 2;
    bitcoin_merkle_root_inline(&mut data[0..half_len])
}

/// Calculates the merkle root of an iterator of hashes. An odd element on
/// any level is paired with itself.
pub fn bitcoin_merkle_root<T, I>(mut iter: I) -> T
    where T: Hash + Encodable,
          <T as Hash>::Engine: ::std::io::Write,
          I: ExactSizeIterator<Item = T>,
{
    // Base case
    if iter.len() == 0 {
        return Default::default();
    }
    if iter.len() == 1 {
        return iter.next().expect("one element");
    }
    // Recursion
    let half_len = iter.len() / 2 + iter.len() % 2;
    let mut alloc = Vec::with_capacity(half_len);
    while let Some(hash1) = iter.next() {
        // If the size is odd, use the last element twice.
        let hash2 = iter.next().unwrap_or(hash1);
        let mut encoder = T::engine();
        hash1.consensus_encode(&mut encoder).expect("in-memory writers don't error");
        hash2.consensus_encode(&mut encoder).expect("in-memory writers don't error");
        alloc.push(T::from_engine(encoder));
    }
    bitcoin_merkle_root_inline(&mut alloc)
}

/// Double SHA256 of an arbitrary byte string, as used for base58 checksums.
pub fn double_sha256(data: &[u8]) -> sha256d::Hash {
    let mut engine = sha256d::Hash::engine();
    engine.input(data);
    sha256d::Hash::from_engine(engine)
}
