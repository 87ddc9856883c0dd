// Copyright (c) 2018 The MasterCoin developers
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.
//

//! Proof-of-work targets
//!
//! Conversions between 256-bit targets and their compact "nBits" form.
//!

use primitive_types::U256;

/// The easiest target a network accepts: all bits set, shifted right by `shift`.
pub fn pow_limit(shift: u32) -> U256 {
    U256::MAX >> shift
}

/// Expands the compact "nBits" encoding of a target.
///
/// Format: one byte of size followed by a 3 byte mantissa. Returns `None`
/// when the sign bit is set on a nonzero mantissa or the value does not
/// fit in 256 bits.
pub fn target_from_compact(bits: u32) -> Option<U256> {
    let size = (bits >> 24) as usize;
    let word = bits & 0x007f_ffff;
    if word != 0 && bits & 0x0080_0000 != 0 {
        return None;
    }

    if size <= 3 {
        return Some(U256::from(word >> (8 * (3 - size))));
    }
    let value = U256::from(word);
    let shift = 8 * (size - 3);
    if word != 0 && value.bits() + shift > 256 {
        return None;
    }
    Some(value << shift)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genesis_difficulty() {
        let target = target_from_compact(0x1e0fffff).unwrap();
        assert_eq!(target, U256::from(0x0fffffu32) << 216);
        assert!(target <= pow_limit(20));
        assert!(target > pow_limit(40));
    }

    #[test]
    fn small_sizes_shift_right() {
        assert_eq!(target_from_compact(0x03123456), Some(U256::from(0x123456u32)));
        assert_eq!(target_from_compact(0x01120000), Some(U256::from(0x12u32)));
        assert_eq!(target_from_compact(0x01003456), Some(U256::zero()));
        assert_eq!(target_from_compact(0x00000000), Some(U256::zero()));
    }

    #[test]
    fn negative_and_overflowing_are_rejected() {
        assert_eq!(target_from_compact(0x04923456), None);
        assert_eq!(target_from_compact(0xff123456), None);
        assert_eq!(target_from_compact(0x21010000), None);
        // a zero mantissa never overflows
        assert_eq!(target_from_compact(0xff000000), Some(U256::zero()));
        assert_eq!(target_from_compact(0x20800000), Some(U256::zero()));
    }

    #[test]
    fn limits() {
        assert_eq!(pow_limit(20).bits(), 236);
        assert_eq!(pow_limit(16).bits(), 240);
        assert_eq!(
            format!("{:x}", pow_limit(20)),
            "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
        );
    }
}
