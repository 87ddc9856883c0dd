// Copyright (c) 2018 The MasterCoin developers
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.
//

//! Opcodes
//!
//! The subset of script opcodes needed to build coinbase scripts.
//!

#![allow(non_camel_case_types)]

use std::fmt;

/// A script Opcode
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct All {
    code: u8,
}

impl All {
    /// Encode as a byte
    #[inline]
    pub fn into_u8(self) -> u8 {
        self.code
    }
}

impl From<u8> for All {
    #[inline]
    fn from(b: u8) -> All {
        All { code: b }
    }
}

impl fmt::Debug for All {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("OP_")?;
        match *self {
            all::OP_PUSHBYTES_0 => f.write_str("PUSHBYTES_0"),
            all::OP_PUSHDATA1 => f.write_str("PUSHDATA1"),
            all::OP_PUSHDATA2 => f.write_str("PUSHDATA2"),
            all::OP_PUSHDATA4 => f.write_str("PUSHDATA4"),
            all::OP_PUSHNUM_NEG1 => f.write_str("PUSHNUM_NEG1"),
            All { code: x } if x >= all::OP_PUSHNUM_1.code && x <= all::OP_PUSHNUM_16.code => {
                write!(f, "PUSHNUM_{}", x - all::OP_PUSHNUM_1.code + 1)
            }
            All { code: x } if x < all::OP_PUSHDATA1.code => write!(f, "PUSHBYTES_{}", x),
            All { code: x } => write!(f, "UNKNOWN_{:#04x}", x),
        }
    }
}

pub mod all {
    //! Constants associated with All type
    use super::All;

    /// Push an empty array onto the stack
    pub const OP_PUSHBYTES_0: All = All { code: 0x00 };
    /// Read the next byte as N; push the next N bytes as an array onto the stack
    pub const OP_PUSHDATA1: All = All { code: 0x4c };
    /// Read the next 2 bytes as N; push the next N bytes as an array onto the stack
    pub const OP_PUSHDATA2: All = All { code: 0x4d };
    /// Read the next 4 bytes as N; push the next N bytes as an array onto the stack
    pub const OP_PUSHDATA4: All = All { code: 0x4e };
    /// Push the array [0x81] onto the stack
    pub const OP_PUSHNUM_NEG1: All = All { code: 0x4f };
    /// Push the array [0x01] onto the stack
    pub const OP_PUSHNUM_1: All = All { code: 0x51 };
    /// Push the array [0x10] onto the stack
    pub const OP_PUSHNUM_16: All = All { code: 0x60 };
}
