// Copyright (c) 2018 The MasterCoin developers
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.
//

//! Base58 encoder and decoder
//!
//! Base58check strings carry a four byte checksum, the head of the double
//! SHA256 of the payload. The alphabet work is delegated to `bs58`.

use std::{error, fmt};

use crate::util::hash::double_sha256;

/// An error that might occur during base58 decoding
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// Invalid character encountered
    BadByte(bs58::decode::Error),
    /// Checksum was not correct (expected, actual)
    BadChecksum(u32, u32),
    /// Checked data was less than 4 bytes
    TooShort(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::BadByte(ref e) => write!(f, "invalid base58 string: {}", e),
            Error::BadChecksum(exp, actual) => write!(f, "base58ck checksum {:#x} does not match expected {:#x}", actual, exp),
            Error::TooShort(_) => write!(f, "base58ck data not even long enough for a checksum"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::BadByte(ref e) => Some(e),
            Error::BadChecksum(..) | Error::TooShort(_) => None,
        }
    }
}

#[doc(hidden)]
impl From<bs58::decode::Error> for Error {
    fn from(e: bs58::decode::Error) -> Error {
        Error::BadByte(e)
    }
}

fn checksum(data: &[u8]) -> [u8; 4] {
    let hash = double_sha256(data);
    let mut ck = [0u8; 4];
    ck.copy_from_slice(&hash[0..4]);
    ck
}

/// Decode a base58 string into a byte vector
pub fn from(data: &str) -> Result<Vec<u8>, Error> {
    Ok(bs58::decode(data).into_vec()?)
}

/// Decode a base58check-encoded string, returning the payload without the checksum
pub fn from_check(data: &str) -> Result<Vec<u8>, Error> {
    let mut ret: Vec<u8> = from(data)?;
    if ret.len() < 4 {
        return Err(Error::TooShort(ret.len()));
    }
    let ck_start = ret.len() - 4;
    let expected = u32::from_le_bytes(checksum(&ret[..ck_start]));
    let mut actual = [0u8; 4];
    actual.copy_from_slice(&ret[ck_start..]);
    let actual = u32::from_le_bytes(actual);
    if expected != actual {
        return Err(Error::BadChecksum(expected, actual));
    }

    ret.truncate(ck_start);
    Ok(ret)
}

/// Directly encode a slice as base58
pub fn encode_slice(data: &[u8]) -> String {
    bs58::encode(data).into_string()
}

/// Obtain a string with the base58check encoding of a slice
/// (Tack the first 4 256-digits of the object's Bitcoin hash onto the end.)
pub fn check_encode_slice(data: &[u8]) -> String {
    let mut payload = data.to_vec();
    payload.extend_from_slice(&checksum(data));
    encode_slice(&payload)
}
