// Copyright (c) 2018 The MasterCoin developers
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.
//

//! Consensus-encodable types
//!
//! This is basically a replacement of the `Encodable` trait which does
//! normalization for endianness, etc., to ensure that the encoding
//! matches for endianness, etc., the node's wire format. Only the
//! encoding direction is provided: it is what block and transaction
//! hashing needs.
//!

use std::{error, fmt, io, mem};

use hashes::hex::ToHex;

/// Encoding error
#[derive(Debug)]
pub enum Error {
    /// And I/O error
    Io(io::Error),
    /// A length prefix or element count does not fit the wire format
    OversizedVectorAllocation {
        /// The requested allocation
        requested: usize,
        /// The maximum allowed
        max: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Io(ref e) => write!(f, "I/O error: {}", e),
            Error::OversizedVectorAllocation { requested: ref r, max: ref m } => write!(f,
                "allocation of oversized vector: requested {}, maximum {}", r, m),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::Io(ref e) => Some(e),
            Error::OversizedVectorAllocation { .. } => None,
        }
    }
}

#[doc(hidden)]
impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Error::Io(error)
    }
}

/// Encode an object into a vector
pub fn serialize<T: Encodable + ?Sized>(data: &T) -> Vec<u8> {
    let mut encoder = Vec::new();
    let len = data.consensus_encode(&mut encoder).expect("in-memory writers don't error");
    debug_assert_eq!(len, encoder.len());
    encoder
}

/// Encode an object into a hex-encoded string
pub fn serialize_hex<T: Encodable + ?Sized>(data: &T) -> String {
    serialize(data)[..].to_hex()
}

/// Data which can be encoded in a consensus-consistent way
pub trait Encodable {
    /// Encode an object with a well-defined format.
    /// Returns the number of bytes written on success.
    ///
    /// The only errors returned are errors propagated from the writer.
    fn consensus_encode<W: io::Write>(&self, writer: W) -> Result<usize, Error>;
}

/// A variable-length unsigned integer
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub struct VarInt(pub u64);

impl VarInt {
    /// Gets the length of this VarInt when encoded.
    /// Returns 1 for 0..=0xFC, 3 for 0xFD..=(2^16-1), 5 for 0x10000..=(2^32-1),
    /// and 9 otherwise.
    #[inline]
    pub fn len(&self) -> usize {
        match self.0 {
            0..=0xFC => 1,
            0xFD..=0xFFFF => 3,
            0x10000..=0xFFFFFFFF => 5,
            _ => 9,
        }
    }
}

impl Encodable for VarInt {
    #[inline]
    fn consensus_encode<S: io::Write>(&self, mut s: S) -> Result<usize, Error> {
        match self.0 {
            0..=0xFC => {
                (self.0 as u8).consensus_encode(s)?;
                Ok(1)
            }
            0xFD..=0xFFFF => {
                s.write_all(&[0xFD])?;
                (self.0 as u16).consensus_encode(s)?;
                Ok(3)
            }
            0x10000..=0xFFFFFFFF => {
                s.write_all(&[0xFE])?;
                (self.0 as u32).consensus_encode(s)?;
                Ok(5)
            }
            _ => {
                s.write_all(&[0xFF])?;
                self.0.consensus_encode(s)?;
                Ok(9)
            }
        }
    }
}

macro_rules! impl_int_encodable {
    ($ty:ident) => {
        impl Encodable for $ty {
            #[inline]
            fn consensus_encode<S: io::Write>(&self, mut s: S) -> Result<usize, Error> {
                s.write_all(&self.to_le_bytes())?;
                Ok(mem::size_of::<$ty>())
            }
        }
    };
}

impl_int_encodable!(u8);
impl_int_encodable!(u16);
impl_int_encodable!(u32);
impl_int_encodable!(u64);
impl_int_encodable!(i8);
impl_int_encodable!(i16);
impl_int_encodable!(i32);
impl_int_encodable!(i64);

impl Encodable for bool {
    #[inline]
    fn consensus_encode<S: io::Write>(&self, s: S) -> Result<usize, Error> {
        (*self as u8).consensus_encode(s)
    }
}

macro_rules! impl_array {
    ( $size:expr ) => {
        impl Encodable for [u8; $size] {
            #[inline]
            fn consensus_encode<S: io::Write>(&self, mut s: S) -> Result<usize, Error> {
                s.write_all(&self[..])?;
                Ok(self.len())
            }
        }
    };
}

impl_array!(4);
impl_array!(32);

/// Writes a length-prefixed byte slice.
fn consensus_encode_with_size<S: io::Write>(data: &[u8], mut s: S) -> Result<usize, Error> {
    if data.len() as u64 > u32::MAX as u64 {
        return Err(Error::OversizedVectorAllocation { requested: data.len(), max: u32::MAX as usize });
    }
    let vi_len = VarInt(data.len() as u64).consensus_encode(&mut s)?;
    s.write_all(data)?;
    Ok(vi_len + data.len())
}

impl Encodable for Vec<u8> {
    #[inline]
    fn consensus_encode<S: io::Write>(&self, s: S) -> Result<usize, Error> {
        consensus_encode_with_size(&self[..], s)
    }
}

impl Encodable for Box<[u8]> {
    #[inline]
    fn consensus_encode<S: io::Write>(&self, s: S) -> Result<usize, Error> {
        consensus_encode_with_size(&self[..], s)
    }
}

macro_rules! impl_vec {
    ($type: ty) => {
        impl Encodable for Vec<$type> {
            #[inline]
            fn consensus_encode<S: io::Write>(&self, mut s: S) -> Result<usize, Error> {
                let mut len = 0;
                len += VarInt(self.len() as u64).consensus_encode(&mut s)?;
                for c in self.iter() {
                    len += c.consensus_encode(&mut s)?;
                }
                Ok(len)
            }
        }
    };
}

impl_vec!(crate::blockdata::transaction::TxIn);
impl_vec!(crate::blockdata::transaction::TxOut);
impl_vec!(crate::blockdata::transaction::Transaction);

#[cfg(test)]
mod tests {
    use super::{serialize, serialize_hex, VarInt};

    #[test]
    fn serialize_int_test() {
        // bool
        assert_eq!(serialize(&false), vec![0u8]);
        assert_eq!(serialize(&true), vec![1u8]);
        // u8
        assert_eq!(serialize(&1u8), vec![1u8]);
        assert_eq!(serialize(&255u8), vec![255u8]);
        // u32
        assert_eq!(serialize(&1u32), vec![1u8, 0, 0, 0]);
        assert_eq!(serialize(&1535272500u32), vec![0x34, 0x66, 0x82, 0x5b]);
        // i32
        assert_eq!(serialize(&-1i32), vec![255u8, 255, 255, 255]);
        assert_eq!(serialize(&1i32), vec![1u8, 0, 0, 0]);
        // i64
        assert_eq!(serialize(&0i64), vec![0u8; 8]);
        assert_eq!(serialize(&-1i64), vec![255u8; 8]);
    }

    #[test]
    fn serialize_varint_test() {
        assert_eq!(serialize(&VarInt(10)), vec![10u8]);
        assert_eq!(serialize(&VarInt(0xFC)), vec![0xFCu8]);
        assert_eq!(serialize(&VarInt(0xFD)), vec![0xFDu8, 0xFD, 0]);
        assert_eq!(serialize(&VarInt(0xFFF)), vec![0xFDu8, 0xFF, 0xF]);
        assert_eq!(serialize(&VarInt(0xF0F0F0F)), vec![0xFEu8, 0xF, 0xF, 0xF, 0xF]);
        assert_eq!(serialize(&VarInt(0xF0F0F0F0F0E0)), vec![0xFFu8, 0xE0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0, 0]);
        assert_eq!(VarInt(0xFC).len(), 1);
        assert_eq!(VarInt(0xFD).len(), 3);
        assert_eq!(VarInt(0x10000).len(), 5);
        assert_eq!(VarInt(0x100000000).len(), 9);
    }

    #[test]
    fn serialize_vector_test() {
        assert_eq!(serialize(&vec![1u8, 2, 3]), vec![3u8, 1, 2, 3]);
        assert_eq!(serialize(&Vec::<u8>::new()), vec![0u8]);
        assert_eq!(serialize_hex(&vec![0xabu8, 0xcd]), "02abcd");
    }
}
