// Copyright (c) 2018 The MasterCoin developers
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.
//

//! MasterCoin Transaction
//!
//! A transaction describes a transfer of money. It consumes previously-unspent
//! transaction outputs and produces new ones, satisfying the condition to spend
//! the old outputs (typically a digital signature with a specific key must be
//! provided) and defining the condition to spend the new ones.
//!
//! MasterCoin transactions carry a timestamp right after the version, as
//! proof-of-stake chains do; it takes part in the transaction id.
//!

use std::fmt;

use hashes::Hash;

use crate::blockdata::constants::MAX_SEQUENCE;
use crate::blockdata::script::Script;
use crate::consensus::encode::Encodable;
use crate::hash_types::Txid;

/// A reference to a transaction output
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct OutPoint {
    /// The referenced transaction's txid
    pub txid: Txid,
    /// The index of the referenced output in its transaction's vout
    pub vout: u32,
}
impl_consensus_encoding!(OutPoint, txid, vout);

impl OutPoint {
    /// Creates a new [OutPoint].
    #[inline]
    pub fn new(txid: Txid, vout: u32) -> OutPoint {
        OutPoint { txid, vout }
    }

    /// Creates a "null" `OutPoint`.
    ///
    /// This value is used for coinbase transactions because they don't have
    /// any previous outputs.
    #[inline]
    pub fn null() -> OutPoint {
        OutPoint {
            txid: Default::default(),
            vout: u32::MAX,
        }
    }

    /// Checks if an `OutPoint` is "null".
    #[inline]
    pub fn is_null(&self) -> bool {
        *self == OutPoint::null()
    }
}

impl Default for OutPoint {
    fn default() -> Self {
        OutPoint::null()
    }
}

impl fmt::Display for OutPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.txid, self.vout)
    }
}

/// A transaction input, which defines old coins to be consumed
#[derive(Clone, PartialEq, Eq, Debug, Hash, PartialOrd, Ord)]
pub struct TxIn {
    /// The reference to the previous output that is being used an an input
    pub previous_output: OutPoint,
    /// The script which pushes values on the stack which will cause
    /// the referenced output's script to accept
    pub script_sig: Script,
    /// The sequence number, which suggests to miners which of two
    /// conflicting transactions should be preferred, or 0xFFFFFFFF
    /// to ignore this feature. This is generally never used since
    /// the miner behaviour cannot be enforced.
    pub sequence: u32,
}
impl_consensus_encoding!(TxIn, previous_output, script_sig, sequence);

impl Default for TxIn {
    fn default() -> TxIn {
        TxIn {
            previous_output: OutPoint::default(),
            script_sig: Script::new(),
            sequence: MAX_SEQUENCE,
        }
    }
}

/// A transaction output, which defines new coins to be created from old ones.
#[derive(Clone, PartialEq, Eq, Debug, Hash, PartialOrd, Ord)]
pub struct TxOut {
    /// The value of the output, in satoshis
    pub value: i64,
    /// The script which must satisfy for the output to be spent
    pub script_pubkey: Script,
}
impl_consensus_encoding!(TxOut, value, script_pubkey);

impl TxOut {
    /// An output with no value and no script. Proof-of-stake coinbases and
    /// coinstakes use it as a marker output.
    pub fn empty() -> TxOut {
        TxOut {
            value: 0,
            script_pubkey: Script::new(),
        }
    }

    /// Whether this is the empty marker output
    pub fn is_empty(&self) -> bool {
        self.value == 0 && self.script_pubkey.is_empty()
    }
}

/// A MasterCoin transaction, which describes an authenticated movement of coins.
#[derive(Clone, PartialEq, Eq, Debug, Hash, PartialOrd, Ord)]
pub struct Transaction {
    /// The protocol version, is currently expected to be 1.
    pub version: i32,
    /// Transaction timestamp, seconds since the Unix epoch.
    pub time: u32,
    /// List of inputs
    pub input: Vec<TxIn>,
    /// List of outputs
    pub output: Vec<TxOut>,
    /// Block number before which this transaction is valid, or 0 for
    /// valid immediately.
    pub lock_time: u32,
}
impl_consensus_encoding!(Transaction, version, time, input, output, lock_time);

impl Transaction {
    /// Computes the txid: the double SHA256 of the consensus encoding.
    pub fn txid(&self) -> Txid {
        let mut enc = Txid::engine();
        self.consensus_encode(&mut enc).expect("engines don't error");
        Txid::from_engine(enc)
    }

    /// Is this a coin base transaction?
    pub fn is_coin_base(&self) -> bool {
        self.input.len() == 1 && self.input[0].previous_output.is_null()
    }

    /// Gets the "weight free" size of the transaction
    pub fn get_size(&self) -> usize {
        let mut counter = Counter::default();
        self.consensus_encode(&mut counter).expect("counters don't error");
        counter.0
    }
}

/// Sink which only counts written bytes.
#[derive(Default)]
struct Counter(usize);

impl ::std::io::Write for Counter {
    fn write(&mut self, buf: &[u8]) -> ::std::io::Result<usize> {
        self.0 += buf.len();
        Ok(buf.len())
    }

    fn flush(&mut self) -> ::std::io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blockdata::script::Builder;
    use crate::consensus::encode::serialize;

    fn coinbase(message: &[u8]) -> Transaction {
        Transaction {
            version: 1,
            time: 1535272500,
            input: vec![TxIn {
                previous_output: OutPoint::null(),
                script_sig: Builder::new().push_int(0).push_int(42).push_slice(message).into_script(),
                sequence: MAX_SEQUENCE,
            }],
            output: vec![TxOut::empty()],
            lock_time: 0,
        }
    }

    #[test]
    fn outpoint_null() {
        let null = OutPoint::null();
        assert!(null.is_null());
        assert_eq!(null.vout, 0xFFFFFFFF);
        assert_eq!(null.txid, Txid::default());
        assert!(!OutPoint::new(Txid::default(), 0).is_null());
        assert_eq!(
            null.to_string(),
            "0000000000000000000000000000000000000000000000000000000000000000:4294967295"
        );
    }

    #[test]
    fn txout_empty() {
        assert!(TxOut::empty().is_empty());
        assert_eq!(serialize(&TxOut::empty()), vec![0u8; 9]);
    }

    #[test]
    fn timestamped_transaction_layout() {
        let tx = coinbase(b"x");
        let bytes = serialize(&tx);
        // version
        assert_eq!(&bytes[0..4], &[1u8, 0, 0, 0][..]);
        // time follows version
        assert_eq!(&bytes[4..8], &[0x34u8, 0x66, 0x82, 0x5b][..]);
        // one input with a null prevout
        assert_eq!(bytes[8], 1);
        assert_eq!(&bytes[9..41], &[0u8; 32][..]);
        assert_eq!(&bytes[41..45], &[0xffu8; 4][..]);
        assert_eq!(bytes.len(), tx.get_size());
        assert!(tx.is_coin_base());
    }

    #[test]
    fn txid_changes_with_time() {
        let tx = coinbase(b"x");
        let mut later = tx.clone();
        later.time += 1;
        assert_ne!(tx.txid(), later.txid());
    }
}
