// Copyright (c) 2018 The MasterCoin developers
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.
//

use mastercoin::chainparams;
use mastercoin::checkpoints;
use mastercoin::consensus::params::Error;
use mastercoin::hashes::hex::FromHex;
use mastercoin::hashes::Hash;
use mastercoin::network::constants::Network;
use mastercoin::{BlockHash, HeaderHasher};

/// Double SHA256 of the header, which does not reproduce the genesis hash.
struct DoubleSha256;

impl HeaderHasher for DoubleSha256 {
    fn hash_header(&self, header: &[u8]) -> BlockHash {
        BlockHash::hash(header)
    }
}

// A node whose header hash disagrees with the genesis constants must not start.
#[test]
fn wrong_header_hash_refuses_every_network() {
    let published = BlockHash::from_hex("00000da06cd87b66c2dd4f8df68031815af3297c713e962f72af0349d53216d1").unwrap();

    assert_eq!(chainparams::params_for(Network::Main).unwrap_err(), Error::MissingHeaderHasher);
    assert!(chainparams::install_header_hasher(DoubleSha256));

    match chainparams::select_params(Network::Main) {
        Err(Error::GenesisHashMismatch { expected, computed }) => {
            assert_eq!(expected, published);
            assert_eq!(format!("{:x}", computed),
                       "2fd312186dc4a97d5e9f354cf4f63bbdeea5ec27621d274aee149e88b48bc8b8");
        }
        other => panic!("unexpected result {:?}", other),
    }
    assert!(matches!(chainparams::select_params_from_args(&["-testnet"]),
                     Err(Error::GenesisHashMismatch { .. })));
    assert_eq!(chainparams::selected_network(), Network::Main);

    // checkpoints stay usable for the active network
    assert!(checkpoints::check_hardened(0, &published));
    assert!(!checkpoints::check_hardened(0, &BlockHash::hash(b"fork")));
    assert_eq!(checkpoints::total_blocks_estimate(), 9);
}
