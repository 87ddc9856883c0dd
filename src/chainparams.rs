// Copyright (c) 2018 The MasterCoin developers
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.
//

//! Chain parameters registry
//!
//! One [Params] instance per network, built and verified on first use and
//! kept for the life of the process, plus the process-wide selection of
//! the active network.
//!
//! The selection is made once at startup, before other components read
//! it. Until then [params] answers with the main network.
//!
//! Building parameters verifies the genesis block, which takes the
//! network's block header hash function. The node installs it with
//! [install_header_hasher] first; without one nothing can be selected.
//!
//! # Example
//!
//! ```rust
//! use mastercoin::chainparams;
//! use mastercoin::consensus::params::Error;
//! use mastercoin::network::constants::Network;
//!
//! let network = chainparams::network_from_args(&["mastercoind", "-testnet"]);
//! assert_eq!(network, Network::Testnet);
//! assert_eq!(chainparams::select_params(network).unwrap_err(), Error::MissingHeaderHasher);
//! assert_eq!(chainparams::selected_network(), Network::Main);
//! ```

use std::sync::atomic::{AtomicU8, Ordering};

use log::info;
use once_cell::sync::OnceCell;

use crate::blockdata::block::{Block, HeaderHasher};
use crate::consensus::params::{Error, Params};
use crate::network::address::Address;
use crate::network::constants::Network;

static HEADER_HASHER: OnceCell<Box<dyn HeaderHasher>> = OnceCell::new();
static MAINNET: OnceCell<Params> = OnceCell::new();
static TESTNET: OnceCell<Params> = OnceCell::new();
static SELECTED: AtomicU8 = AtomicU8::new(NETWORK_MAIN);

const NETWORK_MAIN: u8 = 0;
const NETWORK_TESTNET: u8 = 1;

fn cell(network: Network) -> &'static OnceCell<Params> {
    match network {
        Network::Main => &MAINNET,
        Network::Testnet => &TESTNET,
    }
}

/// Installs the network's block header hash function for the life of the
/// process. Returns `false`, keeping the first one, when a hasher is
/// already installed.
pub fn install_header_hasher<H: HeaderHasher + 'static>(hasher: H) -> bool {
    HEADER_HASHER.set(Box::new(hasher)).is_ok()
}

/// Parameters of `network`, built on first call.
///
/// Fails with [Error::MissingHeaderHasher] until a header hash function
/// is installed.
pub fn params_for(network: Network) -> Result<&'static Params, Error> {
    cell(network).get_or_try_init(|| {
        let hasher = HEADER_HASHER.get().ok_or(Error::MissingHeaderHasher)?;
        Params::new(network, &**hasher)
    })
}

/// Makes `network` the active network and returns its parameters.
///
/// Fails when the network's constants are inconsistent; the node must
/// then refuse to start. The selection is left unchanged in that case.
pub fn select_params(network: Network) -> Result<&'static Params, Error> {
    let params = params_for(network)?;
    let tag = match network {
        Network::Main => NETWORK_MAIN,
        Network::Testnet => NETWORK_TESTNET,
    };
    SELECTED.store(tag, Ordering::Release);
    info!("selected {} network (magic {:02x?}, port {})", network, params.magic, params.default_port);
    Ok(params)
}

/// Resolves the `-testnet` flag in `args` and selects the matching network.
pub fn select_params_from_args<I, S>(args: I) -> Result<&'static Params, Error>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    select_params(network_from_args(args))
}

/// The network named by command line arguments.
///
/// Understands `-testnet`, `-testnet=<n>` and `-notestnet`, with one or two
/// leading dashes; a value is true when it is empty or a non-zero integer.
/// The last occurrence wins; without any the main network is used.
pub fn network_from_args<I, S>(args: I) -> Network
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut testnet = false;
    for arg in args {
        let arg = arg.as_ref();
        let arg = match arg.strip_prefix("--").or_else(|| arg.strip_prefix('-')) {
            Some(arg) => arg,
            None => continue,
        };
        let (name, value) = match arg.find('=') {
            Some(pos) => (&arg[..pos], Some(&arg[pos + 1..])),
            None => (arg, None),
        };
        match name {
            "testnet" => testnet = value.map_or(true, flag_value),
            "notestnet" => testnet = !value.map_or(true, flag_value),
            _ => {}
        }
    }
    Network::from_testnet_flag(testnet)
}

fn flag_value(value: &str) -> bool {
    value.is_empty() || value.trim().parse::<i64>().map_or(false, |n| n != 0)
}

/// The active network.
pub fn selected_network() -> Network {
    match SELECTED.load(Ordering::Acquire) {
        NETWORK_TESTNET => Network::Testnet,
        _ => Network::Main,
    }
}

/// Parameters of the active network.
///
/// # Panics
///
/// When the active network's parameters cannot be built. [select_params]
/// reports that as an error first, so this only happens on the main
/// network when nothing was selected.
pub fn params() -> &'static Params {
    let network = selected_network();
    match params_for(network) {
        Ok(params) => params,
        Err(e) => panic!("{} network parameters are inconsistent: {}", network, e),
    }
}

/// Genesis block of the active network.
pub fn genesis_block() -> &'static Block {
    &params().genesis
}

/// Fixed bootstrap peers of the active network.
pub fn fixed_seeds() -> &'static [Address] {
    &params().fixed_seeds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{install_known_headers, KnownHeaders};

    #[test]
    fn testnet_flag_parsing() {
        let none: [&str; 0] = [];
        assert_eq!(network_from_args(none.iter()), Network::Main);
        assert_eq!(network_from_args(&["mastercoind", "-daemon"]), Network::Main);
        assert_eq!(network_from_args(&["-testnet"]), Network::Testnet);
        assert_eq!(network_from_args(&["--testnet"]), Network::Testnet);
        assert_eq!(network_from_args(&["-testnet="]), Network::Testnet);
        assert_eq!(network_from_args(&["-testnet=1"]), Network::Testnet);
        assert_eq!(network_from_args(&["-testnet=0"]), Network::Main);
        assert_eq!(network_from_args(&["-testnet=yes"]), Network::Main);
        assert_eq!(network_from_args(&["-notestnet"]), Network::Main);
        assert_eq!(network_from_args(&["-notestnet=0"]), Network::Testnet);
        assert_eq!(network_from_args(&["testnet"]), Network::Main);
        assert_eq!(network_from_args(&["-testnetx"]), Network::Main);
    }

    #[test]
    fn last_testnet_flag_wins() {
        assert_eq!(network_from_args(&["-testnet", "-notestnet"]), Network::Main);
        assert_eq!(network_from_args(&["-notestnet", "-testnet=1"]), Network::Testnet);
        assert_eq!(network_from_args(vec!["-testnet=0".to_string(), "--testnet".to_string()]), Network::Testnet);
    }

    #[test]
    fn per_network_instances_are_cached() {
        install_known_headers();
        let main = params_for(Network::Main).unwrap();
        let test = params_for(Network::Testnet).unwrap();
        assert!(std::ptr::eq(main, params_for(Network::Main).unwrap()));
        assert!(std::ptr::eq(test, params_for(Network::Testnet).unwrap()));
        assert_eq!(main.network, Network::Main);
        assert_eq!(test.network, Network::Testnet);
        assert_ne!(main.magic, test.magic);
    }

    // Unit tests share the process-wide selection, so nothing here selects
    // the test network; the selection sequence lives in tests/registry.rs.
    #[test]
    fn main_is_active_by_default() {
        install_known_headers();
        assert_eq!(selected_network(), Network::Main);
        assert_eq!(params().network, Network::Main);
        assert_eq!(genesis_block().block_hash(&KnownHeaders::published()), params().genesis_hash);
        assert!(fixed_seeds().is_empty());
    }

    #[test]
    fn header_hasher_is_installed_once() {
        install_known_headers();
        assert!(!install_header_hasher(crate::test_helpers::Sha256dHeaders));
        assert!(params_for(Network::Main).is_ok());
    }
}
