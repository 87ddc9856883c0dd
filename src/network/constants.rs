// Copyright (c) 2018 The MasterCoin developers
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.
//

//! Network constants
//!
//! This module provides the closed set of networks the node can run on,
//! and the service flags advertised by peer addresses.
//!
//! # Example: choosing a network from the command line flag
//!
//! ```rust
//! use mastercoin::network::constants::Network;
//!
//! assert_eq!(Network::from_testnet_flag(true), Network::Testnet);
//! assert_eq!("main".parse::<Network>().unwrap(), Network::Main);
//! ```

use std::{error, fmt, ops};
use std::str::FromStr;

/// The network to act on
#[derive(Copy, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Network {
    /// Production network
    Main,
    /// Public test network
    Testnet,
}

impl Network {
    /// Resolves the `-testnet` command line flag.
    pub fn from_testnet_flag(testnet: bool) -> Network {
        if testnet {
            Network::Testnet
        } else {
            Network::Main
        }
    }

    /// Whether this is the test network
    pub fn is_testnet(self) -> bool {
        self == Network::Testnet
    }
}

impl Default for Network {
    fn default() -> Network {
        Network::Main
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            Network::Main => "main",
            Network::Testnet => "testnet",
        })
    }
}

impl FromStr for Network {
    type Err = ParseNetworkError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "main" | "mainnet" => Ok(Network::Main),
            "test" | "testnet" => Ok(Network::Testnet),
            _ => Err(ParseNetworkError(s.to_owned())),
        }
    }
}

/// An error in parsing network string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNetworkError(pub String);

impl fmt::Display for ParseNetworkError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "failed to parse {} as network", self.0)
    }
}

impl error::Error for ParseNetworkError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}

/// Flags to indicate which network services a node supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ServiceFlags(u64);

impl ServiceFlags {
    /// NONE means no services supported.
    pub const NONE: ServiceFlags = ServiceFlags(0);

    /// NETWORK means that the node is capable of serving the complete block chain.
    /// Bootstrap seeds are assumed to be full nodes.
    pub const NETWORK: ServiceFlags = ServiceFlags(1 << 0);

    /// Add [ServiceFlags] together.
    ///
    /// Returns itself.
    pub fn add(&mut self, other: ServiceFlags) -> ServiceFlags {
        self.0 |= other.0;
        *self
    }

    /// Check whether [ServiceFlags] are included in this one.
    pub fn has(&self, flags: ServiceFlags) -> bool {
        (self.0 | flags.0) == self.0
    }

    /// Get the integer representation of this [ServiceFlags].
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ServiceFlags {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if *self == ServiceFlags::NONE {
            return write!(f, "ServiceFlags(NONE)");
        }
        if *self == ServiceFlags::NETWORK {
            return write!(f, "ServiceFlags(NETWORK)");
        }
        write!(f, "ServiceFlags({:#x})", self.0)
    }
}

impl From<u64> for ServiceFlags {
    fn from(f: u64) -> Self {
        ServiceFlags(f)
    }
}

impl ops::BitOr for ServiceFlags {
    type Output = Self;

    fn bitor(mut self, rhs: Self) -> Self {
        self.add(rhs)
    }
}
