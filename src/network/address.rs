// Copyright (c) 2018 The MasterCoin developers
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.
//

//! MasterCoin network addresses
//!
//! This module defines the structure of a peer address as advertised in
//! `addr` messages: its services, socket and last-seen time.
//!

use std::{fmt, io};
use std::net::{IpAddr, Ipv6Addr, SocketAddr};

use crate::consensus::encode::{self, Encodable};
use crate::network::constants::ServiceFlags;

/// A message which can be sent on the MasterCoin network
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Address {
    /// Services provided by the peer whose address this is
    pub services: ServiceFlags,
    /// Network socket of the peer
    pub socket: SocketAddr,
    /// Last time the peer was seen, in seconds since the epoch
    pub time: u32,
}

impl Address {
    /// Create an address message for a socket
    pub fn new(socket: &SocketAddr, services: ServiceFlags, time: u32) -> Address {
        Address { services, socket: *socket, time }
    }

    /// The IP in the 16-byte form carried on the wire; IPv4 is IPv6-mapped.
    pub fn ip_bytes(&self) -> [u8; 16] {
        let ip6 = match self.socket.ip() {
            IpAddr::V4(ip) => ip.to_ipv6_mapped(),
            IpAddr::V6(ip) => ip,
        };
        ip6.octets()
    }

    /// Returns the IPv6 form of the address.
    pub fn ipv6(&self) -> Ipv6Addr {
        Ipv6Addr::from(self.ip_bytes())
    }
}

impl Encodable for Address {
    #[inline]
    fn consensus_encode<S: io::Write>(&self, mut s: S) -> Result<usize, encode::Error> {
        let mut len = self.time.consensus_encode(&mut s)?;
        len += self.services.as_u64().consensus_encode(&mut s)?;
        s.write_all(&self.ip_bytes())?;
        // port is big-endian on the wire
        s.write_all(&self.socket.port().to_be_bytes())?;
        Ok(len + 16 + 2)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.socket, f)
    }
}
