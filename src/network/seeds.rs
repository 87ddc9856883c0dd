// Copyright (c) 2018 The MasterCoin developers
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.
//

//! Bootstrap seeds
//!
//! DNS seeds are queried for peers at first start. Fixed seeds are a
//! compiled-in fallback: each packed table entry is an IPv4 address
//! stored as a host-order integer whose most significant byte is the
//! first octet.
//!
//! Fixed seeds get a "last seen" time between one and two weeks in the
//! past, so a node connects to one or two of them and then moves on to
//! the fresher addresses those peers hand out.
//!

use std::net::{Ipv4Addr, SocketAddr};
use std::time::{SystemTime, UNIX_EPOCH};

use log::debug;
use rand::Rng;

use crate::network::address::Address;
use crate::network::constants::ServiceFlags;

/// Seconds in a week
pub const ONE_WEEK: u64 = 7 * 24 * 60 * 60;

/// A DNS seed entry
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DnsSeed {
    /// Display name of the seed
    pub name: &'static str,
    /// Host queried for peer addresses
    pub host: &'static str,
}

/// DNS seeds of the main network
pub const MAINNET_DNS_SEEDS: &[DnsSeed] = &[
    DnsSeed { name: "mastercoin.talium.tech", host: "mastercoin.talium.tech" },
    DnsSeed { name: "v2seed1.mastercoin.one", host: "v2seed1.mastercoin.one" },
    DnsSeed { name: "v2seed2.mastercoin.one", host: "v2seed2.mastercoin.one" },
];

/// Packed fixed seeds of the main network
pub const MAINNET_FIXED_SEEDS: &[u32] = &[];

/// Packed fixed seeds of the test network
pub const TESTNET_FIXED_SEEDS: &[u32] = &[];

/// Unpacks `table` into peer addresses on `port`, dating each one a
/// random one to two weeks before `now`.
pub fn convert_seeds<R: Rng + ?Sized>(table: &[u32], port: u16, now: u64, rng: &mut R) -> Vec<Address> {
    let seeds: Vec<Address> = table
        .iter()
        .map(|&packed| {
            let socket = SocketAddr::from((Ipv4Addr::from(packed), port));
            let age = rng.gen_range(0..ONE_WEEK) + ONE_WEEK;
            let time = now.saturating_sub(age).min(u32::MAX as u64) as u32;
            Address::new(&socket, ServiceFlags::NETWORK, time)
        })
        .collect();
    debug!("converted {} fixed seeds on port {}", seeds.len(), port);
    seeds
}

/// [convert_seeds] against the system clock and the thread RNG.
pub fn convert_seeds_now(table: &[u32], port: u16) -> Vec<Address> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    convert_seeds(table, port, now, &mut rand::thread_rng())
}
