// Copyright (c) 2018 The MasterCoin developers
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.
//

//! Prints the parameters of the network selected by `-testnet`.
//!
//! The genesis constants and hardened checkpoints are printed first. The
//! remaining parameters need a verified genesis block and are only printed
//! once a block header hash function is installed; without one the tool
//! exits with status 1, as the node would.

use std::process;

use log::{error, info};

use mastercoin::blockdata::constants::GenesisDescriptor;
use mastercoin::chainparams;
use mastercoin::checkpoints;
use mastercoin::consensus::params::{Base58Type, Params};
use mastercoin::network::constants::Network;

fn print_constants(network: Network) {
    let genesis = GenesisDescriptor::for_network(network);
    println!("network:              {}", network);
    println!("genesis (expected):   {}", genesis.hash);
    println!("genesis merkle root:  {}", genesis.merkle_root);
    println!("genesis time/bits:    {} / {:#010x} nonce {}", genesis.time, genesis.bits, genesis.nonce);
    match checkpoints::for_network(network) {
        Ok(table) => {
            for (height, hash) in table.iter() {
                println!("checkpoint {:<10}{}", format!("{}:", height), hash);
            }
        }
        Err(e) => error!("{} checkpoint table: {}", network, e),
    }
}

fn print_params(params: &Params) {
    println!("magic:                {:02x}{:02x}{:02x}{:02x}",
             params.magic[0], params.magic[1], params.magic[2], params.magic[3]);
    println!("ports:                p2p {} / rpc {}", params.default_port, params.rpc_port);
    println!("data dir:             {:?}", params.data_dir);
    println!("pow limit:            {:x}", params.pow_limit);
    println!("genesis:              {} (verified)", params.genesis_hash);
    println!("alert key:            {}", params.alert_pubkey);
    for kind in Base58Type::ALL.iter() {
        println!("prefix {:<16}{:02x?}", format!("{:?}:", kind), params.base58_prefix(*kind));
    }
    for seed in &params.dns_seeds {
        println!("dns seed:             {}", seed.host);
    }
    println!("fixed seeds:          {}", params.fixed_seeds.len());
    println!("checkpoints:          {} (estimate {})",
             params.checkpoints.len(), params.checkpoints.total_blocks_estimate());
    println!("last pow block:       {}", params.last_pow_block);
    println!("pos start block:      {}", params.pos_start_block);
    println!("masternode payments:  {}", params.masternode_payment_start_block);
    println!("pool:                 {} txs, dummy {}", params.pool_max_transactions, params.pool_dummy_address);
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let network = chainparams::network_from_args(std::env::args().skip(1));
    print_constants(network);

    let params = match chainparams::select_params(network) {
        Ok(params) => params,
        Err(e) => {
            error!("cannot start: {}", e);
            process::exit(1);
        }
    };
    info!("{} parameters verified", params.network);
    print_params(params);
}
