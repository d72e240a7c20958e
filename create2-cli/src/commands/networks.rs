// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/create2-tools/blob/main/licenses/COPYRIGHT.md

use create2_tools::core::network::NETWORKS;
use eyre::Result;

pub fn exec() -> Result<()> {
    for network in NETWORKS {
        println!(
            "{:>3}  {:<6} {}",
            network.chain_id, network.chain_id_hex, network.name
        );
    }
    Ok(())
}
