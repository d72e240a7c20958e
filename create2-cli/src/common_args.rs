// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/create2-tools/blob/main/licenses/COPYRIGHT.md

use std::path::PathBuf;

use alloy::primitives::Address;
use create2_tools::core::deployment::FACTORY_ADDRESS;

#[derive(Debug, clap::Args)]
pub struct ArtifactArgs {
    /// Path to the compiled contract JSON artifact.
    #[arg(long)]
    pub artifact: PathBuf,
    /// Constructor arguments, in declared order.
    #[arg(
        long,
        num_args(0..),
        value_name = "ARGS",
        allow_hyphen_values = true,
    )]
    pub constructor_args: Vec<String>,
    /// Address of the CREATE2 factory.
    #[arg(long, default_value_t = FACTORY_ADDRESS)]
    pub factory_address: Address,
}

#[derive(Debug, clap::Args)]
pub struct ProviderArgs {
    /// RPC endpoint.
    #[arg(short, long, default_value = "http://localhost:8545")]
    pub endpoint: String,
}
