// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/create2-tools/blob/main/licenses/COPYRIGHT.md

use alloy::providers::ProviderBuilder;
use create2_tools::{
    core::{deployment, salt::Salt},
    host::{ProviderHost, TerminalLog},
};
use eyre::{Result, WrapErr};

use crate::common_args::{ArtifactArgs, ProviderArgs};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    artifact: ArtifactArgs,
    #[command(flatten)]
    provider: ProviderArgs,
    /// Salt for the deterministic address.
    #[arg(long)]
    salt: Salt,
}

pub async fn exec(args: Args) -> Result<()> {
    let provider = ProviderBuilder::new()
        .connect(&args.provider.endpoint)
        .await
        .wrap_err_with(|| format!("failed to connect to {}", args.provider.endpoint))?;
    let chain = ProviderHost::new(provider);
    let log = TerminalLog;

    let mut session = super::prepare_session(&args.artifact, &chain, &log).await?;
    session.set_salt(args.salt)?;

    let payload = session.build_payload()?;
    let address = deployment::resolve(
        &payload,
        &args.salt,
        args.artifact.factory_address,
        &chain,
        &log,
    )
    .await?;
    println!("{address}");
    Ok(())
}
