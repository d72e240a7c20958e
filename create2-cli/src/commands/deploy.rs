// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/create2-tools/blob/main/licenses/COPYRIGHT.md

use alloy::{
    network::EthereumWallet, providers::ProviderBuilder, signers::local::PrivateKeySigner,
};
use create2_tools::{
    core::salt::Salt,
    host::{ProviderHost, TerminalLog},
    ops,
};
use eyre::{Result, WrapErr};

use crate::common_args::{ArtifactArgs, ProviderArgs};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    artifact: ArtifactArgs,
    #[command(flatten)]
    provider: ProviderArgs,
    /// Salt for the deterministic address. Random when omitted.
    #[arg(long)]
    salt: Option<Salt>,
    /// Private key of the deploying account, in hex.
    #[arg(long)]
    private_key: String,
}

pub async fn exec(args: Args) -> Result<()> {
    let signer: PrivateKeySigner = args
        .private_key
        .parse()
        .wrap_err("invalid private key")?;
    let wallet = EthereumWallet::from(signer);
    let provider = ProviderBuilder::new()
        .wallet(wallet)
        .connect(&args.provider.endpoint)
        .await
        .wrap_err_with(|| format!("failed to connect to {}", args.provider.endpoint))?;
    let chain = ProviderHost::with_wallet(provider);
    let log = TerminalLog;

    let mut session = super::prepare_session(&args.artifact, &chain, &log).await?;
    match args.salt {
        Some(salt) => session.set_salt(salt)?,
        None => {
            let salt = session.generate_salt()?;
            log::info!("generated salt: {salt}");
        }
    }

    let record = ops::deploy(&mut session, &chain, &log).await?;
    println!("{}", record.address);
    Ok(())
}
