// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/create2-tools/blob/main/licenses/COPYRIGHT.md

use create2_host::{ChainHost, LogHost};
use create2_tools::{core::session::Session, ops};
use eyre::{bail, Result};

use crate::{common_args::ArtifactArgs, files::WorkspaceFiles};

mod deploy;
mod networks;
mod resolve;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Deploy a compiled artifact through the CREATE2 factory
    #[clap(visible_alias = "d")]
    Deploy(deploy::Args),
    /// Compute the deterministic address without deploying
    #[clap(visible_alias = "r")]
    Resolve(resolve::Args),
    /// List the supported networks
    Networks,
}

pub async fn exec(command: Command) -> Result<()> {
    match command {
        Command::Deploy(args) => deploy::exec(args).await,
        Command::Resolve(args) => resolve::exec(args).await,
        Command::Networks => networks::exec(),
    }
}

/// Loads the artifact and fills constructor inputs, positionally mapped
/// onto the declared parameters.
async fn prepare_session(
    artifact: &ArtifactArgs,
    chain: &impl ChainHost,
    log: &impl LogHost,
) -> Result<Session> {
    let mut session = Session::new().with_factory(artifact.factory_address);
    session.connect(chain).await?;

    let files = WorkspaceFiles::new(artifact.artifact.clone());
    if !ops::load_current_artifact(&mut session, &files, log).await? {
        bail!("artifact not found: {}", artifact.artifact.display());
    }

    let params = session.constructor_params().to_vec();
    if params.len() != artifact.constructor_args.len() {
        bail!(
            "mismatched number of constructor arguments (want {}; got {})",
            params.len(),
            artifact.constructor_args.len()
        );
    }
    for (param, value) in params.iter().zip(&artifact.constructor_args) {
        session.set_input(&param.name, value)?;
    }
    Ok(session)
}
