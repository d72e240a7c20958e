// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/create2-tools/blob/main/licenses/COPYRIGHT.md

//! Two-phase factory deployment protocol.
//!
//! Phase one submits `(payload, salt)` to the factory's deploy entry
//! point and waits for confirmation. Phase two resolves the deterministic
//! address with a read-only call carrying the exact same pair; CREATE2
//! addresses are a pure function of (deployer, salt, init-code hash), so
//! no second transaction is needed. Neither phase retries.

use std::time::SystemTime;

use alloy::primitives::Address;
use create2_host::{ChainError, ChainHost, LogHost, LogLevel};

use super::{payload::DeploymentPayload, salt::Salt};
use crate::utils::color::DebugColor;

pub mod factory;

pub use factory::FACTORY_ADDRESS;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeploymentError {
    /// The user denied the submit transaction at the wallet layer. The
    /// wallet's message is surfaced verbatim.
    #[error("{0}")]
    UserRejected(String),
    /// Any other submit or resolve failure: network error, revert,
    /// insufficient funds.
    #[error("deployment failed: {0}")]
    Failed(String),
}

impl From<ChainError> for DeploymentError {
    fn from(err: ChainError) -> Self {
        match err {
            ChainError::UserRejected(message) => Self::UserRejected(message),
            other => Self::Failed(other.to_string()),
        }
    }
}

/// A successful deployment, prepended to the session history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentRecord {
    pub address: Address,
    pub deployed_at: SystemTime,
}

/// Submits the deploy transaction and waits for it to be mined.
pub async fn submit(
    payload: &DeploymentPayload,
    salt: &Salt,
    sender: Address,
    factory: Address,
    chain: &impl ChainHost,
    log: &impl LogHost,
) -> Result<(), DeploymentError> {
    log.log(LogLevel::Info, "Deploying contract");
    let calldata = factory::deploy_calldata(payload, salt);
    let tx_hash = chain.send_transaction(factory, calldata, sender).await?;
    debug!(@grey, "deployment tx hash: {}", tx_hash.debug_lavender());
    log.log(LogLevel::Info, "Contract deployed, retrieving address");
    Ok(())
}

/// Resolves the deterministic address for an already-submitted pair.
///
/// Not expected to fail once submit succeeded, but any RPC failure still
/// propagates as [`DeploymentError::Failed`].
pub async fn resolve(
    payload: &DeploymentPayload,
    salt: &Salt,
    factory: Address,
    chain: &impl ChainHost,
    log: &impl LogHost,
) -> Result<Address, DeploymentError> {
    let calldata = factory::get_address_calldata(payload, salt);
    let ret = chain.call(factory, calldata).await?;
    let address = factory::decode_address(&ret)
        .map_err(|err| DeploymentError::Failed(format!("bad factory response: {err}")))?;
    log.log(
        LogLevel::Info,
        &format!("Address received, deployed contract address: {address}"),
    );
    Ok(address)
}

/// Runs both protocol phases and returns the resulting record.
pub async fn deploy(
    payload: &DeploymentPayload,
    salt: &Salt,
    sender: Address,
    factory: Address,
    chain: &impl ChainHost,
    log: &impl LogHost,
) -> Result<DeploymentRecord, DeploymentError> {
    submit(payload, salt, sender, factory, chain, log).await?;
    let address = resolve(payload, salt, factory, chain, log).await?;
    Ok(DeploymentRecord {
        address,
        deployed_at: SystemTime::now(),
    })
}
