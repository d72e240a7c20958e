// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/create2-tools/blob/main/licenses/COPYRIGHT.md

//! Wallet/provider capability.

use alloy_primitives::{Address, Bytes, B256};

/// EIP-1193 `userRejectedRequest` error code, raised by wallets when the
/// user denies a transaction or a chain-switch request.
pub const USER_REJECTED_CODE: i64 = 4001;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ChainError {
    /// The user explicitly denied the request at the wallet layer.
    #[error("{0}")]
    UserRejected(String),
    #[error("transaction reverted: {0}")]
    Reverted(String),
    #[error("rpc error: {0}")]
    Rpc(String),
    #[error("operation not supported by this provider")]
    Unsupported,
}

/// Push notifications from the provider.
///
/// The embedder owns the underlying listener registrations and must
/// deregister them when the session ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainEvent {
    AccountsChanged(Vec<Address>),
    NetworkChanged(u64),
}

/// Access to the connected wallet/provider.
///
/// `send_transaction` must not return before the transaction is mined;
/// the deployment protocol relies on the factory state being visible to
/// the read-only resolve call that follows.
pub trait ChainHost {
    fn request_accounts(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Address>, ChainError>> + Send;

    fn chain_id(&self) -> impl std::future::Future<Output = Result<u64, ChainError>> + Send;

    /// Ask the wallet to switch to the chain given by its hex id (e.g. `0x1`).
    fn switch_chain(
        &self,
        chain_id_hex: &str,
    ) -> impl std::future::Future<Output = Result<(), ChainError>> + Send;

    /// Send a state-changing transaction and wait for confirmation,
    /// returning the transaction hash.
    fn send_transaction(
        &self,
        to: Address,
        data: Bytes,
        from: Address,
    ) -> impl std::future::Future<Output = Result<B256, ChainError>> + Send;

    /// Execute a read-only call and return the raw return data.
    fn call(
        &self,
        to: Address,
        data: Bytes,
    ) -> impl std::future::Future<Output = Result<Bytes, ChainError>> + Send;
}
