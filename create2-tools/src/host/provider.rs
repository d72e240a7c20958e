// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/create2-tools/blob/main/licenses/COPYRIGHT.md

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, Bytes, B256},
    providers::{Provider, WalletProvider},
    rpc::types::TransactionRequest,
    transports::{RpcError, TransportErrorKind},
};
use create2_host::{chain::USER_REJECTED_CODE, ChainError, ChainHost};

/// [`ChainHost`] over an alloy provider.
#[derive(Debug)]
pub struct ProviderHost<P> {
    provider: P,
    accounts: Vec<Address>,
}

impl<P: Provider> ProviderHost<P> {
    /// Wraps a read-only provider. Accounts are whatever the endpoint
    /// reports, which is usually nothing on public RPC.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            accounts: Vec::new(),
        }
    }
}

impl<P: Provider + WalletProvider> ProviderHost<P> {
    /// Wraps a wallet-backed provider; the wallet's signers become the
    /// account list.
    pub fn with_wallet(provider: P) -> Self {
        let accounts = provider.signer_addresses().collect();
        Self { provider, accounts }
    }
}

fn classify(err: RpcError<TransportErrorKind>) -> ChainError {
    // Wallet-backed transports surface an explicit user denial as the
    // EIP-1193 4001 error payload.
    if let Some(payload) = err.as_error_resp() {
        if payload.code == USER_REJECTED_CODE {
            return ChainError::UserRejected(payload.message.to_string());
        }
    }
    ChainError::Rpc(err.to_string())
}

impl<P> ChainHost for ProviderHost<P>
where
    P: Provider + Send + Sync,
{
    async fn request_accounts(&self) -> Result<Vec<Address>, ChainError> {
        if !self.accounts.is_empty() {
            return Ok(self.accounts.clone());
        }
        self.provider.get_accounts().await.map_err(classify)
    }

    async fn chain_id(&self) -> Result<u64, ChainError> {
        self.provider.get_chain_id().await.map_err(classify)
    }

    async fn switch_chain(&self, chain_id_hex: &str) -> Result<(), ChainError> {
        // A JSON-RPC endpoint is pinned to one chain; only a no-op
        // switch can succeed.
        let requested = chain_id_hex.strip_prefix("0x").unwrap_or(chain_id_hex);
        let requested = u64::from_str_radix(requested, 16)
            .map_err(|err| ChainError::Rpc(format!("bad chain id `{chain_id_hex}`: {err}")))?;
        let connected = self.chain_id().await?;
        if requested == connected {
            Ok(())
        } else {
            Err(ChainError::Unsupported)
        }
    }

    async fn send_transaction(
        &self,
        to: Address,
        data: Bytes,
        from: Address,
    ) -> Result<B256, ChainError> {
        let tx = TransactionRequest::default()
            .with_to(to)
            .with_from(from)
            .with_input(data);
        let pending = self.provider.send_transaction(tx).await.map_err(classify)?;
        let receipt = pending
            .get_receipt()
            .await
            .map_err(|err| ChainError::Rpc(err.to_string()))?;
        if !receipt.status() {
            return Err(ChainError::Reverted(format!(
                "tx {}",
                receipt.transaction_hash
            )));
        }
        Ok(receipt.transaction_hash)
    }

    async fn call(&self, to: Address, data: Bytes) -> Result<Bytes, ChainError> {
        let tx = TransactionRequest::default().with_to(to).with_input(data);
        self.provider.call(tx).await.map_err(classify)
    }
}
