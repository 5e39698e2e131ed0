//! The two network calls the client makes, behind a trait so the loop can be
//! driven by an in-memory chain in tests.

use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    commitment_config::CommitmentConfig, hash::Hash, signature::Signature,
    transaction::Transaction,
};

use crate::error::MintError;

#[allow(async_fn_in_trait)]
pub trait ChainClient {
    /// Most recent blockhash at `confirmed` commitment.
    async fn latest_blockhash(&self) -> Result<Hash, MintError>;

    /// Submit and wait until the cluster reports the transaction confirmed.
    async fn send_and_confirm(&self, transaction: &Transaction) -> Result<Signature, MintError>;
}

impl ChainClient for RpcClient {
    async fn latest_blockhash(&self) -> Result<Hash, MintError> {
        let (blockhash, _last_valid_height) = self
            .get_latest_blockhash_with_commitment(CommitmentConfig::confirmed())
            .await?;
        Ok(blockhash)
    }

    async fn send_and_confirm(&self, transaction: &Transaction) -> Result<Signature, MintError> {
        Ok(self.send_and_confirm_transaction(transaction).await?)
    }
}
