//! The submission loop: build, send, confirm, repeat.
//!
//! There is no exit path. Any failure of an attempt is dropped and the next
//! attempt starts immediately, with no sleep in between.
// TODO: this hammers the RPC endpoint when it rejects or rate-limits us; add a
// retry delay once it is decided whether hot-looping is actually wanted.

use solana_sdk::signature::{Signature, Signer};
use std::convert::Infallible;

use crate::{
    chain::ChainClient, config::Settings, error::MintError,
    transaction::assemble_mint_transaction,
};

pub struct Minter<C> {
    chain: C,
    settings: Settings,
}

impl<C: ChainClient> Minter<C> {
    pub fn new(chain: C, settings: Settings) -> Self {
        Self { chain, settings }
    }

    pub fn chain(&self) -> &C {
        &self.chain
    }

    /// One Idle -> In-Flight -> Idle cycle.
    pub async fn mint_once(&self) -> Result<Signature, MintError> {
        let Settings {
            signer,
            priority_fee,
            confirm_timeout,
            deployment,
            ..
        } = &self.settings;

        let transaction =
            assemble_mint_transaction(&self.chain, signer, deployment, *priority_fee).await?;

        tracing::debug!("sending transaction");
        let signature = tokio::time::timeout(*confirm_timeout, self.chain.send_and_confirm(&transaction))
            .await
            .map_err(|_| MintError::ConfirmTimeout(*confirm_timeout))??;

        println!("User address: {}", signer.pubkey());
        println!("Transaction signature: {}", signature);
        Ok(signature)
    }

    /// Never returns; stop the process to stop minting.
    pub async fn run_forever(&self) -> Infallible {
        let mut attempt: u64 = 0;
        loop {
            attempt = attempt.wrapping_add(1);
            if let Err(error) = self.mint_once().await {
                tracing::debug!(attempt, %error, "mint attempt failed");
            }
        }
    }
}
