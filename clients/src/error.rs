use solana_client::client_error::ClientError;
use solana_sdk::{pubkey::ParsePubkeyError, signer::SignerError};
use std::time::Duration;
use thiserror::Error as ThisError;

/// Startup failures. The loop cannot run without a valid configuration,
/// so these terminate the process.
#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
    #[error("PRIVATE_KEY is not valid base58: {0}")]
    SecretKeyEncoding(#[from] bs58::decode::Error),
    #[error("PRIVATE_KEY must decode to 64 bytes, got {0}")]
    SecretKeyLength(usize),
    #[error("PRIVATE_KEY is not a valid ed25519 keypair: {0}")]
    SecretKeyInvalid(String),
    #[error("{key} is not a valid public key: {source}")]
    InvalidPubkey {
        key: &'static str,
        source: ParsePubkeyError,
    },
    #[error("{key} must be a non-negative number, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },
}

/// Failures of a single mint attempt. The submission loop discards all of
/// them alike.
#[derive(ThisError, Debug)]
pub enum MintError {
    #[error("rpc error: {0}")]
    Rpc(#[from] ClientError),
    #[error("confirmation not observed within {0:?}")]
    ConfirmTimeout(Duration),
    #[error("signing failed: {0}")]
    Signing(#[from] SignerError),
}
