//! Process configuration read from the environment (and `.env`, loaded by the binary).
//!
//! Everything is parsed once at startup. A bad secret key or malformed number is
//! fatal here, before any transaction is built.

use solana_sdk::{pubkey, pubkey::Pubkey, signature::Keypair};
use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_RPC_URL: &str = "https://cold-hanni-fast-mainnet.helius-rpc.com/";
pub const DEFAULT_PROGRAM_ID: Pubkey = pubkey!("pvwX4B67eRRjBGQ4jJUtiUJEFQbR4bvG6Wbe6mkCjtt");
pub const DEFAULT_MINT_ADDRESS: Pubkey = pubkey!("4ALKS249vAS3WSCUxXtHJVZN753kZV6ucEQC41421Rka");
pub const DEFAULT_CONFIG_ADDRESS: Pubkey = pubkey!("B4cAqfPKtzsqm5mxDk4JkbvPPJoKyXNMyzj5X8SMfdQn");
pub const DEFAULT_CONFIRM_TIMEOUT: Duration = Duration::from_secs(60);

/// The on-chain identities the client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deployment {
    pub program_id: Pubkey,
    pub mint: Pubkey,
    pub config_identity: Pubkey,
}

impl Default for Deployment {
    fn default() -> Self {
        Self {
            program_id: DEFAULT_PROGRAM_ID,
            mint: DEFAULT_MINT_ADDRESS,
            config_identity: DEFAULT_CONFIG_ADDRESS,
        }
    }
}

#[derive(Debug)]
pub struct Settings {
    pub signer: Keypair,
    pub rpc_url: String,
    /// Fee rate as configured; scaled by `PRIORITY_FEE_SCALE` when the
    /// compute budget instruction is built.
    pub priority_fee: f64,
    pub confirm_timeout: Duration,
    pub deployment: Deployment,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Parse settings from any key/value source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let secret = get("PRIVATE_KEY").ok_or(ConfigError::Missing("PRIVATE_KEY"))?;
        let signer = parse_keypair(&secret)?;

        let rpc_url = get("RPC_URL").unwrap_or_else(|| DEFAULT_RPC_URL.to_string());

        let priority_fee = match get("PRIORITY_FEE") {
            Some(value) => parse_non_negative("PRIORITY_FEE", &value)?,
            None => 0.0,
        };

        let confirm_timeout = match get("CONFIRM_TIMEOUT_MS") {
            Some(value) => Duration::from_millis(
                value
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidNumber {
                        key: "CONFIRM_TIMEOUT_MS",
                        value,
                    })?,
            ),
            None => DEFAULT_CONFIRM_TIMEOUT,
        };

        let defaults = Deployment::default();
        let deployment = Deployment {
            program_id: parse_pubkey_or("PROGRAM_ID", get("PROGRAM_ID"), defaults.program_id)?,
            mint: parse_pubkey_or("MINT_ADDRESS", get("MINT_ADDRESS"), defaults.mint)?,
            config_identity: parse_pubkey_or(
                "CONFIG_ADDRESS",
                get("CONFIG_ADDRESS"),
                defaults.config_identity,
            )?,
        };

        Ok(Self {
            signer,
            rpc_url,
            priority_fee,
            confirm_timeout,
            deployment,
        })
    }
}

/// Decode a base58 64-byte secret key (the format wallets export).
pub fn parse_keypair(encoded: &str) -> Result<Keypair, ConfigError> {
    let bytes = bs58::decode(encoded.trim()).into_vec()?;
    if bytes.len() != 64 {
        return Err(ConfigError::SecretKeyLength(bytes.len()));
    }
    Keypair::try_from(bytes.as_slice()).map_err(|e| ConfigError::SecretKeyInvalid(e.to_string()))
}

fn parse_pubkey_or(
    key: &'static str,
    value: Option<String>,
    default: Pubkey,
) -> Result<Pubkey, ConfigError> {
    match value {
        Some(v) => Pubkey::from_str(v.trim()).map_err(|source| ConfigError::InvalidPubkey { key, source }),
        None => Ok(default),
    }
}

fn parse_non_negative(key: &'static str, value: &str) -> Result<f64, ConfigError> {
    match value.trim().parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 0.0 => Ok(n),
        _ => Err(ConfigError::InvalidNumber {
            key,
            value: value.to_string(),
        }),
    }
}
