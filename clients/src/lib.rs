//! Client that keeps submitting the `mint_tokens` instruction from one wallet.
//!
//! addresses (`pda`) -> instruction (`instruction`) -> signed transaction
//! (`transaction`) -> send and confirm (`runner`), over a `ChainClient`.

pub mod chain;
pub mod config;
pub mod error;
pub mod instruction;
pub mod pda;
pub mod runner;
pub mod transaction;

// Re-export commonly used items
pub use chain::ChainClient;
pub use config::{Deployment, Settings};
pub use error::{ConfigError, MintError};
pub use runner::Minter;
