//! Program-derived addresses used by the `mint_tokens` instruction.
//!
//! Everything here is a pure function of public keys: no key material, no RPC.

use solana_sdk::pubkey::Pubkey;
use spl_associated_token_account::get_associated_token_address_with_program_id;

use crate::config::Deployment;

pub const USER_STATE_SEED: &[u8] = b"user_state";
pub const CONFIG_SEED: &[u8] = b"config";
pub const MINT_AUTHORITY_SEED: &[u8] = b"mint_authority";

/// Per-signer state PDA: `["user_state", signer]`.
pub fn user_state_address(signer: &Pubkey, program_id: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[USER_STATE_SEED, signer.as_ref()], program_id).0
}

/// Program config PDA: `["config", config_identity]`.
pub fn config_address(config_identity: &Pubkey, program_id: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[CONFIG_SEED, config_identity.as_ref()], program_id).0
}

/// Mint authority PDA, seeded by the config PDA rather than the config identity.
pub fn mint_authority_address(config_pda: &Pubkey, program_id: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[MINT_AUTHORITY_SEED, config_pda.as_ref()], program_id).0
}

/// Signer's associated token account for the mint (classic SPL Token program).
pub fn user_token_account(signer: &Pubkey, mint: &Pubkey) -> Pubkey {
    get_associated_token_address_with_program_id(signer, mint, &spl_token::id())
}

/// Every derived account the mint instruction needs for one signer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MintAccounts {
    pub config: Pubkey,
    pub user_state: Pubkey,
    pub mint_authority: Pubkey,
    pub user_ata: Pubkey,
}

impl MintAccounts {
    pub fn derive(deployment: &Deployment, signer: &Pubkey) -> Self {
        let program_id = &deployment.program_id;
        let config = config_address(&deployment.config_identity, program_id);
        Self {
            config,
            user_state: user_state_address(signer, program_id),
            mint_authority: mint_authority_address(&config, program_id),
            user_ata: user_token_account(signer, &deployment.mint),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Deployment {
        Deployment {
            program_id: Pubkey::new_unique(),
            mint: Pubkey::new_unique(),
            config_identity: Pubkey::new_unique(),
        }
    }

    #[test]
    fn test_config_then_mint_authority_is_reproducible() {
        let program_id = Pubkey::new_unique();
        let config_identity = Pubkey::new_unique();

        let first = config_address(&config_identity, &program_id);
        let second = config_address(&config_identity, &program_id);
        assert_eq!(first, second);

        let authority = mint_authority_address(&first, &program_id);
        assert_eq!(authority, mint_authority_address(&second, &program_id));
        assert_ne!(authority, first);
    }

    #[test]
    fn test_derive_is_deterministic() {
        let deployment = fixture();
        let signer = Pubkey::new_unique();

        let a = MintAccounts::derive(&deployment, &signer);
        let b = MintAccounts::derive(&deployment, &signer);
        assert_eq!(a, b);
    }

    #[test]
    fn test_derived_addresses_are_off_curve() {
        let deployment = fixture();
        let signer = Pubkey::new_unique();
        let accounts = MintAccounts::derive(&deployment, &signer);

        assert!(!accounts.config.is_on_curve());
        assert!(!accounts.user_state.is_on_curve());
        assert!(!accounts.mint_authority.is_on_curve());
    }

    #[test]
    fn test_user_state_depends_on_signer() {
        let deployment = fixture();
        let a = MintAccounts::derive(&deployment, &Pubkey::new_unique());
        let b = MintAccounts::derive(&deployment, &Pubkey::new_unique());

        assert_ne!(a.user_state, b.user_state);
        assert_ne!(a.user_ata, b.user_ata);
        // config side is signer independent
        assert_eq!(a.config, b.config);
        assert_eq!(a.mint_authority, b.mint_authority);
    }

    #[test]
    fn test_mint_authority_uses_config_pda_not_identity() {
        let deployment = fixture();
        let accounts = MintAccounts::derive(&deployment, &Pubkey::new_unique());

        let from_identity =
            mint_authority_address(&deployment.config_identity, &deployment.program_id);
        assert_ne!(accounts.mint_authority, from_identity);
    }
}
