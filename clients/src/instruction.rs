use sha2::{Digest, Sha256};
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};
use solana_system_interface::program as system_program;

use crate::{config::Deployment, pda::MintAccounts};

/// Anchor sighash for `mint_tokens`: first 8 bytes of `sha256("global:mint_tokens")`.
pub fn mint_tokens_discriminator() -> [u8; 8] {
    let mut hasher = Sha256::new();
    hasher.update(b"global:mint_tokens");
    let result = hasher.finalize();
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&result[..8]);
    discriminator
}

/// Build the `mint_tokens` call. The account order below is what the program
/// deserializes against; do not reorder.
pub fn build_mint_tokens_instruction(
    deployment: &Deployment,
    signer: &Pubkey,
    accounts: &MintAccounts,
) -> Instruction {
    let metas = vec![
        AccountMeta::new(deployment.mint, false),                      // mint
        AccountMeta::new_readonly(accounts.config, false),             // config (PDA)
        AccountMeta::new(accounts.user_ata, false),                    // user_ata
        AccountMeta::new(accounts.user_state, false),                  // user_state (PDA)
        AccountMeta::new(*signer, true),                               // signer
        AccountMeta::new_readonly(accounts.mint_authority, false),     // mint_authority (PDA)
        AccountMeta::new_readonly(spl_associated_token_account::id(), false), // associated_token_program
        AccountMeta::new_readonly(spl_token::id(), false),             // token_program
        AccountMeta::new_readonly(system_program::id(), false),        // system_program
    ];

    Instruction::new_with_bytes(deployment.program_id, &mint_tokens_discriminator(), metas)
}
