use solana_sdk::{
    compute_budget::ComputeBudgetInstruction,
    instruction::Instruction,
    signature::{Keypair, Signer},
    transaction::Transaction,
};

use crate::{
    chain::ChainClient,
    config::Deployment,
    error::MintError,
    instruction::build_mint_tokens_instruction,
    pda::MintAccounts,
};

/// Multiplier applied to the configured fee rate to get micro-lamports per CU.
pub const PRIORITY_FEE_SCALE: f64 = 1e9;

pub fn micro_lamports_per_cu(priority_fee: f64) -> u64 {
    // float to int casts saturate, NaN becomes 0
    (priority_fee * PRIORITY_FEE_SCALE).round() as u64
}

pub fn priority_fee_instruction(priority_fee: f64) -> Instruction {
    ComputeBudgetInstruction::set_compute_unit_price(micro_lamports_per_cu(priority_fee))
}

/// Build, date and sign a fresh mint transaction.
///
/// The compute budget instruction goes first so it prices the mint that follows.
/// The blockhash fetch is the only network call; its failure is returned as is.
pub async fn assemble_mint_transaction<C: ChainClient>(
    chain: &C,
    signer: &Keypair,
    deployment: &Deployment,
    priority_fee: f64,
) -> Result<Transaction, MintError> {
    let payer = signer.pubkey();
    let accounts = MintAccounts::derive(deployment, &payer);
    let mint_ix = build_mint_tokens_instruction(deployment, &payer, &accounts);

    let mut transaction =
        Transaction::new_with_payer(&[priority_fee_instruction(priority_fee), mint_ix], Some(&payer));

    let recent_blockhash = chain.latest_blockhash().await?;
    transaction.try_sign(&[signer], recent_blockhash)?;
    Ok(transaction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fee_scaling() {
        assert_eq!(micro_lamports_per_cu(0.0), 0);
        assert_eq!(micro_lamports_per_cu(0.000001), 1_000);
        assert_eq!(micro_lamports_per_cu(0.00005), 50_000);
        assert_eq!(micro_lamports_per_cu(1.0), 1_000_000_000);
    }

    #[test]
    fn test_fee_scaling_saturates() {
        assert_eq!(micro_lamports_per_cu(f64::MAX), u64::MAX);
        assert_eq!(micro_lamports_per_cu(-1.0), 0);
    }

    #[test]
    fn test_priority_fee_instruction() {
        assert_eq!(
            priority_fee_instruction(0.000002),
            ComputeBudgetInstruction::set_compute_unit_price(2_000)
        );
    }
}
