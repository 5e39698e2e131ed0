use mint_loop_client::{Minter, Settings};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{commitment_config::CommitmentConfig, signature::Signer};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    // a bad or missing key ends the process here, before the loop
    let settings = Settings::from_env()?;

    tracing::info!(
        rpc_url = %settings.rpc_url,
        signer = %settings.signer.pubkey(),
        program_id = %settings.deployment.program_id,
        mint = %settings.deployment.mint,
        priority_fee = settings.priority_fee,
        "starting mint loop"
    );

    let client = RpcClient::new_with_commitment(settings.rpc_url.clone(), CommitmentConfig::confirmed());
    let minter = Minter::new(client, settings);
    match minter.run_forever().await {}
}
