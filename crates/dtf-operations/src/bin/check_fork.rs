use dtf_operations::{
    chain::{check_fork, Chain},
    config::SimulationConfig,
    logging,
};
use eyre::Result;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();
    let config = SimulationConfig::from_env()?;
    let chain = Chain::connect(&config.ethereum_url).await?;
    let status = check_fork(&chain.provider()).await?;
    if status.is_fork() {
        info!(block_number = status.block_number, "running against a mainnet fork");
    }
    Ok(())
}
