use dtf_addresses::{Addresses, FactoryDeployment};
use dtf_operations::{
    agent::Agent,
    catalog::{load_deployment_info, prepare_tokens, TokenCatalog},
    chain::Chain,
    config::SimulationConfig,
    gateway::ChainGateway,
    logging,
    oplog::OperationLog,
    random,
    scheduler::Scheduler,
    wallets::WalletPool,
};
use eyre::Result;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();
    let config = SimulationConfig::from_env()?;
    info!("starting automated DTF operations");

    // Everything up to the wallet pool is required for the run to make sense,
    // so errors here end the process.
    let chain = Chain::connect(&config.ethereum_url).await?;
    let deployer = chain.deployer(config.private_key.as_deref(), &config.mnemonic)?;
    let factory = FactoryDeployment::load(&config.factory_deployment_path)?;
    let info = load_deployment_info(&config.deployment_info_path);
    let addresses = Addresses::new(&factory, info.as_ref())?;
    let mut gateway = ChainGateway::new(chain, deployer.clone(), addresses.factory, config.gas_limit).await?;

    let (mut rng, seed) = random::seeded(config.seed);
    info!(seed, "seeded random source");
    let wallets = WalletPool::load(
        &mut gateway,
        deployer,
        config.num_wallets,
        config.wallet_funding()?,
        &mut rng,
    )
    .await?;

    let primary = wallets.primary().address();
    let catalog = TokenCatalog::resolve(&gateway, &addresses.tokens, addresses.weth, primary).await;
    prepare_tokens(&gateway, &catalog, primary, &wallets.addresses(), &config).await;

    let log = OperationLog::new(&config.log_path);
    let agent = Agent::new(gateway, config, catalog, log.clone(), rng);
    let summary = Scheduler::new(agent, wallets, seed).run().await;
    info!(
        log = %log.path().display(),
        completed = summary.completed,
        "automated DTF operations completed"
    );

    Ok(())
}
