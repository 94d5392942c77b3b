//! End-to-end runs against a node with the factory deployed. Point
//! `DTF_ETHEREUM_URL` and `DTF_FACTORY_DEPLOYMENT_PATH` at a running
//! `hardhat node` and run with `--ignored`.

use dtf_addresses::{Addresses, FactoryDeployment};
use dtf_operations::{
    agent::{Agent, Outcome},
    catalog::{load_deployment_info, prepare_tokens, TokenCatalog},
    chain::{check_fork, Chain},
    config::SimulationConfig,
    gateway::{ChainGateway, Gateway},
    oplog::OperationLog,
    random,
    scheduler::Scheduler,
    wallets::WalletPool,
};
use ethers::types::U256;
use eyre::{eyre, Result};

async fn setup(config: &SimulationConfig) -> Result<(ChainGateway, WalletPool, TokenCatalog, random::SimRng)> {
    let chain = Chain::connect(&config.ethereum_url).await?;
    let deployer = chain.deployer(config.private_key.as_deref(), &config.mnemonic)?;
    let factory = FactoryDeployment::load(&config.factory_deployment_path)?;
    let info = load_deployment_info(&config.deployment_info_path);
    let addresses = Addresses::new(&factory, info.as_ref())?;
    let mut gateway = ChainGateway::new(chain, deployer.clone(), addresses.factory, config.gas_limit).await?;

    let (mut rng, _) = random::seeded(config.seed.or(Some(0)));
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

    Ok((gateway, wallets, catalog, rng))
}

#[ignore]
#[tokio::test]
async fn test_simulation() -> Result<()> {
    let _ = tracing_subscriber::fmt::try_init();

    let dir = std::env::temp_dir().join(format!("dtf-simulation-{}", std::process::id()));
    std::fs::create_dir_all(&dir)?;
    let config = SimulationConfig {
        num_funds_to_create: 2,
        num_operations: 10,
        operation_interval_ms: 0,
        log_path: dir.join("dtf-operations-log.json"),
        ..SimulationConfig::from_env()?
    };
    let (gateway, wallets, catalog, rng) = setup(&config).await?;
    let funds_before = gateway.fund_count().await?;

    let log = OperationLog::new(&config.log_path);
    let agent = Agent::new(gateway, config, catalog, log.clone(), rng);
    let mut scheduler = Scheduler::new(agent, wallets, 0);
    let summary = scheduler.run().await;

    let funds_after = scheduler.agent().gateway().fund_count().await?;
    assert_eq!(funds_after - funds_before, U256::from(summary.funds_created as u64));
    assert!(log.entries().len() >= summary.funds_created);

    Ok(())
}

#[ignore]
#[tokio::test]
async fn test_owner_bookkeeping() -> Result<()> {
    let _ = tracing_subscriber::fmt::try_init();

    let dir = std::env::temp_dir().join(format!("dtf-ownership-{}", std::process::id()));
    std::fs::create_dir_all(&dir)?;
    let config = SimulationConfig {
        num_wallets: 1,
        log_path: dir.join("dtf-operations-log.json"),
        ..SimulationConfig::from_env()?
    };
    let (gateway, wallets, catalog, rng) = setup(&config).await?;
    let (owner, successor) = (wallets.addresses()[0], wallets.addresses()[1]);

    let mut agent = Agent::new(gateway, config.clone(), catalog, OperationLog::new(&config.log_path), rng);
    let fund = agent
        .create_fund(owner)
        .await
        .ok_or_else(|| eyre!("fund creation failed"))?;
    assert_eq!(agent.gateway().fund_owner(fund).await?, owner);

    // Fee withdrawals and ownership transfers are owner-only.
    assert!(matches!(agent.withdraw_fees(successor, fund).await?, Outcome::Skipped(_)));
    assert_eq!(agent.transfer_ownership(owner, fund, successor).await?, Outcome::Completed);
    assert_eq!(agent.gateway().fund_owner(fund).await?, successor);

    Ok(())
}

#[ignore]
#[tokio::test]
async fn test_check_fork() -> Result<()> {
    let config = SimulationConfig::from_env()?;
    let chain = Chain::connect(&config.ethereum_url).await?;
    let status = check_fork(&chain.provider()).await?;
    assert_eq!(status.chain_id, chain.chain_id());

    Ok(())
}
