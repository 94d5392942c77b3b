use dtf_addresses::FactoryDeployment;
use dtf_operations::{
    agent::{Agent, Outcome},
    catalog::TokenCatalog,
    chain::Chain,
    config::SimulationConfig,
    gateway::{ChainGateway, Gateway},
    logging,
    oplog::OperationLog,
    random,
};
use ethers::{signers::Signer, types::Address};
use eyre::{eyre, Result};
use tracing::{info, warn};

/// Transfers a fund from the deployer to `DTF_NEW_OWNER`. The fund is given
/// by `DTF_FUND_ADDRESS`.
#[tokio::main]
async fn main() -> Result<()> {
    logging::init();
    let config = SimulationConfig::from_env()?;
    let fund = std::env::var("DTF_FUND_ADDRESS")
        .map_err(|_| eyre!("DTF_FUND_ADDRESS is not set"))?
        .parse::<Address>()?;
    let new_owner = std::env::var("DTF_NEW_OWNER")
        .map_err(|_| eyre!("DTF_NEW_OWNER is not set"))?
        .parse::<Address>()?;

    let chain = Chain::connect(&config.ethereum_url).await?;
    let deployer = chain.deployer(config.private_key.as_deref(), &config.mnemonic)?;
    let owner = deployer.address();
    let factory = FactoryDeployment::load(&config.factory_deployment_path)?.factory()?;
    let gateway = ChainGateway::new(chain, deployer, factory, config.gas_limit).await?;
    let name = gateway.fund_name(fund).await?;
    info!(?fund, %name, from = ?owner, to = ?new_owner, "transferring ownership");

    let (rng, _) = random::seeded(config.seed);
    let log = OperationLog::new(&config.log_path);
    let agent = Agent::new(gateway, config, TokenCatalog::default(), log, rng);
    match agent.transfer_ownership(owner, fund, new_owner).await? {
        Outcome::Completed => info!(?fund, ?new_owner, "ownership transferred"),
        Outcome::Skipped(reason) => warn!(?fund, %reason, "ownership not transferred"),
    }

    Ok(())
}
