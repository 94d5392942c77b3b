//! The agent performs the fund operations on behalf of pool wallets. Each
//! operation returns `Ok(Outcome::Completed)` when its transactions were
//! confirmed, `Ok(Outcome::Skipped(_))` when a precondition read ruled it
//! out, and `Err` when a call failed.

mod allocations;
mod funds;
mod trades;

use std::fmt;

use ethers::types::{Address, U256};
use eyre::Result;
pub use trades::{deposit_amount, percentage_of};
use tracing::{debug, error};

use crate::{
    catalog::TokenCatalog,
    config::SimulationConfig,
    gateway::Gateway,
    oplog::{Operation, OperationLog},
    random::SimRng,
    registry::{Fund, FundRegistry},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    Skipped(String),
}

/// What approving a fund to pull a wallet's tokens amounted to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Approval {
    Approved(U256),
    AlreadyApproved,
    NothingToApprove,
}

pub struct Agent<G: Gateway> {
    gateway: G,
    config: SimulationConfig,
    catalog: TokenCatalog,
    registry: FundRegistry,
    log: OperationLog,
    rng: SimRng,
}

impl<G: Gateway> fmt::Debug for Agent<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Agent")
            .field("catalog", &self.catalog)
            .field("funds", &self.registry.len())
            .field("log", &self.log.path())
            .finish()
    }
}

impl<G: Gateway> Agent<G> {
    pub fn new(
        gateway: G,
        config: SimulationConfig,
        catalog: TokenCatalog,
        log: OperationLog,
        rng: SimRng,
    ) -> Self {
        Self {
            gateway,
            config,
            catalog,
            registry: FundRegistry::new(),
            log,
            rng,
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn gateway_mut(&mut self) -> &mut G {
        &mut self.gateway
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn catalog(&self) -> &TokenCatalog {
        &self.catalog
    }

    pub fn registry(&self) -> &FundRegistry {
        &self.registry
    }

    pub fn rng(&mut self) -> &mut SimRng {
        &mut self.rng
    }

    /// A uniformly random fund from the registry.
    pub fn random_fund(&mut self) -> Option<Fund> {
        self.registry.random(&mut self.rng).cloned()
    }

    /// Appends to the operation log. The operation already happened on chain,
    /// so a write failure is reported but not returned.
    fn record(&self, wallet: Address, fund: Address, operation: Operation) {
        if let Err(e) = self.log.record(wallet, fund, operation) {
            error!(path = %self.log.path().display(), %e, "error writing operation log");
        }
    }

    /// Reads the fund's owner. Returns a skip if it isn't `wallet`.
    async fn require_owner(&self, wallet: Address, fund: Address) -> Result<Option<Outcome>> {
        let owner = self.gateway.fund_owner(fund).await?;
        if owner != wallet {
            return Ok(Some(Outcome::Skipped(format!(
                "{:?} is not the owner of {:?} (owner is {:?})",
                wallet, fund, owner
            ))));
        }
        Ok(None)
    }

    /// Lets `fund` pull the wallet's entire balance of `token`. Nothing is
    /// sent if the allowance already covers the balance.
    pub async fn approve_for_fund(&self, wallet: Address, fund: Address, token: Address) -> Result<Approval> {
        let balance = self.gateway.token_balance(token, wallet).await?;
        if balance.is_zero() {
            return Ok(Approval::NothingToApprove);
        }
        let allowance = self.gateway.allowance(token, wallet, fund).await?;
        if allowance >= balance {
            debug!(?wallet, ?fund, ?token, %allowance, "allowance already covers balance");
            return Ok(Approval::AlreadyApproved);
        }
        self.gateway.approve(wallet, token, fund, balance).await?;
        debug!(?wallet, ?fund, ?token, %balance, "approved fund");
        Ok(Approval::Approved(balance))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use eyre::Result;

    use super::*;
    use crate::{
        catalog::CatalogToken,
        gateway::{
            mock::{Call, MockGateway},
            Token,
        },
        random::seeded,
    };

    /// An agent over a mock with a deployer, two more wallets and two
    /// mintable tokens. The log goes to a temporary directory.
    pub(crate) struct Fixture {
        pub agent: Agent<MockGateway>,
        pub wallets: Vec<Address>,
        pub tokens: Vec<Address>,
        pub _dir: tempfile::TempDir,
    }

    pub(crate) fn fixture(seed: u64, config: SimulationConfig) -> Result<Fixture> {
        let gateway = MockGateway::new();
        let wallets = (0..3).map(|_| gateway.add_wallet()).collect::<Vec<_>>();
        let tokens = vec![
            gateway.add_token("USDC", 6, true),
            gateway.add_token("WETH", 18, true),
        ];
        let catalog = TokenCatalog::new(
            tokens
                .iter()
                .zip([("USDC", 6), ("WETH", 18)])
                .map(|(&address, (symbol, decimals))| CatalogToken {
                    token: Token {
                        address,
                        symbol: symbol.into(),
                        decimals,
                    },
                    mintable: true,
                })
                .collect(),
        );
        let dir = tempfile::tempdir()?;
        let log = OperationLog::new(dir.path().join("dtf-operations-log.json"));
        let (rng, _) = seeded(Some(seed));
        Ok(Fixture {
            agent: Agent::new(gateway, config, catalog, log, rng),
            wallets,
            tokens,
            _dir: dir,
        })
    }

    #[tokio::test]
    async fn test_approval_is_idempotent() -> Result<()> {
        let f = fixture(0, SimulationConfig::default())?;
        let (wallet, fund, token) = (f.wallets[1], f.agent.gateway.add_fund(f.wallets[0]), f.tokens[0]);
        f.agent.gateway.set_balance(token, wallet, 5_000_000.into());

        assert_eq!(
            f.agent.approve_for_fund(wallet, fund, token).await?,
            Approval::Approved(5_000_000.into())
        );
        assert_eq!(
            f.agent.approve_for_fund(wallet, fund, token).await?,
            Approval::AlreadyApproved
        );
        assert_eq!(f.agent.gateway.count_calls(|c| matches!(c, Call::Approve { .. })), 1);

        // Nothing is approved for an empty balance.
        assert_eq!(
            f.agent.approve_for_fund(f.wallets[2], fund, token).await?,
            Approval::NothingToApprove
        );

        Ok(())
    }
}
