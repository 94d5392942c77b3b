use chrono::Utc;
use ethers::types::{Address, U256};
use eyre::Result;
use rand::Rng;
use tracing::{error, info};

use super::{Agent, Outcome};
use crate::{
    gateway::{FundParams, Gateway},
    oplog::Operation,
    registry::Fund,
};

impl<G: Gateway> Agent<G> {
    /// Creates a fund with random fees from `creator` and adds it to the
    /// registry. Failures are logged and yield `None`; a confirmed creation
    /// without a `FundCreated` event is not retried.
    pub async fn create_fund(&mut self, creator: Address) -> Option<Address> {
        let params = FundParams {
            name: format!("{} {}", self.config.fund_name_prefix, Utc::now().timestamp_millis()),
            deposit_fee_bps: self.rng.gen_range(self.config.deposit_fee_range()),
            withdrawal_fee_bps: self.rng.gen_range(self.config.withdrawal_fee_range()),
            management_fee_bps: self.rng.gen_range(self.config.management_fee_range()),
            performance_fee_bps: self.rng.gen_range(self.config.performance_fee_range()),
        };
        info!(
            ?creator,
            name = %params.name,
            deposit_fee = params.deposit_fee_bps,
            withdrawal_fee = params.withdrawal_fee_bps,
            management_fee = params.management_fee_bps,
            performance_fee = params.performance_fee_bps,
            "creating fund"
        );

        let event = match self.gateway.create_fund(creator, &params).await {
            Ok(Some(event)) => event,
            Ok(None) => {
                error!(?creator, name = %params.name, "failed to find FundCreated event in receipt");
                return None;
            }
            Err(e) => {
                error!(?creator, name = %params.name, %e, "error creating fund");
                return None;
            }
        };

        self.registry.push(Fund {
            address: event.fund,
            name: event.name.clone(),
            owner: event.creator,
            deposit_fee_bps: params.deposit_fee_bps,
            withdrawal_fee_bps: params.withdrawal_fee_bps,
            management_fee_bps: params.management_fee_bps,
            performance_fee_bps: params.performance_fee_bps,
            created_at: Utc::now().timestamp_millis(),
            deposit_fee_balance: U256::zero(),
            withdrawal_fee_balance: U256::zero(),
        });
        self.record(
            creator,
            event.fund,
            Operation::CreateFund {
                name: params.name,
                deposit_fee: params.deposit_fee_bps,
                withdrawal_fee: params.withdrawal_fee_bps,
                management_fee: params.management_fee_bps,
                performance_fee: params.performance_fee_bps,
            },
        );
        info!(
            fund = ?event.fund,
            creator = ?event.creator,
            name = %event.name,
            block_timestamp = %event.timestamp,
            "created fund"
        );

        Some(event.fund)
    }

    /// Hands the fund over to `new_owner`. The registry keeps recording the
    /// creator.
    pub async fn transfer_ownership(&self, owner: Address, fund: Address, new_owner: Address) -> Result<Outcome> {
        if let Some(skip) = self.require_owner(owner, fund).await? {
            return Ok(skip);
        }
        self.gateway.transfer_ownership(owner, fund, new_owner).await?;
        self.record(
            owner,
            fund,
            Operation::TransferOwnership {
                from: owner,
                to: new_owner,
            },
        );
        info!(?fund, from = ?owner, to = ?new_owner, "transferred ownership");
        Ok(Outcome::Completed)
    }
}

#[cfg(test)]
mod tests {
    use eyre::Result;

    use super::*;
    use crate::{
        agent::tests::fixture,
        config::SimulationConfig,
        constants::PROPERTY_RUNS,
        gateway::mock::Call,
    };

    #[tokio::test]
    async fn test_fees_stay_in_configured_ranges() -> Result<()> {
        let mut f = fixture(11, SimulationConfig::default())?;
        let runs = (*PROPERTY_RUNS).min(100);
        for _ in 0..runs {
            assert!(f.agent.create_fund(f.wallets[0]).await.is_some());
        }
        assert_eq!(f.agent.registry().len() as u64, runs);
        for fund in f.agent.registry().iter() {
            assert!((50..=200).contains(&fund.deposit_fee_bps));
            assert!((50..=200).contains(&fund.withdrawal_fee_bps));
            assert!((100..=300).contains(&fund.management_fee_bps));
            assert!((1000..=2000).contains(&fund.performance_fee_bps));
            assert_eq!(fund.owner, f.wallets[0]);
            assert_eq!(fund.name, f.agent.gateway.fund_name(fund.address).await?);
        }

        let entries = f.agent.log.entries();
        assert_eq!(entries.len() as u64, runs);
        for entry in entries {
            match entry.operation {
                Operation::CreateFund { deposit_fee, .. } => assert!((50..=200).contains(&deposit_fee)),
                other => panic!("unexpected operation {:?}", other),
            }
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_event_is_not_retried() -> Result<()> {
        let mut f = fixture(11, SimulationConfig::default())?;
        f.agent.gateway.state().omit_creation_event = true;
        assert_eq!(f.agent.create_fund(f.wallets[0]).await, None);
        assert!(f.agent.registry().is_empty());
        assert!(f.agent.log.entries().is_empty());
        assert_eq!(f.agent.gateway.count_calls(|c| matches!(c, Call::CreateFund { .. })), 1);

        // Network errors are swallowed the same way.
        f.agent.gateway.state().unreachable = true;
        assert_eq!(f.agent.create_fund(f.wallets[0]).await, None);

        Ok(())
    }

    #[tokio::test]
    async fn test_transfer_ownership() -> Result<()> {
        let mut f = fixture(2, SimulationConfig::default())?;
        let fund = f.agent.create_fund(f.wallets[0]).await.unwrap();

        // Only the owner can transfer.
        let outcome = f.agent.transfer_ownership(f.wallets[1], fund, f.wallets[2]).await?;
        assert!(matches!(outcome, Outcome::Skipped(_)));

        let outcome = f.agent.transfer_ownership(f.wallets[0], fund, f.wallets[1]).await?;
        assert_eq!(outcome, Outcome::Completed);
        assert_eq!(f.agent.gateway.fund_owner(fund).await?, f.wallets[1]);
        assert_eq!(f.agent.registry().get(fund).unwrap().owner, f.wallets[0]);
        assert_eq!(
            f.agent.log.entries().last().map(|e| e.operation.clone()),
            Some(Operation::TransferOwnership {
                from: f.wallets[0],
                to: f.wallets[1],
            })
        );

        Ok(())
    }
}
