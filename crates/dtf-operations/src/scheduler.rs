use ethers::types::Address;
use eyre::Result;
use rand::Rng;
use tracing::{error, info, warn};

use crate::{
    agent::{Agent, Outcome},
    gateway::Gateway,
    wallets::WalletPool,
};

/// The operations the exploration phase picks from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Deposit,
    Withdraw,
    Allocate,
}

const ACTIONS: [Action; 3] = [Action::Deposit, Action::Withdraw, Action::Allocate];

/// Tallies of a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub seed: u64,
    pub funds_created: usize,
    pub completed: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Drives the agent through the seeding and exploration phases, one
/// operation at a time.
pub struct Scheduler<G: Gateway> {
    agent: Agent<G>,
    wallets: WalletPool,
    summary: RunSummary,
}

impl<G: Gateway> Scheduler<G> {
    pub fn new(agent: Agent<G>, wallets: WalletPool, seed: u64) -> Self {
        Self {
            agent,
            wallets,
            summary: RunSummary {
                seed,
                ..Default::default()
            },
        }
    }

    pub fn agent(&self) -> &Agent<G> {
        &self.agent
    }

    pub async fn run(&mut self) -> RunSummary {
        info!(
            seed = self.summary.seed,
            wallets = self.wallets.len(),
            tokens = self.agent.catalog().len(),
            "starting simulation"
        );
        self.seed().await;
        self.explore().await;
        let summary = self.summary;
        info!(
            seed = summary.seed,
            funds_created = summary.funds_created,
            completed = summary.completed,
            skipped = summary.skipped,
            failed = summary.failed,
            "simulation finished"
        );
        summary
    }

    fn random_wallet(&mut self) -> Address {
        self.wallets.random(self.agent.rng()).address()
    }

    fn tally(&mut self, action: &str, fund: Address, result: Result<Outcome>) {
        match result {
            Ok(Outcome::Completed) => self.summary.completed += 1,
            Ok(Outcome::Skipped(reason)) => {
                info!(action, ?fund, %reason, "skipped operation");
                self.summary.skipped += 1;
            }
            Err(e) => {
                error!(action, ?fund, %e, "operation failed");
                self.summary.failed += 1;
            }
        }
    }

    /// Creates the configured number of funds and gives each some activity:
    /// allocations, one to three deposits and up to two withdrawals.
    async fn seed(&mut self) {
        let count = self.agent.config().num_funds_to_create;
        for i in 0..count {
            info!(fund = i + 1, of = count, "seeding fund");
            let creator = self.random_wallet();
            let fund = match self.agent.create_fund(creator).await {
                Some(fund) => fund,
                None => {
                    self.summary.failed += 1;
                    continue;
                }
            };
            self.summary.funds_created += 1;

            let result = self.agent.set_allocations(creator, fund).await;
            self.tally("set_allocations", fund, result);

            let deposits = self.agent.rng().gen_range(1..=3);
            for _ in 0..deposits {
                let wallet = self.random_wallet();
                let result = self.agent.deposit(wallet, fund).await;
                self.tally("deposit", fund, result);
            }
            let withdrawals = self.agent.rng().gen_range(0..=2);
            for _ in 0..withdrawals {
                let wallet = self.random_wallet();
                let result = self.agent.withdraw(wallet, fund).await;
                self.tally("withdraw", fund, result);
            }
        }
    }

    /// Performs random operations on random funds with a fixed delay between
    /// them. The fund's owner also withdraws fees now and then.
    async fn explore(&mut self) {
        let count = self.agent.config().num_operations;
        let interval = self.agent.config().operation_interval();
        let fee_probability = self.agent.config().fee_withdrawal_probability;
        for i in 0..count {
            let fund = match self.agent.random_fund() {
                Some(fund) => fund,
                None => {
                    warn!("no funds available for operations");
                    break;
                }
            };
            let action = ACTIONS[self.agent.rng().gen_range(0..ACTIONS.len())];
            info!(operation = i + 1, of = count, ?action, fund = ?fund.address, "exploring");

            match action {
                Action::Deposit => {
                    let wallet = self.random_wallet();
                    let result = self.agent.deposit(wallet, fund.address).await;
                    self.tally("deposit", fund.address, result);
                }
                Action::Withdraw => {
                    let wallet = self.random_wallet();
                    let result = self.agent.withdraw(wallet, fund.address).await;
                    self.tally("withdraw", fund.address, result);
                }
                Action::Allocate => {
                    let result = if self.wallets.contains(fund.owner) {
                        self.agent.set_allocations(fund.owner, fund.address).await
                    } else {
                        Ok(Outcome::Skipped(format!("owner {:?} is not in the wallet pool", fund.owner)))
                    };
                    self.tally("set_allocations", fund.address, result);
                }
            }

            if self.wallets.contains(fund.owner) && self.agent.rng().gen_bool(fee_probability) {
                let result = self.agent.withdraw_fees(fund.owner, fund.address).await;
                self.tally("withdraw_fees", fund.address, result);
            }

            if i + 1 < count && !interval.is_zero() {
                tokio::time::sleep(interval).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use ethers::signers::LocalWallet;
    use tokio::time::Instant;

    use super::*;
    use crate::{
        agent::tests::{fixture, Fixture},
        catalog::prepare_tokens,
        config::SimulationConfig,
        gateway::mock::Call,
        oplog::{OperationLog, OperationLogEntry},
        random::seeded,
    };

    fn quick(num_funds_to_create: usize, num_operations: usize) -> SimulationConfig {
        SimulationConfig {
            num_funds_to_create,
            num_operations,
            operation_interval_ms: 0,
            fee_withdrawal_probability: 1.0,
            ..Default::default()
        }
    }

    /// A fixture with a pool of the primary and two generated wallets, each
    /// holding both catalog tokens.
    async fn funded(seed: u64, config: SimulationConfig) -> Result<(Fixture, WalletPool)> {
        let mut f = fixture(seed, config)?;
        let (mut rng, _) = seeded(Some(seed));
        let pool = WalletPool::load(
            f.agent.gateway_mut(),
            LocalWallet::new(&mut rng),
            2,
            1_000.into(),
            &mut rng,
        )
        .await?;
        let minted = prepare_tokens(
            f.agent.gateway(),
            f.agent.catalog(),
            pool.primary().address(),
            &pool.addresses(),
            f.agent.config(),
        )
        .await;
        assert_eq!(minted, 6);
        Ok((f, pool))
    }

    fn count_kind(entries: &[OperationLogEntry], kind: &str) -> usize {
        entries.iter().filter(|e| e.operation.kind() == kind).count()
    }

    #[tokio::test]
    async fn test_run() -> Result<()> {
        let (f, pool) = funded(61, quick(3, 25)).await?;

        let mut scheduler = Scheduler::new(f.agent, pool, 61);
        let summary = scheduler.run().await;
        assert_eq!(summary.seed, 61);
        assert_eq!(summary.funds_created, 3);
        assert_eq!(summary.failed, 0);
        assert!(summary.completed >= 3);
        assert_eq!(scheduler.agent().registry().len(), 3);

        // Every completed operation and every created fund is in the log.
        let entries = OperationLog::new(f._dir.path().join("dtf-operations-log.json")).entries();
        assert!(entries.len() >= summary.completed + summary.funds_created);
        assert_eq!(count_kind(&entries, "create_fund"), 3);

        // Owners take fees during exploration.
        let gateway = scheduler.agent().gateway();
        let calls = gateway.calls();
        let fee_withdrawals = calls.iter().filter(|c| matches!(c, Call::WithdrawFees { .. })).count();
        assert!(fee_withdrawals > 0);
        assert_eq!(count_kind(&entries, "withdraw_fees"), fee_withdrawals);

        // Where nothing touched the fees since the last withdrawal, the
        // cached balances match the chain.
        let mut settled = 0;
        for fund in scheduler.agent().registry().iter() {
            let last = calls.iter().rev().find(|c| match c {
                Call::Deposit { fund: target, .. }
                | Call::Withdraw { fund: target, .. }
                | Call::WithdrawFees { fund: target, .. } => *target == fund.address,
                _ => false,
            });
            if !matches!(last, Some(Call::WithdrawFees { .. })) {
                continue;
            }
            let fees = gateway.fee_balances(fund.address).await?;
            assert_eq!(fund.deposit_fee_balance, fees.deposit);
            assert_eq!(fund.withdrawal_fee_balance, fees.withdrawal);
            settled += 1;
        }
        assert!(settled > 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_fee_withdrawals_can_be_disabled() -> Result<()> {
        let config = SimulationConfig {
            fee_withdrawal_probability: 0.0,
            ..quick(3, 25)
        };
        let (f, pool) = funded(61, config).await?;

        let mut scheduler = Scheduler::new(f.agent, pool, 61);
        let summary = scheduler.run().await;
        assert_eq!(summary.failed, 0);
        assert_eq!(
            scheduler.agent().gateway().count_calls(|c| matches!(c, Call::WithdrawFees { .. })),
            0
        );
        let entries = OperationLog::new(f._dir.path().join("dtf-operations-log.json")).entries();
        assert_eq!(count_kind(&entries, "withdraw_fees"), 0);
        for fund in scheduler.agent().registry().iter() {
            assert!(fund.deposit_fee_balance.is_zero());
            assert!(fund.withdrawal_fee_balance.is_zero());
        }

        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn test_operations_are_spaced_by_the_interval() -> Result<()> {
        let config = SimulationConfig {
            operation_interval_ms: 200,
            ..quick(1, 4)
        };
        let (f, pool) = funded(91, config).await?;
        let start = Instant::now();
        let summary = Scheduler::new(f.agent, pool, 91).run().await;
        let elapsed = start.elapsed();
        assert_eq!(summary.failed, 0);

        // Three gaps between four operations, none after the last.
        assert!(elapsed >= Duration::from_millis(600), "elapsed {:?}", elapsed);
        assert!(elapsed < Duration::from_millis(800), "elapsed {:?}", elapsed);

        // A single operation never waits.
        let config = SimulationConfig {
            operation_interval_ms: 200,
            ..quick(1, 1)
        };
        let (f, pool) = funded(92, config).await?;
        let start = Instant::now();
        Scheduler::new(f.agent, pool, 92).run().await;
        assert!(start.elapsed() < Duration::from_millis(200));

        Ok(())
    }

    #[tokio::test]
    async fn test_owner_outside_the_pool_is_skipped() -> Result<()> {
        let mut f = fixture(71, quick(0, 10))?;
        let outsider = f.wallets[0];
        assert!(f.agent.create_fund(outsider).await.is_some());

        let (mut rng, _) = seeded(Some(71));
        let pool = WalletPool::load(
            f.agent.gateway_mut(),
            LocalWallet::new(&mut rng),
            1,
            1_000.into(),
            &mut rng,
        )
        .await?;
        let mut scheduler = Scheduler::new(f.agent, pool, 71);
        let summary = scheduler.run().await;
        assert_eq!(summary.completed, 0);
        assert_eq!(summary.skipped, 10);
        assert_eq!(summary.failed, 0);

        let gateway = scheduler.agent().gateway();
        assert_eq!(gateway.count_calls(|c| matches!(c, Call::SetAllocation { .. })), 0);
        assert_eq!(gateway.count_calls(|c| matches!(c, Call::WithdrawFees { .. })), 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_failures_are_isolated() -> Result<()> {
        let mut f = fixture(81, quick(2, 5))?;
        let (mut rng, _) = seeded(Some(81));
        let pool = WalletPool::load(
            f.agent.gateway_mut(),
            LocalWallet::new(&mut rng),
            1,
            1_000.into(),
            &mut rng,
        )
        .await?;
        f.agent.gateway().state().unreachable = true;

        // Both creations fail and exploration has nothing to work on.
        let summary = Scheduler::new(f.agent, pool, 81).run().await;
        assert_eq!(summary.funds_created, 0);
        assert_eq!(summary.failed, 2);
        assert_eq!(summary.completed + summary.skipped, 0);

        Ok(())
    }
}
