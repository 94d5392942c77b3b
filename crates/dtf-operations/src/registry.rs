use ethers::types::{Address, U256};
use rand::Rng;

use crate::gateway::FeeBalances;

/// A fund created during this run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fund {
    pub address: Address,
    pub name: String,
    /// The creator. Ownership transfers aren't reflected here.
    pub owner: Address,
    pub deposit_fee_bps: u64,
    pub withdrawal_fee_bps: u64,
    pub management_fee_bps: u64,
    pub performance_fee_bps: u64,
    /// Unix time in milliseconds.
    pub created_at: i64,
    /// Fee balances as of the last fee withdrawal.
    pub deposit_fee_balance: U256,
    pub withdrawal_fee_balance: U256,
}

/// The funds created during this run, in creation order. Funds are never
/// removed.
#[derive(Clone, Debug, Default)]
pub struct FundRegistry {
    funds: Vec<Fund>,
}

impl FundRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, fund: Fund) {
        self.funds.push(fund);
    }

    pub fn len(&self) -> usize {
        self.funds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.funds.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Fund> {
        self.funds.iter()
    }

    pub fn get(&self, address: Address) -> Option<&Fund> {
        self.funds.iter().find(|f| f.address == address)
    }

    pub fn random<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Fund> {
        if self.funds.is_empty() {
            return None;
        }
        self.funds.get(rng.gen_range(0..self.funds.len()))
    }

    /// Caches the fee balances left after withdrawing `amount` from the
    /// `observed` balances. Deposit fees are paid out first.
    pub fn record_fee_withdrawal(&mut self, address: Address, observed: FeeBalances, amount: U256) {
        if let Some(fund) = self.funds.iter_mut().find(|f| f.address == address) {
            let from_deposit = amount.min(observed.deposit);
            fund.deposit_fee_balance = observed.deposit - from_deposit;
            fund.withdrawal_fee_balance = observed.withdrawal.saturating_sub(amount - from_deposit);
        }
    }
}
