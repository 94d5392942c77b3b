use ethers::types::{Address, U256};
use eyre::Result;
use rand::Rng;
use tracing::info;

use super::{Agent, Outcome};
use crate::{
    gateway::{Gateway, Support},
    oplog::Operation,
    random::random_u256,
};

/// `floor(amount * percentage / 100)` without overflowing for large amounts.
pub fn percentage_of(amount: U256, percentage: u64) -> U256 {
    let hundred = U256::from(100);
    let percentage = U256::from(percentage);
    (amount / hundred) * percentage + (amount % hundred) * percentage / hundred
}

/// A deposit between `min` and `min(max, balance)`. A balance below the
/// minimum is deposited in full.
pub fn deposit_amount<R: Rng + ?Sized>(rng: &mut R, balance: U256, min: U256, max: U256) -> U256 {
    if balance < min {
        return balance;
    }
    random_u256(rng, min, max.min(balance))
}

impl<G: Gateway> Agent<G> {
    /// Deposits into one of the fund's allocated tokens, picked at random.
    pub async fn deposit(&mut self, wallet: Address, fund: Address) -> Result<Outcome> {
        let allocations = self.gateway.allocations(fund).await?;
        if allocations.is_empty() {
            return Ok(Outcome::Skipped(format!("{:?} has no allocations", fund)));
        }
        let allocation = allocations[self.rng.gen_range(0..allocations.len())];

        // Tokens outside the catalog were allocated by someone else, so they
        // need to be checked before use.
        let token = match self.catalog.get(allocation.token) {
            Some(token) => token.clone(),
            None => match self.gateway.probe_token(allocation.token, wallet).await {
                Support::Supported(token) => token,
                Support::Unsupported(reason) => {
                    return Ok(Outcome::Skipped(format!(
                        "allocated token {:?} is not usable: {}",
                        allocation.token, reason
                    )));
                }
            },
        };

        let balance = self.gateway.token_balance(token.address, wallet).await?;
        if balance.is_zero() {
            return Ok(Outcome::Skipped(format!("{:?} holds no {}", wallet, token.symbol)));
        }
        self.approve_for_fund(wallet, fund, token.address).await?;

        let (min, max) = self.config.deposit_bounds(token.decimals)?;
        let amount = deposit_amount(&mut self.rng, balance, min, max);
        self.gateway.deposit(wallet, fund, token.address, amount).await?;
        self.record(
            wallet,
            fund,
            Operation::Deposit {
                token: token.address,
                amount,
            },
        );
        info!(?wallet, ?fund, symbol = %token.symbol, %amount, "deposited");
        Ok(Outcome::Completed)
    }

    /// Redeems a random percentage of the wallet's shares.
    pub async fn withdraw(&mut self, wallet: Address, fund: Address) -> Result<Outcome> {
        let held = self.gateway.share_balance(fund, wallet).await?;
        if held.is_zero() {
            return Ok(Outcome::Skipped(format!("{:?} holds no shares of {:?}", wallet, fund)));
        }
        let percentage = self.rng.gen_range(self.config.withdrawal_percentage_range());
        let shares = percentage_of(held, percentage);
        if shares.is_zero() {
            return Ok(Outcome::Skipped(format!(
                "{}% of {} shares rounds down to zero",
                percentage, held
            )));
        }

        self.gateway.withdraw(wallet, fund, shares).await?;
        self.record(wallet, fund, Operation::Withdraw { shares, percentage });
        info!(?wallet, ?fund, %shares, percentage, "withdrew");
        Ok(Outcome::Completed)
    }

    /// Pays a random percentage of the fund's accrued fees out to the owner.
    pub async fn withdraw_fees(&mut self, owner: Address, fund: Address) -> Result<Outcome> {
        if let Some(skip) = self.require_owner(owner, fund).await? {
            return Ok(skip);
        }
        let balances = self.gateway.fee_balances(fund).await?;
        let total = balances.total();
        if total.is_zero() {
            return Ok(Outcome::Skipped(format!("{:?} has no fees to withdraw", fund)));
        }
        let percentage = self.rng.gen_range(self.config.fee_withdrawal_percentage_range());
        let amount = percentage_of(total, percentage);
        if amount.is_zero() {
            return Ok(Outcome::Skipped(format!(
                "{}% of {} in fees rounds down to zero",
                percentage, total
            )));
        }

        self.gateway.withdraw_fees(owner, fund, owner, amount).await?;
        self.registry.record_fee_withdrawal(fund, balances, amount);
        self.record(owner, fund, Operation::WithdrawFees { amount, percentage });
        info!(?owner, ?fund, %amount, percentage, "withdrew fees");
        Ok(Outcome::Completed)
    }
}
