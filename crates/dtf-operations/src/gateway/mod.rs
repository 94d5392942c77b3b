//! The seam between the simulator and the contracts it drives. Everything
//! the operations need from the chain goes through [`Gateway`], which keeps
//! the operations testable against an in-memory double.

mod chain;
#[cfg(test)]
pub(crate) mod mock;

use async_trait::async_trait;
pub use chain::ChainGateway;
use ethers::{
    signers::LocalWallet,
    types::{Address, TxHash, U256},
};
use eyre::Result;

/// Whether a contract supports a capability. The reason explains an
/// unsupported capability in the logs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Support<T> {
    Supported(T),
    Unsupported(String),
}

/// An ERC20 token as far as the simulator cares.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub address: Address,
    pub symbol: String,
    pub decimals: u8,
}

/// A fund's target weight for one token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Allocation {
    pub token: Address,
    pub weight_bps: u64,
}

/// The fee schedule of a fund to create, in basis points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FundParams {
    pub name: String,
    pub deposit_fee_bps: u64,
    pub withdrawal_fee_bps: u64,
    pub management_fee_bps: u64,
    pub performance_fee_bps: u64,
}

/// The decoded `FundCreated` event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FundCreated {
    pub fund: Address,
    pub creator: Address,
    pub name: String,
    pub timestamp: U256,
}

/// The fees a fund has accrued and not yet paid out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FeeBalances {
    pub deposit: U256,
    pub withdrawal: U256,
}

impl FeeBalances {
    pub fn total(&self) -> U256 {
        self.deposit.saturating_add(self.withdrawal)
    }
}

/// Read calls return the decoded value. State-changing calls resolve once
/// the transaction is confirmed and fail with the revert reason if it isn't.
/// Calls made `from` an address require that address's signer to have been
/// registered with [`Gateway::add_signer`].
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Registers a signer that later calls can be sent from.
    async fn add_signer(&mut self, signer: LocalWallet) -> Result<()>;

    async fn transfer_native(&self, from: Address, to: Address, amount: U256) -> Result<TxHash>;

    // Factory

    async fn fund_count(&self) -> Result<U256>;

    /// Creates a fund. Returns `None` if the receipt doesn't carry a
    /// `FundCreated` event.
    async fn create_fund(&self, from: Address, params: &FundParams) -> Result<Option<FundCreated>>;

    // Funds

    async fn fund_owner(&self, fund: Address) -> Result<Address>;
    async fn fund_name(&self, fund: Address) -> Result<String>;
    async fn allocations(&self, fund: Address) -> Result<Vec<Allocation>>;
    async fn share_balance(&self, fund: Address, holder: Address) -> Result<U256>;
    async fn fee_balances(&self, fund: Address) -> Result<FeeBalances>;
    async fn deposit(&self, from: Address, fund: Address, token: Address, amount: U256) -> Result<TxHash>;
    async fn withdraw(&self, from: Address, fund: Address, shares: U256) -> Result<TxHash>;
    async fn set_allocation(
        &self,
        from: Address,
        fund: Address,
        token: Address,
        weight_bps: u64,
    ) -> Result<TxHash>;
    async fn withdraw_fees(&self, from: Address, fund: Address, to: Address, amount: U256) -> Result<TxHash>;
    async fn transfer_ownership(&self, from: Address, fund: Address, new_owner: Address) -> Result<TxHash>;

    // Tokens

    /// Checks that the token answers the reads the simulator relies on.
    async fn probe_token(&self, token: Address, holder: Address) -> Support<Token>;

    /// Checks whether `minter` is allowed to mint the token.
    async fn probe_mint(&self, token: Address, minter: Address) -> Support<()>;

    async fn token_balance(&self, token: Address, holder: Address) -> Result<U256>;
    async fn allowance(&self, token: Address, owner: Address, spender: Address) -> Result<U256>;
    async fn approve(&self, from: Address, token: Address, spender: Address, amount: U256) -> Result<TxHash>;
    async fn mint(&self, from: Address, token: Address, to: Address, amount: U256) -> Result<TxHash>;
}
