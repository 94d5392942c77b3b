use std::{
    collections::{HashMap, HashSet},
    sync::Mutex,
};

use async_trait::async_trait;
use ethers::{
    signers::{LocalWallet, Signer},
    types::{Address, TxHash, U256},
};
use eyre::{eyre, Result};

use super::{Allocation, FeeBalances, FundCreated, FundParams, Gateway, Support, Token};

/// A state-changing call that the mock accepted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Call {
    TransferNative { from: Address, to: Address, amount: U256 },
    CreateFund { from: Address, params: FundParams },
    Deposit { from: Address, fund: Address, token: Address, amount: U256 },
    Withdraw { from: Address, fund: Address, shares: U256 },
    SetAllocation { from: Address, fund: Address, token: Address, weight_bps: u64 },
    WithdrawFees { from: Address, fund: Address, to: Address, amount: U256 },
    TransferOwnership { from: Address, fund: Address, new_owner: Address },
    Approve { from: Address, token: Address, spender: Address, amount: U256 },
    Mint { from: Address, token: Address, to: Address, amount: U256 },
}

#[derive(Clone, Debug, Default)]
pub(crate) struct MockFund {
    pub name: String,
    pub owner: Address,
    pub allocations: Vec<(Address, u64)>,
    pub shares: HashMap<Address, U256>,
    pub fees: FeeBalances,
}

#[derive(Clone, Debug, Default)]
pub(crate) struct MockToken {
    pub symbol: String,
    pub decimals: u8,
    pub readable: bool,
    pub mintable: bool,
    pub balances: HashMap<Address, U256>,
    pub allowances: HashMap<(Address, Address), U256>,
}

#[derive(Debug, Default)]
pub(crate) struct MockState {
    pub signers: HashSet<Address>,
    pub funds: HashMap<Address, MockFund>,
    pub tokens: HashMap<Address, MockToken>,
    pub calls: Vec<Call>,
    /// Fund creations succeed but the receipt has no creation event.
    pub omit_creation_event: bool,
    /// Native transfers to these addresses fail.
    pub failing_recipients: HashSet<Address>,
    /// The node refuses to register these signers.
    pub failing_signers: HashSet<Address>,
    /// `setAllocation` reverts for these tokens.
    pub rejected_tokens: HashSet<Address>,
    /// Every call fails as if the node were down.
    pub unreachable: bool,
    next_address: u64,
    next_tx: u64,
}

impl MockState {
    fn next_address(&mut self) -> Address {
        self.next_address += 1;
        Address::from_low_u64_be(0xd7f0_0000 + self.next_address)
    }

    fn record(&mut self, call: Call) -> TxHash {
        self.calls.push(call);
        self.next_tx += 1;
        TxHash::from_low_u64_be(self.next_tx)
    }

    fn check_reachable(&self) -> Result<()> {
        if self.unreachable {
            return Err(eyre!("error sending request: connection refused"));
        }
        Ok(())
    }

    fn check_signer(&self, from: Address) -> Result<()> {
        self.check_reachable()?;
        if !self.signers.contains(&from) {
            return Err(eyre!("no signer registered for {:?}", from));
        }
        Ok(())
    }

    fn fund(&mut self, fund: Address) -> Result<&mut MockFund> {
        self.funds
            .get_mut(&fund)
            .ok_or_else(|| eyre!("no contract at {:?}", fund))
    }

    fn token(&mut self, token: Address) -> Result<&mut MockToken> {
        self.tokens
            .get_mut(&token)
            .ok_or_else(|| eyre!("no contract at {:?}", token))
    }

    fn owned_fund(&mut self, from: Address, fund: Address) -> Result<&mut MockFund> {
        let fund = self.fund(fund)?;
        if fund.owner != from {
            return Err(eyre!("execution reverted: Ownable: caller is not the owner"));
        }
        Ok(fund)
    }
}

/// An in-memory stand-in for the contracts. Deposits mint shares 1:1 and
/// charge a 1% fee, withdrawals burn shares and charge a 1% fee.
#[derive(Debug, Default)]
pub(crate) struct MockGateway {
    pub state: Mutex<MockState>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.state.lock().unwrap()
    }

    pub fn add_wallet(&self) -> Address {
        let mut state = self.state();
        let address = state.next_address();
        state.signers.insert(address);
        address
    }

    pub fn add_token(&self, symbol: &str, decimals: u8, mintable: bool) -> Address {
        let mut state = self.state();
        let address = state.next_address();
        state.tokens.insert(
            address,
            MockToken {
                symbol: symbol.into(),
                decimals,
                readable: true,
                mintable,
                ..Default::default()
            },
        );
        address
    }

    /// Adds a contract that doesn't implement the ERC20 reads.
    pub fn add_broken_token(&self) -> Address {
        let mut state = self.state();
        let address = state.next_address();
        state.tokens.insert(address, MockToken::default());
        address
    }

    pub fn add_fund(&self, owner: Address) -> Address {
        let mut state = self.state();
        let address = state.next_address();
        state.funds.insert(
            address,
            MockFund {
                name: "Mock Fund".into(),
                owner,
                ..Default::default()
            },
        );
        address
    }

    pub fn set_balance(&self, token: Address, holder: Address, amount: U256) {
        let mut state = self.state();
        state
            .tokens
            .get_mut(&token)
            .unwrap()
            .balances
            .insert(holder, amount);
    }

    pub fn set_shares(&self, fund: Address, holder: Address, shares: U256) {
        let mut state = self.state();
        state.funds.get_mut(&fund).unwrap().shares.insert(holder, shares);
    }

    pub fn set_fees(&self, fund: Address, fees: FeeBalances) {
        self.state().funds.get_mut(&fund).unwrap().fees = fees;
    }

    pub fn set_allocations(&self, fund: Address, allocations: Vec<(Address, u64)>) {
        self.state().funds.get_mut(&fund).unwrap().allocations = allocations;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state().calls.clone()
    }

    pub fn count_calls(&self, predicate: impl Fn(&Call) -> bool) -> usize {
        self.state().calls.iter().filter(|c| predicate(c)).count()
    }
}

#[async_trait]
impl Gateway for MockGateway {
    async fn add_signer(&mut self, signer: LocalWallet) -> Result<()> {
        let mut state = self.state();
        state.check_reachable()?;
        if state.failing_signers.contains(&signer.address()) {
            return Err(eyre!("couldn't register signer {:?}", signer.address()));
        }
        state.signers.insert(signer.address());
        Ok(())
    }

    async fn transfer_native(&self, from: Address, to: Address, amount: U256) -> Result<TxHash> {
        let mut state = self.state();
        state.check_signer(from)?;
        if state.failing_recipients.contains(&to) {
            return Err(eyre!("insufficient funds for gas * price + value"));
        }
        Ok(state.record(Call::TransferNative { from, to, amount }))
    }

    async fn fund_count(&self) -> Result<U256> {
        let state = self.state();
        state.check_reachable()?;
        Ok(state.funds.len().into())
    }

    async fn create_fund(&self, from: Address, params: &FundParams) -> Result<Option<FundCreated>> {
        let mut state = self.state();
        state.check_signer(from)?;
        let fund = state.next_address();
        state.funds.insert(
            fund,
            MockFund {
                name: params.name.clone(),
                owner: from,
                ..Default::default()
            },
        );
        state.record(Call::CreateFund {
            from,
            params: params.clone(),
        });
        if state.omit_creation_event {
            return Ok(None);
        }
        Ok(Some(FundCreated {
            fund,
            creator: from,
            name: params.name.clone(),
            timestamp: 1_700_000_000.into(),
        }))
    }

    async fn fund_owner(&self, fund: Address) -> Result<Address> {
        let mut state = self.state();
        state.check_reachable()?;
        Ok(state.fund(fund)?.owner)
    }

    async fn fund_name(&self, fund: Address) -> Result<String> {
        let mut state = self.state();
        state.check_reachable()?;
        Ok(state.fund(fund)?.name.clone())
    }

    async fn allocations(&self, fund: Address) -> Result<Vec<Allocation>> {
        let mut state = self.state();
        state.check_reachable()?;
        Ok(state
            .fund(fund)?
            .allocations
            .iter()
            .map(|(token, weight_bps)| Allocation {
                token: *token,
                weight_bps: *weight_bps,
            })
            .collect())
    }

    async fn share_balance(&self, fund: Address, holder: Address) -> Result<U256> {
        let mut state = self.state();
        state.check_reachable()?;
        Ok(state.fund(fund)?.shares.get(&holder).copied().unwrap_or_default())
    }

    async fn fee_balances(&self, fund: Address) -> Result<FeeBalances> {
        let mut state = self.state();
        state.check_reachable()?;
        Ok(state.fund(fund)?.fees)
    }

    async fn deposit(&self, from: Address, fund: Address, token: Address, amount: U256) -> Result<TxHash> {
        let mut state = self.state();
        state.check_signer(from)?;
        if !state.fund(fund)?.allocations.iter().any(|(t, _)| *t == token) {
            return Err(eyre!("execution reverted: Token not in allocation"));
        }
        let contract = state.token(token)?;
        let balance = contract.balances.get(&from).copied().unwrap_or_default();
        let allowance = contract.allowances.get(&(from, fund)).copied().unwrap_or_default();
        if balance < amount {
            return Err(eyre!("execution reverted: ERC20: transfer amount exceeds balance"));
        }
        if allowance < amount {
            return Err(eyre!("execution reverted: ERC20: insufficient allowance"));
        }
        contract.balances.insert(from, balance - amount);
        contract.allowances.insert((from, fund), allowance - amount);
        let fee = amount / 100;
        let fund_state = state.fund(fund)?;
        *fund_state.shares.entry(from).or_default() += amount - fee;
        fund_state.fees.deposit += fee;
        Ok(state.record(Call::Deposit {
            from,
            fund,
            token,
            amount,
        }))
    }

    async fn withdraw(&self, from: Address, fund: Address, shares: U256) -> Result<TxHash> {
        let mut state = self.state();
        state.check_signer(from)?;
        let fund_state = state.fund(fund)?;
        let held = fund_state.shares.get(&from).copied().unwrap_or_default();
        if shares.is_zero() || shares > held {
            return Err(eyre!("execution reverted: Insufficient shares"));
        }
        fund_state.shares.insert(from, held - shares);
        fund_state.fees.withdrawal += shares / 100;
        Ok(state.record(Call::Withdraw { from, fund, shares }))
    }

    async fn set_allocation(
        &self,
        from: Address,
        fund: Address,
        token: Address,
        weight_bps: u64,
    ) -> Result<TxHash> {
        let mut state = self.state();
        state.check_signer(from)?;
        if state.rejected_tokens.contains(&token) {
            return Err(eyre!("execution reverted: Invalid token"));
        }
        let fund_state = state.owned_fund(from, fund)?;
        match fund_state.allocations.iter_mut().find(|(t, _)| *t == token) {
            Some(entry) => entry.1 = weight_bps,
            None => fund_state.allocations.push((token, weight_bps)),
        }
        Ok(state.record(Call::SetAllocation {
            from,
            fund,
            token,
            weight_bps,
        }))
    }

    async fn withdraw_fees(&self, from: Address, fund: Address, to: Address, amount: U256) -> Result<TxHash> {
        let mut state = self.state();
        state.check_signer(from)?;
        let fees = &mut state.owned_fund(from, fund)?.fees;
        if amount > fees.total() {
            return Err(eyre!("execution reverted: Insufficient fee balance"));
        }
        let from_deposit = amount.min(fees.deposit);
        fees.deposit -= from_deposit;
        fees.withdrawal -= amount - from_deposit;
        Ok(state.record(Call::WithdrawFees {
            from,
            fund,
            to,
            amount,
        }))
    }

    async fn transfer_ownership(&self, from: Address, fund: Address, new_owner: Address) -> Result<TxHash> {
        let mut state = self.state();
        state.check_signer(from)?;
        state.owned_fund(from, fund)?.owner = new_owner;
        Ok(state.record(Call::TransferOwnership {
            from,
            fund,
            new_owner,
        }))
    }

    async fn probe_token(&self, token: Address, _holder: Address) -> Support<Token> {
        let state = self.state();
        match state.tokens.get(&token) {
            Some(t) if t.readable => Support::Supported(Token {
                address: token,
                symbol: t.symbol.clone(),
                decimals: t.decimals,
            }),
            _ => Support::Unsupported("execution reverted".into()),
        }
    }

    async fn probe_mint(&self, token: Address, _minter: Address) -> Support<()> {
        let state = self.state();
        match state.tokens.get(&token) {
            Some(t) if t.mintable => Support::Supported(()),
            _ => Support::Unsupported("execution reverted: caller is not a minter".into()),
        }
    }

    async fn token_balance(&self, token: Address, holder: Address) -> Result<U256> {
        let mut state = self.state();
        state.check_reachable()?;
        Ok(state.token(token)?.balances.get(&holder).copied().unwrap_or_default())
    }

    async fn allowance(&self, token: Address, owner: Address, spender: Address) -> Result<U256> {
        let mut state = self.state();
        state.check_reachable()?;
        Ok(state
            .token(token)?
            .allowances
            .get(&(owner, spender))
            .copied()
            .unwrap_or_default())
    }

    async fn approve(&self, from: Address, token: Address, spender: Address, amount: U256) -> Result<TxHash> {
        let mut state = self.state();
        state.check_signer(from)?;
        state.token(token)?.allowances.insert((from, spender), amount);
        Ok(state.record(Call::Approve {
            from,
            token,
            spender,
            amount,
        }))
    }

    async fn mint(&self, from: Address, token: Address, to: Address, amount: U256) -> Result<TxHash> {
        let mut state = self.state();
        state.check_signer(from)?;
        let contract = state.token(token)?;
        if !contract.mintable {
            return Err(eyre!("execution reverted: caller is not a minter"));
        }
        *contract.balances.entry(to).or_default() += amount;
        Ok(state.record(Call::Mint {
            from,
            token,
            to,
            amount,
        }))
    }
}
