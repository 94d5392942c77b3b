use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use dtf_wrappers::wrappers::{
    dtf_factory_full::{DtfFactoryFull, FundCreatedFilter},
    erc20_mintable::ERC20Mintable,
    lairry_fink_fund::LairryFinkFund,
};
use ethers::{
    abi::{Detokenize, RawLog},
    contract::{ContractCall, ContractError, EthEvent},
    providers::Middleware,
    signers::{LocalWallet, Signer},
    types::{Address, TransactionReceipt, TransactionRequest, TxHash, U256, U64},
};
use eyre::{eyre, Result};
use tracing::{debug, info};

use super::{Allocation, FeeBalances, FundCreated, FundParams, Gateway, Support, Token};
use crate::chain::{Chain, ChainClient};

type Client = ChainClient<LocalWallet>;

/// The revert reason of a failed call, or the error itself if the node
/// didn't return one.
fn revert_reason<M: Middleware>(error: &ContractError<M>) -> String {
    match error.decode_revert::<String>() {
        Some(reason) => reason,
        None => error.to_string(),
    }
}

/// Bps values are tiny, so anything that doesn't fit is clamped.
fn to_bps(value: U256) -> u64 {
    if value > U256::from(u64::MAX) {
        u64::MAX
    } else {
        value.as_u64()
    }
}

/// A gateway backed by a node. Each registered signer gets its own client so
/// that nonces are tracked per sender.
pub struct ChainGateway {
    chain: Chain,
    factory: Address,
    reader: Arc<Client>,
    clients: HashMap<Address, Arc<Client>>,
    gas_limit: U256,
}

impl ChainGateway {
    /// Binds the factory and checks that it answers `getFundCount`. The
    /// deployer is registered as the first signer.
    pub async fn new(chain: Chain, deployer: LocalWallet, factory: Address, gas_limit: u64) -> Result<Self> {
        let reader = chain.client(deployer).await?;
        let mut clients = HashMap::new();
        clients.insert(reader.address(), reader.clone());
        let gateway = Self {
            chain,
            factory,
            reader,
            clients,
            gas_limit: gas_limit.into(),
        };

        let count = gateway
            .fund_count()
            .await
            .map_err(|e| eyre!("error accessing factory contract at {:?}: {}", factory, e))?;
        info!(?factory, %count, "connected to factory");

        Ok(gateway)
    }

    fn client(&self, from: Address) -> Result<Arc<Client>> {
        self.clients
            .get(&from)
            .cloned()
            .ok_or_else(|| eyre!("no signer registered for {:?}", from))
    }

    fn fund(&self, fund: Address, from: Address) -> Result<LairryFinkFund<Client>> {
        Ok(LairryFinkFund::new(fund, self.client(from)?))
    }

    fn token(&self, token: Address, from: Address) -> Result<ERC20Mintable<Client>> {
        Ok(ERC20Mintable::new(token, self.client(from)?))
    }

    /// Sends the call and waits for its receipt. Reverted transactions are
    /// errors.
    async fn confirm<D: Detokenize>(&self, call: ContractCall<Client, D>) -> Result<TransactionReceipt> {
        let call = call.gas(self.gas_limit);
        let pending = call
            .send()
            .await
            .map_err(|e| eyre!("transaction failed: {}", revert_reason(&e)))?;
        let tx_hash = pending.tx_hash();
        debug!(?tx_hash, "submitted transaction");
        let receipt = pending
            .await?
            .ok_or_else(|| eyre!("transaction {:?} was dropped", tx_hash))?;
        if receipt.status != Some(U64::one()) {
            return Err(eyre!("transaction {:?} reverted", tx_hash));
        }
        Ok(receipt)
    }

    async fn send<D: Detokenize>(&self, call: ContractCall<Client, D>) -> Result<TxHash> {
        Ok(self.confirm(call).await?.transaction_hash)
    }
}

#[async_trait]
impl Gateway for ChainGateway {
    async fn add_signer(&mut self, signer: LocalWallet) -> Result<()> {
        let signer = signer.with_chain_id(self.chain.chain_id());
        let client = self.chain.client(signer).await?;
        self.clients.insert(client.address(), client);
        Ok(())
    }

    async fn transfer_native(&self, from: Address, to: Address, amount: U256) -> Result<TxHash> {
        let client = self.client(from)?;
        let tx = TransactionRequest::new().from(from).to(to).value(amount);
        let pending = client.send_transaction(tx, None).await?;
        let tx_hash = pending.tx_hash();
        let receipt = pending
            .await?
            .ok_or_else(|| eyre!("transaction {:?} was dropped", tx_hash))?;
        if receipt.status != Some(U64::one()) {
            return Err(eyre!("transfer {:?} reverted", tx_hash));
        }
        Ok(tx_hash)
    }

    async fn fund_count(&self) -> Result<U256> {
        let factory = DtfFactoryFull::new(self.factory, self.reader.clone());
        Ok(factory.get_fund_count().call().await?)
    }

    async fn create_fund(&self, from: Address, params: &FundParams) -> Result<Option<FundCreated>> {
        let factory = DtfFactoryFull::new(self.factory, self.client(from)?);
        let receipt = self
            .confirm(factory.create_fund(
                params.name.clone(),
                params.deposit_fee_bps.into(),
                params.withdrawal_fee_bps.into(),
                params.management_fee_bps.into(),
                params.performance_fee_bps.into(),
            ))
            .await?;

        Ok(receipt
            .logs
            .into_iter()
            .filter(|log| log.address == self.factory)
            .find_map(|log| <FundCreatedFilter as EthEvent>::decode_log(&RawLog::from(log)).ok())
            .map(|event| FundCreated {
                fund: event.fund,
                creator: event.creator,
                name: event.name,
                timestamp: event.timestamp,
            }))
    }

    async fn fund_owner(&self, fund: Address) -> Result<Address> {
        let fund = LairryFinkFund::new(fund, self.reader.clone());
        Ok(fund.owner().call().await?)
    }

    async fn fund_name(&self, fund: Address) -> Result<String> {
        let fund = LairryFinkFund::new(fund, self.reader.clone());
        Ok(fund.name().call().await?)
    }

    async fn allocations(&self, fund: Address) -> Result<Vec<Allocation>> {
        let contract = LairryFinkFund::new(fund, self.reader.clone());
        Ok(contract
            .get_allocations()
            .call()
            .await?
            .into_iter()
            .map(|a| Allocation {
                token: a.token,
                weight_bps: to_bps(a.allocation),
            })
            .collect())
    }

    async fn share_balance(&self, fund: Address, holder: Address) -> Result<U256> {
        let fund = LairryFinkFund::new(fund, self.reader.clone());
        Ok(fund.balance_of(holder).call().await?)
    }

    async fn fee_balances(&self, fund: Address) -> Result<FeeBalances> {
        let fund = LairryFinkFund::new(fund, self.reader.clone());
        Ok(FeeBalances {
            deposit: fund.get_deposit_fee_balance().call().await?,
            withdrawal: fund.get_withdrawal_fee_balance().call().await?,
        })
    }

    async fn deposit(&self, from: Address, fund: Address, token: Address, amount: U256) -> Result<TxHash> {
        self.send(self.fund(fund, from)?.deposit(token, amount)).await
    }

    async fn withdraw(&self, from: Address, fund: Address, shares: U256) -> Result<TxHash> {
        self.send(self.fund(fund, from)?.withdraw(shares)).await
    }

    async fn set_allocation(
        &self,
        from: Address,
        fund: Address,
        token: Address,
        weight_bps: u64,
    ) -> Result<TxHash> {
        self.send(self.fund(fund, from)?.set_allocation(token, weight_bps.into()))
            .await
    }

    async fn withdraw_fees(&self, from: Address, fund: Address, to: Address, amount: U256) -> Result<TxHash> {
        self.send(self.fund(fund, from)?.withdraw_deposit_fees(to, amount))
            .await
    }

    async fn transfer_ownership(&self, from: Address, fund: Address, new_owner: Address) -> Result<TxHash> {
        self.send(self.fund(fund, from)?.transfer_ownership(new_owner))
            .await
    }

    async fn probe_token(&self, token: Address, holder: Address) -> Support<Token> {
        let contract = ERC20Mintable::new(token, self.reader.clone());
        let probe = async {
            let symbol = contract.symbol().call().await?;
            let decimals = contract.decimals().call().await?;
            contract.balance_of(holder).call().await?;
            Ok::<_, ContractError<Client>>(Token {
                address: token,
                symbol,
                decimals,
            })
        };
        match probe.await {
            Ok(token) => Support::Supported(token),
            Err(e) => Support::Unsupported(revert_reason(&e)),
        }
    }

    async fn probe_mint(&self, token: Address, minter: Address) -> Support<()> {
        let contract = ERC20Mintable::new(token, self.reader.clone());
        match contract.mint(minter, U256::zero()).from(minter).call().await {
            Ok(_) => Support::Supported(()),
            Err(e) => Support::Unsupported(revert_reason(&e)),
        }
    }

    async fn token_balance(&self, token: Address, holder: Address) -> Result<U256> {
        let token = ERC20Mintable::new(token, self.reader.clone());
        Ok(token.balance_of(holder).call().await?)
    }

    async fn allowance(&self, token: Address, owner: Address, spender: Address) -> Result<U256> {
        let token = ERC20Mintable::new(token, self.reader.clone());
        Ok(token.allowance(owner, spender).call().await?)
    }

    async fn approve(&self, from: Address, token: Address, spender: Address, amount: U256) -> Result<TxHash> {
        self.send(self.token(token, from)?.approve(spender, amount))
            .await
    }

    async fn mint(&self, from: Address, token: Address, to: Address, amount: U256) -> Result<TxHash> {
        self.send(self.token(token, from)?.mint(to, amount)).await
    }
}
