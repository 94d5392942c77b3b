use ethers::{
    providers::{Http, Middleware, Provider},
    types::Address,
};
use eyre::Result;
use tracing::{info, warn};

use crate::constants::{MAINNET_DAI, MAINNET_UNISWAP_V2_ROUTER, MAINNET_WETH};

/// What the node reports about being a mainnet fork.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForkStatus {
    pub chain_id: u64,
    pub block_number: u64,
    pub weth: bool,
    pub uniswap_router: bool,
    pub dai: bool,
}

impl ForkStatus {
    /// A fork needs at least WETH and the router for the fund contracts to
    /// be usable.
    pub fn is_fork(&self) -> bool {
        self.weth && self.uniswap_router
    }
}

async fn has_code(provider: &Provider<Http>, address: Address) -> Result<bool> {
    Ok(!provider.get_code(address, None).await?.is_empty())
}

/// Checks for deployed code at well-known mainnet addresses.
pub async fn check_fork(provider: &Provider<Http>) -> Result<ForkStatus> {
    let status = ForkStatus {
        chain_id: provider.get_chainid().await?.as_u64(),
        block_number: provider.get_block_number().await?.as_u64(),
        weth: has_code(provider, *MAINNET_WETH).await?,
        uniswap_router: has_code(provider, *MAINNET_UNISWAP_V2_ROUTER).await?,
        dai: has_code(provider, *MAINNET_DAI).await?,
    };
    info!(
        chain_id = status.chain_id,
        block_number = status.block_number,
        weth = status.weth,
        uniswap_router = status.uniswap_router,
        dai = status.dai,
        "checked for mainnet contracts"
    );
    if !status.is_fork() {
        warn!("the node does not look like a mainnet fork");
    }
    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_fork() {
        let status = ForkStatus {
            chain_id: 31337,
            block_number: 19_000_000,
            weth: true,
            uniswap_router: true,
            dai: false,
        };
        assert!(status.is_fork());
        assert!(!ForkStatus {
            uniswap_router: false,
            ..status
        }
        .is_fork());
    }
}
