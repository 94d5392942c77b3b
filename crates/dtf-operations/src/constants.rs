use std::env;

use ethers::types::Address;

/// The mnemonic that Hardhat and anvil derive their default accounts from.
/// The first account is the deployer unless a private key is configured.
pub const DEFAULT_MNEMONIC: &str = "test test test test test test test test test test test junk";

/// The RPC endpoint of a local `hardhat node`.
pub const DEFAULT_ETHEREUM_URL: &str = "http://127.0.0.1:8545";

/// 100% in basis points.
pub const MAX_BPS: u64 = 10_000;

lazy_static! {
    // Mainnet contracts whose presence indicates that the node is a fork.
    pub static ref MAINNET_WETH: Address = "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2".parse().unwrap();
    pub static ref MAINNET_UNISWAP_V2_ROUTER: Address = "0x7a250d5630B4cF539739dF2C5dAcb4c659F2488D".parse().unwrap();
    pub static ref MAINNET_DAI: Address = "0x6B175474E89094C44Da98b954EedeAC495271d0F".parse().unwrap();

    // The number of random draws that the randomized property tests use.
    pub static ref PROPERTY_RUNS: u64 = env::var("DTF_PROPERTY_RUNS").ok().and_then(|s| s.parse().ok()).unwrap_or(1_000);
}
