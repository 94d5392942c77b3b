//! Deployment artifacts written by the factory and fund setup scripts. These
//! are consumed read-only when the simulator starts.

use std::path::Path;

use ethers::types::Address;
use eyre::{eyre, Result};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = std::fs::File::open(path)
        .map_err(|e| eyre!("couldn't open deployment file {}: {}", path.display(), e))?;
    serde_json::from_reader(file)
        .map_err(|e| eyre!("couldn't parse deployment file {}: {}", path.display(), e))
}

/// The contents of `factory-deployment-full.json`.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct FactoryDeployment {
    pub factory_address: Option<Address>,
    pub bytecode_address: Option<Address>,
    pub weth_address: Option<Address>,
    pub uniswap_router_address: Option<Address>,
    pub network: Option<String>,
    pub deployer: Option<Address>,
    pub timestamp: Option<u64>,
    pub bytecode_size: Option<u64>,
}

impl FactoryDeployment {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(eyre!(
                "factory deployment info not found at {}. Please deploy the factory first.",
                path.display()
            ));
        }
        read_json(path)
    }

    /// The factory address. A deployment file without one is unusable.
    pub fn factory(&self) -> Result<Address> {
        self.factory_address
            .ok_or_else(|| eyre!("factory address not found in deployment info"))
    }
}

/// A token entry in `deployment-info.json`.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct TokenEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: String,
    pub address: Address,
    /// The percentage allocation the setup script assigned. Informational only.
    #[serde(default)]
    pub allocation: Option<f64>,
}

/// The contents of `deployment-info.json`.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct DeploymentInfo {
    pub fund_address: Option<Address>,
    pub share_token_address: Option<Address>,
    pub weth_address: Option<Address>,
    pub uniswap_router_address: Option<Address>,
    pub is_mainnet_fork: Option<bool>,
    pub tokens: Vec<TokenEntry>,
}

impl DeploymentInfo {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        read_json(path.as_ref())
    }

    pub fn token_addresses(&self) -> Vec<Address> {
        self.tokens.iter().map(|t| t.address).collect()
    }
}

/// The addresses the simulator works against.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Addresses {
    pub factory: Address,
    pub weth: Option<Address>,
    pub tokens: Vec<Address>,
}

impl Addresses {
    /// Combines the factory deployment with the (optional) fund setup info.
    /// The WETH address from the factory deployment takes precedence.
    pub fn new(factory: &FactoryDeployment, info: Option<&DeploymentInfo>) -> Result<Self> {
        Ok(Self {
            factory: factory.factory()?,
            weth: factory
                .weth_address
                .or_else(|| info.and_then(|i| i.weth_address)),
            tokens: info.map(|i| i.token_addresses()).unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_factory_deployment() -> Result<()> {
        let raw = r#"{
  "factoryAddress": "0x5FbDB2315678afecb367f032d93F642f64180aa3",
  "bytecodeAddress": "0xe7f1725E7734CE288F8367e1Bb143E90bb3F0512",
  "wethAddress": "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2",
  "uniswapRouterAddress": "0x7a250d5630B4cF539739dF2C5dAcb4c659F2488D",
  "network": "localhost",
  "deployer": "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266",
  "timestamp": 1712345678,
  "bytecodeSize": 24131
}"#;
        let deployment = serde_json::from_str::<FactoryDeployment>(raw)?;
        assert_eq!(
            deployment.factory()?,
            "0x5FbDB2315678afecb367f032d93F642f64180aa3".parse()?
        );
        assert_eq!(deployment.bytecode_size, Some(24131));
        assert_eq!(deployment.network.as_deref(), Some("localhost"));

        Ok(())
    }

    #[test]
    fn test_missing_factory_address() -> Result<()> {
        let deployment = serde_json::from_str::<FactoryDeployment>(r#"{"network": "hardhat"}"#)?;
        assert!(deployment.factory().is_err());
        assert!(FactoryDeployment::load("/nonexistent/factory-deployment-full.json").is_err());

        Ok(())
    }

    #[test]
    fn test_addresses_from_deployment_info() -> Result<()> {
        let factory = serde_json::from_str::<FactoryDeployment>(
            r#"{"factoryAddress": "0x5FbDB2315678afecb367f032d93F642f64180aa3"}"#,
        )?;
        let info = serde_json::from_str::<DeploymentInfo>(
            r#"{
  "fundAddress": "0x9fE46736679d2D9a65F0992F2272dE9f3c7fa6e0",
  "wethAddress": "0xCf7Ed3AccA5a467e9e704C703E8D87F634fB0Fc9",
  "isMainnetFork": false,
  "tokens": [
    { "name": "TokenA", "symbol": "TKA", "address": "0xDc64a140Aa3E981100a9becA4E685f962f0cF6C9", "allocation": 12.5 },
    { "name": "TokenB", "symbol": "TKB", "address": "0x5FC8d32690cc91D4c39d9d3abcBD16989F875707", "allocation": 37.5 }
  ]
}"#,
        )?;
        let addresses = Addresses::new(&factory, Some(&info))?;
        assert_eq!(addresses.tokens.len(), 2);
        assert_eq!(
            addresses.tokens[1],
            "0x5FC8d32690cc91D4c39d9d3abcBD16989F875707".parse()?
        );
        assert_eq!(
            addresses.weth,
            Some("0xCf7Ed3AccA5a467e9e704C703E8D87F634fB0Fc9".parse()?)
        );

        // Without the setup info there are no reference tokens.
        let addresses = Addresses::new(&factory, None)?;
        assert!(addresses.tokens.is_empty());
        assert_eq!(addresses.weth, None);

        Ok(())
    }
}
