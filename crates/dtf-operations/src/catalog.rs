use std::path::Path;

use dtf_addresses::DeploymentInfo;
use ethers::types::Address;
use tracing::{info, warn};

use crate::{
    config::SimulationConfig,
    gateway::{Gateway, Support, Token},
};

/// A token the funds can allocate to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogToken {
    pub token: Token,
    /// Whether the deployer can mint the token.
    pub mintable: bool,
}

/// The tokens that answered the ERC20 reads at start-up. The catalog is
/// built once and doesn't change during a run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenCatalog {
    tokens: Vec<CatalogToken>,
}

impl TokenCatalog {
    pub fn new(tokens: Vec<CatalogToken>) -> Self {
        Self { tokens }
    }

    /// Probes the candidate tokens and keeps the supported ones. WETH is only
    /// used if none of the candidates work.
    pub async fn resolve<G: Gateway>(
        gateway: &G,
        candidates: &[Address],
        maybe_weth: Option<Address>,
        deployer: Address,
    ) -> Self {
        let mut tokens = Vec::new();
        for &address in candidates {
            if let Some(token) = probe(gateway, address, deployer).await {
                tokens.push(token);
            }
        }

        if tokens.is_empty() {
            if let Some(weth) = maybe_weth {
                info!(?weth, "no reference tokens available, falling back to WETH");
                tokens.extend(probe(gateway, weth, deployer).await);
            }
        }

        if tokens.is_empty() {
            warn!("no usable tokens; allocations and deposits will be skipped");
        } else {
            info!(
                symbols = ?tokens.iter().map(|t| t.token.symbol.as_str()).collect::<Vec<_>>(),
                "token catalog ready"
            );
        }
        Self { tokens }
    }

    pub fn tokens(&self) -> &[CatalogToken] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn get(&self, address: Address) -> Option<&Token> {
        self.tokens
            .iter()
            .map(|t| &t.token)
            .find(|t| t.address == address)
    }
}

async fn probe<G: Gateway>(gateway: &G, address: Address, deployer: Address) -> Option<CatalogToken> {
    let token = match gateway.probe_token(address, deployer).await {
        Support::Supported(token) => token,
        Support::Unsupported(reason) => {
            warn!(token = ?address, %reason, "token doesn't support ERC20 reads, skipping it");
            return None;
        }
    };
    let mintable = match gateway.probe_mint(address, deployer).await {
        Support::Supported(()) => true,
        Support::Unsupported(reason) => {
            info!(symbol = %token.symbol, %reason, "token is not mintable by the deployer");
            false
        }
    };
    info!(
        symbol = %token.symbol,
        token = ?address,
        decimals = token.decimals,
        mintable,
        "found token"
    );
    Some(CatalogToken { token, mintable })
}

/// Reads the reference token list. The file is optional.
pub fn load_deployment_info(path: &Path) -> Option<DeploymentInfo> {
    if !path.exists() {
        info!(path = %path.display(), "no deployment info found");
        return None;
    }
    match DeploymentInfo::load(path) {
        Ok(info) => Some(info),
        Err(e) => {
            warn!(%e, "error reading deployment info");
            None
        }
    }
}

/// Mints the configured amount of every mintable catalog token to each
/// wallet. Returns the number of successful mints.
pub async fn prepare_tokens<G: Gateway>(
    gateway: &G,
    catalog: &TokenCatalog,
    minter: Address,
    wallets: &[Address],
    config: &SimulationConfig,
) -> usize {
    let mut minted = 0;
    for entry in catalog.tokens().iter().filter(|t| t.mintable) {
        let token = &entry.token;
        let units = match config.mint_amount(token.decimals) {
            Ok(units) => units,
            Err(e) => {
                warn!(symbol = %token.symbol, %e, "invalid mint amount");
                continue;
            }
        };
        for &wallet in wallets {
            match gateway.mint(minter, token.address, wallet, units).await {
                Ok(_) => {
                    info!(symbol = %token.symbol, ?wallet, amount = %units, "minted tokens");
                    minted += 1;
                }
                Err(e) => warn!(symbol = %token.symbol, ?wallet, %e, "error minting tokens"),
            }
        }
    }
    minted
}

#[cfg(test)]
mod tests {
    use ethers::types::U256;
    use eyre::Result;

    use super::*;
    use crate::gateway::mock::MockGateway;

    #[tokio::test]
    async fn test_resolve_skips_broken_tokens() -> Result<()> {
        let gateway = MockGateway::new();
        let deployer = gateway.add_wallet();
        let usdc = gateway.add_token("USDC", 6, true);
        let broken = gateway.add_broken_token();
        let dai = gateway.add_token("DAI", 18, false);
        let weth = gateway.add_token("WETH", 18, false);

        let catalog = TokenCatalog::resolve(&gateway, &[usdc, broken, dai], Some(weth), deployer).await;
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(usdc).map(|t| t.decimals), Some(6));
        assert!(catalog.get(broken).is_none());
        assert!(catalog.get(weth).is_none());
        assert!(catalog.tokens()[0].mintable);
        assert!(!catalog.tokens()[1].mintable);

        Ok(())
    }

    #[tokio::test]
    async fn test_resolve_falls_back_to_weth() -> Result<()> {
        let gateway = MockGateway::new();
        let deployer = gateway.add_wallet();
        let broken = gateway.add_broken_token();
        let weth = gateway.add_token("WETH", 18, false);

        let catalog = TokenCatalog::resolve(&gateway, &[broken], Some(weth), deployer).await;
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(weth).map(|t| t.symbol.as_str()), Some("WETH"));

        let catalog = TokenCatalog::resolve(&gateway, &[], None, deployer).await;
        assert!(catalog.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_prepare_tokens_mints_to_every_wallet() -> Result<()> {
        let gateway = MockGateway::new();
        let deployer = gateway.add_wallet();
        let alice = gateway.add_wallet();
        let usdc = gateway.add_token("USDC", 6, true);
        let weth = gateway.add_token("WETH", 18, false);
        let catalog = TokenCatalog::resolve(&gateway, &[usdc, weth], None, deployer).await;

        let config = SimulationConfig {
            mint_amount: "2.5".into(),
            ..Default::default()
        };
        let minted = prepare_tokens(&gateway, &catalog, deployer, &[deployer, alice], &config).await;
        assert_eq!(minted, 2);
        assert_eq!(gateway.token_balance(usdc, alice).await?, config.mint_amount(6)?);
        assert_eq!(gateway.token_balance(usdc, alice).await?, U256::from(2_500_000u64));
        assert_eq!(gateway.token_balance(weth, alice).await?, U256::zero());

        // An unparseable amount mints nothing.
        let config = SimulationConfig {
            mint_amount: "lots".into(),
            ..Default::default()
        };
        assert_eq!(prepare_tokens(&gateway, &catalog, deployer, &[alice], &config).await, 0);

        Ok(())
    }

    #[test]
    fn test_missing_deployment_info_is_not_fatal() {
        assert!(load_deployment_info(Path::new("/nonexistent/deployment-info.json")).is_none());
    }
}
