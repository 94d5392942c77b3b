mod fork;

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use ethers::{
    middleware::{
        gas_escalator::{Frequency, GeometricGasPrice},
        nonce_manager::NonceManagerError,
        GasEscalatorMiddleware, MiddlewareError, NonceManagerMiddleware, SignerMiddleware,
    },
    providers::{
        Http, HttpClientError, HttpRateLimitRetryPolicy, Middleware, PendingTransaction, Provider,
        RetryClient, RetryClientBuilder, RetryPolicy,
    },
    signers::{coins_bip39::English, LocalWallet, MnemonicBuilder, Signer},
    types::{transaction::eip2718::TypedTransaction, Address, BlockId},
};
use eyre::{eyre, Result};
pub use fork::{check_fork, ForkStatus};
use tracing::info;

/// Errors that forked nodes return while they are still fetching state from
/// the upstream node.
const FORK_HICCUPS: [&str; 3] = [
    "header not found",
    "missing trie node",
    "intrinsic gas too high",
];

fn is_fork_hiccup(message: &str) -> bool {
    FORK_HICCUPS.iter().any(|hiccup| message.contains(hiccup))
}

/// A retry policy that will retry on rate limit errors, timeout errors, and
/// the transient errors of forked nodes.
#[derive(Debug, Default)]
struct ChainRetryPolicy(HttpRateLimitRetryPolicy);

impl RetryPolicy<HttpClientError> for ChainRetryPolicy {
    fn should_retry(&self, error: &HttpClientError) -> bool {
        self.0.should_retry(error) || is_fork_hiccup(&error.to_string())
    }

    fn backoff_hint(&self, error: &HttpClientError) -> Option<Duration> {
        match self.0.backoff_hint(error) {
            Some(duration) => Some(duration),
            None => {
                if is_fork_hiccup(&error.to_string()) {
                    Some(Duration::from_millis(250))
                } else {
                    None
                }
            }
        }
    }
}

type ChainClientProvider = Arc<RetryClient<Http>>;

type ChainClientInner<S> =
    NonceManagerMiddleware<SignerMiddleware<GasEscalatorMiddleware<Provider<ChainClientProvider>>, S>>;

#[derive(Debug)]
pub struct ChainClient<S: Signer + 'static> {
    inner: ChainClientInner<S>,
    address: Address,
}

/// A client with a provider stack that includes a retry policy, nonce manager,
/// signer, and gas escalator. Every wallet in the pool gets its own client so
/// that nonces are tracked per sender.
impl<S: Signer + 'static> ChainClient<S> {
    pub async fn new(provider: Provider<Http>, signer: S) -> Result<Self> {
        let provider = RetryClientBuilder::default()
            .rate_limit_retries(10)
            .timeout_retries(3)
            .initial_backoff(Duration::from_millis(100))
            .build(
                provider.as_ref().clone(),
                Box::<ChainRetryPolicy>::default(),
            );
        let provider = Provider::new(Arc::new(provider)).interval(Duration::from_millis(50));

        let inner = GasEscalatorMiddleware::new(
            provider,
            GeometricGasPrice::new(1.125, 10u64, None::<u64>),
            Frequency::PerBlock,
        );
        let inner = SignerMiddleware::new_with_provider_chain(inner, signer).await?;
        let address = inner.address();
        let inner = NonceManagerMiddleware::new(inner, address);

        Ok(Self { inner, address })
    }

    /// Gets the client's address.
    pub fn address(&self) -> Address {
        self.address
    }
}

#[async_trait]
impl<S: Signer + 'static> Middleware for ChainClient<S> {
    // NOTE: This is a pass-through middleware implementation, so we just use
    // the error from the top of the middleware stack.
    type Error = NonceManagerError<Self::Inner>;

    type Provider = ChainClientProvider;
    type Inner = ChainClientInner<S>;

    fn inner(&self) -> &Self::Inner {
        &self.inner
    }

    async fn send_transaction<T: Into<TypedTransaction> + Send + Sync>(
        &self,
        tx: T,
        block: Option<BlockId>,
    ) -> Result<PendingTransaction<'_, Self::Provider>, Self::Error> {
        Ok(self
            .inner
            .send_transaction(tx, block)
            .await
            .map_err(MiddlewareError::from_err)?)
    }
}

/// A connection to the node that the simulation runs against.
#[derive(Clone, Debug)]
pub struct Chain {
    provider: Provider<Http>,
    chain_id: u64,
}

impl Chain {
    pub async fn connect(rpc_url: &str) -> Result<Self> {
        let provider = Provider::<Http>::try_from(rpc_url)
            .map_err(|e| eyre!("invalid ethereum url {}: {}", rpc_url, e))?
            .interval(Duration::from_millis(50));
        let chain_id = provider
            .get_chainid()
            .await
            .map_err(|e| eyre!("couldn't reach node at {}: {}", rpc_url, e))?
            .as_u64();
        let client_version = provider.client_version().await.unwrap_or_default();
        info!(rpc_url, chain_id, %client_version, "connected to node");
        Ok(Self { provider, chain_id })
    }

    /// A provider that can access the chain.
    pub fn provider(&self) -> Provider<Http> {
        self.provider.clone()
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// A client that can access the chain.
    pub async fn client<S: Signer + 'static>(&self, signer: S) -> Result<Arc<ChainClient<S>>> {
        Ok(Arc::new(ChainClient::new(self.provider(), signer).await?))
    }

    /// The deployer's signer. An explicit private key wins over the mnemonic,
    /// whose first account is used otherwise.
    pub fn deployer(&self, maybe_private_key: Option<&str>, mnemonic: &str) -> Result<LocalWallet> {
        let signer = match maybe_private_key {
            Some(key) => key
                .trim_start_matches("0x")
                .parse::<LocalWallet>()
                .map_err(|e| eyre!("invalid deployer private key: {}", e))?,
            None => MnemonicBuilder::<English>::default()
                .phrase(mnemonic)
                .index(0u32)?
                .build()?,
        };
        Ok(signer.with_chain_id(self.chain_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fork_hiccups_are_retried() {
        let policy = ChainRetryPolicy::default();
        let error = HttpClientError::JsonRpcError(ethers::providers::JsonRpcError {
            code: -32000,
            message: "header not found".into(),
            data: None,
        });
        assert!(policy.should_retry(&error));
        assert!(policy.backoff_hint(&error).is_some());

        let error = HttpClientError::JsonRpcError(ethers::providers::JsonRpcError {
            code: 3,
            message: "execution reverted: Not owner".into(),
            data: None,
        });
        assert!(!policy.should_retry(&error));
    }
}
