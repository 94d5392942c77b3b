use ethers::{
    signers::{LocalWallet, Signer},
    types::{Address, U256},
};
use eyre::{eyre, Result};
use rand::{CryptoRng, Rng};
use tracing::{info, warn};

use crate::gateway::Gateway;

/// A wallet the simulator can send transactions from. Keys only live in
/// memory for the length of the run.
#[derive(Clone, Debug)]
pub struct Wallet {
    signer: LocalWallet,
}

impl Wallet {
    pub fn new(signer: LocalWallet) -> Self {
        Self { signer }
    }

    pub fn address(&self) -> Address {
        self.signer.address()
    }
}

/// The primary (deployer) wallet followed by the generated wallets that
/// were funded successfully.
#[derive(Clone, Debug)]
pub struct WalletPool {
    wallets: Vec<Wallet>,
}

impl WalletPool {
    /// Registers the primary wallet with the gateway, then generates `count`
    /// wallets, registers each and funds it with `funding` wei from the
    /// primary. Wallets that fail either step are dropped, and nothing is
    /// sent to a wallet that couldn't be registered. Failing to register the
    /// primary is fatal.
    pub async fn load<G, R>(
        gateway: &mut G,
        primary: LocalWallet,
        count: usize,
        funding: U256,
        rng: &mut R,
    ) -> Result<Self>
    where
        G: Gateway,
        R: Rng + CryptoRng,
    {
        let primary = Wallet::new(primary);
        gateway
            .add_signer(primary.signer.clone())
            .await
            .map_err(|e| eyre!("couldn't register primary wallet {:?}: {}", primary.address(), e))?;
        info!(address = ?primary.address(), "loaded primary wallet");

        let mut wallets = vec![primary];
        for i in 0..count {
            let wallet = Wallet::new(LocalWallet::new(rng));
            let address = wallet.address();
            if let Err(e) = gateway.add_signer(wallet.signer.clone()).await {
                warn!(index = i, ?address, %e, "error registering wallet, dropping it");
                continue;
            }
            if let Err(e) = gateway
                .transfer_native(wallets[0].address(), address, funding)
                .await
            {
                warn!(index = i, ?address, %e, "error funding wallet, dropping it");
                continue;
            }
            info!(index = i, ?address, %funding, "funded wallet");
            wallets.push(wallet);
        }
        info!(count = wallets.len(), "wallet pool ready");

        Ok(Self { wallets })
    }

    pub fn primary(&self) -> &Wallet {
        &self.wallets[0]
    }

    pub fn len(&self) -> usize {
        self.wallets.len()
    }

    pub fn addresses(&self) -> Vec<Address> {
        self.wallets.iter().map(|w| w.address()).collect()
    }

    pub fn contains(&self, address: Address) -> bool {
        self.wallets.iter().any(|w| w.address() == address)
    }

    pub fn random<R: Rng + ?Sized>(&self, rng: &mut R) -> &Wallet {
        &self.wallets[rng.gen_range(0..self.wallets.len())]
    }
}
