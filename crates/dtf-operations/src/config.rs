use std::{ops::RangeInclusive, path::PathBuf, time::Duration};

use ethers::{
    types::U256,
    utils::{parse_ether, parse_units},
};
use eyre::{eyre, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ETHEREUM_URL, DEFAULT_MNEMONIC, MAX_BPS};

/// The prefix of every environment variable that configures a run.
pub const ENV_PREFIX: &str = "DTF_";

/// Everything that shapes a simulation run. Fee and allocation bounds are in
/// basis points, withdrawal bounds in whole percent, and token amounts in
/// decimal token units (e.g. "0.1").
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub ethereum_url: String,
    pub private_key: Option<String>,
    pub mnemonic: String,
    pub gas_limit: u64,

    pub factory_deployment_path: PathBuf,
    pub deployment_info_path: PathBuf,
    pub log_path: PathBuf,

    pub num_wallets: usize,
    /// Ether sent to each generated wallet.
    pub wallet_funding: String,
    /// Whole tokens minted to each wallet for every mintable token.
    pub mint_amount: String,

    pub num_funds_to_create: usize,
    pub num_operations: usize,
    pub operation_interval_ms: u64,
    /// Fixes the random source. A random seed is drawn (and logged) if unset.
    pub seed: Option<u64>,

    pub fund_name_prefix: String,
    pub deposit_fee_min: u64,
    pub deposit_fee_max: u64,
    pub withdrawal_fee_min: u64,
    pub withdrawal_fee_max: u64,
    pub management_fee_min: u64,
    pub management_fee_max: u64,
    pub performance_fee_min: u64,
    pub performance_fee_max: u64,

    pub allocation_min: u64,
    pub allocation_max: u64,
    pub max_tokens_per_fund: usize,

    pub deposit_min: String,
    pub deposit_max: String,
    pub withdrawal_min_percentage: u64,
    pub withdrawal_max_percentage: u64,

    pub fee_withdrawal_probability: f64,
    pub fee_withdrawal_min_percentage: u64,
    pub fee_withdrawal_max_percentage: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            ethereum_url: DEFAULT_ETHEREUM_URL.into(),
            private_key: None,
            mnemonic: DEFAULT_MNEMONIC.into(),
            gas_limit: 1_000_000,

            factory_deployment_path: "factory-deployment-full.json".into(),
            deployment_info_path: "deployment-info.json".into(),
            log_path: "dtf-operations-log.json".into(),

            num_wallets: 3,
            wallet_funding: "1".into(),
            mint_amount: "1000".into(),

            num_funds_to_create: 3,
            num_operations: 10,
            operation_interval_ms: 1_000,
            seed: None,

            fund_name_prefix: "Test Fund".into(),
            deposit_fee_min: 50,
            deposit_fee_max: 200,
            withdrawal_fee_min: 50,
            withdrawal_fee_max: 200,
            management_fee_min: 100,
            management_fee_max: 300,
            performance_fee_min: 1_000,
            performance_fee_max: 2_000,

            allocation_min: 1_000,
            allocation_max: 5_000,
            max_tokens_per_fund: 3,

            deposit_min: "0.1".into(),
            deposit_max: "1.0".into(),
            withdrawal_min_percentage: 10,
            withdrawal_max_percentage: 100,

            fee_withdrawal_probability: 0.3,
            fee_withdrawal_min_percentage: 10,
            fee_withdrawal_max_percentage: 100,
        }
    }
}

fn check_range(name: &str, min: u64, max: u64, ceiling: u64) -> Result<()> {
    if min > max {
        return Err(eyre!("{} range is inverted: {} > {}", name, min, max));
    }
    if max > ceiling {
        return Err(eyre!("{} maximum {} exceeds {}", name, max, ceiling));
    }
    Ok(())
}

impl SimulationConfig {
    /// Loads the configuration from `DTF_*` environment variables. A `.env`
    /// file in the working directory is read first if there is one.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        let config = envy::prefixed(ENV_PREFIX)
            .from_env::<Self>()
            .map_err(|e| eyre!("invalid configuration: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        check_range("deposit fee", self.deposit_fee_min, self.deposit_fee_max, MAX_BPS)?;
        check_range(
            "withdrawal fee",
            self.withdrawal_fee_min,
            self.withdrawal_fee_max,
            MAX_BPS,
        )?;
        check_range(
            "management fee",
            self.management_fee_min,
            self.management_fee_max,
            MAX_BPS,
        )?;
        check_range(
            "performance fee",
            self.performance_fee_min,
            self.performance_fee_max,
            MAX_BPS,
        )?;
        check_range("allocation", self.allocation_min, self.allocation_max, MAX_BPS)?;
        check_range(
            "withdrawal percentage",
            self.withdrawal_min_percentage,
            self.withdrawal_max_percentage,
            100,
        )?;
        check_range(
            "fee withdrawal percentage",
            self.fee_withdrawal_min_percentage,
            self.fee_withdrawal_max_percentage,
            100,
        )?;
        if self.max_tokens_per_fund == 0 {
            return Err(eyre!("max_tokens_per_fund must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.fee_withdrawal_probability) {
            return Err(eyre!(
                "fee_withdrawal_probability must be in [0, 1], got {}",
                self.fee_withdrawal_probability
            ));
        }

        // Amount strings are checked against the most common token precision.
        let (min, max) = self.deposit_bounds(18)?;
        if min > max {
            return Err(eyre!(
                "deposit range is inverted: {} > {}",
                self.deposit_min,
                self.deposit_max
            ));
        }
        self.wallet_funding()?;
        self.mint_amount(18)?;

        Ok(())
    }

    pub fn deposit_fee_range(&self) -> RangeInclusive<u64> {
        self.deposit_fee_min..=self.deposit_fee_max
    }

    pub fn withdrawal_fee_range(&self) -> RangeInclusive<u64> {
        self.withdrawal_fee_min..=self.withdrawal_fee_max
    }

    pub fn management_fee_range(&self) -> RangeInclusive<u64> {
        self.management_fee_min..=self.management_fee_max
    }

    pub fn performance_fee_range(&self) -> RangeInclusive<u64> {
        self.performance_fee_min..=self.performance_fee_max
    }

    pub fn withdrawal_percentage_range(&self) -> RangeInclusive<u64> {
        self.withdrawal_min_percentage..=self.withdrawal_max_percentage
    }

    pub fn fee_withdrawal_percentage_range(&self) -> RangeInclusive<u64> {
        self.fee_withdrawal_min_percentage..=self.fee_withdrawal_max_percentage
    }

    pub fn operation_interval(&self) -> Duration {
        Duration::from_millis(self.operation_interval_ms)
    }

    /// The native amount each generated wallet is funded with, in wei.
    pub fn wallet_funding(&self) -> Result<U256> {
        Ok(parse_ether(&self.wallet_funding)
            .map_err(|e| eyre!("invalid wallet_funding {:?}: {}", self.wallet_funding, e))?)
    }

    /// The deposit bounds in base units of a token with `decimals` decimals.
    pub fn deposit_bounds(&self, decimals: u8) -> Result<(U256, U256)> {
        Ok((
            to_base_units("deposit_min", &self.deposit_min, decimals)?,
            to_base_units("deposit_max", &self.deposit_max, decimals)?,
        ))
    }

    /// The amount minted to each wallet in base units.
    pub fn mint_amount(&self, decimals: u8) -> Result<U256> {
        to_base_units("mint_amount", &self.mint_amount, decimals)
    }
}

fn to_base_units(name: &str, amount: &str, decimals: u8) -> Result<U256> {
    Ok(parse_units(amount, decimals as u32)
        .map_err(|e| eyre!("invalid {} {:?}: {}", name, amount, e))?
        .into())
}
