//! The operation log is a single JSON array that grows across runs. Each
//! entry is an envelope (`type`, `wallet`, `fund`, `timestamp`) around the
//! operation's own fields. Integers are written as decimal strings so that
//! token amounts never lose precision in JSON readers.

use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::{DateTime, SubsecRound, Utc};
use ethers::types::{Address, U256};
use eyre::{eyre, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error};

/// Integers that are written to the log as decimal strings.
trait Decimal: Sized {
    fn to_decimal(&self) -> String;
    fn from_decimal(s: &str) -> Result<Self, String>;
}

impl Decimal for u64 {
    fn to_decimal(&self) -> String {
        self.to_string()
    }

    fn from_decimal(s: &str) -> Result<Self, String> {
        s.parse().map_err(|e| format!("invalid integer {:?}: {}", s, e))
    }
}

impl Decimal for U256 {
    fn to_decimal(&self) -> String {
        self.to_string()
    }

    fn from_decimal(s: &str) -> Result<Self, String> {
        U256::from_dec_str(s).map_err(|e| format!("invalid integer {:?}: {}", s, e))
    }
}

mod dec_str {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::Decimal;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(u64),
    }

    pub fn serialize<T: Decimal, S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_decimal())
    }

    /// Accepts decimal strings as well as plain JSON numbers, which older
    /// logs used for small values.
    pub fn deserialize<'de, T: Decimal, D: Deserializer<'de>>(deserializer: D) -> Result<T, D::Error> {
        match Raw::deserialize(deserializer)? {
            Raw::Text(s) => T::from_decimal(&s).map_err(serde::de::Error::custom),
            Raw::Number(n) => T::from_decimal(&n.to_string()).map_err(serde::de::Error::custom),
        }
    }
}

/// Timestamps are always written with three fractional digits and a `Z`.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        DateTime::<Utc>::deserialize(deserializer)
    }
}

/// What happened, with the fields each kind of operation records.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Operation {
    CreateFund {
        name: String,
        #[serde(rename = "depositFee", with = "dec_str")]
        deposit_fee: u64,
        #[serde(rename = "withdrawalFee", with = "dec_str")]
        withdrawal_fee: u64,
        #[serde(rename = "managementFee", with = "dec_str")]
        management_fee: u64,
        #[serde(rename = "performanceFee", with = "dec_str")]
        performance_fee: u64,
    },
    Deposit {
        token: Address,
        #[serde(with = "dec_str")]
        amount: U256,
    },
    Withdraw {
        #[serde(with = "dec_str")]
        shares: U256,
        #[serde(with = "dec_str")]
        percentage: u64,
    },
    SetAllocation {
        token: Address,
        #[serde(with = "dec_str")]
        allocation: u64,
    },
    WithdrawFees {
        #[serde(with = "dec_str")]
        amount: U256,
        #[serde(with = "dec_str")]
        percentage: u64,
    },
    TransferOwnership {
        from: Address,
        to: Address,
    },
}

impl Operation {
    pub fn kind(&self) -> &'static str {
        match self {
            Operation::CreateFund { .. } => "create_fund",
            Operation::Deposit { .. } => "deposit",
            Operation::Withdraw { .. } => "withdraw",
            Operation::SetAllocation { .. } => "set_allocation",
            Operation::WithdrawFees { .. } => "withdraw_fees",
            Operation::TransferOwnership { .. } => "transfer_ownership",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationLogEntry {
    #[serde(flatten)]
    pub operation: Operation,
    pub wallet: Address,
    pub fund: Address,
    #[serde(with = "iso_millis")]
    pub timestamp: DateTime<Utc>,
}

impl OperationLogEntry {
    /// Stamps the operation with the current time, truncated to milliseconds.
    pub fn new(wallet: Address, fund: Address, operation: Operation) -> Self {
        Self {
            operation,
            wallet,
            fund,
            timestamp: Utc::now().trunc_subsecs(3),
        }
    }
}

/// The log file. Every append reads the whole file, adds the entry and
/// rewrites it, so there must be a single writer.
#[derive(Clone, Debug)]
pub struct OperationLog {
    path: PathBuf,
}

impl OperationLog {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The raw entries on disk. A missing or unreadable file is treated as an
    /// empty log. Entries are kept as JSON values so that records this
    /// version doesn't know survive a rewrite.
    fn load_raw(&self) -> Vec<Value> {
        if !self.path.exists() {
            return Vec::new();
        }
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                error!(path = %self.path.display(), %e, "error reading operation log");
                return Vec::new();
            }
        };
        match serde_json::from_str::<Value>(&contents) {
            Ok(Value::Array(entries)) => entries,
            Ok(_) => {
                error!(path = %self.path.display(), "operation log is not a JSON array");
                Vec::new()
            }
            Err(e) => {
                error!(path = %self.path.display(), %e, "error parsing operation log");
                Vec::new()
            }
        }
    }

    /// Appends an entry and rewrites the file.
    pub fn append(&self, entry: &OperationLogEntry) -> Result<()> {
        let mut entries = self.load_raw();
        entries.push(serde_json::to_value(entry)?);

        // Write next to the log and rename so that a crash mid-write can't
        // truncate it.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(&entries)?)
            .map_err(|e| eyre!("error writing {}: {}", tmp.display(), e))?;
        fs::rename(&tmp, &self.path)
            .map_err(|e| eyre!("error replacing {}: {}", self.path.display(), e))?;

        debug!(
            kind = entry.operation.kind(),
            wallet = ?entry.wallet,
            fund = ?entry.fund,
            "logged operation"
        );
        Ok(())
    }

    /// Stamps and appends an operation.
    pub fn record(&self, wallet: Address, fund: Address, operation: Operation) -> Result<OperationLogEntry> {
        let entry = OperationLogEntry::new(wallet, fund, operation);
        self.append(&entry)?;
        Ok(entry)
    }

    /// The entries this version understands, in the order they were logged.
    pub fn entries(&self) -> Vec<OperationLogEntry> {
        self.load_raw()
            .into_iter()
            .filter_map(|value| match serde_json::from_value(value) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    debug!(%e, "skipping unrecognized log entry");
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address(n: u64) -> Address {
        Address::from_low_u64_be(n)
    }

    #[test]
    fn test_entry_format() -> Result<()> {
        let entry = OperationLogEntry {
            operation: Operation::Deposit {
                token: address(3),
                amount: U256::from_dec_str("123456789012345678901234567890")?,
            },
            wallet: address(1),
            fund: address(2),
            timestamp: "2024-04-05T12:30:00.123Z".parse()?,
        };
        let value = serde_json::to_value(&entry)?;
        assert_eq!(value["type"], "deposit");
        assert_eq!(value["amount"], "123456789012345678901234567890");
        assert_eq!(value["wallet"], format!("{:?}", address(1)));
        assert_eq!(value["timestamp"], "2024-04-05T12:30:00.123Z");

        let value = serde_json::to_value(&OperationLogEntry {
            operation: Operation::CreateFund {
                name: "Test Fund 1".into(),
                deposit_fee: 75,
                withdrawal_fee: 120,
                management_fee: 200,
                performance_fee: 1500,
            },
            ..entry
        })?;
        assert_eq!(value["type"], "create_fund");
        assert_eq!(value["depositFee"], "75");
        assert_eq!(value["performanceFee"], "1500");

        // Whole seconds keep their millisecond digits.
        let value = serde_json::to_value(&OperationLogEntry {
            timestamp: "2024-04-05T12:30:00Z".parse()?,
            ..entry.clone()
        })?;
        assert_eq!(value["timestamp"], "2024-04-05T12:30:00.000Z");
        let value = serde_json::to_value(&OperationLogEntry {
            timestamp: "2024-04-05T12:30:00.120Z".parse()?,
            ..entry
        })?;
        assert_eq!(value["timestamp"], "2024-04-05T12:30:00.120Z");

        Ok(())
    }

    #[test]
    fn test_decode_numbers_and_strings() -> Result<()> {
        let raw = r#"{
  "type": "withdraw",
  "wallet": "0x70997970C51812dc3A010C7d01b50e0d17dc79C8",
  "fund": "0xa16E02E87b7454126E5E10d957A927A7F5B5d2be",
  "shares": "370",
  "percentage": 37,
  "timestamp": "2024-04-05T12:30:00.000Z"
}"#;
        let entry = serde_json::from_str::<OperationLogEntry>(raw)?;
        assert_eq!(
            entry.operation,
            Operation::Withdraw {
                shares: 370.into(),
                percentage: 37,
            }
        );

        Ok(())
    }

    #[test]
    fn test_missing_and_corrupt_files() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let log = OperationLog::new(dir.path().join("missing.json"));
        assert!(log.entries().is_empty());

        let path = dir.path().join("corrupt.json");
        fs::write(&path, "[{\"type\": \"deposit\",")?;
        let log = OperationLog::new(&path);
        assert!(log.entries().is_empty());

        // A corrupt log is replaced by a fresh one on the next append.
        log.record(
            address(1),
            address(2),
            Operation::TransferOwnership {
                from: address(1),
                to: address(4),
            },
        )?;
        assert_eq!(log.entries().len(), 1);

        Ok(())
    }

    #[test]
    fn test_unknown_entries_survive_rewrites() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("log.json");
        fs::write(
            &path,
            r#"[{"type": "rebalance", "wallet": "0x01", "fund": "0x02", "note": "manual"}]"#,
        )?;
        let log = OperationLog::new(&path);
        log.record(
            address(1),
            address(2),
            Operation::SetAllocation {
                token: address(3),
                allocation: 2500,
            },
        )?;

        let raw = serde_json::from_str::<Vec<Value>>(&fs::read_to_string(&path)?)?;
        assert_eq!(raw.len(), 2);
        assert_eq!(raw[0]["type"], "rebalance");
        assert_eq!(raw[1]["allocation"], "2500");
        assert_eq!(log.entries().len(), 1);

        Ok(())
    }
}
