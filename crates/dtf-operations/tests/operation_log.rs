use dtf_operations::oplog::{Operation, OperationLog};
use ethers::types::{Address, U256};
use eyre::Result;

#[test]
fn test_log_round_trip() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let log = OperationLog::new(dir.path().join("dtf-operations-log.json"));
    let wallet = "0x70997970C51812dc3A010C7d01b50e0d17dc79C8".parse::<Address>()?;
    let fund = "0xa16E02E87b7454126E5E10d957A927A7F5B5d2be".parse::<Address>()?;
    let token = "0xDc64a140Aa3E981100a9becA4E685f962f0cF6C9".parse::<Address>()?;

    let operations = vec![
        Operation::CreateFund {
            name: "Test Fund 1712345678901".into(),
            deposit_fee: 125,
            withdrawal_fee: 60,
            management_fee: 250,
            performance_fee: 1_750,
        },
        Operation::SetAllocation {
            token,
            allocation: 4_200,
        },
        Operation::Deposit {
            token,
            amount: U256::MAX,
        },
        Operation::Withdraw {
            shares: U256::from_dec_str("340282366920938463463374607431768211457")?,
            percentage: 37,
        },
        Operation::WithdrawFees {
            amount: 250_000.into(),
            percentage: 25,
        },
        Operation::TransferOwnership {
            from: wallet,
            to: fund,
        },
    ];
    let mut written = Vec::new();
    for operation in operations {
        written.push(log.record(wallet, fund, operation)?);
    }

    // Entries come back in order with every integer intact.
    assert_eq!(log.entries(), written);

    // Integers are stored as decimal strings.
    let raw = serde_json::from_str::<serde_json::Value>(&std::fs::read_to_string(log.path())?)?;
    assert_eq!(raw.as_array().map(|a| a.len()), Some(6));
    assert_eq!(raw[2]["amount"], U256::MAX.to_string());
    assert_eq!(raw[3]["shares"], "340282366920938463463374607431768211457");
    assert_eq!(raw[4]["percentage"], "25");
    assert_eq!(raw[5]["type"], "transfer_ownership");

    Ok(())
}
