//! Account checking example

use bank_account_check::{validate, AccountChecker, CheckerConfig, Method, MethodTable};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🏦 Bank Account Check - Example\n");

    // 1. Check accounts against a known method
    println!("🔢 Checking with explicit methods...");
    for (account, method) in [("9290701", "00"), ("9290702", "00"), ("0446786040", "17")] {
        let verdict = if validate(account, method) { "valid" } else { "invalid" };
        println!("  {account:>10} method {method}: {verdict}");
    }
    println!();

    // 2. Inspect the parameter table
    let table = MethodTable::shared();
    if let Some(params) = table.get(&Method::M13.variant('b')) {
        println!(
            "📐 Method 13b: modulus {}, weights {:?}, digits {}..={} check {}\n",
            params.modulus, params.weights, params.range.start, params.range.stop, params.range.check
        );
    }

    // 3. Check through an institute directory built from configuration
    println!("📇 Checking through the institute directory...");
    let config = CheckerConfig::from_json(
        r#"{
            "strip_whitespace": true,
            "institutes": { "13051172": "52", "80053782": "B6", "37040044": "00" }
        }"#,
    )?;
    let checker = AccountChecker::from_config(&config)?;

    for (account, bank_code) in [
        ("4300 1500", "13051172"),
        ("487310018", "80053782"),
        ("9290701", "37040044"),
        ("9290701", "10000000"),
    ] {
        match checker.check_account(account, bank_code).await {
            Ok(outcome) => println!(
                "  ✓ {} at {} (method {}): {}",
                outcome.account,
                outcome.bank_code,
                outcome.method,
                if outcome.valid { "valid" } else { "invalid" }
            ),
            Err(error) => println!("  ✗ {account} at {bank_code}: {error}"),
        }
    }

    Ok(())
}
