//! Account number normalization and digit helpers

use crate::types::*;

/// Parse an account number into its original and canonical digit forms
///
/// Only ASCII digits are accepted. Signs, separators and empty input are
/// rejected, as is any value that does not fit in ten digits.
pub fn normalize(input: &str) -> CheckResult<AccountDigits> {
    if input.is_empty() {
        return Err(CheckError::InvalidAccount(
            "Account number cannot be empty".to_string(),
        ));
    }

    if !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CheckError::InvalidAccount(format!(
            "Account number can only contain digits: {:?}",
            input
        )));
    }

    let significant = input.trim_start_matches('0');
    if significant.len() > ACCOUNT_WIDTH {
        return Err(CheckError::InvalidAccount(format!(
            "Account number exceeds {} digits: {}",
            ACCOUNT_WIDTH, input
        )));
    }

    let original: Vec<u8> = if significant.is_empty() {
        vec![0]
    } else {
        significant.bytes().map(|b| b - b'0').collect()
    };

    let value = to_number(&original);

    let mut canonical = [0u8; ACCOUNT_WIDTH];
    canonical[ACCOUNT_WIDTH - original.len()..].copy_from_slice(&original);

    Ok(AccountDigits {
        text: input.to_string(),
        original,
        canonical,
        value,
    })
}

/// Like [`normalize`], but drops any whitespace first
pub fn normalize_lenient(input: &str) -> CheckResult<AccountDigits> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    normalize(&compact)
}

/// Read a run of decimal digits as a number
pub fn to_number(digits: &[u8]) -> u64 {
    digits
        .iter()
        .fold(0u64, |acc, &d| acc.saturating_mul(10).saturating_add(u64::from(d)))
}

/// Cross sum of a number (sum of its decimal digits)
pub fn digit_sum(mut value: u32) -> u32 {
    let mut sum = 0;
    while value > 0 {
        sum += value % 10;
        value /= 10;
    }
    sum
}

/// Validate a German sort code (Bankleitzahl): eight digits
pub fn validate_bank_code(bank_code: &str) -> CheckResult<()> {
    if bank_code.len() != 8 || !bank_code.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CheckError::InvalidBankCode(format!(
            "Bank code must consist of eight digits: {:?}",
            bank_code
        )));
    }
    Ok(())
}
