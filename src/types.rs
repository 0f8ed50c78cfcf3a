//! Core types and data structures for the check digit engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of digits in a canonical account number
pub const ACCOUNT_WIDTH: usize = 10;

/// Positions of a method's working digits inside an account number
///
/// Positions are 0-based and inclusive, counted from the left of the
/// zero-padded ten digit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DigitRange {
    /// First digit taking part in the weighted sum
    pub start: usize,
    /// Last digit taking part in the weighted sum
    pub stop: usize,
    /// Position of the check digit
    pub check: usize,
}

impl DigitRange {
    pub const fn new(start: usize, stop: usize, check: usize) -> Self {
        Self { start, stop, check }
    }

    /// Select the working digits from `digits`
    ///
    /// A start past the stop yields an empty slice; a stop past the end is clamped.
    pub fn slice<'d>(&self, digits: &'d [u8]) -> &'d [u8] {
        let end = (self.stop + 1).min(digits.len());
        if self.start >= end {
            return &[];
        }
        &digits[self.start..end]
    }

    /// The check digit held by `digits`, if the position exists
    pub fn check_digit(&self, digits: &[u8]) -> Option<u8> {
        digits.get(self.check).copied()
    }
}

/// Parameters of one method or method variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodParameters {
    /// Modulus of the computation, zero for methods that are fully hand written
    pub modulus: u32,
    /// Weights applied in the direction the pattern walks, may be empty
    pub weights: Vec<u32>,
    /// Working digits and check digit position
    pub range: DigitRange,
}

impl MethodParameters {
    pub fn new(modulus: u32, weights: &[u32], range: DigitRange) -> Self {
        Self {
            modulus,
            weights: weights.to_vec(),
            range,
        }
    }
}

/// A validated account number in its original and canonical forms
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountDigits {
    /// The digits exactly as supplied, after optional whitespace removal
    pub text: String,
    /// Digits of the number with leading zeros removed (a single 0 for zero)
    pub original: Vec<u8>,
    /// Zero padded ten digit form
    pub canonical: [u8; ACCOUNT_WIDTH],
    /// Numeric value of the account number
    pub value: u64,
}

impl AccountDigits {
    /// Count of zeros padding the canonical form on the left
    pub fn leading_zeros(&self) -> usize {
        ACCOUNT_WIDTH - self.original.len()
    }

    /// Number of significant digits
    pub fn len(&self) -> usize {
        self.original.len()
    }

    pub fn is_empty(&self) -> bool {
        self.original.is_empty()
    }
}

impl FromStr for AccountDigits {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::utils::digits::normalize(s)
    }
}

impl fmt::Display for AccountDigits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in &self.canonical {
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}

/// Result of checking one account against its institute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutcome {
    /// Canonical ten digit account number
    pub account: String,
    /// Sort code (Bankleitzahl) the account was checked for
    pub bank_code: String,
    /// Method identifier used for the check
    pub method: String,
    /// Whether the check digit matched
    pub valid: bool,
}

/// Errors that can occur around the check digit engine
///
/// The engine itself never reports errors for a check, it answers false.
/// These errors come from parsing, configuration and institute lookup.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("Invalid account number: {0}")]
    InvalidAccount(String),
    #[error("Invalid bank code: {0}")]
    InvalidBankCode(String),
    #[error("Unknown check method: {0}")]
    UnknownMethod(String),
    #[error("Institute not found: {0}")]
    InstituteNotFound(String),
    #[error("Directory error: {0}")]
    Directory(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for check digit operations
pub type CheckResult<T> = Result<T, CheckError>;
