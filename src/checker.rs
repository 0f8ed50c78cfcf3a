//! Account checker that resolves an institute's method before validating

use tracing::{debug, instrument};

use crate::config::CheckerConfig;
use crate::method::MethodEngine;
use crate::traits::*;
use crate::types::*;
use crate::utils::digits::{normalize, normalize_lenient, validate_bank_code};
use crate::utils::MemoryDirectory;

/// Checks accounts of institutes listed in an [`InstituteDirectory`]
pub struct AccountChecker<D: InstituteDirectory> {
    directory: D,
    validator: Box<dyn CheckDigitValidator>,
    strip_whitespace: bool,
}

impl<D: InstituteDirectory> AccountChecker<D> {
    /// Create a checker backed by the standard method table
    pub fn new(directory: D) -> Self {
        Self::with_validator(directory, Box::new(MethodEngine::default()))
    }

    /// Create a checker with a custom validator
    pub fn with_validator(directory: D, validator: Box<dyn CheckDigitValidator>) -> Self {
        Self {
            directory,
            validator,
            strip_whitespace: false,
        }
    }

    /// Drop whitespace inside account numbers before checking
    pub fn strip_whitespace(mut self, enabled: bool) -> Self {
        self.strip_whitespace = enabled;
        self
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    pub fn directory_mut(&mut self) -> &mut D {
        &mut self.directory
    }

    /// Normalize an account number according to the checker's settings
    pub fn parse_account(&self, account: &str) -> CheckResult<AccountDigits> {
        if self.strip_whitespace {
            normalize_lenient(account)
        } else {
            normalize(account)
        }
    }

    /// Check an account with an explicit method, bypassing the directory
    pub fn check_with_method(
        &self,
        account: &str,
        method: &str,
        bank_code: Option<&str>,
    ) -> CheckResult<bool> {
        let digits = self.parse_account(account)?;
        Ok(self.validator.check(&digits, method, bank_code))
    }

    /// Look up the institute's method and check the account with it
    #[instrument(skip(self))]
    pub async fn check_account(&self, account: &str, bank_code: &str) -> CheckResult<CheckOutcome> {
        validate_bank_code(bank_code)?;
        let digits = self.parse_account(account)?;

        let method = self
            .directory
            .method_for_institute(bank_code)
            .await?
            .ok_or_else(|| CheckError::InstituteNotFound(bank_code.to_string()))?;

        let valid = self.validator.check(&digits, &method, Some(bank_code));
        debug!(method = %method, valid, "account checked");

        Ok(CheckOutcome {
            account: digits.to_string(),
            bank_code: bank_code.to_string(),
            method,
            valid,
        })
    }

    /// Like [`AccountChecker::check_account`], answering `false` on any error
    pub async fn is_valid_account(&self, account: &str, bank_code: &str) -> bool {
        match self.check_account(account, bank_code).await {
            Ok(outcome) => outcome.valid,
            Err(error) => {
                debug!(account, bank_code, error = %error, "account not checked");
                false
            }
        }
    }

    /// Check several accounts, one result per input pair
    pub async fn check_accounts(
        &self,
        accounts: &[(&str, &str)],
    ) -> Vec<CheckResult<CheckOutcome>> {
        let mut outcomes = Vec::with_capacity(accounts.len());
        for (account, bank_code) in accounts {
            outcomes.push(self.check_account(account, bank_code).await);
        }
        outcomes
    }
}

impl AccountChecker<MemoryDirectory> {
    /// Create a checker with an in-memory directory built from configuration
    pub fn from_config(config: &CheckerConfig) -> CheckResult<Self> {
        config.validate()?;
        let directory = MemoryDirectory::from_entries(config.institutes.clone());
        Ok(Self::new(directory).strip_whitespace(config.strip_whitespace))
    }
}
