//! Traits for institute lookup and validator extensibility

use async_trait::async_trait;

use crate::types::*;

/// Source of the method assigned to each institute
///
/// The Bundesbank publishes the sort code (Bankleitzahl) directory with the
/// check method of every institute. This trait lets the checker work with any
/// copy of it (a database table, a parsed directory file, in-memory, etc.).
#[async_trait]
pub trait InstituteDirectory: Send + Sync {
    /// Get the method identifier assigned to a sort code
    async fn method_for_institute(&self, bank_code: &str) -> CheckResult<Option<String>>;

    /// Assign a method to a sort code, replacing any previous assignment
    async fn assign_method(&mut self, bank_code: &str, method: &str) -> CheckResult<()>;

    /// Remove an institute from the directory
    async fn remove_institute(&mut self, bank_code: &str) -> CheckResult<()>;

    /// List all sort codes with their methods
    async fn list_institutes(&self) -> CheckResult<Vec<(String, String)>>;
}

/// Trait for implementing check digit validation
pub trait CheckDigitValidator: Send + Sync {
    /// Check normalized account digits with a method identifier
    ///
    /// The sort code is only consulted by methods that include it in the check.
    fn check(&self, account: &AccountDigits, method: &str, bank_code: Option<&str>) -> bool;
}
