//! # Bank Account Check
//!
//! Check digit validation for German domestic bank account numbers, covering
//! every computation method published by the Deutsche Bundesbank.
//!
//! ## Features
//!
//! - **All methods**: `00` to `99` and `A0` to `E1`, including their lettered variants
//! - **Pure checks**: a check is a deterministic function of account, method and sort code
//! - **Total answers**: malformed input and unknown methods are rejected, never a panic
//! - **Institute lookup**: trait-based directory mapping sort codes to methods
//! - **Configuration**: JSON configuration for directories and input handling
//!
//! ## Quick Start
//!
//! ```rust
//! use bank_account_check::{validate, validate_with_bank_code};
//!
//! assert!(validate("9290701", "00"));
//! assert!(!validate("9290702", "00"));
//!
//! // methods 52, 53, B6 and C0 fold the sort code into the check
//! assert!(validate_with_bank_code("43001500", "52", "13051172"));
//! ```

pub mod checker;
pub mod config;
pub mod method;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use checker::AccountChecker;
pub use config::CheckerConfig;
pub use method::{Method, MethodEngine, MethodId, MethodTable};
pub use traits::*;
pub use types::*;
pub use utils::MemoryDirectory;

/// Check an account number with a method, using the standard method table
///
/// Accounts that are not 1 to 10 decimal digits and unknown methods are
/// answered with `false`. Methods that need the sort code (52, 53, B6, C0)
/// reject accounts on the paths that use it.
pub fn validate(account: &str, method: &str) -> bool {
    MethodEngine::default().validate(account, method)
}

/// Check an account number with a method and the institute's sort code
pub fn validate_with_bank_code(account: &str, method: &str, bank_code: &str) -> bool {
    MethodEngine::default().validate_with_bank_code(account, method, bank_code)
}
