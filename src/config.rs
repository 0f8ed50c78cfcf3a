//! Checker configuration
//!
//! Configuration is plain JSON:
//!
//! ```json
//! {
//!   "strip_whitespace": true,
//!   "institutes": { "13051172": "52", "80053782": "B6" }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::warn;

use crate::method::MethodId;
use crate::types::{CheckError, CheckResult};
use crate::utils::digits::validate_bank_code;

/// Settings for an [`AccountChecker`](crate::checker::AccountChecker)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    /// Drop whitespace from account numbers before checking ("1234 5678")
    pub strip_whitespace: bool,
    /// Method assigned to each sort code
    pub institutes: BTreeMap<String, String>,
}

impl CheckerConfig {
    /// Parse configuration from a JSON document
    pub fn from_json(json: &str) -> CheckResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| CheckError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> CheckResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| CheckError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    /// Serialize the configuration back to pretty printed JSON
    pub fn to_json(&self) -> CheckResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| CheckError::Config(e.to_string()))
    }

    /// Reject malformed sort codes
    ///
    /// Methods that are unknown to this build are kept, institutes may still
    /// reference retired methods. Accounts of such institutes never validate.
    pub fn validate(&self) -> CheckResult<()> {
        for (bank_code, method) in &self.institutes {
            validate_bank_code(bank_code).map_err(|e| CheckError::Config(e.to_string()))?;
            if MethodId::parse(method).is_err() {
                warn!(bank_code = %bank_code, method = %method, "institute uses an unknown method");
            }
        }
        Ok(())
    }
}
