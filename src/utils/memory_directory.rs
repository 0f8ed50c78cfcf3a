//! In-memory institute directory for testing and small deployments

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::traits::*;
use crate::types::*;

/// In-memory institute directory
#[derive(Debug, Clone)]
pub struct MemoryDirectory {
    institutes: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self {
            institutes: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a directory from sort code and method pairs
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let institutes = entries
            .into_iter()
            .map(|(code, method)| (code.into(), method.into()))
            .collect();
        Self {
            institutes: Arc::new(RwLock::new(institutes)),
        }
    }

    /// Number of institutes in the directory
    pub fn len(&self) -> usize {
        self.institutes.read().map(|map| map.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all data (useful for testing)
    pub fn clear(&self) -> CheckResult<()> {
        self.institutes.write().map_err(poisoned)?.clear();
        Ok(())
    }
}

impl Default for MemoryDirectory {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned<T>(_: T) -> CheckError {
    CheckError::Directory("institute directory lock poisoned".to_string())
}

#[async_trait]
impl InstituteDirectory for MemoryDirectory {
    async fn method_for_institute(&self, bank_code: &str) -> CheckResult<Option<String>> {
        Ok(self
            .institutes
            .read()
            .map_err(poisoned)?
            .get(bank_code)
            .cloned())
    }

    async fn assign_method(&mut self, bank_code: &str, method: &str) -> CheckResult<()> {
        self.institutes
            .write()
            .map_err(poisoned)?
            .insert(bank_code.to_string(), method.to_string());
        Ok(())
    }

    async fn remove_institute(&mut self, bank_code: &str) -> CheckResult<()> {
        match self.institutes.write().map_err(poisoned)?.remove(bank_code) {
            Some(_) => Ok(()),
            None => Err(CheckError::InstituteNotFound(bank_code.to_string())),
        }
    }

    async fn list_institutes(&self) -> CheckResult<Vec<(String, String)>> {
        let institutes = self.institutes.read().map_err(poisoned)?;
        let mut listed: Vec<(String, String)> = institutes
            .iter()
            .map(|(code, method)| (code.clone(), method.clone()))
            .collect();
        listed.sort();
        Ok(listed)
    }
}
