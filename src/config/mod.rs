use serde::{Deserialize, Serialize};

const DEFAULT_PREFIX: &str = "@caixa";
const DEFAULT_PROFILE: &str = "default";

/// Storage-key configuration for one device profile.
///
/// Every persisted collection lives under `<prefix>:<profile>:<name>`, so two
/// profiles on the same device never share ledger or catalog data. Keys are
/// built here and injected into the services instead of being scattered as
/// string literals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageKeys {
    prefix: String,
    profile: String,
}

impl StorageKeys {
    pub fn for_profile(profile: impl Into<String>) -> Self {
        Self {
            prefix: DEFAULT_PREFIX.into(),
            profile: profile.into(),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn profile(&self) -> &str {
        &self.profile
    }

    /// Key holding the JSON-encoded transaction list.
    pub fn transactions(&self) -> String {
        self.scoped("transactions")
    }

    /// Key holding the string-encoded running balance.
    pub fn balance(&self) -> String {
        self.scoped("balance")
    }

    pub fn stock(&self) -> String {
        self.scoped("stock")
    }

    pub fn equipment(&self) -> String {
        self.scoped("equipment")
    }

    pub fn service_templates(&self) -> String {
        self.scoped("service_templates")
    }

    fn scoped(&self, name: &str) -> String {
        format!("{}:{}:{}", self.prefix, self.profile, name)
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self::for_profile(DEFAULT_PROFILE)
    }
}
