//! Compiler options shared by every compilation unit.

use serde::{Deserialize, Serialize};

/// Options controlling the text the emitter produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompilerOptions {
    /// JavaScript object exposing the runtime helpers (`Opal.range`, ...).
    pub runtime_name: String,
    /// Prefix of the local alias each requested helper is bound to.
    pub helper_prefix: String,
    /// Escape every non-ASCII code point in string literals as `\uXXXX`.
    pub ascii_only: bool,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self {
            runtime_name: "Opal".to_string(),
            helper_prefix: "$".to_string(),
            ascii_only: false,
        }
    }
}

impl CompilerOptions {
    /// Parse options from a JSON object; missing keys keep their defaults.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Local name a helper is referenced by in generated code.
    #[must_use]
    pub fn helper_alias(&self, name: &str) -> String {
        format!("{}{}", self.helper_prefix, name)
    }
}
