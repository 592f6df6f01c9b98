use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::defaults::*;

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct Settings {
    /// Settings format version, only `1` is understood
    #[serde(default = "default_version")]
    pub version: u32,

    /// Absolute path every reported file must live under
    #[serde(default)]
    pub repository_root: Option<String>,

    /// Ordered rule identifier patterns used to resolve documentation URLs
    #[serde(default = "default_rule_urls")]
    pub rule_urls: Vec<RuleUrlPattern>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct RuleUrlPattern {
    /// Regular expression matched against the rule identifier
    pub pattern: String,

    /// URL template, `{rule}` and `{rule_lower}` are substituted
    pub url: String,
}
