use crate::config::RuleUrlPattern;
use crate::error::ConfigError;
use regex::Regex;

/// Maps a rule identifier to a documentation URL
pub trait RuleUrlResolver {
    fn resolve(&self, rule: &str) -> Option<String>;
}

impl<F> RuleUrlResolver for F
where
    F: Fn(&str) -> Option<String>,
{
    fn resolve(&self, rule: &str) -> Option<String> {
        self(rule)
    }
}

/// Resolver that never knows a URL
#[derive(Debug, Default, Clone, Copy)]
pub struct NoRuleUrls;

impl RuleUrlResolver for NoRuleUrls {
    fn resolve(&self, _rule: &str) -> Option<String> {
        None
    }
}

/// Resolves URLs from an ordered table of regex patterns and URL templates
///
/// The first pattern matching the rule identifier wins. Templates may use
/// `{rule}` and `{rule_lower}` placeholders.
#[derive(Debug, Clone)]
pub struct PatternRuleUrlResolver {
    patterns: Vec<(Regex, String)>,
}

impl PatternRuleUrlResolver {
    pub fn new(patterns: &[RuleUrlPattern]) -> Result<Self, ConfigError> {
        let patterns = patterns
            .iter()
            .map(|p| {
                Regex::new(&p.pattern)
                    .map(|re| (re, p.url.clone()))
                    .map_err(|e| ConfigError::InvalidRulePattern {
                        pattern: p.pattern.clone(),
                        source: e,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { patterns })
    }
}

impl RuleUrlResolver for PatternRuleUrlResolver {
    fn resolve(&self, rule: &str) -> Option<String> {
        let (_, template) = self.patterns.iter().find(|(re, _)| re.is_match(rule))?;
        Some(
            template
                .replace("{rule}", rule)
                .replace("{rule_lower}", &rule.to_lowercase()),
        )
    }
}
