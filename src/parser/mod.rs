mod document;
mod issue;
mod resolve;

pub use document::{Element, LogDocument};
pub use issue::{Issue, UNDEFINED_PRIORITY};
pub use resolve::Resolution;

use crate::diagnostics::DiagnosticSink;
use crate::error::ExtractError;
use crate::paths;
use crate::rules::RuleUrlResolver;

const WARNING_ELEMENT: &str = "warning";

/// Extract issues from an MSBuild XML file logger log
///
/// Every `warning` element, at any depth, becomes an issue unless one of its
/// fields is rejected. Issues are returned in document order. Malformed XML
/// fails the whole call.
pub fn extract_issues(
    log_content: &str,
    repository_root: &str,
    rule_urls: &dyn RuleUrlResolver,
    diagnostics: &dyn DiagnosticSink,
) -> Result<Vec<Issue>, ExtractError> {
    if repository_root.trim().is_empty() {
        return Err(ExtractError::InvalidArgument(
            "repository root must not be empty".to_string(),
        ));
    }
    if !paths::is_absolute(repository_root) {
        return Err(ExtractError::InvalidArgument(format!(
            "repository root '{}' is not an absolute path",
            repository_root
        )));
    }

    let document = LogDocument::parse(log_content)?;

    let issues: Vec<Issue> = document
        .elements_named(WARNING_ELEMENT)
        .filter_map(|warning| to_issue(warning, repository_root, rule_urls, diagnostics))
        .collect();

    tracing::debug!("Extracted {} issues", issues.len());
    Ok(issues)
}

fn to_issue(
    warning: Element<'_>,
    repository_root: &str,
    rule_urls: &dyn RuleUrlResolver,
    diagnostics: &dyn DiagnosticSink,
) -> Option<Issue> {
    let file_path = resolve::resolve_file(warning, repository_root, diagnostics).accepted()?;
    let line = resolve::resolve_line(warning).accepted()?;
    let rule = resolve::resolve_rule(warning).accepted()?;

    Some(Issue {
        file_path,
        line,
        message: warning.text(),
        priority: UNDEFINED_PRIORITY,
        rule_url: rule_urls.resolve(&rule),
        rule,
    })
}
