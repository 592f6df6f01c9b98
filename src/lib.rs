//! Extract code analysis issues from MSBuild XML file logger output.
//!
//! Each `warning` element of the log becomes an [`Issue`] with a file path
//! relative to the repository root. Warnings pointing outside the repository
//! are dropped with a diagnostic; warnings without a line or rule code are
//! dropped silently.
//!
//! ```
//! use buildlog_issues::{extract_issues, NoRuleUrls, TracingDiagnostics};
//!
//! let log = r#"<build><warning file="src/a.cs" line="10" code="CA1000">M</warning></build>"#;
//! let issues = extract_issues(log, "/repo", &NoRuleUrls, &TracingDiagnostics).unwrap();
//! assert_eq!(issues[0].file_path, "src/a.cs");
//! ```

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod output;
pub mod parser;
pub mod paths;
pub mod rules;

pub use diagnostics::{Diagnostic, DiagnosticSink, TracingDiagnostics};
pub use error::{ConfigError, ExtractError, ParseError};
pub use parser::{extract_issues, Issue};
pub use rules::{NoRuleUrls, PatternRuleUrlResolver, RuleUrlResolver};
