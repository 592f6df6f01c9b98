use crate::error::OutputError;
use crate::parser::Issue;
use clap::ValueEnum;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

/// Render issues in the requested format
pub fn render(issues: &[Issue], format: OutputFormat) -> Result<String, OutputError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(issues)?),
        OutputFormat::Text => Ok(render_text(issues)),
    }
}

/// Write rendered issues to a file
pub fn write_report(path: &Path, issues: &[Issue], format: OutputFormat) -> Result<(), OutputError> {
    let content = render(issues, format)?;
    fs::write(path, content).map_err(OutputError::WriteReport)
}

fn render_text(issues: &[Issue]) -> String {
    let mut content = String::new();

    for issue in issues {
        if let Some(location) = issue.location() {
            content.push_str(&format!("{}: ", location));
        }
        content.push_str(&format!("{}: {}\n", issue.rule, issue.message.trim()));
        if let Some(url) = &issue.rule_url {
            content.push_str(&format!("  see {}\n", url));
        }
    }

    content
}
