use crate::cli::ExtractArgs;
use anyhow::Context;
use buildlog_issues::config::Settings;
use buildlog_issues::diagnostics::TracingDiagnostics;
use buildlog_issues::output;
use buildlog_issues::parser::extract_issues;
use buildlog_issues::rules::PatternRuleUrlResolver;
use tracing::{error, info};

pub fn execute(args: ExtractArgs) -> anyhow::Result<()> {
    // A missing settings file is fine when the root comes from the command line
    let mut settings = if args.config.exists() || args.repository_root.is_none() {
        info!("Loading settings from {:?}", args.config);
        Settings::load(&args.config)?
    } else {
        Settings::default()
    };

    if let Some(root) = args.repository_root {
        settings.repository_root = Some(root);
    }

    let repository_root = settings.validate()?;
    let resolver = PatternRuleUrlResolver::new(&settings.rule_urls)?;

    let log_content = std::fs::read_to_string(&args.log)
        .with_context(|| format!("Failed to read log file {:?}", args.log))?;

    let issues = extract_issues(&log_content, repository_root, &resolver, &TracingDiagnostics)
        .with_context(|| format!("Failed to extract issues from {:?}", args.log))?;

    info!("Extracted {} issues from {:?}", issues.len(), args.log);

    match &args.output {
        Some(path) => {
            output::write_report(path, &issues, args.format)?;
            info!("Issues written to {:?}", path);
        }
        None => print!("{}", output::render(&issues, args.format)?),
    }

    if args.fail_on_issues && !issues.is_empty() {
        error!("Exiting with error: {} issues", issues.len());
        std::process::exit(1);
    }

    Ok(())
}
