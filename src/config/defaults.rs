use super::RuleUrlPattern;

pub fn default_version() -> u32 {
    1
}

pub fn default_config_path() -> &'static str {
    "buildlog-issues.yaml"
}

fn pattern(pattern: &str, url: &str) -> RuleUrlPattern {
    RuleUrlPattern {
        pattern: pattern.to_string(),
        url: url.to_string(),
    }
}

pub fn default_rule_urls() -> Vec<RuleUrlPattern> {
    vec![
        pattern(
            r"^CA\d{4}$",
            "https://learn.microsoft.com/dotnet/fundamentals/code-analysis/quality-rules/{rule_lower}",
        ),
        pattern(
            r"^IDE\d{4}$",
            "https://learn.microsoft.com/dotnet/fundamentals/code-analysis/style-rules/{rule_lower}",
        ),
        pattern(
            r"^SA\d{4}$",
            "https://github.com/DotNetAnalyzers/StyleCopAnalyzers/blob/master/documentation/{rule}.md",
        ),
        pattern(
            r"^RCS\d{4}$",
            "https://josefpihrt.github.io/docs/roslynator/analyzers/{rule}",
        ),
        pattern(
            r"^CS\d{4}$",
            "https://learn.microsoft.com/dotnet/csharp/misc/{rule_lower}",
        ),
    ]
}
