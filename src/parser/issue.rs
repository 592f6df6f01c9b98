use serde::{Deserialize, Serialize};

/// Priority assigned to every extracted issue
pub const UNDEFINED_PRIORITY: u32 = 0;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Issue {
    /// Path relative to the repository root, empty when the log names no file
    #[serde(default)]
    pub file_path: String,

    #[serde(default)]
    pub line: Option<u32>, // None means no specific line

    pub message: String,

    #[serde(default)]
    pub priority: u32,

    pub rule: String,

    #[serde(default)]
    pub rule_url: Option<String>,
}

impl Issue {
    /// `file:line` style location, omitting whatever is unknown
    pub fn location(&self) -> Option<String> {
        match (self.file_path.as_str(), self.line) {
            ("", _) => None,
            (file, Some(line)) => Some(format!("{}:{}", file, line)),
            (file, None) => Some(file.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(file_path: &str, line: Option<u32>) -> Issue {
        Issue {
            file_path: file_path.to_string(),
            line,
            message: "Message".to_string(),
            priority: UNDEFINED_PRIORITY,
            rule: "CA1000".to_string(),
            rule_url: None,
        }
    }

    #[test]
    fn test_location() {
        assert_eq!(issue("src/a.cs", Some(10)).location().as_deref(), Some("src/a.cs:10"));
        assert_eq!(issue("src/a.cs", None).location().as_deref(), Some("src/a.cs"));
        assert_eq!(issue("", Some(10)).location(), None);
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(issue("src/a.cs", None)).unwrap();
        assert_eq!(json["file_path"], "src/a.cs");
        assert!(json["line"].is_null());
        assert_eq!(json["priority"], 0);
        assert!(json["rule_url"].is_null());
    }
}
