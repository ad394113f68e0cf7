use std::fmt;

use clap::ValueEnum;
use colored::Colorize;
use serde::{Deserialize, Serialize};

/// Priority levels for design requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Normal,
    High,
    Urgent,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::Normal => "Normal",
            Priority::High => "High",
            Priority::Urgent => "Urgent",
        }
    }

    /// Get the colored label for terminal output.
    pub fn colored(self) -> String {
        let label = self.label();
        match self {
            Priority::Normal => label.to_string(),
            Priority::High => label.yellow().bold().to_string(),
            Priority::Urgent => label.red().bold().to_string(),
        }
    }

    /// Single-character marker for compact kanban card lines.
    pub fn marker(self) -> String {
        match self {
            Priority::Normal => " ".to_string(),
            Priority::High => "●".yellow().to_string(),
            Priority::Urgent => "●".red().to_string(),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&Priority::Urgent).unwrap(),
            "\"urgent\""
        );
        let p: Priority = serde_json::from_str("\"normal\"").unwrap();
        assert_eq!(p, Priority::Normal);
    }
}
