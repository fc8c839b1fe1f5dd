use regex::Regex;

use crate::domain::call::Value;
use crate::domain::ports::ArgumentValidator;

/// Matches string values against a regular expression. Non-strings never match.
#[derive(Debug, Clone)]
pub struct MatchesRegex {
    regex: Regex,
}

impl MatchesRegex {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }
}

impl ArgumentValidator for MatchesRegex {
    fn matches(&self, actual: &Value) -> bool {
        actual.as_str().is_some_and(|s| self.regex.is_match(s))
    }

    fn describe(&self) -> String {
        format!("MatchesRegex({})", self.regex.as_str())
    }
}
