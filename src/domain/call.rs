//! Dynamic call representation shared by stubs, recording and verification.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Dynamic argument / return value.
pub use serde_json::Value;

/// Keyword arguments, keyed by parameter name.
pub type Kwargs = BTreeMap<String, Value>;

/// One recorded invocation in normalized form.
///
/// `args` are the positional values as supplied (receiver placeholder included for
/// instance methods). `kwargs` maps every declared parameter to its supplied or
/// default value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallRecord {
    pub args: Vec<Value>,
    pub kwargs: Kwargs,
}

impl CallRecord {
    pub fn new(args: Vec<Value>, kwargs: Kwargs) -> Self {
        Self { args, kwargs }
    }

    /// Normalized value of a parameter.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.kwargs.get(name)
    }
}

impl fmt::Display for CallRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let args: Vec<String> = self.args.iter().map(Value::to_string).collect();
        let kwargs: Vec<String> = self
            .kwargs
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect();
        write!(f, "(({}), {{{}}})", args.join(", "), kwargs.join(", "))
    }
}
