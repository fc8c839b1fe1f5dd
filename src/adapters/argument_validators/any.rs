use crate::domain::call::Value;
use crate::domain::ports::ArgumentValidator;

/// Wildcard validator: matches any value, and a parameter with no value at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyArg;

impl ArgumentValidator for AnyArg {
    fn matches(&self, _actual: &Value) -> bool {
        true
    }

    fn is_wildcard(&self) -> bool {
        true
    }

    fn describe(&self) -> String {
        "AnyArg".to_string()
    }
}
