use std::fmt;

use crate::domain::call::Value;
use crate::domain::ports::ArgumentValidator;

/// Delegates to a caller-supplied closure. The label shows up in diagnostics.
pub struct Predicate {
    label: String,
    check: Box<dyn Fn(&Value) -> bool>,
}

impl Predicate {
    pub fn new<F>(label: impl Into<String>, check: F) -> Self
    where
        F: Fn(&Value) -> bool + 'static,
    {
        Self {
            label: label.into(),
            check: Box::new(check),
        }
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

impl ArgumentValidator for Predicate {
    fn matches(&self, actual: &Value) -> bool {
        (self.check)(actual)
    }

    fn describe(&self) -> String {
        format!("Predicate({})", self.label)
    }
}
