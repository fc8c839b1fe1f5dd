use crate::domain::call::{Kwargs, Value};

/// Per-parameter matcher port (implemented by adapters)
pub trait ArgumentValidator {
    /// Does the actual value satisfy this expectation?
    fn matches(&self, actual: &Value) -> bool;

    /// Wildcards also match a parameter that has no value at all.
    fn is_wildcard(&self) -> bool {
        false
    }

    /// Short human-readable form used in diagnostics
    fn describe(&self) -> String;
}

/// Return value port: computes the stubbed result from the matched call.
///
/// Receives the same positional and normalized keyword arguments the mock was called with.
pub trait ReturnValueGenerator {
    fn compute(&self, args: &[Value], kwargs: &Kwargs) -> Value;
}

impl<F> ReturnValueGenerator for F
where
    F: Fn(&[Value], &Kwargs) -> Value,
{
    fn compute(&self, args: &[Value], kwargs: &Kwargs) -> Value {
        self(args, kwargs)
    }
}
