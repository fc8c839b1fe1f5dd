use crate::domain::call::{Kwargs, Value};
use crate::domain::ports::ReturnValueGenerator;

/// Returns the same value for every matched call.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnConstant(pub Value);

impl ReturnConstant {
    pub fn new(value: impl Into<Value>) -> Self {
        Self(value.into())
    }
}

impl ReturnValueGenerator for ReturnConstant {
    fn compute(&self, _args: &[Value], _kwargs: &Kwargs) -> Value {
        self.0.clone()
    }
}
