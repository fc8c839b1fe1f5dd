//! Test doubles for the engine's own ports.
#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use fnmock::{ArgumentValidator, Kwargs, ReturnValueGenerator, Value};

/// Generator that counts its invocations and returns the running count.
#[derive(Clone, Default)]
pub struct CountingGenerator {
    pub count: Rc<Cell<usize>>,
}

impl CountingGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn invocations(&self) -> usize {
        self.count.get()
    }
}

impl ReturnValueGenerator for CountingGenerator {
    fn compute(&self, _args: &[Value], _kwargs: &Kwargs) -> Value {
        self.count.set(self.count.get() + 1);
        Value::from(self.count.get())
    }
}

/// Validator that accepts even integers and counts how often it was consulted.
#[derive(Clone, Default)]
pub struct EvenValidator {
    pub checks: Rc<Cell<usize>>,
}

impl ArgumentValidator for EvenValidator {
    fn matches(&self, actual: &Value) -> bool {
        self.checks.set(self.checks.get() + 1);
        actual.as_i64().is_some_and(|n| n % 2 == 0)
    }

    fn describe(&self) -> String {
        "Even".to_string()
    }
}
