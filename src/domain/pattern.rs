//! Argument patterns: the expected shape of a call, used to register stubs and to
//! filter recorded calls.

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::adapters::argument_validators::{AnyArg, Equals, MatchesRegex, Predicate};
use crate::domain::call::Value;
use crate::domain::ports::ArgumentValidator;

/// One expected argument: a literal (compared for equality) or a validator.
#[derive(Clone)]
pub enum Arg {
    Value(Value),
    Validator(Rc<dyn ArgumentValidator>),
}

impl Arg {
    /// Wildcard, matches anything.
    pub fn any() -> Self {
        Arg::Validator(Rc::new(AnyArg))
    }

    pub fn equals(value: impl Into<Value>) -> Self {
        Arg::Value(value.into())
    }

    /// Matches values for which `predicate` returns true.
    pub fn matching<F>(label: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + 'static,
    {
        Arg::Validator(Rc::new(Predicate::new(label, predicate)))
    }

    /// Matches string values against a regular expression.
    pub fn regex(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Arg::Validator(Rc::new(MatchesRegex::new(pattern)?)))
    }

    pub fn validator(validator: impl ArgumentValidator + 'static) -> Self {
        Arg::Validator(Rc::new(validator))
    }

    /// The validator this argument stands for.
    pub fn into_validator(self) -> Rc<dyn ArgumentValidator> {
        match self {
            Arg::Value(value) => Rc::new(Equals::new(value)),
            Arg::Validator(validator) => validator,
        }
    }
}

impl fmt::Debug for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Value(value) => write!(f, "{value}"),
            Arg::Validator(validator) => f.write_str(&validator.describe()),
        }
    }
}

impl From<Value> for Arg {
    fn from(value: Value) -> Self {
        Arg::Value(value)
    }
}

macro_rules! arg_from_literal {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Arg {
                fn from(value: $ty) -> Self {
                    Arg::Value(Value::from(value))
                }
            }
        )*
    };
}

arg_from_literal!(bool, i32, i64, u32, u64, f64, &str, String);

/// Positional and keyword expectations for one call shape.
#[derive(Clone, Debug, Default)]
pub struct Pattern {
    pub args: Vec<Arg>,
    pub kwargs: BTreeMap<String, Arg>,
}

impl Pattern {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arg(mut self, arg: impl Into<Arg>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn kwarg(mut self, name: impl Into<String>, arg: impl Into<Arg>) -> Self {
        self.kwargs.insert(name.into(), arg.into());
        self
    }

    /// Prepend a wildcard for the implicit receiver of an instance method.
    pub fn with_receiver_wildcard(mut self) -> Self {
        self.args.insert(0, Arg::any());
        self
    }
}
