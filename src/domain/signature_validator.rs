//! Whole-call matching: one argument validator per declared parameter.

use std::fmt;
use std::rc::Rc;

use crate::adapters::argument_validators::AnyArg;
use crate::domain::call::{Kwargs, Value};
use crate::domain::error::BindingError;
use crate::domain::pattern::{Arg, Pattern};
use crate::domain::ports::ArgumentValidator;
use crate::domain::signature::Signature;

/// A call matches iff every parameter's value satisfies its validator.
pub struct SignatureValidator {
    signature: Signature,
    validators: Vec<(String, Rc<dyn ArgumentValidator>)>,
}

impl SignatureValidator {
    /// Build a validator from a raw pattern.
    ///
    /// The pattern is normalized exactly like a call: positional entries bind by position and
    /// omitted parameters with a default expect that default. Required parameters the pattern
    /// leaves out are wildcards.
    pub fn from_pattern(signature: &Signature, pattern: Pattern) -> Result<Self, BindingError> {
        signature.bind_partial(pattern.args.len(), pattern.kwargs.keys())?;
        let mut normalized =
            signature.normalize(&pattern.args, &pattern.kwargs, |d| Arg::Value(d.clone()));

        let validators = signature
            .parameter_names()
            .map(|name| {
                let validator = match normalized.remove(name) {
                    Some(arg) => arg.into_validator(),
                    None => Rc::new(AnyArg) as Rc<dyn ArgumentValidator>,
                };
                (name.to_string(), validator)
            })
            .collect();

        Ok(Self {
            signature: signature.clone(),
            validators,
        })
    }

    /// Does the call, after normalization, satisfy every parameter?
    pub fn is_valid(&self, args: &[Value], kwargs: &Kwargs) -> bool {
        let normalized = self.signature.fill_up_arg_list(args, kwargs);
        self.validators
            .iter()
            .all(|(name, validator)| match normalized.get(name) {
                Some(actual) => validator.matches(actual),
                None => validator.is_wildcard(),
            })
    }

    /// True if every parameter accepts anything.
    pub fn is_wildcard(&self) -> bool {
        self.validators.iter().all(|(_, v)| v.is_wildcard())
    }
}

impl fmt::Debug for SignatureValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl fmt::Display for SignatureValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .validators
            .iter()
            .map(|(name, v)| format!("{name}={}", v.describe()))
            .collect();
        write!(f, "{}({})", self.signature.display_name(), parts.join(", "))
    }
}
