use std::fmt;

use crate::adapters::return_values::ReturnConstant;
use crate::domain::call::{Kwargs, Value};
use crate::domain::error::{MockError, Result};
use crate::domain::ports::ReturnValueGenerator;
use crate::domain::signature_validator::SignatureValidator;

/// One stub rule: a call pattern and the generator answering calls that match it.
pub struct Setup {
    index: usize,
    signature_validator: SignatureValidator,
    return_value_generator: Option<Box<dyn ReturnValueGenerator>>,
}

impl Setup {
    pub fn new(index: usize, signature_validator: SignatureValidator) -> Self {
        Self {
            index,
            signature_validator,
            return_value_generator: None,
        }
    }

    /// Registration position within the owning mock.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_valid(&self, args: &[Value], kwargs: &Kwargs) -> bool {
        self.signature_validator.is_valid(args, kwargs)
    }

    /// Attach the generator called when this setup matches. Calling again replaces it.
    pub fn returns(&mut self, generator: impl ReturnValueGenerator + 'static) -> &mut Self {
        self.return_value_generator = Some(Box::new(generator));
        self
    }

    /// Closure form of [Setup::returns]; lets the closure's argument types be inferred.
    pub fn returns_with<F>(&mut self, generator: F) -> &mut Self
    where
        F: Fn(&[Value], &Kwargs) -> Value + 'static,
    {
        self.returns(generator)
    }

    pub fn returns_value(&mut self, value: impl Into<Value>) -> &mut Self {
        self.returns(ReturnConstant::new(value))
    }

    pub fn has_generator(&self) -> bool {
        self.return_value_generator.is_some()
    }

    pub fn get_return_value(&self, args: &[Value], kwargs: &Kwargs) -> Result<Value> {
        let generator =
            self.return_value_generator
                .as_ref()
                .ok_or(MockError::UnresolvedGenerator {
                    setup_index: self.index,
                })?;
        Ok(generator.compute(args, kwargs))
    }
}

impl fmt::Debug for Setup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Setup")
            .field("index", &self.index)
            .field("pattern", &self.signature_validator)
            .field("has_generator", &self.has_generator())
            .finish()
    }
}
