use std::cell::RefCell;

use tracing::{debug, trace, warn};

use crate::adapters::declaration::parse_declaration;
use crate::app::config::MockConfig;
use crate::domain::call::{CallRecord, Kwargs, Value};
use crate::domain::error::{BindingError, Result};
use crate::domain::pattern::Pattern;
use crate::domain::setup::Setup;
use crate::domain::signature::Signature;
use crate::domain::signature_validator::SignatureValidator;
use crate::domain::verification::VerifiedCalls;

/// Stand-in for a callable with a known signature.
///
/// Registers stub rules, intercepts invocations, records every bindable call and answers
/// verification queries over the recorded history. Setups and calls only ever grow.
///
/// Single-threaded: the history lives in a `RefCell` so calls go through `&self`, which
/// keeps the mock `!Sync`.
pub struct FunctionMock {
    signature: Signature,
    config: MockConfig,
    is_instance_method: bool,
    setups: Vec<Setup>,
    calls: RefCell<Vec<CallRecord>>,
}

impl FunctionMock {
    pub fn new(signature: Signature) -> Self {
        Self::with_config(signature, MockConfig::default())
    }

    pub fn with_config(signature: Signature, config: MockConfig) -> Self {
        let is_instance_method = signature.has_receiver(&config.receiver_names);
        debug!(
            signature = %signature,
            is_instance_method,
            "Created function mock"
        );
        Self {
            signature,
            config,
            is_instance_method,
            setups: Vec::new(),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Mock the callable described by a declaration such as `add(a, b=10)`.
    pub fn from_declaration(declaration: &str) -> Result<Self> {
        Ok(Self::new(parse_declaration(declaration)?))
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    pub fn config(&self) -> &MockConfig {
        &self.config
    }

    /// Fixed at construction from the first parameter's name.
    pub fn is_instance_method(&self) -> bool {
        self.is_instance_method
    }

    pub fn setups(&self) -> &[Setup] {
        &self.setups
    }

    pub fn setup_count(&self) -> usize {
        self.setups.len()
    }

    /// Snapshot of the call history, in invocation order.
    pub fn calls(&self) -> Vec<CallRecord> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    fn with_receiver(&self, args: &[Value]) -> Vec<Value> {
        let mut full = Vec::with_capacity(args.len() + 1);
        if self.is_instance_method {
            full.push(self.config.self_placeholder.clone());
        }
        full.extend_from_slice(args);
        full
    }

    fn validator_for(&self, pattern: Pattern) -> std::result::Result<SignatureValidator, BindingError> {
        let pattern = if self.is_instance_method {
            pattern.with_receiver_wildcard()
        } else {
            pattern
        };
        SignatureValidator::from_pattern(&self.signature, pattern)
    }

    /// Could the mocked callable be called with these arguments? The receiver is implied.
    pub fn arguments_valid(
        &self,
        args: &[Value],
        kwargs: &Kwargs,
    ) -> std::result::Result<(), BindingError> {
        self.signature.bind(&self.with_receiver(args), kwargs)
    }

    /// Normalize a call: every parameter keyed by name, omitted ones set to their default.
    ///
    /// Takes arguments the way [FunctionMock::call] does, so the receiver is implied.
    pub fn fill_up_arg_list(&self, args: &[Value], kwargs: &Kwargs) -> Kwargs {
        self.signature.fill_up_arg_list(&self.with_receiver(args), kwargs)
    }

    /// Register a stub rule. The newest matching rule answers a call.
    pub fn setup(&mut self, pattern: Pattern) -> Result<&mut Setup> {
        let validator = self.validator_for(pattern)?;
        let index = self.setups.len();
        debug!(index, pattern = %validator, "Registered setup");
        self.setups.push(Setup::new(index, validator));
        Ok(&mut self.setups[index])
    }

    /// Invoke the mock.
    ///
    /// Fails with a binding error (nothing recorded) if the arguments do not fit the
    /// signature. Otherwise the call is recorded and answered by the most recently
    /// registered matching setup; `Ok(None)` when no setup matches.
    pub fn call(&self, args: &[Value], kwargs: &Kwargs) -> Result<Option<Value>> {
        let args = self.with_receiver(args);
        self.signature.bind(&args, kwargs)?;

        let kwargs = self.signature.fill_up_arg_list(&args, kwargs);
        debug!(
            function = self.signature.display_name(),
            kwargs = ?kwargs,
            "Intercepted call"
        );
        self.calls
            .borrow_mut()
            .push(CallRecord::new(args.clone(), kwargs.clone()));

        let Some(setup) = self
            .setups
            .iter()
            .rev()
            .find(|setup| setup.is_valid(&args, &kwargs))
        else {
            debug!(function = self.signature.display_name(), "No setup matched");
            return Ok(None);
        };

        debug!(setup = setup.index(), "Setup matched");
        if !setup.has_generator() {
            warn!(setup = setup.index(), "Matched setup has no return value generator");
        }
        setup.get_return_value(&args, &kwargs).map(Some)
    }

    /// [FunctionMock::call] without keyword arguments.
    pub fn call_positional(&self, args: &[Value]) -> Result<Option<Value>> {
        self.call(args, &Kwargs::new())
    }

    /// The mock as a plain closure, for handing to code under test.
    pub fn as_fn(&self) -> impl Fn(&[Value], &Kwargs) -> Result<Option<Value>> + '_ {
        move |args, kwargs| self.call(args, kwargs)
    }

    /// Recorded calls matching `pattern`, for count assertions.
    pub fn verify(&self, pattern: Pattern) -> Result<VerifiedCalls> {
        let validator = self.validator_for(pattern)?;
        let all_calls = self.calls();
        let verified_calls: Vec<CallRecord> = all_calls
            .iter()
            .filter(|call| {
                let matched = validator.is_valid(&call.args, &call.kwargs);
                trace!(call = %call, matched, "Verification filter");
                matched
            })
            .cloned()
            .collect();
        debug!(
            pattern = %validator,
            matched = verified_calls.len(),
            total = all_calls.len(),
            "Verified calls"
        );
        Ok(VerifiedCalls::new(verified_calls, all_calls))
    }
}
