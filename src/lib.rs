//! fnmock: signature-aware function mocks with conditional stubs, call recording
//! and call verification.

pub mod adapters;
pub mod app;
pub mod domain;

pub use adapters::argument_validators::AnyArg;
pub use app::config::MockConfig;
pub use app::function_mock::FunctionMock;
pub use domain::call::{CallRecord, Kwargs, Value};
pub use domain::error::{BindingError, MockError, Result, SignatureError, VerificationFailure};
pub use domain::pattern::{Arg, Pattern};
pub use domain::ports::{ArgumentValidator, ReturnValueGenerator};
pub use domain::setup::Setup;
pub use domain::signature::{Parameter, ParameterKind, Signature};
pub use domain::verification::VerifiedCalls;
