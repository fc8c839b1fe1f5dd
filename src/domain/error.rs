//! Error types for the mock engine.
//!
//! Every failure is surfaced to the test: binding errors are caller-usage defects,
//! unresolved generators are incomplete stub registrations and verification failures
//! are failed expectations.

use std::path::PathBuf;

use thiserror::Error;

/// Supplied arguments cannot be bound to the declared parameter list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindingError {
    #[error("{function} takes {max} positional argument(s) but {given} were given")]
    TooManyPositional {
        function: String,
        max: usize,
        given: usize,
    },

    #[error("{function} got an unexpected keyword argument '{name}'")]
    UnexpectedKeyword { function: String, name: String },

    #[error("{function} got multiple values for argument '{name}'")]
    MultipleValues { function: String, name: String },

    #[error("{function} got positional-only argument '{name}' passed as keyword")]
    PositionalOnlyAsKeyword { function: String, name: String },

    #[error("{function} missing required argument '{name}'")]
    MissingArgument { function: String, name: String },
}

/// A parameter list or declaration string is malformed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignatureError {
    #[error("duplicate parameter '{0}'")]
    DuplicateParameter(String),

    #[error("required parameter '{0}' follows a parameter with a default")]
    RequiredAfterDefault(String),

    #[error("parameter '{0}' is out of order: positional-only, then positional-or-keyword, then keyword-only")]
    ParameterOrder(String),

    #[error("invalid declaration '{0}'")]
    InvalidDeclaration(String),

    #[error("invalid default for parameter '{name}': {raw}")]
    InvalidDefault { name: String, raw: String },

    #[error("unsupported parameter '{0}': variadic parameters are not modeled")]
    Unsupported(String),
}

/// An assertion on verified calls did not hold.
///
/// `message` carries the full diagnostic: the expectation, the matched calls and the
/// complete call history.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct VerificationFailure {
    pub expected: String,
    pub actual: usize,
    pub message: String,
}

/// The umbrella error returned by mock operations.
#[derive(Error, Debug)]
pub enum MockError {
    #[error("binding failed: {0}")]
    Binding(#[from] BindingError),

    #[error("setup #{setup_index} matched but no return value generator was attached")]
    UnresolvedGenerator { setup_index: usize },

    #[error("verification failed: {0}")]
    Verification(#[from] VerificationFailure),

    #[error("invalid signature: {0}")]
    Signature(#[from] SignatureError),

    #[error("failed to read mock config {}", .path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid mock config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MockError>;
