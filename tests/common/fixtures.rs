//! Signature and mock fixtures for integration tests.
#![allow(dead_code)]

use std::sync::Once;

use fnmock::{FunctionMock, Kwargs, Parameter, Signature, Value};
use tracing_subscriber::EnvFilter;

/// Install a test-writer subscriber once; `RUST_LOG=fnmock=debug` shows engine decisions.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// `add(a, b=10)`
pub fn add_signature() -> Signature {
    Signature::new(vec![
        Parameter::required("a"),
        Parameter::with_default("b", 10),
    ])
    .expect("add signature")
    .named("add")
}

pub fn add_mock() -> FunctionMock {
    init_tracing();
    FunctionMock::new(add_signature())
}

/// `method(self, x)`
pub fn method_mock() -> FunctionMock {
    init_tracing();
    FunctionMock::from_declaration("method(self, x)").expect("method declaration")
}

/// `connect(host, port=5432, *, timeout=30, tls=True)`
pub fn connect_mock() -> FunctionMock {
    init_tracing();
    FunctionMock::from_declaration("connect(host, port=5432, *, timeout=30, tls=True)")
        .expect("connect declaration")
}

pub fn kwargs(pairs: &[(&str, Value)]) -> Kwargs {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect()
}
