pub mod call;
pub mod error;
pub mod pattern;
pub mod ports;
pub mod setup;
pub mod signature;
pub mod signature_validator;
pub mod verification;
