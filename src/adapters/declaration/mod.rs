//! Signature declaration adapters
//!
//! Rust callables carry no runtime parameter metadata, so mocks describe their target
//! with a declaration string in the usual `name(a, b=1, *, c)` notation.

mod parser;

pub use parser::parse_declaration;
