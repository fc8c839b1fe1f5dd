//! Argument validator adapters
//!
//! Each validator answers "does this actual value match what the pattern expects?" for a
//! single parameter.

mod any;
mod equals;
mod predicate;
mod regex_match;

pub use any::AnyArg;
pub use equals::Equals;
pub use predicate::Predicate;
pub use regex_match::MatchesRegex;
