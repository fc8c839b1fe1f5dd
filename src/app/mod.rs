pub mod config;
pub mod function_mock;
