pub mod argument_validators;
pub mod declaration;
pub mod return_values;
