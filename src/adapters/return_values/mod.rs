//! Return value generator adapters

mod constant;

pub use constant::ReturnConstant;
