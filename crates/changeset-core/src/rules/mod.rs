//! Contract checks for edit scripts.

pub mod validation;

pub use validation::validate_script;
