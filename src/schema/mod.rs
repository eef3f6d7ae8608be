//! Embedded JSON schema and file-format validation

pub mod registry;
pub mod validator;

pub use registry::SchemaRegistry;
pub use validator::{SchemaError, Validator};
