pub mod code_generator;
pub mod http;
pub mod validation;
