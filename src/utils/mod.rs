pub mod identifier_generator;
pub mod url_validator;
