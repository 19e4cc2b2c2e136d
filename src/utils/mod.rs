pub mod error;
pub mod key_generator;
pub mod swagger_doc;
