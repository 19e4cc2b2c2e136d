use thiserror::Error;
use rocket::http::Status;
use rocket::response::Responder;
use rocket::Request;
use rocket::Response;
use rocket::http::ContentType;
use std::io::Cursor;
use serde_json::json;
use serde::Serialize;
use rocket_okapi::JsonSchema;

#[derive(Error, Debug, Serialize, JsonSchema)]
pub enum AppError {
    /// Malformed or missing caller input.
    #[error("{0}")]
    InvalidArgument(String),

    /// Collected request-level validation messages, reported together.
    #[error("Invalid request.")]
    InvalidArguments(Vec<String>),

    /// A business rule was violated.
    #[error("{0}")]
    ValidationError(String),

    #[error("{0}")]
    NotFound(String),

    /// The passenger store failed to confirm a creation.
    #[error("{0}")]
    RegistrationFailed(String),
}

// Define a type alias for the result type
pub type AppResult<T> = Result<T, AppError>;

// Implement the Responder trait for AppError
// Format all errors to a Http Response at route level
#[rocket::async_trait]
impl<'r> Responder<'r, 'static> for AppError {
    fn respond_to(self, _: &'r Request<'_>) -> rocket::response::Result<'static> {
        let status = match self {
            AppError::InvalidArgument(_) => Status::BadRequest,
            AppError::InvalidArguments(_) => Status::BadRequest,
            AppError::ValidationError(_) => Status::BadRequest,
            AppError::NotFound(_) => Status::NotFound,
            AppError::RegistrationFailed(_) => Status::InternalServerError,
        };

        let json = match &self {
            AppError::InvalidArguments(messages) => json!({ "errors": messages }),
            _ => json!({ "error": self.to_string() }),
        };

        Response::build()
            .status(status)
            .header(ContentType::JSON)
            .sized_body(None, Cursor::new(json.to_string()))
            .ok()
    }
}
