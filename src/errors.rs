use failure::{Context, Error as FailureError, Fail};
use hyper::StatusCode;
use validator::ValidationErrors;

/// Error kinds the API can answer with. Any layer may attach one of them to a
/// `failure::Error` with `.context(..)`; errors without a kind become 500.
#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "Not found")]
    NotFound,
    #[fail(display = "Parse error")]
    Parse,
    #[fail(display = "Missing required fields: {}", _0)]
    MissingFields(&'static str),
    #[fail(display = "Invalid numeric fields")]
    InvalidNumbers,
    #[fail(display = "Validation error: {}", _0)]
    Validate(ValidationErrors),
    #[fail(display = "Referenced category does not exist")]
    UnknownCategory,
    #[fail(display = "Server is refusing to fullfil the request")]
    Connection,
}

/// Mapping of an error to what crosses the HTTP boundary
pub trait Codeable {
    fn code(&self) -> StatusCode;
    fn message(&self) -> String;
}

impl Codeable for Error {
    fn code(&self) -> StatusCode {
        match *self {
            Error::NotFound => StatusCode::NotFound,
            Error::Parse | Error::MissingFields(_) | Error::InvalidNumbers | Error::Validate(_) | Error::UnknownCategory => {
                StatusCode::BadRequest
            }
            Error::Connection => StatusCode::InternalServerError,
        }
    }

    fn message(&self) -> String {
        match *self {
            Error::NotFound => "Not found.".to_string(),
            Error::Parse => "Request body must be a valid JSON object.".to_string(),
            Error::MissingFields(msg) => msg.to_string(),
            Error::InvalidNumbers => "Quantity, price and category id must be valid numbers.".to_string(),
            Error::Validate(ref errors) => match serde_json::to_value(errors) {
                Ok(serde_json::Value::Object(fields)) => {
                    format!("Invalid fields: {}.", fields.keys().cloned().collect::<Vec<_>>().join(", "))
                }
                _ => "Invalid fields.".to_string(),
            },
            Error::UnknownCategory => "The given category does not exist.".to_string(),
            Error::Connection => "Internal server error.".to_string(),
        }
    }
}

/// Finds the first API error kind in the cause chain
pub fn find_kind(err: &FailureError) -> Option<&Error> {
    err.iter_chain()
        .filter_map(|cause| {
            cause
                .downcast_ref::<Error>()
                .or_else(|| cause.downcast_ref::<Context<Error>>().map(|ctx| ctx.get_context()))
        })
        .next()
}

/// Status code and public message for any error, 500 when no kind is attached
pub fn describe(err: &FailureError) -> (StatusCode, String) {
    match find_kind(err) {
        Some(kind) => (kind.code(), kind.message()),
        None => (StatusCode::InternalServerError, "Internal server error.".to_string()),
    }
}
