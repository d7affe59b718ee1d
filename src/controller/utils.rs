use failure::Error as FailureError;
use failure::Fail;
use futures::{Future, Stream};
use hyper::header::{ContentLength, ContentType};
use hyper::server::Response;
use hyper::{Body, StatusCode};
use serde::de::DeserializeOwned;
use serde::ser::Serialize;

use crate::errors::Error;
use crate::models::ErrorMessage;

/// Reads the whole body and parses it as json
pub fn parse_body<T>(body: Body) -> Box<dyn Future<Item = T, Error = FailureError>>
where
    T: DeserializeOwned + 'static,
{
    Box::new(
        body.concat2()
            .map_err(|e| FailureError::from(e.context("Reading request body failed")))
            .and_then(|chunk| serde_json::from_slice::<T>(&chunk).map_err(|e| FailureError::from(e.context(Error::Parse)))),
    )
}

/// Json response with the given status
pub fn response_with_json<T: Serialize>(status: StatusCode, payload: &T) -> Result<Response, FailureError> {
    let body = serde_json::to_string(payload)?;
    Ok(response_with_body(status, body))
}

/// Json error response, `{"error": message}`
pub fn response_with_error(status: StatusCode, message: String) -> Response {
    let body = serde_json::to_string(&ErrorMessage { error: message }).unwrap_or_default();
    response_with_body(status, body)
}

fn response_with_body(status: StatusCode, body: String) -> Response {
    Response::new()
        .with_status(status)
        .with_header(ContentLength(body.len() as u64))
        .with_header(ContentType::json())
        .with_body(body)
}
