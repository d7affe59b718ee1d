use failure::Error as FailureError;
use futures::future::Future;
use hyper::server::Response;

/// Controller layer Future
pub type ControllerFuture = Box<dyn Future<Item = Response, Error = FailureError>>;
