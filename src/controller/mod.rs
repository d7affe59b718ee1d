//! `Controller` is a top layer that handles all http-related
//! stuff like reading bodies, parsing params, forming a response.
//! Basically it provides inputs to `Service` layer and converts outputs
//! of `Service` layer to http responses

pub mod application;
pub mod context;
pub mod routes;
pub mod types;
pub mod utils;

use std::sync::Arc;

use diesel::connection::AnsiTransactionManager;
use diesel::pg::Pg;
use diesel::Connection;
use failure::Error as FailureError;
use futures::future;
use futures::{Future, IntoFuture};
use hyper::server::{Request, Response};
use hyper::{Method, StatusCode};
use r2d2::ManageConnection;
use validator::Validate;

use self::context::StaticContext;
use self::routes::{create_route_parser, Route, RouteParser};
use self::types::ControllerFuture;
use self::utils::{parse_body, response_with_json};
use crate::errors::Error;
use crate::models::{CategoryPayload, Created, ProductPayload};
use crate::repos::ReposFactory;
use crate::services::{CategoriesService, ProductsService, Service};

pub trait Controller {
    /// Handle a request and get future response
    fn call(&self, req: Request) -> ControllerFuture;
}

/// Controller handles route parsing and calling `Service` layer
pub struct ControllerImpl<M: ManageConnection, F> {
    pub static_context: StaticContext<M, F>,
    pub route_parser: Arc<RouteParser<Route>>,
}

impl<M: ManageConnection, F: Clone> ControllerImpl<M, F> {
    /// Create a new controller based on services
    pub fn new(static_context: StaticContext<M, F>) -> Self {
        let route_parser = Arc::new(create_route_parser());
        Self {
            static_context,
            route_parser,
        }
    }
}

impl<
        T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static,
        M: ManageConnection<Connection = T>,
        F: ReposFactory<T>,
    > Controller for ControllerImpl<M, F>
{
    fn call(&self, req: Request) -> ControllerFuture {
        let service = Service::new(self.static_context.clone());
        let method = req.method().clone();
        let route = self.route_parser.test(req.path());

        match (method, route) {
            // GET /healthcheck
            (Method::Get, Some(Route::Healthcheck)) => Box::new(response_with_json(StatusCode::Ok, &"Ok").into_future()),

            // GET /api/categorias
            (Method::Get, Some(Route::Categories)) => Box::new(
                service
                    .list_categories()
                    .and_then(|categories| response_with_json(StatusCode::Ok, &categories)),
            ),

            // POST /api/categorias
            (Method::Post, Some(Route::Categories)) => Box::new(
                parse_body::<CategoryPayload>(req.body())
                    .and_then(|payload| payload.into_new_category())
                    .and_then(|new_category| {
                        new_category
                            .validate()
                            .map(|_| new_category)
                            .map_err(|e| FailureError::from(format_err!("Validation of NewCategory failed!").context(Error::Validate(e))))
                    })
                    .and_then(move |new_category| service.create_category(new_category))
                    .and_then(|category| {
                        response_with_json(StatusCode::Created, &Created::new("Category created successfully.", category.id))
                    }),
            ),

            // GET /api/produtos
            (Method::Get, Some(Route::Products)) => Box::new(
                service
                    .list_products()
                    .and_then(|products| response_with_json(StatusCode::Ok, &products)),
            ),

            // POST /api/produtos
            (Method::Post, Some(Route::Products)) => Box::new(
                parse_body::<ProductPayload>(req.body())
                    .and_then(|payload| payload.into_new_product())
                    .and_then(|new_product| {
                        new_product
                            .validate()
                            .map(|_| new_product)
                            .map_err(|e| FailureError::from(format_err!("Validation of NewProduct failed!").context(Error::Validate(e))))
                    })
                    .and_then(move |new_product| service.create_product(new_product))
                    .and_then(|product| {
                        response_with_json(StatusCode::Created, &Created::new("Product created successfully.", product.id))
                    }),
            ),

            // Fallback
            _ => Box::new(future::err::<Response, FailureError>(Error::NotFound.into())),
        }
    }
}
