//! hyper `Service` that drives a `Controller`: answers CORS preflights,
//! turns controller errors into json error responses and logs them.

use futures::{future, Future};
use hyper;
use hyper::header::Raw;
use hyper::server::{Request, Response, Service};
use hyper::{Method, StatusCode};

use super::utils::response_with_error;
use super::Controller;
use crate::errors::describe;

pub struct Application<C: Controller> {
    pub controller: C,
}

impl<C: Controller> Application<C> {
    pub fn new(controller: C) -> Self {
        Self { controller }
    }
}

impl<C: Controller> Service for Application<C> {
    type Request = Request;
    type Response = Response;
    type Error = hyper::Error;
    type Future = Box<dyn Future<Item = Response, Error = hyper::Error>>;

    fn call(&self, req: Request) -> Self::Future {
        if *req.method() == Method::Options {
            let requested_headers = req.headers().get_raw("Access-Control-Request-Headers").cloned();
            return Box::new(future::ok::<_, hyper::Error>(with_cors(preflight_response(requested_headers))));
        }

        let method = req.method().clone();
        let path = req.path().to_string();
        debug!("Received request {} {}", method, path);

        Box::new(self.controller.call(req).then(move |result| {
            let response = match result {
                Ok(response) => response,
                Err(err) => {
                    let (status, message) = describe(&err);
                    let chain = err.iter_chain().map(|cause| cause.to_string()).collect::<Vec<_>>().join(": ");
                    if status == StatusCode::InternalServerError {
                        error!("{} {} failed with {}: {}", method, path, status, chain);
                    } else {
                        warn!("{} {} rejected with {}: {}", method, path, status, chain);
                    }
                    response_with_error(status, message)
                }
            };
            Ok::<_, hyper::Error>(with_cors(response))
        }))
    }
}

/// Allows any origin, same as a permissive cors middleware
fn with_cors(mut response: Response) -> Response {
    response.headers_mut().set_raw("Access-Control-Allow-Origin", "*");
    response
}

fn preflight_response(requested_headers: Option<Raw>) -> Response {
    let mut response = Response::new().with_status(StatusCode::NoContent);
    {
        let headers = response.headers_mut();
        headers.set_raw("Access-Control-Allow-Methods", "GET,HEAD,PUT,PATCH,POST,DELETE");
        headers.set_raw(
            "Access-Control-Allow-Headers",
            requested_headers.unwrap_or_else(|| Raw::from("Content-Type")),
        );
    }
    response
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use futures::{Future, Stream};
    use hyper::server::{Request, Response, Service};
    use hyper::{Method, StatusCode, Uri};
    use serde_json::Value;
    use tokio_core::reactor::Core;

    use super::Application;
    use crate::controller::ControllerImpl;
    use crate::repos::repo_factory::tests::*;

    type TestApp = Application<ControllerImpl<MockConnectionManager, ReposFactoryMock>>;

    fn create_app(factory: ReposFactoryMock) -> TestApp {
        Application::new(ControllerImpl::new(create_context(factory)))
    }

    fn request(method: Method, path: &str, body: Option<&str>) -> Request {
        let uri = Uri::from_str(&format!("http://localhost{}", path)).unwrap();
        let mut req = Request::new(method, uri);
        if let Some(body) = body {
            req.set_body(body.to_string());
        }
        req
    }

    fn run(core: &mut Core, app: &TestApp, req: Request) -> (StatusCode, Response) {
        let response = core.run(app.call(req)).unwrap();
        (response.status(), response)
    }

    fn read_json(core: &mut Core, response: Response) -> Value {
        let chunk = core.run(response.body().concat2()).unwrap();
        serde_json::from_slice(&chunk).unwrap()
    }

    #[test]
    fn healthcheck_answers_ok() {
        let mut core = Core::new().unwrap();
        let app = create_app(ReposFactoryMock::default());
        let (status, response) = run(&mut core, &app, request(Method::Get, "/healthcheck", None));
        assert_eq!(status, StatusCode::Ok);
        assert_eq!(read_json(&mut core, response), json!("Ok"));
    }

    #[test]
    fn create_category_returns_created_id() {
        let mut core = Core::new().unwrap();
        let factory = ReposFactoryMock::default();
        let app = create_app(factory.clone());
        let body = r#"{"name": "Bebidas", "description": "Bebidas variadas", "seo_tags": "bebida,drink"}"#;
        let (status, response) = run(&mut core, &app, request(Method::Post, "/api/categorias", Some(body)));
        assert_eq!(status, StatusCode::Created);
        let value = read_json(&mut core, response);
        assert_eq!(value["id"], json!(1));
        assert_eq!(value["message"], json!("Category created successfully."));

        let (status, response) = run(&mut core, &app, request(Method::Get, "/api/categorias", None));
        assert_eq!(status, StatusCode::Ok);
        assert_eq!(
            read_json(&mut core, response),
            json!([{"id": 1, "nome": "Bebidas", "descricao": "Bebidas variadas", "tags_seo": "bebida,drink"}])
        );
    }

    #[test]
    fn category_with_empty_field_is_rejected_without_insert() {
        let mut core = Core::new().unwrap();
        let factory = ReposFactoryMock::default();
        let app = create_app(factory.clone());
        for body in &[
            r#"{"nome": "", "descricao": "Bebidas variadas"}"#,
            r#"{"nome": "Bebidas", "descricao": null}"#,
            r#"{"descricao": "Bebidas variadas"}"#,
        ] {
            let (status, response) = run(&mut core, &app, request(Method::Post, "/api/categorias", Some(body)));
            assert_eq!(status, StatusCode::BadRequest);
            assert!(read_json(&mut core, response)["error"].is_string());
        }
        assert_eq!(factory.counts(), (0, 0));
    }

    #[test]
    fn malformed_json_is_bad_request() {
        let mut core = Core::new().unwrap();
        let app = create_app(ReposFactoryMock::default());
        let (status, response) = run(&mut core, &app, request(Method::Post, "/api/categorias", Some("{nome")));
        assert_eq!(status, StatusCode::BadRequest);
        assert_eq!(
            read_json(&mut core, response),
            json!({"error": "Request body must be a valid JSON object."})
        );
    }

    #[test]
    fn create_product_with_existing_category() {
        let mut core = Core::new().unwrap();
        let factory = ReposFactoryMock::with_categories(&["Bebidas"]);
        let app = create_app(factory.clone());
        let body = r#"{"nome": "Refrigerante", "fabricante": "Fabrica", "descricao": "Lata 350ml",
                       "quantidade": 10, "preco": "4.50", "categoria_id": 1}"#;
        let (status, response) = run(&mut core, &app, request(Method::Post, "/api/produtos", Some(body)));
        assert_eq!(status, StatusCode::Created);
        assert_eq!(read_json(&mut core, response)["id"], json!(1));

        let (_, response) = run(&mut core, &app, request(Method::Get, "/api/produtos", None));
        let listed = read_json(&mut core, response);
        assert_eq!(listed[0]["categoria_nome"], json!("Bebidas"));
        assert_eq!(listed[0]["preco"], json!(4.5));
    }

    #[test]
    fn product_with_unknown_category_is_distinguishable_bad_request() {
        let mut core = Core::new().unwrap();
        let factory = ReposFactoryMock::with_categories(&["Bebidas"]);
        let app = create_app(factory.clone());
        let body = format!(
            r#"{{"name": "Refrigerante", "manufacturer": "Fabrica", "description": "Lata", "quantity": 1, "price": 2.5, "category_id": {}}}"#,
            MOCK_MISSING_CATEGORY_ID
        );
        let (status, response) = run(&mut core, &app, request(Method::Post, "/api/produtos", Some(&body)));
        assert_eq!(status, StatusCode::BadRequest);
        assert_eq!(
            read_json(&mut core, response),
            json!({"error": "The given category does not exist."})
        );
        assert_eq!(factory.counts(), (1, 0));
    }

    #[test]
    fn product_with_non_numeric_quantity_is_rejected() {
        let mut core = Core::new().unwrap();
        let factory = ReposFactoryMock::with_categories(&["Bebidas"]);
        let app = create_app(factory.clone());
        let body = r#"{"nome": "Refrigerante", "fabricante": "Fabrica", "descricao": "Lata",
                       "quantidade": "abc", "preco": 2.5, "categoria_id": 1}"#;
        let (status, response) = run(&mut core, &app, request(Method::Post, "/api/produtos", Some(body)));
        assert_eq!(status, StatusCode::BadRequest);
        assert_eq!(
            read_json(&mut core, response),
            json!({"error": "Quantity, price and category id must be valid numbers."})
        );
        assert_eq!(factory.counts(), (1, 0));
    }

    #[test]
    fn product_with_zero_quantity_is_missing_field() {
        let mut core = Core::new().unwrap();
        let factory = ReposFactoryMock::with_categories(&["Bebidas"]);
        let app = create_app(factory.clone());
        let body = r#"{"nome": "Refrigerante", "fabricante": "Fabrica", "descricao": "Lata",
                       "quantidade": 0, "preco": 2.5, "categoria_id": 1}"#;
        let (status, response) = run(&mut core, &app, request(Method::Post, "/api/produtos", Some(body)));
        assert_eq!(status, StatusCode::BadRequest);
        assert_eq!(
            read_json(&mut core, response),
            json!({"error": "All product fields are required."})
        );
        assert_eq!(factory.counts(), (1, 0));
    }

    #[test]
    fn listings_are_idempotent() {
        let mut core = Core::new().unwrap();
        let app = create_app(ReposFactoryMock::with_categories(&["Bebidas", "Limpeza"]));
        let (_, first) = run(&mut core, &app, request(Method::Get, "/api/categorias", None));
        let (_, second) = run(&mut core, &app, request(Method::Get, "/api/categorias", None));
        assert_eq!(read_json(&mut core, first), read_json(&mut core, second));
    }

    #[test]
    fn store_failure_is_internal_error_without_details() {
        let mut core = Core::new().unwrap();
        let app = create_app(ReposFactoryMock::broken("connection to 10.0.0.5:5432 refused"));
        for path in &["/api/categorias", "/api/produtos"] {
            let (status, response) = run(&mut core, &app, request(Method::Get, path, None));
            assert_eq!(status, StatusCode::InternalServerError);
            assert_eq!(read_json(&mut core, response), json!({"error": "Internal server error."}));
        }
    }

    #[test]
    fn unknown_route_is_not_found() {
        let mut core = Core::new().unwrap();
        let app = create_app(ReposFactoryMock::default());
        let (status, response) = run(&mut core, &app, request(Method::Get, "/api/clientes", None));
        assert_eq!(status, StatusCode::NotFound);
        assert_eq!(read_json(&mut core, response), json!({"error": "Not found."}));
    }

    #[test]
    fn responses_allow_any_origin() {
        let mut core = Core::new().unwrap();
        let app = create_app(ReposFactoryMock::default());
        let (_, response) = run(&mut core, &app, request(Method::Get, "/api/produtos", None));
        let origin = response.headers().get_raw("Access-Control-Allow-Origin").and_then(|raw| raw.one()).map(|v| v.to_vec());
        assert_eq!(origin, Some(b"*".to_vec()));
    }

    #[test]
    fn preflight_is_no_content() {
        let mut core = Core::new().unwrap();
        let app = create_app(ReposFactoryMock::default());
        let (status, response) = run(&mut core, &app, request(Method::Options, "/api/produtos", None));
        assert_eq!(status, StatusCode::NoContent);
        assert!(response.headers().get_raw("Access-Control-Allow-Methods").is_some());
    }
}
