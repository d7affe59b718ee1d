//! Http access to the catalog endpoints

use reqwest;
use serde::de::DeserializeOwned;
use serde::ser::Serialize;

use super::ClientError;
use crate::models::{Category, Created, NewCategory, NewProduct, ProductWithCategory};

/// Calls the admin pages make. Every call is a single attempt.
pub trait CatalogApi {
    fn list_categories(&self) -> Result<Vec<Category>, ClientError>;
    fn create_category(&self, payload: &NewCategory) -> Result<Created, ClientError>;
    fn list_products(&self) -> Result<Vec<ProductWithCategory>, ClientError>;
    fn create_product(&self, payload: &NewProduct) -> Result<Created, ClientError>;
}

/// Blocking reqwest client against a running catalog service
pub struct HttpCatalogApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalogApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = self.url(path);
        debug!("GET {}", url);
        let response = self.client.get(&url).send().map_err(|e| ClientError::Transport(e.to_string()))?;
        read_json(response)
    }

    fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ClientError> {
        let url = self.url(path);
        debug!("POST {}", url);
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        read_json(response)
    }
}

/// Anything but 2xx is a failure
fn read_json<T: DeserializeOwned>(mut response: reqwest::Response) -> Result<T, ClientError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ClientError::Status(status.as_u16()));
    }
    response.json::<T>().map_err(|e| ClientError::Decode(e.to_string()))
}

impl CatalogApi for HttpCatalogApi {
    fn list_categories(&self) -> Result<Vec<Category>, ClientError> {
        self.get("/api/categorias")
    }

    fn create_category(&self, payload: &NewCategory) -> Result<Created, ClientError> {
        self.post("/api/categorias", payload)
    }

    fn list_products(&self) -> Result<Vec<ProductWithCategory>, ClientError> {
        self.get("/api/produtos")
    }

    fn create_product(&self, payload: &NewProduct) -> Result<Created, ClientError> {
        self.post("/api/produtos", payload)
    }
}
