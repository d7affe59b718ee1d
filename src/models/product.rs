//! Module containing product model for query and insert
use failure::Error as FailureError;
use serde_json::Value;
use validator::Validate;

use crate::errors::Error;
use crate::models::validation_rules::*;
use crate::models::CategoryId;
use crate::schema::produtos;

pub type ProductId = i32;

/// Product row as stored
#[derive(Serialize, Deserialize, Queryable, Clone, Debug, PartialEq)]
pub struct Product {
    pub id: ProductId,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "fabricante")]
    pub manufacturer: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "quantidade")]
    pub quantity: i32,
    #[serde(rename = "preco")]
    pub price: f64,
    #[serde(rename = "categoria_id")]
    pub category_id: CategoryId,
}

/// Product listing row, joined with the name of its category
#[derive(Serialize, Deserialize, Queryable, Clone, Debug, PartialEq)]
pub struct ProductWithCategory {
    pub id: ProductId,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "fabricante")]
    pub manufacturer: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "quantidade")]
    pub quantity: i32,
    #[serde(rename = "preco")]
    pub price: f64,
    #[serde(rename = "categoria_nome")]
    pub category_name: String,
    #[serde(rename = "categoria_id")]
    pub category_id: CategoryId,
}

/// Raw body of `POST /api/produtos`
#[derive(Deserialize, Clone, Debug, Default)]
pub struct ProductPayload {
    #[serde(rename = "nome", alias = "name")]
    pub name: Option<String>,
    #[serde(rename = "fabricante", alias = "manufacturer")]
    pub manufacturer: Option<String>,
    #[serde(rename = "descricao", alias = "description")]
    pub description: Option<String>,
    #[serde(rename = "quantidade", alias = "quantity")]
    pub quantity: Option<Value>,
    #[serde(rename = "preco", alias = "price")]
    pub price: Option<Value>,
    #[serde(rename = "categoria_id", alias = "category_id")]
    pub category_id: Option<Value>,
}

impl ProductPayload {
    /// Every field is required, numeric ones must parse
    pub fn into_new_product(self) -> Result<NewProduct, FailureError> {
        let ProductPayload {
            name,
            manufacturer,
            description,
            quantity,
            price,
            category_id,
        } = self;

        let present_text = |field: &Option<String>| field.as_ref().map(|s| !s.is_empty()).unwrap_or(false);
        let present_value = |field: &Option<Value>| field.as_ref().map(|v| !is_absent(v)).unwrap_or(false);

        if !(present_text(&name)
            && present_text(&manufacturer)
            && present_text(&description)
            && present_value(&quantity)
            && present_value(&price)
            && present_value(&category_id))
        {
            return Err(Error::MissingFields("All product fields are required.").into());
        }

        let quantity = quantity.as_ref().and_then(as_integer);
        let price = price.as_ref().and_then(as_decimal);
        let category_id = category_id.as_ref().and_then(as_integer);

        match (name, manufacturer, description, quantity, price, category_id) {
            (Some(name), Some(manufacturer), Some(description), Some(quantity), Some(price), Some(category_id)) => Ok(NewProduct {
                name,
                manufacturer,
                description,
                quantity,
                price,
                category_id,
            }),
            _ => Err(Error::InvalidNumbers.into()),
        }
    }
}

/// Payload for creating products
#[derive(Serialize, Deserialize, Insertable, Validate, Clone, Debug, PartialEq)]
#[table_name = "produtos"]
pub struct NewProduct {
    #[column_name = "nome"]
    #[serde(rename = "nome")]
    #[validate(length(min = "1", max = "255"))]
    pub name: String,
    #[column_name = "fabricante"]
    #[serde(rename = "fabricante")]
    #[validate(length(min = "1", max = "255"))]
    pub manufacturer: String,
    #[column_name = "descricao"]
    #[serde(rename = "descricao")]
    #[validate(length(min = "1"))]
    pub description: String,
    #[column_name = "quantidade"]
    #[serde(rename = "quantidade")]
    #[validate(custom = "validate_non_negative")]
    pub quantity: i32,
    #[column_name = "preco"]
    #[serde(rename = "preco")]
    #[validate(custom = "validate_non_negative")]
    pub price: f64,
    #[column_name = "categoria_id"]
    #[serde(rename = "categoria_id")]
    pub category_id: CategoryId,
}
