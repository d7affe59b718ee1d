//! Module containing category model for query and insert
use failure::Error as FailureError;
use validator::Validate;

use crate::errors::Error;
use crate::schema::categorias;

pub type CategoryId = i32;

/// Category row as stored and listed
#[derive(Serialize, Deserialize, Queryable, Clone, Debug, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "tags_seo")]
    pub seo_tags: Option<String>,
}

/// Raw body of `POST /api/categorias`, fields are checked by `into_new_category`
#[derive(Deserialize, Clone, Debug, Default)]
pub struct CategoryPayload {
    #[serde(rename = "nome", alias = "name")]
    pub name: Option<String>,
    #[serde(rename = "descricao", alias = "description")]
    pub description: Option<String>,
    #[serde(rename = "tags_seo", alias = "seo_tags")]
    pub seo_tags: Option<String>,
}

impl CategoryPayload {
    pub fn into_new_category(self) -> Result<NewCategory, FailureError> {
        match (self.name, self.description) {
            (Some(name), Some(description)) if !name.is_empty() && !description.is_empty() => Ok(NewCategory {
                name,
                description,
                seo_tags: self.seo_tags,
            }),
            _ => Err(Error::MissingFields("Category name and description are required.").into()),
        }
    }
}

/// Payload for creating categories
#[derive(Serialize, Deserialize, Insertable, Validate, Clone, Debug, PartialEq)]
#[table_name = "categorias"]
pub struct NewCategory {
    #[column_name = "nome"]
    #[serde(rename = "nome")]
    #[validate(length(min = "1", max = "255"))]
    pub name: String,
    #[column_name = "descricao"]
    #[serde(rename = "descricao")]
    #[validate(length(min = "1"))]
    pub description: String,
    #[column_name = "tags_seo"]
    #[serde(rename = "tags_seo")]
    #[validate(length(max = "255"))]
    pub seo_tags: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_accepts_english_and_store_names() {
        let english: CategoryPayload =
            serde_json::from_str(r#"{"name":"Bebidas","description":"Bebidas variadas","seo_tags":"bebida,drink"}"#).unwrap();
        let store: CategoryPayload =
            serde_json::from_str(r#"{"nome":"Bebidas","descricao":"Bebidas variadas","tags_seo":"bebida,drink"}"#).unwrap();
        assert_eq!(english.into_new_category().unwrap(), store.into_new_category().unwrap());
    }

    #[test]
    fn seo_tags_are_optional() {
        let payload: CategoryPayload = serde_json::from_str(r#"{"nome":"Limpeza","descricao":"Produtos de limpeza"}"#).unwrap();
        let category = payload.into_new_category().unwrap();
        assert_eq!(category.seo_tags, None);
    }

    #[test]
    fn empty_or_missing_required_fields_are_rejected() {
        let bodies = [
            r#"{}"#,
            r#"{"nome":"Bebidas"}"#,
            r#"{"descricao":"Bebidas variadas"}"#,
            r#"{"nome":"","descricao":"Bebidas variadas"}"#,
            r#"{"nome":"Bebidas","descricao":""}"#,
            r#"{"nome":null,"descricao":"Bebidas variadas"}"#,
        ];
        for body in bodies.iter() {
            let payload: CategoryPayload = serde_json::from_str(body).unwrap();
            assert!(payload.into_new_category().is_err(), "accepted {}", body);
        }
    }

    #[test]
    fn serializes_with_store_names() {
        let category = Category {
            id: 7,
            name: "Bebidas".to_string(),
            description: "Bebidas variadas".to_string(),
            seo_tags: Some("bebida,drink".to_string()),
        };
        let value = serde_json::to_value(&category).unwrap();
        assert_eq!(
            value,
            json!({"id": 7, "nome": "Bebidas", "descricao": "Bebidas variadas", "tags_seo": "bebida,drink"})
        );
    }

    #[test]
    fn overlong_name_fails_validation() {
        let category = NewCategory {
            name: "x".repeat(256),
            description: "d".to_string(),
            seo_tags: None,
        };
        assert!(category.validate().is_err());
    }
}
