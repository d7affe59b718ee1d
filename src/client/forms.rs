//! Form models of the admin pages. `submit` does the local checks and
//! yields the body to post; nothing reaches the network when it fails.

use super::ClientError;
use crate::models::{NewCategory, NewProduct};

const FILL_ALL_FIELDS: &str = "Please fill in all fields.";
const INVALID_NUMBERS: &str = "Quantity, price and category must be valid numbers.";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CategoryForm {
    pub name: String,
    pub description: String,
    pub seo: String,
}

impl CategoryForm {
    /// All three fields are required here, even though the API accepts a category without seo tags
    pub fn submit(&self) -> Result<NewCategory, ClientError> {
        let name = self.name.trim();
        let description = self.description.trim();
        let seo = self.seo.trim();

        if name.is_empty() || description.is_empty() || seo.is_empty() {
            return Err(ClientError::Validation(FILL_ALL_FIELDS));
        }

        Ok(NewCategory {
            name: name.to_string(),
            description: description.to_string(),
            seo_tags: Some(seo.to_string()),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Product form, numeric inputs are kept as typed
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub manufacturer: String,
    pub description: String,
    pub quantity: String,
    pub price: String,
    pub category_id: String,
}

impl ProductForm {
    /// Zero counts as an empty field for quantity, price and category
    pub fn submit(&self) -> Result<NewProduct, ClientError> {
        let name = self.name.trim();
        let manufacturer = self.manufacturer.trim();
        let description = self.description.trim();
        let quantity = self.quantity.trim();
        let price = self.price.trim();
        let category_id = self.category_id.trim();

        if [name, manufacturer, description, quantity, price, category_id]
            .iter()
            .any(|field| field.is_empty())
        {
            return Err(ClientError::Validation(FILL_ALL_FIELDS));
        }

        let (quantity, price, category_id) = match (quantity.parse::<i32>(), price.parse::<f64>(), category_id.parse::<i32>()) {
            (Ok(quantity), Ok(price), Ok(category_id)) if price.is_finite() => (quantity, price, category_id),
            _ => return Err(ClientError::Validation(INVALID_NUMBERS)),
        };

        if quantity == 0 || price == 0.0 || category_id == 0 {
            return Err(ClientError::Validation(FILL_ALL_FIELDS));
        }

        Ok(NewProduct {
            name: name.to_string(),
            manufacturer: manufacturer.to_string(),
            description: description.to_string(),
            quantity,
            price,
            category_id,
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_product_form() -> ProductForm {
        ProductForm {
            name: " Refrigerante ".to_string(),
            manufacturer: "Fabrica".to_string(),
            description: "Lata 350ml".to_string(),
            quantity: "10".to_string(),
            price: "4.50".to_string(),
            category_id: "1".to_string(),
        }
    }

    #[test]
    fn category_form_trims_fields() {
        let form = CategoryForm {
            name: "  Bebidas ".to_string(),
            description: "Bebidas variadas".to_string(),
            seo: " bebida,drink".to_string(),
        };
        let category = form.submit().unwrap();
        assert_eq!(category.name, "Bebidas");
        assert_eq!(category.seo_tags, Some("bebida,drink".to_string()));
    }

    #[test]
    fn category_form_requires_every_field() {
        let form = CategoryForm {
            name: "Bebidas".to_string(),
            description: "   ".to_string(),
            seo: "bebida".to_string(),
        };
        match form.submit() {
            Err(ClientError::Validation(message)) => assert_eq!(message, FILL_ALL_FIELDS),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn product_form_parses_numbers() {
        let product = filled_product_form().submit().unwrap();
        assert_eq!(product.name, "Refrigerante");
        assert_eq!(product.quantity, 10);
        assert_eq!(product.price, 4.5);
        assert_eq!(product.category_id, 1);
    }

    #[test]
    fn product_form_rejects_non_numeric_quantity() {
        let mut form = filled_product_form();
        form.quantity = "abc".to_string();
        match form.submit() {
            Err(ClientError::Validation(message)) => assert_eq!(message, INVALID_NUMBERS),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn product_form_treats_zero_as_empty() {
        let mut form = filled_product_form();
        form.price = "0".to_string();
        match form.submit() {
            Err(ClientError::Validation(message)) => assert_eq!(message, FILL_ALL_FIELDS),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn reset_clears_form() {
        let mut form = filled_product_form();
        form.reset();
        assert_eq!(form, ProductForm::default());
    }
}
