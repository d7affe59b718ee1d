//! Admin side of the catalog: the category and product pages.
//!
//! A page owns its render targets (`AdminPage`). `AdminApp` runs the page
//! actions against a `CatalogApi` and reports every failure through a
//! `Notifier`, logging the details.

pub mod api;
pub mod forms;
pub mod view;

pub use self::api::*;
pub use self::forms::*;
pub use self::view::*;

use crate::models::Created;

#[derive(Debug, Fail)]
pub enum ClientError {
    #[fail(display = "{}", _0)]
    Validation(&'static str),
    #[fail(display = "Request failed: {}", _0)]
    Transport(String),
    #[fail(display = "Server answered with status {}", _0)]
    Status(u16),
    #[fail(display = "Unexpected response body: {}", _0)]
    Decode(String),
}

pub const CATEGORY_COLUMNS: [&str; 5] = ["ID", "Name", "Description", "SEO tags", "Options"];
pub const PRODUCT_COLUMNS: [&str; 8] = [
    "ID",
    "Category",
    "Manufacturer",
    "Name",
    "Description",
    "Quantity",
    "Price",
    "Options",
];
pub const SELECT_PLACEHOLDER: &str = "Select a category";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PageKind {
    Categories,
    Products,
}

/// Render targets of a page. A missing target is skipped by the loaders.
#[derive(Clone, Debug, PartialEq)]
pub struct AdminPage {
    pub kind: PageKind,
    pub categories: Option<Table>,
    pub products: Option<Table>,
    pub category_select: Option<Select>,
}

impl AdminPage {
    pub fn categories_page() -> Self {
        Self {
            kind: PageKind::Categories,
            categories: Some(Table::new(&CATEGORY_COLUMNS)),
            products: None,
            category_select: None,
        }
    }

    pub fn products_page() -> Self {
        Self {
            kind: PageKind::Products,
            categories: None,
            products: Some(Table::new(&PRODUCT_COLUMNS)),
            category_select: Some(Select::default()),
        }
    }
}

pub struct AdminApp<A: CatalogApi, N: Notifier> {
    api: A,
    notifier: N,
    pub page: AdminPage,
}

impl<A: CatalogApi, N: Notifier> AdminApp<A, N> {
    pub fn new(api: A, notifier: N, page: AdminPage) -> Self {
        Self { api, notifier, page }
    }

    /// Initial loading once the page is shown
    pub fn on_ready(&mut self) {
        match self.page.kind {
            PageKind::Categories => {
                let _ = self.load_categories();
            }
            PageKind::Products => {
                let _ = self.load_products();
                let _ = self.fill_category_select();
            }
        }
    }

    /// Submits the category form, on success the form is reset and the table reloaded
    pub fn save_category(&mut self, form: &mut CategoryForm) -> Result<Created, ClientError> {
        let created = form
            .submit()
            .and_then(|payload| self.api.create_category(&payload))
            .map_err(|e| self.report_save_failure("category", e))?;

        self.notifier.alert(&format!("Category created with ID {}", created.id));
        form.reset();
        let _ = self.load_categories();
        Ok(created)
    }

    /// Submits the product form, on success the form is reset and the table reloaded
    pub fn save_product(&mut self, form: &mut ProductForm) -> Result<Created, ClientError> {
        let created = form
            .submit()
            .and_then(|payload| self.api.create_product(&payload))
            .map_err(|e| self.report_save_failure("product", e))?;

        self.notifier.alert(&format!("Product created with ID {}", created.id));
        form.reset();
        let _ = self.load_products();
        Ok(created)
    }

    pub fn load_categories(&mut self) -> Result<(), ClientError> {
        let categories = self.api.list_categories().map_err(|e| {
            error!("Failed to load categories: {}", e);
            self.notifier.alert("Could not load categories. Check the connection to the server.");
            e
        })?;

        let table = match self.page.categories.as_mut() {
            Some(table) => table,
            None => {
                warn!("Categories table not found on this page.");
                return Ok(());
            }
        };

        table.clear();
        for category in categories {
            table.append_row(vec![
                Cell::text(category.id),
                Cell::Text(category.name),
                Cell::Text(category.description),
                Cell::Text(category.seo_tags.unwrap_or_default()),
                Cell::Actions,
            ]);
        }
        Ok(())
    }

    pub fn load_products(&mut self) -> Result<(), ClientError> {
        let products = self.api.list_products().map_err(|e| {
            error!("Failed to load products: {}", e);
            self.notifier.alert("Could not load products. Check the connection to the server.");
            e
        })?;

        let table = match self.page.products.as_mut() {
            Some(table) => table,
            None => {
                warn!("Products table not found on this page.");
                return Ok(());
            }
        };

        table.clear();
        for product in products {
            table.append_row(vec![
                Cell::text(product.id),
                Cell::Text(product.category_name),
                Cell::Text(product.manufacturer),
                Cell::Text(product.name),
                Cell::Text(product.description),
                Cell::text(product.quantity),
                Cell::Text(format!("{:.2}", product.price)),
                Cell::Actions,
            ]);
        }
        Ok(())
    }

    /// Placeholder option first, then one option per category
    pub fn fill_category_select(&mut self) -> Result<(), ClientError> {
        let categories = self.api.list_categories().map_err(|e| {
            error!("Failed to fill the category select: {}", e);
            self.notifier
                .alert("Could not load categories for the selector. Check the connection to the server.");
            e
        })?;

        if let Some(select) = self.page.category_select.as_mut() {
            select.clear();
            select.add_option("", SELECT_PLACEHOLDER);
            for category in categories {
                select.add_option(category.id.to_string(), category.name);
            }
        }
        Ok(())
    }

    fn report_save_failure(&self, entity: &str, e: ClientError) -> ClientError {
        match e {
            ClientError::Validation(message) => self.notifier.alert(message),
            _ => {
                error!("Failed to create {}: {}", entity, e);
                self.notifier
                    .alert(&format!("Failed to create {}. Check the log for details.", entity));
            }
        }
        e
    }
}
