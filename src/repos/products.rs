//! Repo for produtos table. Listing joins every product with its category.

use diesel::connection::AnsiTransactionManager;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::query_dsl::RunQueryDsl;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::Connection;
use failure::Error as FailureError;
use failure::Fail;

use super::types::RepoResult;
use crate::errors::Error;
use crate::models::{NewProduct, Product, ProductWithCategory};
use crate::schema::{categorias, produtos};

/// Products repository, responsible for handling products
pub trait ProductsRepo {
    /// Returns all products that have a category
    fn list(&self) -> RepoResult<Vec<ProductWithCategory>>;

    /// Creates new product
    fn create(&self, payload: NewProduct) -> RepoResult<Product>;
}

pub struct ProductsRepoImpl<'a, T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> {
    pub db_conn: &'a T,
}

impl<'a, T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> ProductsRepoImpl<'a, T> {
    pub fn new(db_conn: &'a T) -> Self {
        Self { db_conn }
    }
}

impl<'a, T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> ProductsRepo for ProductsRepoImpl<'a, T> {
    fn list(&self) -> RepoResult<Vec<ProductWithCategory>> {
        debug!("List all products.");
        let query = produtos::table
            .inner_join(categorias::table)
            .select((
                produtos::id,
                produtos::nome,
                produtos::fabricante,
                produtos::descricao,
                produtos::quantidade,
                produtos::preco,
                categorias::nome,
                produtos::categoria_id,
            ))
            .order(produtos::id.asc());

        query
            .get_results::<ProductWithCategory>(self.db_conn)
            .map_err(From::from)
            .map_err(|e: FailureError| e.context("List all products error occurred").into())
    }

    fn create(&self, payload: NewProduct) -> RepoResult<Product> {
        debug!("Create new product {:?}.", payload);
        let query = diesel::insert_into(produtos::table).values(&payload);

        query
            .get_result::<Product>(self.db_conn)
            .map_err(insert_error)
            .map_err(|e: FailureError| e.context(format!("Create new product {:?} error occurred", payload)).into())
    }
}

/// A foreign key violation on insert means the referenced category is missing
pub fn insert_error(e: DieselError) -> FailureError {
    match e {
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => e.context(Error::UnknownCategory).into(),
        _ => e.into(),
    }
}
