//! Repo for categorias table

use diesel::connection::AnsiTransactionManager;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::query_dsl::RunQueryDsl;
use diesel::Connection;
use failure::Error as FailureError;
use failure::Fail;

use super::types::RepoResult;
use crate::models::{Category, NewCategory};
use crate::schema::categorias::dsl::*;

/// Categories repository, responsible for handling categories
pub trait CategoriesRepo {
    /// Returns all categories
    fn list(&self) -> RepoResult<Vec<Category>>;

    /// Creates new category
    fn create(&self, payload: NewCategory) -> RepoResult<Category>;
}

pub struct CategoriesRepoImpl<'a, T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> {
    pub db_conn: &'a T,
}

impl<'a, T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> CategoriesRepoImpl<'a, T> {
    pub fn new(db_conn: &'a T) -> Self {
        Self { db_conn }
    }
}

impl<'a, T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> CategoriesRepo for CategoriesRepoImpl<'a, T> {
    fn list(&self) -> RepoResult<Vec<Category>> {
        debug!("List all categories.");
        let query = categorias.order(id.asc());

        query
            .get_results::<Category>(self.db_conn)
            .map_err(From::from)
            .map_err(|e: FailureError| e.context("List all categories error occurred").into())
    }

    fn create(&self, payload: NewCategory) -> RepoResult<Category> {
        debug!("Create new category {:?}.", payload);
        let query = diesel::insert_into(categorias).values(&payload);

        query
            .get_result::<Category>(self.db_conn)
            .map_err(From::from)
            .map_err(|e: FailureError| e.context(format!("Create new category {:?} error occurred", payload)).into())
    }
}
