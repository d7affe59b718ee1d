//! Categories Services, presents creation and listing of categories

use diesel::connection::AnsiTransactionManager;
use diesel::pg::Pg;
use diesel::Connection;
use failure::Error as FailureError;
use r2d2::ManageConnection;

use crate::models::{Category, NewCategory};
use crate::repos::ReposFactory;
use crate::services::types::ServiceFuture;
use crate::services::Service;

pub trait CategoriesService {
    /// Returns all categories
    fn list_categories(&self) -> ServiceFuture<Vec<Category>>;

    /// Creates new category
    fn create_category(&self, payload: NewCategory) -> ServiceFuture<Category>;
}

impl<
        T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static,
        M: ManageConnection<Connection = T>,
        F: ReposFactory<T>,
    > CategoriesService for Service<M, F>
{
    /// Returns all categories
    fn list_categories(&self) -> ServiceFuture<Vec<Category>> {
        let repo_factory = self.static_context.repo_factory.clone();

        self.spawn_on_pool(move |conn| {
            let categories_repo = repo_factory.create_categories_repo(&*conn);
            categories_repo
                .list()
                .map_err(|e: FailureError| e.context("Service categories, list endpoint error occurred.").into())
        })
    }

    /// Creates new category
    fn create_category(&self, payload: NewCategory) -> ServiceFuture<Category> {
        let repo_factory = self.static_context.repo_factory.clone();

        self.spawn_on_pool(move |conn| {
            let categories_repo = repo_factory.create_categories_repo(&*conn);
            categories_repo
                .create(payload)
                .map_err(|e: FailureError| e.context("Service categories, create endpoint error occurred.").into())
        })
    }
}
