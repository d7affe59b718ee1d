use diesel::connection::AnsiTransactionManager;
use diesel::pg::Pg;
use diesel::Connection;

use crate::repos::*;

pub trait ReposFactory<C: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static>: Clone + Send + 'static {
    fn create_categories_repo<'a>(&self, db_conn: &'a C) -> Box<dyn CategoriesRepo + 'a>;
    fn create_products_repo<'a>(&self, db_conn: &'a C) -> Box<dyn ProductsRepo + 'a>;
}

#[derive(Clone, Default)]
pub struct ReposFactoryImpl;

impl ReposFactoryImpl {
    pub fn new() -> Self {
        Self {}
    }
}

impl<C: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> ReposFactory<C> for ReposFactoryImpl {
    fn create_categories_repo<'a>(&self, db_conn: &'a C) -> Box<dyn CategoriesRepo + 'a> {
        Box::new(CategoriesRepoImpl::new(db_conn)) as Box<dyn CategoriesRepo>
    }
    fn create_products_repo<'a>(&self, db_conn: &'a C) -> Box<dyn ProductsRepo + 'a> {
        Box::new(ProductsRepoImpl::new(db_conn)) as Box<dyn ProductsRepo>
    }
}
