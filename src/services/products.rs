//! Products Services, presents creation and listing of products

use diesel::connection::AnsiTransactionManager;
use diesel::pg::Pg;
use diesel::Connection;
use failure::Error as FailureError;
use r2d2::ManageConnection;

use crate::models::{NewProduct, Product, ProductWithCategory};
use crate::repos::ReposFactory;
use crate::services::types::ServiceFuture;
use crate::services::Service;

pub trait ProductsService {
    /// Returns all products with their category names
    fn list_products(&self) -> ServiceFuture<Vec<ProductWithCategory>>;

    /// Creates new product
    fn create_product(&self, payload: NewProduct) -> ServiceFuture<Product>;
}

impl<
        T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static,
        M: ManageConnection<Connection = T>,
        F: ReposFactory<T>,
    > ProductsService for Service<M, F>
{
    fn list_products(&self) -> ServiceFuture<Vec<ProductWithCategory>> {
        let repo_factory = self.static_context.repo_factory.clone();

        self.spawn_on_pool(move |conn| {
            let products_repo = repo_factory.create_products_repo(&*conn);
            products_repo
                .list()
                .map_err(|e: FailureError| e.context("Service products, list endpoint error occurred.").into())
        })
    }

    fn create_product(&self, payload: NewProduct) -> ServiceFuture<Product> {
        let repo_factory = self.static_context.repo_factory.clone();

        self.spawn_on_pool(move |conn| {
            let products_repo = repo_factory.create_products_repo(&*conn);
            products_repo
                .create(payload)
                .map_err(|e: FailureError| e.context("Service products, create endpoint error occurred.").into())
        })
    }
}

#[cfg(test)]
mod tests {
    use tokio_core::reactor::Core;

    use crate::errors::{find_kind, Error};
    use crate::models::*;
    use crate::repos::repo_factory::tests::*;
    use crate::services::*;

    fn new_product(category_id: CategoryId) -> NewProduct {
        NewProduct {
            name: "Refrigerante".to_string(),
            manufacturer: "Fabrica".to_string(),
            description: "Lata 350ml".to_string(),
            quantity: 10,
            price: 4.5,
            category_id,
        }
    }

    #[test]
    fn test_create_product() {
        let mut core = Core::new().unwrap();
        let service = create_service(ReposFactoryMock::with_categories(&["Bebidas"]));
        let result = core.run(service.create_product(new_product(1))).unwrap();
        assert_eq!(result.id, 1);
        assert_eq!(result.category_id, 1);
    }

    #[test]
    fn test_create_product_with_missing_category() {
        let mut core = Core::new().unwrap();
        let factory = ReposFactoryMock::with_categories(&["Bebidas"]);
        let service = create_service(factory.clone());
        let err = core.run(service.create_product(new_product(MOCK_MISSING_CATEGORY_ID))).unwrap_err();
        match find_kind(&err) {
            Some(Error::UnknownCategory) => (),
            other => panic!("unexpected error kind: {:?}", other),
        }
        assert_eq!(factory.counts(), (1, 0));
    }

    #[test]
    fn test_list_skips_products_without_category() {
        let mut core = Core::new().unwrap();
        let factory = ReposFactoryMock::with_categories(&["Bebidas"]);
        factory.store.lock().unwrap().products.push(create_product(1, 1));
        factory.store.lock().unwrap().products.push(create_product(2, 42));
        let service = create_service(factory);
        let listed = core.run(service.list_products()).unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, 1);
        assert_eq!(listed[0].category_name, "Bebidas");
    }
}
