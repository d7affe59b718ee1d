//! Services is a core layer for the app business logic. Every call takes
//! a connection from the pool on the cpu pool, runs the repos and gives
//! the connection back when done.

pub mod categories;
pub mod products;
pub mod types;

pub use self::categories::*;
pub use self::products::*;
pub use self::types::*;

use failure::Error as FailureError;
use failure::Fail;
use r2d2::{ManageConnection, PooledConnection};

use crate::controller::context::StaticContext;
use crate::errors::Error;

/// Service layer, generic over the db connection manager and the repos factory
pub struct Service<M: ManageConnection, F> {
    pub static_context: StaticContext<M, F>,
}

impl<M: ManageConnection, F: Clone + Send + 'static> Service<M, F> {
    pub fn new(static_context: StaticContext<M, F>) -> Self {
        Self { static_context }
    }

    /// Runs `f` on the cpu pool with a pooled db connection
    pub fn spawn_on_pool<R, Func>(&self, f: Func) -> ServiceFuture<R>
    where
        Func: FnOnce(PooledConnection<M>) -> Result<R, FailureError> + Send + 'static,
        R: Send + 'static,
    {
        let db_pool = self.static_context.db_pool.clone();
        let cpu_pool = self.static_context.cpu_pool.clone();
        Box::new(cpu_pool.spawn_fn(move || {
            db_pool
                .get()
                .map_err(|e| FailureError::from(e.context(Error::Connection)))
                .and_then(f)
        }))
    }
}
