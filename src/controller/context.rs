use futures_cpupool::CpuPool;
use r2d2::{ManageConnection, Pool};

/// Static context for all app, shared by every request
pub struct StaticContext<M: ManageConnection, F> {
    pub db_pool: Pool<M>,
    pub cpu_pool: CpuPool,
    pub repo_factory: F,
}

impl<M: ManageConnection, F: Clone> StaticContext<M, F> {
    pub fn new(db_pool: Pool<M>, cpu_pool: CpuPool, repo_factory: F) -> Self {
        Self {
            db_pool,
            cpu_pool,
            repo_factory,
        }
    }
}

impl<M: ManageConnection, F: Clone> Clone for StaticContext<M, F> {
    fn clone(&self) -> Self {
        Self {
            db_pool: self.db_pool.clone(),
            cpu_pool: self.cpu_pool.clone(),
            repo_factory: self.repo_factory.clone(),
        }
    }
}
