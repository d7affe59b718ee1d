//! Repos is a module responsible for interacting with postgres db

pub mod categories;
pub mod products;
pub mod repo_factory;
pub mod types;

pub use self::categories::*;
pub use self::products::*;
pub use self::repo_factory::*;
pub use self::types::*;
