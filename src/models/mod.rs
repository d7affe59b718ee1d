//! Models contains all structures that are used in different
//! modules of the app

pub mod category;
pub mod product;
pub mod response;
pub mod validation_rules;

pub use self::category::*;
pub use self::product::*;
pub use self::response::*;
pub use self::validation_rules::*;
