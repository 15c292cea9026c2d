pub mod mutate;
pub mod types;

pub use types::{Category, CriteriaTree, FundType, Subcategory};
