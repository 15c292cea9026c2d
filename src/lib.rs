//! Weighted-criteria configuration engine for fund deal screening.
//!
//! A fund manager defines a two-level rubric (categories owning
//! subcategories) where every node carries an enable flag and a percentage
//! weight, under the invariant that enabled weights sum to 100% at each
//! level. This crate owns the tree model, its mutation API, validation,
//! equal-weight redistribution, and the rollup of externally supplied leaf
//! scores into one composite 0-100 score. Wizard UI, persistence, and the
//! analysis that produces leaf scores live in the consuming application.

pub mod aggregate;
pub mod error;
pub mod normalize;
pub mod template;
pub mod tree;
pub mod validation;

pub use aggregate::{compute_score, LeafScores, ScoreSummary};
pub use error::CriteriaError;
pub use normalize::normalize;
pub use template::template;
pub use tree::{Category, CriteriaTree, FundType, Subcategory};
pub use validation::{validate, ValidationReport, Violation, ViolationLevel, WEIGHT_SUM_TOLERANCE};
