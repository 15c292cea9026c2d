use serde::{Deserialize, Serialize};

use crate::error::CriteriaError;

/// The kind of fund a criteria tree is configured for. Each fund type ships
/// with its own default template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FundType {
    Vc,
    Pe,
}

impl FundType {
    /// Parse a fund type from its wire form ("vc" / "pe", case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns `CriteriaError::UnknownFundType` for anything else.
    pub fn parse(s: &str) -> Result<Self, CriteriaError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vc" => Ok(FundType::Vc),
            "pe" => Ok(FundType::Pe),
            _ => Err(CriteriaError::UnknownFundType(s.trim().to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FundType::Vc => "vc",
            FundType::Pe => "pe",
        }
    }
}

/// A leaf criterion. Receives an externally supplied 0-100 score during
/// analysis; its `weight` is its percentage share of the parent category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subcategory {
    /// Stable slug used by the mutation API and the leaf-score map.
    pub id: String,
    /// Display name, unique among siblings.
    pub name: String,
    /// Percentage contribution to the parent category, 0-100.
    pub weight: f64,
    pub enabled: bool,
    #[serde(default)]
    pub description: String,
    /// What an analyst should look for when scoring this criterion.
    #[serde(default)]
    pub requirements: String,
    /// Qualitative signals that argue for a high score.
    #[serde(default)]
    pub positive_signals: Vec<String>,
    /// Qualitative signals that argue for a low score.
    #[serde(default)]
    pub negative_signals: Vec<String>,
}

/// A top-level scoring category owning an ordered list of subcategories.
/// Subcategory order matters for display only, never for scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Percentage contribution to the overall score, 0-100.
    pub weight: f64,
    pub enabled: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: String,
    #[serde(default)]
    pub subcategories: Vec<Subcategory>,
}

impl Category {
    pub fn subcategory(&self, id: &str) -> Option<&Subcategory> {
        self.subcategories.iter().find(|s| s.id == id)
    }

    pub fn subcategory_mut(&mut self, id: &str) -> Option<&mut Subcategory> {
        self.subcategories.iter_mut().find(|s| s.id == id)
    }

    pub fn enabled_subcategories(&self) -> impl Iterator<Item = &Subcategory> {
        self.subcategories.iter().filter(|s| s.enabled)
    }
}

/// The in-memory criteria configuration for one session: a two-level tree of
/// weighted categories and subcategories.
///
/// A tree is born valid from a template, mutated through the methods in
/// `tree::mutate` (which deliberately allow transiently invalid states while
/// the user is still adjusting), and checked with `validation::validate`
/// before being handed to persistence or aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriteriaTree {
    pub fund_type: FundType,
    pub categories: Vec<Category>,
}

impl CriteriaTree {
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn category_mut(&mut self, id: &str) -> Option<&mut Category> {
        self.categories.iter_mut().find(|c| c.id == id)
    }

    pub fn enabled_categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter().filter(|c| c.enabled)
    }

    /// Serialize for the persistence collaborator. Field names are stable
    /// across versions (`fund_type`, `categories`, `name`, `weight`, ...).
    ///
    /// # Errors
    ///
    /// Returns `CriteriaError::Malformed` if serialization fails.
    pub fn to_plain_object(&self) -> Result<serde_json::Value, CriteriaError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Reconstruct a tree previously produced by [`to_plain_object`].
    /// Unknown fields are ignored so older engines can read newer payloads.
    ///
    /// # Errors
    ///
    /// Returns `CriteriaError::Malformed` if required fields are missing or
    /// have the wrong shape.
    ///
    /// [`to_plain_object`]: CriteriaTree::to_plain_object
    pub fn from_plain_object(value: serde_json::Value) -> Result<Self, CriteriaError> {
        Ok(serde_json::from_value(value)?)
    }
}
