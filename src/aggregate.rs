use std::collections::HashMap;

use tracing::warn;

use crate::error::CriteriaError;
use crate::tree::CriteriaTree;
use crate::validation::validate;

/// Raw 0-100 evaluations for leaf criteria, keyed by
/// `(category_id, subcategory_id)`. Supplied by the analysis subsystem;
/// partial coverage is expected while analysis is still running.
pub type LeafScores = HashMap<(String, String), f64>;

/// Result of rolling leaf scores up through the weighted tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreSummary {
    /// Weighted score per enabled category, keyed by category id.
    pub category_scores: HashMap<String, f64>,
    /// The composite 0-100 deal score.
    pub overall_score: f64,
}

/// Roll externally supplied leaf scores up through subcategory and category
/// weights into one composite score.
///
/// Per enabled category: `score = Σ (sub_weight/100 · leaf_score)` over its
/// enabled subcategories. A category with no enabled subcategories scores 0
/// (coverage warning, not an error - it may simply have no scored leaves
/// yet), and a missing leaf score defaults to 0 with a gap warning. Overall:
/// `Σ (category_weight/100 · category_score)`. With weights valid and leaf
/// scores in [0,100], the result is in [0,100] by construction.
///
/// # Errors
///
/// Returns `CriteriaError::InvalidWeights` if the tree fails validation.
/// Refusing outright beats emitting a number inconsistent with the
/// configured rubric.
pub fn compute_score(tree: &CriteriaTree, leaf_scores: &LeafScores) -> Result<ScoreSummary, CriteriaError> {
    let report = validate(tree);
    if !report.is_valid() {
        return Err(CriteriaError::InvalidWeights {
            violations: report.violations.len(),
        });
    }

    let mut category_scores = HashMap::new();
    let mut overall_score = 0.0;

    for cat in tree.enabled_categories() {
        let mut enabled_subs = cat.enabled_subcategories().peekable();
        let category_score = if enabled_subs.peek().is_none() {
            warn!(category = %cat.id, "no enabled subcategories, category scores 0");
            0.0
        } else {
            enabled_subs
                .map(|sub| {
                    let key = (cat.id.clone(), sub.id.clone());
                    let leaf = match leaf_scores.get(&key) {
                        Some(score) => *score,
                        None => {
                            warn!(
                                category = %cat.id,
                                subcategory = %sub.id,
                                "missing leaf score, defaulting to 0"
                            );
                            0.0
                        }
                    };
                    sub.weight / 100.0 * leaf
                })
                .sum()
        };

        overall_score += cat.weight / 100.0 * category_score;
        category_scores.insert(cat.id.clone(), category_score);
    }

    Ok(ScoreSummary {
        category_scores,
        overall_score,
    })
}
